//! Landing Page
//!
//! Public marketing page: hero, animated stats, features, industries,
//! benefits and calls to action.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use carbon_control::landing::{
    CallToAction, Stat, StatCounter, BENEFITS, FEATURES, GET_STARTED, SHOWCASED_INDUSTRIES,
    SIGN_IN, START_FREE_TRIAL, START_JOURNEY, STATS, TRACK_EMISSION, TRUST_BADGES,
};
use gloo_timers::callback::Interval;

use crate::state::global::GlobalState;

/// Count-up refresh interval, roughly one frame
const FRAME_MS: u32 = 16;

#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-green-50 via-blue-50 to-white">
            // Navigation
            <nav class="bg-white/80 border-b border-green-100 backdrop-blur-md sticky top-0 z-40">
                <div class="max-w-7xl mx-auto px-4 flex justify-between items-center h-20">
                    <div class="flex items-center gap-3">
                        <div class="w-10 h-10 bg-green-600 rounded-xl flex items-center justify-center">
                            <span class="text-white text-lg">"🌱"</span>
                        </div>
                        <div>
                            <div class="font-bold text-2xl text-gray-900">"Carbon Control"</div>
                            <div class="text-sm text-gray-600 hidden sm:block">"Emission Management Platform"</div>
                        </div>
                    </div>
                    <div class="flex items-center gap-3">
                        <CtaButton cta=SIGN_IN button_class="px-4 py-2 text-gray-800" />
                        <CtaButton
                            cta=GET_STARTED
                            button_class="px-4 py-2 rounded-lg bg-green-600 hover:bg-green-700 text-white"
                        />
                    </div>
                </div>
            </nav>

            // Hero
            <section class="py-16 px-4 text-center">
                <span class="inline-block mb-4 px-3 py-1 rounded-full bg-green-100 text-green-800 text-sm">
                    "Going Green for a Better Tomorrow !!"
                </span>
                <h1 class="text-4xl md:text-6xl font-bold text-gray-900 mb-6">
                    "Take Control of Your"
                    <span class="text-green-600 block">"Carbon Footprint"</span>
                </h1>
                <p class="text-lg text-gray-600 max-w-3xl mx-auto mb-8">
                    "The most comprehensive carbon emission tracking and reduction platform. \
                     Monitor, analyze, and reduce your environmental impact with industry-specific \
                     insights and AI-powered recommendations."
                </p>
                <CtaButton
                    cta=TRACK_EMISSION
                    button_class="px-8 py-3 rounded-lg bg-green-600 hover:bg-green-700 text-white text-lg"
                />

                // Stats
                <div class="grid grid-cols-2 md:grid-cols-4 gap-8 max-w-5xl mx-auto mt-16">
                    {STATS.iter().map(|stat| view! { <StatTile stat=*stat /> }).collect_view()}
                </div>
            </section>

            // Features
            <section id="features" class="py-16 bg-white">
                <div class="max-w-7xl mx-auto px-4">
                    <h2 class="text-3xl font-bold text-gray-900 text-center mb-12">
                        "Powerful Features for Every Industry"
                    </h2>
                    <div class="grid md:grid-cols-3 gap-8 mb-12">
                        {FEATURES.iter().map(|feature| view! {
                            <div class="rounded-lg shadow-lg p-6 bg-white">
                                <div class="text-3xl mb-4">{feature.icon}</div>
                                <h3 class="text-xl text-gray-900 font-semibold mb-2">{feature.title}</h3>
                                <p class="text-gray-600">{feature.description}</p>
                            </div>
                        }).collect_view()}
                    </div>
                    <div class="flex flex-wrap justify-center gap-6">
                        {TRUST_BADGES.iter().map(|badge| view! {
                            <div class="flex-1 min-w-[200px] max-w-xs text-center p-6 rounded-lg bg-gray-50">
                                <div class="text-2xl mb-3">{badge.icon}</div>
                                <h4 class="font-semibold mb-2 text-gray-900">{badge.title}</h4>
                                <p class="text-sm text-gray-600">{badge.description}</p>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Industries
            <section id="industries" class="py-16">
                <div class="max-w-7xl mx-auto px-4">
                    <h2 class="text-3xl font-bold text-gray-900 text-center mb-12">
                        "Tailored Solutions for Your Industry"
                    </h2>
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                        {SHOWCASED_INDUSTRIES.iter().map(|industry| view! {
                            <div class="rounded-lg bg-white shadow p-6">
                                <div class="flex items-center gap-2 mb-2">
                                    <span class="text-2xl">{industry.icon}</span>
                                    <h3 class="font-semibold">{industry.name}</h3>
                                </div>
                                <p class="text-gray-600 text-sm">{industry.description}</p>
                                {industry.link.map(|href| view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="inline-block mt-3 text-green-700 text-sm font-medium"
                                    >
                                        "Learn more →"
                                    </a>
                                })}
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Benefits
            <section id="benefits" class="py-16 bg-white">
                <div class="max-w-3xl mx-auto px-4">
                    <h2 class="text-3xl font-bold text-gray-900 mb-6">"Why Choose Carbon Control?"</h2>
                    <div class="space-y-4">
                        {BENEFITS.iter().map(|benefit| view! {
                            <div class="flex items-center gap-3">
                                <span class="text-green-600">"✔"</span>
                                <span class="text-gray-700">{*benefit}</span>
                            </div>
                        }).collect_view()}
                    </div>
                    <CtaButton
                        cta=START_JOURNEY
                        button_class="mt-8 px-6 py-3 rounded-lg bg-green-600 hover:bg-green-700 text-white"
                    />
                </div>
            </section>

            // Call to action
            <section id="pricing" class="py-16 bg-gradient-to-r from-green-600 to-blue-600 text-center">
                <h2 class="text-3xl font-bold text-white mb-6">"Ready to Reduce Your Carbon Footprint?"</h2>
                <p class="text-lg text-green-100 mb-8">
                    "Join thousands of companies already making a difference. \
                     Start your free trial today and see the impact in 30 days."
                </p>
                <CtaButton
                    cta=START_FREE_TRIAL
                    button_class="px-8 py-3 rounded-lg bg-white text-green-600 text-lg"
                />
            </section>

            <footer class="bg-gray-900 text-gray-400 py-8 text-center text-sm">
                "© 2024 Carbon Control. All rights reserved."
            </footer>
        </div>
    }
}

/// Button that fires its call-to-action's navigation event
#[component]
fn CtaButton(cta: CallToAction, button_class: &'static str) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <button on:click=move |_| state.dispatch(cta.event) class=button_class>
            {cta.label}
        </button>
    }
}

/// Headline stat that counts up from zero when mounted
#[component]
fn StatTile(stat: Stat) -> impl IntoView {
    let counter = StatCounter::new(&stat);
    let (text, set_text) = create_signal(counter.frame(0.0));

    let timer: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let started = js_sys::Date::now();

    let handle = timer.clone();
    let interval = Interval::new(FRAME_MS, move || {
        let elapsed = (js_sys::Date::now() - started).max(0.0);
        let tick = counter.tick(Duration::from_millis(elapsed as u64));

        if text.get_untracked() != tick.text {
            set_text.set(tick.text);
        }
        if tick.finished {
            // Dropped outside its own callback
            if let Some(done) = handle.borrow_mut().take() {
                spawn_local(async move { drop(done) });
            }
        }
    });
    timer.borrow_mut().replace(interval);

    on_cleanup(move || {
        timer.borrow_mut().take();
    });

    view! {
        <div class="text-center">
            <div class="text-3xl md:text-4xl font-bold text-gray-900">{text}</div>
            <div class="text-gray-600">{stat.label}</div>
            <div class="text-sm text-gray-500">{stat.unit}</div>
        </div>
    }
}
