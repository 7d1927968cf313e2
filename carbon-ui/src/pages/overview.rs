//! Overview Page
//!
//! Headline cards, emissions trend, source breakdown and industry
//! comparison.

use leptos::*;

use carbon_control::{OverviewData, Session};

use crate::components::{Chart, ChartSpec, Donut, MetricCard};
use crate::state::global::GlobalState;

const CARD_ICONS: [&str; 4] = ["🏭", "🎯", "⚡", "⚠"];

#[component]
pub fn Overview(session: Session) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let data = OverviewData::for_session(&session, &state.config().dashboard);

    let cards = data
        .cards()
        .into_iter()
        .zip(CARD_ICONS)
        .map(|(card, icon)| view! { <MetricCard card=card icon=icon /> })
        .collect_view();

    let trend = ChartSpec::emissions_trend(&data.monthly);
    let slices: Vec<_> = data
        .sources
        .iter()
        .map(|source| (source.name.to_string(), data.share(source), source.color))
        .collect();

    let (current_bar, average_bar, leader_bar) = data.comparison_bars();

    view! {
        <div class="space-y-6">
            // Key metrics
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                {cards}
            </div>

            // Charts
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <section class="lg:col-span-2 bg-white rounded-lg p-6 border border-green-100">
                    <h2 class="text-lg font-semibold text-green-800">"Emissions Trend"</h2>
                    <p class="text-sm text-green-600 mb-4">"Monthly CO2 emissions vs targets"</p>
                    <Chart spec=trend />
                </section>

                <section class="bg-white rounded-lg p-6 border border-green-100">
                    <h2 class="text-lg font-semibold text-green-800">"Emission Sources"</h2>
                    <p class="text-sm text-green-600 mb-4">"Breakdown by category"</p>
                    <Donut slices=slices />
                </section>
            </div>

            // Industry comparison
            <section class="bg-white rounded-lg p-6 border border-green-100">
                <h2 class="text-lg font-semibold text-green-800">"Industry Comparison"</h2>
                <p class="text-sm text-green-600 mb-4">"How your emissions compare to industry benchmarks"</p>

                <div class="flex flex-col space-y-4">
                    <ComparisonBar
                        label="Your Current Emissions"
                        tons=data.current_emissions
                        width=current_bar
                        bar_class="bg-gradient-to-r from-green-600 to-green-500"
                    />
                    <ComparisonBar
                        label="Industry Average"
                        tons=data.benchmark.average
                        width=average_bar
                        bar_class="bg-gradient-to-r from-amber-600 to-amber-500"
                    />
                    <ComparisonBar
                        label="Industry Leader"
                        tons=data.benchmark.leader
                        width=leader_bar
                        bar_class="bg-gradient-to-r from-blue-600 to-blue-500"
                    />
                </div>
            </section>
        </div>
    }
}

#[component]
fn ComparisonBar(label: &'static str, tons: f64, width: f64, bar_class: &'static str) -> impl IntoView {
    view! {
        <div>
            <div class="flex justify-between items-center mb-1 text-sm font-medium text-green-800">
                <span>{label}</span>
                <span>{format!("{} tons", tons)}</span>
            </div>
            <div class="w-full bg-gray-100 rounded-full h-2">
                <div
                    class=format!("{} h-2 rounded-full", bar_class)
                    style=format!("width: {:.1}%", width.min(100.0))
                />
            </div>
        </div>
    }
}
