//! Dashboard Page
//!
//! Sidebar layout around the overview or industry metrics view.

use leptos::*;

use carbon_control::dashboard::{content_for, page_title, welcome_line};
use carbon_control::ContentView;

use super::industry_metrics::IndustryMetrics;
use super::overview::Overview;
use crate::components::Sidebar;
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="flex min-h-screen bg-green-50/40">
            <Sidebar />

            <main class="flex-1 px-8 py-6">
                {move || {
                    let model = state.model.get();
                    let Some(session) = model.session else {
                        return view! {}.into_view();
                    };

                    let content = match content_for(model.section) {
                        ContentView::Overview => view! { <Overview session=session.clone() /> }.into_view(),
                        ContentView::IndustryMetrics => {
                            view! { <IndustryMetrics session=session.clone() /> }.into_view()
                        }
                    };

                    view! {
                        <div class="space-y-6">
                            // Page header
                            <div>
                                <h1 class="text-2xl font-bold text-green-800">
                                    {page_title(model.section, session.industry)}
                                </h1>
                                <p class="text-green-600 mt-1">{welcome_line(&session)}</p>
                            </div>

                            {content}
                        </div>
                    }.into_view()
                }}
            </main>
        </div>
    }
}
