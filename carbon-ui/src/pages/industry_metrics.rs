//! Industry Metrics Page

use leptos::*;

use carbon_control::industry::Impact;
use carbon_control::{IndustryMetricsView, Session};

use crate::components::{Chart, ChartSpec, KpiCard};

#[component]
pub fn IndustryMetrics(session: Session) -> impl IntoView {
    let view_data = IndustryMetricsView::for_session(&session);
    let spec = ChartSpec::from_industry(view_data.chart());

    let kpis = view_data
        .kpis()
        .iter()
        .cloned()
        .map(|metric| view! { <KpiCard metric=metric /> })
        .collect_view();

    let opportunities = view_data
        .opportunities()
        .iter()
        .map(|opportunity| {
            let (box_class, badge_class) = match opportunity.impact {
                Impact::High => ("bg-green-50 border-green-100 text-green-800", "bg-green-100 text-green-800"),
                Impact::Medium => ("bg-blue-50 border-blue-100 text-blue-800", "bg-blue-100 text-blue-800"),
            };
            view! {
                <div class=format!("flex items-start gap-3 p-3 rounded-lg border {}", box_class)>
                    <span class="mt-0.5">{opportunity.icon}</span>
                    <div>
                        <h3 class="text-sm font-medium">{opportunity.title}</h3>
                        <p class="text-xs mt-1">{opportunity.description}</p>
                    </div>
                    <span class=format!("ml-auto text-xs px-2 py-1 rounded {}", badge_class)>
                        {opportunity.impact.to_string()}
                    </span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-6">
            // Industry header
            <div class="flex items-center gap-3 pb-4 border-b border-green-100">
                <div class="w-12 h-12 bg-gradient-to-r from-green-600 to-green-500 rounded-lg flex items-center justify-center text-white text-xl">
                    {view_data.icon()}
                </div>
                <div>
                    <h2 class="text-xl font-semibold text-green-800">{view_data.heading()}</h2>
                    <p class="text-sm text-green-600">
                        "Industry-specific carbon emission tracking and optimization"
                    </p>
                </div>
            </div>

            // Key performance indicators
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                {kpis}
            </div>

            <section class="bg-white rounded-lg p-6 border border-green-100">
                <h2 class="text-lg font-semibold text-green-800">"Performance Trends"</h2>
                <p class="text-sm text-green-600 mb-4">{view_data.chart_caption()}</p>
                <Chart spec=spec height=350 />
            </section>

            <section class="bg-white rounded-lg p-6 border border-green-100">
                <h2 class="text-lg font-semibold text-green-800">"Emission Reduction Opportunities"</h2>
                <p class="text-sm text-green-600 mb-4">{view_data.opportunities_caption()}</p>
                <div class="space-y-4">{opportunities}</div>
            </section>
        </div>
    }
}
