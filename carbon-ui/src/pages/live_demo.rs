//! Live Demo Page
//!
//! Sample dashboard with national emission data, no account needed.

use leptos::*;

use carbon_control::live_demo::{COMPANIES, EXITS, KPIS, SECTORS, STATES};

use crate::components::{Chart, ChartSpec, Donut};
use crate::state::global::GlobalState;

const KPI_STYLES: [&str; 3] = [
    "bg-green-100 text-green-700",
    "bg-blue-100 text-blue-700",
    "bg-yellow-100 text-yellow-700",
];

#[component]
pub fn LiveDemo() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let sectors: Vec<_> = SECTORS
        .iter()
        .map(|s| (s.name.to_string(), s.value, s.color))
        .collect();

    view! {
        <div class="min-h-screen bg-gradient-to-br from-green-50 via-blue-50 to-white py-10 px-4">
            <div class="max-w-6xl mx-auto bg-white rounded-2xl shadow-xl p-8">
                <h1 class="text-3xl font-bold text-gray-900 text-center mb-8">"Live Emission Tracker"</h1>

                // KPIs
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-8">
                    {KPIS.iter().zip(KPI_STYLES).map(|(kpi, style)| view! {
                        <div class=format!("rounded-lg p-6 text-center {}", style)>
                            <div class="font-bold text-2xl">{kpi.value}</div>
                            <div class="text-sm text-gray-700">{kpi.label}</div>
                        </div>
                    }).collect_view()}
                </div>

                // Charts
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mb-8">
                    <section class="p-4 rounded-lg border border-gray-200">
                        <h2 class="text-lg font-semibold mb-4">"Sector-wise Carbon Emissions"</h2>
                        <Donut slices=sectors />
                    </section>
                    <section class="p-4 rounded-lg border border-gray-200">
                        <h2 class="text-lg font-semibold mb-4">"State-wise Major Contributors"</h2>
                        <Chart spec=ChartSpec::states(&STATES) height=400 />
                    </section>
                </div>

                // Company emissions table
                <div class="overflow-x-auto rounded-xl border border-gray-200 mb-8">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Company Name"</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Emissions (MtCO₂)"</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Emissions (MtSO₂)"</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Emissions (MtNO₂)"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200">
                            {COMPANIES.iter().map(|company| view! {
                                <tr class="hover:bg-gray-50">
                                    <td class="px-6 py-4 text-sm text-gray-900">{company.name}</td>
                                    <td class="px-6 py-4 text-sm font-medium text-green-700">{company.co2}</td>
                                    <td class="px-6 py-4 text-sm font-medium text-blue-700">{company.so2}</td>
                                    <td class="px-6 py-4 text-sm font-medium text-yellow-700">{company.no2}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>

                <p class="text-lg text-gray-700 text-center mb-4">
                    "Explore how your dashboard could look! Track emissions, manage projects, and collaborate with your team."
                </p>
                <div class="flex justify-center gap-4">
                    {EXITS.iter().enumerate().map(|(i, (label, event))| {
                        let state = state.clone();
                        let event = *event;
                        let class = if i == 0 {
                            "px-6 py-2 rounded-lg bg-green-600 hover:bg-green-700 text-white"
                        } else {
                            "px-6 py-2 rounded-lg border border-gray-300 text-gray-800"
                        };
                        view! {
                            <button on:click=move |_| state.dispatch(event) class=class>
                                {*label}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
