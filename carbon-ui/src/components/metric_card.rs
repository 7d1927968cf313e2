//! Metric Card Component
//!
//! Headline cards for the overview and KPI cards for the industry view.

use leptos::*;

use carbon_control::dashboard::StatCard;
use carbon_control::industry::KpiMetric;

/// Overview headline card
#[component]
pub fn MetricCard(card: StatCard, icon: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg p-4 border border-green-100 hover:border-green-200 hover:shadow-md transition-all">
            <div class="flex items-center justify-between">
                <span class="text-sm font-medium text-green-800">{card.title}</span>
                <span class="text-green-600">{icon}</span>
            </div>
            <div class="text-2xl font-bold text-green-800 mt-2">{card.value}</div>
            <p class="text-xs text-green-600">{card.caption}</p>
            <div class="text-xs text-green-600 font-medium mt-2">{card.footer}</div>
        </div>
    }
}

/// Industry KPI card with trend arrow
#[component]
pub fn KpiCard(metric: KpiMetric) -> impl IntoView {
    let arrow = if metric.is_rising() { "↑" } else { "↓" };

    view! {
        <div class="bg-white rounded-lg p-4 border border-green-100 hover:border-green-200 hover:shadow-md transition-all">
            <div class="text-sm font-medium text-green-800">{metric.name}</div>
            <div class="text-2xl font-bold text-green-800 mt-2">
                {metric.value}
                <span class="text-sm font-normal text-green-600 ml-1">{metric.unit}</span>
            </div>
            <div class="flex items-center gap-1 mt-2 text-xs text-green-600 font-medium">
                <span>{arrow}</span>
                <span>{metric.trend_label()}</span>
            </div>
        </div>
    }
}
