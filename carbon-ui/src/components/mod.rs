//! UI Components
//!
//! Reusable Leptos components for the landing page and dashboard.

pub mod chart;
pub mod loading;
pub mod metric_card;
pub mod sidebar;
pub mod toast;

pub use chart::{Chart, ChartSpec, Donut};
pub use loading::SubmitButton;
pub use metric_card::{KpiCard, MetricCard};
pub use sidebar::Sidebar;
pub use toast::Toast;
