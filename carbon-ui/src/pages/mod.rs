//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod industry_metrics;
pub mod landing;
pub mod live_demo;
pub mod login;
pub mod overview;
pub mod signup;

pub use dashboard::Dashboard;
pub use landing::Landing;
pub use live_demo::LiveDemo;
pub use login::Login;
pub use signup::Signup;
