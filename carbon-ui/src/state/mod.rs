//! State Management
//!
//! Reactive mirror of the controller and the browser auth provider.

pub mod auth;
pub mod global;

pub use auth::BrowserAuthProvider;
pub use global::{provide_global_state, GlobalState};
