//! Carbon Control Dashboard
//!
//! Carbon emission management front end built with Leptos (WASM).
//!
//! # Features
//!
//! - Landing page with animated headline stats
//! - Mock login and signup with simulated latency
//! - Industry-aware dashboard with overview and metrics views
//! - Public live demo
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All navigation and session state lives in the
//! `carbon_control::Controller`; this crate mirrors it into signals and
//! renders it.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
