//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use carbon_control::AppState;

use crate::components::Toast;
use crate::pages::{Dashboard, Landing, LiveDemo, Login, Signup};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-white text-gray-900">
                <Routes>
                    <Route path="/" view=Landing />
                    <Route path="/login" view=Login />
                    <Route path="/signup" view=Signup />
                    <Route path="/dashboard" view=Dashboard />
                    <Route path="/livedemo" view=LiveDemo />
                    <Route path="/*any" view=NotFound />
                </Routes>

                <LocationSync />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Keeps the URL on the path of the controller's current screen.
///
/// The controller decides what is shown; typing a URL or using the back
/// button cannot reach the dashboard without a session.
#[component]
fn LocationSync() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let location = use_location();
    let navigate = use_navigate();

    create_effect(move |_| {
        let screen: AppState = state.model.with(|model| model.state);
        let path = location.pathname.get();

        if path != screen.path() {
            navigate(screen.path(), NavigateOptions::default());
        }
    });
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
        </div>
    }
}
