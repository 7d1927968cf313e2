//! Toast Notification Component
//!
//! Shows success, error and info messages from the controller's queue.

use leptos::*;

use carbon_control::NotificationLevel;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed top-4 right-4 z-50 space-y-2">
            {move || {
                let state = state.clone();
                state.toasts.get()
                    .into_iter()
                    .map(|toast| {
                        let state = state.clone();
                        let id = toast.id;
                        view! {
                            <ToastMessage
                                message=toast.message
                                level=toast.level
                                on_dismiss=move || state.dismiss(id)
                            />
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn ToastMessage<F>(
    #[prop(into)]
    message: String,
    level: NotificationLevel,
    on_dismiss: F,
) -> impl IntoView
where
    F: Fn() + 'static,
{
    let (icon, bg_class) = match level {
        NotificationLevel::Success => ("✓", "bg-green-600"),
        NotificationLevel::Error => ("✕", "bg-red-600"),
        NotificationLevel::Info => ("ℹ", "bg-blue-600"),
    };

    view! {
        <div
            on:click=move |_| on_dismiss()
            class=format!(
                "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
                 cursor-pointer transform transition-all duration-300 ease-out animate-slide-in",
                bg_class
            )
        >
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}
