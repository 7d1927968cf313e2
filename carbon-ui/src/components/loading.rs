//! Loading Component
//!
//! Spinners shown while the auth provider is working.

use leptos::*;

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}

/// Submit button that swaps its label for a spinner while `busy`
#[component]
pub fn SubmitButton(
    label: &'static str,
    busy_label: &'static str,
    #[prop(into)]
    busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            disabled=move || busy.get()
            class="w-full bg-green-600 hover:bg-green-700 disabled:bg-gray-400
                   disabled:cursor-not-allowed rounded-lg py-3 font-semibold text-white
                   transition-colors flex items-center justify-center space-x-2"
        >
            {move || if busy.get() {
                view! {
                    <InlineLoading />
                    <span>{busy_label}</span>
                }.into_view()
            } else {
                view! { <span>{label}</span> }.into_view()
            }}
        </button>
    }
}
