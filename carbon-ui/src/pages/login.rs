//! Login Page

use leptos::*;

use carbon_control::{LoginForm, NavEvent};

use crate::components::SubmitButton;
use crate::state::global::GlobalState;

/// Sign-in form
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let form = create_rw_signal(LoginForm::new());

    let submit_state = state.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        match form.get_untracked().submit() {
            Ok(request) => {
                let state = submit_state.clone();
                spawn_local(async move {
                    state.login(request).await;
                });
            }
            Err(e) => submit_state.show_error(&e.to_string()),
        }
    };

    let back_state = state.clone();
    let signup_state = state.clone();
    let busy = state.submitting;

    view! {
        <div class="min-h-screen bg-gradient-to-br from-green-50 via-blue-50 to-white flex items-center justify-center px-4">
            <div class="w-full max-w-md bg-white rounded-2xl shadow-xl p-8">
                <button
                    on:click=move |_| back_state.dispatch(NavEvent::BackToLanding)
                    class="text-sm text-green-700 hover:text-green-800 mb-6"
                >
                    "← Back to Home"
                </button>

                <h1 class="text-2xl font-bold text-gray-900">"Welcome Back"</h1>
                <p class="text-gray-600 mb-6">"Sign in to your Carbon Control account"</p>

                <form on:submit=on_submit class="space-y-4">
                    <label class="block">
                        <span class="text-sm font-medium text-gray-700">"Email"</span>
                        <input
                            type="email"
                            required=true
                            placeholder="Enter your email"
                            class="mt-1 w-full rounded-lg border border-gray-300 px-3 py-2"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                        />
                    </label>

                    <label class="block">
                        <span class="text-sm font-medium text-gray-700">"Password"</span>
                        <input
                            type="password"
                            required=true
                            placeholder="Enter your password"
                            class="mt-1 w-full rounded-lg border border-gray-300 px-3 py-2"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                        />
                    </label>

                    <SubmitButton label="Sign In" busy_label="Signing in..." busy=busy />
                </form>

                <p class="text-sm text-gray-600 text-center mt-6">
                    "Don't have an account? "
                    <button
                        on:click=move |_| signup_state.dispatch(NavEvent::GoToSignup)
                        class="text-green-700 font-medium hover:underline"
                    >
                        "Sign up"
                    </button>
                </p>
            </div>
        </div>
    }
}
