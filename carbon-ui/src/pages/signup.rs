//! Signup Page

use leptos::*;

use carbon_control::{NavEvent, SignupForm};

use crate::components::SubmitButton;
use crate::state::global::GlobalState;

/// Account creation form with the industry dropdown
#[component]
pub fn Signup() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let form = create_rw_signal(SignupForm::new());

    let submit_state = state.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        match form.get_untracked().submit() {
            Ok(request) => {
                let state = submit_state.clone();
                spawn_local(async move {
                    state.signup(request).await;
                });
            }
            Err(e) => submit_state.show_error(&e.to_string()),
        }
    };

    let back_state = state.clone();
    let login_state = state.clone();
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

                <h1 class="text-2xl font-bold text-gray-900">"Create Account"</h1>
                <p class="text-gray-600 mb-6">"Start tracking your carbon emissions today"</p>

                <form on:submit=on_submit class="space-y-4">
                    <label class="block">
                        <span class="text-sm font-medium text-gray-700">"Full Name"</span>
                        <input
                            type="text"
                            required=true
                            placeholder="Enter your full name"
                            class="mt-1 w-full rounded-lg border border-gray-300 px-3 py-2"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.set_name(event_target_value(&ev)))
                        />
                    </label>

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
                            placeholder="Create a password"
                            class="mt-1 w-full rounded-lg border border-gray-300 px-3 py-2"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                        />
                    </label>

                    <IndustryDropdown form=form />

                    <SubmitButton label="Create Account" busy_label="Creating account..." busy=busy />
                </form>

                <p class="text-sm text-gray-600 text-center mt-6">
                    "Already have an account? "
                    <button
                        on:click=move |_| login_state.dispatch(NavEvent::GoToLogin)
                        class="text-green-700 font-medium hover:underline"
                    >
                        "Sign in"
                    </button>
                </p>
            </div>
        </div>
    }
}

/// Custom dropdown listing every industry
#[component]
fn IndustryDropdown(form: RwSignal<SignupForm>) -> impl IntoView {
    view! {
        <div class="relative">
            <span class="text-sm font-medium text-gray-700">"Industry"</span>
            <button
                type="button"
                on:click=move |_| form.update(|f| f.toggle_dropdown())
                class="mt-1 w-full flex justify-between items-center rounded-lg border border-gray-300 px-3 py-2 text-left"
            >
                <span>{move || form.with(|f| f.industry_label())}</span>
                <span class="text-gray-400">"▾"</span>
            </button>

            <Show when=move || form.with(|f| f.dropdown_open)>
                <ul class="absolute z-10 mt-1 w-full bg-white border border-gray-200 rounded-lg shadow-lg max-h-60 overflow-auto">
                    {form.with_untracked(|f| f.industry_options())
                        .iter()
                        .map(|industry| {
                            let industry = *industry;
                            view! {
                                <li
                                    on:click=move |_| form.update(|f| f.select_industry(industry))
                                    class="px-3 py-2 hover:bg-green-50 cursor-pointer flex items-center gap-2"
                                >
                                    <span>{industry.icon()}</span>
                                    <span>{industry.label()}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}
