//! Sidebar Component
//!
//! Dashboard navigation: brand, section links, user badge and logout.

use leptos::*;

use carbon_control::dashboard::{menu_items, MenuItem};
use carbon_control::Section;

use crate::state::global::GlobalState;

/// Dashboard sidebar
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let items_state = state.clone();
    let user_state = state.clone();
    let logout_state = state;

    view! {
        <aside class="w-64 bg-white border-r border-green-100 min-h-screen flex flex-col">
            // Logo and brand
            <div class="flex items-center gap-3 px-6 py-5 border-b border-green-100">
                <div class="w-10 h-10 bg-green-600 rounded-xl flex items-center justify-center">
                    <span class="text-white text-lg">"🌱"</span>
                </div>
                <div>
                    <div class="font-bold text-green-800">"Carbon Control"</div>
                    <div class="text-xs text-green-600">"Emission Management"</div>
                </div>
            </div>

            // Section links
            <nav class="flex-1 px-3 py-4 space-y-1">
                {move || {
                    let model = items_state.model.get();
                    let Some(session) = model.session else {
                        return view! {}.into_view();
                    };
                    menu_items(session.industry)
                        .into_iter()
                        .map(|item| view! {
                            <SidebarLink item=item active=model.section />
                        })
                        .collect_view()
                }}
            </nav>

            // Signed-in user
            <div class="px-4 py-4 border-t border-green-100">
                {move || user_state.model.get().session.map(|session| view! {
                    <div class="flex items-center gap-3 mb-3">
                        <div class="w-9 h-9 rounded-full bg-green-100 text-green-800 flex items-center justify-center text-sm font-semibold">
                            {session.initials()}
                        </div>
                        <div class="min-w-0">
                            <div class="text-sm font-medium text-green-800 truncate">{session.name.clone()}</div>
                            <div class="text-xs text-green-600 truncate">{session.email.clone()}</div>
                        </div>
                    </div>
                })}
                <button
                    on:click=move |_| logout_state.logout()
                    class="w-full px-4 py-2 rounded-lg text-sm text-green-800 hover:bg-green-50 transition-colors text-left"
                >
                    "↩ Logout"
                </button>
            </div>
        </aside>
    }
}

/// Individual section link
#[component]
fn SidebarLink(item: MenuItem, active: Section) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let section = item.section;

    let class = if section == active {
        "w-full flex items-center gap-3 px-4 py-2 rounded-lg bg-green-600 text-white transition-colors"
    } else {
        "w-full flex items-center gap-3 px-4 py-2 rounded-lg text-green-800 hover:bg-green-50 transition-colors"
    };

    view! {
        <button on:click=move |_| state.select_section(section) class=class>
            <span>{item.icon}</span>
            <span class="text-sm">{item.label}</span>
        </button>
    }
}
