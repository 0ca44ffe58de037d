//! Header component
//!
//! Greets the signed-in user and offers the sign-out action.

use leptos::*;

use crate::components::common::LogOutIcon;
use crate::state::AppState;

#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<AppState>();
    let session = state.session;
    let auth = state.auth;

    let greeting = move || {
        session
            .get()
            .map(|s| s.display_name)
            .unwrap_or_else(|| "there".to_string())
    };

    view! {
        <header class="flex items-center justify-between px-6 py-4 bg-theme-surface border-b border-theme-border">
            <h1 class="text-lg font-semibold text-theme">
                "Hello user " {greeting}
            </h1>
            <Show when=move || auth.get().is_some()>
                {
                    let state = state.clone();
                    view! {
                        <button
                            class="flex items-center gap-2 px-4 py-2 bg-theme-surface-hover hover:bg-theme-border \
                                   text-theme rounded-lg transition-colors"
                            on:click=move |_| state.sign_out()
                        >
                            <LogOutIcon class="w-4 h-4" />
                            "Sign out"
                        </button>
                    }
                }
            </Show>
        </header>
    }
}
