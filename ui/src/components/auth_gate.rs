//! Sign-in gate
//!
//! Renders its children only when a session exists (or the deployment has
//! no hosted auth configured); otherwise shows the panel that redirects to
//! the hosted sign-in page.

use leptos::*;

use crate::components::common::LockIcon;
use crate::state::AppState;

#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<AppState>();
    let ready = state.ready;
    let auth = state.auth;
    let session = state.session;

    view! {
        {move || {
            if !ready.get() {
                view! { <BootSplash /> }.into_view()
            } else if auth.get().is_some() && session.get().is_none() {
                view! { <SignInPanel /> }.into_view()
            } else {
                children().into_view()
            }
        }}
    }
}

/// Shown while configuration and session are being resolved
#[component]
fn BootSplash() -> impl IntoView {
    view! {
        <div class="h-screen flex items-center justify-center bg-theme-bg">
            <div class="animate-spin w-8 h-8 border-4 border-theme-border border-t-transparent rounded-full" />
        </div>
    }
}

/// Redirect entry point to the hosted sign-in page
#[component]
fn SignInPanel() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="h-screen flex items-center justify-center bg-theme-bg">
            <div class="text-center p-8 bg-theme-surface rounded-xl border border-theme-border max-w-sm">
                <div class="w-16 h-16 rounded-full bg-theme-surface-hover flex items-center justify-center mx-auto mb-4">
                    <LockIcon class="w-8 h-8 text-theme-secondary" />
                </div>
                <h2 class="text-xl font-semibold text-theme mb-2">"Sign in to Taskdeck"</h2>
                <p class="text-sm text-theme-secondary mb-6">
                    "You will be redirected to the hosted sign-in page."
                </p>
                <button
                    class="px-4 py-2 bg-accent hover:bg-accent-hover text-white font-medium rounded-lg transition-colors"
                    on:click=move |_| state.sign_in()
                >
                    "Sign in"
                </button>
            </div>
        </div>
    }
}
