//! Root application component
//!
//! Sets up global state, the one-time bootstrap (configuration fetch,
//! session resolution, initial list fetch), and the color-mode effects.

use chrono::Utc;
use leptos::*;

use crate::client::auth::{self, Session};
use crate::components::{AuthGate, ColorModeSwitch, Header, TodoForm, TodoList};
use crate::config::{self, AppConfig};
use crate::state::{load_ui_preferences, save_ui_preferences, AppState, ColorMode, UiPreferences};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();
    provide_context(state.clone());

    // Restore UI preferences before the first paint
    state.color_mode.set(load_ui_preferences().color_mode);

    // One-time bootstrap: fetch config, resolve the session, load the list
    {
        let state = state.clone();
        create_effect(move |prev_run: Option<bool>| {
            if prev_run.is_some() {
                return true;
            }

            let state = state.clone();
            spawn_local(async move {
                let config = match config::fetch_config().await {
                    Ok(config) => config,
                    Err(e) => {
                        // Fall back to same-origin proxy defaults
                        tracing::error!("error loading config: {e}");
                        AppConfig::default()
                    }
                };

                let session = resolve_session(&config);
                let signed_in = session.is_some();
                state.configure(&config, session);
                state.ready.set(true);

                // Signed out behind a hosted-auth gate: nothing to fetch yet
                if config.auth.is_some() && !signed_in {
                    return;
                }

                if let Err(e) = state.load_todos().await {
                    tracing::error!("error fetching todos: {e}");
                }
            });

            true
        });
    }

    // Apply the color mode class to the html element
    {
        let color_mode = state.color_mode;
        create_effect(move |_| {
            apply_color_mode(color_mode.get());
        });
    }

    // Persist the color mode when it changes (skip the restore pass)
    {
        let color_mode = state.color_mode;
        create_effect(move |prev: Option<ColorMode>| {
            let mode = color_mode.get();
            if prev.is_some() && prev != Some(mode) {
                save_ui_preferences(&UiPreferences { color_mode: mode });
            }
            mode
        });
    }

    view! {
        <AuthGate>
            <div class="min-h-screen flex flex-col bg-theme-bg text-theme">
                <Header />
                <main class="flex-1 w-full max-w-3xl mx-auto p-6 space-y-6">
                    <ColorModeSwitch />
                    <section class="p-4 bg-theme-surface rounded-xl border border-theme-border space-y-4">
                        <TodoForm />
                        <TodoList />
                    </section>
                </main>
                <footer class="px-6 py-4 text-sm text-theme-muted border-t border-theme-border">
                    "Footer"
                </footer>
            </div>
        </AuthGate>
    }
}

/// Resolve the current session: callback tokens win, then the stored
/// session; deployments without hosted auth have no session at all.
fn resolve_session(config: &AppConfig) -> Option<Session> {
    config.auth.as_ref()?;

    if let Some(tokens) = auth::take_callback_tokens() {
        match Session::from_tokens(&tokens, Utc::now()) {
            Ok(session) => {
                auth::store_session(&session);
                return Some(session);
            }
            Err(e) => {
                tracing::error!("error consuming sign-in callback: {e}");
            }
        }
    }

    auth::load_session(Utc::now())
}

/// Mirror the selection onto the document element; `system` follows the
/// platform preference.
fn apply_color_mode(mode: ColorMode) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(html) = document.document_element() else {
        return;
    };

    let _ = html.class_list().remove_1("light");
    let _ = html.class_list().remove_1("dark");

    let class = match mode {
        ColorMode::Light => "light",
        ColorMode::Dark => "dark",
        ColorMode::System => {
            if prefers_dark() {
                "dark"
            } else {
                "light"
            }
        }
    };
    let _ = html.class_list().add_1(class);
}

fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}
