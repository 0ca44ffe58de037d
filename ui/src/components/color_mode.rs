//! Color mode switch
//!
//! Exclusive toggle among light, dark, and system, plus the line showing
//! the current selection.

use leptos::*;

use crate::state::{AppState, ColorMode};

#[component]
pub fn ColorModeSwitch() -> impl IntoView {
    let state = expect_context::<AppState>();
    let color_mode = state.color_mode;

    view! {
        <section class="p-4 bg-theme-surface rounded-xl border border-theme-border space-y-3">
            <div class="inline-flex rounded-lg border border-theme-border overflow-hidden" role="group">
                {ColorMode::ALL
                    .into_iter()
                    .map(|mode| {
                        view! {
                            <button
                                class=move || {
                                    let base = "px-4 py-2 text-sm transition-colors";
                                    if color_mode.get() == mode {
                                        format!("{base} bg-theme-surface-hover text-theme font-medium")
                                    } else {
                                        format!("{base} text-theme-secondary hover:text-theme")
                                    }
                                }
                                on:click=move |_| color_mode.set(mode)
                            >
                                {mode.title()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <p class="text-sm text-theme-secondary">
                "Current color mode: " {move || color_mode.get().label()}
            </p>
        </section>
    }
}
