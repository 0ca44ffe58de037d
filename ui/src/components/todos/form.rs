//! Creation form
//!
//! Two text fields and a create button. Submission is guarded by the
//! non-empty invariant; a valid submit appends the entry optimistically
//! and issues exactly one create mutation. Failures are only logged.

use leptos::*;

use crate::components::common::PlusIcon;
use crate::state::AppState;

#[component]
pub fn TodoForm() -> impl IntoView {
    let state = expect_context::<AppState>();
    let draft = state.draft;

    let on_create = move |_| {
        // Empty fields: no state change, no remote call
        let Some(input) = state.submit_draft() else {
            return;
        };

        let state = state.clone();
        spawn_local(async move {
            match state.create_todo(input).await {
                Ok(todo) => tracing::debug!(id = ?todo.id, "todo created"),
                Err(e) => tracing::error!("error creating todo: {e}"),
            }
        });
    };

    view! {
        <div class="space-y-3">
            <input
                type="text"
                class="w-full px-3 py-2 rounded-lg bg-theme-bg border border-theme-border text-theme text-sm \
                       placeholder-theme-muted focus:outline-none focus:ring-2 focus:ring-accent"
                placeholder="Name"
                prop:value=move || draft.get().name
                on:input=move |e| draft.update(|d| d.name = event_target_value(&e))
            />
            <input
                type="text"
                class="w-full px-3 py-2 rounded-lg bg-theme-bg border border-theme-border text-theme text-sm \
                       placeholder-theme-muted focus:outline-none focus:ring-2 focus:ring-accent"
                placeholder="Description"
                prop:value=move || draft.get().description
                on:input=move |e| draft.update(|d| d.description = event_target_value(&e))
            />
            <button
                class="flex items-center gap-2 px-4 py-2 bg-accent hover:bg-accent-hover \
                       text-white font-medium rounded-lg transition-colors"
                on:click=on_create
            >
                <PlusIcon class="w-4 h-4" />
                "Create Todo"
            </button>
        </div>
    }
}
