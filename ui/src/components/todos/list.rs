//! To-do list
//!
//! Renders the visible entries, an empty state, and a refresh action that
//! re-issues the list query. Fetch failures are only logged.

use leptos::*;

use crate::components::common::{ClipboardIcon, RefreshIcon};
use crate::state::{AppState, TodoEntry};

#[component]
pub fn TodoList() -> impl IntoView {
    let state = expect_context::<AppState>();
    let todos = state.todos;
    let loading = state.loading;

    let on_refresh = move |_| {
        let state = state.clone();
        spawn_local(async move {
            if let Err(e) = state.load_todos().await {
                tracing::error!("error fetching todos: {e}");
            }
        });
    };

    view! {
        <div class="space-y-3">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold text-theme">"Todos"</h2>
                <button
                    class="flex items-center gap-2 px-3 py-1.5 text-sm bg-theme-surface-hover hover:bg-theme-border \
                           text-theme rounded-lg transition-colors"
                    on:click=on_refresh
                >
                    <RefreshIcon class="w-4 h-4" />
                    "Refresh"
                </button>
            </div>

            <Show
                when=move || !loading.get()
                fallback=move || view! {
                    <div class="flex items-center justify-center py-12">
                        <div class="animate-spin w-8 h-8 border-4 border-accent border-t-transparent rounded-full" />
                    </div>
                }
            >
                <Show
                    when=move || !todos.get().is_empty()
                    fallback=move || view! { <EmptyState /> }
                >
                    <ul class="space-y-2">
                        <For
                            each=move || todos.get()
                            key=|entry| entry.local_key.clone()
                            children=move |entry: TodoEntry| view! { <TodoCard entry=entry /> }
                        />
                    </ul>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn TodoCard(entry: TodoEntry) -> impl IntoView {
    let created = entry
        .todo
        .created_at
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string());

    view! {
        <li class="p-4 bg-theme-surface rounded-xl border border-theme-border">
            <div class="flex items-start justify-between gap-4">
                <div class="min-w-0">
                    <p class="text-sm font-medium text-theme">{entry.todo.name}</p>
                    <p class="text-sm text-theme-secondary truncate">{entry.todo.description}</p>
                </div>
                {created.map(|ts| view! {
                    <span class="text-xs text-theme-muted whitespace-nowrap">{ts}</span>
                })}
            </div>
        </li>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 bg-theme-surface rounded-xl border border-theme-border">
            <div class="w-12 h-12 rounded-full bg-theme-surface-hover flex items-center justify-center mb-3">
                <ClipboardIcon class="w-6 h-6 text-theme-secondary" />
            </div>
            <p class="text-sm text-theme-secondary">"No todos yet. Create your first one above."</p>
        </div>
    }
}
