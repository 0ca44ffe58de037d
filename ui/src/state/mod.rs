//! Global state management
//!
//! One [`AppState`] is provided via context at the root. Everything in it
//! is a signal so components stay in sync; the remote operations live here
//! as thin async wrappers around the client.

use gloo_storage::{LocalStorage, Storage};
use leptos::*;
use serde::{Deserialize, Serialize};
use taskdeck_shared::{AppConfig, CreateTodoInput, HostedAuthConfig, Todo};
use uuid::Uuid;

use crate::client::{
    auth::{self, Session},
    ClientError, GraphQlClient, TodoBackend,
};

const PREFS_STORAGE_KEY: &str = "taskdeck.ui";

/// Color mode selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ColorMode {
    pub const ALL: [ColorMode; 3] = [ColorMode::Light, ColorMode::Dark, ColorMode::System];

    /// Lowercase value, as shown in the "Current color mode" line
    pub fn label(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
            ColorMode::System => "system",
        }
    }

    /// Capitalized button caption
    pub fn title(&self) -> &'static str {
        match self {
            ColorMode::Light => "Light",
            ColorMode::Dark => "Dark",
            ColorMode::System => "System",
        }
    }
}

/// The in-progress creation form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoDraft {
    pub name: String,
    pub description: String,
}

impl TodoDraft {
    pub fn input(&self) -> CreateTodoInput {
        CreateTodoInput {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

/// A list entry with a client-side render key
///
/// Optimistic entries have no server id yet, so the list is keyed by a
/// local uuid; a refresh replaces all entries.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoEntry {
    pub local_key: String,
    pub todo: Todo,
}

impl TodoEntry {
    pub fn new(todo: Todo) -> Self {
        Self {
            local_key: Uuid::new_v4().to_string(),
            todo,
        }
    }
}

/// UI preferences persisted across reloads
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UiPreferences {
    #[serde(default)]
    pub color_mode: ColorMode,
}

pub fn load_ui_preferences() -> UiPreferences {
    LocalStorage::get(PREFS_STORAGE_KEY).unwrap_or_default()
}

pub fn save_ui_preferences(prefs: &UiPreferences) {
    if let Err(e) = LocalStorage::set(PREFS_STORAGE_KEY, prefs) {
        tracing::warn!("failed to save UI preferences: {e}");
    }
}

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Bootstrap finished (config fetched, session resolved)
    pub ready: RwSignal<bool>,

    /// Hosted auth settings; `None` means the sign-in gate is disabled
    pub auth: RwSignal<Option<HostedAuthConfig>>,

    /// Current signed-in session
    pub session: RwSignal<Option<Session>>,

    /// The visible to-do list
    pub todos: RwSignal<Vec<TodoEntry>>,

    /// Creation form state
    pub draft: RwSignal<TodoDraft>,

    /// Color mode selection
    pub color_mode: RwSignal<ColorMode>,

    /// List fetch in flight
    pub loading: RwSignal<bool>,

    /// The active client, set once configuration is known
    client: RwSignal<Option<GraphQlClient>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            ready: create_rw_signal(false),
            auth: create_rw_signal(None),
            session: create_rw_signal(None),
            todos: create_rw_signal(Vec::new()),
            draft: create_rw_signal(TodoDraft::default()),
            color_mode: create_rw_signal(ColorMode::default()),
            loading: create_rw_signal(false),
            client: create_rw_signal(None),
        }
    }

    /// Wire up the client from fetched configuration and resolved session
    pub fn configure(&self, config: &AppConfig, session: Option<Session>) {
        let client = GraphQlClient::new(&config.api, session.as_ref());
        self.auth.set(config.auth.clone());
        self.session.set(session);
        self.client.set(Some(client));
    }

    pub fn client(&self) -> Option<GraphQlClient> {
        self.client.get_untracked()
    }

    /// Fetch the list and replace the local entries with the result
    pub async fn load_todos(&self) -> Result<(), ClientError> {
        let client = self.client().ok_or(ClientError::NotConfigured)?;

        self.loading.set(true);
        let result = client.list_todos().await;
        self.loading.set(false);

        let items = result?;
        self.todos
            .set(items.into_iter().map(TodoEntry::new).collect());
        Ok(())
    }

    /// Validate the draft and, when submittable, apply the optimistic
    /// update: append to the visible list and reset the form.
    ///
    /// Returns the input for the create call, or `None` when either field
    /// is empty (in which case nothing changes and no call is made).
    pub fn submit_draft(&self) -> Option<CreateTodoInput> {
        let input = self.draft.get_untracked().input();
        input.validate().ok()?;

        self.todos
            .update(|todos| todos.push(TodoEntry::new(Todo::from(input.clone()))));
        self.draft.set(TodoDraft::default());
        Some(input)
    }

    /// Issue the create mutation; the returned record is not applied to
    /// the list (the optimistic entry stays as-is until the next fetch)
    pub async fn create_todo(&self, input: CreateTodoInput) -> Result<Todo, ClientError> {
        let client = self.client().ok_or(ClientError::NotConfigured)?;
        client.create_todo(&input).await
    }

    /// Redirect to the hosted sign-in page
    pub fn sign_in(&self) {
        if let Some(auth_config) = self.auth.get_untracked() {
            auth::redirect_to(&auth::sign_in_url(&auth_config));
        }
    }

    /// Clear the stored session and redirect to the hosted sign-out page
    pub fn sign_out(&self) {
        auth::clear_session();
        self.session.set(None);
        if let Some(auth_config) = self.auth.get_untracked() {
            auth::redirect_to(&auth::sign_out_url(&auth_config));
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_runtime(f: impl FnOnce()) {
        let runtime = create_runtime();
        f();
        runtime.dispose();
    }

    #[test]
    fn test_submit_with_empty_field_changes_nothing() {
        with_runtime(|| {
            let state = AppState::new();
            state.draft.set(TodoDraft {
                name: "garden".to_string(),
                description: String::new(),
            });

            assert!(state.submit_draft().is_none());
            assert!(state.todos.get_untracked().is_empty());
            // Draft is untouched so the user can keep typing
            assert_eq!(state.draft.get_untracked().name, "garden");
        });
    }

    #[test]
    fn test_submit_appends_optimistically_and_resets_draft() {
        with_runtime(|| {
            let state = AppState::new();
            state.draft.set(TodoDraft {
                name: "garden".to_string(),
                description: "water the plants".to_string(),
            });

            let input = state.submit_draft().expect("draft should be submittable");
            assert_eq!(input.name, "garden");
            assert_eq!(input.description, "water the plants");

            let todos = state.todos.get_untracked();
            assert_eq!(todos.len(), 1);
            assert_eq!(todos[0].todo.name, "garden");
            assert!(todos[0].todo.id.is_none());
            assert_eq!(state.draft.get_untracked(), TodoDraft::default());
        });
    }

    #[test]
    fn test_remote_calls_require_configuration() {
        with_runtime(|| {
            let state = AppState::new();
            let result = futures::executor::block_on(state.load_todos());
            assert!(matches!(result, Err(ClientError::NotConfigured)));
        });
    }

    #[test]
    fn test_color_mode_labels() {
        assert_eq!(ColorMode::Light.label(), "light");
        assert_eq!(ColorMode::Dark.label(), "dark");
        assert_eq!(ColorMode::System.label(), "system");
        assert_eq!(ColorMode::default(), ColorMode::System);
    }

    #[test]
    fn test_entries_have_distinct_render_keys() {
        let a = TodoEntry::new(Todo::from(CreateTodoInput {
            name: "a".to_string(),
            description: "a".to_string(),
        }));
        let b = TodoEntry::new(Todo::from(CreateTodoInput {
            name: "a".to_string(),
            description: "a".to_string(),
        }));
        assert_ne!(a.local_key, b.local_key);
    }
}
