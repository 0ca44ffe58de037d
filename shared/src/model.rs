//! To-do data model
//!
//! The backend schema is managed externally; these types mirror the wire
//! shape it exposes (camelCase fields, server-assigned id and timestamps).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single to-do item as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Server-assigned identifier; absent on optimistic local entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    pub description: String,

    /// Server-assigned creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Server-assigned last-update time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input record for the create mutation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateTodoInput {
    pub name: String,
    pub description: String,
}

/// Why a draft cannot be submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("description must not be empty")]
    EmptyDescription,
}

impl CreateTodoInput {
    /// Check the submission invariant: both fields non-empty after trimming
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(())
    }
}

impl From<CreateTodoInput> for Todo {
    /// A pending local entry; id and timestamps arrive with the next list fetch
    fn from(input: CreateTodoInput) -> Self {
        Self {
            id: None,
            name: input.name,
            description: input.description,
            created_at: None,
            updated_at: None,
        }
    }
}
