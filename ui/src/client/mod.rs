//! Backend client layer
//!
//! This module is the seam between the UI and the managed cloud service:
//!
//! - [`GraphQlClient`] issues the list query and create mutation against
//!   the configured GraphQL endpoint
//! - [`auth`] handles the hosted sign-in boundary (redirects, callback
//!   tokens, stored session)
//!
//! The [`TodoBackend`] trait exists so tests can substitute an in-memory
//! backend for the remote one.

pub mod auth;
mod graphql;

pub use auth::Session;
pub use graphql::GraphQlClient;

use async_trait::async_trait;
use taskdeck_shared::{CreateTodoInput, Todo};

/// Error types for backend client operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("client is not configured")]
    NotConfigured,

    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("GraphQL error: {0}")]
    GraphQl(String),
}

/// The two remote operations the UI issues
#[async_trait(?Send)]
pub trait TodoBackend {
    /// Fetch the full list of to-do items
    async fn list_todos(&self) -> Result<Vec<Todo>, ClientError>;

    /// Create a new item; returns the created record
    async fn create_todo(&self, input: &CreateTodoInput) -> Result<Todo, ClientError>;
}
