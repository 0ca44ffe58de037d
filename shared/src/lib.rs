//! Shared types for the Taskdeck UI and host binary
//!
//! This crate contains the types that cross the crate boundary:
//! - The to-do data model and its submission validation
//! - GraphQL wire envelope and operation response shapes
//! - The runtime configuration document served to the UI

pub mod config;
pub mod graphql;
pub mod model;

pub use config::*;
pub use graphql::*;
pub use model::*;
