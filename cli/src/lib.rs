//! Taskdeck host binary library
//!
//! Serves the built UI assets, exposes the runtime configuration document,
//! and proxies GraphQL traffic to the managed backend. There is no storage
//! or schema here; the backend stays external.

pub mod server;
