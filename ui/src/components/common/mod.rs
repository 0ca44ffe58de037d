//! Shared UI components

mod icons;

pub use icons::*;
