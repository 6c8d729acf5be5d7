//! Application state shared through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! Plain structs with pure transitions. Components wrap them in `RwSignal`s
//! and never mutate fields the transitions own.

pub mod auth;
pub mod chart;
pub mod records;
pub mod store;
pub mod ui;
