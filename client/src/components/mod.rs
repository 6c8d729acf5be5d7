//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard panels and dialogs while reading/writing
//! shared state from Leptos context providers.

pub mod archive_panel;
pub mod growth_chart;
pub mod history_table;
pub mod rejection_modal;
pub mod requests_table;
pub mod stats_strip;
pub mod tab_bar;
pub mod toolbar;
pub mod users_table;
