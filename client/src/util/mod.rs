//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod auth;
pub mod chart_math;
pub mod clock;
pub mod format;
pub mod schedule;
pub mod search;
pub mod storage;
pub mod synthetic;
