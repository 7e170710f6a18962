//! Shared client state provided via Leptos context.

pub mod ui;
