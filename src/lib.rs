//! Weather Dashboard - city weather lookup TUI built on tui-dispatch
//!
//! The library exposes the dashboard's modules for the binary and tests.

pub mod action;
pub mod api;
pub mod components;
pub mod conditions;
pub mod effect;
pub mod history;
pub mod logging;
pub mod notify;
pub mod reducer;
pub mod state;
