//! Actions - every user and network event the dashboard reacts to

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::api::FetchError;
use crate::state::WeatherResult;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Query category =====
    /// Input text changed (one keystroke)
    QueryChange(String),

    /// Submit the current query (Enter or the Search button)
    QuerySubmit,

    // ===== Weather category =====
    /// Intent: look up the given city (triggers async task)
    WeatherLookup(String),

    /// Result: provider returned conditions
    WeatherDidLoad(WeatherResult),

    /// Result: provider rejected the lookup, with its message if any
    WeatherDidFail(Option<String>),

    /// Result: network or parse failure (cause is for the log only)
    WeatherDidError(String),

    // ===== History category =====
    /// Highlight a history chip (by index)
    HistorySelect(usize),

    /// Look up a past city without touching the input
    HistoryReplay(String),

    // ===== Notice category =====
    /// Open the blocking notice
    NoticeShow(String),

    /// Close the blocking notice
    NoticeDismiss,

    // ===== UI category =====
    /// Switch between light and dark mode
    UiToggleTheme,

    /// Move keyboard focus between the input and the history chips
    UiFocusNext,

    /// Force a re-render (for cursor movement, etc.)
    Render,

    // ===== Uncategorized (global) =====
    /// Periodic tick for the loading spinner
    Tick,

    /// Exit the application
    Quit,
}

impl Action {
    /// Result action for a finished lookup task
    pub fn from_lookup(result: Result<WeatherResult, FetchError>) -> Self {
        match result {
            Ok(weather) => Action::WeatherDidLoad(weather),
            Err(FetchError::Provider { message, .. }) => Action::WeatherDidFail(message),
            Err(err) => Action::WeatherDidError(err.to_string()),
        }
    }
}
