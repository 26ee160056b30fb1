//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::history::SearchHistory;

/// Current conditions for one resolved city, as reported by OpenWeather.
///
/// Always set wholesale from a successful response, never patched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherResult {
    /// City name as resolved by the provider (may differ from the query)
    pub name: String,
    /// ISO country code
    pub country: String,
    /// Degrees Celsius
    pub temperature: f32,
    /// Primary condition label ("Clouds", "Rain", ...)
    pub condition: String,
    /// Provider icon identifier ("04d", "10n", ...)
    pub icon: String,
    /// Relative humidity, percent
    pub humidity: u8,
    /// Metres per second
    pub wind_speed: f32,
}

impl WeatherResult {
    pub fn location_label(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}

/// Cosmetic color scheme
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label of the toggle control: names the mode it switches to
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }
}

/// Which part of the dashboard receives keys
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum Focus {
    #[default]
    Input,
    History,
}

/// Spinner frame rate for the loading indicator.
pub const SPINNER_TICK_MS: u64 = 80;
pub const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Text shown when the provider rejects a lookup without a message
pub const NOT_FOUND_FALLBACK: &str = "City not found!";
/// Text shown for network or parse failures
pub const TRANSPORT_ERROR_MESSAGE: &str = "Error fetching weather";

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, Default, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Session data (visible in debug) ---
    /// Text typed into the city input
    #[debug(section = "Search", label = "Query")]
    pub query: String,

    /// Last successful lookup; absent after any failure
    #[debug(section = "Weather", label = "Result", debug_fmt)]
    pub weather: Option<WeatherResult>,

    /// True strictly while one request is outstanding
    #[debug(section = "Weather", label = "Loading")]
    pub loading: bool,

    /// City of the outstanding request
    #[debug(section = "Weather", label = "Pending", debug_fmt)]
    pub pending_city: Option<String>,

    /// Recent successful lookups
    #[debug(section = "Search", label = "History", debug_fmt)]
    pub history: SearchHistory,

    #[debug(section = "UI", label = "Theme", debug_fmt)]
    pub theme: Theme,

    /// Open blocking notice, if any
    #[debug(section = "UI", label = "Notice", debug_fmt)]
    pub notice: Option<String>,

    // --- Navigation (skipped) ---
    #[debug(skip)]
    pub focus: Focus,

    /// Highlighted history chip
    #[debug(skip)]
    pub history_selected: usize,

    // --- Animation internals (skipped) ---
    #[debug(skip)]
    pub tick_count: u32,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.tick_count as usize % SPINNER_FRAMES.len()]
    }

    pub fn selected_history_city(&self) -> Option<&str> {
        self.history.get(self.history_selected)
    }
}
