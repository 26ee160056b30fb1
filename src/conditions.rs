//! Condition glyphs derived from OpenWeather icon identifiers
//!
//! Icon ids are a two digit group plus `d`/`n` for day or night
//! (`"01d"`, `"10n"`, ...). The terminal can't show the provider's PNG, so the
//! group picks a glyph and a tint instead.

use ratatui::style::Color;

/// Weather condition categories
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherCondition {
    ClearSky,
    FewClouds,
    Cloudy,
    ShowerRain,
    Rain,
    Thunderstorm,
    Snow,
    Mist,
    Unknown,
}

impl WeatherCondition {
    /// Map an icon id to its condition group
    pub fn from_icon(icon: &str) -> Self {
        match icon.get(..2) {
            Some("01") => WeatherCondition::ClearSky,
            Some("02") => WeatherCondition::FewClouds,
            Some("03") | Some("04") => WeatherCondition::Cloudy,
            Some("09") => WeatherCondition::ShowerRain,
            Some("10") => WeatherCondition::Rain,
            Some("11") => WeatherCondition::Thunderstorm,
            Some("13") => WeatherCondition::Snow,
            Some("50") => WeatherCondition::Mist,
            _ => WeatherCondition::Unknown,
        }
    }

    pub fn emoji(self, night: bool) -> &'static str {
        match self {
            WeatherCondition::ClearSky if night => "\u{1f319}",
            WeatherCondition::ClearSky => "\u{2600}\u{fe0f}",
            WeatherCondition::FewClouds => "\u{26c5}",
            WeatherCondition::Cloudy | WeatherCondition::Unknown => "\u{2601}\u{fe0f}",
            WeatherCondition::ShowerRain => "\u{1f326}\u{fe0f}",
            WeatherCondition::Rain => "\u{1f327}\u{fe0f}",
            WeatherCondition::Thunderstorm => "\u{26c8}\u{fe0f}",
            WeatherCondition::Snow => "\u{2744}\u{fe0f}",
            WeatherCondition::Mist => "\u{1f32b}\u{fe0f}",
        }
    }

    pub fn tint(self) -> Color {
        match self {
            WeatherCondition::ClearSky => Color::Yellow,
            WeatherCondition::FewClouds => Color::Rgb(230, 210, 140),
            WeatherCondition::Cloudy | WeatherCondition::Unknown => Color::Rgb(170, 170, 185),
            WeatherCondition::ShowerRain | WeatherCondition::Rain => Color::Rgb(100, 160, 255),
            WeatherCondition::Thunderstorm => Color::Rgb(200, 140, 255),
            WeatherCondition::Snow => Color::Rgb(200, 230, 255),
            WeatherCondition::Mist => Color::Rgb(150, 150, 160),
        }
    }
}

/// `true` for night icons (`"..n"`)
pub fn is_night(icon: &str) -> bool {
    icon.ends_with('n')
}

/// Glyph for an icon id
pub fn condition_emoji(icon: &str) -> &'static str {
    WeatherCondition::from_icon(icon).emoji(is_night(icon))
}
