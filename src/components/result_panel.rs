use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{Component, Palette};
use crate::action::Action;
use crate::api::icon_url;
use crate::conditions::{WeatherCondition, condition_emoji};
use crate::state::WeatherResult;

/// Current conditions for the last successful lookup
#[derive(Default)]
pub struct ResultPanel;

pub struct ResultPanelProps<'a> {
    pub weather: &'a WeatherResult,
    pub palette: Palette,
}

/// Rows used by everything except the big temperature
const FIXED_ROWS: u16 = 7;
/// terminus(6), miniwi(4), plain(1)
const TEMP_MAX_ROWS: u16 = 6;

pub fn temperature_line(weather: &WeatherResult) -> String {
    format!("Temperature: {}°C", weather.temperature)
}

pub fn condition_line(weather: &WeatherResult) -> String {
    format!("Weather: {}", weather.condition)
}

pub fn humidity_line(weather: &WeatherResult) -> String {
    format!("Humidity: {}%", weather.humidity)
}

pub fn wind_line(weather: &WeatherResult) -> String {
    format!("Wind Speed: {} m/s", weather.wind_speed)
}

impl Component<Action> for ResultPanel {
    type Props<'a> = ResultPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let weather = props.weather;
        let palette = props.palette;
        let temp_rows = area.height.saturating_sub(FIXED_ROWS).min(TEMP_MAX_ROWS);

        let chunks = Layout::vertical([
            Constraint::Length(1),         // City, country
            Constraint::Length(1),         // Icon
            Constraint::Length(temp_rows), // Big temperature
            Constraint::Length(1),         // Temperature
            Constraint::Length(1),         // Condition
            Constraint::Length(1),         // Humidity
            Constraint::Length(1),         // Wind
            Constraint::Length(1),         // Icon URL
        ])
        .split(area);

        let heading = Line::from(Span::styled(
            weather.location_label(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ))
        .centered();
        frame.render_widget(Paragraph::new(heading), chunks[0]);

        let condition = WeatherCondition::from_icon(&weather.icon);
        let icon = Line::from(Span::styled(
            condition_emoji(&weather.icon),
            Style::default().fg(condition.tint()),
        ))
        .centered();
        frame.render_widget(Paragraph::new(icon), chunks[1]);

        if temp_rows > 0 {
            let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
                .with_plain_fallback()
                .with_alignment(ArtAlignment::Center)
                .with_fill(temperature_gradient(weather.temperature));
            let big = format!("{:.0}°", weather.temperature);
            frame.render_widget(ArtBox::new(&renderer, &big), chunks[2]);
        }

        let details = [
            temperature_line(weather),
            condition_line(weather),
            humidity_line(weather),
            wind_line(weather),
        ];
        for (line, chunk) in details.into_iter().zip(chunks[3..7].iter()) {
            let line = Line::from(Span::styled(line, Style::default().fg(palette.text))).centered();
            frame.render_widget(Paragraph::new(line), *chunk);
        }

        let url = Line::from(Span::styled(
            icon_url(&weather.icon),
            Style::default().fg(palette.muted),
        ))
        .centered();
        frame.render_widget(Paragraph::new(url), chunks[7]);
    }
}

fn temperature_gradient(celsius: f32) -> Fill {
    let (start, end) = match celsius {
        t if t < 0.0 => (
            ArtColor::rgb(150, 200, 255),
            ArtColor::rgb(200, 230, 255),
        ),
        t if t < 15.0 => (
            ArtColor::rgb(100, 180, 255),
            ArtColor::rgb(150, 220, 200),
        ),
        t if t < 25.0 => (
            ArtColor::rgb(100, 200, 150),
            ArtColor::rgb(255, 220, 100),
        ),
        t if t < 35.0 => (
            ArtColor::rgb(255, 180, 80),
            ArtColor::rgb(255, 120, 80),
        ),
        _ => (
            ArtColor::rgb(255, 100, 80),
            ArtColor::rgb(255, 60, 60),
        ),
    };
    Fill::Linear(LinearGradient::horizontal(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::*;

    fn rainy() -> WeatherResult {
        WeatherResult {
            name: "Bergen".into(),
            country: "NO".into(),
            temperature: 9.5,
            condition: "Rain".into(),
            icon: "10d".into(),
            humidity: 93,
            wind_speed: 6.2,
        }
    }

    #[test]
    fn test_detail_lines() {
        let weather = rainy();
        assert_eq!(temperature_line(&weather), "Temperature: 9.5°C");
        assert_eq!(condition_line(&weather), "Weather: Rain");
        assert_eq!(humidity_line(&weather), "Humidity: 93%");
        assert_eq!(wind_line(&weather), "Wind Speed: 6.2 m/s");
    }

    #[test]
    fn test_render_all_fields() {
        let mut render = RenderHarness::new(70, 16);
        let weather = rainy();

        let output = render.render_to_string_plain(|frame| {
            let props = ResultPanelProps {
                weather: &weather,
                palette: Palette::for_theme(Default::default()),
            };
            ResultPanel.render(frame, frame.area(), props);
        });

        assert!(output.contains("Bergen, NO"));
        assert!(output.contains("Humidity: 93%"));
        assert!(output.contains("Wind Speed: 6.2 m/s"));
        assert!(output.contains("10d@2x.png"));
    }
}
