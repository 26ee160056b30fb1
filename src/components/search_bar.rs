use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::{Component, Palette};
use crate::action::Action;

pub const PLACEHOLDER: &str = "Enter city";
pub const BUTTON_LABEL: &str = "Search";

/// City input plus the Search button
pub struct SearchBar {
    input: TextInput,
    had_text: bool,
}

pub struct SearchBarProps<'a> {
    pub query: &'a str,
    pub is_focused: bool,
    pub palette: Palette,
    // Action constructors
    pub on_change: fn(String) -> Action,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
            had_text: false,
        }
    }
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// The reducer clears the query after a successful lookup; drop the
    /// cursor state along with it.
    fn sync(&mut self, query: &str) {
        if query.is_empty() && self.had_text {
            self.input = TextInput::new();
        }
        self.had_text = !query.is_empty();
    }

    fn input_style(palette: Palette) -> TextInputStyle {
        TextInputStyle {
            base: BaseStyle {
                border: None,
                padding: Padding::all(1),
                bg: Some(palette.input),
                fg: Some(palette.text),
            },
            placeholder_style: None,
            cursor_style: None,
        }
    }
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }
        self.sync(props.query);

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        if key.code == KeyCode::Enter {
            return vec![Action::QuerySubmit];
        }

        let input_props = TextInputProps {
            value: props.query,
            placeholder: PLACEHOLDER,
            is_focused: true,
            style: Self::input_style(props.palette),
            on_change: props.on_change,
            on_submit: |_| Action::QuerySubmit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.sync(props.query);

        let chunks = Layout::horizontal([
            Constraint::Min(10),   // Input
            Constraint::Length(1), // Gap
            Constraint::Length(BUTTON_LABEL.len() as u16 + 4),
        ])
        .split(area);

        let input_props = TextInputProps {
            value: props.query,
            placeholder: PLACEHOLDER,
            is_focused: props.is_focused,
            style: Self::input_style(props.palette),
            on_change: props.on_change,
            on_submit: |_| Action::QuerySubmit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input.render(frame, chunks[0], input_props);

        let button_area = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .split(chunks[2])[0];
        let button = Line::from(format!("  {}  ", BUTTON_LABEL))
            .style(
                Style::default()
                    .fg(props.palette.card)
                    .bg(props.palette.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .centered();
        frame.render_widget(Paragraph::new(button), button_area);
    }
}
