use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use tui_dispatch::EventKind;

use super::{Component, Palette};
use crate::action::Action;
use crate::history::SearchHistory;

pub const HISTORY_LABEL: &str = "Recent Searches:";

/// One chip per recent city; Enter on a chip replays it
#[derive(Default)]
pub struct HistoryChips;

pub struct HistoryChipsProps<'a> {
    pub history: &'a SearchHistory,
    pub selected: usize,
    pub is_focused: bool,
    pub palette: Palette,
}

impl HistoryChips {
    /// Rows needed to show the chips (0 when there is no history)
    pub fn height(history: &SearchHistory) -> u16 {
        if history.is_empty() { 0 } else { 3 }
    }
}

impl Component<Action> for HistoryChips {
    type Props<'a> = HistoryChipsProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused || props.history.is_empty() {
            return None;
        }

        let EventKind::Key(key) = event else {
            return None;
        };

        let last = props.history.len() - 1;
        match key.code {
            KeyCode::Left => Some(Action::HistorySelect(props.selected.saturating_sub(1))),
            KeyCode::Right => Some(Action::HistorySelect((props.selected + 1).min(last))),
            KeyCode::Home => Some(Action::HistorySelect(0)),
            KeyCode::End => Some(Action::HistorySelect(last)),
            KeyCode::Enter | KeyCode::Char(' ') => props
                .history
                .get(props.selected)
                .map(|city| Action::HistoryReplay(city.to_string())),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if props.history.is_empty() {
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Length(1), // Label
            Constraint::Min(1),    // Chips
        ])
        .split(area);

        let label = Line::from(Span::styled(
            HISTORY_LABEL,
            Style::default()
                .fg(props.palette.muted)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(label), chunks[0]);

        let mut spans = Vec::with_capacity(props.history.len() * 2);
        for (index, city) in props.history.iter().enumerate() {
            let highlighted = props.is_focused && index == props.selected;
            let style = if highlighted {
                Style::default()
                    .fg(props.palette.text)
                    .bg(props.palette.chip_selected)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(props.palette.text).bg(props.palette.chip)
            };
            if index > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(format!(" {} ", city), style));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).wrap(Wrap { trim: false }),
            chunks[1],
        );
    }
}
