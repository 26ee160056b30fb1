use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{
    Component, HistoryChips, HistoryChipsProps, Palette, ResultPanel, ResultPanelProps,
    SearchBar, SearchBarProps,
};
use crate::action::Action;
use crate::state::{AppState, Focus};

pub const TITLE: &str = "Weather Dashboard";
pub const LOADING_TEXT: &str = "Fetching weather...";

const CARD_WIDTH: u16 = 64;

/// Props for Dashboard - read-only view of state
pub struct DashboardProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole widget: toggle, title, input, history, loading line, result
#[derive(Default)]
pub struct Dashboard {
    search: SearchBar,
    chips: HistoryChips,
    result: ResultPanel,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for Dashboard {
    type Props<'a> = DashboardProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };
        if key.kind != KeyEventKind::Press {
            return Vec::new();
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::F(2) => return vec![Action::UiToggleTheme],
            KeyCode::Char('t') if ctrl => return vec![Action::UiToggleTheme],
            KeyCode::Char('c') if ctrl => return vec![Action::Quit],
            KeyCode::Tab | KeyCode::BackTab => return vec![Action::UiFocusNext],
            KeyCode::Esc => return vec![Action::Quit],
            _ => {}
        }

        let state = props.state;
        let palette = Palette::for_theme(state.theme);
        match state.focus {
            Focus::Input => self
                .search
                .handle_event(
                    event,
                    SearchBarProps {
                        query: &state.query,
                        is_focused: true,
                        palette,
                        on_change: Action::QueryChange,
                    },
                )
                .into_iter()
                .collect(),
            Focus::History => self
                .chips
                .handle_event(
                    event,
                    HistoryChipsProps {
                        history: &state.history,
                        selected: state.history_selected,
                        is_focused: true,
                        palette,
                    },
                )
                .into_iter()
                .collect(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: DashboardProps<'_>) {
        let state = props.state;
        let palette = Palette::for_theme(state.theme);

        frame.render_widget(
            Block::default().style(Style::default().bg(palette.background)),
            area,
        );

        let outer = Layout::vertical([
            Constraint::Min(1),    // Card
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let card = Layout::horizontal([Constraint::Max(CARD_WIDTH)])
            .flex(Flex::Center)
            .split(outer[0])[0];
        frame.render_widget(
            Block::default().style(Style::default().bg(palette.card).fg(palette.text)),
            card,
        );
        let inner = card.inner(Margin {
            horizontal: 2,
            vertical: 1,
        });

        let rows = Layout::vertical([
            Constraint::Length(1), // Theme toggle
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Input + button
            Constraint::Length(1), // Spacer
            Constraint::Length(HistoryChips::height(&state.history)),
            Constraint::Length(u16::from(state.loading)),
            Constraint::Min(0), // Result
        ])
        .split(inner);

        let toggle = Line::from(vec![
            Span::styled("F2 ", Style::default().fg(palette.muted)),
            Span::styled(
                format!(" {} ", state.theme.toggle_label()),
                Style::default().fg(palette.text).bg(palette.input),
            ),
        ])
        .right_aligned();
        frame.render_widget(Paragraph::new(toggle), rows[0]);

        let title = Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ))
        .centered();
        frame.render_widget(Paragraph::new(title), rows[1]);

        self.search.render(
            frame,
            rows[3],
            SearchBarProps {
                query: &state.query,
                is_focused: props.is_focused && state.focus == Focus::Input,
                palette,
                on_change: Action::QueryChange,
            },
        );

        self.chips.render(
            frame,
            rows[5],
            HistoryChipsProps {
                history: &state.history,
                selected: state.history_selected,
                is_focused: props.is_focused && state.focus == Focus::History,
                palette,
            },
        );

        if state.loading {
            let loading = Line::from(vec![
                Span::styled(state.spinner_frame(), Style::default().fg(palette.accent)),
                Span::raw(" "),
                Span::styled(LOADING_TEXT, Style::default().fg(palette.accent)),
            ])
            .centered();
            frame.render_widget(Paragraph::new(loading), rows[6]);
        }

        if let Some(weather) = &state.weather {
            self.result
                .render(frame, rows[7], ResultPanelProps { weather, palette });
        }

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            outer[1],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "search"),
                    StatusBarHint::new("tab", "history"),
                    StatusBarHint::new("F2", "theme"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
