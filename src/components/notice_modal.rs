use crossterm::event::{KeyCode, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Modal, ModalBehavior, ModalProps, ModalStyle, Padding, centered_rect,
};

use super::{Component, ERROR_ICON, Palette};
use crate::action::Action;

/// Blocking notice: swallows every key until dismissed
pub struct NoticeModal {
    modal: Modal,
}

pub struct NoticeModalProps<'a> {
    pub message: &'a str,
    pub is_focused: bool,
    pub palette: Palette,
}

impl Default for NoticeModal {
    fn default() -> Self {
        Self {
            modal: Modal::new(),
        }
    }
}

impl NoticeModal {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for NoticeModal {
    type Props<'a> = NoticeModalProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        let EventKind::Key(key) = event else {
            return None;
        };
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Esc => Some(Action::NoticeDismiss),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.width < 20 || area.height < 7 {
            return;
        }

        let palette = props.palette;
        let modal_area = centered_rect(50, 7, area);
        let mut render_content = |frame: &mut Frame, content_area: Rect| {
            let chunks = Layout::vertical([
                Constraint::Length(1), // Title
                Constraint::Min(1),    // Message
                Constraint::Length(1), // Hint
            ])
            .split(content_area);

            let title = Line::from(vec![
                Span::raw(ERROR_ICON),
                Span::raw(" "),
                Span::styled(
                    "Notice",
                    Style::default()
                        .fg(palette.error)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
            .centered();
            frame.render_widget(Paragraph::new(title), chunks[0]);

            let message = Paragraph::new(
                Line::from(Span::styled(
                    props.message.to_string(),
                    Style::default().fg(palette.text),
                ))
                .centered(),
            )
            .wrap(Wrap { trim: true });
            frame.render_widget(message, chunks[1]);

            let hint = Line::from(vec![
                Span::styled("Press ", Style::default().fg(palette.muted)),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to dismiss", Style::default().fg(palette.muted)),
            ])
            .centered();
            frame.render_widget(Paragraph::new(hint), chunks[2]);
        };

        self.modal.render(
            frame,
            area,
            ModalProps {
                is_open: true,
                is_focused: props.is_focused,
                area: modal_area,
                style: ModalStyle {
                    base: BaseStyle {
                        bg: Some(palette.card),
                        padding: Padding::xy(1, 1),
                        border: None,
                        fg: None,
                    },
                    ..Default::default()
                },
                behavior: ModalBehavior {
                    close_on_esc: true,
                    close_on_backdrop: false,
                },
                on_close: || Action::NoticeDismiss,
                render_content: &mut render_content,
            },
        );
    }
}
