//! The "access granted" / "access denied" alert overlays.
//!
//! Purely decorative easter eggs; only ESC dismisses them (handled by the
//! dispatcher, so this view has no input handler of its own).

use crate::{App, OverlayKind};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

impl App {
    pub fn draw_alert(&mut self, kind: OverlayKind, frame: &mut Frame) {
        let (label, color) = match kind {
            OverlayKind::AccessGranted => ("ACCESS GRANTED", Color::Green),
            OverlayKind::AccessDenied => ("ACCESS DENIED", Color::Red),
            _ => return,
        };

        let area = frame.area();

        // Content dimensions
        let content_width: u16 = label.len() as u16 + 8;
        // label (1) + blank (1) + footer (1)
        let content_height: u16 = 3;

        // Center the content
        let [centered_area] = Layout::horizontal([Constraint::Length(content_width + 2)])
            .flex(Flex::Center)
            .areas(area);

        let [centered_area] = Layout::vertical([Constraint::Length(content_height + 2)])
            .flex(Flex::Center)
            .areas(centered_area);

        frame.render_widget(Clear, centered_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let inner_area = block.inner(centered_area);
        frame.render_widget(block, centered_area);

        let lines = vec![
            Line::from(Span::styled(
                label,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("ESC", Style::default().fg(color)),
                Span::styled(" to dismiss", Style::default().fg(Color::DarkGray)),
            ]),
        ];

        frame.render_widget(Paragraph::new(lines).centered(), inner_area);
    }
}
