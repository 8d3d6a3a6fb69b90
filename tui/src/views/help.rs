//! Help overlay: the key bindings, nothing more.
//!
//! Dismissal goes through the dispatcher's ESC handling like every other
//! overlay, so this view only draws.

use crate::{App, theme};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

/// Help content sections with their keyboard shortcuts.
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Typing",
        &[
            ("Any key", "Reveal the next characters"),
            ("Alt ×3", "Access granted"),
            ("Shift ×3", "Access denied"),
        ],
    ),
    (
        "General",
        &[
            ("Ctrl+S", "Settings"),
            ("Ctrl+H", "This help"),
            ("ESC", "Dismiss overlay"),
            ("Ctrl+C", "Quit application"),
        ],
    ),
];

impl App {
    pub fn draw_help(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let color = theme::parse_hex_color(&self.state.prefs.color)
            .unwrap_or(ratatui::style::Color::Green);
        let dimmed = theme::dim(color);

        // Calculate content height: title (1) + blank (1) + sections
        let mut content_height: u16 = 2;
        for (_section_name, items) in HELP_SECTIONS {
            content_height += 1; // section header
            content_height += items.len() as u16; // items
            content_height += 1; // blank line after section
        }
        content_height += 1; // footer

        let content_width: u16 = 42;

        // Center the content
        let [centered_area] = Layout::horizontal([Constraint::Length(content_width)])
            .flex(Flex::Center)
            .areas(area);

        let [centered_area] = Layout::vertical([Constraint::Length(content_height)])
            .flex(Flex::Center)
            .areas(centered_area);

        frame.render_widget(Clear, centered_area);

        // Build help content
        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(Span::styled(
            "━━━ Keyboard Controls ━━━",
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        for (section_name, items) in HELP_SECTIONS {
            lines.push(Line::from(Span::styled(
                section_name.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));

            for (key, description) in *items {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {}", key), Style::default().fg(color)),
                    Span::styled(format!("  {}", description), Style::default().fg(dimmed)),
                ]));
            }

            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![
            Span::styled("ESC", Style::default().fg(color)),
            Span::styled(" to return", Style::default().fg(dimmed)),
        ]));

        frame.render_widget(Paragraph::new(lines), centered_area);
    }
}
