//! The typer surface: revealed text, blinking cursor, status footer.

use crate::{App, theme};

/// Vertical scroll that keeps the newest rendered line in view.
///
/// Saturates rather than truncates: a buffer past 65k wrapped lines pins
/// to the bottom instead of snapping back to the top.
fn scroll_offset(total_lines: usize, height: u16) -> u16 {
    u16::try_from(total_lines)
        .unwrap_or(u16::MAX)
        .saturating_sub(height)
}
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

impl App {
    pub fn draw_typer(&mut self, frame: &mut Frame) {
        let color = theme::parse_hex_color(&self.state.prefs.color).unwrap_or(Color::Green);
        let dimmed = theme::dim(color);

        let [body_area, footer_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(dimmed))
            .title(Span::styled(
                " PONY TERMINAL ",
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(body_area);
        frame.render_widget(block, body_area);

        // revealed text plus the cursor glyph on the last line
        let cursor = if self.state.cursor_visible { "█" } else { " " };
        let mut lines: Vec<Line> = self
            .state
            .reveal
            .output()
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(color))))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled(cursor, Style::default().fg(color)));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });

        // keep the newest output in view
        let scroll = scroll_offset(paragraph.line_count(inner.width), inner.height);

        frame.render_widget(paragraph.scroll((scroll, 0)), inner);

        // status footer
        let prefs = &self.state.prefs;
        let footer = Line::from(vec![
            Span::styled(format!(" speed {}", prefs.speed), Style::default().fg(dimmed)),
            Span::styled(
                format!(" · {}px {}", prefs.font_size, prefs.font),
                Style::default().fg(dimmed),
            ),
            Span::styled("   ^S", Style::default().fg(color)),
            Span::styled(" settings  ", Style::default().fg(dimmed)),
            Span::styled("^H", Style::default().fg(color)),
            Span::styled(" help  ", Style::default().fg(dimmed)),
            Span::styled("^C", Style::default().fg(color)),
            Span::styled(" quit", Style::default().fg(dimmed)),
        ]);
        frame.render_widget(Paragraph::new(footer), footer_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_pins_to_bottom() {
        assert_eq!(scroll_offset(10, 24), 0);
        assert_eq!(scroll_offset(24, 24), 0);
        assert_eq!(scroll_offset(100, 24), 76);
    }

    #[test]
    fn test_scroll_offset_saturates_past_u16() {
        // a buffer that wraps past 65k lines must not wrap the offset
        assert_eq!(scroll_offset(70_000, 24), u16::MAX - 24);
        assert_eq!(scroll_offset(usize::MAX, 24), u16::MAX - 24);
        assert_eq!(scroll_offset(usize::MAX, 0), u16::MAX);
    }
}
