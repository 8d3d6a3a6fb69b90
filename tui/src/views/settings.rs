//! Settings overlay.
//!
//! One row per preference plus the source-text actions. Arrow keys adjust a
//! row in place (the original's range sliders and dropdowns); Enter opens a
//! free-text input that commits through validation. Rejected input is
//! silently dropped and the prior value stays, per the validation policy.

use crate::{App, preferences, theme};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Default, Debug)]
pub struct SettingsState {
    /// Selected row index.
    pub sel: usize,
    /// Text buffer while a row is being edited, `None` otherwise.
    pub input: Option<String>,
}

impl SettingsState {
    pub fn cancel_input(&mut self) {
        self.input = None;
    }
}

/// A settings row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsItem {
    Speed,
    ThemeColor,
    FontSize,
    Font,
    LoadFile,
    FetchKernel,
}

impl SettingsItem {
    pub const ALL: [SettingsItem; 6] = [
        SettingsItem::Speed,
        SettingsItem::ThemeColor,
        SettingsItem::FontSize,
        SettingsItem::Font,
        SettingsItem::LoadFile,
        SettingsItem::FetchKernel,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsItem::Speed => "Speed",
            SettingsItem::ThemeColor => "Theme color",
            SettingsItem::FontSize => "Font size",
            SettingsItem::Font => "Font",
            SettingsItem::LoadFile => "Load text file",
            SettingsItem::FetchKernel => "Fetch kernel text",
        }
    }
}

impl App {
    pub fn draw_settings(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let color = theme::parse_hex_color(&self.state.prefs.color)
            .unwrap_or(ratatui::style::Color::Green);
        let dimmed = theme::dim(color);

        // Content dimensions
        let content_width: u16 = 44;
        // Title (1) + blank (1) + rows + blank (1) + footer (1)
        let content_height: u16 = 1 + 1 + SettingsItem::ALL.len() as u16 + 1 + 1;

        // Center the content
        let [centered_area] = Layout::horizontal([Constraint::Length(content_width + 4)])
            .flex(Flex::Center)
            .areas(area);

        let [centered_area] = Layout::vertical([Constraint::Length(content_height + 4)])
            .flex(Flex::Center)
            .areas(centered_area);

        frame.render_widget(Clear, centered_area);

        // Draw border
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(dimmed));
        let inner_area = block.inner(centered_area);
        frame.render_widget(block, centered_area);

        // Build settings content
        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(Span::styled(
            "━━━ Settings ━━━",
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        for (i, item) in SettingsItem::ALL.iter().enumerate() {
            let is_selected = i == self.state.settings.sel;
            let is_editing = is_selected && self.state.settings.input.is_some();

            let style = if is_selected {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(dimmed)
            };

            let prefix = if is_selected { "▸ " } else { "  " };
            let value = if is_editing {
                format!("{}_", self.state.settings.input.as_deref().unwrap_or(""))
            } else {
                self.row_value(*item)
            };

            lines.push(Line::from(Span::styled(
                format!("{}{:<18}{}", prefix, item.label(), value),
                style,
            )));
        }

        lines.push(Line::from(""));

        // Footer
        let footer = if self.state.settings.input.is_some() {
            Line::from(vec![
                Span::styled("Enter", Style::default().fg(color)),
                Span::styled(" apply · ", Style::default().fg(dimmed)),
                Span::styled("ESC", Style::default().fg(color)),
                Span::styled(" close", Style::default().fg(dimmed)),
            ])
        } else {
            Line::from(vec![
                Span::styled("↑↓", Style::default().fg(color)),
                Span::styled(" navigate · ", Style::default().fg(dimmed)),
                Span::styled("←→", Style::default().fg(color)),
                Span::styled(" adjust · ", Style::default().fg(dimmed)),
                Span::styled("Enter", Style::default().fg(color)),
                Span::styled(" edit · ", Style::default().fg(dimmed)),
                Span::styled("ESC", Style::default().fg(color)),
                Span::styled(" close", Style::default().fg(dimmed)),
            ])
        };
        lines.push(footer);

        frame.render_widget(Paragraph::new(lines), inner_area);
    }

    fn row_value(&self, item: SettingsItem) -> String {
        let prefs = &self.state.prefs;
        match item {
            SettingsItem::Speed => prefs.speed.to_string(),
            SettingsItem::ThemeColor => prefs.color.clone(),
            SettingsItem::FontSize => format!("{}px", prefs.font_size),
            SettingsItem::Font => prefs.font.clone(),
            SettingsItem::LoadFile => String::new(),
            SettingsItem::FetchKernel => String::new(),
        }
    }

    /// Handle every key but Escape while the settings overlay is up
    /// (Escape closes it through the dispatcher like any other overlay).
    pub fn handle_settings_input(&mut self, key: KeyEvent) {
        if self.state.settings.input.is_some() {
            self.handle_settings_edit(key);
            return;
        }

        match key.code {
            KeyCode::Up => {
                if self.state.settings.sel > 0 {
                    self.state.settings.sel -= 1;
                }
            }
            KeyCode::Down => {
                if self.state.settings.sel < SettingsItem::ALL.len() - 1 {
                    self.state.settings.sel += 1;
                }
            }
            KeyCode::Left => self.adjust_selected(-1),
            KeyCode::Right => self.adjust_selected(1),
            KeyCode::Enter => self.begin_edit(),
            _ => {}
        }
    }

    fn selected_item(&self) -> SettingsItem {
        SettingsItem::ALL[self.state.settings.sel.min(SettingsItem::ALL.len() - 1)]
    }

    /// Open the free-text input for the selected row, prefilled with the
    /// current value. The action rows fire immediately instead.
    fn begin_edit(&mut self) {
        let prefs = &self.state.prefs;
        let prefill = match self.selected_item() {
            SettingsItem::Speed => prefs.speed.to_string(),
            SettingsItem::ThemeColor => prefs.color.clone(),
            SettingsItem::FontSize => prefs.font_size.to_string(),
            SettingsItem::Font => prefs.font.clone(),
            SettingsItem::LoadFile => String::new(),
            SettingsItem::FetchKernel => {
                // picked up by the run loop on its next pass
                self.state.refetch_requested = true;
                return;
            }
        };
        self.state.settings.input = Some(prefill);
    }

    fn handle_settings_edit(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                if let Some(raw) = self.state.settings.input.take() {
                    self.commit_setting(raw);
                }
            }
            KeyCode::Backspace => {
                if let Some(input) = self.state.settings.input.as_mut() {
                    input.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(input) = self.state.settings.input.as_mut() {
                    input.push(c);
                }
            }
            _ => {}
        }
    }

    /// Validate and apply a committed input. Invalid input is silently
    /// dropped: the prior value stays and nothing is persisted.
    fn commit_setting(&mut self, raw: String) {
        match self.selected_item() {
            SettingsItem::Speed => {
                if let Some(v) = preferences::validate_speed(&raw) {
                    self.apply_speed(v);
                }
            }
            SettingsItem::ThemeColor => {
                if preferences::is_hex_color(raw.trim()) {
                    self.apply_color(raw.trim().to_string());
                }
            }
            SettingsItem::FontSize => {
                if let Some(v) = preferences::validate_font_size(&raw) {
                    self.apply_font_size(v);
                }
            }
            // font families are accepted unconditionally
            SettingsItem::Font => self.apply_font(raw),
            SettingsItem::LoadFile => {
                // unreadable files are silently ignored, the old text stays
                if let Ok(text) = std::fs::read_to_string(raw.trim()) {
                    self.replace_source(text);
                }
            }
            SettingsItem::FetchKernel => {}
        }
    }

    /// Arrow-key adjustment in place: numeric rows step within their
    /// bounds, the color and font rows cycle their preset lists.
    fn adjust_selected(&mut self, delta: i32) {
        match self.selected_item() {
            SettingsItem::Speed => {
                let v = (self.state.prefs.speed as i32 + delta).clamp(
                    *preferences::SPEED_RANGE.start() as i32,
                    *preferences::SPEED_RANGE.end() as i32,
                );
                self.apply_speed(v as u16);
            }
            SettingsItem::FontSize => {
                let v = (self.state.prefs.font_size as i32 + delta).clamp(
                    *preferences::FONT_SIZE_RANGE.start() as i32,
                    *preferences::FONT_SIZE_RANGE.end() as i32,
                );
                self.apply_font_size(v as u16);
            }
            SettingsItem::ThemeColor => {
                let cur = theme::PRESETS
                    .iter()
                    .position(|p| *p == self.state.prefs.color)
                    .unwrap_or(0) as i32;
                let next = (cur + delta).rem_euclid(theme::PRESETS.len() as i32) as usize;
                self.apply_color(theme::PRESETS[next].to_string());
            }
            SettingsItem::Font => {
                let cur = theme::FONT_CHOICES
                    .iter()
                    .position(|f| *f == self.state.prefs.font)
                    .unwrap_or(0) as i32;
                let next = (cur + delta).rem_euclid(theme::FONT_CHOICES.len() as i32) as usize;
                self.apply_font(theme::FONT_CHOICES[next].to_string());
            }
            SettingsItem::LoadFile | SettingsItem::FetchKernel => {}
        }
    }

    fn apply_speed(&mut self, v: u16) {
        self.state.prefs.speed = v;
        self.state.reveal.set_step(v as usize);
        let _ = preferences::save_preferences(&self.state.prefs);
    }

    fn apply_color(&mut self, color: String) {
        self.state.prefs.color = color;
        let _ = preferences::save_preferences(&self.state.prefs);
    }

    fn apply_font_size(&mut self, v: u16) {
        self.state.prefs.font_size = v;
        let _ = preferences::save_preferences(&self.state.prefs);
    }

    fn apply_font(&mut self, font: String) {
        self.state.prefs.font = font.clone();
        let _ = preferences::save_preferences(&self.state.prefs);

        // fire-and-forget stylesheet prefetch, the original's <link> injection
        tokio::spawn(async move {
            let _ = ponyterm_sources::fonts::prefetch(&font).await;
        });
    }
}
