use crate::{
    dispatch::{Dispatcher, Key, Outcome},
    preferences::{self, Preferences},
    reveal::RevealState,
    views::settings::SettingsState,
};
use color_eyre::eyre::Result;
use crossterm::event::EventStream;
use std::time::Duration;

/// Which surface currently owns the keyboard.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    #[default]
    Typer,
    Overlay(OverlayKind),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayKind {
    AccessGranted,
    AccessDenied,
    Settings,
    Help,
}

/// Cursor blink cadence.
const BLINK_RATE: Duration = Duration::from_millis(500);

#[derive(Default, Debug)]
pub struct AppState {
    /// The reveal engine.
    pub reveal: RevealState,
    /// Modifier counters and the overlay gate.
    pub keys: Dispatcher,
    /// Live user preferences, written through on every accepted change.
    pub prefs: Preferences,
    /// Settings overlay state.
    pub settings: SettingsState,
    /// Cursor glyph blink phase.
    pub cursor_visible: bool,
    /// Set once the one-shot startup fetch has run.
    pub fetch_attempted: bool,
    /// Set by the settings overlay to request a kernel re-fetch.
    pub refetch_requested: bool,
}

pub struct App {
    /// Active application view.
    pub view: AppView,
    /// Application state.
    ///
    /// This is shared among all views.
    pub state: AppState,
    /// Is the application running?
    pub is_running: bool,
    /// Event stream.
    pub event_stream: EventStream,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Construct a new instance of [`App`] from the persisted session.
    pub fn new() -> Self {
        let prefs = preferences::load_preferences();
        let source = preferences::load_source().unwrap_or_default();
        let reveal = RevealState::new(source, prefs.speed as usize);

        Self {
            view: AppView::Typer,
            state: AppState {
                reveal,
                prefs,
                cursor_visible: true,
                ..AppState::default()
            },
            is_running: false,
            event_stream: EventStream::new(),
        }
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: ratatui::DefaultTerminal) -> Result<()> {
        self.is_running = true;

        // create a ticker for the cursor blink
        let mut blink = tokio::time::interval(BLINK_RATE);

        while self.is_running {
            // draw first (to disguise async stuff in ticks)
            terminal.draw(|frame| self.draw(frame))?;

            // one-shot startup fetch when nothing was persisted, plus any
            // explicit re-fetch from the settings overlay; a failure is not
            // retried, the bundled listing stands in instead
            if (self.state.reveal.source_is_empty() && !self.state.fetch_attempted)
                || self.state.refetch_requested
            {
                self.state.fetch_attempted = true;
                self.state.refetch_requested = false;
                let text = match ponyterm_sources::kernel::download().await {
                    Ok(text) => text,
                    Err(_) => ponyterm_sources::kernel::BUNDLED.to_string(),
                };
                self.replace_source(text);
            }

            // handle events with timeout to keep the blink going
            tokio::select! {
                _ = blink.tick() => {
                    self.state.cursor_visible = !self.state.cursor_visible;
                    continue;
                }
                result = self.handle_crossterm_events() => {
                    result?;
                }
            }
        }

        Ok(())
    }

    /// Renders the user interface.
    ///
    /// Overlays draw on top of the typer surface.
    fn draw(&mut self, frame: &mut ratatui::Frame) {
        self.draw_typer(frame);
        if let AppView::Overlay(kind) = self.view {
            match kind {
                OverlayKind::AccessGranted | OverlayKind::AccessDenied => {
                    self.draw_alert(kind, frame)
                }
                OverlayKind::Settings => self.draw_settings(frame),
                OverlayKind::Help => self.draw_help(frame),
            }
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    async fn handle_crossterm_events(&mut self) -> Result<()> {
        use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
        use futures::{FutureExt, StreamExt};

        let event = self.event_stream.next().fuse().await;
        if let Some(Ok(evt)) = event {
            match evt {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // application-wide CTRL+C handler
                    if matches!(
                        (key.modifiers, key.code),
                        (
                            KeyModifiers::CONTROL,
                            KeyCode::Char('c') | KeyCode::Char('C')
                        )
                    ) {
                        self.quit();
                        return Ok(());
                    };

                    self.on_key(key);
                }
                Event::Mouse(_) => {} // no mouse events
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Route a key press to the overlay that owns it, or through the
    /// dispatcher when the typer surface is active.
    fn on_key(&mut self, key: crossterm::event::KeyEvent) {
        use crossterm::event::{KeyCode, KeyModifiers};

        // shortcuts into the overlays, only from the typer surface
        if self.view == AppView::Typer && key.modifiers == KeyModifiers::CONTROL {
            match key.code {
                KeyCode::Char('s') | KeyCode::Char('S') => {
                    self.show_overlay(OverlayKind::Settings);
                    return;
                }
                KeyCode::Char('h') | KeyCode::Char('H') => {
                    self.show_overlay(OverlayKind::Help);
                    return;
                }
                _ => {}
            }
        }

        // the settings overlay owns every key but Escape while it is up
        if self.view == AppView::Overlay(OverlayKind::Settings) && key.code != KeyCode::Esc {
            self.handle_settings_input(key);
            return;
        }

        match self.state.keys.handle(Key::from_key_code(key.code)) {
            Outcome::Advance => {
                self.state.reveal.advance_step();
            }
            Outcome::ShowGranted => self.show_overlay(OverlayKind::AccessGranted),
            Outcome::ShowDenied => self.show_overlay(OverlayKind::AccessDenied),
            Outcome::HideOverlay => self.hide_overlay(),
            Outcome::Ignored => {}
        }
    }

    /// Install new source text and write it through to the store.
    pub fn replace_source(&mut self, text: String) {
        self.state.reveal.replace_text(text);
        let _ = preferences::save_source(self.state.reveal.source());
    }

    pub fn show_overlay(&mut self, kind: OverlayKind) {
        self.state.keys.set_overlay(true);
        self.view = AppView::Overlay(kind);
    }

    pub fn hide_overlay(&mut self) {
        self.state.keys.set_overlay(false);
        self.state.settings.cancel_input();
        self.view = AppView::Typer;
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.is_running = false;
    }
}
