//! Keyboard dispatch state machine.
//!
//! Pure state: the app layer maps crossterm events onto [`Key`] and reacts
//! to the returned [`Outcome`]. The repeated-modifier counters drive a
//! whimsical easter egg (the "access granted"/"access denied" alerts), not
//! any real access decision.

use crossterm::event::{KeyCode, ModifierKeyCode};

/// Reduced key classes the dispatcher cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Shift,
    Alt,
    Other,
}

impl Key {
    /// Classify a crossterm key code.
    ///
    /// Bare modifier presses arrive as `KeyCode::Modifier(..)`, which the
    /// terminal only reports with the kitty keyboard enhancement pushed
    /// (see `main.rs`); everything that is neither a modifier nor Escape
    /// advances the reveal.
    pub fn from_key_code(code: KeyCode) -> Self {
        match code {
            KeyCode::Esc => Key::Escape,
            KeyCode::Modifier(ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift) => {
                Key::Shift
            }
            KeyCode::Modifier(ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt) => Key::Alt,
            _ => Key::Other,
        }
    }
}

/// What the application should do in response to a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Reveal the next `step` characters.
    Advance,
    /// Pop the "access granted" alert.
    ShowGranted,
    /// Pop the "access denied" alert.
    ShowDenied,
    /// Close whatever overlay is up.
    HideOverlay,
    Ignored,
}

/// Repeated presses of the same modifier that trigger an alert.
const MODIFIER_THRESHOLD: u32 = 3;

/// Session key-handling state: modifier counters plus the overlay gate.
///
/// While an overlay is up the counters are frozen, not zeroed; only hitting
/// the threshold resets them.
#[derive(Debug, Default)]
pub struct Dispatcher {
    pub alt_count: u32,
    pub shift_count: u32,
    pub overlay_active: bool,
}

impl Dispatcher {
    pub fn handle(&mut self, key: Key) -> Outcome {
        match key {
            // Escape always hides, whatever state we are in
            Key::Escape => {
                self.overlay_active = false;
                Outcome::HideOverlay
            }
            _ if self.overlay_active => Outcome::Ignored,
            Key::Alt => {
                self.alt_count += 1;
                if self.alt_count >= MODIFIER_THRESHOLD {
                    self.alt_count = 0;
                    self.overlay_active = true;
                    Outcome::ShowGranted
                } else {
                    Outcome::Ignored
                }
            }
            Key::Shift => {
                self.shift_count += 1;
                if self.shift_count >= MODIFIER_THRESHOLD {
                    self.shift_count = 0;
                    self.overlay_active = true;
                    Outcome::ShowDenied
                } else {
                    Outcome::Ignored
                }
            }
            Key::Other => Outcome::Advance,
        }
    }

    /// Overlays opened outside the dispatcher (settings, help) gate key
    /// handling the same way the alerts do.
    pub fn set_overlay(&mut self, active: bool) {
        self.overlay_active = active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_code_classification() {
        // bare modifier presses, as reported under the kitty protocol
        assert_eq!(
            Key::from_key_code(KeyCode::Modifier(ModifierKeyCode::LeftAlt)),
            Key::Alt
        );
        assert_eq!(
            Key::from_key_code(KeyCode::Modifier(ModifierKeyCode::RightAlt)),
            Key::Alt
        );
        assert_eq!(
            Key::from_key_code(KeyCode::Modifier(ModifierKeyCode::LeftShift)),
            Key::Shift
        );
        assert_eq!(
            Key::from_key_code(KeyCode::Modifier(ModifierKeyCode::RightShift)),
            Key::Shift
        );
        assert_eq!(Key::from_key_code(KeyCode::Esc), Key::Escape);

        // everything else types
        assert_eq!(Key::from_key_code(KeyCode::Char('a')), Key::Other);
        assert_eq!(Key::from_key_code(KeyCode::Enter), Key::Other);
        assert_eq!(Key::from_key_code(KeyCode::Backspace), Key::Other);
        assert_eq!(
            Key::from_key_code(KeyCode::Modifier(ModifierKeyCode::LeftControl)),
            Key::Other
        );
    }

    #[test]
    fn test_modifier_events_drive_the_easter_egg() {
        let mut d = Dispatcher::default();
        for _ in 0..2 {
            assert_eq!(
                d.handle(Key::from_key_code(KeyCode::Modifier(
                    ModifierKeyCode::LeftAlt
                ))),
                Outcome::Ignored
            );
        }
        assert_eq!(
            d.handle(Key::from_key_code(KeyCode::Modifier(
                ModifierKeyCode::LeftAlt
            ))),
            Outcome::ShowGranted
        );
    }

    #[test]
    fn test_plain_keys_advance() {
        let mut d = Dispatcher::default();
        assert_eq!(d.handle(Key::Other), Outcome::Advance);
        assert_eq!(d.handle(Key::Other), Outcome::Advance);
        assert_eq!(d.alt_count, 0);
        assert_eq!(d.shift_count, 0);
    }

    #[test]
    fn test_three_alts_grant_access() {
        let mut d = Dispatcher::default();
        assert_eq!(d.handle(Key::Alt), Outcome::Ignored);
        assert_eq!(d.handle(Key::Alt), Outcome::Ignored);
        assert_eq!(d.handle(Key::Alt), Outcome::ShowGranted);
        // counter resets at the threshold, overlay goes up
        assert_eq!(d.alt_count, 0);
        assert!(d.overlay_active);
        // frozen while the overlay is up
        assert_eq!(d.handle(Key::Alt), Outcome::Ignored);
        assert_eq!(d.alt_count, 0);
    }

    #[test]
    fn test_three_shifts_deny_access() {
        let mut d = Dispatcher::default();
        d.handle(Key::Shift);
        d.handle(Key::Shift);
        assert_eq!(d.shift_count, 2);
        assert_eq!(d.handle(Key::Shift), Outcome::ShowDenied);
        assert_eq!(d.shift_count, 0);
        assert!(d.overlay_active);
    }

    #[test]
    fn test_escape_always_hides() {
        let mut d = Dispatcher::default();
        assert_eq!(d.handle(Key::Escape), Outcome::HideOverlay);
        assert!(!d.overlay_active);

        d.set_overlay(true);
        assert_eq!(d.handle(Key::Escape), Outcome::HideOverlay);
        assert!(!d.overlay_active);
    }

    #[test]
    fn test_overlay_freezes_counters_without_reset() {
        let mut d = Dispatcher::default();
        d.handle(Key::Shift);
        d.set_overlay(true);

        // nothing counts or advances while the overlay is up
        assert_eq!(d.handle(Key::Shift), Outcome::Ignored);
        assert_eq!(d.handle(Key::Other), Outcome::Ignored);
        assert_eq!(d.shift_count, 1);

        // the pre-overlay count carries over once it closes
        d.handle(Key::Escape);
        assert_eq!(d.handle(Key::Shift), Outcome::Ignored);
        assert_eq!(d.handle(Key::Shift), Outcome::ShowDenied);
    }
}
