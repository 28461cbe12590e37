//! Global keyboard shortcuts that may put an image on the pasteboard.

use std::fmt;

/// macOS virtual key codes (HIToolbox `Events.h`). These are layout
/// independent and stable across releases.
pub mod keycode {
    pub const C: u16 = 8;
    pub const THREE: u16 = 20;
    pub const FOUR: u16 = 21;
    pub const FIVE: u16 = 23;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub command: bool,
    pub shift: bool,
    pub control: bool,
    pub option: bool,
}

impl Modifiers {
    pub const fn command() -> Self {
        Self {
            command: true,
            shift: false,
            control: false,
            option: false,
        }
    }

    pub const fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub const fn with_control(mut self) -> Self {
        self.control = true;
        self
    }
}

/// A key-down event as delivered by the global key monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub key_code: u16,
    pub modifiers: Modifiers,
}

impl KeyChord {
    pub fn new(key_code: u16, modifiers: Modifiers) -> Self {
        Self {
            key_code,
            modifiers,
        }
    }
}

/// Why a clipboard check is being run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    Copy,
    Screenshot,
    /// "Convert Now" from the menu. Skips the change-counter comparison.
    Manual,
}

impl TriggerKind {
    pub fn forces_check(&self) -> bool {
        matches!(self, TriggerKind::Manual)
    }
}

impl fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TriggerKind::Copy => "copy",
            TriggerKind::Screenshot => "screenshot",
            TriggerKind::Manual => "manual",
        })
    }
}

/// Map a key chord to the clipboard check it should schedule.
///
/// - Cmd+C copies.
/// - Cmd+Shift+3/4/5 takes a screenshot (5 opens the screenshot toolbar).
/// - Cmd+Ctrl+Shift+3/4 takes a screenshot straight to the clipboard, which
///   is a subset of the previous chord and yields the same trigger.
pub fn classify(chord: &KeyChord) -> Option<TriggerKind> {
    let m = chord.modifiers;
    if !m.command {
        return None;
    }

    if chord.key_code == keycode::C {
        return Some(TriggerKind::Copy);
    }

    if m.shift
        && matches!(
            chord.key_code,
            keycode::THREE | keycode::FOUR | keycode::FIVE
        )
    {
        return Some(TriggerKind::Screenshot);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chord(key_code: u16, modifiers: Modifiers) -> KeyChord {
        KeyChord::new(key_code, modifiers)
    }

    #[test]
    fn cmd_c_is_copy() {
        assert_eq!(
            classify(&chord(keycode::C, Modifiers::command())),
            Some(TriggerKind::Copy)
        );
    }

    #[test]
    fn cmd_shift_c_is_still_copy() {
        assert_eq!(
            classify(&chord(keycode::C, Modifiers::command().with_shift())),
            Some(TriggerKind::Copy)
        );
    }

    #[test]
    fn plain_c_is_ignored() {
        assert_eq!(classify(&chord(keycode::C, Modifiers::default())), None);
    }

    #[test]
    fn cmd_shift_digits_are_screenshots() {
        for key in [keycode::THREE, keycode::FOUR, keycode::FIVE] {
            assert_eq!(
                classify(&chord(key, Modifiers::command().with_shift())),
                Some(TriggerKind::Screenshot),
                "key code {key}"
            );
        }
    }

    #[test]
    fn cmd_ctrl_shift_digits_are_screenshots() {
        for key in [keycode::THREE, keycode::FOUR] {
            assert_eq!(
                classify(&chord(key, Modifiers::command().with_shift().with_control())),
                Some(TriggerKind::Screenshot)
            );
        }
    }

    #[test]
    fn cmd_digit_without_shift_is_ignored() {
        assert_eq!(classify(&chord(keycode::THREE, Modifiers::command())), None);
    }

    #[test]
    fn shift_digit_without_cmd_is_ignored() {
        let modifiers = Modifiers {
            shift: true,
            ..Modifiers::default()
        };
        assert_eq!(classify(&chord(keycode::FOUR, modifiers)), None);
    }

    #[test]
    fn only_manual_forces_check() {
        assert!(TriggerKind::Manual.forces_check());
        assert!(!TriggerKind::Copy.forces_check());
        assert!(!TriggerKind::Screenshot.forces_check());
    }
}
