//! Event handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key action that can be performed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // Navigation
    MoveUp,
    MoveDown,
    JumpToTop,
    JumpToBottom,

    // Filters
    /// Cycle the size filter forward (all sizes -> each size -> all).
    CycleSize,
    /// Cycle the size filter backward.
    CycleSizeBack,
    /// Toggle road-legal-only.
    ToggleRoadOnly,
    /// Lower the price bound by one step.
    PriceDown,
    /// Raise the price bound by one step.
    PriceUp,
    /// Cycle the sort order.
    CycleSort,

    // Grid
    /// Reveal another page of offerings.
    ShowMore,
    /// Select the highlighted offering.
    Select,

    // UI toggles
    ToggleHelp,
    ToggleTheme,

    // Confirmation
    Cancel,

    // Application
    Quit,
    ForceQuit,

    // No action
    None,
}

impl KeyAction {
    /// Convert a key event to an action.
    pub fn from_key_event(event: KeyEvent) -> Self {
        match (event.code, event.modifiers) {
            // Quit - only 'q' quits, Esc clears transient state
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::ForceQuit,
            (KeyCode::Esc, _) => KeyAction::Cancel,

            // Navigation - vim style
            (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::MoveDown,
            (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::MoveUp,

            // Navigation - arrow keys
            (KeyCode::Down, _) => KeyAction::MoveDown,
            (KeyCode::Up, _) => KeyAction::MoveUp,

            // Jump
            (KeyCode::Char('g'), KeyModifiers::NONE) => KeyAction::JumpToTop,
            (KeyCode::Char('G'), KeyModifiers::SHIFT) => KeyAction::JumpToBottom,
            (KeyCode::Home, _) => KeyAction::JumpToTop,
            (KeyCode::End, _) => KeyAction::JumpToBottom,

            // Filters
            (KeyCode::Char('s'), KeyModifiers::NONE) => KeyAction::CycleSize,
            (KeyCode::Char('S'), KeyModifiers::SHIFT) => KeyAction::CycleSizeBack,
            (KeyCode::Char('r'), KeyModifiers::NONE) => KeyAction::ToggleRoadOnly,
            (KeyCode::Char('-'), KeyModifiers::NONE) => KeyAction::PriceDown,
            (KeyCode::Char('+'), _) => KeyAction::PriceUp,
            (KeyCode::Char('='), KeyModifiers::NONE) => KeyAction::PriceUp,
            (KeyCode::Char('o'), KeyModifiers::NONE) => KeyAction::CycleSort,

            // Grid
            (KeyCode::Char('m'), KeyModifiers::NONE) => KeyAction::ShowMore,
            (KeyCode::Enter, _) => KeyAction::Select,

            // UI toggles
            (KeyCode::Char('?'), _) => KeyAction::ToggleHelp,
            (KeyCode::Char('t'), KeyModifiers::NONE) => KeyAction::ToggleTheme,

            _ => KeyAction::None,
        }
    }
}

/// A section of key bindings for the help display.
pub struct HelpSection {
    pub title: &'static str,
    pub bindings: Vec<KeyBinding>,
}

/// Key binding for display in help.
pub struct KeyBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

/// Get all key bindings organized by section for help display.
pub fn get_help_sections() -> Vec<HelpSection> {
    vec![
        HelpSection {
            title: "Navigation",
            bindings: vec![
                KeyBinding { keys: "j/k ↑/↓", description: "Move up/down" },
                KeyBinding { keys: "g/G", description: "Jump to top/bottom" },
                KeyBinding { keys: "Enter", description: "Select highlighted skip" },
                KeyBinding { keys: "m", description: "Show more offerings" },
            ],
        },
        HelpSection {
            title: "Filters",
            bindings: vec![
                KeyBinding { keys: "s/S", description: "Cycle size filter" },
                KeyBinding { keys: "r", description: "Road-legal skips only" },
                KeyBinding { keys: "-/+", description: "Lower/raise price bound" },
                KeyBinding { keys: "o", description: "Cycle sort order" },
            ],
        },
        HelpSection {
            title: "Display",
            bindings: vec![
                KeyBinding { keys: "t", description: "Toggle dark/light theme" },
                KeyBinding { keys: "?", description: "Show this help" },
                KeyBinding { keys: "Esc", description: "Close help / clear status" },
                KeyBinding { keys: "q", description: "Quit" },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_filter_keys_map_to_actions() {
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char('s'))), KeyAction::CycleSize);
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char('r'))), KeyAction::ToggleRoadOnly);
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char('-'))), KeyAction::PriceDown);
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char('o'))), KeyAction::CycleSort);
    }

    #[test]
    fn test_unknown_key_is_none() {
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char('z'))), KeyAction::None);
    }
}
