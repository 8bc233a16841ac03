//! Application state types.

/// Application mode representing the current UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Normal,
    Help,
    Quit,
}

/// A transient status line, shown until the next action clears it.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Whether this reports a success (styled accordingly).
    pub success: bool,
    /// Message text.
    pub text: String,
}

impl StatusMessage {
    /// A success message.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            success: true,
            text: text.into(),
        }
    }

    /// A warning/failure message.
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            success: false,
            text: text.into(),
        }
    }
}
