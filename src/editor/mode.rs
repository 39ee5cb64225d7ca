//! Editor mode management for modal editing.
//!
//! This module provides the `Mode` enum that represents the current editing
//! mode. Following vim-style modal editing, the editor is always in exactly
//! one of two modes with different key interpretation:
//!
//! - **Normal**: typed keys are interpreted as commands, not inserted as text
//! - **Insert**: typed keys are inserted as literal text into the buffer
//!
//! # Example
//!
//! ```
//! use linequill::editor::mode::Mode;
//!
//! // The editor starts in Normal mode by default
//! let mode = Mode::default();
//! assert_eq!(mode, Mode::Normal);
//! assert_eq!(format!("{}", mode), "NORMAL");
//!
//! let mode = Mode::Insert;
//! assert_eq!(format!("{}", mode), "INSERT");
//! ```

use std::fmt;

/// The current editing mode.
///
/// Exactly one value is active at a time for an editor instance; transitions
/// happen only through the composed editor's mode controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal mode: keys resolve to commands through the command table.
    Normal,
    /// Insert mode: keys pass through to ordinary text insertion.
    Insert,
}

impl fmt::Display for Mode {
    /// Formats the mode as an uppercase string suitable for the status bar.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Normal => write!(f, "NORMAL"),
            Mode::Insert => write!(f, "INSERT"),
        }
    }
}

impl Default for Mode {
    /// Returns `Mode::Normal`; the editor always starts in Normal mode.
    fn default() -> Self {
        Mode::Normal
    }
}
