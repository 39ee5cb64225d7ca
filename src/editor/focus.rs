//! Focus targets and notifications for the editor's collaborators.
//!
//! Exactly one collaborator holds focus at a time: the command register
//! (Normal mode) or the text area (Insert mode). Focus transfers produce a
//! blur notification for the collaborator losing focus and a focus
//! notification for the one gaining it; the composed editor reacts to the
//! text area's blur, so an externally-observed blur and an internal escape
//! both take the same path back to Normal mode.

/// A collaborator that can hold input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The command-entry field; focused in Normal mode.
    CommandRegister,
    /// The text buffer; focused in Insert mode.
    TextArea,
}

/// A focus-change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEvent {
    /// `target` gained focus.
    Focused(FocusTarget),
    /// `target` lost focus.
    Blurred(FocusTarget),
}
