//! The modal command interpreter.
//!
//! This module provides the editor core: the mode state machine, the motion
//! engine, the mutation operations, and the focus bridge that keeps mode and
//! focus in step. It follows vim-style modal editing with Normal and Insert
//! modes.
//!
//! # Modules
//!
//! - `mode`: the Normal/Insert mode enumeration
//! - `focus`: focus targets and blur/focus notification values
//! - `motion`: pure cursor-motion arithmetic
//! - `editor`: the composed `VimEditor`
//!
//! # Example
//!
//! ```
//! use linequill::editor::mode::Mode;
//!
//! // The editor starts in Normal mode
//! let mode = Mode::default();
//! assert_eq!(mode, Mode::Normal);
//! ```

pub mod editor;
pub mod focus;
pub mod mode;
pub mod motion;

pub use editor::VimEditor;
pub use focus::{FocusEvent, FocusTarget};
pub use mode::Mode;
