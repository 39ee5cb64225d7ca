//! Linequill - a terminal text editor with vim-style modal keybindings.
//!
//! The crate is organized around a small set of collaborators:
//!
//! - [`buffer`]: the line-oriented text buffer and its cursor/selection state
//! - [`editor`]: the modal command interpreter (mode transitions, motion
//!   engine, mutation operations, focus bridge)
//! - [`input`]: the command table, key-sequence resolver, and terminal input
//!   handling
//! - [`ui`]: the ratatui rendering layer (text view and status line)
//! - [`config`]: TOML configuration loading

pub mod buffer;
pub mod config;
pub mod editor;
pub mod input;
pub mod ui;
