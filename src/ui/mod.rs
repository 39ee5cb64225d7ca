//! UI module for the linequill terminal interface.
//!
//! This module provides the main UI structure for rendering the terminal
//! interface. The layout is two stacked areas: the text view on top and a
//! one-row status line at the bottom (insert-mode indicator on the left,
//! pending command keys and cursor position on the right).
//!
//! The UI is a thin rendering collaborator: it reads editor state and never
//! mutates it, so all editing semantics stay in the interpreter core.

pub mod status_line;
pub mod text_view;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Terminal;

use crate::config::Config;
use crate::editor::VimEditor;

/// Main UI structure that manages the terminal interface rendering.
pub struct UI {
    show_line_numbers: bool,
    relative_line_numbers: bool,
}

impl UI {
    /// Creates a new UI instance from display configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            show_line_numbers: config.show_line_numbers,
            relative_line_numbers: config.relative_line_numbers,
        }
    }

    /// Renders one frame: text view plus status line.
    pub fn render<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        editor: &VimEditor,
    ) -> Result<()> {
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(f.area());

            text_view::render_text_view(
                f,
                chunks[0],
                editor,
                self.show_line_numbers,
                self.relative_line_numbers,
            );
            status_line::render_status_line(f, chunks[1], editor);
        })?;

        Ok(())
    }
}
