//! Status line widget for displaying editor state information.
//!
//! The status line shows:
//! - The insert-mode indicator "-- INSERT --" (cleared in Normal mode)
//! - Pending command keys (a lone "g" waiting for its second key)
//! - Cursor position (row:column, 1-based)
//!
//! Example status line: `-- INSERT --                           3:7`

use crate::editor::VimEditor;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the status line showing the mode indicator, pending keys, and
/// cursor position.
pub fn render_status_line(f: &mut Frame, area: Rect, editor: &VimEditor) {
    let indicator = editor.indicator().to_string();
    let pending = editor.pending_keys().to_string();

    let cursor = editor.cursor();
    let position = format!("{}:{}", cursor.row + 1, cursor.column + 1);

    // Right side: pending keys (vim's showcmd spot), then position
    let right = if pending.is_empty() {
        position
    } else {
        format!("{}  {}", pending, position)
    };

    let total_width = area.width as usize;
    let padding = if indicator.len() + right.len() < total_width {
        total_width - indicator.len() - right.len()
    } else {
        1
    };

    let line = Line::from(vec![
        Span::styled(indicator, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(padding)),
        Span::raw(right),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rendered_text(editor: &VimEditor) -> String {
        let backend = TestBackend::new(40, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render_status_line(f, f.area(), editor))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .take(40)
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_normal_mode_has_no_indicator() {
        let editor = VimEditor::from_text("abc");
        let text = rendered_text(&editor);
        assert!(!text.contains("INSERT"), "unexpected indicator: {}", text);
        assert!(text.contains("1:1"), "missing position: {}", text);
    }

    #[test]
    fn test_insert_mode_shows_indicator() {
        let mut editor = VimEditor::from_text("abc");
        editor.push_command_key('i');
        let text = rendered_text(&editor);
        assert!(
            text.contains("-- INSERT --"),
            "missing indicator: {}",
            text
        );
    }

    #[test]
    fn test_pending_keys_are_shown() {
        let mut editor = VimEditor::from_text("abc");
        editor.push_command_key('g');
        let text = rendered_text(&editor);
        assert!(text.contains('g'), "missing pending keys: {}", text);
    }

    #[test]
    fn test_position_tracks_cursor() {
        let mut editor = VimEditor::from_text("abc\ndef");
        editor.push_command_key('j');
        editor.push_command_key('l');
        let text = rendered_text(&editor);
        assert!(text.contains("2:2"), "wrong position: {}", text);
    }
}
