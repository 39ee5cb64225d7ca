//! Text view widget: renders the document with the cursor highlighted.
//!
//! The view keeps the cursor row visible with a simple scroll offset and
//! highlights the cursor cell with reversed video. Line numbers are
//! optional, absolute or relative to the cursor row.

use crate::editor::VimEditor;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the document into `area`.
pub fn render_text_view(
    f: &mut Frame,
    area: Rect,
    editor: &VimEditor,
    show_line_numbers: bool,
    relative_line_numbers: bool,
) {
    let doc = editor.document();
    let cursor = editor.cursor();

    let height = area.height as usize;
    // Keep the cursor row in view
    let offset = if height > 0 && cursor.row >= height {
        cursor.row + 1 - height
    } else {
        0
    };

    let gutter_width = if show_line_numbers {
        digit_count(doc.line_count()).max(3)
    } else {
        0
    };
    let gutter_style = Style::default().fg(Color::DarkGray);
    let cursor_style = Style::default().add_modifier(Modifier::REVERSED);

    let mut lines = Vec::new();
    for row in (offset..doc.line_count()).take(height) {
        let mut spans = Vec::new();

        if show_line_numbers {
            let number = if relative_line_numbers && row != cursor.row {
                row.abs_diff(cursor.row)
            } else {
                row + 1
            };
            let style = if row == cursor.row {
                gutter_style.add_modifier(Modifier::BOLD)
            } else {
                gutter_style
            };
            spans.push(Span::styled(
                format!("{:>width$} ", number, width = gutter_width),
                style,
            ));
        }

        let text = doc.line(row).unwrap_or("");
        if row == cursor.row {
            let before: String = text.chars().take(cursor.column).collect();
            // Past the line end, the cursor sits on a phantom space
            let at: String = text
                .chars()
                .nth(cursor.column)
                .map(String::from)
                .unwrap_or_else(|| " ".to_string());
            let after: String = text.chars().skip(cursor.column + 1).collect();

            spans.push(Span::raw(before));
            spans.push(Span::styled(at, cursor_style));
            spans.push(Span::raw(after));
        } else {
            spans.push(Span::raw(text.to_string()));
        }

        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn digit_count(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}
