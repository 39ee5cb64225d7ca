//! The text buffer collaborator: document, selection, and intentional column.
//!
//! `TextArea` owns the document and the cursor/selection state, and exposes
//! the narrow contract the command interpreter depends on: location queries,
//! a single "move cursor" primitive, and a handful of total mutation
//! primitives. The interpreter never writes the cursor's row or column
//! directly; it computes a target location and requests a move.
//!
//! # Intentional column
//!
//! Vertical motion over lines of differing length should preserve the user's
//! original horizontal intent. `TextArea` remembers the display-cell width of
//! the cursor column whenever a horizontal move or an edit lands the cursor
//! somewhere new, and vertical moves (requested through
//! [`TextArea::move_cursor_vertical`]) leave that memory untouched so that
//! successive up/down motions keep tracking the same visual column.
//!
//! # Example
//!
//! ```
//! use linequill::buffer::{Location, TextArea};
//!
//! let mut area = TextArea::from_text("abc\nde");
//! area.move_cursor(Location::new(0, 3), false);
//! assert_eq!(area.intentional_width(), 3);
//!
//! // A vertical move clamps to the shorter line but keeps the intent
//! area.move_cursor_vertical(Location::new(1, 2));
//! assert_eq!(area.cursor(), Location::new(1, 2));
//! assert_eq!(area.intentional_width(), 3);
//! ```

use super::document::{Document, Location};

/// An (anchor, active) pair of locations.
///
/// When the anchor equals the active location the selection is a plain
/// cursor with no highlighted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: Location,
    pub active: Location,
}

impl Selection {
    /// A collapsed selection (plain cursor) at `loc`.
    pub const fn cursor(loc: Location) -> Self {
        Self {
            anchor: loc,
            active: loc,
        }
    }

    /// True when no range is highlighted.
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }
}

/// The text buffer with cursor state.
#[derive(Debug, Clone)]
pub struct TextArea {
    document: Document,
    selection: Selection,
    intentional_width: usize,
}

impl TextArea {
    /// Creates an empty text area (single empty line, cursor at the origin).
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            selection: Selection::cursor(Location::zero()),
            intentional_width: 0,
        }
    }

    /// Creates a text area from initial text.
    pub fn from_text(text: &str) -> Self {
        Self {
            document: Document::from_text(text),
            selection: Selection::cursor(Location::zero()),
            intentional_width: 0,
        }
    }

    /// Replaces the buffer's content wholesale, resetting the cursor.
    pub fn load_text(&mut self, text: &str) {
        self.document = Document::from_text(text);
        self.selection = Selection::cursor(Location::zero());
        self.intentional_width = 0;
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The active end of the selection (the cursor).
    pub fn cursor(&self) -> Location {
        self.selection.active
    }

    /// The remembered display-cell width vertical motion aims for.
    pub fn intentional_width(&self) -> usize {
        self.intentional_width
    }

    // Location queries

    pub fn at_document_start(&self) -> bool {
        self.cursor() == Location::zero()
    }

    pub fn at_document_end(&self) -> bool {
        let cursor = self.cursor();
        self.at_last_line() && cursor.column == self.document.line_len(cursor.row)
    }

    pub fn at_line_start(&self) -> bool {
        self.cursor().column == 0
    }

    pub fn at_line_end(&self) -> bool {
        let cursor = self.cursor();
        cursor.column == self.document.line_len(cursor.row)
    }

    pub fn at_first_line(&self) -> bool {
        self.cursor().row == 0
    }

    pub fn at_last_line(&self) -> bool {
        self.cursor().row == self.document.line_count() - 1
    }

    // Cursor movement

    /// Moves the cursor to `loc` (clamped), optionally extending the
    /// selection, and records the landing column's display width as the new
    /// intentional column.
    ///
    /// Selection extension is accepted for contract completeness; the
    /// current command set always passes `extend = false`.
    pub fn move_cursor(&mut self, loc: Location, extend: bool) {
        let loc = self.document.clamp(loc);
        self.selection.active = loc;
        if !extend {
            self.selection.anchor = loc;
        }
        self.intentional_width = self.document.column_to_width(loc.row, loc.column);
    }

    /// Moves the cursor to `loc` (clamped) without touching the intentional
    /// column, so successive vertical motions keep the original horizontal
    /// intent.
    pub fn move_cursor_vertical(&mut self, loc: Location) {
        let loc = self.document.clamp(loc);
        self.selection.active = loc;
        self.selection.anchor = loc;
    }

    // Mutation primitives

    /// Inserts `text` at `at` (clamped), splitting on line terminators, and
    /// moves the cursor to the end of the inserted text.
    ///
    /// Returns the cursor's new location.
    pub fn insert_text(&mut self, text: &str, at: Location) -> Location {
        let at = self.document.clamp(at);
        let mut row = at.row;
        let mut column = at.column;

        let mut segments = text.split('\n');
        if let Some(first) = segments.next() {
            self.document.insert_str(Location::new(row, column), first);
            column += first.chars().count();
        }
        for segment in segments {
            self.document.split_line(Location::new(row, column));
            row += 1;
            column = 0;
            self.document.insert_str(Location::new(row, column), segment);
            column = segment.chars().count();
        }

        let end = Location::new(row, column);
        self.move_cursor(end, false);
        end
    }

    /// Inserts `text` at the cursor.
    pub fn insert_at_cursor(&mut self, text: &str) -> Location {
        self.insert_text(text, self.cursor())
    }

    /// Deletes the character left of the cursor, joining with the previous
    /// line when at a line start. No-op at the document start.
    pub fn delete_left(&mut self) {
        let cursor = self.cursor();
        if cursor.column > 0 {
            let target = Location::new(cursor.row, cursor.column - 1);
            self.document.remove_char(target);
            self.move_cursor(target, false);
        } else if cursor.row > 0 {
            let prev_len = self.document.line_len(cursor.row - 1);
            self.document.join_with_next(cursor.row - 1);
            self.move_cursor(Location::new(cursor.row - 1, prev_len), false);
        }
    }

    /// Deletes the character at the cursor, joining with the next line when
    /// at a line end. No-op at the document end. The cursor does not move.
    pub fn delete_right(&mut self) {
        let cursor = self.cursor();
        if cursor.column < self.document.line_len(cursor.row) {
            self.document.remove_char(cursor);
        } else {
            self.document.join_with_next(cursor.row);
        }
    }

    /// Deletes from the cursor to the end of the current line.
    pub fn delete_to_line_end(&mut self) {
        self.document.truncate_line(self.cursor());
    }
}

impl Default for TextArea {
    fn default() -> Self {
        Self::new()
    }
}
