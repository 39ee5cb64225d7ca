//! Line-oriented document storage and position types.
//!
//! This module provides the `Document` struct that stores text as an ordered
//! sequence of lines, and the `Location` struct that identifies a cursor
//! position within it. The document maintains the invariant that it always
//! contains at least one line (possibly empty), so every valid row index can
//! be queried without special-casing the empty document.
//!
//! # Columns and display cells
//!
//! Columns are character indices, not bytes. A column may equal the line's
//! character count, denoting the position after the last character. Because
//! some characters occupy more than one terminal cell, the document also
//! converts between character columns and display-cell widths; vertical
//! motion uses the width form to stay visually aligned across lines of
//! differing content.
//!
//! # Example
//!
//! ```
//! use linequill::buffer::{Document, Location};
//!
//! let doc = Document::from_text("hello\nworld");
//! assert_eq!(doc.line_count(), 2);
//! assert_eq!(doc.line(1), Some("world"));
//! assert_eq!(doc.line_len(0), 5);
//! ```

use unicode_width::UnicodeWidthChar;

/// A (row, column) position in a document.
///
/// The row is a 0-based line index; the column is a 0-based character index
/// within that line and may equal the line length (one past the last
/// character).
///
/// # Examples
///
/// ```
/// use linequill::buffer::Location;
///
/// let loc = Location::new(2, 5);
/// assert_eq!(loc.row, 2);
/// assert_eq!(loc.column, 5);
/// assert_eq!(Location::zero(), Location::new(0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub row: usize,
    pub column: usize,
}

impl Location {
    /// Creates a new location from a row and column.
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The document origin, (0, 0).
    pub const fn zero() -> Self {
        Self { row: 0, column: 0 }
    }
}

/// Ordered sequence of text lines.
///
/// Invariant: the document always holds at least one line. Loading empty
/// text produces a single empty line rather than zero lines.
///
/// # Examples
///
/// ```
/// use linequill::buffer::Document;
///
/// let doc = Document::new();
/// assert_eq!(doc.line_count(), 1);
/// assert_eq!(doc.line(0), Some(""));
///
/// let doc = Document::from_text("one\ntwo");
/// assert_eq!(doc.to_text(), "one\ntwo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Creates a document containing a single empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Creates a document from text, splitting on line terminators.
    ///
    /// Empty input yields a single empty line to preserve the line-count
    /// invariant.
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<String> = if text.is_empty() {
            vec![String::new()]
        } else {
            text.lines().map(|s| s.to_string()).collect()
        };
        Self { lines }
    }

    /// Joins the lines back into a single newline-separated string.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Returns the number of lines (always >= 1).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the line at `row`, or `None` if out of range.
    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Returns the character count of the line at `row` (0 if out of range).
    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map(|s| s.chars().count()).unwrap_or(0)
    }

    /// Returns all lines as a slice.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the column of the first non-whitespace character on `row`,
    /// or 0 if the line is empty or all whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use linequill::buffer::Document;
    ///
    /// let doc = Document::from_text("  indented\n\t\t");
    /// assert_eq!(doc.first_non_white_column(0), 2);
    /// assert_eq!(doc.first_non_white_column(1), 0);
    /// ```
    pub fn first_non_white_column(&self, row: usize) -> usize {
        self.line(row)
            .and_then(|line| line.chars().position(|c| !c.is_whitespace()))
            .unwrap_or(0)
    }

    /// Converts a character column on `row` to a display-cell width.
    ///
    /// The result is the total cell width of the characters before `column`.
    /// Columns past the end of the line yield the full line width.
    pub fn column_to_width(&self, row: usize, column: usize) -> usize {
        self.line(row)
            .map(|line| {
                line.chars()
                    .take(column)
                    .map(|c| c.width().unwrap_or(0))
                    .sum()
            })
            .unwrap_or(0)
    }

    /// Converts a display-cell width back to a character column on `row`.
    ///
    /// Returns the index of the character whose cell range contains `width`,
    /// or the line length when `width` reaches past the end of the line.
    ///
    /// # Examples
    ///
    /// ```
    /// use linequill::buffer::Document;
    ///
    /// let doc = Document::from_text("de");
    /// // A remembered width of 3 clamps to the end of the shorter line.
    /// assert_eq!(doc.width_to_column(0, 3), 2);
    /// assert_eq!(doc.width_to_column(0, 0), 0);
    /// ```
    pub fn width_to_column(&self, row: usize, width: usize) -> usize {
        let line = match self.line(row) {
            Some(line) => line,
            None => return 0,
        };
        let mut total = 0;
        for (index, c) in line.chars().enumerate() {
            total += c.width().unwrap_or(0);
            if total > width {
                return index;
            }
        }
        line.chars().count()
    }

    /// Clamps a location to a valid position within the document.
    ///
    /// The row is clamped to the last line; the column is clamped to the
    /// destination line's length (inclusive, allowing one past the end).
    pub fn clamp(&self, loc: Location) -> Location {
        let row = loc.row.min(self.line_count() - 1);
        let column = loc.column.min(self.line_len(row));
        Location::new(row, column)
    }

    /// Inserts a character at `loc`. Returns false if `loc` is out of range.
    pub fn insert_char(&mut self, loc: Location, ch: char) -> bool {
        let byte = match self.byte_index(loc) {
            Some(byte) => byte,
            None => return false,
        };
        self.lines[loc.row].insert(byte, ch);
        true
    }

    /// Inserts a string (which must not contain line terminators) at `loc`.
    ///
    /// Returns false if `loc` is out of range.
    pub fn insert_str(&mut self, loc: Location, s: &str) -> bool {
        debug_assert!(!s.contains('\n'), "insert_str cannot insert line terminators");
        let byte = match self.byte_index(loc) {
            Some(byte) => byte,
            None => return false,
        };
        self.lines[loc.row].insert_str(byte, s);
        true
    }

    /// Splits the line at `loc` in two, inserting a line terminator.
    ///
    /// Returns false if `loc` is out of range.
    pub fn split_line(&mut self, loc: Location) -> bool {
        let byte = match self.byte_index(loc) {
            Some(byte) => byte,
            None => return false,
        };
        let rest = self.lines[loc.row].split_off(byte);
        self.lines.insert(loc.row + 1, rest);
        true
    }

    /// Removes the character at `loc`. Returns false if there is no
    /// character at that position.
    pub fn remove_char(&mut self, loc: Location) -> bool {
        if loc.column >= self.line_len(loc.row) {
            return false;
        }
        let byte = match self.byte_index(loc) {
            Some(byte) => byte,
            None => return false,
        };
        self.lines[loc.row].remove(byte);
        true
    }

    /// Truncates the line at `loc`, removing everything from the column to
    /// the end of the line. Returns false if `loc` is out of range.
    pub fn truncate_line(&mut self, loc: Location) -> bool {
        let byte = match self.byte_index(loc) {
            Some(byte) => byte,
            None => return false,
        };
        self.lines[loc.row].truncate(byte);
        true
    }

    /// Joins the line at `row + 1` onto the end of the line at `row`.
    ///
    /// Returns false if there is no following line.
    pub fn join_with_next(&mut self, row: usize) -> bool {
        if row + 1 >= self.lines.len() {
            return false;
        }
        let next = self.lines.remove(row + 1);
        self.lines[row].push_str(&next);
        true
    }

    /// Byte index of the character column at `loc`, or `None` if the
    /// location is out of range.
    fn byte_index(&self, loc: Location) -> Option<usize> {
        let line = self.lines.get(loc.row)?;
        if loc.column > line.chars().count() {
            return None;
        }
        Some(
            line.char_indices()
                .nth(loc.column)
                .map(|(byte, _)| byte)
                .unwrap_or(line.len()),
        )
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
