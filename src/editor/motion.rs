//! The motion engine: pure cursor arithmetic.
//!
//! Every function here computes a new [`Location`] from the document and the
//! current cursor without mutating anything. The results are fed to the text
//! area's single move-cursor primitive. Motions are total: at a boundary
//! they return the input location unchanged rather than failing.
//!
//! Two semantics distinguish these from a plain text widget's defaults:
//!
//! - Horizontal motion never wraps across line boundaries.
//! - Vertical motion maps the remembered intentional column (a display-cell
//!   width) back to a character column on the destination row, producing the
//!   "ragged edge" feel over lines of differing length while preserving the
//!   user's original horizontal intent.
//!
//! # Example
//!
//! ```
//! use linequill::buffer::{Document, Location};
//! use linequill::editor::motion;
//!
//! let doc = Document::from_text("abc\nde");
//!
//! // No wrap: left at a line start stays put
//! let loc = motion::left_no_wrap(&doc, Location::new(1, 0));
//! assert_eq!(loc, Location::new(1, 0));
//!
//! // Vertical motion clamps to the destination line via the intent width
//! let loc = motion::down(&doc, Location::new(0, 3), 3);
//! assert_eq!(loc, Location::new(1, 2));
//! ```

use crate::buffer::{Document, Location};

/// Moves one column left, refusing to wrap to the previous line's end.
///
/// At the absolute start of the document (and at any line start) the
/// location is unchanged.
pub fn left_no_wrap(_doc: &Document, at: Location) -> Location {
    if at == Location::zero() {
        return Location::zero();
    }
    if at.column == 0 {
        return at;
    }
    Location::new(at.row, at.column - 1)
}

/// Moves one column right, refusing to wrap to the next line's start.
///
/// At the absolute end of the document (and at any line end) the location is
/// unchanged. Note the motion itself allows the cursor to land one past the
/// last character; normal-mode parking on a character is enforced by the
/// mutation operations and `line_end`, not here.
pub fn right_no_wrap(doc: &Document, at: Location) -> Location {
    if at.column < doc.line_len(at.row) {
        Location::new(at.row, at.column + 1)
    } else {
        at
    }
}

/// Moves one row up, mapping `intent_width` (a display-cell width) back to a
/// character column on the destination row. No-op on the first line.
pub fn up(doc: &Document, at: Location, intent_width: usize) -> Location {
    if at.row == 0 {
        return at;
    }
    let row = at.row - 1;
    Location::new(row, doc.width_to_column(row, intent_width))
}

/// Moves one row down, mapping `intent_width` back to a character column on
/// the destination row. No-op on the last line.
pub fn down(doc: &Document, at: Location, intent_width: usize) -> Location {
    if at.row + 1 >= doc.line_count() {
        return at;
    }
    let row = at.row + 1;
    Location::new(row, doc.width_to_column(row, intent_width))
}

/// Moves to column 0, or to the first non-whitespace character when
/// `first_non_white` is set (column 0 if the line is all whitespace).
pub fn line_start(doc: &Document, at: Location, first_non_white: bool) -> Location {
    let column = if first_non_white {
        doc.first_non_white_column(at.row)
    } else {
        0
    };
    Location::new(at.row, column)
}

/// Moves to the last character of the line, so the cursor rests *on* it
/// rather than one past it. Column 0 when the line is empty.
pub fn line_end(doc: &Document, at: Location) -> Location {
    let len = doc.line_len(at.row);
    Location::new(at.row, len.saturating_sub(1))
}

/// Moves to the first line, preserving the column (clamped to the
/// destination line's length).
pub fn first_line(doc: &Document, at: Location) -> Location {
    doc.clamp(Location::new(0, at.column))
}

/// Moves to the last line, preserving the column (clamped to the destination
/// line's length).
pub fn last_line(doc: &Document, at: Location) -> Location {
    doc.clamp(Location::new(doc.line_count() - 1, at.column))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> Document {
        Document::from_text(text)
    }

    #[test]
    fn test_left_inside_line() {
        let d = doc("abc");
        assert_eq!(left_no_wrap(&d, Location::new(0, 2)), Location::new(0, 1));
    }

    #[test]
    fn test_left_refuses_to_wrap() {
        let d = doc("abc\ndef");
        assert_eq!(left_no_wrap(&d, Location::new(1, 0)), Location::new(1, 0));
    }

    #[test]
    fn test_left_at_document_start() {
        let d = doc("abc");
        assert_eq!(left_no_wrap(&d, Location::zero()), Location::zero());
    }

    #[test]
    fn test_right_inside_line_allows_one_past_end() {
        let d = doc("abc");
        assert_eq!(right_no_wrap(&d, Location::new(0, 2)), Location::new(0, 3));
    }

    #[test]
    fn test_right_refuses_to_wrap() {
        let d = doc("abc\ndef");
        assert_eq!(right_no_wrap(&d, Location::new(0, 3)), Location::new(0, 3));
    }

    #[test]
    fn test_right_at_document_end() {
        let d = doc("abc");
        assert_eq!(right_no_wrap(&d, Location::new(0, 3)), Location::new(0, 3));
    }

    #[test]
    fn test_left_right_are_inverses_inside_a_line() {
        let d = doc("abcdef");
        let p = Location::new(0, 3);
        assert_eq!(left_no_wrap(&d, right_no_wrap(&d, p)), p);
        assert_eq!(right_no_wrap(&d, left_no_wrap(&d, p)), p);
    }

    #[test]
    fn test_up_at_first_line_is_noop() {
        let d = doc("abc\ndef");
        assert_eq!(up(&d, Location::new(0, 2), 2), Location::new(0, 2));
    }

    #[test]
    fn test_down_at_last_line_is_noop() {
        let d = doc("abc\ndef");
        assert_eq!(down(&d, Location::new(1, 1), 1), Location::new(1, 1));
    }

    #[test]
    fn test_vertical_motion_clamps_to_shorter_line() {
        let d = doc("abc\nde");
        assert_eq!(down(&d, Location::new(0, 3), 3), Location::new(1, 2));
    }

    #[test]
    fn test_vertical_motion_restores_intent_on_longer_line() {
        let d = doc("abcdef\nab\ncdefgh");
        // Start at (0, 5), move down twice with intent width 5
        let mid = down(&d, Location::new(0, 5), 5);
        assert_eq!(mid, Location::new(1, 2));
        let bottom = down(&d, mid, 5);
        assert_eq!(bottom, Location::new(2, 5));
    }

    #[test]
    fn test_vertical_motion_with_wide_chars() {
        // "日本" is 4 cells wide; intent width 3 lands inside the second
        // character, resolving to column 1
        let d = doc("abcd\n日本");
        assert_eq!(down(&d, Location::new(0, 3), 3), Location::new(1, 1));
    }

    #[test]
    fn test_line_start_plain() {
        let d = doc("  abc");
        assert_eq!(
            line_start(&d, Location::new(0, 4), false),
            Location::new(0, 0)
        );
    }

    #[test]
    fn test_line_start_first_non_white() {
        let d = doc("  abc");
        assert_eq!(
            line_start(&d, Location::new(0, 4), true),
            Location::new(0, 2)
        );
    }

    #[test]
    fn test_line_start_all_whitespace_line() {
        let d = doc("    ");
        assert_eq!(
            line_start(&d, Location::new(0, 3), true),
            Location::new(0, 0)
        );
    }

    #[test]
    fn test_line_end_rests_on_last_character() {
        let d = doc("abc");
        assert_eq!(line_end(&d, Location::new(0, 0)), Location::new(0, 2));
    }

    #[test]
    fn test_line_end_on_empty_line() {
        let d = doc("");
        assert_eq!(line_end(&d, Location::zero()), Location::zero());
    }

    #[test]
    fn test_line_end_then_start_then_end_is_idempotent() {
        let d = doc("abcdef");
        let e1 = line_end(&d, Location::new(0, 2));
        let s = line_start(&d, e1, false);
        let e2 = line_end(&d, s);
        assert_eq!(e1, e2);
    }

    #[test]
    fn test_first_line_preserves_column() {
        let d = doc("abcdef\nxy\nlonger");
        assert_eq!(first_line(&d, Location::new(2, 4)), Location::new(0, 4));
    }

    #[test]
    fn test_last_line_clamps_column() {
        let d = doc("abcdef\nxy");
        assert_eq!(last_line(&d, Location::new(0, 5)), Location::new(1, 2));
    }

    #[test]
    fn test_first_last_line_are_inverses_on_equal_length_lines() {
        let d = doc("abcd\nzz\nefgh");
        let p = Location::new(0, 3);
        assert_eq!(first_line(&d, last_line(&d, p)), p);
    }
}
