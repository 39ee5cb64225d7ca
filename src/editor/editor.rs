//! The composed modal editor.
//!
//! `VimEditor` wires the text area, the command register, and the mode
//! state together with explicit references rather than any ambient widget
//! lookup. It plays three roles:
//!
//! - **Mode controller**: owns the [`Mode`] value, the status indicator
//!   text, and the one-directional mode-to-focus relationship. Entering
//!   Insert is always request-initiated; returning to Normal is always
//!   triggered by observing the text area blur, never by a key directly.
//! - **Command dispatch**: feeds pending keys through the resolver and
//!   executes the bound action against the motion engine or the mutation
//!   operations.
//! - **Mutation operations**: the insert-entering, line-opening, and
//!   deleting commands, expressed in terms of the text area's primitives.
//!
//! # Example
//!
//! ```
//! use linequill::editor::editor::VimEditor;
//! use linequill::editor::mode::Mode;
//! use linequill::buffer::Location;
//!
//! let mut editor = VimEditor::from_text("one\ntwo");
//! editor.push_command_key('j');
//! assert_eq!(editor.cursor(), Location::new(1, 0));
//!
//! editor.push_command_key('i');
//! assert_eq!(editor.mode(), Mode::Insert);
//! ```

use crate::buffer::{Document, Location, TextArea};
use crate::input::commands::{resolve, Action, DeleteStyle, InsertStyle, OpenStyle, Resolution};
use crate::input::register::CommandRegister;

use super::focus::{FocusEvent, FocusTarget};
use super::mode::Mode;
use super::motion;

/// Status indicator text shown while in Insert mode.
pub const INSERT_MARKER: &str = "-- INSERT --";

/// The composed editor: text area, command register, mode, and focus.
#[derive(Debug)]
pub struct VimEditor {
    area: TextArea,
    register: CommandRegister,
    mode: Mode,
    indicator: String,
    focus: FocusTarget,
}

impl VimEditor {
    /// Creates an editor over an empty document, in Normal mode with the
    /// command register focused.
    pub fn new() -> Self {
        Self {
            area: TextArea::new(),
            register: CommandRegister::new(),
            mode: Mode::Normal,
            indicator: String::new(),
            focus: FocusTarget::CommandRegister,
        }
    }

    /// Creates an editor over initial text.
    pub fn from_text(text: &str) -> Self {
        let mut editor = Self::new();
        editor.area.load_text(text);
        editor
    }

    /// Replaces the buffer's content wholesale and resets to Normal mode.
    pub fn load_text(&mut self, text: &str) {
        self.area.load_text(text);
        self.register.clear();
        self.mode = Mode::Normal;
        self.indicator.clear();
        self.focus = FocusTarget::CommandRegister;
    }

    // Accessors

    pub fn area(&self) -> &TextArea {
        &self.area
    }

    pub fn document(&self) -> &Document {
        self.area.document()
    }

    pub fn cursor(&self) -> Location {
        self.area.cursor()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    /// The status indicator text ("-- INSERT --" in Insert mode, empty in
    /// Normal mode).
    pub fn indicator(&self) -> &str {
        &self.indicator
    }

    /// The pending command keys typed so far.
    pub fn pending_keys(&self) -> &str {
        self.register.value()
    }

    // Command resolution

    /// Appends a typed key to the pending command keys and attempts to
    /// resolve them against the command table.
    ///
    /// The resolver is only active while the command register has focus;
    /// keys typed in Insert mode pass through to text insertion instead.
    pub fn push_command_key(&mut self, key: char) {
        if self.focus != FocusTarget::CommandRegister {
            return;
        }
        self.register.push_key(key);
        match resolve(self.register.value()) {
            Resolution::Dispatch(action) => {
                self.register.clear();
                self.apply(action);
            }
            Resolution::Pending => {}
            // Invalid sequence: drop the whole pending buffer silently
            Resolution::Unrecognized => self.register.clear(),
        }
    }

    /// Abandons any pending prefix (a lone "g" waiting for its second key).
    pub fn clear_pending_keys(&mut self) {
        self.register.clear();
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::MoveLineStart { first_non_white } => self.move_line_start(first_non_white),
            Action::MoveLineEnd => self.move_line_end(),
            Action::MoveUp => self.move_up(),
            Action::MoveDown => self.move_down(),
            Action::MoveFirstLine => self.move_first_line(),
            Action::MoveLastLine => self.move_last_line(),
            Action::EnterEdit(style) => self.enter_edit(style),
            Action::OpenLine(style) => self.open_line(style),
            Action::DeleteText(style) => self.delete_text(style),
        }
    }

    // Mode controller

    /// Enters Insert mode: sets the indicator and transfers focus to the
    /// text area. Idempotent if already in Insert mode.
    pub fn enter_insert(&mut self) {
        self.set_focus(FocusTarget::TextArea);
        self.begin_insert();
    }

    /// Enters Normal mode: clears the indicator and transfers focus to the
    /// command register. Idempotent if already in Normal mode.
    pub fn enter_normal(&mut self) {
        self.set_focus(FocusTarget::CommandRegister);
        self.end_insert();
    }

    /// Requests focus back to the command register. In Insert mode this is
    /// the escape path: the resulting blur of the text area (not the key
    /// that caused it) drives the transition to Normal mode.
    pub fn focus_command_register(&mut self) {
        self.set_focus(FocusTarget::CommandRegister);
    }

    /// Handles a focus notification.
    ///
    /// A blur of the text area, whether requested through this editor or
    /// observed from the outside (the user activating a different region),
    /// steps the cursor one position left and transitions to Normal mode.
    pub fn handle_focus_event(&mut self, event: FocusEvent) {
        match event {
            FocusEvent::Blurred(FocusTarget::TextArea) => {
                // The command field reclaims focus when the buffer loses it
                self.focus = FocusTarget::CommandRegister;
                let target = motion::left_no_wrap(self.area.document(), self.area.cursor());
                self.area.move_cursor(target, false);
                self.end_insert();
            }
            FocusEvent::Focused(FocusTarget::TextArea) => self.begin_insert(),
            FocusEvent::Blurred(FocusTarget::CommandRegister)
            | FocusEvent::Focused(FocusTarget::CommandRegister) => {}
        }
    }

    /// Transfers focus, synchronously delivering the blur and focus
    /// notifications before returning.
    fn set_focus(&mut self, target: FocusTarget) {
        if self.focus == target {
            return;
        }
        let previous = self.focus;
        self.focus = target;
        self.handle_focus_event(FocusEvent::Blurred(previous));
        self.handle_focus_event(FocusEvent::Focused(target));
    }

    fn begin_insert(&mut self) {
        self.mode = Mode::Insert;
        self.indicator = INSERT_MARKER.to_string();
    }

    fn end_insert(&mut self) {
        self.mode = Mode::Normal;
        self.indicator.clear();
    }

    // Left-right motions

    pub fn move_left(&mut self) {
        let target = motion::left_no_wrap(self.area.document(), self.area.cursor());
        self.area.move_cursor(target, false);
    }

    pub fn move_right(&mut self) {
        let target = motion::right_no_wrap(self.area.document(), self.area.cursor());
        self.area.move_cursor(target, false);
    }

    pub fn move_line_start(&mut self, first_non_white: bool) {
        let target = motion::line_start(self.area.document(), self.area.cursor(), first_non_white);
        self.area.move_cursor(target, false);
    }

    pub fn move_line_end(&mut self) {
        let target = motion::line_end(self.area.document(), self.area.cursor());
        self.area.move_cursor(target, false);
    }

    // Up-down motions

    pub fn move_up(&mut self) {
        let target = motion::up(
            self.area.document(),
            self.area.cursor(),
            self.area.intentional_width(),
        );
        self.area.move_cursor_vertical(target);
    }

    pub fn move_down(&mut self) {
        let target = motion::down(
            self.area.document(),
            self.area.cursor(),
            self.area.intentional_width(),
        );
        self.area.move_cursor_vertical(target);
    }

    pub fn move_first_line(&mut self) {
        let target = motion::first_line(self.area.document(), self.area.cursor());
        self.area.move_cursor(target, false);
    }

    pub fn move_last_line(&mut self) {
        let target = motion::last_line(self.area.document(), self.area.cursor());
        self.area.move_cursor(target, false);
    }

    // Inserting text

    fn enter_edit(&mut self, style: InsertStyle) {
        match style {
            InsertStyle::Append => self.move_right(),
            InsertStyle::AppendAtLineEnd => {
                // Appending continues past the last character, unlike the
                // normal-mode "$" motion which parks on it
                let cursor = self.area.cursor();
                let len = self.area.document().line_len(cursor.row);
                self.area.move_cursor(Location::new(cursor.row, len), false);
            }
            InsertStyle::Insert => {}
            InsertStyle::InsertAtLineStart => self.move_line_start(true),
        }
        self.enter_insert();
    }

    fn open_line(&mut self, style: OpenStyle) {
        let cursor = self.area.cursor();
        match style {
            OpenStyle::Below => {
                let len = self.area.document().line_len(cursor.row);
                self.area.insert_text("\n", Location::new(cursor.row, len));
            }
            OpenStyle::Above => {
                self.area.insert_text("\n", Location::new(cursor.row, 0));
                self.move_up();
            }
        }
        self.enter_insert();
    }

    // Deleting text

    fn delete_text(&mut self, style: DeleteStyle) {
        match style {
            DeleteStyle::Char => {
                if !self.area.at_line_end() {
                    self.area.delete_right();
                    // Keep the cursor parked on a character, not past the end
                    if self.area.at_line_end() {
                        self.move_left();
                    }
                }
            }
            DeleteStyle::CharBefore => {
                if !self.area.at_line_start() {
                    self.area.delete_left();
                }
            }
            DeleteStyle::ToLineEnd => {
                self.area.delete_to_line_end();
                self.move_left();
            }
            DeleteStyle::Change => {
                self.area.delete_to_line_end();
                self.enter_insert();
            }
        }
    }

    // Insert-mode passthrough, delegated to by the input handler while the
    // text area has focus

    pub fn insert_at_cursor(&mut self, text: &str) {
        self.area.insert_at_cursor(text);
    }

    pub fn delete_left(&mut self) {
        self.area.delete_left();
    }

    pub fn delete_right(&mut self) {
        self.area.delete_right();
    }
}

impl Default for VimEditor {
    fn default() -> Self {
        Self::new()
    }
}
