//! Input event handler for polling and routing keyboard events.

use crate::editor::{FocusTarget, VimEditor};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Stdin};
use std::time::Duration;
use termion::event::{Event, Key};
use termion::input::{Events, TermRead};

/// Event source for reading terminal events.
///
/// This enum wraps the events iterator to maintain its state across
/// multiple calls, preventing character loss during rapid input (paste).
enum EventSource {
    /// Reading from stdin
    Stdin(Events<Stdin>),
    /// Reading from /dev/tty (when stdin was piped)
    Tty(Events<File>),
}

/// Polls for termion events and routes them to the editor.
///
/// Routing depends on which collaborator holds focus: while the command
/// register is focused, printable keys accumulate as pending command keys;
/// while the text area is focused, keys pass through as literal edits and
/// escape requests focus back (the resulting blur returns the editor to
/// Normal mode).
pub struct InputHandler {
    /// Event source iterator (maintains position in the input buffer)
    events: EventSource,
}

impl InputHandler {
    /// Creates an InputHandler that reads from stdin.
    pub fn new() -> Self {
        Self {
            events: EventSource::Stdin(io::stdin().events()),
        }
    }

    /// Creates an InputHandler that reads from /dev/tty.
    /// Use this when stdin has been consumed for piped data.
    pub fn new_with_tty() -> Result<Self> {
        let tty_file = File::options()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .context("Failed to open /dev/tty for keyboard input")?;

        Ok(Self {
            events: EventSource::Tty(tty_file.events()),
        })
    }

    /// Polls for a terminal event.
    ///
    /// Returns Some(Event) if an event occurred, None otherwise.
    pub fn poll_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
        match &mut self.events {
            EventSource::Stdin(events) => {
                if let Some(event_result) = events.next() {
                    return Ok(Some(event_result?));
                }
            }
            EventSource::Tty(events) => {
                if let Some(event_result) = events.next() {
                    return Ok(Some(event_result?));
                }
            }
        }

        Ok(None)
    }

    /// Handles a terminal event against the editor.
    ///
    /// Returns Ok(true) if the application should quit.
    pub fn handle_event(&mut self, event: Event, editor: &mut VimEditor) -> Result<bool> {
        let key = match event {
            Event::Key(key) => key,
            _ => return Ok(false),
        };

        // Host-shell quit keys work in either mode
        if matches!(key, Key::Ctrl('q') | Key::Ctrl('c')) {
            return Ok(true);
        }

        match editor.focus() {
            FocusTarget::CommandRegister => match key {
                // Abandon a pending prefix ("g" waiting for its second key)
                Key::Esc => editor.clear_pending_keys(),
                Key::Char(c) if !c.is_control() => editor.push_command_key(c),
                _ => {}
            },
            FocusTarget::TextArea => match key {
                // Escape is a focus shift, not a command; the blur drives
                // the mode transition
                Key::Esc => editor.focus_command_register(),
                Key::Char('\n') => editor.insert_at_cursor("\n"),
                Key::Char(c) => editor.insert_at_cursor(&c.to_string()),
                Key::Backspace => editor.delete_left(),
                Key::Delete => editor.delete_right(),
                Key::Left => editor.move_left(),
                Key::Right => editor.move_right(),
                Key::Up => editor.move_up(),
                Key::Down => editor.move_down(),
                Key::Home => editor.move_line_start(false),
                Key::End => editor.move_line_end(),
                _ => {}
            },
        }

        Ok(false)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
