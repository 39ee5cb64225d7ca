//! The command table and key-sequence resolver.
//!
//! Normal-mode keys accumulate in the command register and are matched
//! against a static, insertion-ordered command table. Most commands are a
//! single key; "gg" is a two-key sequence, so a lone "g" is a valid prefix
//! that waits (indefinitely) for more input.
//!
//! Resolution happens on every change to the pending keys:
//!
//! - an exact match (longest defined sequence first) dispatches the bound
//!   action and clears the pending keys
//! - a strict prefix of a multi-key command waits for more input
//! - anything else is dropped silently, clearing the whole pending buffer
//!
//! # Example
//!
//! ```
//! use linequill::input::commands::{resolve, Action, Resolution};
//!
//! assert_eq!(resolve("j"), Resolution::Dispatch(Action::MoveDown));
//! assert_eq!(resolve("g"), Resolution::Pending);
//! assert_eq!(resolve("gg"), Resolution::Dispatch(Action::MoveFirstLine));
//! assert_eq!(resolve("gx"), Resolution::Unrecognized);
//! ```

/// Which of the insert-entering keys was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertStyle {
    /// "a": move right, then insert.
    Append,
    /// "A": move to the end of the line, then insert.
    AppendAtLineEnd,
    /// "i": insert at the cursor with no motion.
    Insert,
    /// "I": move to the first non-whitespace column, then insert.
    InsertAtLineStart,
}

/// Which side of the current row an opened line goes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenStyle {
    /// "o": new empty line below the current row.
    Below,
    /// "O": new empty line above the current row.
    Above,
}

/// Which delete command was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStyle {
    /// "x": delete the character at the cursor.
    Char,
    /// "X": delete the character left of the cursor.
    CharBefore,
    /// "D": delete from the cursor to the end of the line.
    ToLineEnd,
    /// "C": delete to the end of the line, then enter Insert mode.
    Change,
}

/// An action a command binds to.
///
/// The enum is exhaustive, so a recognized key with an absent handler is
/// impossible by construction: every variant has a match arm in the
/// dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    MoveLineStart { first_non_white: bool },
    MoveLineEnd,
    MoveUp,
    MoveDown,
    MoveFirstLine,
    MoveLastLine,
    EnterEdit(InsertStyle),
    OpenLine(OpenStyle),
    DeleteText(DeleteStyle),
}

/// A trigger key sequence bound to an action.
#[derive(Debug, Clone, Copy)]
pub struct Command {
    pub keys: &'static str,
    pub action: Action,
}

/// The command table, in priority order; the first matching entry wins.
pub const COMMANDS: &[Command] = &[
    // Left-right motions
    Command {
        keys: "h",
        action: Action::MoveLeft,
    },
    Command {
        keys: "l",
        action: Action::MoveRight,
    },
    Command {
        keys: "0",
        action: Action::MoveLineStart {
            first_non_white: false,
        },
    },
    Command {
        keys: "^",
        action: Action::MoveLineStart {
            first_non_white: true,
        },
    },
    Command {
        keys: "$",
        action: Action::MoveLineEnd,
    },
    // Up-down motions
    Command {
        keys: "k",
        action: Action::MoveUp,
    },
    Command {
        keys: "j",
        action: Action::MoveDown,
    },
    Command {
        keys: "G",
        action: Action::MoveLastLine,
    },
    Command {
        keys: "gg",
        action: Action::MoveFirstLine,
    },
    // Inserting text
    Command {
        keys: "a",
        action: Action::EnterEdit(InsertStyle::Append),
    },
    Command {
        keys: "A",
        action: Action::EnterEdit(InsertStyle::AppendAtLineEnd),
    },
    Command {
        keys: "i",
        action: Action::EnterEdit(InsertStyle::Insert),
    },
    Command {
        keys: "I",
        action: Action::EnterEdit(InsertStyle::InsertAtLineStart),
    },
    Command {
        keys: "o",
        action: Action::OpenLine(OpenStyle::Below),
    },
    Command {
        keys: "O",
        action: Action::OpenLine(OpenStyle::Above),
    },
    // Deleting text
    Command {
        keys: "x",
        action: Action::DeleteText(DeleteStyle::Char),
    },
    Command {
        keys: "X",
        action: Action::DeleteText(DeleteStyle::CharBefore),
    },
    Command {
        keys: "D",
        action: Action::DeleteText(DeleteStyle::ToLineEnd),
    },
    // Changing text
    Command {
        keys: "C",
        action: Action::DeleteText(DeleteStyle::Change),
    },
];

/// The outcome of matching pending keys against the command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The pending keys match a complete command; dispatch its action and
    /// clear the pending keys.
    Dispatch(Action),
    /// The pending keys are a strict prefix of a multi-key command; wait for
    /// more input.
    Pending,
    /// The pending keys match nothing and can never complete; clear them
    /// without dispatching.
    Unrecognized,
}

/// Matches the accumulated pending keys against the command table.
///
/// Because the register is cleared on every dispatch and on every
/// unrecognized sequence, the pending keys are always exactly the keys of
/// the current command attempt, so whole-string matching is equivalent to
/// inspecting the most recently typed key (or the two-key tail).
pub fn resolve(pending: &str) -> Resolution {
    if pending.is_empty() {
        return Resolution::Pending;
    }
    if let Some(command) = COMMANDS.iter().find(|c| c.keys == pending) {
        return Resolution::Dispatch(command.action);
    }
    if COMMANDS
        .iter()
        .any(|c| c.keys.starts_with(pending) && c.keys != pending)
    {
        return Resolution::Pending;
    }
    Resolution::Unrecognized
}
