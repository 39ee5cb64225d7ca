//! Input handling: the command table, pending-key register, and terminal
//! event routing.

pub mod commands;
pub mod handler;
pub mod register;

pub use commands::{Action, Resolution};
pub use handler::InputHandler;
pub use register::CommandRegister;
