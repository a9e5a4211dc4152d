//! Portfolio terminal core.
//!
//! Commands implement the `Command` trait and are registered by name. A
//! `Session` interprets submitted lines against the registry and a handful of
//! built-ins that need session state (clear, banner, matrix, echo, history).
//! The `InputController` sits in front of it and turns keystrokes into draft
//! edits, history recall, completions and submissions.

mod autocomplete;
mod commands;
mod controller;
mod fun_commands;
mod history;
mod info_commands;
mod interpreter;
pub mod matrix;
mod session;
mod system_commands;

/// Prefix completion over registry names and built-ins.
pub use autocomplete::Autocomplete;
/// Register the portfolio commands into a registry, in `help` order.
pub use commands::register_builtins;
/// Render the `help` box for a command catalog.
pub use commands::render_help;
/// Keystroke-level front end over a session.
pub use controller::{InputController, InputDraft, InputResult};
/// Submitted lines with a recall cursor.
pub use history::CommandHistory;
/// A single executable command trait.
pub use interpreter::Command;
/// Registry of available commands, in declaration order.
pub use interpreter::CommandRegistry;
/// Name, description and category of a listed command.
pub use interpreter::CommandSummary;
/// Shared environment passed to every command.
pub use interpreter::Environment;
/// Background rain animation for matrix mode.
pub use matrix::{MatrixOverlay, MatrixRain, RainFrame};
/// Scrollback, mode flags and the line interpreter.
pub use session::{
    BUILTIN_NAMES, Prompt, Session, SessionSnapshot, SubmitOutcome, banner_lines,
};
