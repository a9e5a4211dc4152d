//! Command trait, registry, and the environment commands run in.
//!
//! The registry keeps commands in declaration order. Lookups go through a
//! lower-cased name index, so they are case-insensitive, and iteration order
//! (which autocomplete depends on) is the order of registration.

use std::collections::HashMap;

use folio_platform::TimeService;
use folio_types::rng::SimpleRng;

/// Read-only view of one command, as listed by `help`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSummary {
    pub name: String,
    pub description: String,
    pub category: String,
}

/// Everything a command may read while producing its output.
pub struct Environment<'a> {
    /// Clock and timezone for `date`.
    pub time: Option<&'a dyn TimeService>,
    /// Randomness for `fortune`.
    pub rng: &'a mut SimpleRng,
    /// Every command the session knows, including interpreter built-ins.
    pub catalog: &'a [CommandSummary],
}

/// A single registry command.
///
/// `execute` is infallible: whatever the argument text, it returns the lines
/// to append to the scrollback.
pub trait Command {
    /// The command name (what the user types), lower-case.
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Command category for grouping in `help` output.
    fn category(&self) -> &str {
        "utility"
    }

    /// Produce output lines for the given trailing argument text.
    fn execute(&self, args: &str, env: &mut Environment<'_>) -> Vec<String>;
}

/// Registry of available commands.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command. Replaces any existing command with the same name,
    /// keeping the original declaration position.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let key = cmd.name().to_lowercase();
        match self.index.get(&key) {
            Some(&slot) => {
                log::debug!("Replacing command '{key}'");
                self.commands[slot] = cmd;
            },
            None => {
                self.index.insert(key, self.commands.len());
                self.commands.push(cmd);
            },
        }
    }

    /// Find a command by name, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<&dyn Command> {
        self.index
            .get(&name.to_lowercase())
            .map(|&slot| self.commands[slot].as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Command names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|cmd| cmd.name())
    }

    /// Owned summaries in declaration order.
    pub fn summaries(&self) -> Vec<CommandSummary> {
        self.commands
            .iter()
            .map(|cmd| CommandSummary {
                name: cmd.name().to_string(),
                description: cmd.description().to_string(),
                category: cmd.category().to_string(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Copy a static text block into owned output lines.
pub(crate) fn text_block(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| (*l).to_string()).collect()
}
