//! Fun commands: sudo, hack, coffee, fortune.

use crate::interpreter::{Command, Environment, text_block};

// ---------------------------------------------------------------------------
// sudo
// ---------------------------------------------------------------------------

pub(crate) struct SudoCmd;
impl Command for SudoCmd {
    fn name(&self) -> &str {
        "sudo"
    }
    fn description(&self) -> &str {
        "Try superuser mode"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &str, _env: &mut Environment<'_>) -> Vec<String> {
        text_block(&[
            "",
            "  ⚠️  [sudo] password for visitor: ********",
            "  ❌ Authentication failed. Nice try! 😄",
            "",
            "  💡 Tip: You don't need sudo here, but you can \"hire\" me!",
            "  📧 ramraghavcode@gmail.com",
            "",
        ])
    }
}

// ---------------------------------------------------------------------------
// hack
// ---------------------------------------------------------------------------

pub(crate) struct HackCmd;
impl Command for HackCmd {
    fn name(&self) -> &str {
        "hack"
    }
    fn description(&self) -> &str {
        "Hack the mainframe"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &str, _env: &mut Environment<'_>) -> Vec<String> {
        text_block(&[
            "",
            "  💀 INITIATING HACK SEQUENCE...",
            "  [▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓] 100%",
            "",
            "  ⚡ Bypassing firewall... done",
            "  🔓 Cracking encryption... done",
            "  📡 Accessing mainframe... done",
            "  📂 Downloading files...",
            "",
            "  📄 secret_recipe.txt",
            "  📄 meaning_of_life.txt → 42",
            "  📄 how_to_center_a_div.css",
            "",
            "  ✅ Hack complete! (Just kidding, this is a portfolio 😄)",
            "",
        ])
    }
}

// ---------------------------------------------------------------------------
// coffee
// ---------------------------------------------------------------------------

pub(crate) struct CoffeeCmd;
impl Command for CoffeeCmd {
    fn name(&self) -> &str {
        "coffee"
    }
    fn description(&self) -> &str {
        "Essential developer fuel"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &str, _env: &mut Environment<'_>) -> Vec<String> {
        text_block(&[
            "",
            "  ☕ Brewing coffee...",
            "",
            "     ( (",
            "      ) )",
            "    .______.",
            "    |      |]",
            "    \\      /",
            "     `----'",
            "",
            "  ✅ Coffee ready! Productivity +100% ☕",
            "",
        ])
    }
}

// ---------------------------------------------------------------------------
// fortune
// ---------------------------------------------------------------------------

pub(crate) const FORTUNES: [&str; 8] = [
    "\"Any fool can write code that a computer can understand. Good programmers write code that humans can understand.\" - Martin Fowler",
    "\"First, solve the problem. Then, write the code.\" - John Johnson",
    "\"The best error message is the one that never shows up.\" - Thomas Fuchs",
    "\"Code is like humor. When you have to explain it, it's bad.\" - Cory House",
    "\"Simplicity is the soul of efficiency.\" - Austin Freeman",
    "\"Talk is cheap. Show me the code.\" - Linus Torvalds",
    "\"Programs must be written for people to read.\" - Harold Abelson",
    "\"Fix the cause, not the symptom.\" - Steve Maguire",
];

pub(crate) struct FortuneCmd;
impl Command for FortuneCmd {
    fn name(&self) -> &str {
        "fortune"
    }
    fn description(&self) -> &str {
        "Get a random dev fortune"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &str, env: &mut Environment<'_>) -> Vec<String> {
        let fortune = FORTUNES[env.rng.next_index(FORTUNES.len())];
        vec![
            String::new(),
            "  🔮 Your Dev Fortune:".to_string(),
            String::new(),
            format!("  {fortune}"),
            String::new(),
        ]
    }
}
