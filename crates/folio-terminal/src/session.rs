//! Session state and the line interpreter.
//!
//! A [`Session`] owns the scrollback buffer, the matrix-mode flag, and the
//! command registry. [`Session::submit`] is the only way commands mutate it.
//! Nothing here can fail: unknown commands and empty lines produce ordinary
//! output blocks.

use serde::Serialize;

use folio_platform::{DesktopPlatform, TimeService};
use folio_types::config::{PromptConfig, TerminalConfig};
use folio_types::error;
use folio_types::rng::SimpleRng;

use crate::commands::register_builtins;
use crate::history::CommandHistory;
use crate::interpreter::{CommandRegistry, CommandSummary, Environment, text_block};

/// Commands handled by the interpreter itself, in autocomplete order.
pub const BUILTIN_NAMES: [&str; 5] = ["clear", "banner", "matrix", "echo", "history"];

/// Window title outside matrix mode.
const DEFAULT_TITLE: &str = "visitor@ramraghav-portfolio ~ bash";
const MATRIX_TITLE: &str = "🟢 THE MATRIX";

const BANNER: [&str; 19] = [
    "",
    "  ╔═══════════════════════════════════════════════════════════╗",
    "  ║                                                           ║",
    "  ║   ███╗   ███╗██████╗      █████╗ ███╗   ███╗ █████╗ ███╗ ║",
    "  ║   ████╗ ████║██╔══██╗    ██╔══██╗████╗ ████║██╔══██╗████║║",
    "  ║   ██╔████╔██║██║  ██║    ███████║██╔████╔██║███████║██╔█║║",
    "  ║   ██║╚██╔╝██║██║  ██║    ██╔══██║██║╚██╔╝██║██╔══██║██║ ║",
    "  ║   ██║ ╚═╝ ██║██████╔╝    ██║  ██║██║ ╚═╝ ██║██║  ██║██║ ║",
    "  ║   ╚═╝     ╚═╝╚═════╝     ╚═╝  ╚═╝╚═╝     ╚═╝╚═╝  ╚═╝╚═╝ ║",
    "  ║                                                           ║",
    "  ║          Web Developer · Student                       ║",
    "  ║          NIST University · Samastipur, India           ║",
    "  ║                                                           ║",
    "  ╚═══════════════════════════════════════════════════════════╝",
    "",
    "  Welcome to my interactive terminal! 🚀",
    "  Type \"help\" to see all available commands.",
    "  Use ↑↓ arrows for history, Tab for autocomplete.",
    "",
];

/// The welcome banner block.
pub fn banner_lines() -> Vec<String> {
    text_block(&BANNER)
}

/// Catalog entries for the interpreter built-ins, as shown by `help`.
fn builtin_summaries() -> [CommandSummary; 5] {
    let entry = |name: &str, description: &str, category: &str| CommandSummary {
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
    };
    [
        entry("echo", "Echo a message", "utility"),
        entry("history", "Show command history", "utility"),
        entry("clear", "Clear terminal", "utility"),
        entry("banner", "Show the welcome banner", "utility"),
        entry("matrix", "Enter the Matrix", "fun"),
    ]
}

// ---------------------------------------------------------------------------
// Prompt
// ---------------------------------------------------------------------------

/// The `user@host:path$ ` prefix of echoed input lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    prefix: String,
}

impl Prompt {
    pub fn new(config: &PromptConfig) -> Self {
        Self {
            prefix: format!("{}@{}:{}$ ", config.user, config.host, config.path),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Echo line for a submitted raw line.
    pub fn render(&self, line: &str) -> String {
        format!("{}{line}", self.prefix)
    }

    /// The command text of an echoed line, or `None` for output lines.
    pub fn strip<'a>(&self, line: &'a str) -> Option<&'a str> {
        line.strip_prefix(self.prefix.as_str())
    }
}

impl Default for Prompt {
    fn default() -> Self {
        Self::new(&PromptConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// What a submission did, beyond appending lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Output was appended to the buffer.
    Appended,
    /// The buffer was emptied and matrix mode forced off.
    Cleared,
    /// Matrix mode was toggled; carries the new state.
    MatrixToggled(bool),
}

/// Serializable read-only view for renderers and batch output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub title: String,
    pub matrix_mode: bool,
    pub buffer: Vec<String>,
}

impl SessionSnapshot {
    /// Pretty-printed JSON, as emitted by batch runs.
    pub fn to_json(&self) -> error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One terminal instance: scrollback, mode flags, and the command registry.
pub struct Session {
    registry: CommandRegistry,
    catalog: Vec<CommandSummary>,
    buffer: Vec<String>,
    matrix_mode: bool,
    prompt: Prompt,
    history_display_limit: usize,
    max_buffer_lines: usize,
    time: Box<dyn TimeService>,
    rng: SimpleRng,
}

impl Session {
    /// Create a session over an explicit registry, clock and RNG.
    pub fn new(
        config: &TerminalConfig,
        registry: CommandRegistry,
        time: Box<dyn TimeService>,
        rng: SimpleRng,
    ) -> Self {
        let mut catalog = registry.summaries();
        catalog.extend(
            builtin_summaries()
                .into_iter()
                .filter(|b| !registry.contains(&b.name)),
        );
        let buffer = if config.session.show_banner {
            banner_lines()
        } else {
            Vec::new()
        };
        let mut session = Self {
            registry,
            catalog,
            buffer,
            matrix_mode: false,
            prompt: Prompt::new(&config.prompt),
            history_display_limit: config.session.history_display_limit,
            max_buffer_lines: config.session.max_buffer_lines,
            time,
            rng,
        };
        session.trim_buffer();
        session
    }

    /// A session with the portfolio commands, the host clock and a
    /// time-seeded RNG.
    pub fn desktop(config: &TerminalConfig) -> Self {
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);
        Self::new(
            config,
            registry,
            Box::new(DesktopPlatform::new()),
            SimpleRng::from_time(),
        )
    }

    pub fn buffer(&self) -> &[String] {
        &self.buffer
    }

    pub fn matrix_mode(&self) -> bool {
        self.matrix_mode
    }

    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Every command `help` lists: registry commands, then built-ins.
    pub fn catalog(&self) -> &[CommandSummary] {
        &self.catalog
    }

    /// Window title for the current mode.
    pub fn title(&self) -> &'static str {
        if self.matrix_mode {
            MATRIX_TITLE
        } else {
            DEFAULT_TITLE
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            title: self.title().to_string(),
            matrix_mode: self.matrix_mode,
            buffer: self.buffer.clone(),
        }
    }

    /// Empty the scrollback without leaving matrix mode (title-bar button).
    pub fn clear_scrollback(&mut self) {
        self.buffer.clear();
    }

    /// Interpret one submitted line.
    ///
    /// `history` is read by the `history` built-in; the caller records the
    /// line into it afterwards.
    pub fn submit(&mut self, raw_line: &str, history: &CommandHistory) -> SubmitOutcome {
        let trimmed = raw_line.trim();
        let (head, args) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));
        let command = head.to_lowercase();
        log::debug!("submit: command={command:?} args={args:?}");

        if command == "clear" {
            self.buffer.clear();
            self.matrix_mode = false;
            return SubmitOutcome::Cleared;
        }

        self.buffer.push(self.prompt.render(raw_line));
        let outcome = match command.as_str() {
            "" => SubmitOutcome::Appended,
            "banner" => {
                self.buffer.extend(banner_lines());
                SubmitOutcome::Appended
            },
            "matrix" => {
                self.matrix_mode = !self.matrix_mode;
                let status = if self.matrix_mode {
                    "  🟢 Matrix mode ACTIVATED. Wake up, Neo..."
                } else {
                    "  🔴 Matrix mode DEACTIVATED. Welcome back to reality."
                };
                self.buffer.extend(text_block(&["", status, ""]));
                SubmitOutcome::MatrixToggled(self.matrix_mode)
            },
            "echo" => {
                self.buffer
                    .extend([String::new(), args.to_string(), String::new()]);
                SubmitOutcome::Appended
            },
            "history" => {
                self.buffer.push(String::new());
                self.buffer.push("  📜 Command History:".to_string());
                let listed: Vec<String> = history
                    .recent(self.history_display_limit)
                    .enumerate()
                    .map(|(i, entry)| format!("  {}  {entry}", i + 1))
                    .collect();
                self.buffer.extend(listed);
                self.buffer.push(String::new());
                SubmitOutcome::Appended
            },
            _ => {
                self.run_registry(&command, args);
                SubmitOutcome::Appended
            },
        };
        self.trim_buffer();
        outcome
    }

    fn run_registry(&mut self, command: &str, args: &str) {
        match self.registry.lookup(command) {
            Some(cmd) => {
                let mut env = Environment {
                    time: Some(self.time.as_ref()),
                    rng: &mut self.rng,
                    catalog: &self.catalog,
                };
                let lines = cmd.execute(args, &mut env);
                self.buffer.extend(lines);
            },
            None => {
                log::debug!("submit: unknown command {command:?}");
                self.buffer.extend([
                    String::new(),
                    format!("  ❌ Command not found: \"{command}\""),
                    "  💡 Type \"help\" to see available commands.".to_string(),
                    String::new(),
                ]);
            },
        }
    }

    fn trim_buffer(&mut self) {
        if self.max_buffer_lines > 0 && self.buffer.len() > self.max_buffer_lines {
            let excess = self.buffer.len() - self.max_buffer_lines;
            self.buffer.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_platform::{FixedClock, LocalTime};

    const SEED: u64 = 0x5EED;

    fn clock() -> FixedClock {
        FixedClock::new(
            LocalTime::from_ymd_hms(2026, 10, 19, 9, 30, 0).unwrap(),
            "Asia/Kolkata",
        )
    }

    fn session_with(config: &TerminalConfig) -> Session {
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);
        Session::new(config, registry, Box::new(clock()), SimpleRng::new(SEED))
    }

    fn setup() -> (Session, CommandHistory) {
        (session_with(&TerminalConfig::default()), CommandHistory::new())
    }

    /// Lines appended by the last operation, given the length before it.
    fn appended(session: &Session, before: usize) -> &[String] {
        &session.buffer()[before..]
    }

    /// Expected output of a registry command, computed on a twin session.
    fn expected_output(name: &str, args: &str) -> Vec<String> {
        let twin = session_with(&TerminalConfig::default());
        let mut rng = SimpleRng::new(SEED);
        let clock = clock();
        let mut env = Environment {
            time: Some(&clock),
            rng: &mut rng,
            catalog: twin.catalog(),
        };
        twin.registry()
            .lookup(name)
            .unwrap()
            .execute(args, &mut env)
    }

    #[test]
    fn starts_with_banner() {
        let (s, _) = setup();
        assert_eq!(s.buffer(), banner_lines().as_slice());
        assert!(!s.matrix_mode());
        assert_eq!(s.title(), "visitor@ramraghav-portfolio ~ bash");
    }

    #[test]
    fn banner_can_be_disabled() {
        let mut cfg = TerminalConfig::default();
        cfg.session.show_banner = false;
        let s = session_with(&cfg);
        assert!(s.buffer().is_empty());
    }

    #[test]
    fn help_then_unknown_scenario() {
        let (mut s, h) = setup();
        let before = s.buffer().len();
        s.submit("help", &h);
        let out = appended(&s, before);
        assert_eq!(out[0], "visitor@ram:~$ help");
        let text = out[1..].join("\n");
        for name in s.registry().names() {
            assert!(text.contains(name), "help is missing {name}");
        }
        for name in BUILTIN_NAMES {
            assert!(text.contains(name), "help is missing built-in {name}");
        }

        let before = s.buffer().len();
        s.submit("banana", &h);
        let out = appended(&s, before);
        assert_eq!(
            out,
            &[
                "visitor@ram:~$ banana",
                "",
                "  ❌ Command not found: \"banana\"",
                "  💡 Type \"help\" to see available commands.",
                "",
            ]
        );
    }

    #[test]
    fn echo_preserves_argument_casing() {
        let (mut s, h) = setup();
        let before = s.buffer().len();
        s.submit("echo hello world", &h);
        assert_eq!(
            appended(&s, before),
            &["visitor@ram:~$ echo hello world", "", "hello world", ""]
        );

        let before = s.buffer().len();
        s.submit("ECHO Hello World", &h);
        assert_eq!(appended(&s, before)[2], "Hello World");
    }

    #[test]
    fn echo_without_arguments() {
        let (mut s, h) = setup();
        let before = s.buffer().len();
        s.submit("echo", &h);
        assert_eq!(appended(&s, before), &["visitor@ram:~$ echo", "", "", ""]);
    }

    #[test]
    fn echo_line_uses_raw_text() {
        let (mut s, h) = setup();
        let before = s.buffer().len();
        s.submit("  About  ", &h);
        assert_eq!(appended(&s, before)[0], "visitor@ram:~$   About  ");
    }

    #[test]
    fn clear_empties_and_leaves_matrix() {
        let (mut s, h) = setup();
        s.submit("matrix", &h);
        assert!(s.matrix_mode());
        assert_eq!(s.submit("clear", &h), SubmitOutcome::Cleared);
        assert!(s.buffer().is_empty());
        assert!(!s.matrix_mode());
    }

    #[test]
    fn clear_is_case_insensitive_and_has_no_echo() {
        let (mut s, h) = setup();
        s.submit("CLEAR   now", &h);
        assert!(s.buffer().is_empty());
    }

    #[test]
    fn matrix_is_self_inverse() {
        let (mut s, h) = setup();
        let before = s.buffer().len();
        assert_eq!(s.submit("matrix", &h), SubmitOutcome::MatrixToggled(true));
        assert!(s.matrix_mode());
        assert_eq!(s.title(), "🟢 THE MATRIX");
        let first = appended(&s, before).to_vec();
        assert_eq!(first[0], "visitor@ram:~$ matrix");
        assert!(first[2].contains("ACTIVATED"));
        assert!(!first[2].contains("DEACTIVATED"));

        let before = s.buffer().len();
        assert_eq!(s.submit("matrix", &h), SubmitOutcome::MatrixToggled(false));
        assert!(!s.matrix_mode());
        assert!(appended(&s, before)[2].contains("DEACTIVATED"));
    }

    #[test]
    fn banner_appends_rather_than_replaces() {
        let (mut s, h) = setup();
        let before = s.buffer().len();
        s.submit("banner", &h);
        let out = appended(&s, before);
        assert_eq!(out[0], "visitor@ram:~$ banner");
        assert_eq!(&out[1..], banner_lines().as_slice());
        assert_eq!(s.buffer().len(), before + 1 + banner_lines().len());
    }

    #[test]
    fn empty_line_echoes_only() {
        let (mut s, h) = setup();
        let before = s.buffer().len();
        s.submit("", &h);
        s.submit("    ", &h);
        assert_eq!(
            appended(&s, before),
            &["visitor@ram:~$ ", "visitor@ram:~$     "]
        );
    }

    #[test]
    fn history_lists_recent_first_numbered() {
        let (mut s, mut h) = setup();
        h.record_submission("about");
        h.record_submission("skills");
        let before = s.buffer().len();
        s.submit("history", &h);
        assert_eq!(
            appended(&s, before),
            &[
                "visitor@ram:~$ history",
                "",
                "  📜 Command History:",
                "  1  skills",
                "  2  about",
                "",
            ]
        );
    }

    #[test]
    fn history_header_prints_when_empty() {
        let (mut s, h) = setup();
        let before = s.buffer().len();
        s.submit("history", &h);
        assert_eq!(
            appended(&s, before),
            &["visitor@ram:~$ history", "", "  📜 Command History:", ""]
        );
    }

    #[test]
    fn history_is_capped_at_display_limit() {
        let (mut s, mut h) = setup();
        for i in 0..40 {
            h.record_submission(&format!("cmd{i}"));
        }
        let before = s.buffer().len();
        s.submit("history", &h);
        let out = appended(&s, before);
        // echo + blank + header + 15 entries + blank
        assert_eq!(out.len(), 19);
        assert_eq!(out[3], "  1  cmd39");
        assert_eq!(out[17], "  15  cmd25");
    }

    #[test]
    fn registry_command_appends_execute_output() {
        let (mut s, h) = setup();
        let before = s.buffer().len();
        s.submit("date", &h);
        let out = appended(&s, before);
        assert_eq!(out[0], "visitor@ram:~$ date");
        assert_eq!(&out[1..], expected_output("date", "").as_slice());
        assert!(out.iter().any(|l| l.contains("Asia/Kolkata")));
    }

    #[test]
    fn registry_lookup_is_case_insensitive() {
        let (mut s, h) = setup();
        let before = s.buffer().len();
        s.submit("WhoAmI", &h);
        assert_eq!(
            &appended(&s, before)[1..],
            expected_output("whoami", "").as_slice()
        );
    }

    #[test]
    fn not_found_names_lowercased_token() {
        let (mut s, h) = setup();
        let before = s.buffer().len();
        s.submit("Banana split", &h);
        assert_eq!(
            appended(&s, before)[2],
            "  ❌ Command not found: \"banana\""
        );
    }

    #[test]
    fn buffer_cap_applies_to_banner() {
        let mut cfg = TerminalConfig::default();
        cfg.session.max_buffer_lines = 4;
        let s = session_with(&cfg);
        assert_eq!(s.buffer(), &banner_lines()[banner_lines().len() - 4..]);
    }

    #[test]
    fn buffer_cap_drops_oldest_lines() {
        let mut cfg = TerminalConfig::default();
        cfg.session.max_buffer_lines = 10;
        let mut s = session_with(&cfg);
        let h = CommandHistory::new();
        s.submit("help", &h);
        assert_eq!(s.buffer().len(), 10);
        assert_eq!(s.buffer().last().map(String::as_str), Some(""));
    }

    #[test]
    fn clear_scrollback_keeps_matrix_mode() {
        let (mut s, h) = setup();
        s.submit("matrix", &h);
        s.clear_scrollback();
        assert!(s.buffer().is_empty());
        assert!(s.matrix_mode());
    }

    #[test]
    fn custom_prompt() {
        let mut cfg = TerminalConfig::default();
        cfg.prompt.user = "guest".into();
        cfg.prompt.host = "box".into();
        cfg.prompt.path = "/srv".into();
        let mut s = session_with(&cfg);
        s.submit("whoami", &CommandHistory::new());
        assert!(s.buffer().iter().any(|l| l == "guest@box:/srv$ whoami"));
    }

    #[test]
    fn prompt_strip() {
        let p = Prompt::default();
        assert_eq!(p.strip("visitor@ram:~$ help"), Some("help"));
        assert_eq!(p.strip("  output"), None);
        assert_eq!(p.render("ls"), "visitor@ram:~$ ls");
    }

    #[test]
    fn snapshot_serializes() {
        let (mut s, h) = setup();
        s.submit("matrix", &h);
        let json = s.snapshot().to_json().unwrap();
        assert!(json.contains("\"matrix_mode\": true"));
        assert!(json.contains("THE MATRIX"));
    }

    #[test]
    fn catalog_includes_builtins_once() {
        let (s, _) = setup();
        for name in BUILTIN_NAMES {
            assert_eq!(s.catalog().iter().filter(|c| c.name == name).count(), 1);
        }
        assert_eq!(s.catalog().len(), s.registry().len() + BUILTIN_NAMES.len());
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn known_command_appends_echo_plus_output(
                idx in 0usize..17,
                args in "[ -~]{0,24}",
            ) {
                let (mut s, h) = setup();
                let name = s.registry().names().nth(idx).unwrap().to_string();
                let line = format!("{name} {args}");
                let before = s.buffer().len();
                s.submit(&line, &h);
                let out = appended(&s, before);
                prop_assert_eq!(&out[0], &format!("visitor@ram:~$ {line}"));
                let trimmed = line.trim();
                let expected_args = trimmed
                    .split_once(char::is_whitespace)
                    .map(|(_, a)| a)
                    .unwrap_or("");
                let expected = expected_output(&name, expected_args);
                prop_assert_eq!(&out[1..], expected.as_slice());
            }

            #[test]
            fn unknown_command_gets_not_found(token in "[a-z]{1,10}") {
                prop_assume!(!BUILTIN_NAMES.contains(&token.as_str()));
                let (mut s, h) = setup();
                prop_assume!(!s.registry().contains(&token));
                let before = s.buffer().len();
                s.submit(&token, &h);
                let out = appended(&s, before);
                prop_assert_eq!(out.len(), 5);
                prop_assert_eq!(&out[0], &format!("visitor@ram:~$ {token}"));
                let expected = format!("  ❌ Command not found: \"{token}\"");
                prop_assert_eq!(&out[2], &expected);
            }

            #[test]
            fn clear_always_resets(lines in proptest::collection::vec("[a-z ]{0,12}", 0..10)) {
                let (mut s, h) = setup();
                for line in &lines {
                    s.submit(line, &h);
                }
                s.submit("clear", &h);
                prop_assert!(s.buffer().is_empty());
                prop_assert!(!s.matrix_mode());
            }
        }
    }
}
