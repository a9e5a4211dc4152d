//! Utility commands that describe the "system": neofetch, whoami, date, theme.

use crate::interpreter::{Command, Environment, text_block};

// ---------------------------------------------------------------------------
// neofetch
// ---------------------------------------------------------------------------

pub(crate) struct NeofetchCmd;
impl Command for NeofetchCmd {
    fn name(&self) -> &str {
        "neofetch"
    }
    fn description(&self) -> &str {
        "System info (portfolio edition)"
    }
    fn execute(&self, _args: &str, _env: &mut Environment<'_>) -> Vec<String> {
        text_block(&[
            "",
            "         ╭─────────╮",
            "         │  ⟨R/⟩   │   Ram Raghav",
            "         ╰─────────╯   ─────────────────",
            "     ╭───────────────╮ OS:      Web Developer v2.0",
            "     │ ⬛⬛⬛⬛⬛⬛⬛│ Host:    NIST University, Berhampur",
            "     │ ⬛🟦🟦🟦🟦⬛│ Kernel:  React + JavaScript",
            "     │ ⬛🟦⬜🟦🟦⬛│ Shell:   /bin/webdev",
            "     │ ⬛🟦🟦🟦🟦⬛│ DE:      VSCode",
            "     │ ⬛⬛⬛⬛⬛⬛⬛│ Theme:   Dark Mode (always)",
            "     ╰───────────────╯ Terminal: Portfolio Terminal v2.0",
            "                       CPU:     Brain™ i9-Caffeine",
            "  Languages:           GPU:     Imagination RTX 5090",
            "  █ JS  █ PY  █ C++   Memory:  ∞ ideas / 24h uptime",
            "  █ TS  █ HTML █ CSS",
            "",
        ])
    }
}

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

pub(crate) struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Display current user"
    }
    fn execute(&self, _args: &str, _env: &mut Environment<'_>) -> Vec<String> {
        text_block(&[
            "",
            "  visitor@ramraghav-portfolio ~ You are a curious explorer! 🕵️",
            "",
        ])
    }
}

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

pub(crate) struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Show current date & time"
    }
    fn execute(&self, _args: &str, env: &mut Environment<'_>) -> Vec<String> {
        let Some(time) = env.time else {
            return text_block(&["", "  ⏰ Clock unavailable.", ""]);
        };
        let now = match time.now() {
            Ok(now) => now,
            Err(e) => {
                log::warn!("date: clock read failed: {e}");
                return text_block(&["", "  ⏰ Clock unavailable.", ""]);
            },
        };
        let zone = time.timezone().unwrap_or_else(|e| {
            log::warn!("date: timezone lookup failed: {e}");
            "UTC".to_string()
        });
        vec![
            String::new(),
            format!("  📅 {}", now.long_date()),
            format!("  ⏰ {}", now.clock_12h()),
            format!("  🌍 Timezone: {zone}"),
            String::new(),
        ]
    }
}

// ---------------------------------------------------------------------------
// theme
// ---------------------------------------------------------------------------

pub(crate) struct ThemeCmd;
impl Command for ThemeCmd {
    fn name(&self) -> &str {
        "theme"
    }
    fn description(&self) -> &str {
        "Toggle terminal theme info"
    }
    fn execute(&self, _args: &str, _env: &mut Environment<'_>) -> Vec<String> {
        text_block(&[
            "",
            "  🎨 TERMINAL THEME INFO",
            "  ──────────────────────",
            "  Name:   \"Deep Space\"",
            "  BG:     #0d1117",
            "  FG:     #e0e0e8",
            "  Accent: #00d4ff (Cyan)",
            "  Prompt: green@cyan:purple$",
            "  Font:   Fira Code",
            "",
        ])
    }
}
