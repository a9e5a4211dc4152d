//! Command registration and the `help` listing.

use crate::fun_commands::{CoffeeCmd, FortuneCmd, HackCmd, SudoCmd};
use crate::info_commands::{
    AboutCmd, ContactCmd, EducationCmd, ExperienceCmd, ProjectsCmd, ResumeCmd, SkillsCmd,
    SocialsCmd,
};
use crate::interpreter::{Command, CommandRegistry, CommandSummary, Environment};
use crate::system_commands::{DateCmd, NeofetchCmd, ThemeCmd, WhoamiCmd};

/// Register every portfolio command into a registry.
///
/// Registration order is the autocomplete scan order, so keep it stable.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(AboutCmd));
    reg.register(Box::new(SkillsCmd));
    reg.register(Box::new(ProjectsCmd));
    reg.register(Box::new(EducationCmd));
    reg.register(Box::new(ContactCmd));
    reg.register(Box::new(SocialsCmd));
    reg.register(Box::new(ExperienceCmd));
    reg.register(Box::new(NeofetchCmd));
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(DateCmd));
    reg.register(Box::new(SudoCmd));
    reg.register(Box::new(ResumeCmd));
    reg.register(Box::new(ThemeCmd));
    reg.register(Box::new(HackCmd));
    reg.register(Box::new(CoffeeCmd));
    reg.register(Box::new(FortuneCmd));
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

/// Inner width of the help box, in characters.
const HELP_WIDTH: usize = 58;

/// Section order in the help box. Unknown categories follow in first-seen order.
const SECTIONS: [(&str, &str); 3] = [
    ("info", "INFO COMMANDS"),
    ("utility", "UTILITY COMMANDS"),
    ("fun", "FUN COMMANDS"),
];

pub(crate) struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "List all available commands"
    }
    fn execute(&self, _args: &str, env: &mut Environment<'_>) -> Vec<String> {
        render_help(env.catalog)
    }
}

fn boxed(content: &str) -> String {
    format!("  │{content:<width$}│", width = HELP_WIDTH)
}

fn rule(left: char, right: char) -> String {
    format!("  {left}{}{right}", "─".repeat(HELP_WIDTH))
}

/// Render the boxed command listing, grouped by category.
pub fn render_help(catalog: &[CommandSummary]) -> Vec<String> {
    let mut categories: Vec<&str> = SECTIONS.iter().map(|(cat, _)| *cat).collect();
    for entry in catalog {
        if !categories.contains(&entry.category.as_str()) {
            categories.push(&entry.category);
        }
    }

    let mut out = vec![
        String::new(),
        rule('┌', '┐'),
        boxed("  Available Commands"),
        rule('├', '┤'),
        boxed(""),
    ];
    for cat in categories {
        let entries: Vec<&CommandSummary> =
            catalog.iter().filter(|e| e.category == cat).collect();
        if entries.is_empty() {
            continue;
        }
        let title = SECTIONS
            .iter()
            .find(|(c, _)| *c == cat)
            .map(|(_, title)| (*title).to_string())
            .unwrap_or_else(|| format!("{} COMMANDS", cat.to_uppercase()));
        out.push(boxed(&format!("  {title}")));
        for e in entries {
            out.push(boxed(&format!("     {:<10} →  {}", e.name, e.description)));
        }
        out.push(boxed(""));
    }
    out.push(boxed("  TIP: Use ↑↓ arrows for history, Tab for autocomplete"));
    out.push(rule('└', '┘'));
    out.push(String::new());
    out
}
