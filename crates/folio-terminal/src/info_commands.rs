//! Portfolio information commands: about, skills, projects, education,
//! contact, socials, experience, resume.
//!
//! All of these are fixed text blocks and ignore their arguments.

use crate::interpreter::{Command, Environment, text_block};

// ---------------------------------------------------------------------------
// about
// ---------------------------------------------------------------------------

pub(crate) struct AboutCmd;
impl Command for AboutCmd {
    fn name(&self) -> &str {
        "about"
    }
    fn description(&self) -> &str {
        "Who am I"
    }
    fn category(&self) -> &str {
        "info"
    }
    fn execute(&self, _args: &str, _env: &mut Environment<'_>) -> Vec<String> {
        text_block(&[
            "",
            "  ╭──────────────────────────────────────╮",
            "  │  👋 About Me                          │",
            "  ╰──────────────────────────────────────╯",
            "",
            "  Hi, I'm Ram Raghav!",
            "",
            "  I'm a Web Developer currently studying",
            "  at NIST University, Berhampur.",
            "",
            "  My journey spans across:",
            "  • 🌐 Web Development (React, JavaScript, TypeScript)",
            "  • 💻 Data Structures & Algorithms",
            "  • 🐍 Python Development (Tkinter, CLI tools)",
            "  • 📱 Responsive UI/UX Design",
            "",
            "  I'm actively solving problems on LeetCode.",
            "",
        ])
    }
}

// ---------------------------------------------------------------------------
// skills
// ---------------------------------------------------------------------------

/// Width of a skill bar in cells.
const BAR_CELLS: usize = 20;

/// One skill row. `filled` is the drawn cell count, kept as published rather
/// than derived from `percent`.
fn skill_bar(name: &str, filled: usize, percent: u8) -> String {
    let filled = filled.min(BAR_CELLS);
    format!(
        "     {name} {}{} {percent}%",
        "█".repeat(filled),
        "░".repeat(BAR_CELLS - filled)
    )
}

pub(crate) struct SkillsCmd;
impl Command for SkillsCmd {
    fn name(&self) -> &str {
        "skills"
    }
    fn description(&self) -> &str {
        "My technical skills"
    }
    fn category(&self) -> &str {
        "info"
    }
    fn execute(&self, _args: &str, _env: &mut Environment<'_>) -> Vec<String> {
        let groups: [(&str, &[(&str, usize, u8)]); 3] = [
            (
                "  🎨 Frontend",
                &[
                    ("React", 20, 90),
                    ("JavaScript", 20, 92),
                    ("Next.js", 16, 80),
                    ("Tailwind", 18, 85),
                ],
            ),
            (
                "  ⚙️  Backend",
                &[
                    ("Node.js", 16, 82),
                    ("Python", 18, 88),
                    ("Flask", 16, 78),
                    ("MySQL", 16, 80),
                ],
            ),
            (
                "  💻 Languages",
                &[
                    ("JavaScript", 20, 92),
                    ("Python", 18, 88),
                    ("Java", 16, 80),
                    ("C++", 15, 75),
                ],
            ),
        ];

        let mut out = text_block(&[
            "",
            "  ╭──────────────────────────────────────╮",
            "  │  ⚡ Technical Skills                  │",
            "  ╰──────────────────────────────────────╯",
            "",
        ]);
        for (heading, skills) in groups {
            out.push(heading.to_string());
            out.extend(
                skills
                    .iter()
                    .map(|(name, filled, pct)| skill_bar(name, *filled, *pct)),
            );
            out.push(String::new());
        }
        out.push("  🛠️  Tools: Git, GitHub, Figma, Postman, Docker".to_string());
        out.push(String::new());
        out
    }
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

pub(crate) struct ProjectsCmd;
impl Command for ProjectsCmd {
    fn name(&self) -> &str {
        "projects"
    }
    fn description(&self) -> &str {
        "My featured projects"
    }
    fn category(&self) -> &str {
        "info"
    }
    fn execute(&self, _args: &str, _env: &mut Environment<'_>) -> Vec<String> {
        text_block(&[
            "",
            "  ╭──────────────────────────────────────╮",
            "  │  🚀 Featured Projects                 │",
            "  ╰──────────────────────────────────────╯",
            "",
            "  ⭐ Sehat Nabha — Rural healthcare platform",
            "     ↳ sehat-nabhaa.vercel.app",
            "",
            "  ⭐ IGNIUS — Agency portfolio website",
            "     ↳ ignius-ivory.vercel.app",
            "",
            "  ⭐ Blood Bank — Python donation management system",
            "     ↳ github.com",
            "",
            "  🏗️ Smart Construction — Business website",
            "  🔐 CrypTXT — Text file encryption tool",
            "  🍬 Apna — Sweet shop website",
            "  🛠️ Suvidha — Utility web application",
            "",
            "  → Type \"about\" for more details on each project.",
            "",
        ])
    }
}

// ---------------------------------------------------------------------------
// education
// ---------------------------------------------------------------------------

pub(crate) struct EducationCmd;
impl Command for EducationCmd {
    fn name(&self) -> &str {
        "education"
    }
    fn description(&self) -> &str {
        "My academic background"
    }
    fn category(&self) -> &str {
        "info"
    }
    fn execute(&self, _args: &str, _env: &mut Environment<'_>) -> Vec<String> {
        text_block(&[
            "",
            "  ╭──────────────────────────────────────╮",
            "  │  🎓 Education                         │",
            "  ╰──────────────────────────────────────╯",
            "",
            "  📚 Web Development",
            "  🏫 NIST University, Berhampur",
            "  📍 Samastipur, India",
            "  📅 2024 – Present",
            "",
            "  🏫 Sant Nandlal Smriti Vidya Mandir",
            "  📍 Jamshedpur, Jharkhand, India",
            "  📅 2022 – 2024 (Senior Secondary)",
            "",
            "  🏆 Key Focus Areas:",
            "     • Web Development",
            "     • Data Structures & Algorithms",
            "     • Competitive Programming",
            "     • Software Engineering",
            "",
        ])
    }
}

// ---------------------------------------------------------------------------
// contact
// ---------------------------------------------------------------------------

pub(crate) struct ContactCmd;
impl Command for ContactCmd {
    fn name(&self) -> &str {
        "contact"
    }
    fn description(&self) -> &str {
        "How to reach me"
    }
    fn category(&self) -> &str {
        "info"
    }
    fn execute(&self, _args: &str, _env: &mut Environment<'_>) -> Vec<String> {
        text_block(&[
            "",
            "  ╭──────────────────────────────────────╮",
            "  │  📬 Contact Me                        │",
            "  ╰──────────────────────────────────────╯",
            "",
            "  📧 Email:    ramraghavcode@gmail.com",
            "  📍 Location: Samastipur, India",
            "",
            "  💡 Tip: Type \"socials\" to see all my profiles!",
            "",
        ])
    }
}

// ---------------------------------------------------------------------------
// socials
// ---------------------------------------------------------------------------

pub(crate) struct SocialsCmd;
impl Command for SocialsCmd {
    fn name(&self) -> &str {
        "socials"
    }
    fn description(&self) -> &str {
        "My social profiles"
    }
    fn category(&self) -> &str {
        "info"
    }
    fn execute(&self, _args: &str, _env: &mut Environment<'_>) -> Vec<String> {
        text_block(&[
            "",
            "  ╭──────────────────────────────────────╮",
            "  │  🌐 Social Profiles                   │",
            "  ╰──────────────────────────────────────╯",
            "",
            "  GitHub     → github.com",
            "  LinkedIn   → linkedin.com/in/ram-raghav",
            "  LeetCode   → leetcode.com/u/ramraghav",
            "  Instagram  → instagram.com",
            "",
        ])
    }
}

// ---------------------------------------------------------------------------
// experience
// ---------------------------------------------------------------------------

pub(crate) struct ExperienceCmd;
impl Command for ExperienceCmd {
    fn name(&self) -> &str {
        "experience"
    }
    fn description(&self) -> &str {
        "My coding journey"
    }
    fn category(&self) -> &str {
        "info"
    }
    fn execute(&self, _args: &str, _env: &mut Environment<'_>) -> Vec<String> {
        text_block(&[
            "",
            "  ╭──────────────────────────────────────╮",
            "  │  💼 Coding Journey                    │",
            "  ╰──────────────────────────────────────╯",
            "",
            "  📅 2+ years of coding experience",
            "  📦 7+ projects built and deployed",
            "  🔧 10+ technologies mastered",
            "",
            "  🏗️  Production Websites:",
            "     • Sehat Nabha — Rural Healthcare Platform",
            "     • IGNIUS — Agency Portfolio Website",
            "     • Smart Construction — Business Website",
            "",
            "  🐍 Python Projects:",
            "     • Blood Bank Management System (Tkinter)",
            "     • CrypTXT — Text File Encryption",
            "",
            "  🎓 Community:",
            "     • Active LeetCode problem solver",
            "",
        ])
    }
}

// ---------------------------------------------------------------------------
// resume
// ---------------------------------------------------------------------------

pub(crate) struct ResumeCmd;
impl Command for ResumeCmd {
    fn name(&self) -> &str {
        "resume"
    }
    fn description(&self) -> &str {
        "Download my resume"
    }
    fn category(&self) -> &str {
        "info"
    }
    fn execute(&self, _args: &str, _env: &mut Environment<'_>) -> Vec<String> {
        text_block(&[
            "",
            "  ╭──────────────────────────────────────╮",
            "  │  📄 Resume                            │",
            "  ╰──────────────────────────────────────╯",
            "",
            "  📧 Request at: ramraghavcode@gmail.com",
            "  🔗 LinkedIn: linkedin.com/in/ram-raghav",
            "",
        ])
    }
}
