//! Keystroke-level front end.
//!
//! The [`InputController`] owns a [`Session`], the [`CommandHistory`], the
//! [`Autocomplete`] engine and the current [`InputDraft`]. Renderers feed it
//! input events and read everything back through accessors.

use folio_types::config::TerminalConfig;
use folio_types::input::InputEvent;
use folio_types::rng::SimpleRng;

use crate::autocomplete::Autocomplete;
use crate::history::CommandHistory;
use crate::matrix::MatrixOverlay;
use crate::session::{Session, SubmitOutcome};

/// Result of handling a single input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// The line being edited plus its completion suggestion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputDraft {
    text: String,
    suggestion: Option<String>,
}

impl InputDraft {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    /// The part of the suggestion not yet typed, for ghost-text rendering.
    pub fn hint(&self) -> Option<&str> {
        let suggestion = self.suggestion.as_deref()?;
        let typed = self.text.trim().to_lowercase();
        suggestion.strip_prefix(typed.as_str())
    }
}

pub struct InputController {
    session: Session,
    history: CommandHistory,
    autocomplete: Autocomplete,
    draft: InputDraft,
    overlay: MatrixOverlay,
}

impl InputController {
    pub fn new(session: Session, config: &TerminalConfig, seed: u64) -> Self {
        let autocomplete = Autocomplete::new(session.registry());
        Self {
            session,
            history: CommandHistory::new(),
            autocomplete,
            draft: InputDraft::default(),
            overlay: MatrixOverlay::new(&config.matrix, seed),
        }
    }

    /// Controller over [`Session::desktop`] with time-seeded randomness.
    pub fn desktop(config: &TerminalConfig) -> Self {
        let seed = SimpleRng::from_time().next_u64();
        Self::new(Session::desktop(config), config, seed)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn draft(&self) -> &InputDraft {
        &self.draft
    }

    pub fn overlay(&self) -> &MatrixOverlay {
        &self.overlay
    }

    /// Replace the draft, as a text field's change event does.
    pub fn on_character_input(&mut self, text: &str) {
        self.history.reset_cursor();
        self.set_draft(text.to_string());
    }

    /// Submit the draft to the session and record it in history.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        let line = std::mem::take(&mut self.draft.text);
        self.draft.suggestion = None;
        let outcome = self.session.submit(&line, &self.history);
        self.history.record_submission(&line);
        self.sync_overlay();
        outcome
    }

    /// Recall an older entry. At the oldest entry the draft is kept.
    pub fn on_arrow_up(&mut self) {
        if let Some(text) = self.history.up().map(str::to_string) {
            self.recall(text);
        }
    }

    /// Recall a newer entry, or an empty draft after the newest one.
    pub fn on_arrow_down(&mut self) {
        if let Some(text) = self.history.down().map(str::to_string) {
            self.recall(text);
        }
    }

    /// Accept the suggestion. Never submits.
    pub fn on_tab(&mut self) {
        if let Some(suggestion) = self.draft.suggestion.take() {
            log::trace!("autocomplete accepted: {suggestion}");
            self.draft.text = suggestion;
        }
    }

    /// Title-bar clear: empties the scrollback, leaves modes alone.
    pub fn on_clear_button(&mut self) {
        self.session.clear_scrollback();
    }

    /// Map a typed input event onto the entry points above.
    pub fn on_input(&mut self, event: &InputEvent) -> InputResult {
        match event {
            InputEvent::Char(ch) => {
                let mut text = self.draft.text.clone();
                text.push(*ch);
                self.on_character_input(&text);
            },
            InputEvent::Backspace => {
                let mut text = self.draft.text.clone();
                text.pop();
                self.on_character_input(&text);
            },
            InputEvent::Enter => {
                self.on_submit();
            },
            InputEvent::Up => self.on_arrow_up(),
            InputEvent::Down => self.on_arrow_down(),
            InputEvent::Tab => self.on_tab(),
            InputEvent::ClearScreen => self.on_clear_button(),
            InputEvent::Quit => return InputResult::Quit,
        }
        InputResult::Continue
    }

    /// Recalled entries carry no suggestion until the user edits them.
    fn recall(&mut self, text: String) {
        self.draft.text = text;
        self.draft.suggestion = None;
    }

    fn set_draft(&mut self, text: String) {
        self.draft.suggestion = self.autocomplete.suggest(&text).map(str::to_string);
        self.draft.text = text;
    }

    fn sync_overlay(&mut self) {
        match (self.session.matrix_mode(), self.overlay.is_active()) {
            (true, false) => self.overlay.start(),
            (false, true) => self.overlay.stop(),
            _ => {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::register_builtins;
    use crate::interpreter::CommandRegistry;
    use folio_platform::{FixedClock, LocalTime};

    fn setup() -> InputController {
        let mut config = TerminalConfig::default();
        config.matrix.animate = false;
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);
        let clock = FixedClock::new(
            LocalTime::from_ymd_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            "UTC",
        );
        let session = Session::new(&config, registry, Box::new(clock), SimpleRng::new(1));
        InputController::new(session, &config, 1)
    }

    fn type_line(c: &mut InputController, line: &str) {
        for ch in line.chars() {
            c.on_input(&InputEvent::Char(ch));
        }
    }

    fn submit(c: &mut InputController, line: &str) -> SubmitOutcome {
        c.on_character_input(line);
        c.on_submit()
    }

    #[test]
    fn typing_updates_suggestion_and_hint() {
        let mut c = setup();
        type_line(&mut c, "ne");
        assert_eq!(c.draft().text(), "ne");
        assert_eq!(c.draft().suggestion(), Some("neofetch"));
        assert_eq!(c.draft().hint(), Some("ofetch"));
        type_line(&mut c, "ofetch");
        assert_eq!(c.draft().suggestion(), None);
        assert_eq!(c.draft().hint(), None);
    }

    #[test]
    fn backspace_edits_draft() {
        let mut c = setup();
        type_line(&mut c, "helpx");
        c.on_input(&InputEvent::Backspace);
        assert_eq!(c.draft().text(), "help");
        c.on_input(&InputEvent::Backspace);
        assert_eq!(c.draft().suggestion(), Some("help"));
    }

    #[test]
    fn tab_accepts_without_submitting() {
        let mut c = setup();
        let before = c.session().buffer().len();
        type_line(&mut c, "sk");
        c.on_input(&InputEvent::Tab);
        assert_eq!(c.draft().text(), "skills");
        assert_eq!(c.draft().suggestion(), None);
        assert_eq!(c.session().buffer().len(), before);
        assert!(c.history().is_empty());
    }

    #[test]
    fn tab_without_suggestion_is_noop() {
        let mut c = setup();
        type_line(&mut c, "zz");
        c.on_tab();
        assert_eq!(c.draft().text(), "zz");
    }

    #[test]
    fn submit_clears_draft_and_records() {
        let mut c = setup();
        type_line(&mut c, "whoami");
        c.on_input(&InputEvent::Enter);
        assert_eq!(c.draft().text(), "");
        assert_eq!(c.draft().suggestion(), None);
        assert_eq!(c.history().get(0), Some("whoami"));
        assert!(
            c.session()
                .buffer()
                .iter()
                .any(|l| l == "visitor@ram:~$ whoami")
        );
    }

    #[test]
    fn history_command_excludes_itself() {
        let mut c = setup();
        submit(&mut c, "about");
        submit(&mut c, "history");
        let buf = c.session().buffer();
        let tail = &buf[buf.len() - 3..];
        assert_eq!(tail, &["  📜 Command History:", "  1  about", ""]);
    }

    #[test]
    fn arrow_navigation_round_trip() {
        let mut c = setup();
        submit(&mut c, "foo");
        submit(&mut c, "bar");
        c.on_arrow_up();
        assert_eq!(c.draft().text(), "bar");
        c.on_arrow_up();
        assert_eq!(c.draft().text(), "foo");
        c.on_arrow_up();
        assert_eq!(c.draft().text(), "foo");
        c.on_arrow_down();
        assert_eq!(c.draft().text(), "bar");
        c.on_arrow_down();
        assert_eq!(c.draft().text(), "");
        c.on_arrow_down();
        assert_eq!(c.draft().text(), "");
    }

    #[test]
    fn arrow_down_when_editing_keeps_draft() {
        let mut c = setup();
        submit(&mut c, "foo");
        type_line(&mut c, "partial");
        c.on_arrow_down();
        assert_eq!(c.draft().text(), "partial");
    }

    #[test]
    fn typing_resets_history_cursor() {
        let mut c = setup();
        submit(&mut c, "foo");
        submit(&mut c, "bar");
        c.on_arrow_up();
        c.on_arrow_up();
        assert_eq!(c.history().cursor(), Some(1));
        c.on_input(&InputEvent::Char('x'));
        assert_eq!(c.history().cursor(), None);
        assert_eq!(c.draft().text(), "foox");
        c.on_arrow_up();
        assert_eq!(c.draft().text(), "bar");
    }

    #[test]
    fn recall_clears_suggestion() {
        let mut c = setup();
        submit(&mut c, "he");
        submit(&mut c, "fort");
        type_line(&mut c, "ne");
        assert_eq!(c.draft().suggestion(), Some("neofetch"));
        c.on_arrow_up();
        assert_eq!(c.draft().text(), "fort");
        assert_eq!(c.draft().suggestion(), None);
        c.on_arrow_up();
        assert_eq!(c.draft().text(), "he");
        assert_eq!(c.draft().suggestion(), None);
        c.on_arrow_down();
        assert_eq!(c.draft().suggestion(), None);
        c.on_tab();
        assert_eq!(c.draft().text(), "fort");
    }

    #[test]
    fn editing_a_recalled_entry_suggests_again() {
        let mut c = setup();
        submit(&mut c, "fort");
        c.on_arrow_up();
        c.on_input(&InputEvent::Char('u'));
        assert_eq!(c.draft().text(), "fortu");
        assert_eq!(c.draft().suggestion(), Some("fortune"));
    }

    #[test]
    fn matrix_drives_overlay() {
        let mut c = setup();
        assert_eq!(submit(&mut c, "matrix"), SubmitOutcome::MatrixToggled(true));
        assert!(c.overlay().is_active());
        assert_eq!(submit(&mut c, "matrix"), SubmitOutcome::MatrixToggled(false));
        assert!(!c.overlay().is_active());
    }

    #[test]
    fn clear_stops_overlay() {
        let mut c = setup();
        submit(&mut c, "matrix");
        assert_eq!(submit(&mut c, "clear"), SubmitOutcome::Cleared);
        assert!(!c.overlay().is_active());
        assert!(c.session().buffer().is_empty());
    }

    #[test]
    fn clear_button_keeps_matrix() {
        let mut c = setup();
        submit(&mut c, "matrix");
        c.on_input(&InputEvent::ClearScreen);
        assert!(c.session().buffer().is_empty());
        assert!(c.session().matrix_mode());
        assert!(c.overlay().is_active());
    }

    #[test]
    fn quit_event() {
        let mut c = setup();
        assert_eq!(c.on_input(&InputEvent::Quit), InputResult::Quit);
        assert_eq!(c.on_input(&InputEvent::Up), InputResult::Continue);
    }

    #[test]
    fn hint_ignores_leading_whitespace_and_case() {
        let mut c = setup();
        c.on_character_input("  CO");
        assert_eq!(c.draft().suggestion(), Some("contact"));
        assert_eq!(c.draft().hint(), Some("ntact"));
    }
}
