//! Application state for the TUI.

use std::time::Instant;

use crate::config::Config;
use crate::error::DawnError;
use crate::features::motivation::{render_cards, Card, ThreadRngSource};
use crate::features::navigation::{Navigator, Section};
use crate::features::notes::{NotesPad, NotesStore, NotesView, SaveOutcome, SAVE_FAILED_MESSAGE};
use crate::features::timer::{IntervalTimer, Mode, TickOutcome, TimerPanel};

/// Application state.
pub struct App<S: NotesStore> {
    /// The study timer and the panel it draws into.
    pub timer: IntervalTimer<TimerPanel>,
    /// Notes pad backing the notes section.
    pad: NotesPad<S>,
    /// What the notes section currently shows.
    pub notes: NotesView,
    /// Note being written.
    pub draft: String,
    /// Whether keys go to the draft.
    pub editing: bool,
    /// Motivation board.
    pub cards: Vec<Card>,
    /// Page scroll position.
    pub navigator: Navigator,
    /// Section last navigated to.
    pub section: Section,
    /// First line of each section, in page order.
    pub section_starts: [u16; 3],
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Pending 'g' key for 'gg' command.
    pub pending_g: bool,
}

impl<S: NotesStore> App<S> {
    /// Create a new app instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the timer or motivation settings are invalid.
    pub fn new(pad: NotesPad<S>, config: &Config) -> Result<Self, DawnError> {
        let picker = config.motivation.picker(Box::new(ThreadRngSource))?;
        let timer = IntervalTimer::new(config.timer.settings()?, picker, TimerPanel::default());
        let notes = pad.load();

        Ok(Self {
            timer,
            pad,
            notes,
            draft: String::new(),
            editing: false,
            cards: render_cards(&config.motivation.card_messages()),
            navigator: Navigator::new(0),
            section: Section::Notes,
            section_starts: [0; 3],
            status: Some("Press ? for help".to_string()),
            should_quit: false,
            pending_g: false,
        })
    }

    /// Advance everything that moves on its own: due timer ticks and the
    /// scroll animation.
    pub fn on_frame(&mut self, now: Instant) {
        if let Some(TickOutcome::Completed { from, to }) = self.timer.poll(now) {
            self.status = Some(format!("{from} done. {to} is up."));
        }
        self.navigator.step();
    }

    /// Record where each section starts and how far the page scrolls.
    pub fn set_layout(&mut self, section_starts: [u16; 3], max_offset: u16) {
        self.section_starts = section_starts;
        self.navigator.set_max_offset(max_offset);
    }

    /// Start or pause the countdown.
    pub fn toggle_timer(&mut self, now: Instant) {
        self.timer.start_or_pause_at(now);
    }

    /// Stop the countdown and reload the current mode.
    pub fn reset_timer(&mut self) {
        self.timer.reset();
        self.status = Some("Timer reset".to_string());
    }

    /// Switch the timer to `mode`.
    pub fn set_mode(&mut self, mode: Mode) {
        self.timer.set_mode(mode);
        self.status = Some(format!("{} loaded", mode.label()));
    }

    /// Smooth-scroll to `section`.
    pub fn go_to(&mut self, section: Section) {
        self.section = section;
        self.navigator.scroll_to(self.section_starts[section.index()]);
        self.pending_g = false;
    }

    /// Follow an in-page link. Returns false if `href` names no section.
    pub fn follow_anchor(&mut self, href: &str) -> bool {
        match Section::from_anchor(href) {
            Some(section) => {
                self.go_to(section);
                true
            }
            None => false,
        }
    }

    /// Go to the section after the current one.
    pub fn next_section(&mut self) {
        self.go_to(self.section.next());
    }

    /// Go to the section before the current one.
    pub fn previous_section(&mut self) {
        self.go_to(self.section.previous());
    }

    /// Scroll by `delta` lines.
    pub fn scroll_by(&mut self, delta: i32) {
        self.navigator.scroll_by(delta);
        self.pending_g = false;
    }

    /// Jump to the top of the page.
    pub fn scroll_top(&mut self) {
        self.section = Section::Notes;
        self.navigator.scroll_to(0);
        self.pending_g = false;
    }

    /// Jump to the bottom of the page.
    pub fn scroll_bottom(&mut self) {
        self.section = Section::Motivation;
        self.navigator.scroll_to(u16::MAX);
        self.pending_g = false;
    }

    /// Start writing a note.
    pub fn begin_edit(&mut self) {
        self.go_to(Section::Notes);
        self.editing = true;
        self.status = Some("Enter:save | Shift+Enter:newline | Esc:done".to_string());
    }

    /// Stop writing; the draft is kept.
    pub fn end_edit(&mut self) {
        self.editing = false;
        self.status = None;
    }

    /// Append the draft to the notes pad.
    ///
    /// The draft is cleared only when the save goes through.
    pub fn save_draft(&mut self) {
        match self.pad.append(&self.draft) {
            Ok(SaveOutcome::Ignored) => {
                self.status = Some("Nothing to save".to_string());
            }
            Ok(SaveOutcome::Saved(_)) => {
                self.draft.clear();
                self.notes = self.pad.load();
                self.status = Some("Saved".to_string());
            }
            Err(_) => {
                self.status = Some(SAVE_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Handle 'g' key for 'gg' command.
    pub fn handle_g(&mut self) {
        if self.pending_g {
            // Second 'g' - go to top
            self.scroll_top();
        } else {
            // First 'g' - wait for second
            self.pending_g = true;
            self.status = Some("g-".to_string());
        }
    }

    /// Cancel pending 'g' command.
    pub fn cancel_pending(&mut self) {
        self.pending_g = false;
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::features::notes::store::MockNotesStore;
    use crate::features::notes::SqliteNotesStore;
    use crate::features::timer::PAUSE_LABEL;
    use crate::storage::Database;

    fn test_app() -> App<SqliteNotesStore> {
        let store = SqliteNotesStore::new(Database::open_in_memory().unwrap());
        App::new(NotesPad::new(store), &Config::default()).unwrap()
    }

    #[test]
    fn test_new_app() {
        let app = test_app();
        assert_eq!(app.notes, NotesView::Empty);
        assert_eq!(app.cards.len(), 8);
        assert_eq!(app.timer.observer().display, "25:00");
        assert_eq!(app.timer.observer().mode_label, "Focus");
        assert!(!app.editing);
    }

    #[test]
    fn test_save_draft() {
        let mut app = test_app();
        app.begin_edit();
        app.draft.push_str("  you got this  ");
        app.save_draft();

        assert!(app.draft.is_empty());
        assert_eq!(app.notes, NotesView::Saved("you got this".to_string()));
        assert_eq!(app.status.as_deref(), Some("Saved"));
    }

    #[test]
    fn test_save_blank_draft() {
        let mut app = test_app();
        app.draft.push_str("   ");
        app.save_draft();

        assert_eq!(app.notes, NotesView::Empty);
        assert_eq!(app.status.as_deref(), Some("Nothing to save"));
    }

    #[test]
    fn test_save_failure_keeps_draft() {
        let mut store = MockNotesStore::new();
        store.expect_get().returning(|| Ok(None));
        store
            .expect_set()
            .returning(|_| Err(DawnError::Database("disk full".to_string())));

        let mut app = App::new(NotesPad::new(store), &Config::default()).unwrap();
        app.draft.push_str("hello");
        app.save_draft();

        assert_eq!(app.draft, "hello");
        assert_eq!(app.status.as_deref(), Some(SAVE_FAILED_MESSAGE));
    }

    #[test]
    fn test_unopenable_notes_still_start() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let store = SqliteNotesStore::open(&crate::config::Paths::with_root(blocker));

        let mut app = App::new(NotesPad::new(store), &Config::default()).unwrap();
        assert_eq!(app.notes, NotesView::Unavailable);

        app.draft.push_str("hello");
        app.save_draft();
        assert_eq!(app.draft, "hello");
        assert_eq!(app.status.as_deref(), Some(SAVE_FAILED_MESSAGE));
    }

    #[test]
    fn test_timer_runs_on_frames() {
        let mut app = test_app();
        let start = Instant::now();
        app.toggle_timer(start);
        assert_eq!(app.timer.observer().button_label, PAUSE_LABEL);

        app.on_frame(start + Duration::from_millis(500));
        assert_eq!(app.timer.observer().display, "25:00");
        app.on_frame(start + Duration::from_secs(1));
        assert_eq!(app.timer.observer().display, "24:59");
    }

    #[test]
    fn test_set_mode_and_reset() {
        let mut app = test_app();
        app.set_mode(Mode::LongBreak);
        assert_eq!(app.timer.observer().display, "15:00");
        assert_eq!(app.timer.observer().mode_label, "Long break");

        app.toggle_timer(Instant::now());
        app.reset_timer();
        assert!(!app.timer.is_running());
        assert_eq!(app.timer.mode(), Mode::LongBreak);
    }

    #[test]
    fn test_section_navigation() {
        let mut app = test_app();
        app.set_layout([0, 20, 40], 50);

        app.next_section();
        assert_eq!(app.section, Section::Timer);
        assert_eq!(app.navigator.target(), 20);

        // Eased: first frame covers half the distance
        app.on_frame(Instant::now());
        assert_eq!(app.navigator.offset(), 10);

        app.previous_section();
        assert_eq!(app.section, Section::Notes);
        assert_eq!(app.navigator.target(), 0);
    }

    #[test]
    fn test_follow_anchor() {
        let mut app = test_app();
        app.set_layout([0, 20, 40], 50);

        assert!(app.follow_anchor("#motivation"));
        assert_eq!(app.navigator.target(), 40);

        assert!(!app.follow_anchor("#nowhere"));
        assert!(!app.follow_anchor("https://example.com"));
        assert_eq!(app.section, Section::Motivation);
    }

    #[test]
    fn test_gg_and_g() {
        let mut app = test_app();
        app.set_layout([0, 20, 40], 50);

        app.scroll_bottom();
        assert_eq!(app.navigator.target(), 50);

        app.handle_g();
        assert!(app.pending_g);
        app.handle_g();
        assert!(!app.pending_g);
        assert_eq!(app.navigator.target(), 0);
    }
}
