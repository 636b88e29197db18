//! In-page navigation.
//!
//! The page is a vertical stack of sections, each reachable by an `#anchor`.
//! Jumping to a section animates the scroll offset toward it instead of
//! snapping, covering half the remaining distance per frame.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static ANCHOR_RE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"^#([A-Za-z][A-Za-z0-9_-]*)$").unwrap()
});

/// Sections of the page, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// The notes pad.
    Notes,
    /// The interval timer.
    Timer,
    /// The motivation board.
    Motivation,
}

impl Section {
    /// All sections in page order.
    pub const ALL: [Self; 3] = [Self::Notes, Self::Timer, Self::Motivation];

    /// Anchor id, without the leading `#`.
    #[must_use]
    pub const fn anchor(&self) -> &'static str {
        match self {
            Self::Notes => "notes",
            Self::Timer => "timer",
            Self::Motivation => "motivation",
        }
    }

    /// Section title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Notes => "Notes for each other",
            Self::Timer => "Study timer",
            Self::Motivation => "Motivation",
        }
    }

    /// Position in page order.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Notes => 0,
            Self::Timer => 1,
            Self::Motivation => 2,
        }
    }

    /// Resolve an in-page link target.
    ///
    /// Returns `None` for links that are not `#anchors` and for anchors with
    /// no matching section.
    #[must_use]
    pub fn from_anchor(href: &str) -> Option<Self> {
        let id = ANCHOR_RE.captures(href.trim())?.get(1)?.as_str();
        Self::ALL
            .into_iter()
            .find(|section| section.anchor().eq_ignore_ascii_case(id))
    }

    /// The section after this one, wrapping around.
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::Notes => Self::Timer,
            Self::Timer => Self::Motivation,
            Self::Motivation => Self::Notes,
        }
    }

    /// The section before this one, wrapping around.
    #[must_use]
    pub const fn previous(&self) -> Self {
        match self {
            Self::Notes => Self::Motivation,
            Self::Timer => Self::Notes,
            Self::Motivation => Self::Timer,
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Scroll position with eased movement toward a target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigator {
    offset: u16,
    target: u16,
    max_offset: u16,
}

impl Navigator {
    /// Create a navigator at the top of a page scrollable to `max_offset`.
    #[must_use]
    pub const fn new(max_offset: u16) -> Self {
        Self {
            offset: 0,
            target: 0,
            max_offset,
        }
    }

    /// Update the scrollable range, clamping the position into it.
    pub fn set_max_offset(&mut self, max_offset: u16) {
        self.max_offset = max_offset;
        self.offset = self.offset.min(max_offset);
        self.target = self.target.min(max_offset);
    }

    /// Start a smooth scroll toward `offset`.
    pub fn scroll_to(&mut self, offset: u16) {
        self.target = offset.min(self.max_offset);
    }

    /// Move immediately to `offset`.
    pub fn jump_to(&mut self, offset: u16) {
        self.target = offset.min(self.max_offset);
        self.offset = self.target;
    }

    /// Move immediately by `delta` lines.
    pub fn scroll_by(&mut self, delta: i32) {
        let moved = i32::from(self.offset).saturating_add(delta);
        let clamped = moved.clamp(0, i32::from(self.max_offset));
        self.jump_to(u16::try_from(clamped).unwrap_or(self.max_offset));
    }

    /// Advance one animation frame. Returns true if the offset moved.
    pub fn step(&mut self) -> bool {
        if self.offset == self.target {
            return false;
        }

        let distance = self.offset.abs_diff(self.target);
        let delta = (distance / 2).max(1);
        if self.offset < self.target {
            self.offset += delta;
        } else {
            self.offset -= delta;
        }
        true
    }

    /// Current scroll offset.
    #[must_use]
    pub const fn offset(&self) -> u16 {
        self.offset
    }

    /// Offset being scrolled toward.
    #[must_use]
    pub const fn target(&self) -> u16 {
        self.target
    }

    /// Whether the scroll has reached its target.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        self.offset == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_anchor() {
        assert_eq!(Section::from_anchor("#notes"), Some(Section::Notes));
        assert_eq!(Section::from_anchor("#timer"), Some(Section::Timer));
        assert_eq!(Section::from_anchor(" #Motivation "), Some(Section::Motivation));
    }

    #[test]
    fn test_from_anchor_ignores_non_anchors() {
        assert_eq!(Section::from_anchor("timer"), None);
        assert_eq!(Section::from_anchor("https://example.com/#timer"), None);
        assert_eq!(Section::from_anchor("#"), None);
    }

    #[test]
    fn test_from_anchor_unknown_target_is_noop() {
        assert_eq!(Section::from_anchor("#gallery"), None);
    }

    #[test]
    fn test_section_cycle() {
        assert_eq!(Section::Notes.next(), Section::Timer);
        assert_eq!(Section::Motivation.next(), Section::Notes);
        assert_eq!(Section::Notes.previous(), Section::Motivation);
        for section in Section::ALL {
            assert_eq!(section.next().previous(), section);
            assert_eq!(Section::ALL[section.index()], section);
        }
    }

    #[test]
    fn test_smooth_scroll_reaches_target() {
        let mut nav = Navigator::new(100);
        nav.scroll_to(40);

        let mut frames = 0;
        let mut last = nav.offset();
        while nav.step() {
            assert!(nav.offset() > last);
            last = nav.offset();
            frames += 1;
        }

        assert_eq!(nav.offset(), 40);
        assert!(nav.is_settled());
        assert!(frames > 1, "scroll should take several frames");
        assert!(frames < 40, "scroll should ease, not crawl");
    }

    #[test]
    fn test_smooth_scroll_upward() {
        let mut nav = Navigator::new(100);
        nav.jump_to(60);
        nav.scroll_to(0);
        while nav.step() {}
        assert_eq!(nav.offset(), 0);
    }

    #[test]
    fn test_target_clamped_to_page() {
        let mut nav = Navigator::new(10);
        nav.scroll_to(50);
        assert_eq!(nav.target(), 10);

        nav.scroll_by(-5);
        assert_eq!(nav.offset(), 0);
        nav.scroll_by(25);
        assert_eq!(nav.offset(), 10);
    }

    #[test]
    fn test_shrinking_page_clamps_position() {
        let mut nav = Navigator::new(30);
        nav.jump_to(30);
        nav.set_max_offset(12);
        assert_eq!(nav.offset(), 12);
        assert!(nav.is_settled());
    }
}
