use crate::models::deck::types::Theme;

/// A navigation request from the viewer: arrow keys, arrow buttons, or a
/// dot-indicator click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavInput {
    Next,
    Prev,
    Goto(usize),
}

/// Presentation state for one connected viewer: which slide is visible and
/// which theme is active.
///
/// Navigation and theme selection apply locally and immediately; only an
/// authoritative deck snapshot (via [`ViewerState::reconcile`]) forces a full
/// reset. Navigating past either boundary is a no-op rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerState {
    slide_index: usize,
    theme: Theme,
    slide_count: usize,
}

impl ViewerState {
    pub fn new() -> Self {
        ViewerState {
            slide_index: 0,
            theme: Theme::default(),
            slide_count: 0,
        }
    }

    pub fn slide_index(&self) -> usize {
        self.slide_index
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Reconcile with an authoritative deck snapshot: the visible slide resets
    /// to index 0, and the snapshot's theme is adopted only when it names a
    /// known theme. An unrecognized name keeps the previous local theme.
    pub fn reconcile(&mut self, slide_count: usize, theme_name: &str) {
        self.slide_count = slide_count;
        self.slide_index = 0;
        if let Some(theme) = Theme::parse(theme_name) {
            self.theme = theme;
        }
    }

    /// Apply a navigation input, clamping the target to the valid range.
    /// Returns true when the visible slide actually changed.
    pub fn navigate(&mut self, input: NavInput) -> bool {
        if self.slide_count == 0 {
            return false;
        }
        let last = self.slide_count - 1;
        let target = match input {
            NavInput::Next => (self.slide_index + 1).min(last),
            NavInput::Prev => self.slide_index.saturating_sub(1),
            NavInput::Goto(index) => index.min(last),
        };
        if target == self.slide_index {
            return false;
        }
        self.slide_index = target;
        true
    }

    /// Adopt a theme selected in the viewer. This applies unconditionally;
    /// persisting the choice on the authoritative side is the caller's
    /// (best-effort) concern and never reverts this state.
    pub fn select_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(slide_count: usize) -> ViewerState {
        let mut state = ViewerState::new();
        state.reconcile(slide_count, "midnight");
        state
    }

    #[test]
    fn next_advances_and_clamps_at_last_slide() {
        let mut state = state_with(3);
        assert!(state.navigate(NavInput::Next));
        assert!(state.navigate(NavInput::Next));
        assert_eq!(state.slide_index(), 2);
        assert!(!state.navigate(NavInput::Next));
        assert_eq!(state.slide_index(), 2);
    }

    #[test]
    fn prev_at_first_slide_is_a_noop() {
        let mut state = state_with(3);
        assert!(!state.navigate(NavInput::Prev));
        assert_eq!(state.slide_index(), 0);
    }

    #[test]
    fn goto_clamps_out_of_range_targets() {
        let mut state = state_with(4);
        assert!(state.navigate(NavInput::Goto(99)));
        assert_eq!(state.slide_index(), 3);
    }

    #[test]
    fn navigation_on_empty_deck_is_a_noop() {
        let mut state = state_with(0);
        assert!(!state.navigate(NavInput::Next));
        assert!(!state.navigate(NavInput::Goto(5)));
        assert_eq!(state.slide_index(), 0);
    }

    #[test]
    fn reconcile_resets_index_and_adopts_known_theme() {
        let mut state = state_with(5);
        state.navigate(NavInput::Goto(4));
        state.reconcile(9, "forest");
        assert_eq!(state.slide_index(), 0);
        assert_eq!(state.theme(), Theme::Forest);
    }

    #[test]
    fn reconcile_keeps_previous_theme_on_unknown_name() {
        let mut state = state_with(5);
        state.select_theme(Theme::Sunset);
        state.reconcile(5, "vaporwave");
        assert_eq!(state.theme(), Theme::Sunset);
    }
}
