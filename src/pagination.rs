//! Pagination state and the transitions that move it.
//!
//! The state is a single starting-row index. There is no page number: the
//! visible window is always `starting_row .. starting_row + page_size`,
//! truncated at the end of the rows. Stepping forward is not bounded by the
//! row count, so paging past the end yields an empty window rather than an
//! error.

use crate::key::{Binding, KeyMap};
use crate::table::NavigationId;
use crossterm::event::KeyCode;
use std::ops::Range;

/// Computes the starting row after activating `id`.
///
/// `Prev` clamps at 0; `Next` is unbounded above.
///
/// # Examples
///
/// ```rust
/// use paginated_table::pagination::navigate;
/// use paginated_table::table::NavigationId;
///
/// assert_eq!(navigate(NavigationId::Next, 40, 20), 60);
/// assert_eq!(navigate(NavigationId::Prev, 40, 20), 20);
/// assert_eq!(navigate(NavigationId::Prev, 5, 20), 0);
/// ```
pub fn navigate(id: NavigationId, starting_row: usize, page_size: usize) -> usize {
    match id {
        NavigationId::Prev => starting_row.saturating_sub(page_size),
        NavigationId::Next => starting_row.saturating_add(page_size),
    }
}

/// Returns the index range of the visible window over `len` rows.
///
/// The range is empty when `starting_row` is at or past the end.
pub fn window(starting_row: usize, page_size: usize, len: usize) -> Range<usize> {
    let start = starting_row.min(len);
    let end = starting_row.saturating_add(page_size).min(len);
    start..end
}

/// The controller's only cross-update state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationState {
    starting_row: usize,
}

impl PaginationState {
    /// Creates state positioned at the first row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-based index of the first visible row.
    pub fn starting_row(&self) -> usize {
        self.starting_row
    }

    /// Replaces the starting row.
    pub fn set_starting_row(&mut self, starting_row: usize) {
        self.starting_row = starting_row;
    }

    /// Applies a navigation step and returns the new starting row.
    pub fn navigate(&mut self, id: NavigationId, page_size: usize) -> usize {
        self.starting_row = navigate(id, self.starting_row, page_size);
        self.starting_row
    }

    /// Index range of the visible window over `len` rows.
    pub fn window(&self, page_size: usize, len: usize) -> Range<usize> {
        window(self.starting_row, page_size, len)
    }

    /// The visible slice of `items`.
    pub fn visible<'a, T>(&self, items: &'a [T], page_size: usize) -> &'a [T] {
        &items[self.window(page_size, items.len())]
    }
}

/// Key bindings for paging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationKeyMap {
    /// Previous page. Default keys: PageUp, Left Arrow, 'h'.
    pub prev: Binding,
    /// Next page. Default keys: PageDown, Right Arrow, 'l'.
    pub next: Binding,
}

impl Default for NavigationKeyMap {
    fn default() -> Self {
        Self {
            prev: Binding::new(vec![KeyCode::PageUp, KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h", "prev page"),
            next: Binding::new(vec![KeyCode::PageDown, KeyCode::Right, KeyCode::Char('l')])
                .with_help("→/l", "next page"),
        }
    }
}

impl NavigationKeyMap {
    /// Returns the navigation control a key press activates, if any.
    pub fn resolve(&self, msg: &bubbletea_rs::KeyMsg) -> Option<NavigationId> {
        if self.next.matches(msg) {
            Some(NavigationId::Next)
        } else if self.prev.matches(msg) {
            Some(NavigationId::Prev)
        } else {
            None
        }
    }
}

impl KeyMap for NavigationKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.prev, &self.next]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![vec![&self.prev, &self.next]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bubbletea_rs::KeyMsg;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_next_adds_page_size() {
        assert_eq!(navigate(NavigationId::Next, 0, 20), 20);
        assert_eq!(navigate(NavigationId::Next, 7, 5), 12);
    }

    #[test]
    fn test_next_is_unbounded_but_does_not_overflow() {
        assert_eq!(navigate(NavigationId::Next, usize::MAX - 1, 20), usize::MAX);
    }

    #[test]
    fn test_prev_clamps_at_zero() {
        assert_eq!(navigate(NavigationId::Prev, 0, 20), 0);
        assert_eq!(navigate(NavigationId::Prev, 19, 20), 0);
        assert_eq!(navigate(NavigationId::Prev, 20, 20), 0);
        assert_eq!(navigate(NavigationId::Prev, 45, 20), 25);
    }

    #[test]
    fn test_prev_undoes_next() {
        for start in [0, 3, 20, 41, 999] {
            for page_size in [1, 5, 20] {
                let forward = navigate(NavigationId::Next, start, page_size);
                assert_eq!(navigate(NavigationId::Prev, forward, page_size), start);
            }
        }
    }

    #[test]
    fn test_window_truncates_at_end() {
        assert_eq!(window(0, 20, 45), 0..20);
        assert_eq!(window(40, 20, 45), 40..45);
        assert_eq!(window(45, 20, 45), 45..45);
        assert_eq!(window(100, 20, 45), 45..45);
        assert_eq!(window(0, 20, 0), 0..0);
    }

    #[test]
    fn test_window_does_not_align_to_pages() {
        // starting row 20 with a page size of 15 stays at 20
        assert_eq!(window(20, 15, 100), 20..35);
    }

    #[test]
    fn test_state_visible_slice() {
        let rows: Vec<usize> = (0..45).collect();
        let mut state = PaginationState::new();
        assert_eq!(state.visible(&rows, 20), &rows[0..20]);

        state.navigate(NavigationId::Next, 20);
        state.navigate(NavigationId::Next, 20);
        assert_eq!(state.starting_row(), 40);
        assert_eq!(state.visible(&rows, 20), &rows[40..45]);

        state.set_starting_row(200);
        assert!(state.visible(&rows, 20).is_empty());
    }

    #[test]
    fn test_keymap_resolves_default_keys() {
        let keymap = NavigationKeyMap::default();
        let press = |key| KeyMsg {
            key,
            modifiers: KeyModifiers::NONE,
        };

        assert_eq!(keymap.resolve(&press(KeyCode::Right)), Some(NavigationId::Next));
        assert_eq!(keymap.resolve(&press(KeyCode::PageDown)), Some(NavigationId::Next));
        assert_eq!(keymap.resolve(&press(KeyCode::Char('h'))), Some(NavigationId::Prev));
        assert_eq!(keymap.resolve(&press(KeyCode::Enter)), None);
        assert_eq!(keymap.short_help().len(), 2);
        assert_eq!(keymap.full_help(), vec![vec![&keymap.prev, &keymap.next]]);
    }
}
