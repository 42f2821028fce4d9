//! Pure picker state: key classification and list navigation.
//!
//! The terminal shell feeds key events through [`classify_key`] into
//! [`PickerState::apply`] and redraws from the result.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::filter::rank;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    Insert(char),
    Backspace,
    Move(isize),
    Accept,
    Cancel,
}

/// Map a key event to a picker action, ignoring key releases.
#[must_use]
pub fn classify_key(key: KeyEvent) -> Option<PickerAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(PickerAction::Cancel),
        KeyCode::Char('c' | 'g') if ctrl => Some(PickerAction::Cancel),
        KeyCode::Enter => Some(PickerAction::Accept),
        KeyCode::Up | KeyCode::BackTab => Some(PickerAction::Move(-1)),
        KeyCode::Down | KeyCode::Tab => Some(PickerAction::Move(1)),
        KeyCode::Char('p' | 'k') if ctrl => Some(PickerAction::Move(-1)),
        KeyCode::Char('n' | 'j') if ctrl => Some(PickerAction::Move(1)),
        KeyCode::Backspace => Some(PickerAction::Backspace),
        KeyCode::Char(c) if !ctrl => Some(PickerAction::Insert(c)),
        _ => None,
    }
}

/// What the loop should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Selected(usize),
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct PickerState {
    items: Vec<String>,
    query: String,
    matches: Vec<usize>,
    cursor: usize,
}

impl PickerState {
    #[must_use]
    pub fn new(items: Vec<String>) -> Self {
        let matches = (0..items.len()).collect();
        Self {
            items,
            query: String::new(),
            matches,
            cursor: 0,
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Currently visible items as `(original index, label)`, best first.
    pub fn visible(&self) -> impl Iterator<Item = (usize, &str)> {
        self.matches
            .iter()
            .map(|&index| (index, self.items[index].as_str()))
    }

    #[must_use]
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn apply(&mut self, action: PickerAction) -> Step {
        match action {
            PickerAction::Insert(c) => {
                self.query.push(c);
                self.refilter();
            }
            PickerAction::Backspace => {
                if self.query.pop().is_some() {
                    self.refilter();
                }
            }
            PickerAction::Move(delta) => self.move_cursor(delta),
            PickerAction::Accept => {
                if let Some(&index) = self.matches.get(self.cursor) {
                    return Step::Selected(index);
                }
            }
            PickerAction::Cancel => return Step::Cancelled,
        }
        Step::Continue
    }

    fn refilter(&mut self) {
        self.matches = rank(&self.query, &self.items);
        self.cursor = 0;
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.matches.len();
        if len == 0 {
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn state() -> PickerState {
        PickerState::new(vec![
            "problems/1_two_sum.go".to_string(),
            "problems/2_add_two_numbers.go".to_string(),
            "problems/206_reverse_list.go".to_string(),
        ])
    }

    #[test]
    fn escape_and_ctrl_c_cancel() {
        assert_eq!(classify_key(key(KeyCode::Esc)), Some(PickerAction::Cancel));
        assert_eq!(classify_key(ctrl('c')), Some(PickerAction::Cancel));
    }

    #[test]
    fn arrows_and_ctrl_keys_move() {
        assert_eq!(classify_key(key(KeyCode::Up)), Some(PickerAction::Move(-1)));
        assert_eq!(classify_key(key(KeyCode::Down)), Some(PickerAction::Move(1)));
        assert_eq!(classify_key(ctrl('p')), Some(PickerAction::Move(-1)));
        assert_eq!(classify_key(ctrl('n')), Some(PickerAction::Move(1)));
    }

    #[test]
    fn plain_characters_extend_the_query() {
        assert_eq!(classify_key(key(KeyCode::Char('j'))), Some(PickerAction::Insert('j')));
        assert_eq!(classify_key(ctrl('x')), None);
    }

    #[test]
    fn accept_returns_original_index_after_filtering() {
        let mut state = state();
        for c in "reverse".chars() {
            assert_eq!(state.apply(PickerAction::Insert(c)), Step::Continue);
        }
        assert_eq!(state.match_count(), 1);
        assert_eq!(state.apply(PickerAction::Accept), Step::Selected(2));
    }

    #[test]
    fn cursor_is_clamped_to_matches() {
        let mut state = state();
        state.apply(PickerAction::Move(-5));
        assert_eq!(state.cursor(), 0);
        state.apply(PickerAction::Move(10));
        assert_eq!(state.cursor(), 2);
        assert_eq!(state.apply(PickerAction::Accept), Step::Selected(2));
    }

    #[test]
    fn accept_with_no_matches_keeps_running() {
        let mut state = state();
        state.apply(PickerAction::Insert('z'));
        state.apply(PickerAction::Insert('z'));
        assert_eq!(state.match_count(), 0);
        assert_eq!(state.apply(PickerAction::Accept), Step::Continue);
    }

    #[test]
    fn backspace_restores_matches() {
        let mut state = state();
        state.apply(PickerAction::Insert('z'));
        state.apply(PickerAction::Backspace);
        assert_eq!(state.query(), "");
        assert_eq!(state.match_count(), state.total());
    }

    #[test]
    fn cancel_ends_the_loop() {
        assert_eq!(state().apply(PickerAction::Cancel), Step::Cancelled);
    }
}
