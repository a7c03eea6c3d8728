//! Hover and keyboard-focus state for one mounted picker instance.
//!
//! Selection is deliberately absent here: the picker is a controlled
//! component, so it only ever reports activation to the host and reflects
//! whatever value the host passes back in.

/// How the picker's element came to hold input focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusOrigin {
    Keyboard,
    Pointer,
}

/// Keyboard commands the picker understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Arrow right/down: focus the next wedge, wrapping past the end.
    Next,
    /// Arrow left/up: focus the previous wedge, wrapping past the start.
    Prev,
    /// Enter/Space: activate the focused wedge.
    Activate,
    /// Escape: drop wedge focus (the UI layer also blurs the element).
    Cancel,
}

/// Ephemeral per-instance interaction state, reset on mount. Multiple
/// picker instances are fully independent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    hovered: Option<usize>,
    focused: Option<usize>,
    keyboard_focus: bool,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// True while the picker holds input focus gained through the keyboard.
    pub fn keyboard_focus(&self) -> bool {
        self.keyboard_focus
    }

    pub fn pointer_enter(&mut self, index: usize) {
        self.hovered = Some(index);
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = None;
    }

    /// A pointer press: any focus the element subsequently gains is
    /// pointer-originated, not keyboard-originated.
    pub fn pointer_down(&mut self) {
        self.keyboard_focus = false;
    }

    /// Apply a keyboard command against a circular list of `count` wedges.
    ///
    /// Returns the index to activate when the command is
    /// [`Command::Activate`] and a wedge is focused; the caller fires its
    /// selection callback with that wedge's key. Focus is unchanged by
    /// activation. With `count == 0` every command is a no-op.
    pub fn apply(&mut self, command: Command, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        self.keyboard_focus = true;
        match command {
            Command::Next => {
                self.focused = Some(match self.focused {
                    Some(i) => (i + 1) % count,
                    None => 0,
                });
                None
            }
            Command::Prev => {
                self.focused = Some(match self.focused {
                    Some(i) => (i + count - 1) % count,
                    None => count - 1,
                });
                None
            }
            Command::Activate => self.focused,
            Command::Cancel => {
                self.focused = None;
                self.keyboard_focus = false;
                None
            }
        }
    }

    /// The picker's element gained input focus.
    ///
    /// Keyboard-originated focus (Tab) lands on the selected wedge, or wedge
    /// 0 when nothing is selected. Pointer-originated focus leaves wedge
    /// focus alone.
    pub fn gained_focus(&mut self, origin: FocusOrigin, selected: Option<usize>, count: usize) {
        if origin == FocusOrigin::Keyboard && count > 0 {
            self.keyboard_focus = true;
            self.focused = Some(selected.unwrap_or(0).min(count - 1));
        }
    }

    /// The picker's element lost input focus entirely.
    pub fn lost_focus(&mut self) {
        self.focused = None;
        self.keyboard_focus = false;
    }

    /// Re-clamp held indices after the option set changed size: indices past
    /// the end move to `count - 1`, and an empty set clears them.
    pub fn clamp_to(&mut self, count: usize) {
        if count == 0 {
            self.hovered = None;
            self.focused = None;
        } else {
            self.hovered = self.hovered.map(|i| i.min(count - 1));
            self.focused = self.focused.map(|i| i.min(count - 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_from_no_focus_goes_to_first() {
        let mut state = InteractionState::new();
        state.apply(Command::Next, 5);
        assert_eq!(state.focused(), Some(0));
    }

    #[test]
    fn test_prev_from_no_focus_goes_to_last() {
        let mut state = InteractionState::new();
        state.apply(Command::Prev, 5);
        assert_eq!(state.focused(), Some(4));
    }

    #[test]
    fn test_next_wraps_around() {
        let mut state = InteractionState::new();
        for expected in [0, 1, 2, 0, 1] {
            state.apply(Command::Next, 3);
            assert_eq!(state.focused(), Some(expected));
        }
    }

    #[test]
    fn test_prev_wraps_around() {
        let mut state = InteractionState::new();
        state.apply(Command::Next, 4); // focus 0
        state.apply(Command::Prev, 4);
        assert_eq!(state.focused(), Some(3));
        state.apply(Command::Prev, 4);
        assert_eq!(state.focused(), Some(2));
    }

    #[test]
    fn test_activate_reports_focused_index_without_moving_focus() {
        let mut state = InteractionState::new();
        state.apply(Command::Next, 3);
        state.apply(Command::Next, 3);
        assert_eq!(state.apply(Command::Activate, 3), Some(1));
        assert_eq!(state.focused(), Some(1));
    }

    #[test]
    fn test_activate_without_focus_is_a_no_op() {
        let mut state = InteractionState::new();
        assert_eq!(state.apply(Command::Activate, 3), None);
        assert_eq!(state.focused(), None);
    }

    #[test]
    fn test_cancel_clears_focus() {
        let mut state = InteractionState::new();
        state.apply(Command::Next, 3);
        state.apply(Command::Cancel, 3);
        assert_eq!(state.focused(), None);
        assert!(!state.keyboard_focus());
    }

    #[test]
    fn test_commands_against_empty_list_are_no_ops() {
        let mut state = InteractionState::new();
        assert_eq!(state.apply(Command::Next, 0), None);
        assert_eq!(state.focused(), None);
        assert!(!state.keyboard_focus());
    }

    #[test]
    fn test_keyboard_focus_gain_lands_on_selection() {
        let mut state = InteractionState::new();
        state.gained_focus(FocusOrigin::Keyboard, Some(2), 5);
        assert_eq!(state.focused(), Some(2));
        assert!(state.keyboard_focus());
    }

    #[test]
    fn test_keyboard_focus_gain_without_selection_lands_on_first() {
        let mut state = InteractionState::new();
        state.gained_focus(FocusOrigin::Keyboard, None, 5);
        assert_eq!(state.focused(), Some(0));
    }

    #[test]
    fn test_pointer_focus_gain_does_not_focus_a_wedge() {
        let mut state = InteractionState::new();
        state.gained_focus(FocusOrigin::Pointer, Some(2), 5);
        assert_eq!(state.focused(), None);
        assert!(!state.keyboard_focus());
    }

    #[test]
    fn test_lost_focus_resets_keyboard_state() {
        let mut state = InteractionState::new();
        state.gained_focus(FocusOrigin::Keyboard, None, 3);
        state.lost_focus();
        assert_eq!(state.focused(), None);
        assert!(!state.keyboard_focus());
    }

    #[test]
    fn test_hover_is_independent_of_focus() {
        let mut state = InteractionState::new();
        state.pointer_enter(1);
        state.apply(Command::Next, 3);
        assert_eq!(state.hovered(), Some(1));
        assert_eq!(state.focused(), Some(0));
        state.pointer_leave();
        assert_eq!(state.hovered(), None);
        assert_eq!(state.focused(), Some(0));
    }

    #[test]
    fn test_clamp_after_option_set_shrinks() {
        let mut state = InteractionState::new();
        state.pointer_enter(7);
        state.gained_focus(FocusOrigin::Keyboard, Some(6), 8);
        state.clamp_to(4);
        assert_eq!(state.hovered(), Some(3));
        assert_eq!(state.focused(), Some(3));

        state.clamp_to(0);
        assert_eq!(state.hovered(), None);
        assert_eq!(state.focused(), None);
    }
}
