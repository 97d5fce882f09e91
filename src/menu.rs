/// Open/closed state of the mobile navigation menu.
///
/// Only the menu button changes it; following a link leaves it as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggle(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Value for the button's `aria-expanded` attribute
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert_eq!(MenuState::default().aria_expanded(), "false");
    }

    #[test]
    fn test_toggle_parity() {
        let mut state = MenuState::default();
        for taps in 1..=9 {
            state = state.toggle();
            assert_eq!(state.is_open(), taps % 2 == 1, "after {} taps", taps);
        }
    }

    #[test]
    fn test_aria_follows_state() {
        assert_eq!(MenuState::Open.aria_expanded(), "true");
        assert_eq!(MenuState::Open.toggle().aria_expanded(), "false");
    }
}
