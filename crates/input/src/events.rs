//! Pending button presses and the tie-break between them.

use bitflags::bitflags;

use crate::types::Button;

bitflags! {
    /// Buttons pressed since the last consumed event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ButtonSet: u8 {
        const LEFT   = 1;
        const RIGHT  = 1 << 1;
        const ROTATE = 1 << 2;
    }
}

impl ButtonSet {
    /// Highest-priority pending press: Left, then Right, then Rotate.
    pub fn priority(self) -> Option<Button> {
        Button::ALL
            .into_iter()
            .find(|&button| self.contains(ButtonSet::from(button)))
    }
}

impl From<Button> for ButtonSet {
    fn from(button: Button) -> Self {
        match button {
            Button::Left => ButtonSet::LEFT,
            Button::Right => ButtonSet::RIGHT,
            Button::Rotate => ButtonSet::ROTATE,
        }
    }
}

impl FromIterator<Button> for ButtonSet {
    fn from_iter<T: IntoIterator<Item = Button>>(iter: T) -> Self {
        iter.into_iter()
            .fold(ButtonSet::empty(), |set, button| set | ButtonSet::from(button))
    }
}
