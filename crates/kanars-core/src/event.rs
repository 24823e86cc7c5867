// Key event input interface
// The narrow contract the matrix/HID layer feeds the engine through.

use std::time::Instant;

use crate::action::Action;
use crate::symbol::KeySym;

/// One key event as delivered by the matrix scan layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub sym: KeySym,
    pub action: Action,
    pub at: Instant,
}

impl KeyEvent {
    pub fn new(sym: KeySym, action: Action, at: Instant) -> Self {
        Self { sym, action, at }
    }

    pub fn press(sym: KeySym, at: Instant) -> Self {
        Self::new(sym, Action::Press, at)
    }

    pub fn release(sym: KeySym, at: Instant) -> Self {
        Self::new(sym, Action::Release, at)
    }
}
