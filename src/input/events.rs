use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key press as seen by dispatch handlers.
///
/// Handlers that claim a key call [`KeyInput::prevent_default`] so the host
/// skips its own fallback behavior for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: KeyEvent,
    default_prevented: bool,
}

impl KeyInput {
    pub fn new(key: KeyEvent) -> Self {
        Self {
            key,
            default_prevented: false,
        }
    }

    pub fn code(code: KeyCode) -> Self {
        Self::new(KeyEvent::new(code, KeyModifiers::NONE))
    }

    pub fn char(ch: char) -> Self {
        Self::code(KeyCode::Char(ch))
    }

    pub fn ctrl(ch: char) -> Self {
        Self::new(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
    }

    pub fn key_code(&self) -> KeyCode {
        self.key.code
    }

    pub fn modifiers(&self) -> KeyModifiers {
        self.key.modifiers
    }

    pub fn has_control(&self) -> bool {
        self.key.modifiers.contains(KeyModifiers::CONTROL)
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl From<KeyEvent> for KeyInput {
    fn from(key: KeyEvent) -> Self {
        Self::new(key)
    }
}
