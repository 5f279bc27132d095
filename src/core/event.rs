/// Host-agnostic key code; the host translates its native key events into this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Tab,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    /// Cmd on macOS, Win elsewhere.
    pub meta: bool,
}

impl KeyModifiers {
    pub const NONE: KeyModifiers = KeyModifiers {
        ctrl: false,
        shift: false,
        alt: false,
        meta: false,
    };

    pub const CTRL: KeyModifiers = KeyModifiers {
        ctrl: true,
        ..KeyModifiers::NONE
    };

    pub fn is_empty(&self) -> bool {
        *self == KeyModifiers::NONE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Key {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(ch: char) -> Self {
        Self::new(KeyCode::Char(ch), KeyModifiers::CTRL)
    }

    /// Cmd on macOS and Ctrl elsewhere resolve to the same binding.
    pub fn normalized(self) -> Self {
        let mut key = self;
        if key.modifiers.meta && !key.modifiers.ctrl {
            key.modifiers.meta = false;
            key.modifiers.ctrl = true;
        }
        if let KeyCode::Char(ch) = key.code {
            if ch.is_ascii_uppercase() {
                key.code = KeyCode::Char(ch.to_ascii_lowercase());
                key.modifiers.shift = true;
            }
        }
        key
    }
}
