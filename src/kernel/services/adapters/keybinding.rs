//! Key chords → commands, with a quick-open overlay context.

use crate::core::event::{Key, KeyCode};
use crate::core::Command;
use crate::kernel::services::ports::KeybindingRule;
use rustc_hash::FxHashMap;

use super::settings::parse_keybinding;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    Global,
    QuickOpen,
}

impl KeybindingContext {
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        match v.as_str() {
            "global" => Some(Self::Global),
            "quickopen" | "quick_open" | "palette" => Some(Self::QuickOpen),
            _ => None,
        }
    }
}

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    quick_open: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            global: default_global_keybindings(),
            quick_open: default_quick_open_keybindings(),
        }
    }

    /// Resolves `key` after Cmd/Ctrl and letter-case normalization. The quick-open
    /// context falls through to global bindings.
    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<&Command> {
        let key = key.normalized();
        match context {
            KeybindingContext::Global => self.global.get(&key),
            KeybindingContext::QuickOpen => self
                .quick_open
                .get(&key)
                .or_else(|| self.global.get(&key)),
        }
    }

    pub fn bindings(&self, context: KeybindingContext) -> &FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &self.global,
            KeybindingContext::QuickOpen => &self.quick_open,
        }
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, command: Command) {
        self.map_mut(context).insert(key.normalized(), command);
    }

    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Command> {
        self.map_mut(context).remove(&key.normalized())
    }

    /// Applies user overrides in order. Rules whose key does not parse are skipped.
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) {
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "Ignoring keybinding with unparsable key");
                continue;
            };
            let context = rule
                .context
                .as_deref()
                .and_then(KeybindingContext::parse)
                .unwrap_or(KeybindingContext::Global);
            if rule.command.trim().is_empty() {
                let _ = self.unbind(context, &key);
            } else {
                self.bind(context, key, Command::from_name(rule.command.trim()));
            }
        }
    }

    fn map_mut(&mut self, context: KeybindingContext) -> &mut FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &mut self.global,
            KeybindingContext::QuickOpen => &mut self.quick_open,
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(8);

    bindings.insert(Key::simple(KeyCode::Esc), Command::Escape);
    bindings.insert(Key::ctrl('p'), Command::QuickOpen);
    bindings.insert(Key::ctrl('s'), Command::Save);
    bindings.insert(Key::ctrl('w'), Command::CloseActiveTab);

    bindings
}

fn default_quick_open_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.insert(Key::ctrl('p'), Command::Escape);
    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
