use super::*;
use crate::core::event::KeyModifiers;

fn rule(key: &str, command: &str, context: Option<&str>) -> KeybindingRule {
    KeybindingRule {
        key: key.to_string(),
        command: command.to_string(),
        context: context.map(str::to_string),
    }
}

#[test]
fn default_global_bindings() {
    let service = KeybindingService::new();
    let g = KeybindingContext::Global;
    assert_eq!(service.resolve(g, &Key::ctrl('p')), Some(&Command::QuickOpen));
    assert_eq!(service.resolve(g, &Key::ctrl('s')), Some(&Command::Save));
    assert_eq!(
        service.resolve(g, &Key::ctrl('w')),
        Some(&Command::CloseActiveTab)
    );
    assert_eq!(
        service.resolve(g, &Key::simple(KeyCode::Esc)),
        Some(&Command::Escape)
    );
    assert_eq!(service.resolve(g, &Key::ctrl('q')), None);
}

#[test]
fn meta_resolves_like_ctrl() {
    let service = KeybindingService::new();
    let cmd_s = Key::new(
        KeyCode::Char('s'),
        KeyModifiers {
            meta: true,
            ..KeyModifiers::NONE
        },
    );
    assert_eq!(
        service.resolve(KeybindingContext::Global, &cmd_s),
        Some(&Command::Save)
    );
}

#[test]
fn quick_open_context_overrides_then_falls_through() {
    let service = KeybindingService::new();
    let q = KeybindingContext::QuickOpen;
    assert_eq!(service.resolve(q, &Key::ctrl('p')), Some(&Command::Escape));
    assert_eq!(service.resolve(q, &Key::ctrl('s')), Some(&Command::Save));
}

#[test]
fn rules_bind_and_unbind() {
    let mut service = KeybindingService::new();
    service.apply_rules(&[
        rule("ctrl+shift+p", "pack", None),
        rule("ctrl+w", "", None),
        rule("ctrl+r", "reloadTree", Some("quickOpen")),
        rule("ctrl+nonsense", "save", None),
    ]);

    let ctrl_shift_p = Key::new(
        KeyCode::Char('p'),
        KeyModifiers {
            ctrl: true,
            shift: true,
            ..KeyModifiers::NONE
        },
    );
    assert_eq!(
        service.resolve(KeybindingContext::Global, &ctrl_shift_p),
        Some(&Command::Pack)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::ctrl('w')),
        None
    );
    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::ctrl('r')),
        None
    );
    assert_eq!(
        service.resolve(KeybindingContext::QuickOpen, &Key::ctrl('r')),
        Some(&Command::ReloadTree)
    );
}

#[test]
fn unknown_command_names_bind_as_custom() {
    let mut service = KeybindingService::new();
    service.apply_rules(&[rule("f5", "formatDocument", None)]);
    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::simple(KeyCode::F(5))),
        Some(&Command::Custom("formatDocument".to_string()))
    );
}

#[test]
fn context_names_parse() {
    assert_eq!(
        KeybindingContext::parse("Global"),
        Some(KeybindingContext::Global)
    );
    assert_eq!(
        KeybindingContext::parse("quick_open"),
        Some(KeybindingContext::QuickOpen)
    );
    assert_eq!(KeybindingContext::parse("editor"), None);
}
