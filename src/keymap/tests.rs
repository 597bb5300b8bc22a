//! Integration tests for the keymap system

use super::*;

#[test]
fn test_embedded_yaml_parses() {
    let bindings = parse_keymap_yaml(default_keymap_yaml())
        .expect("Embedded keymap.yaml should parse successfully");

    assert!(bindings.iter().any(|b| b.command == Command::SaveDraft));
    assert!(bindings.iter().any(|b| b.command == Command::ExecuteSql));
}

#[test]
fn test_embedded_yaml_matches_hardcoded_defaults() {
    let embedded = parse_keymap_yaml(default_keymap_yaml()).unwrap();
    assert_eq!(embedded, default_bindings());
}

#[test]
fn test_default_keymap_lookup() {
    let keymap = Keymap::with_bindings(default_bindings());

    assert_eq!(
        keymap.lookup(&Keystroke::char_with_mods('s', Modifiers::CTRL)),
        Some(Command::SaveDraft)
    );
    assert_eq!(
        keymap.lookup(&Keystroke::new(KeyCode::Enter, Modifiers::CTRL)),
        Some(Command::ExecuteSql)
    );
    assert_eq!(
        keymap.lookup(&Keystroke::new(KeyCode::Enter, Modifiers::META)),
        Some(Command::ExecuteSql)
    );
    assert_eq!(keymap.lookup(&Keystroke::key(KeyCode::Enter)), None);
}

#[test]
fn test_merge_replaces_same_keystroke() {
    let ctrl_s = Keystroke::char_with_mods('s', Modifiers::CTRL);
    let merged = merge_bindings(
        default_bindings(),
        vec![Keybinding::new(ctrl_s, Command::ExecuteSql)],
    );
    let keymap = Keymap::with_bindings(merged);

    assert_eq!(keymap.lookup(&ctrl_s), Some(Command::ExecuteSql));
}

#[test]
fn test_merge_unbound_removes_default() {
    let ctrl_s = Keystroke::char_with_mods('s', Modifiers::CTRL);
    let merged = merge_bindings(
        default_bindings(),
        vec![Keybinding::new(ctrl_s, Command::Unbound)],
    );
    let keymap = Keymap::with_bindings(merged);

    assert_eq!(keymap.lookup(&ctrl_s), None);
    // Meta+S still saves
    assert_eq!(
        keymap.keystrokes_for(Command::SaveDraft),
        vec![Keystroke::char_with_mods('s', Modifiers::META)]
    );
}

#[test]
fn test_merge_adds_new_binding() {
    let f5 = Keystroke::key(KeyCode::F(5));
    let merged = merge_bindings(
        default_bindings(),
        vec![Keybinding::new(f5, Command::ExecuteSql)],
    );
    assert_eq!(merged.len(), default_bindings().len() + 1);
}

#[test]
fn test_user_keymap_file_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keymap.yaml");
    std::fs::write(
        &path,
        "bindings:\n  - key: f9\n    command: ExecuteSql\n  - key: ctrl+enter\n    command: Unbound\n",
    )
    .unwrap();

    let keymap = Keymap::with_bindings(load_keymap_with_overrides(Some(&path)));
    assert_eq!(
        keymap.lookup(&Keystroke::key(KeyCode::F(9))),
        Some(Command::ExecuteSql)
    );
    assert_eq!(
        keymap.lookup(&Keystroke::new(KeyCode::Enter, Modifiers::CTRL)),
        None
    );
}

#[test]
fn test_broken_user_keymap_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keymap.yaml");
    std::fs::write(&path, "bindings:\n  - key: ctrl+s\n    command: Nope\n").unwrap();

    assert_eq!(load_keymap_with_overrides(Some(&path)), default_bindings());
}

#[test]
fn test_missing_user_keymap_is_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");
    assert_eq!(load_keymap_with_overrides(Some(&path)), default_bindings());
}
