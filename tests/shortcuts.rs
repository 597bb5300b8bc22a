//! Keyboard shortcut lifecycle tests
//!
//! Mounting binds save/execute, every teardown path unbinds them, and
//! triggers that outlive their mount are ignored.

mod common;

use std::panic::{catch_unwind, AssertUnwindSafe};

use common::{ctrl_enter, ctrl_s, default_keymap, meta_enter};
use sqldraft::keymap::{Command, KeyCode, Keybinding, Keymap, Keystroke, Modifiers};
use sqldraft::shortcuts::ShortcutError;
use sqldraft::{DraftStoreAdapter, EditorProps, EventLog, InputRegistry, MountedEditor};

fn mount(
    registry: &InputRegistry,
    store: &DraftStoreAdapter,
    initial: &str,
    key: Option<&str>,
) -> (MountedEditor, EventLog) {
    let props = EditorProps::new(initial).with_draft_key(key.map(str::to_string));
    let mut mounted =
        MountedEditor::mount(props, store.clone(), registry, &default_keymap()).unwrap();
    let log = EventLog::new();
    log.attach(mounted.controller_mut().events_mut());
    (mounted, log)
}

// ========================================================================
// Dispatch
// ========================================================================

#[test]
fn test_ctrl_s_saves_draft() {
    let registry = InputRegistry::new();
    let store = DraftStoreAdapter::in_memory();
    let (mut editor, log) = mount(&registry, &store, "SELECT 1", Some("k"));

    assert_eq!(editor.press(&registry, &ctrl_s()).unwrap(), 1);

    assert_eq!(store.get("k").unwrap().as_deref(), Some("SELECT 1"));
    assert_eq!(log.emitted("save"), vec!["SELECT 1"]);
}

#[test]
fn test_ctrl_enter_executes_sql() {
    let registry = InputRegistry::new();
    let store = DraftStoreAdapter::in_memory();
    let (mut editor, log) = mount(&registry, &store, "SELECT * FROM users", None);

    editor.press(&registry, &ctrl_enter()).unwrap();

    assert_eq!(log.emitted("execute"), vec!["SELECT * FROM users"]);
}

#[test]
fn test_meta_and_numpad_variants_execute() {
    let registry = InputRegistry::new();
    let store = DraftStoreAdapter::in_memory();
    let (mut editor, log) = mount(&registry, &store, "SELECT 1", None);

    editor.press(&registry, &meta_enter()).unwrap();
    editor
        .press(
            &registry,
            &Keystroke::new(KeyCode::NumpadEnter, Modifiers::CTRL),
        )
        .unwrap();

    assert_eq!(log.emitted("execute").len(), 2);
}

#[test]
fn test_ctrl_enter_on_blank_buffer_does_nothing() {
    let registry = InputRegistry::new();
    let store = DraftStoreAdapter::in_memory();
    let (mut editor, log) = mount(&registry, &store, "  \n", None);

    assert_eq!(editor.press(&registry, &ctrl_enter()).unwrap(), 1);
    assert!(log.events().is_empty());
}

#[test]
fn test_unbound_keystroke_is_not_handled() {
    let registry = InputRegistry::new();
    let store = DraftStoreAdapter::in_memory();
    let (mut editor, log) = mount(&registry, &store, "SELECT 1", Some("k"));

    let plain_s = Keystroke::key(KeyCode::Char('s'));
    assert_eq!(editor.press(&registry, &plain_s).unwrap(), 0);
    assert!(log.events().is_empty());
}

// ========================================================================
// Lifecycle
// ========================================================================

#[test]
fn test_mount_registers_two_listeners() {
    let registry = InputRegistry::new();
    let store = DraftStoreAdapter::in_memory();
    let (editor, _) = mount(&registry, &store, "", None);

    assert_eq!(registry.listener_count(), 2);
    assert!(editor.shortcuts().is_active());
}

#[test]
fn test_repeated_mount_unmount_leaves_no_listeners() {
    let registry = InputRegistry::new();
    let store = DraftStoreAdapter::in_memory();

    for i in 0..5 {
        let (editor, _) = mount(&registry, &store, "SELECT 1", Some("k"));
        assert_eq!(registry.listener_count(), 2);
        if i % 2 == 0 {
            editor.unmount();
        } else {
            drop(editor);
        }
        assert_eq!(registry.listener_count(), 0);
    }
}

#[test]
fn test_panic_while_mounted_releases_listeners() {
    let registry = InputRegistry::new();
    let store = DraftStoreAdapter::in_memory();

    let result = catch_unwind(AssertUnwindSafe(|| {
        let (_editor, _) = mount(&registry, &store, "", None);
        assert_eq!(registry.listener_count(), 2);
        panic!("host teardown failed");
    }));

    assert!(result.is_err());
    assert_eq!(registry.listener_count(), 0);
}

#[test]
fn test_unmount_keeps_controller_state() {
    let registry = InputRegistry::new();
    let store = DraftStoreAdapter::in_memory();
    let (mut editor, _) = mount(&registry, &store, "", Some("k"));
    editor.controller_mut().set_code("SELECT 7");

    let controller = editor.unmount();

    assert_eq!(controller.code(), "SELECT 7");
    assert_eq!(registry.listener_count(), 0);
}

#[test]
fn test_trigger_after_unmount_is_ignored() {
    let registry = InputRegistry::new();
    let store = DraftStoreAdapter::in_memory();
    let (first, first_log) = mount(&registry, &store, "SELECT 1", Some("k"));

    let in_flight = registry.dispatch(&ctrl_s());
    assert_eq!(in_flight.len(), 1);
    let _controller = first.unmount();
    assert!(!in_flight[0].is_live());

    let (mut second, second_log) = mount(&registry, &store, "", Some("k"));
    assert!(!second.handle_trigger(&in_flight[0]).unwrap());

    assert!(first_log.events().is_empty());
    assert!(second_log.events().is_empty());
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn test_foreign_trigger_is_ignored() {
    let registry = InputRegistry::new();
    let store = DraftStoreAdapter::in_memory();
    let (mut a, a_log) = mount(&registry, &store, "SELECT 'a'", Some("a"));
    let (mut b, b_log) = mount(&registry, &store, "SELECT 'b'", Some("b"));

    let triggers = registry.dispatch(&ctrl_s());
    assert_eq!(triggers.len(), 2);

    let handled_by_a = triggers
        .iter()
        .filter(|t| a.handle_trigger(t).unwrap())
        .count();
    assert_eq!(handled_by_a, 1);
    assert_eq!(a_log.emitted("save"), vec!["SELECT 'a'"]);
    assert!(b_log.events().is_empty());

    b.press(&registry, &ctrl_s()).unwrap();
    assert_eq!(store.get("b").unwrap().as_deref(), Some("SELECT 'b'"));
}

#[test]
fn test_keymap_without_execute_fails_to_mount() {
    let registry = InputRegistry::new();
    let keymap = Keymap::with_bindings(vec![Keybinding::new(ctrl_s(), Command::SaveDraft)]);

    let err = MountedEditor::mount(
        EditorProps::default(),
        DraftStoreAdapter::in_memory(),
        &registry,
        &keymap,
    )
    .unwrap_err();

    assert_eq!(err, ShortcutError::Unbound(Command::ExecuteSql));
    assert_eq!(registry.listener_count(), 0);
}

#[cfg(not(target_os = "macos"))]
#[test]
fn test_shortcut_hints() {
    let registry = InputRegistry::new();
    let store = DraftStoreAdapter::in_memory();
    let (editor, _) = mount(&registry, &store, "", None);

    assert_eq!(
        editor.shortcut_hints(),
        vec!["Ctrl+S Save draft", "Ctrl+Enter Execute SQL"]
    );
}
