// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end tests that drive [`Listbox`] only through [`InputEvent`]s, the way a
//! widget would.

use std::time::{Duration, Instant};

use smallvec::smallvec;

use crate::{EventPropagation, InputEvent, Item, ItemKey, ItemPatch, ItemSource, Listbox,
            ListboxConfig, ListboxNotification, ModifierKeysMask, NotificationRecorder,
            RegisterPosition, SelectedKeys, SelectionMode, SpecialKey, assert_eq2,
            key_press};

fn mount_all(listbox: &mut Listbox, labels: &[&str]) {
    for label in labels {
        listbox
            .mount_item(Item::new(*label, *label), RegisterPosition::End)
            .unwrap();
    }
}

fn new_listbox(config: ListboxConfig, labels: &[&str]) -> (Listbox, NotificationRecorder) {
    let recorder = NotificationRecorder::default();
    let mut listbox = Listbox::new(config);
    mount_all(&mut listbox, labels);
    listbox.add_observer(recorder.clone());
    (listbox, recorder)
}

fn active(listbox: &Listbox) -> Option<&str> { listbox.active_key().map(ItemKey::as_str) }

fn selected(listbox: &Listbox) -> Vec<&str> {
    listbox.selected_keys().iter().map(ItemKey::as_str).collect()
}

fn press_special(listbox: &mut Listbox, special_key: SpecialKey) -> EventPropagation {
    listbox.handle_input_event(key_press!(@special special_key).into())
}

fn type_at(listbox: &mut Listbox, typed_char: char, now: Instant) -> EventPropagation {
    listbox.handle_input_event_at(key_press!(@char typed_char).into(), now)
}

fn click(listbox: &mut Listbox, key: &str) -> EventPropagation {
    listbox.handle_input_event(InputEvent::Activate { key: key.into() })
}

#[test]
fn test_arrow_down_clamps_at_the_end() {
    let (mut listbox, _) = new_listbox(ListboxConfig::default(), &["a", "b", "c"]);

    let mut seen = vec![];
    for _ in 0..4 {
        press_special(&mut listbox, SpecialKey::Down);
        seen.push(active(&listbox).map(str::to_string));
    }

    assert_eq2!(
        seen,
        vec![
            Some("a".to_string()),
            Some("b".to_string()),
            Some("c".to_string()),
            Some("c".to_string())
        ]
    );
}

#[test]
fn test_propagation_of_navigation() {
    let (mut listbox, recorder) = new_listbox(ListboxConfig::default(), &["a", "b"]);

    assert_eq2!(
        press_special(&mut listbox, SpecialKey::End),
        EventPropagation::ConsumedRender
    );
    // Already at the last item.
    assert_eq2!(
        press_special(&mut listbox, SpecialKey::Down),
        EventPropagation::Consumed
    );
    assert_eq2!(
        press_special(&mut listbox, SpecialKey::Home),
        EventPropagation::ConsumedRender
    );
    assert_eq2!(
        press_special(&mut listbox, SpecialKey::Tab),
        EventPropagation::Propagate
    );

    assert_eq2!(
        recorder.take(),
        vec![
            ListboxNotification::ActiveChanged(Some("b".into())),
            ListboxNotification::ActiveChanged(Some("a".into())),
        ]
    );
}

#[test]
fn test_page_keys_jump_to_ends() {
    let (mut listbox, _) =
        new_listbox(ListboxConfig::default(), &["a", "b", "c", "d", "e"]);
    press_special(&mut listbox, SpecialKey::PageDown);
    assert_eq2!(active(&listbox), Some("e"));
    press_special(&mut listbox, SpecialKey::Up);
    press_special(&mut listbox, SpecialKey::PageUp);
    assert_eq2!(active(&listbox), Some("a"));
}

#[test]
fn test_type_ahead_restarts_buffer() {
    let (mut listbox, _) = new_listbox(
        ListboxConfig::default(),
        &["cheetah", "crocodile", "elephant"],
    );
    let now = Instant::now();

    type_at(&mut listbox, 'e', now);
    assert_eq2!(active(&listbox), Some("elephant"));

    type_at(&mut listbox, 'c', now);
    assert_eq2!(active(&listbox), Some("cheetah"));

    type_at(&mut listbox, 'c', now);
    assert_eq2!(active(&listbox), Some("cheetah"));
    type_at(&mut listbox, 'r', now);
    assert_eq2!(active(&listbox), Some("crocodile"));
}

#[test]
fn test_type_ahead_miss_keeps_active_item() {
    let (mut listbox, recorder) =
        new_listbox(ListboxConfig::default(), &["cheetah", "elephant"]);
    let now = Instant::now();

    type_at(&mut listbox, 'e', now);
    recorder.take();

    assert_eq2!(type_at(&mut listbox, 'z', now), EventPropagation::Consumed);
    assert_eq2!(active(&listbox), Some("elephant"));
    assert_eq2!(listbox.search_buffer(), "");
    assert!(recorder.take().is_empty());
}

#[test]
fn test_search_timeout_event_clears_buffer_not_active() {
    let (mut listbox, _) = new_listbox(ListboxConfig::default(), &["cheetah", "crocodile"]);
    let now = Instant::now();

    type_at(&mut listbox, 'c', now);
    type_at(&mut listbox, 'r', now);
    let (token, timeout) = listbox.pending_search_timeout().unwrap();
    assert_eq2!(timeout, Duration::from_millis(1_000));

    listbox.handle_input_event_at(InputEvent::SearchTimeout(token), now);
    assert_eq2!(listbox.search_buffer(), "");
    assert_eq2!(active(&listbox), Some("crocodile"));
    assert_eq2!(listbox.pending_search_timeout(), None);
}

#[test]
fn test_space_commits_unless_searching() {
    let (mut listbox, _) = new_listbox(
        ListboxConfig::default(),
        &["new york", "newark", "paris"],
    );
    let now = Instant::now();

    // Space is part of the search while typing.
    type_at(&mut listbox, 'n', now);
    type_at(&mut listbox, 'e', now);
    type_at(&mut listbox, 'w', now);
    type_at(&mut listbox, ' ', now);
    assert_eq2!(listbox.search_buffer(), "new ");
    assert_eq2!(active(&listbox), Some("new york"));
    assert!(listbox.selected_keys().is_empty());

    // After a pause, space commits.
    type_at(&mut listbox, ' ', now + Duration::from_secs(5));
    assert_eq2!(selected(&listbox), vec!["new york"]);
}

#[test]
fn test_shortcuts_propagate() {
    let (mut listbox, _) = new_listbox(ListboxConfig::default(), &["apple"]);
    let it = listbox
        .handle_input_event(key_press!(@char ModifierKeysMask::new().with_ctrl(), 'a').into());
    assert_eq2!(it, EventPropagation::Propagate);
    assert_eq2!(active(&listbox), None);
}

#[test]
fn test_enter_commits_single_and_requests_close() {
    let (mut listbox, recorder) = new_listbox(
        ListboxConfig::default().with_selection_mode(SelectionMode::Single),
        &["a", "b"],
    );

    press_special(&mut listbox, SpecialKey::Down);
    recorder.take();
    assert_eq2!(
        press_special(&mut listbox, SpecialKey::Enter),
        EventPropagation::ConsumedRender
    );

    let expected: SelectedKeys = smallvec!["a".into()];
    assert_eq2!(
        recorder.take(),
        vec![
            ListboxNotification::SelectionChanged(expected),
            ListboxNotification::RequestClose,
        ]
    );
}

#[test]
fn test_enter_without_active_item_does_nothing() {
    let (mut listbox, recorder) = new_listbox(ListboxConfig::default(), &["a"]);
    assert_eq2!(
        press_special(&mut listbox, SpecialKey::Enter),
        EventPropagation::Consumed
    );
    assert!(recorder.take().is_empty());
}

#[test]
fn test_multiple_mode_toggle_keeps_overlay_open() {
    let (listbox, recorder) = new_listbox(
        ListboxConfig::default()
            .with_selection_mode(SelectionMode::Multiple)
            .with_allow_empty(false),
        &["cheetah", "crocodile", "elephant"],
    );
    let mut listbox = listbox.with_initial_selection(["elephant", "crocodile"]);

    click(&mut listbox, "crocodile");
    assert_eq2!(selected(&listbox), vec!["elephant"]);

    // Guard: can't empty the selection.
    click(&mut listbox, "elephant");
    assert_eq2!(selected(&listbox), vec!["elephant"]);

    listbox.set_allow_empty(true);
    click(&mut listbox, "elephant");
    assert!(listbox.selected_keys().is_empty());

    assert_eq2!(
        recorder.count_of(|it| matches!(it, ListboxNotification::SelectionChanged(_))),
        2
    );
    assert_eq2!(
        recorder.count_of(|it| matches!(it, ListboxNotification::RequestClose)),
        0
    );
}

#[test]
fn test_mode_none_end_to_end() {
    let (mut listbox, recorder) = new_listbox(
        ListboxConfig::default().with_selection_mode(SelectionMode::None),
        &["item-1", "item-2", "item-3", "item-4", "item-5"],
    );
    listbox
        .update_item(&"item-3".into(), &ItemPatch::disabled(true))
        .unwrap();
    listbox
        .update_item(&"item-4".into(), &ItemPatch::disabled(true))
        .unwrap();

    click(&mut listbox, "item-2");
    assert!(listbox.selected_keys().is_empty());
    click(&mut listbox, "item-1");
    assert!(listbox.selected_keys().is_empty());
    click(&mut listbox, "item-3");
    assert!(listbox.selected_keys().is_empty());

    let expected: Vec<ItemKey> = vec!["item-2".into(), "item-1".into()];
    assert_eq2!(recorder.actions(), expected);
    assert_eq2!(
        recorder.count_of(|it| matches!(it, ListboxNotification::SelectionChanged(_))),
        0
    );
    // The disabled item never became active either.
    assert_eq2!(active(&listbox), Some("item-1"));
}

#[test]
fn test_activate_sets_active_then_commits() {
    let (mut listbox, recorder) = new_listbox(
        ListboxConfig::default().with_selection_mode(SelectionMode::None),
        &["a", "b"],
    );
    click(&mut listbox, "b");
    assert_eq2!(
        recorder.take(),
        vec![
            ListboxNotification::ActiveChanged(Some("b".into())),
            ListboxNotification::Action("b".into()),
            ListboxNotification::RequestClose,
        ]
    );
}

#[test]
fn test_disabled_items_are_skipped_by_keyboard() {
    let (mut listbox, _) = new_listbox(ListboxConfig::default(), &["a", "b", "c"]);
    listbox.update_item(&"b".into(), &ItemPatch::disabled(true)).unwrap();

    press_special(&mut listbox, SpecialKey::Down);
    press_special(&mut listbox, SpecialKey::Down);
    assert_eq2!(active(&listbox), Some("c"));

    type_at(&mut listbox, 'b', Instant::now());
    assert_eq2!(active(&listbox), Some("c"));
}

#[test]
fn test_hover_is_opt_in() {
    let (mut listbox, _) = new_listbox(ListboxConfig::default(), &["a", "b"]);
    assert_eq2!(
        listbox.handle_input_event(InputEvent::Hover { key: "b".into() }),
        EventPropagation::Propagate
    );
    assert_eq2!(active(&listbox), None);

    let (mut listbox, _) = new_listbox(
        ListboxConfig::default().with_activate_on_hover(true),
        &["a", "b"],
    );
    assert_eq2!(
        listbox.handle_input_event(InputEvent::Hover { key: "b".into() }),
        EventPropagation::ConsumedRender
    );
    assert_eq2!(active(&listbox), Some("b"));
    assert!(listbox.selected_keys().is_empty());
}

#[test]
fn test_unmounting_active_item_clears_it() {
    let (mut listbox, recorder) = new_listbox(ListboxConfig::default(), &["a", "b", "c"]);
    press_special(&mut listbox, SpecialKey::Down);
    press_special(&mut listbox, SpecialKey::Down);
    recorder.take();

    assert!(listbox.unmount_item(&"b".into()).is_some());
    assert_eq2!(active(&listbox), None);
    assert_eq2!(
        recorder.take(),
        vec![ListboxNotification::ActiveChanged(None)]
    );

    // Unmounting something else doesn't notify.
    press_special(&mut listbox, SpecialKey::Down);
    recorder.take();
    listbox.unmount_item(&"c".into());
    assert_eq2!(active(&listbox), Some("a"));
    assert!(recorder.take().is_empty());
}

#[test]
fn test_disabling_active_item_clears_it() {
    let (mut listbox, _) = new_listbox(ListboxConfig::default(), &["a", "b"]);
    press_special(&mut listbox, SpecialKey::Down);
    listbox.update_item(&"a".into(), &ItemPatch::disabled(true)).unwrap();
    assert_eq2!(active(&listbox), None);

    // Navigation starts over from the first enabled item.
    press_special(&mut listbox, SpecialKey::Down);
    assert_eq2!(active(&listbox), Some("b"));
}

#[test]
fn test_duplicate_mount_is_rejected() {
    let (mut listbox, _) = new_listbox(ListboxConfig::default(), &["a"]);
    let result = listbox.mount_item(Item::new("a", "again"), RegisterPosition::End);
    assert!(result.is_err());
    assert_eq2!(listbox.registry().len(), 1);
}

#[test]
fn test_commit_unknown_key_is_ignored() {
    let (mut listbox, recorder) = new_listbox(ListboxConfig::default(), &["a"]);
    assert_eq2!(click(&mut listbox, "ghost"), EventPropagation::Consumed);
    assert!(recorder.take().is_empty());
}

#[test]
fn test_selection_survives_unmount() {
    let (mut listbox, _) = new_listbox(ListboxConfig::default(), &["a", "b"]);
    click(&mut listbox, "b");
    listbox.unmount_item(&"b".into());
    assert_eq2!(selected(&listbox), vec!["b"]);
    assert_eq2!(listbox.render_states().len(), 1);
}

#[test]
fn test_set_selection_mode_normalizes_and_notifies() {
    let (mut listbox, recorder) = new_listbox(
        ListboxConfig::default().with_selection_mode(SelectionMode::Multiple),
        &["a", "b", "c"],
    );
    click(&mut listbox, "a");
    click(&mut listbox, "c");
    recorder.take();

    listbox.set_selection_mode(SelectionMode::Single);
    assert_eq2!(selected(&listbox), vec!["a"]);
    assert!(!listbox.is_native_multiple());

    let expected: SelectedKeys = smallvec!["a".into()];
    assert_eq2!(
        recorder.take(),
        vec![ListboxNotification::SelectionChanged(expected)]
    );
}

#[test]
fn test_sync_items_from_data() {
    #[derive(Debug)]
    struct Row {
        id: u8,
        name: &'static str,
    }

    fn to_item(row: &Row) -> Item { Item::new(format!("row-{}", row.id), row.name) }

    let (mut listbox, _) = new_listbox(ListboxConfig::default(), &["row-1"]);
    press_special(&mut listbox, SpecialKey::Down);

    listbox
        .sync_items(ItemSource::Data {
            rows: vec![Row { id: 2, name: "two" }, Row { id: 3, name: "three" }],
            mapper: to_item,
        })
        .unwrap();

    let keys: Vec<String> = listbox
        .registry()
        .ordered_keys()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq2!(keys, vec!["row-2".to_string(), "row-3".to_string()]);
    assert_eq2!(active(&listbox), None);
}

#[test]
fn test_render_states_and_native_options() {
    let (mut listbox, _) = new_listbox(ListboxConfig::default(), &["a", "b", "c"]);
    listbox.update_item(&"c".into(), &ItemPatch::disabled(true)).unwrap();
    click(&mut listbox, "b");

    let states = listbox.render_states();
    assert_eq2!(states.len(), 3);
    assert!(!states[0].is_active && !states[0].is_selected);
    assert!(states[1].is_active && states[1].is_selected);
    assert!(states[2].is_disabled);

    let options = listbox.native_options();
    let selected_values: Vec<&str> = options
        .iter()
        .filter(|it| it.selected)
        .map(|it| it.value.as_str())
        .collect();
    assert_eq2!(selected_values, vec!["b"]);
    assert!(options[2].disabled);
}

#[test]
fn test_esc_and_close() {
    let (mut listbox, recorder) = new_listbox(ListboxConfig::default(), &["apple", "avocado"]);
    let now = Instant::now();
    type_at(&mut listbox, 'a', now);
    recorder.take();

    press_special(&mut listbox, SpecialKey::Esc);
    assert_eq2!(listbox.search_buffer(), "");
    assert_eq2!(recorder.take(), vec![ListboxNotification::RequestClose]);
    assert_eq2!(active(&listbox), Some("apple"));

    listbox.close();
    assert_eq2!(active(&listbox), None);
    assert_eq2!(
        recorder.take(),
        vec![ListboxNotification::ActiveChanged(None)]
    );
}

#[test]
fn test_invalid_timeout_falls_back_to_default() {
    let listbox = Listbox::new(ListboxConfig {
        type_ahead_timeout_ms: 0,
        ..Default::default()
    });
    assert_eq2!(listbox.config().type_ahead_timeout_ms, 1_000);
}

#[test]
fn test_sub_millisecond_timeout_is_ignored() {
    let (mut listbox, _recorder) =
        new_listbox(ListboxConfig::default(), &["cheetah", "crocodile"]);

    listbox.set_type_ahead_timeout(Duration::from_micros(500));
    assert_eq2!(listbox.config().type_ahead_timeout_ms, 1_000);
    assert!(listbox.config().validate().is_ok());

    listbox.handle_input_event(key_press!(@char 'c').into());
    let (_, timeout) = listbox.pending_search_timeout().unwrap();
    assert_eq2!(timeout, Duration::from_millis(1_000));

    listbox.set_type_ahead_timeout(Duration::from_millis(250));
    assert_eq2!(listbox.config().type_ahead_timeout_ms, 250);
}
