//! Comprehensive mutation tests through the store API

use vitae_editor::{EditorStore, MutationOutcome, SectionKind, SectionNode, StyleMap};

fn styles(pairs: &[(&str, &str)]) -> StyleMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Every id stays pairwise distinct across any sequence of creation
/// operations
#[test]
fn test_ids_stay_unique_across_creation_sequences() {
    let mut store = EditorStore::with_starter();

    for kind in [
        SectionKind::Skills,
        SectionKind::Education,
        SectionKind::Experience,
        SectionKind::Custom,
    ] {
        store.add_section(kind);
    }

    let list_ids: Vec<String> = store
        .document()
        .sections
        .iter()
        .filter(|s| s.is_list())
        .map(|s| s.id.clone())
        .collect();
    for section_id in &list_ids {
        store.add_entry(section_id);
        store.add_entry(section_id);
    }

    let doc = store.document();
    let ids = doc.all_ids();
    let mut deduped: Vec<_> = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(ids.len(), deduped.len(), "duplicate id in {ids:?}");
}

#[test]
fn test_section_style_merge_not_replace() {
    let mut store = EditorStore::with_starter();
    let section_id = store.document().sections[0].id.clone();

    store.update_section_styles(&section_id, styles(&[("color", "red"), ("fontSize", "12px")]));
    store.update_section_styles(&section_id, styles(&[("color", "blue")]));

    let doc = store.document();
    let section = doc.find_section(&section_id).unwrap();
    assert_eq!(section.styles.get("color").unwrap(), "blue");
    assert_eq!(section.styles.get("fontSize").unwrap(), "12px");
}

#[test]
fn test_item_style_merge_through_entry_path() {
    let mut store = EditorStore::with_starter();
    let doc = store.document();
    let work = doc.sections.iter().find(|s| s.is_list()).unwrap();
    let entry = &work.entries().unwrap()[0];
    let item = &entry.leaf_items().unwrap()[0];
    let (work_id, entry_id, item_id) = (work.id.clone(), entry.id.clone(), item.id.clone());

    let outcome = store.update_item_styles(
        &work_id,
        Some(&entry_id),
        &item_id,
        styles(&[("color", "#222222")]),
    );

    assert!(outcome.is_applied());
    let doc = store.document();
    let item = doc
        .find_section(&work_id)
        .and_then(|s| s.entry(&entry_id))
        .and_then(|e| e.leaf_items().map(|items| &items[0]))
        .unwrap();
    assert_eq!(item.styles.get("color").unwrap(), "#222222");
    // Template defaults not mentioned in the merge survive
    assert_eq!(item.styles.get("fontWeight").unwrap(), "bold");
}

/// Operations on missing ids leave the document structurally identical
#[test]
fn test_missing_id_operations_leave_state_identical() {
    let mut store = EditorStore::with_starter();
    let before = store.document();

    assert_eq!(
        store.update_item_styles("nonexistent", None, "nonexistent", styles(&[("a", "b")])),
        MutationOutcome::Noop
    );
    assert_eq!(
        store.update_content("nonexistent", Some("nope"), "nonexistent", "x"),
        MutationOutcome::Noop
    );
    assert_eq!(store.remove_entry("nonexistent", "nope"), MutationOutcome::Noop);

    let after = store.document();
    assert_eq!(*before, *after);
}

#[test]
fn test_reorder_with_identity_permutation_is_equal() {
    let mut store = EditorStore::with_starter();
    let before = store.document();

    let same_order: Vec<SectionNode> = before.sections.clone();
    store.reorder_sections(same_order);

    assert_eq!(*before, *store.document());
}

#[test]
fn test_reorder_reverses_render_order() {
    let mut store = EditorStore::with_starter();
    let mut reversed: Vec<SectionNode> = store.document().sections.clone();
    reversed.reverse();
    let expected: Vec<String> = reversed.iter().map(|s| s.id.clone()).collect();

    store.reorder_sections(reversed);

    let got: Vec<String> = store
        .document()
        .sections
        .iter()
        .map(|s| s.id.clone())
        .collect();
    assert_eq!(got, expected);
}

/// The shape of a section's children always agrees with its list-ness;
/// entries themselves are always leaf-shaped
#[test]
fn test_list_shape_invariant_holds_after_mixed_operations() {
    let mut store = EditorStore::with_starter();
    store.add_section(SectionKind::Education);
    let education_id = store.document().sections.last().unwrap().id.clone();
    store.add_entry(&education_id);
    store.add_section(SectionKind::Skills);

    for section in &store.document().sections {
        if section.is_list() {
            let entries = section.entries().expect("list sections hold entries");
            assert!(section.leaf_items().is_none());
            for entry in entries {
                assert!(!entry.is_list(), "entries are leaf-shaped");
                assert!(entry.leaf_items().is_some());
            }
        } else {
            assert!(section.leaf_items().is_some());
            assert!(section.entries().is_none());
        }
    }
}

#[test]
fn test_add_then_remove_entry_returns_to_zero() {
    let mut store = EditorStore::new();
    store.add_section(SectionKind::Experience);
    let section_id = store.document().sections[0].id.clone();
    assert!(store.document().sections[0].items.is_empty());

    store.add_entry(&section_id);
    let entry_id = store.document().sections[0].entries().unwrap()[0]
        .id
        .clone();

    store.remove_entry(&section_id, &entry_id);

    assert!(store.document().sections[0].items.is_empty());
}

#[test]
fn test_add_entry_to_leaf_section_is_silent_noop() {
    let mut store = EditorStore::new();
    store.add_section(SectionKind::Skills);
    let section_id = store.document().sections[0].id.clone();

    assert_eq!(store.add_entry(&section_id), MutationOutcome::Noop);
    assert!(store.document().sections[0].items.is_empty());
}

#[test]
fn test_remove_section() {
    let mut store = EditorStore::with_starter();
    let section_id = store.document().sections[1].id.clone();
    let before = store.document().sections.len();

    assert!(store.remove_section(&section_id).is_applied());
    assert_eq!(store.document().sections.len(), before - 1);
    assert!(store.document().find_section(&section_id).is_none());
}

#[test]
fn test_update_section_title() {
    let mut store = EditorStore::with_starter();
    let section_id = store.document().sections[1].id.clone();

    store.update_section_title(&section_id, "Profile");

    assert_eq!(
        store.document().find_section(&section_id).unwrap().title,
        "Profile"
    );
}

#[test]
fn test_item_visibility_is_hide_not_delete() {
    let mut store = EditorStore::with_starter();
    let doc = store.document();
    let header = &doc.sections[0];
    let item_id = header.leaf_items().unwrap()[0].id.clone();
    let section_id = header.id.clone();

    store.set_item_visibility(&section_id, None, &item_id, false);

    let doc = store.document();
    let items = doc.find_section(&section_id).unwrap().leaf_items().unwrap();
    let item = items.iter().find(|i| i.id == item_id).unwrap();
    assert!(!item.visible);
}
