use drinklist::{
    config::StoreConfig,
    core::store::{DrinkListStore, StoreError},
    drink::DraftField,
    op::Op,
    types::{Category, DrinkId},
};

fn fill(store: &mut DrinkListStore, name: &str, category: Option<Category>, pct: &str, vol: &str) {
    store.set_name(name);
    store.set_category(category);
    store.set_percentage(pct);
    store.set_volume(vol);
}

fn add(store: &mut DrinkListStore, name: &str, pct: &str, vol: &str) -> DrinkId {
    fill(store, name, None, pct, vol);
    store.add().unwrap()
}

#[test]
fn lager_then_shot_totals() {
    let mut store = DrinkListStore::new();

    fill(&mut store, "Lager", Some(Category::Beer), "5", "500");
    store.add().unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.total_alcohol_ml(), 25.0);
    assert_eq!(store.total_alcohol_display(), "25.00");

    fill(&mut store, "Shot", Some(Category::Vodka), "40", "50");
    store.add().unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.total_alcohol_display(), "45.00");
}

#[test]
fn add_stores_trimmed_fields_and_clears_draft() {
    let mut store = DrinkListStore::new();
    fill(&mut store, "  Merlot ", None, " 13 ", "150");
    let id = store.add().unwrap();

    let rec = store.get(id).unwrap();
    assert_eq!(rec.name, "Merlot");
    assert_eq!(rec.category, Category::Undefined);
    assert_eq!(rec.percentage, "13");
    assert_eq!(rec.volume_ml, "150");
    assert_eq!(store.draft(), &Default::default());
}

#[test]
fn blank_required_fields_leave_collection_unchanged() {
    let mut store = DrinkListStore::new().with_journal(true);
    add(&mut store, "Lager", "5", "500");

    for (name, pct, vol, field) in [
        ("", "5", "500", DraftField::Name),
        ("Cider", " ", "500", DraftField::Percentage),
        ("Cider", "4.5", "", DraftField::Volume),
    ] {
        fill(&mut store, name, Some(Category::Beer), pct, vol);
        let before = store.records_cloned();
        assert_eq!(store.add(), Err(StoreError::MissingFields(vec![field])));
        assert_eq!(store.records_cloned(), before);
        assert_eq!(store.draft().name, name);
    }
    assert_eq!(store.drain_pending_ops().len(), 1);
}

#[test]
fn warning_arms_exactly_at_tenth_and_twentieth_add() {
    let mut store = DrinkListStore::new();

    for i in 1..=9 {
        add(&mut store, &format!("Beer {i}"), "5", "330");
        assert!(!store.warning().showing, "armed early at {i}");
    }
    add(&mut store, "Beer 10", "5", "330");
    assert!(store.warning().showing);
    assert_eq!(store.warning().threshold, Some(10));
    assert!(store.warning().message().unwrap().contains("10 drinks"));

    assert!(store.dismiss_warning());
    for i in 11..=19 {
        add(&mut store, &format!("Beer {i}"), "5", "330");
        assert!(!store.warning().showing, "armed early at {i}");
    }
    add(&mut store, "Beer 20", "5", "330");
    assert!(store.warning().showing);
    assert!(store.warning().message().unwrap().contains("20 drinks"));

    store.dismiss_warning();
    add(&mut store, "Beer 21", "5", "330");
    assert!(!store.warning().showing);
}

#[test]
fn warning_rearms_when_count_crosses_again_after_removal() {
    let mut store = DrinkListStore::new();
    let ids: Vec<_> = (0..10).map(|i| add(&mut store, &format!("D{i}"), "5", "100")).collect();
    store.dismiss_warning();

    store.remove(ids[0]);
    assert!(!store.warning().showing);
    add(&mut store, "again", "5", "100");
    assert!(store.warning().showing);
}

#[test]
fn custom_thresholds_are_honored() {
    let cfg = StoreConfig::from_json_str(r#"{"warning_thresholds":[2]}"#).unwrap();
    let mut store = DrinkListStore::with_config(cfg);
    assert_eq!(store.config().warning_thresholds, vec![2]);
    add(&mut store, "a", "1", "1");
    assert!(!store.warning().showing);
    add(&mut store, "b", "1", "1");
    assert!(store.warning().showing);
}

#[test]
fn remove_then_begin_edit_is_not_found() {
    let mut store = DrinkListStore::new();
    let id = add(&mut store, "Lager", "5", "500");

    assert!(store.remove(id).is_some());
    assert_eq!(store.begin_edit(id), Err(StoreError::NotFound(id)));
    assert_eq!(store.draft().editing_id, None);
}

#[test]
fn remove_is_idempotent_and_keeps_order() {
    let mut store = DrinkListStore::new();
    let a = add(&mut store, "a", "5", "100");
    let b = add(&mut store, "b", "5", "100");
    let c = add(&mut store, "c", "5", "100");

    assert!(store.remove(b).is_some());
    let after_first = store.records_cloned();
    assert!(store.remove(b).is_none());
    assert_eq!(store.records_cloned(), after_first);
    assert_eq!(store.ordered_ids(), &[a, c]);
    assert!(store.remove(999).is_none());
}

#[test]
fn save_edit_replaces_only_target_in_place() {
    let mut store = DrinkListStore::new();
    let a = add(&mut store, "a", "5", "100");
    let b = add(&mut store, "b", "5", "100");
    let c = add(&mut store, "c", "5", "100");
    let before = store.records_cloned();

    store.begin_edit(b).unwrap();
    assert_eq!(store.draft().editing_id, Some(b));
    assert_eq!(store.draft().name, "b");
    assert_eq!(store.draft().category, Some(Category::Undefined));

    store.set_name("Old Fashioned");
    store.set_category("Whiskey".parse().ok());
    store.set_percentage("32");
    assert_eq!(store.save_edit(), Ok(b));

    let after = store.records_cloned();
    assert_eq!(store.ordered_ids(), &[a, b, c]);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
    assert_eq!(after[1].id, b);
    assert_eq!(after[1].name, "Old Fashioned");
    assert_eq!(after[1].category, Category::Whiskey);
    assert_eq!(after[1].percentage, "32");
    assert_eq!(after[1].volume_ml, "100");
    assert!(!store.draft().is_editing());
}

#[test]
fn begin_edit_while_editing_retargets_and_drops_changes() {
    let mut store = DrinkListStore::new();
    let a = add(&mut store, "a", "5", "100");
    let b = add(&mut store, "b", "6", "200");

    store.begin_edit(a).unwrap();
    store.set_name("changed");
    store.begin_edit(b).unwrap();
    assert_eq!(store.draft().editing_id, Some(b));
    assert_eq!(store.draft().name, "b");

    store.save_edit().unwrap();
    assert_eq!(store.get(a).unwrap().name, "a");
}

#[test]
fn edit_state_guards() {
    let mut store = DrinkListStore::new();
    assert_eq!(store.save_edit(), Err(StoreError::NotEditing));

    let id = add(&mut store, "a", "5", "100");
    store.begin_edit(id).unwrap();
    assert_eq!(store.add(), Err(StoreError::EditInProgress(id)));

    store.set_volume("  ");
    assert_eq!(
        store.save_edit(),
        Err(StoreError::MissingFields(vec![DraftField::Volume]))
    );
    assert_eq!(store.get(id).unwrap().volume_ml, "100");
    assert_eq!(store.draft().editing_id, Some(id));

    store.remove(id);
    store.set_volume("250");
    assert_eq!(store.save_edit(), Err(StoreError::NotFound(id)));
    assert_eq!(store.draft().editing_id, Some(id));

    store.discard_draft();
    assert!(!store.draft().is_editing());
}

#[test]
fn submit_adds_or_saves_by_state() {
    let mut store = DrinkListStore::new();
    fill(&mut store, "a", None, "5", "100");
    let id = store.submit().unwrap();
    assert_eq!(store.len(), 1);

    store.begin_edit(id).unwrap();
    store.set_volume("200");
    assert_eq!(store.submit(), Ok(id));
    assert_eq!(store.len(), 1);
    assert_eq!(store.total_alcohol_display(), "10.00");
}

#[test]
fn non_numeric_text_poisons_the_total() {
    let mut store = DrinkListStore::new();
    add(&mut store, "Lager", "5", "500");
    add(&mut store, "Mystery", "strong", "500");

    assert!(store.total_alcohol_ml().is_nan());
    assert_eq!(store.total_alcohol_display(), "NaN");
}

#[test]
fn ids_stay_unique_after_removals() {
    let mut store = DrinkListStore::new();
    let a = add(&mut store, "a", "5", "100");
    store.remove(a);
    let b = add(&mut store, "b", "5", "100");
    assert_ne!(a, b);
}

#[test]
fn view_serializes_render_inputs() {
    let mut store = DrinkListStore::new();
    add(&mut store, "Lager", "5", "500");
    store.set_name("next");

    let view = store.view();
    assert_eq!(view.count, 1);
    assert_eq!(view.total_alcohol_ml, 25.0);
    assert_eq!(view.warning_message, None);

    let json: serde_json::Value = serde_json::from_str(&view.to_json().unwrap()).unwrap();
    assert_eq!(json["count"], 1);
    assert_eq!(json["totalAlcoholDisplay"], "25.00");
    assert_eq!(json["drinks"][0]["volumeMl"], "500");
    assert_eq!(json["draft"]["name"], "next");
    assert_eq!(json["warning"]["showing"], false);
}

#[test]
fn successful_mutations_are_journaled_in_order() {
    let mut store = DrinkListStore::new().with_journal(true);
    assert_eq!(store.latest_op_seq(), 0);

    let id = add(&mut store, "a", "5", "100");
    store.begin_edit(id).unwrap();
    store.set_name("b");
    store.save_edit().unwrap();
    store.remove(id);
    store.remove(id);

    let ops = store.drain_pending_ops();
    let seqs: Vec<_> = ops.iter().map(|o| o.seq).collect();
    assert_eq!(seqs, vec![1, 2, 3]);
    assert!(matches!(ops[0].op, Op::Add { .. }));
    assert!(matches!(&ops[1].op, Op::Replace { drink } if drink.name == "b"));
    assert!(matches!(&ops[2].op, Op::Remove { drink } if drink.id == id));
    assert_eq!(store.latest_op_seq(), 3);
    assert!(store.drain_pending_ops().is_empty());
}

#[test]
fn unsorted_thresholds_arm_at_every_configured_count() {
    let cfg = StoreConfig {
        warning_thresholds: vec![20, 10],
    };
    let mut store = DrinkListStore::with_config(cfg);

    let mut armed_at = Vec::new();
    for i in 1..=20 {
        add(&mut store, &format!("Beer {i}"), "5", "330");
        if store.dismiss_warning() {
            armed_at.push(store.len());
        }
    }
    assert_eq!(armed_at, vec![10, 20]);
}

#[test]
fn store_without_journal_retains_no_ops() {
    let mut store = DrinkListStore::new();
    assert!(!store.is_journaling());

    for i in 0..1000 {
        let id = add(&mut store, &format!("d{i}"), "5", "100");
        store.remove(id);
    }
    assert!(store.drain_pending_ops().is_empty());
    assert_eq!(store.latest_op_seq(), 0);

    let mut store = store.with_journal(true);
    add(&mut store, "kept", "5", "100");
    assert_eq!(store.drain_pending_ops().len(), 1);

    let mut store = store.with_journal(false);
    add(&mut store, "dropped", "5", "100");
    assert!(store.drain_pending_ops().is_empty());
}
