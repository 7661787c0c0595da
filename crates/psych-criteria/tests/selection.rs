use psych_criteria::criteria::adhd::Adhd;
use psych_criteria::criteria::ptsd::Ptsd;
use psych_criteria::scoring::{ClusterTag, count_by_cluster};
use psych_criteria::selection::SelectionState;
use psych_criteria::Criteria;

#[test]
fn toggle_adds_then_removes() {
    let mut selection = SelectionState::new();
    assert!(selection.toggle("nightmares"));
    assert!(selection.contains("nightmares"));
    assert!(!selection.toggle("nightmares"));
    assert!(selection.is_empty());
}

#[test]
fn toggle_is_its_own_inverse() {
    let states = [
        SelectionState::new(),
        SelectionState::from_iter(["fidgets"]),
        SelectionState::from_iter(["fidgets", "forgetful", "not_in_any_catalog"]),
    ];
    for state in states {
        for id in ["fidgets", "forgetful", "blame", "not_in_any_catalog"] {
            let round_trip = state.clone().toggled(id).toggled(id);
            assert_eq!(round_trip, state, "toggling '{id}' twice changed the set");
        }
    }
}

#[test]
fn unknown_ids_are_stored() {
    let mut selection = SelectionState::new();
    selection.toggle("made_up");
    assert!(selection.contains("made_up"));
    assert_eq!(selection.len(), 1);
}

#[test]
fn clear_empties_selection() {
    let mut selection = SelectionState::from_iter(["sleep", "startle", "blame"]);
    selection.clear();
    assert!(selection.is_empty());
    assert_eq!(selection.iter().count(), 0);
}

#[test]
fn counts_follow_catalog_order() {
    let selection = SelectionState::from_iter(["sleep", "blame", "nightmares"]);
    let counts = Ptsd.count_by_cluster(&selection);

    let order: Vec<ClusterTag> = counts.iter().map(|c| c.cluster).collect();
    assert_eq!(
        order,
        vec![
            ClusterTag::Intrusion,
            ClusterTag::Avoidance,
            ClusterTag::NegativeAlterations,
            ClusterTag::Arousal,
        ]
    );
    let selected: Vec<usize> = counts.iter().map(|c| c.selected).collect();
    assert_eq!(selected, vec![1, 0, 1, 1]);
    let totals: Vec<usize> = counts.iter().map(|c| c.total).collect();
    assert_eq!(totals, vec![5, 2, 7, 6]);
}

#[test]
fn unknown_ids_never_change_counts() {
    let base = SelectionState::from_iter(["forgetful", "fidgets", "interrupts"]);
    let before = count_by_cluster(Adhd.clusters(), &base);

    let mut noisy = base.clone();
    for id in ["", "FORGETFUL", "nightmares", "hallucinations", "zzz"] {
        noisy.toggle(id);
    }
    let after = count_by_cluster(Adhd.clusters(), &noisy);

    assert_eq!(before, after);
}

#[test]
fn selection_serializes_as_sorted_list() {
    let selection = SelectionState::from_iter(["sleep", "amnesia"]);
    let json = serde_json::to_string(&selection).unwrap();
    assert_eq!(json, r#"["amnesia","sleep"]"#);

    let back: SelectionState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, selection);
}
