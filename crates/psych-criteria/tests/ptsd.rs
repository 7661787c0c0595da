use psych_criteria::criteria::ptsd::{MEETS, PENDING, Ptsd};
use psych_criteria::scoring::{ClusterTag, Outcome, Shortfall};
use psych_criteria::selection::SelectionState;
use psych_criteria::Criteria;

#[test]
fn cluster_sizes_and_minimums() {
    let shape: Vec<(ClusterTag, usize, Option<usize>)> = Ptsd
        .clusters()
        .iter()
        .map(|c| (c.tag, c.symptoms.len(), c.minimum))
        .collect();
    assert_eq!(
        shape,
        vec![
            (ClusterTag::Intrusion, 5, Some(1)),
            (ClusterTag::Avoidance, 2, Some(1)),
            (ClusterTag::NegativeAlterations, 7, Some(2)),
            (ClusterTag::Arousal, 6, Some(2)),
        ]
    );
}

#[test]
fn nothing_selected_is_pending() {
    let verdict = Ptsd.evaluate(&SelectionState::new());
    assert_eq!(verdict.outcome, Outcome::Pending);
    assert_eq!(verdict.message, PENDING);
}

#[test]
fn minimum_in_every_cluster_meets_criteria() {
    let selection = SelectionState::from_iter([
        "flashbacks",
        "avoid_external",
        "blame",
        "detachment",
        "hypervigilance",
        "startle",
    ]);
    let verdict = Ptsd.evaluate(&selection);

    assert!(verdict.meets());
    assert_eq!(verdict.message, MEETS);
    assert!(verdict.message.contains("(assuming ≥1 month duration and functional impairment)"));
}

#[test]
fn single_intrusion_lists_remaining_clusters_in_order() {
    let selection = SelectionState::from_iter(["nightmares"]);
    let verdict = Ptsd.evaluate(&selection);

    assert!(!verdict.meets());
    assert_eq!(
        verdict.message,
        "Does NOT meet full criteria. Missing: avoidance (need ≥1), \
         negative alterations (need ≥2), arousal (need ≥2)"
    );
    assert!(!verdict.message.contains("intrusion"));
}

#[test]
fn only_short_clusters_are_listed() {
    let selection = SelectionState::from_iter([
        "intrusive_memories",
        "avoid_memories",
        "amnesia",
        "irritability",
        "sleep",
    ]);
    let verdict = Ptsd.evaluate(&selection);

    assert_eq!(
        verdict.outcome,
        Outcome::NotMet {
            short: vec![Shortfall {
                cluster: ClusterTag::NegativeAlterations,
                selected: 1,
                minimum: 2,
            }],
        }
    );
    assert_eq!(
        verdict.message,
        "Does NOT meet full criteria. Missing: negative alterations (need ≥2)"
    );
}

#[test]
fn arousal_without_intrusion_names_intrusion_first() {
    let selection = SelectionState::from_iter(["reckless", "concentration", "sleep"]);
    let verdict = Ptsd.evaluate(&selection);
    assert!(
        verdict
            .message
            .starts_with("Does NOT meet full criteria. Missing: intrusion (need ≥1), avoidance")
    );
    assert!(!verdict.message.contains("arousal"));
}

#[test]
fn verdict_serializes_with_tagged_outcome() {
    let verdict = Ptsd.evaluate(&SelectionState::from_iter(["nightmares"]));
    let json = serde_json::to_value(&verdict).unwrap();

    assert_eq!(json["criteria_id"], "ptsd");
    assert_eq!(json["outcome"]["kind"], "not_met");
    assert_eq!(json["outcome"]["short"][0]["cluster"], "avoidance");
    assert_eq!(json["counts"][0]["selected"], 1);
}
