use psych_core::models::case::{CaseReveal, CaseSet};

#[test]
fn every_case_set_has_four_cases() {
    for set in CaseSet::ALL {
        assert_eq!(set.cases().len(), 4, "{:?}", set);
        assert_eq!(set.route().case_set(), Some(set));
    }
}

#[test]
fn nothing_is_revealed_initially() {
    let reveal = CaseReveal::for_set(CaseSet::Mdd);
    assert_eq!(reveal.revealed_index(), None);
    assert!((0..4).all(|i| !reveal.is_revealed(i)));
    assert_eq!(reveal.button_label(0), "Show Classification");
}

#[test]
fn toggling_same_case_twice_hides_it() {
    let mut reveal = CaseReveal::for_set(CaseSet::Bipolar);
    assert!(reveal.toggle(1));
    assert!(reveal.is_revealed(1));
    assert_eq!(reveal.button_label(1), "Hide Classification");

    assert!(!reveal.toggle(1));
    assert!(!reveal.is_revealed(1));
    assert_eq!(reveal.revealed_index(), None);

    assert!(reveal.toggle(1));
    assert!(reveal.is_revealed(1));
}

#[test]
fn toggling_another_case_moves_the_reveal() {
    let mut reveal = CaseReveal::for_set(CaseSet::Anxiety);
    reveal.toggle(0);
    assert!(reveal.toggle(2));
    assert!(!reveal.is_revealed(0));
    assert!(reveal.is_revealed(2));
    assert_eq!(reveal.revealed_index(), Some(2));
}

#[test]
fn hidden_case_then_other_case_is_shown() {
    let mut reveal = CaseReveal::for_set(CaseSet::Sud);
    reveal.toggle(0);
    reveal.toggle(0);
    assert!(reveal.toggle(3));
    assert_eq!(reveal.revealed_index(), Some(3));
}

#[test]
fn out_of_range_case_is_ignored() {
    let mut reveal = CaseReveal::for_set(CaseSet::Mdd);
    reveal.toggle(2);
    assert!(!reveal.toggle(4));
    assert_eq!(reveal.revealed_index(), Some(2));
}

#[test]
fn classifications_carry_red_flags() {
    let sud = CaseSet::Sud.cases();
    assert_eq!(sud[1].classification, "Alcohol Withdrawal - Delirium Tremens (DTs)");
    assert!(sud[1].explanation.starts_with("RED FLAG"));
    assert!(sud.iter().all(|c| c.details.iter().any(|d| d.label == "Vitals")));
}

#[test]
fn anxiety_explanations_are_plain_text() {
    let adjustment = &CaseSet::Anxiety.cases()[3];
    assert!(adjustment.explanation.contains("duration <6 months"));
    assert!(!adjustment.explanation.contains("&lt;"));
}
