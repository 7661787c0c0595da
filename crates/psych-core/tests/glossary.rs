use psych_core::models::glossary::{filter, terms, ALL, CATEGORIES};

fn names<'a>(found: &[&'a psych_core::models::glossary::GlossaryTerm]) -> Vec<&'a str> {
    found.iter().map(|t| t.term.as_str()).collect()
}

#[test]
fn builtin_glossary_has_46_terms() {
    assert_eq!(terms().len(), 46);
}

#[test]
fn every_term_uses_a_known_category() {
    for term in terms() {
        assert!(
            CATEGORIES[1..].contains(&term.category.as_str()),
            "{} has category {}",
            term.term,
            term.category
        );
    }
}

#[test]
fn empty_query_with_all_returns_everything_sorted() {
    let found = filter(terms(), "", ALL);
    assert_eq!(found.len(), 46);
    let listed = names(&found);
    let mut sorted = listed.clone();
    sorted.sort();
    assert_eq!(listed, sorted);
}

#[test]
fn query_matches_term_names_case_insensitively() {
    assert_eq!(names(&filter(terms(), "halluc", ALL)), vec!["Hallucination"]);
    assert_eq!(names(&filter(terms(), "HALLUC", ALL)), vec!["Hallucination"]);
}

#[test]
fn query_matches_definitions_too() {
    let found = filter(terms(), "opioid", ALL);
    assert_eq!(names(&found), vec!["Piloerection"]);
}

#[test]
fn category_restricts_results() {
    let found = filter(terms(), "", "Trauma");
    assert_eq!(names(&found), vec!["Hypervigilance"]);

    let mood = filter(terms(), "", "Mood");
    assert!(mood.iter().all(|t| t.category == "Mood"));
    assert!(!mood.is_empty());
}

#[test]
fn query_and_category_combine() {
    assert!(filter(terms(), "halluc", "Mood").is_empty());
    assert_eq!(names(&filter(terms(), "thought", "Psychosis")).len(), 4);
}

#[test]
fn sort_is_plain_lexicographic() {
    let found = filter(terms(), "ego-", ALL);
    assert_eq!(names(&found), vec!["Ego-dystonic", "Ego-syntonic"]);
}
