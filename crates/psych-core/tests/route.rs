use psych_core::error::CoreError;
use psych_core::models::case::CaseSet;
use psych_core::models::route::Route;

#[test]
fn every_path_round_trips() {
    for route in Route::ALL {
        assert_eq!(Route::from_path(route.path()), Some(route));
        assert_eq!(route.path().parse::<Route>().unwrap(), route);
    }
}

#[test]
fn bare_names_parse_case_insensitively() {
    assert_eq!("adhd".parse::<Route>().unwrap(), Route::Adhd);
    assert_eq!("PTSD".parse::<Route>().unwrap(), Route::Ptsd);
    assert_eq!(" Glossary ".parse::<Route>().unwrap(), Route::Glossary);
    assert_eq!("home".parse::<Route>().unwrap(), Route::Home);
}

#[test]
fn unknown_and_empty_names_are_rejected() {
    let err = "/ocd".parse::<Route>().unwrap_err();
    assert!(matches!(err, CoreError::UnknownRoute(ref s) if s == "/ocd"));
    assert_eq!(err.to_string(), "unknown page: /ocd");
    assert!("".parse::<Route>().is_err());
}

#[test]
fn navigation_order_starts_home_ends_settings() {
    assert_eq!(Route::ALL.first(), Some(&Route::Home));
    assert_eq!(Route::ALL.last(), Some(&Route::Settings));
    assert_eq!(Route::ALL.len(), 12);
}

#[test]
fn criteria_pages_name_their_evaluator() {
    let live: Vec<(Route, &str)> = Route::ALL
        .into_iter()
        .filter_map(|r| r.criteria_id().map(|id| (r, id)))
        .collect();
    assert_eq!(
        live,
        vec![(Route::Psychosis, "psychosis"), (Route::Ptsd, "ptsd"), (Route::Adhd, "adhd")]
    );
}

#[test]
fn case_pages_map_to_case_sets() {
    assert_eq!(CaseSet::try_from(Route::Mdd).unwrap(), CaseSet::Mdd);
    assert_eq!(CaseSet::try_from(Route::Sud).unwrap(), CaseSet::Sud);
    let err = CaseSet::try_from(Route::Glossary).unwrap_err();
    assert!(matches!(err, CoreError::UnknownCaseSet(_)));
}

#[test]
fn display_uses_nav_label() {
    assert_eq!(Route::Sud.to_string(), "SUD");
    assert_eq!(Route::Assessment.heading(), "Clinical Assessment");
}
