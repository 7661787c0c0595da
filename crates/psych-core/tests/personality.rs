use psych_core::error::CoreError;
use psych_core::models::personality::{
    clusters, get_cluster, key_differentials, ClusterKey, ClusterSelector, GENERAL_FEATURES,
};

#[test]
fn three_clusters_in_key_order() {
    let keys: Vec<ClusterKey> = clusters().iter().map(|c| c.key).collect();
    assert_eq!(keys, ClusterKey::ALL.to_vec());
    for key in ClusterKey::ALL {
        assert_eq!(get_cluster(key).key, key);
    }
}

#[test]
fn disorder_counts_per_cluster() {
    let counts: Vec<usize> = clusters().iter().map(|c| c.disorders.len()).collect();
    assert_eq!(counts, vec![3, 4, 3]);
    assert_eq!(get_cluster(ClusterKey::B).disorders[1].name, "Borderline");
    assert_eq!(get_cluster(ClusterKey::B).disorders[1].traits.len(), 9);
}

#[test]
fn reference_lists_are_complete() {
    assert_eq!(key_differentials().len(), 4);
    assert_eq!(key_differentials()[1].comparison, "OCPD vs OCD");
    assert_eq!(GENERAL_FEATURES.len(), 7);
}

#[test]
fn keys_parse_case_insensitively() {
    assert_eq!("a".parse::<ClusterKey>().unwrap(), ClusterKey::A);
    assert_eq!(" C ".parse::<ClusterKey>().unwrap(), ClusterKey::C);
    let err = "D".parse::<ClusterKey>().unwrap_err();
    assert!(matches!(err, CoreError::UnknownCluster(ref s) if s == "D"));
}

#[test]
fn selecting_the_expanded_cluster_collapses_it() {
    let mut selector = ClusterSelector::new();
    assert_eq!(selector.expanded(), None);

    assert_eq!(selector.select(ClusterKey::A), Some(ClusterKey::A));
    assert_eq!(selector.expanded().map(|c| c.key), Some(ClusterKey::A));

    assert_eq!(selector.select(ClusterKey::A), None);
    assert_eq!(selector.selected(), None);
}

#[test]
fn selecting_another_cluster_switches() {
    let mut selector = ClusterSelector::new();
    selector.select(ClusterKey::A);
    assert_eq!(selector.select(ClusterKey::C), Some(ClusterKey::C));
    assert!(selector.expanded().unwrap().name.contains("Anxious/Fearful"));
}
