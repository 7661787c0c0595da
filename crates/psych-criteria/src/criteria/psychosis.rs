use std::cmp::Ordering;

use crate::scoring::{Cluster, ClusterCount, ClusterTag, Outcome};
use crate::Criteria;

pub const PENDING: &str = "Select symptoms to see pattern analysis";
pub const PREDOMINANTLY_POSITIVE: &str = "Predominantly POSITIVE symptoms - suggests acute psychotic episode, more responsive to treatment";
pub const PREDOMINANTLY_NEGATIVE: &str =
    "Predominantly NEGATIVE symptoms - suggests chronic phase, may be more treatment-resistant";
pub const MIXED: &str =
    "MIXED positive and negative symptoms - comprehensive treatment approach needed";

/// Psychosis pattern engine: positive vs negative symptoms, five each.
/// No minimum; the larger raw count wins and a tie is mixed.
pub struct Psychosis;

impl Criteria for Psychosis {
    fn id(&self) -> &str {
        "psychosis"
    }

    fn name(&self) -> &str {
        "Psychosis Pattern Engine"
    }

    fn clusters(&self) -> &[Cluster] {
        static CLUSTERS: std::sync::LazyLock<Vec<Cluster>> = std::sync::LazyLock::new(|| {
            vec![
                Cluster::described(
                    ClusterTag::Positive,
                    "Positive Symptoms (Added behaviors/experiences)",
                    None,
                    &[
                        (
                            "hallucinations",
                            "Hallucinations",
                            "Auditory (most common), visual, tactile, olfactory",
                        ),
                        (
                            "delusions",
                            "Delusions",
                            "Fixed false beliefs (persecutory, grandiose, referential)",
                        ),
                        (
                            "disorganized_speech",
                            "Disorganized Speech",
                            "Tangentiality, loose associations, word salad",
                        ),
                        (
                            "disorganized_behavior",
                            "Disorganized Behavior",
                            "Inappropriate behavior, unpredictable agitation",
                        ),
                        (
                            "catatonia",
                            "Catatonic Behavior",
                            "Immobility, excessive motor activity, mutism",
                        ),
                    ],
                ),
                Cluster::described(
                    ClusterTag::Negative,
                    "Negative Symptoms (Reduced/lost functions)",
                    None,
                    &[
                        (
                            "affective_flattening",
                            "Affective Flattening",
                            "Reduced emotional expression",
                        ),
                        ("alogia", "Alogia", "Poverty of speech, brief responses"),
                        (
                            "avolition",
                            "Avolition",
                            "Decreased motivation, inability to initiate activities",
                        ),
                        ("anhedonia", "Anhedonia", "Inability to experience pleasure"),
                        (
                            "asociality",
                            "Asociality",
                            "Lack of interest in social interactions",
                        ),
                    ],
                ),
            ]
        });
        &CLUSTERS
    }

    fn classify(&self, counts: &[ClusterCount]) -> Outcome {
        let selected = |tag: ClusterTag| {
            counts
                .iter()
                .find(|c| c.cluster == tag)
                .map_or(0, |c| c.selected)
        };

        match selected(ClusterTag::Positive).cmp(&selected(ClusterTag::Negative)) {
            Ordering::Greater => Outcome::Predominant {
                cluster: ClusterTag::Positive,
            },
            Ordering::Less => Outcome::Predominant {
                cluster: ClusterTag::Negative,
            },
            Ordering::Equal => Outcome::Mixed,
        }
    }

    fn describe(&self, outcome: &Outcome) -> String {
        let message = match outcome {
            Outcome::Predominant {
                cluster: ClusterTag::Positive,
            } => PREDOMINANTLY_POSITIVE,
            Outcome::Predominant {
                cluster: ClusterTag::Negative,
            } => PREDOMINANTLY_NEGATIVE,
            Outcome::Mixed => MIXED,
            _ => PENDING,
        };
        message.to_string()
    }
}
