use crate::scoring::{Cluster, ClusterCount, ClusterTag, Outcome, shortfalls};
use crate::Criteria;

pub const PENDING: &str = "Select symptoms to see PTSD criteria analysis";
pub const MEETS: &str =
    "✓ MEETS PTSD symptom criteria (assuming ≥1 month duration and functional impairment)";
pub const NOT_MET_PREFIX: &str = "Does NOT meet full criteria. Missing: ";

/// PTSD: intrusion (≥1), avoidance (≥1), negative alterations in cognition
/// and mood (≥2), arousal and reactivity (≥2). Every cluster must be met.
///
/// Duration and functional impairment are never collected; the success
/// message carries them as a fixed caveat.
pub struct Ptsd;

impl Criteria for Ptsd {
    fn id(&self) -> &str {
        "ptsd"
    }

    fn name(&self) -> &str {
        "PTSD Symptom Clusters"
    }

    fn clusters(&self) -> &[Cluster] {
        static CLUSTERS: std::sync::LazyLock<Vec<Cluster>> = std::sync::LazyLock::new(|| {
            vec![
                Cluster::new(
                    ClusterTag::Intrusion,
                    "Intrusion",
                    Some(1),
                    &[
                        ("intrusive_memories", "Intrusive distressing memories"),
                        ("nightmares", "Recurrent nightmares"),
                        ("flashbacks", "Flashbacks (dissociative reactions)"),
                        ("psychological_distress", "Psychological distress to trauma cues"),
                        ("physiological_reactions", "Physiological reactions to trauma reminders"),
                    ],
                ),
                Cluster::new(
                    ClusterTag::Avoidance,
                    "Avoidance",
                    Some(1),
                    &[
                        ("avoid_memories", "Avoidance of distressing memories/thoughts"),
                        (
                            "avoid_external",
                            "Avoidance of external reminders (people, places, activities)",
                        ),
                    ],
                ),
                Cluster::new(
                    ClusterTag::NegativeAlterations,
                    "Negative Alterations in Cognition/Mood",
                    Some(2),
                    &[
                        ("amnesia", "Inability to recall key aspects of trauma"),
                        ("negative_beliefs", "Persistent negative beliefs about self/world"),
                        ("blame", "Distorted blame of self or others"),
                        ("negative_emotions", "Persistent negative emotional state"),
                        ("diminished_interest", "Diminished interest in activities"),
                        ("detachment", "Feeling detached or estranged from others"),
                        ("inability_positive", "Inability to experience positive emotions"),
                    ],
                ),
                Cluster::new(
                    ClusterTag::Arousal,
                    "Arousal and Reactivity",
                    Some(2),
                    &[
                        ("irritability", "Irritability or angry outbursts"),
                        ("reckless", "Reckless or self-destructive behavior"),
                        ("hypervigilance", "Hypervigilance"),
                        ("startle", "Exaggerated startle response"),
                        ("concentration", "Concentration problems"),
                        ("sleep", "Sleep disturbance"),
                    ],
                ),
            ]
        });
        &CLUSTERS
    }

    fn classify(&self, counts: &[ClusterCount]) -> Outcome {
        let short = shortfalls(counts);
        if short.is_empty() {
            Outcome::Met {
                clusters: counts.iter().map(|c| c.cluster).collect(),
            }
        } else {
            Outcome::NotMet { short }
        }
    }

    fn describe(&self, outcome: &Outcome) -> String {
        match outcome {
            Outcome::Pending => PENDING.to_string(),
            Outcome::Met { .. } => MEETS.to_string(),
            Outcome::NotMet { short } => {
                let missing: Vec<String> = short
                    .iter()
                    .map(|s| format!("{} (need ≥{})", s.cluster.label(), s.minimum))
                    .collect();
                format!("{NOT_MET_PREFIX}{}", missing.join(", "))
            }
            Outcome::Predominant { .. } | Outcome::Mixed => NOT_MET_PREFIX.to_string(),
        }
    }
}
