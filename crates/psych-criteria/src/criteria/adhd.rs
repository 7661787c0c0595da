use crate::scoring::{Cluster, ClusterCount, ClusterTag, Outcome, shortfalls};
use crate::Criteria;

/// Symptoms required per domain. Fixed for every age: the reduced adult
/// threshold (≥5 from age 17) is descriptive text only.
pub const DOMAIN_THRESHOLD: usize = 6;

pub const PENDING: &str = "Select symptoms to see presentation type";
pub const COMBINED: &str = "Combined Presentation";
pub const INATTENTIVE: &str = "Predominantly Inattentive Presentation";
pub const HYPERACTIVE_IMPULSIVE: &str = "Predominantly Hyperactive-Impulsive Presentation";
pub const INSUFFICIENT: &str = "Insufficient symptoms (need ≥6 in at least one domain)";

/// ADHD: Inattention and Hyperactivity-Impulsivity, nine symptoms each.
/// Meeting either domain names the presentation; meeting both is Combined.
pub struct Adhd;

impl Criteria for Adhd {
    fn id(&self) -> &str {
        "adhd"
    }

    fn name(&self) -> &str {
        "ADHD Presentation"
    }

    fn clusters(&self) -> &[Cluster] {
        static CLUSTERS: std::sync::LazyLock<Vec<Cluster>> = std::sync::LazyLock::new(|| {
            vec![
                Cluster::new(
                    ClusterTag::Inattention,
                    "Inattention",
                    Some(DOMAIN_THRESHOLD),
                    &[
                        ("careless_mistakes", "Careless mistakes in work/activities"),
                        ("sustaining_attention", "Difficulty sustaining attention in tasks"),
                        ("not_listening", "Does not seem to listen when spoken to"),
                        ("not_following_through", "Fails to follow through on instructions"),
                        ("organizing", "Difficulty organizing tasks and activities"),
                        ("avoids_tasks", "Avoids tasks requiring sustained mental effort"),
                        ("loses_things", "Often loses necessary items"),
                        ("easily_distracted", "Easily distracted by extraneous stimuli"),
                        ("forgetful", "Forgetful in daily activities"),
                    ],
                ),
                Cluster::new(
                    ClusterTag::HyperactivityImpulsivity,
                    "Hyperactivity-Impulsivity",
                    Some(DOMAIN_THRESHOLD),
                    &[
                        ("fidgets", "Fidgets with hands/feet or squirms"),
                        ("leaves_seat", "Leaves seat when remaining seated expected"),
                        ("runs_climbs", "Runs/climbs inappropriately (or restlessness in adults)"),
                        ("unable_quiet", "Unable to play/engage quietly"),
                        ("on_the_go", "Acts as if \"driven by a motor\""),
                        ("talks_excessively", "Talks excessively"),
                        ("blurts_answers", "Blurts out answers before questions completed"),
                        ("difficulty_waiting", "Difficulty waiting turn"),
                        ("interrupts", "Interrupts or intrudes on others"),
                    ],
                ),
            ]
        });
        &CLUSTERS
    }

    fn classify(&self, counts: &[ClusterCount]) -> Outcome {
        let met: Vec<ClusterTag> = counts
            .iter()
            .filter(|c| c.is_met())
            .map(|c| c.cluster)
            .collect();

        if met.is_empty() {
            Outcome::NotMet {
                short: shortfalls(counts),
            }
        } else {
            Outcome::Met { clusters: met }
        }
    }

    fn describe(&self, outcome: &Outcome) -> String {
        let message = match outcome {
            Outcome::Pending => PENDING,
            Outcome::Met { clusters } => {
                let inattention = clusters.contains(&ClusterTag::Inattention);
                let hyper = clusters.contains(&ClusterTag::HyperactivityImpulsivity);
                match (inattention, hyper) {
                    (true, true) => COMBINED,
                    (true, false) => INATTENTIVE,
                    (false, true) => HYPERACTIVE_IMPULSIVE,
                    (false, false) => INSUFFICIENT,
                }
            }
            Outcome::NotMet { .. } | Outcome::Predominant { .. } | Outcome::Mixed => INSUFFICIENT,
        };
        message.to_string()
    }
}
