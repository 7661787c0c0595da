use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::selection::SelectionState;

/// Named sub-group of symptoms within a diagnostic domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ClusterTag {
    Inattention,
    HyperactivityImpulsivity,
    /// PTSD criterion B.
    Intrusion,
    /// PTSD criterion C.
    Avoidance,
    /// PTSD criterion D: negative alterations in cognition and mood.
    NegativeAlterations,
    /// PTSD criterion E: alterations in arousal and reactivity.
    Arousal,
    Positive,
    Negative,
}

impl ClusterTag {
    /// Lowercase label used inside verdict messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Inattention => "inattention",
            Self::HyperactivityImpulsivity => "hyperactivity-impulsivity",
            Self::Intrusion => "intrusion",
            Self::Avoidance => "avoidance",
            Self::NegativeAlterations => "negative alterations",
            Self::Arousal => "arousal",
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

/// One selectable entry in a criteria catalog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Symptom {
    pub id: String,
    pub label: String,
    pub cluster: ClusterTag,
    pub description: Option<String>,
}

/// A cluster and the catalog entries that belong to it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cluster {
    pub tag: ClusterTag,
    pub name: String,
    /// Minimum number of selected symptoms for the cluster to count as met.
    /// `None` for clusters that are only compared, never thresholded.
    pub minimum: Option<usize>,
    pub symptoms: Vec<Symptom>,
}

impl Cluster {
    pub fn new(tag: ClusterTag, name: &str, minimum: Option<usize>, items: &[(&str, &str)]) -> Self {
        let symptoms = items
            .iter()
            .map(|(id, label)| Symptom {
                id: id.to_string(),
                label: label.to_string(),
                cluster: tag,
                description: None,
            })
            .collect();
        Self {
            tag,
            name: name.to_string(),
            minimum,
            symptoms,
        }
    }

    /// Like [`Cluster::new`], with a description line per symptom.
    pub fn described(
        tag: ClusterTag,
        name: &str,
        minimum: Option<usize>,
        items: &[(&str, &str, &str)],
    ) -> Self {
        let symptoms = items
            .iter()
            .map(|(id, label, description)| Symptom {
                id: id.to_string(),
                label: label.to_string(),
                cluster: tag,
                description: Some(description.to_string()),
            })
            .collect();
        Self {
            tag,
            name: name.to_string(),
            minimum,
            symptoms,
        }
    }
}

/// Selected-symptom count for one cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClusterCount {
    pub cluster: ClusterTag,
    pub name: String,
    pub selected: usize,
    /// Catalog size of the cluster.
    pub total: usize,
    pub minimum: Option<usize>,
}

impl ClusterCount {
    pub fn is_met(&self) -> bool {
        self.minimum.is_none_or(|min| self.selected >= min)
    }
}

/// A thresholded cluster that has fewer selections than it requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Shortfall {
    pub cluster: ClusterTag,
    pub selected: usize,
    pub minimum: usize,
}

/// Structured result of a threshold evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Outcome {
    /// No catalog symptom is selected yet.
    Pending,
    /// Thresholds reached. Lists the clusters that met, in catalog order.
    Met { clusters: Vec<ClusterTag> },
    /// Thresholds not reached. Lists every short cluster, in catalog order.
    NotMet { short: Vec<Shortfall> },
    /// One cluster outnumbers the other.
    Predominant { cluster: ClusterTag },
    /// Equal, nonzero counts.
    Mixed,
}

/// Counts, outcome and display message for one selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Verdict {
    pub criteria_id: String,
    pub counts: Vec<ClusterCount>,
    pub outcome: Outcome,
    pub message: String,
}

impl Verdict {
    /// Selected count for `tag`, zero if the catalog has no such cluster.
    pub fn count(&self, tag: ClusterTag) -> usize {
        self.counts
            .iter()
            .find(|c| c.cluster == tag)
            .map_or(0, |c| c.selected)
    }

    pub fn meets(&self) -> bool {
        matches!(self.outcome, Outcome::Met { .. })
    }

    pub fn is_pending(&self) -> bool {
        self.outcome == Outcome::Pending
    }
}

/// Count selected ids per cluster, in catalog order. Ids that are not in the
/// catalog are ignored.
pub fn count_by_cluster(clusters: &[Cluster], selection: &SelectionState) -> Vec<ClusterCount> {
    clusters
        .iter()
        .map(|cluster| ClusterCount {
            cluster: cluster.tag,
            name: cluster.name.clone(),
            selected: cluster
                .symptoms
                .iter()
                .filter(|s| selection.contains(&s.id))
                .count(),
            total: cluster.symptoms.len(),
            minimum: cluster.minimum,
        })
        .collect()
}

/// Every thresholded cluster below its minimum, in the order given.
pub fn shortfalls(counts: &[ClusterCount]) -> Vec<Shortfall> {
    counts
        .iter()
        .filter_map(|c| match c.minimum {
            Some(minimum) if c.selected < minimum => Some(Shortfall {
                cluster: c.cluster,
                selected: c.selected,
                minimum,
            }),
            _ => None,
        })
        .collect()
}
