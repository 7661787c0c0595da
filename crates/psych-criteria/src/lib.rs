//! psych-criteria
//!
//! Symptom catalogs and threshold evaluators for the interactive criteria
//! pages. Pure data and pure functions: a verdict is always recomputed from
//! the current selection, nothing is cached.

pub mod criteria;
pub mod error;
pub mod scoring;
pub mod selection;

use error::CriteriaError;
use scoring::{Cluster, ClusterCount, Outcome, Symptom, Verdict};
use selection::SelectionState;

/// Trait implemented by each diagnostic domain's evaluator.
///
/// Implementors supply the catalog and two rules: how cluster counts combine
/// into an [`Outcome`], and how each outcome reads. Counting and the
/// nothing-selected check are shared.
pub trait Criteria: Send + Sync {
    /// Unique identifier (e.g., "adhd", "ptsd").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// The clusters of this domain, in display order.
    fn clusters(&self) -> &[Cluster];

    /// Combine cluster counts into an outcome. Only called when at least one
    /// catalog symptom is selected.
    fn classify(&self, counts: &[ClusterCount]) -> Outcome;

    /// The display message for an outcome.
    fn describe(&self, outcome: &Outcome) -> String;

    /// Every symptom across all clusters, in display order.
    fn symptoms(&self) -> Vec<&Symptom> {
        self.clusters().iter().flat_map(|c| &c.symptoms).collect()
    }

    /// Look up a symptom of this catalog by id.
    fn find_symptom(&self, symptom_id: &str) -> Result<&Symptom, CriteriaError> {
        self.clusters()
            .iter()
            .flat_map(|c| &c.symptoms)
            .find(|s| s.id == symptom_id)
            .ok_or_else(|| CriteriaError::UnknownSymptom {
                criteria_id: self.id().to_string(),
                symptom_id: symptom_id.to_string(),
            })
    }

    /// Selected-symptom counts per cluster, ignoring ids outside the catalog.
    fn count_by_cluster(&self, selection: &SelectionState) -> Vec<ClusterCount> {
        scoring::count_by_cluster(self.clusters(), selection)
    }

    /// Counts, outcome and message for a selection. Pending when no catalog
    /// symptom is selected.
    fn evaluate(&self, selection: &SelectionState) -> Verdict {
        let counts = self.count_by_cluster(selection);
        let outcome = if counts.iter().all(|c| c.selected == 0) {
            Outcome::Pending
        } else {
            self.classify(&counts)
        };
        let message = self.describe(&outcome);
        Verdict {
            criteria_id: self.id().to_string(),
            counts,
            outcome,
            message,
        }
    }
}

/// Return all registered criteria sets.
pub fn all_criteria() -> Vec<Box<dyn Criteria>> {
    vec![
        Box::new(criteria::adhd::Adhd),
        Box::new(criteria::ptsd::Ptsd),
        Box::new(criteria::psychosis::Psychosis),
    ]
}

/// Look up a criteria set by ID.
pub fn get_criteria(id: &str) -> Option<Box<dyn Criteria>> {
    all_criteria().into_iter().find(|c| c.id() == id)
}

/// Like [`get_criteria`], but reports the unknown ID as an error.
pub fn require_criteria(id: &str) -> Result<Box<dyn Criteria>, CriteriaError> {
    get_criteria(id).ok_or_else(|| CriteriaError::UnknownCriteria(id.to_string()))
}
