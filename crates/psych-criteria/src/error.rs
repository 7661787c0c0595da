use thiserror::Error;

#[derive(Debug, Error)]
pub enum CriteriaError {
    #[error("unknown criteria set: {0}")]
    UnknownCriteria(String),

    #[error("unknown symptom '{symptom_id}' for criteria set '{criteria_id}'")]
    UnknownSymptom {
        criteria_id: String,
        symptom_id: String,
    },
}
