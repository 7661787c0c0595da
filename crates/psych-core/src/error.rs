use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown page: {0}")]
    UnknownRoute(String),

    #[error("no case studies for page: {0}")]
    UnknownCaseSet(String),

    #[error("unknown personality cluster: {0}")]
    UnknownCluster(String),

    #[error("quiz has no questions")]
    EmptyQuiz,

    #[error("question {id} marks option {correct_index} correct but has {options} options")]
    InvalidAnswer {
        id: u32,
        correct_index: usize,
        options: usize,
    },
}
