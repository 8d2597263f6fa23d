use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario parse error: {0}")]
    Parse(String),

    #[error("scenario entry {index}: {reason}")]
    InvalidEntry { index: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for ScenarioError {
    fn from(e: csv::Error) -> Self {
        if !e.is_io_error() {
            return ScenarioError::Parse(e.to_string());
        }
        match e.into_kind() {
            csv::ErrorKind::Io(io) => ScenarioError::Io(io),
            other => ScenarioError::Parse(format!("{other:?}")),
        }
    }
}

impl From<serde_json::Error> for ScenarioError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            ScenarioError::Io(e.into())
        } else {
            ScenarioError::Parse(e.to_string())
        }
    }
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
