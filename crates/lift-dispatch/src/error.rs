use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("unknown dispatch strategy {0:?}: expected \"min_wait\" or \"min_idle\"")]
    UnknownStrategy(String),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
