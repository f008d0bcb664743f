use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GateError {
    #[error("Invalid candidate version '{0}': expected MAJOR.MINOR.PATCH")]
    InvalidCandidate(String),
}
