use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("match has no roster data")]
    EmptyRoster,
    #[error("account {0} not found in match roster")]
    SubjectNotFound(i64),
}
