#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("{0}")]
    Gateway(String),
}
