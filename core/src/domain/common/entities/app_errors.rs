use thiserror::Error;

/// Domain failure taxonomy. The message carried by each variant is returned
/// verbatim in HTTP response bodies, so the texts are part of the observable
/// contract and are asserted by tests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidState(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Unauthorized(String),

    /// A permission token reached the evaluator in a form other than a plain
    /// textual action name. Surfaced as a server-side security fault, never
    /// as user input error.
    #[error("{0}")]
    InvalidPermission(String),

    #[error("Internal server error")]
    InternalServerError,
}
