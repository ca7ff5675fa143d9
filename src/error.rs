use thiserror::Error;

/// Domain errors surfaced to the caller of a user-initiated action.
///
/// `InvalidCredentials` deliberately covers both "unknown email" and
/// "wrong password" so a failed login does not reveal which one it was.
#[derive(Debug, Error)]
pub enum Error {
    #[error("email already registered")]
    DuplicateEmail,

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid credentials")]
    InvalidCredentials,

    /// The targeted record is not in the collection. Mutations return this
    /// instead of silently doing nothing, so callers can tell a stale id
    /// apart from success.
    #[error("record not found")]
    NotFound,

    /// The store refused the write for capacity reasons. The previously
    /// persisted collection is left untouched.
    #[error("storage quota exceeded")]
    QuotaExceeded,

    #[error("storage i/o: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
