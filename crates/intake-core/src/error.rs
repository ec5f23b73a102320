//! Error types shared across intake-core.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything a repository operation can fail with.
///
/// `NotFound` is the only failure the CRUD contract itself produces; callers
/// are expected to surface it as a user-facing message and optionally offer
/// a retry. Nothing here is fatal.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No record with the requested id exists in the collection.
    #[error("{kind} with Id {id} not found")]
    NotFound { kind: &'static str, id: u32 },

    /// A status string at the boundary did not name a known variant.
    #[error("unknown enquiry status {0:?}")]
    UnknownStatus(String),

    /// A bundled seed document failed to parse.
    #[error("malformed seed data: {0}")]
    Seed(#[from] serde_json::Error),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
