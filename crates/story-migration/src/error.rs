//! Error types for the migration pipeline
//!
//! Migrations are fail-fast: an error aborts the load with no rollback and
//! no partial re-application (the per-step version tag makes a retry resume
//! from the last completed step).

/// Errors surfaced by the pipeline or by individual migrations
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// The document root is not a JSON object
    #[error("document is not a JSON object")]
    NotAnObject,

    /// The document has no `pages` array
    #[error("document has no pages array")]
    MissingPages,

    /// The document claims a version newer than the registry knows
    #[error("document version {found} is ahead of latest known version {latest}")]
    VersionAhead { found: u32, latest: u32 },

    /// A registered migration does not strictly increase the version
    #[error("migration version {incoming} must be greater than {current}")]
    NonMonotonicVersion { incoming: u32, current: u32 },
}

/// Errors from [`load`](crate::load): migrate, deserialize, validate
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A migration step failed
    #[error("migration failed: {0}")]
    Migration(#[from] MigrationError),

    /// The migrated document does not match the current schema
    #[error("document does not match current schema: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// The migrated document violates a model invariant
    #[error("invalid document: {0}")]
    Invalid(#[from] story_model::ModelError),
}
