//! The [`Migration`] trait

use crate::error::MigrationError;
use serde_json::Value;
use std::fmt::Debug;

/// One version-to-version document rewrite
///
/// Implement this for each schema version. The pipeline applies each
/// migration exactly once, to documents whose recorded version is strictly
/// below [`version`](Migration::version), and stamps the new version
/// afterwards; implementations never touch the `version` key themselves.
///
/// # Contract
/// - Pure: same input document, same output document
/// - Rebuilds pages/elements by mapping rather than aliasing shared state
/// - May fail on malformed shape (e.g. `pages` not an array); the pipeline
///   does not catch such errors
pub trait Migration: Debug + Send + Sync {
    /// Schema version this migration produces
    fn version(&self) -> u32;

    /// Rewrite a document from the previous schema version
    ///
    /// # Errors
    /// Returns an error when the document shape is too malformed to rewrite.
    fn apply(&self, doc: Value) -> Result<Value, MigrationError>;
}
