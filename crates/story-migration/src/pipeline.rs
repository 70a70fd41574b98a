//! Sequential pipeline driver

use crate::error::{LoadError, MigrationError};
use crate::registry::MigrationRegistry;
use serde_json::{json, Value};
use story_model::StoryDocument;
use tracing::debug;

/// Upgrade a raw document to the registry's latest version
///
/// Applies every registered migration whose version is strictly greater than
/// the document's recorded version, in ascending order, stamping the new
/// version after each step. A document with no `version` key (or a
/// non-integer one) is treated as version 0. Running the pipeline on an
/// already-current document is a no-op.
///
/// # Errors
/// - [`MigrationError::NotAnObject`] if the root is not a JSON object
/// - [`MigrationError::VersionAhead`] if the document is newer than the
///   registry
/// - any error raised by an individual migration (fail-fast, no rollback)
pub fn migrate(registry: &MigrationRegistry, doc: Value) -> Result<Value, MigrationError> {
    let mut current = document_version(&doc)?;
    let latest = registry.latest_version();
    if current > latest {
        return Err(MigrationError::VersionAhead {
            found: current,
            latest,
        });
    }

    let mut doc = doc;
    for migration in registry.entries() {
        let target = migration.version();
        if target <= current {
            continue;
        }
        debug!(from = current, to = target, "applying migration");
        doc = migration.apply(doc)?;
        stamp_version(&mut doc, target)?;
        current = target;
    }
    Ok(doc)
}

/// Migrate raw JSON, then deserialize and validate a [`StoryDocument`]
///
/// # Errors
/// Returns [`LoadError`] when migration fails, the migrated document does not
/// match the current schema, or a model invariant is violated.
pub fn load(registry: &MigrationRegistry, doc: Value) -> Result<StoryDocument, LoadError> {
    let migrated = migrate(registry, doc)?;
    let document: StoryDocument = serde_json::from_value(migrated)?;
    document.validate()?;
    Ok(document)
}

/// Recorded schema version; absent or non-integer means 0
fn document_version(doc: &Value) -> Result<u32, MigrationError> {
    let obj = doc.as_object().ok_or(MigrationError::NotAnObject)?;
    let version = obj
        .get("version")
        .and_then(Value::as_u64)
        .map_or(0, |v| u32::try_from(v).unwrap_or(u32::MAX));
    Ok(version)
}

fn stamp_version(doc: &mut Value, version: u32) -> Result<(), MigrationError> {
    let obj = doc.as_object_mut().ok_or(MigrationError::NotAnObject)?;
    obj.insert("version".to_string(), json!(version));
    Ok(())
}
