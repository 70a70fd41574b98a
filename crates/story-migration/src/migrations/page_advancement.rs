//! v1: story-level page advancement defaults

use crate::error::MigrationError;
use crate::migration::Migration;
use serde_json::{json, Value};

/// Add `autoAdvance` / `defaultPageDuration` defaults at the story level
///
/// Defaults-only: explicit prior values are never overwritten.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PageAdvancement;

impl Migration for PageAdvancement {
    fn version(&self) -> u32 {
        1
    }

    fn apply(&self, mut doc: Value) -> Result<Value, MigrationError> {
        let obj = doc.as_object_mut().ok_or(MigrationError::NotAnObject)?;
        obj.entry("autoAdvance").or_insert(json!(true));
        obj.entry("defaultPageDuration").or_insert(json!(7));
        Ok(doc)
    }
}
