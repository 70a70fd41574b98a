//! v3: element opacity defaults

use crate::error::MigrationError;
use crate::migration::Migration;
use crate::migrations::map_elements;
use serde_json::{json, Value};

/// Give every element an explicit `opacity`, defaulting to fully opaque
#[derive(Debug, Clone, Copy)]
pub(crate) struct SetDefaultOpacity;

impl Migration for SetDefaultOpacity {
    fn version(&self) -> u32 {
        3
    }

    fn apply(&self, doc: Value) -> Result<Value, MigrationError> {
        map_elements(doc, |mut element| {
            element.entry("opacity").or_insert(json!(100));
            element
        })
    }
}
