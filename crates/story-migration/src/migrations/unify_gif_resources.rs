//! v5: legacy gif resource normalization

use crate::error::MigrationError;
use crate::migration::Migration;
use crate::migrations::{element_type, map_elements};
use serde_json::{json, Value};

/// Normalize the `resource` sub-object of legacy gif elements
///
/// Fills in `isOptimized`, derives missing `id` / `posterId` from the alt
/// text, and hoists a nested `output.poster` to the top level, deleting the
/// now-redundant `output` object. Elements of other types pass through
/// untouched.
#[derive(Debug, Clone, Copy)]
pub(crate) struct UnifyGifResources;

impl Migration for UnifyGifResources {
    fn version(&self) -> u32 {
        5
    }

    fn apply(&self, doc: Value) -> Result<Value, MigrationError> {
        map_elements(doc, |mut element| {
            if element_type(&element) != Some("gif") {
                return element;
            }
            if let Some(Value::Object(resource)) = element.get_mut("resource") {
                resource.entry("isOptimized").or_insert(json!(true));

                let alt = resource.get("alt").and_then(Value::as_str).map(String::from);
                if let Some(alt) = alt {
                    resource.entry("id").or_insert_with(|| json!(alt));
                    resource
                        .entry("posterId")
                        .or_insert_with(|| json!(format!("{alt}-poster")));
                }

                let hoisted = resource
                    .remove("output")
                    .and_then(|output| output.get("poster").cloned());
                if let Some(poster) = hoisted {
                    resource.entry("poster").or_insert(poster);
                }
            }
            element
        })
    }
}
