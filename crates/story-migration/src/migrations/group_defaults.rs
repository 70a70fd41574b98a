//! v6: layer group normalization

use crate::error::MigrationError;
use crate::migration::Migration;
use crate::migrations::map_pages;
use serde_json::{json, Value};

/// Normalize page `groups` entries to `{name, isLocked}` objects
///
/// Legacy documents stored a bare name string per group id.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GroupDefaults;

impl Migration for GroupDefaults {
    fn version(&self) -> u32 {
        6
    }

    fn apply(&self, doc: Value) -> Result<Value, MigrationError> {
        map_pages(doc, |mut page| {
            if let Some(Value::Object(groups)) = page.get_mut("groups") {
                for entry in groups.values_mut() {
                    match entry {
                        Value::String(name) => {
                            let name = name.clone();
                            *entry = json!({"name": name, "isLocked": false});
                        }
                        Value::Object(group) => {
                            group.entry("isLocked").or_insert(json!(false));
                        }
                        _ => {}
                    }
                }
            }
            page
        })
    }
}
