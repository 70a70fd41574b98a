//! v4: per-page backdrop color

use crate::error::MigrationError;
use crate::migration::Migration;
use crate::migrations::{element_type, map_pages};
use serde_json::{json, Map, Value};

/// Derive a `backgroundColor` for every page
///
/// When the page's first element is a background shape with a solid fill,
/// that fill becomes the page backdrop; otherwise the backdrop is opaque
/// white. No other page keys are removed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BackgroundColorToPage;

impl Migration for BackgroundColorToPage {
    fn version(&self) -> u32 {
        4
    }

    fn apply(&self, doc: Value) -> Result<Value, MigrationError> {
        map_pages(doc, |mut page| {
            let color = derived_color(&page).unwrap_or_else(white);
            page.insert("backgroundColor".to_string(), color);
            page
        })
    }
}

/// Fill of the first element, when it is a background shape
fn derived_color(page: &Map<String, Value>) -> Option<Value> {
    let first = page.get("elements")?.as_array()?.first()?.as_object()?;
    let is_background = first
        .get("isBackground")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !is_background || element_type(first) != Some("shape") {
        return None;
    }
    first.get("backgroundColor").cloned()
}

fn white() -> Value {
    json!({"color": {"r": 255, "g": 255, "b": 255}})
}
