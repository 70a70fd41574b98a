//! v2: text padding normalization

use crate::error::MigrationError;
use crate::migration::Migration;
use crate::migrations::{element_type, map_elements};
use serde_json::{json, Value};

/// Normalize text element `padding` into a `{horizontal, vertical}` object
///
/// A bare number becomes uniform padding, an absent value becomes zero
/// padding, and an already-object-shaped padding is left untouched. Non-text
/// elements have any `padding` key dropped; their other keys pass through.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PaddingToObject;

impl Migration for PaddingToObject {
    fn version(&self) -> u32 {
        2
    }

    fn apply(&self, doc: Value) -> Result<Value, MigrationError> {
        map_elements(doc, |mut element| {
            if element_type(&element) != Some("text") {
                element.remove("padding");
                return element;
            }

            let padding = match element.get("padding") {
                Some(Value::Object(_)) => return element,
                Some(Value::Number(n)) => {
                    let value = n.as_f64().unwrap_or(0.0);
                    json!({"horizontal": value, "vertical": value})
                }
                _ => json!({"horizontal": 0, "vertical": 0}),
            };
            element.insert("padding".to_string(), padding);
            element
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn run(element: Value) -> Value {
        let doc = json!({"pages": [{"elements": [element]}]});
        let result = PaddingToObject.apply(doc).unwrap();
        result["pages"][0]["elements"][0].clone()
    }

    #[test]
    fn numeric_padding_becomes_uniform_object() {
        let element = run(json!({"type": "text", "padding": 5}));
        assert_eq!(
            element["padding"],
            json!({"horizontal": 5.0, "vertical": 5.0})
        );
    }

    #[test]
    fn absent_padding_becomes_zero_object() {
        let element = run(json!({"type": "text", "content": "x"}));
        assert_eq!(element["padding"], json!({"horizontal": 0, "vertical": 0}));
        assert_eq!(element["content"], json!("x"));
    }

    #[test]
    fn object_padding_left_untouched() {
        let element = run(json!({
            "type": "text",
            "padding": {"horizontal": 2, "vertical": 3}
        }));
        assert_eq!(element["padding"], json!({"horizontal": 2, "vertical": 3}));
    }

    #[test]
    fn non_text_padding_dropped_other_keys_kept() {
        let element = run(json!({"type": "image", "padding": 5, "resource": {}}));
        assert!(element.get("padding").is_none());
        assert_eq!(element["resource"], json!({}));
    }
}
