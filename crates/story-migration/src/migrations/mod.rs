//! Built-in migration chain
//!
//! One module per schema version. The chain is the product's schema history:
//! append a new module (and `default_chain` entry) for each new version,
//! never edit or reorder shipped entries.

use crate::error::MigrationError;
use crate::migration::Migration;
use serde_json::{Map, Value};

mod background_color_to_page;
mod group_defaults;
mod padding_to_object;
mod page_advancement;
mod set_default_opacity;
mod unify_gif_resources;

pub(crate) use background_color_to_page::BackgroundColorToPage;
pub(crate) use group_defaults::GroupDefaults;
pub(crate) use padding_to_object::PaddingToObject;
pub(crate) use page_advancement::PageAdvancement;
pub(crate) use set_default_opacity::SetDefaultOpacity;
pub(crate) use unify_gif_resources::UnifyGifResources;

/// The built-in chain, ascending by version
pub(crate) fn default_chain() -> Vec<Box<dyn Migration>> {
    vec![
        Box::new(PageAdvancement),
        Box::new(PaddingToObject),
        Box::new(SetDefaultOpacity),
        Box::new(BackgroundColorToPage),
        Box::new(UnifyGifResources),
        Box::new(GroupDefaults),
    ]
}

/// Rebuild every page object through `f`, leaving non-object entries alone
///
/// # Errors
/// Returns [`MigrationError::MissingPages`] when `pages` is absent or not an
/// array.
pub(crate) fn map_pages<F>(doc: Value, mut f: F) -> Result<Value, MigrationError>
where
    F: FnMut(Map<String, Value>) -> Map<String, Value>,
{
    let Value::Object(mut obj) = doc else {
        return Err(MigrationError::NotAnObject);
    };
    let pages = match obj.remove("pages") {
        Some(Value::Array(pages)) => pages,
        _ => return Err(MigrationError::MissingPages),
    };

    let pages = pages
        .into_iter()
        .map(|page| match page {
            Value::Object(page) => Value::Object(f(page)),
            other => other,
        })
        .collect();

    obj.insert("pages".to_string(), Value::Array(pages));
    Ok(Value::Object(obj))
}

/// Rebuild every element object on every page through `f`
///
/// # Errors
/// Same shape requirements as [`map_pages`]; pages without an `elements`
/// array pass through untouched.
pub(crate) fn map_elements<F>(doc: Value, mut f: F) -> Result<Value, MigrationError>
where
    F: FnMut(Map<String, Value>) -> Map<String, Value>,
{
    map_pages(doc, |mut page| {
        if let Some(Value::Array(elements)) = page.remove("elements") {
            let elements = elements
                .into_iter()
                .map(|element| match element {
                    Value::Object(element) => Value::Object(f(element)),
                    other => other,
                })
                .collect();
            page.insert("elements".to_string(), Value::Array(elements));
        }
        page
    })
}

/// The element's `type` discriminator, if present
pub(crate) fn element_type(element: &Map<String, Value>) -> Option<&str> {
    element.get("type").and_then(Value::as_str)
}
