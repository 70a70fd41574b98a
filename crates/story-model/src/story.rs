//! The story document and its metadata

use crate::error::ModelError;
use crate::id::ElementId;
use crate::page::Page;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Persisted story document, tagged with its schema version
///
/// The migration pipeline upgrades raw JSON to the current schema before it
/// is deserialized into this type; see the `story-migration` crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryDocument {
    /// Schema version, monotonically increasing
    pub version: u32,

    /// Pages in presentation order
    pub pages: Vec<Page>,

    /// Story-level properties
    #[serde(flatten)]
    pub story: StoryMetadata,
}

impl StoryDocument {
    /// Check document-wide invariants
    ///
    /// # Errors
    /// - [`ModelError::DuplicatePageId`] if two pages share an id
    /// - [`ModelError::DuplicateElementId`] if an element id appears twice
    ///   anywhere in the document
    /// - [`ModelError::MultipleBackgroundElements`] if a page designates more
    ///   than one background element
    /// - [`ModelError::UnknownGroup`] if an element references a group its
    ///   page does not define
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut page_ids = HashSet::new();
        let mut element_ids: HashSet<&ElementId> = HashSet::new();

        for page in &self.pages {
            if !page_ids.insert(&page.id) {
                return Err(ModelError::DuplicatePageId(page.id.clone()));
            }

            let mut backgrounds = 0;
            for element in &page.elements {
                if !element_ids.insert(&element.id) {
                    return Err(ModelError::DuplicateElementId(element.id.clone()));
                }
                if element.is_background {
                    backgrounds += 1;
                }
                if let Some(group_id) = &element.group_id {
                    if !page.groups.contains_key(group_id) {
                        return Err(ModelError::UnknownGroup {
                            element: element.id.clone(),
                            group: group_id.clone(),
                        });
                    }
                }
            }

            if backgrounds > 1 {
                return Err(ModelError::MultipleBackgroundElements(page.id.clone()));
            }
        }

        Ok(())
    }

    /// Split into the reducer-owned parts
    #[must_use]
    pub fn into_parts(self) -> (StoryMetadata, Vec<Page>) {
        (self.story, self.pages)
    }

    /// Reassemble a document for persistence
    #[inline]
    #[must_use]
    pub fn from_parts(version: u32, story: StoryMetadata, pages: Vec<Page>) -> Self {
        Self {
            version,
            pages,
            story,
        }
    }
}

/// Story-level properties (the document minus `version` and `pages`)
///
/// The key set evolves across schema versions; keys this crate does not model
/// explicitly are preserved in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryMetadata {
    /// Story title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Whether pages advance automatically during playback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_advance: Option<bool>,

    /// Seconds a page stays up when auto-advancing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_page_duration: Option<f64>,

    /// Remaining story-level keys
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Feature flags gating editor operations
///
/// Read-only once the editor is seeded; carried inside the editor state so no
/// handler reaches for ambient globals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    /// Whether document-mutating operations are permitted
    pub can_edit: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self { can_edit: true }
    }
}
