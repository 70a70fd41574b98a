//! The reducer-owned editor state

use story_model::{Capabilities, Element, ElementId, Page, PageId, StoryDocument, StoryMetadata};

/// Immutable snapshot of the story under edit
///
/// # Invariants (hold after every reducer transition)
/// - `current`, when set, references an existing page
/// - `selection` only references elements on the current page
/// - at most one background element per page
/// - element ids are never reused once assigned
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    /// Story-level properties
    pub story: StoryMetadata,

    /// Pages in presentation order
    pub pages: Vec<Page>,

    /// Currently selected page
    pub current: Option<PageId>,

    /// Selected element ids on the current page; order is selection order
    pub selection: Vec<ElementId>,

    /// Feature flags gating which operations are permitted
    pub capabilities: Capabilities,
}

impl EditorState {
    /// Seed the editor from a migrated document
    ///
    /// The first page becomes current; the selection starts empty.
    #[must_use]
    pub fn from_document(document: StoryDocument, capabilities: Capabilities) -> Self {
        let (story, pages) = document.into_parts();
        let current = pages.first().map(|p| p.id.clone());
        Self {
            story,
            pages,
            current,
            selection: Vec::new(),
            capabilities,
        }
    }

    /// Reassemble a persistable document at the given schema version
    #[must_use]
    pub fn to_document(&self, version: u32) -> StoryDocument {
        StoryDocument::from_parts(version, self.story.clone(), self.pages.clone())
    }

    /// The current page, if one is selected
    #[must_use]
    pub fn current_page(&self) -> Option<&Page> {
        let current = self.current.as_ref()?;
        self.pages.iter().find(|p| &p.id == current)
    }

    /// Index of the current page in `pages`
    pub(crate) fn current_page_index(&self) -> Option<usize> {
        let current = self.current.as_ref()?;
        self.pages.iter().position(|p| &p.id == current)
    }

    /// Whether an element is in the selection
    #[inline]
    #[must_use]
    pub fn is_selected(&self, id: &ElementId) -> bool {
        self.selection.contains(id)
    }

    /// Whether any page contains an element with the given id
    pub(crate) fn document_contains_element(&self, id: &ElementId) -> bool {
        self.pages.iter().any(|p| p.contains_element(id))
    }

    /// Element on the current page, if present there
    pub(crate) fn current_page_element(&self, id: &ElementId) -> Option<&Element> {
        self.current_page()?.element(id)
    }
}
