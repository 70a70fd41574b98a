//! Reducer actions and their typed update payloads
//!
//! Each variant of [`StoryAction`] is one named operation of the closed set;
//! unknown operations are unrepresentable. Update payloads are explicit
//! structs with optional fields merged last-write-wins, one level deep,
//! never a deep merge.

use serde_json::Value;
use story_model::{Color, Element, ElementId, GroupId, Padding, Page, PageId, StoryMetadata};

/// One named state-transition operation
///
/// Every action is handled purely; structurally invalid payloads (unknown
/// ids, empty updates) degrade to no-ops rather than errors.
#[derive(Debug, Clone, PartialEq)]
pub enum StoryAction {
    /// Insert a page, optionally at a position (clamped), optionally
    /// selecting it. A page id or element id already present in the document
    /// makes this a no-op.
    AddPage {
        /// Page to insert.
        page: Page,
        /// Insertion position; `None` appends after the current page.
        position: Option<usize>,
        /// Whether the new page becomes current.
        select: bool,
    },
    /// Delete a page by id. Deleting the current page moves `current` to the
    /// nearest remaining page, or clears it when the document becomes empty.
    DeletePage {
        /// Page to delete.
        page_id: PageId,
    },
    /// Move a page to a new position (clamped). The explicit page reorder.
    ArrangePage {
        /// Page to move.
        page_id: PageId,
        /// Target position.
        position: usize,
    },
    /// Make a page current and clear the selection.
    SetCurrentPage {
        /// Page to select.
        page_id: PageId,
    },
    /// Merge properties into the current page, one level deep.
    UpdateCurrentPageProperties {
        /// Fields to merge.
        properties: PageUpdate,
    },
    /// Merge or replace the story-level properties.
    UpdateStory {
        /// Merge or wholesale replacement.
        properties: StoryUpdate,
    },
    /// Append elements to the top of the current page's z-order and select
    /// them. Any id collision anywhere in the document voids the whole
    /// action, as does an incoming background flag.
    AddElements {
        /// Elements to add.
        elements: Vec<Element>,
    },
    /// Delete elements from the current page; unknown ids are ignored and
    /// the background element is not deletable this way.
    DeleteElements {
        /// Elements to delete.
        element_ids: Vec<ElementId>,
    },
    /// Merge properties into each listed element on the current page.
    UpdateElements {
        /// Elements to update.
        element_ids: Vec<ElementId>,
        /// Fields to merge.
        properties: ElementUpdate,
    },
    /// Designate an element as the page background: clears the previous
    /// flag, sets the new one, and moves the element to the z-order bottom.
    SetBackgroundElement {
        /// Element to designate.
        element_id: ElementId,
    },
    /// Move an element within the current page's z-order (clamped; the
    /// background element is pinned at the bottom). The explicit element
    /// reorder.
    ArrangeElement {
        /// Element to move.
        element_id: ElementId,
        /// Target position.
        position: usize,
    },
    /// Replace the selection; ids are filtered to the current page and the
    /// background element is excluded from multi-selection.
    SetSelectedElements {
        /// New selection, in order.
        element_ids: Vec<ElementId>,
    },
    /// Add one element to the selection.
    SelectElement {
        /// Element to select.
        element_id: ElementId,
    },
    /// Remove one element from the selection.
    UnselectElement {
        /// Element to unselect.
        element_id: ElementId,
    },
    /// Add the element to the selection if absent, remove it if present.
    ToggleElementInSelection {
        /// Element to toggle.
        element_id: ElementId,
    },
    /// Insert or overwrite a layer group on the current page. Empty id or
    /// name makes this a no-op.
    AddGroup {
        /// Group id.
        group_id: GroupId,
        /// Display name.
        name: String,
        /// Whether the group starts locked.
        is_locked: bool,
    },
    /// Merge properties into an existing group on the current page; a
    /// missing group makes this a no-op.
    UpdateGroup {
        /// Group to update.
        group_id: GroupId,
        /// Fields to merge.
        properties: GroupUpdate,
    },
    /// Remove a group from the current page and detach its member elements.
    DeleteGroup {
        /// Group to delete.
        group_id: GroupId,
    },
}

impl StoryAction {
    /// Whether this action mutates the document (as opposed to navigation
    /// and selection, which stay live in read-only sessions)
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            Self::SetCurrentPage { .. }
                | Self::SetSelectedElements { .. }
                | Self::SelectElement { .. }
                | Self::UnselectElement { .. }
                | Self::ToggleElementInSelection { .. }
        )
    }

    /// Stable operation name, for logging
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddPage { .. } => "addPage",
            Self::DeletePage { .. } => "deletePage",
            Self::ArrangePage { .. } => "arrangePage",
            Self::SetCurrentPage { .. } => "setCurrentPage",
            Self::UpdateCurrentPageProperties { .. } => "updateCurrentPageProperties",
            Self::UpdateStory { .. } => "updateStory",
            Self::AddElements { .. } => "addElements",
            Self::DeleteElements { .. } => "deleteElements",
            Self::UpdateElements { .. } => "updateElements",
            Self::SetBackgroundElement { .. } => "setBackgroundElement",
            Self::ArrangeElement { .. } => "arrangeElement",
            Self::SetSelectedElements { .. } => "setSelectedElements",
            Self::SelectElement { .. } => "selectElement",
            Self::UnselectElement { .. } => "unselectElement",
            Self::ToggleElementInSelection { .. } => "toggleElementInSelection",
            Self::AddGroup { .. } => "addGroup",
            Self::UpdateGroup { .. } => "updateGroup",
            Self::DeleteGroup { .. } => "deleteGroup",
        }
    }
}

/// Merge-or-replace payload for [`StoryAction::UpdateStory`]
#[derive(Debug, Clone, PartialEq)]
pub enum StoryUpdate {
    /// Shallow-merge the set fields; existing keys not named survive.
    Merge(StoryPropertiesUpdate),
    /// Replace the story properties entirely.
    Replace(StoryMetadata),
}

/// Partial story-level properties; set fields overwrite, unset survive
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoryPropertiesUpdate {
    pub title: Option<String>,
    pub auto_advance: Option<bool>,
    pub default_page_duration: Option<f64>,
    /// Schema-version-dependent keys, merged key-by-key
    pub extra: serde_json::Map<String, Value>,
}

impl StoryPropertiesUpdate {
    pub(crate) fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.auto_advance.is_none()
            && self.default_page_duration.is_none()
            && self.extra.is_empty()
    }

    pub(crate) fn apply_to(&self, story: &mut StoryMetadata) {
        if let Some(title) = &self.title {
            story.title = Some(title.clone());
        }
        if let Some(auto_advance) = self.auto_advance {
            story.auto_advance = Some(auto_advance);
        }
        if let Some(duration) = self.default_page_duration {
            story.default_page_duration = Some(duration);
        }
        for (key, value) in &self.extra {
            story.extra.insert(key.clone(), value.clone());
        }
    }
}

/// Partial page properties for the current page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageUpdate {
    pub background_color: Option<Color>,
    /// Schema-version-dependent keys, merged key-by-key
    pub extra: serde_json::Map<String, Value>,
}

impl PageUpdate {
    pub(crate) fn is_empty(&self) -> bool {
        self.background_color.is_none() && self.extra.is_empty()
    }

    pub(crate) fn apply_to(&self, page: &mut Page) {
        if let Some(color) = self.background_color {
            page.background_color = Some(color);
        }
        for (key, value) in &self.extra {
            page.extra.insert(key.clone(), value.clone());
        }
    }
}

/// Partial element properties
///
/// `content` and `padding` only apply to text elements; they are silently
/// skipped for other kinds (per-field, not per-action).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementUpdate {
    pub opacity: Option<f64>,
    pub group_id: Option<GroupId>,
    pub content: Option<String>,
    pub padding: Option<Padding>,
    /// Schema-version-dependent keys (geometry, ...), merged key-by-key
    pub extra: serde_json::Map<String, Value>,
}

impl ElementUpdate {
    pub(crate) fn is_empty(&self) -> bool {
        self.opacity.is_none()
            && self.group_id.is_none()
            && self.content.is_none()
            && self.padding.is_none()
            && self.extra.is_empty()
    }

    pub(crate) fn apply_to(&self, element: &mut Element) {
        use story_model::ElementKind;

        if let Some(opacity) = self.opacity {
            element.opacity = Some(opacity);
        }
        if let Some(group_id) = &self.group_id {
            element.group_id = Some(group_id.clone());
        }
        if let ElementKind::Text { content, padding } = &mut element.kind {
            if let Some(new_content) = &self.content {
                content.clone_from(new_content);
            }
            if let Some(new_padding) = self.padding {
                *padding = new_padding;
            }
        }
        for (key, value) in &self.extra {
            element.extra.insert(key.clone(), value.clone());
        }
    }
}

/// Partial group properties
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupUpdate {
    pub name: Option<String>,
    pub is_locked: Option<bool>,
}

impl GroupUpdate {
    pub(crate) fn is_empty(&self) -> bool {
        self.name.is_none() && self.is_locked.is_none()
    }
}
