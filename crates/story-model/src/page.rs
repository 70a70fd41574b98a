//! Pages and layer groups

use crate::color::Color;
use crate::element::Element;
use crate::id::{ElementId, GroupId, PageId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One page of a story
///
/// Element order is z-order: index 0 is the bottom layer (the background
/// element when the page has one), the last index is the top layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Unique page id within the document
    pub id: PageId,

    /// Elements in z-order
    #[serde(default)]
    pub elements: Vec<Element>,

    /// Page backdrop color, shown behind/around the background element
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,

    /// Layer groups, keyed by group id (insertion-ordered for stable output)
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub groups: IndexMap<GroupId, Group>,

    /// Schema-version-dependent page keys
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Page {
    /// Create an empty page with a fresh id
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: PageId::new(),
            elements: Vec::new(),
            background_color: None,
            groups: IndexMap::new(),
            extra: serde_json::Map::new(),
        }
    }

    /// Look up an element by id
    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| &e.id == id)
    }

    /// Position of an element in the z-order
    #[must_use]
    pub fn element_position(&self, id: &ElementId) -> Option<usize> {
        self.elements.iter().position(|e| &e.id == id)
    }

    /// The page's background element, if one is designated
    #[must_use]
    pub fn background_element(&self) -> Option<&Element> {
        self.elements.iter().find(|e| e.is_background)
    }

    /// Whether the page contains an element with the given id
    #[inline]
    #[must_use]
    pub fn contains_element(&self, id: &ElementId) -> bool {
        self.element(id).is_some()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

/// Named layer group on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Display name
    pub name: String,

    /// Locked groups cannot be edited from the canvas
    #[serde(default)]
    pub is_locked: bool,
}

impl Group {
    /// Create an unlocked group
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_locked: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementKind, Padding};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn text(id: &str) -> Element {
        Element {
            id: ElementId::from(id),
            is_background: false,
            group_id: None,
            opacity: Some(100.0),
            kind: ElementKind::Text {
                content: String::new(),
                padding: Padding::default(),
            },
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn element_lookup_by_id() {
        let mut page = Page::new();
        page.elements = vec![text("a"), text("b")];

        assert!(page.contains_element(&ElementId::from("a")));
        assert_eq!(page.element_position(&ElementId::from("b")), Some(1));
        assert!(page.element(&ElementId::from("c")).is_none());
    }

    #[test]
    fn background_element_lookup() {
        let mut page = Page::new();
        let mut bg = text("bg");
        bg.is_background = true;
        page.elements = vec![bg, text("fg")];

        assert_eq!(page.background_element().unwrap().id.as_str(), "bg");
    }

    #[test]
    fn page_preserves_unknown_keys() {
        let raw = json!({
            "id": "p1",
            "elements": [],
            "animations": [{"id": "anim-1"}]
        });
        let page: Page = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(page.extra.get("animations"), Some(&json!([{"id": "anim-1"}])));
        assert_eq!(serde_json::to_value(&page).unwrap(), raw);
    }

    #[test]
    fn groups_round_trip_in_insertion_order() {
        let mut page = Page::new();
        page.groups.insert(GroupId::from("g2"), Group::new("Second"));
        page.groups.insert(GroupId::from("g1"), Group::new("First"));

        let json = serde_json::to_string(&page).unwrap();
        let g2 = json.find("\"g2\"").unwrap();
        let g1 = json.find("\"g1\"").unwrap();
        assert!(g2 < g1);
    }
}
