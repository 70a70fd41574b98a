//! Testing utilities for the story workspace
//!
//! Shared fixtures: typed documents for reducer tests and raw legacy JSON
//! for migration tests.

#![allow(missing_docs)]

use serde_json::{json, Value};
use story_model::{
    Element, ElementId, ElementKind, Group, GroupId, Padding, Page, PageId, StoryDocument,
    StoryMetadata,
};

pub fn text_element(id: &str) -> Element {
    Element {
        id: ElementId::from(id),
        is_background: false,
        group_id: None,
        opacity: Some(100.0),
        kind: ElementKind::Text {
            content: format!("<span>{id}</span>"),
            padding: Padding::default(),
        },
        extra: serde_json::Map::new(),
    }
}

pub fn background_shape(id: &str) -> Element {
    Element {
        id: ElementId::from(id),
        is_background: true,
        group_id: None,
        opacity: Some(100.0),
        kind: ElementKind::Shape {
            background_color: None,
        },
        extra: serde_json::Map::new(),
    }
}

pub fn grouped_element(id: &str, group: &str) -> Element {
    Element {
        group_id: Some(GroupId::from(group)),
        ..text_element(id)
    }
}

pub fn page_with_elements(id: &str, elements: Vec<Element>) -> Page {
    Page {
        id: PageId::from(id),
        elements,
        ..Page::new()
    }
}

pub fn page_with_group(id: &str, group: &str, elements: Vec<Element>) -> Page {
    let mut page = page_with_elements(id, elements);
    page.groups.insert(GroupId::from(group), Group::new(group));
    page
}

pub fn story_document(version: u32, pages: Vec<Page>) -> StoryDocument {
    StoryDocument {
        version,
        pages,
        story: StoryMetadata {
            title: Some("Fixture story".to_string()),
            auto_advance: Some(true),
            default_page_duration: Some(7.0),
            extra: serde_json::Map::new(),
        },
    }
}

/// Raw persisted JSON in the earliest (unversioned) schema shape
#[must_use]
pub fn legacy_story_json() -> Value {
    json!({
        "title": "Legacy story",
        "pages": [
            {
                "id": "p1",
                "elements": [
                    {
                        "id": "bg1",
                        "type": "shape",
                        "isBackground": true,
                        "backgroundColor": {"color": {"r": 10, "g": 20, "b": 30}}
                    },
                    {
                        "id": "t1",
                        "type": "text",
                        "content": "<span>hello</span>",
                        "padding": 5,
                        "x": 10,
                        "y": 20,
                        "width": 300,
                        "height": 40,
                        "rotationAngle": 0
                    }
                ],
                "groups": {"g1": "Header"}
            },
            {
                "id": "p2",
                "elements": [
                    {
                        "id": "gif1",
                        "type": "gif",
                        "resource": {
                            "src": "https://cdn.example/cat.mp4",
                            "alt": "cat",
                            "output": {"poster": "https://cdn.example/cat.jpg"}
                        }
                    }
                ]
            }
        ]
    })
}
