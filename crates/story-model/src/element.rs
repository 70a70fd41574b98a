//! Page elements
//!
//! An [`Element`] is one item on a page. The `type` discriminator in the
//! persisted JSON selects the [`ElementKind`] variant; the variant set is
//! closed, so an unknown tag is a deserialization error rather than a
//! silently carried blob. Element keys outside the modeled set (geometry,
//! animation hooks, ...) are preserved in `extra`.

use crate::color::Color;
use crate::id::{ElementId, GroupId};
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One element on a page
///
/// Serde is implemented by hand: the base fields and the internally tagged
/// [`ElementKind`] payload share one flat JSON object, and the leftover keys
/// land in `extra` instead of being dropped. `extra` never shadows a modeled
/// key; modeled fields win on serialization.
///
/// # Invariants
/// - `id` is globally unique within the document (enforced by
///   [`StoryDocument::validate`](crate::StoryDocument::validate))
/// - at most one element per page carries `is_background`
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Globally unique element id
    pub id: ElementId,

    /// Marks this element as the page's backdrop
    pub is_background: bool,

    /// Layer group this element belongs to, if any
    pub group_id: Option<GroupId>,

    /// Opacity in percent (0-100); absent means the pre-migration legacy shape
    pub opacity: Option<f64>,

    /// Type-specific payload, discriminated by the `type` tag
    pub kind: ElementKind,

    /// Schema-version-dependent element keys (x, y, width, rotation, ...)
    pub extra: Map<String, Value>,
}

impl Element {
    /// Create a foreground element with a fresh id
    #[must_use]
    pub fn new(kind: ElementKind) -> Self {
        Self {
            id: ElementId::new(),
            is_background: false,
            group_id: None,
            opacity: Some(100.0),
            kind,
            extra: Map::new(),
        }
    }

    /// Whether this element carries a media resource
    #[inline]
    #[must_use]
    pub fn is_media(&self) -> bool {
        self.resource().is_some()
    }

    /// Media resource, if this element type carries one
    #[must_use]
    pub fn resource(&self) -> Option<&Resource> {
        match &self.kind {
            ElementKind::Image { resource }
            | ElementKind::Video { resource }
            | ElementKind::Gif { resource }
            | ElementKind::Sticker { resource }
            | ElementKind::Product { resource } => Some(resource),
            ElementKind::Text { .. } | ElementKind::Shape { .. } => None,
        }
    }
}

impl Serialize for Element {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = Map::new();
        map.insert("id".to_string(), Value::String(self.id.to_string()));
        if self.is_background {
            map.insert("isBackground".to_string(), Value::Bool(true));
        }
        if let Some(group_id) = &self.group_id {
            map.insert("groupId".to_string(), Value::String(group_id.to_string()));
        }
        if let Some(opacity) = self.opacity {
            map.insert("opacity".to_string(), Value::from(opacity));
        }
        // internally tagged enums always serialize to objects
        if let Value::Object(kind) = serde_json::to_value(&self.kind).map_err(S::Error::custom)? {
            map.extend(kind);
        }
        for (key, value) in &self.extra {
            map.entry(key.clone()).or_insert_with(|| value.clone());
        }
        map.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Element {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let mut map = Map::deserialize(deserializer)?;

        let id = match map.remove("id") {
            Some(value) => serde_json::from_value(value).map_err(D::Error::custom)?,
            None => return Err(D::Error::missing_field("id")),
        };
        let is_background = match map.remove("isBackground") {
            Some(value) => serde_json::from_value(value).map_err(D::Error::custom)?,
            None => false,
        };
        let group_id = match map.remove("groupId") {
            Some(value) => serde_json::from_value(value).map_err(D::Error::custom)?,
            None => None,
        };
        let opacity = match map.remove("opacity") {
            Some(value) => serde_json::from_value(value).map_err(D::Error::custom)?,
            None => None,
        };

        let kind: ElementKind =
            serde_json::from_value(Value::Object(map.clone())).map_err(D::Error::custom)?;
        map.remove("type");
        for key in kind.payload_keys() {
            map.remove(*key);
        }

        Ok(Self {
            id,
            is_background,
            group_id,
            opacity,
            kind,
            extra: map,
        })
    }
}

/// Type-specific element payload
///
/// Serialized with an internal `type` tag, matching the persisted schema
/// (`{"type": "text", "content": ...}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    /// Rich text run
    #[serde(rename_all = "camelCase")]
    Text {
        /// HTML-ish text content
        content: String,
        /// Inner padding around the content
        #[serde(default)]
        padding: Padding,
    },

    /// Still image
    Image { resource: Resource },

    /// Video clip
    Video { resource: Resource },

    /// Animated gif (stored as optimized video with a poster)
    Gif { resource: Resource },

    /// Sticker from the asset library
    Sticker { resource: Resource },

    /// Shoppable product card
    Product { resource: Resource },

    /// Vector shape
    #[serde(rename_all = "camelCase")]
    Shape {
        /// Fill color; pages derive their backdrop from a background shape's fill
        #[serde(default, skip_serializing_if = "Option::is_none")]
        background_color: Option<Color>,
    },
}

impl ElementKind {
    /// The wire `type` tag for this variant
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Image { .. } => "image",
            Self::Video { .. } => "video",
            Self::Gif { .. } => "gif",
            Self::Sticker { .. } => "sticker",
            Self::Product { .. } => "product",
            Self::Shape { .. } => "shape",
        }
    }

    /// Wire keys this variant's payload occupies, besides the `type` tag
    fn payload_keys(&self) -> &'static [&'static str] {
        match self {
            Self::Text { .. } => &["content", "padding"],
            Self::Shape { .. } => &["backgroundColor"],
            Self::Image { .. }
            | Self::Video { .. }
            | Self::Gif { .. }
            | Self::Sticker { .. }
            | Self::Product { .. } => &["resource"],
        }
    }
}

/// Inner padding of a text element
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub horizontal: f64,
    pub vertical: f64,
}

impl Padding {
    /// Uniform padding on both axes
    #[inline]
    #[must_use]
    pub fn uniform(value: f64) -> Self {
        Self {
            horizontal: value,
            vertical: value,
        }
    }
}

/// Media resource attached to image/video/gif/sticker/product elements
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Resource id (derived from `alt` for legacy gif resources)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Source URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Poster image URL (video/gif)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,

    /// Poster resource id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_id: Option<String>,

    /// Accessible alternative text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    /// Whether the resource has been transcoded/optimized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_optimized: Option<bool>,

    /// Schema-version-dependent resource keys (dimensions, mime type, ...)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
