//! Story Document Model
//!
//! Typed representation of the persisted story schema and the values the
//! editor reducer works on.
//!
//! # Core Concepts
//!
//! - [`StoryDocument`]: the persisted, versioned story (metadata + pages)
//! - [`Page`]: ordered element container; element order is z-order
//! - [`Element`]: one item on a page, discriminated by [`ElementKind`]
//! - [`Group`]: named layer group, keyed by [`GroupId`] on its page
//! - [`Capabilities`]: feature flags gating editor operations
//!
//! # Example
//!
//! ```rust,ignore
//! use story_model::{StoryDocument, Element, ElementKind};
//!
//! let doc: StoryDocument = serde_json::from_value(raw)?;
//! doc.validate()?;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod color;
mod element;
mod error;
mod id;
mod page;
mod story;

pub use color::{Channels, Color};
pub use element::{Element, ElementKind, Padding, Resource};
pub use error::ModelError;
pub use id::{ElementId, GroupId, PageId};
pub use page::{Group, Page};
pub use story::{Capabilities, StoryDocument, StoryMetadata};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
