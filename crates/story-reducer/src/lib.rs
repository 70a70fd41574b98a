//! Story Editor Reducer
//!
//! Deterministic, pure state transitions over the in-memory story document.
//! The reducer is the only code path that produces a new [`EditorState`];
//! everything else treats the state as read-only.
//!
//! # Core Concepts
//!
//! - [`EditorState`]: immutable snapshot of the document under edit
//! - [`StoryAction`]: the closed set of named operations
//! - [`reduce`]: the dispatcher; invalid payloads degrade to no-ops
//! - [`reduce_with`]: escape hatch for composite operations
//!
//! # No-op detection
//!
//! [`reduce`] takes and returns `Arc<EditorState>` and hands back the *same*
//! allocation when nothing changed, so consumers detect changes with
//! [`Arc::ptr_eq`] instead of deep comparison.
//!
//! # Example
//!
//! ```rust,ignore
//! use story_reducer::{reduce, EditorState, StoryAction};
//!
//! let state = Arc::new(EditorState::from_document(document, capabilities));
//! let next = reduce(&state, StoryAction::SetCurrentPage { page_id });
//! if !Arc::ptr_eq(&state, &next) {
//!     // re-render
//! }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod actions;
mod handlers;
mod reducer;
mod state;

pub use actions::{
    ElementUpdate, GroupUpdate, PageUpdate, StoryAction, StoryPropertiesUpdate, StoryUpdate,
};
pub use reducer::{reduce, reduce_with};
pub use state::EditorState;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
