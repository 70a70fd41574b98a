//! Per-concern reducer handlers
//!
//! Every handler is a pure function `(state, payload) -> Option<EditorState>`
//! where `None` means no-op: unresolvable ids, empty updates, and merges that
//! change nothing all degrade to `None` so the dispatcher can hand back the
//! unchanged snapshot. Handlers never reorder pages or elements implicitly;
//! reordering is its own operation.

pub(crate) mod element;
pub(crate) mod group;
pub(crate) mod page;
pub(crate) mod selection;
pub(crate) mod story;

use crate::state::EditorState;
use story_model::Page;

/// Clone the state and rewrite the page at `index` through `f`
///
/// Returns `None` when the rewrite leaves the page deeply equal to the
/// original, so value-preserving merges stay no-ops.
pub(crate) fn with_page_at<F>(state: &EditorState, index: usize, f: F) -> Option<EditorState>
where
    F: FnOnce(&mut Page),
{
    let mut next = state.clone();
    let page = next.pages.get_mut(index)?;
    f(page);
    if *page == state.pages[index] {
        return None;
    }
    Some(next)
}
