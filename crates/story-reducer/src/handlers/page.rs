//! Page handlers: insertion, deletion, ordering, navigation

use crate::actions::PageUpdate;
use crate::handlers::with_page_at;
use crate::state::EditorState;
use story_model::{Page, PageId};

/// Insert a page, optionally at a position, optionally selecting it
///
/// No-op when the page id or any of its element ids already exist in the
/// document, when the page carries duplicate element ids, when it
/// designates more than one background element, or when an element
/// references a group the page does not define. `None` position inserts
/// right after the current page (or appends when there is none).
pub(crate) fn add_page(
    state: &EditorState,
    page: Page,
    position: Option<usize>,
    select: bool,
) -> Option<EditorState> {
    if state.pages.iter().any(|p| p.id == page.id) {
        return None;
    }
    if !page_is_well_formed(&page) {
        return None;
    }
    if page
        .elements
        .iter()
        .any(|e| state.document_contains_element(&e.id))
    {
        return None;
    }

    let index = position.map_or_else(
        || state.current_page_index().map_or(state.pages.len(), |i| i + 1),
        |p| p.min(state.pages.len()),
    );

    let mut next = state.clone();
    if select {
        next.current = Some(page.id.clone());
        next.selection.clear();
    }
    next.pages.insert(index, page);
    Some(next)
}

/// Delete a page by id
///
/// Deleting the current page moves `current` to the page now occupying the
/// freed position (or the new last page), clearing the selection; an empty
/// document clears `current` entirely.
pub(crate) fn delete_page(state: &EditorState, page_id: &PageId) -> Option<EditorState> {
    let index = state.pages.iter().position(|p| &p.id == page_id)?;

    let mut next = state.clone();
    next.pages.remove(index);

    if state.current.as_ref() == Some(page_id) {
        next.current = next
            .pages
            .get(index)
            .or_else(|| next.pages.last())
            .map(|p| p.id.clone());
        next.selection.clear();
    }
    Some(next)
}

/// Move a page to a new position (clamped); the explicit page reorder
pub(crate) fn arrange_page(
    state: &EditorState,
    page_id: &PageId,
    position: usize,
) -> Option<EditorState> {
    let from = state.pages.iter().position(|p| &p.id == page_id)?;
    let to = position.min(state.pages.len() - 1);
    if from == to {
        return None;
    }

    let mut next = state.clone();
    let page = next.pages.remove(from);
    next.pages.insert(to, page);
    Some(next)
}

/// Make a page current and clear the selection; unknown ids are no-ops
pub(crate) fn set_current_page(state: &EditorState, page_id: &PageId) -> Option<EditorState> {
    if state.current.as_ref() == Some(page_id) {
        return None;
    }
    if !state.pages.iter().any(|p| &p.id == page_id) {
        return None;
    }

    let mut next = state.clone();
    next.current = Some(page_id.clone());
    next.selection.clear();
    Some(next)
}

/// Merge properties into the current page, one level deep
pub(crate) fn update_current_page_properties(
    state: &EditorState,
    properties: &PageUpdate,
) -> Option<EditorState> {
    if properties.is_empty() {
        return None;
    }
    let index = state.current_page_index()?;
    with_page_at(state, index, |page| properties.apply_to(page))
}

fn page_is_well_formed(page: &Page) -> bool {
    let unique_ids = page
        .elements
        .iter()
        .map(|e| &e.id)
        .collect::<std::collections::HashSet<_>>()
        .len();
    let backgrounds = page.elements.iter().filter(|e| e.is_background).count();
    let groups_resolve = page.elements.iter().all(|e| {
        e.group_id
            .as_ref()
            .map_or(true, |g| page.groups.contains_key(g))
    });
    unique_ids == page.elements.len() && backgrounds <= 1 && groups_resolve
}
