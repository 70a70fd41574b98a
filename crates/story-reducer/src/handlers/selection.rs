//! Selection handlers
//!
//! The selection is scoped to the current page. The background element may
//! only ever be selected alone; multi-selections silently drop it.

use crate::state::EditorState;
use story_model::ElementId;

/// Replace the selection
///
/// Ids are deduplicated, filtered to elements on the current page, and the
/// background element is dropped from multi-selections. A resulting
/// selection equal to the existing one is a no-op.
pub(crate) fn set_selected_elements(
    state: &EditorState,
    element_ids: Vec<ElementId>,
) -> Option<EditorState> {
    let page = state.current_page()?;

    let mut filtered: Vec<ElementId> = Vec::new();
    for id in element_ids {
        if page.contains_element(&id) && !filtered.contains(&id) {
            filtered.push(id);
        }
    }
    if filtered.len() > 1 {
        filtered.retain(|id| page.element(id).is_some_and(|e| !e.is_background));
    }

    if filtered == state.selection {
        return None;
    }

    let mut next = state.clone();
    next.selection = filtered;
    Some(next)
}

/// Add one element to the selection
///
/// The background element can only be selected into an empty selection;
/// conversely, adding a foreground element to a background-only selection
/// replaces it.
pub(crate) fn select_element(state: &EditorState, element_id: ElementId) -> Option<EditorState> {
    let element = state.current_page_element(&element_id)?;
    if state.is_selected(&element_id) {
        return None;
    }
    if element.is_background && !state.selection.is_empty() {
        return None;
    }

    let mut next = state.clone();
    next.selection
        .retain(|id| next_is_foreground(state, id));
    next.selection.push(element_id);
    Some(next)
}

/// Remove one element from the selection
pub(crate) fn unselect_element(state: &EditorState, element_id: &ElementId) -> Option<EditorState> {
    if !state.is_selected(element_id) {
        return None;
    }
    let mut next = state.clone();
    next.selection.retain(|id| id != element_id);
    Some(next)
}

/// Add the element if absent, remove it if present
pub(crate) fn toggle_element_in_selection(
    state: &EditorState,
    element_id: ElementId,
) -> Option<EditorState> {
    if state.is_selected(&element_id) {
        unselect_element(state, &element_id)
    } else {
        select_element(state, element_id)
    }
}

fn next_is_foreground(state: &EditorState, id: &ElementId) -> bool {
    state
        .current_page_element(id)
        .is_some_and(|e| !e.is_background)
}
