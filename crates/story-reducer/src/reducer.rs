//! The dispatcher

use crate::actions::StoryAction;
use crate::handlers;
use crate::state::EditorState;
use std::sync::Arc;
use tracing::debug;

/// Apply one action to the state
///
/// Pure and total: every action either produces a new snapshot or is a no-op.
/// No-ops hand back the same allocation, so `Arc::ptr_eq(&state, &next)`
/// tells consumers whether anything changed. Document-mutating actions are
/// no-ops when the state's capabilities forbid editing.
#[must_use]
pub fn reduce(state: &Arc<EditorState>, action: StoryAction) -> Arc<EditorState> {
    if action.is_mutation() && !state.capabilities.can_edit {
        debug!(action = action.name(), "editing not permitted, ignoring");
        return Arc::clone(state);
    }

    let name = action.name();
    let next = dispatch(state, action);
    match next {
        Some(next) => Arc::new(next),
        None => {
            debug!(action = name, "no-op action");
            Arc::clone(state)
        }
    }
}

fn dispatch(state: &EditorState, action: StoryAction) -> Option<EditorState> {
    match action {
        StoryAction::AddPage {
            page,
            position,
            select,
        } => handlers::page::add_page(state, page, position, select),
        StoryAction::DeletePage { page_id } => handlers::page::delete_page(state, &page_id),
        StoryAction::ArrangePage { page_id, position } => {
            handlers::page::arrange_page(state, &page_id, position)
        }
        StoryAction::SetCurrentPage { page_id } => {
            handlers::page::set_current_page(state, &page_id)
        }
        StoryAction::UpdateCurrentPageProperties { properties } => {
            handlers::page::update_current_page_properties(state, &properties)
        }
        StoryAction::UpdateStory { properties } => handlers::story::update_story(state, properties),
        StoryAction::AddElements { elements } => handlers::element::add_elements(state, elements),
        StoryAction::DeleteElements { element_ids } => {
            handlers::element::delete_elements(state, &element_ids)
        }
        StoryAction::UpdateElements {
            element_ids,
            properties,
        } => handlers::element::update_elements(state, &element_ids, &properties),
        StoryAction::SetBackgroundElement { element_id } => {
            handlers::element::set_background_element(state, &element_id)
        }
        StoryAction::ArrangeElement {
            element_id,
            position,
        } => handlers::element::arrange_element(state, &element_id, position),
        StoryAction::SetSelectedElements { element_ids } => {
            handlers::selection::set_selected_elements(state, element_ids)
        }
        StoryAction::SelectElement { element_id } => {
            handlers::selection::select_element(state, element_id)
        }
        StoryAction::UnselectElement { element_id } => {
            handlers::selection::unselect_element(state, &element_id)
        }
        StoryAction::ToggleElementInSelection { element_id } => {
            handlers::selection::toggle_element_in_selection(state, element_id)
        }
        StoryAction::AddGroup {
            group_id,
            name,
            is_locked,
        } => handlers::group::add_group(state, group_id, &name, is_locked),
        StoryAction::UpdateGroup {
            group_id,
            properties,
        } => handlers::group::update_group(state, &group_id, &properties),
        StoryAction::DeleteGroup { group_id } => handlers::group::delete_group(state, &group_id),
    }
}

/// Escape hatch for composite operations defined outside the handler set
///
/// Applies an arbitrary state function and returns its result verbatim.
/// Callers are responsible for upholding the state invariants documented on
/// [`EditorState`].
#[must_use]
pub fn reduce_with<F>(state: &Arc<EditorState>, f: F) -> Arc<EditorState>
where
    F: FnOnce(&EditorState) -> EditorState,
{
    Arc::new(f(state))
}
