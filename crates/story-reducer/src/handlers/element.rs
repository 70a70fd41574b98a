//! Element handlers, all scoped to the current page

use crate::actions::ElementUpdate;
use crate::handlers::with_page_at;
use crate::state::EditorState;
use story_model::{Element, ElementId};

/// Append elements to the top of the current page's z-order and select them
///
/// The whole action is a no-op when any incoming id collides with an
/// existing element (anywhere in the document) or another incoming element,
/// when an incoming element claims to be a background, or when an incoming
/// `group_id` does not resolve on the current page.
pub(crate) fn add_elements(state: &EditorState, elements: Vec<Element>) -> Option<EditorState> {
    let index = state.current_page_index()?;
    if elements.is_empty() {
        return None;
    }
    if elements.iter().any(|e| e.is_background) {
        return None;
    }
    let page = &state.pages[index];
    if elements.iter().any(|e| {
        e.group_id
            .as_ref()
            .map_or(false, |g| !page.groups.contains_key(g))
    }) {
        return None;
    }
    let mut incoming = std::collections::HashSet::new();
    for element in &elements {
        if !incoming.insert(&element.id) || state.document_contains_element(&element.id) {
            return None;
        }
    }

    let mut next = state.clone();
    next.selection = elements.iter().map(|e| e.id.clone()).collect();
    next.pages[index].elements.extend(elements);
    Some(next)
}

/// Delete elements from the current page
///
/// Unknown ids are ignored; the background element is not deletable this
/// way. Deleted ids also leave the selection.
pub(crate) fn delete_elements(
    state: &EditorState,
    element_ids: &[ElementId],
) -> Option<EditorState> {
    let index = state.current_page_index()?;
    let page = &state.pages[index];

    let targets: Vec<&ElementId> = element_ids
        .iter()
        .filter(|id| page.element(id).is_some_and(|e| !e.is_background))
        .collect();
    if targets.is_empty() {
        return None;
    }

    let mut next = state.clone();
    next.pages[index]
        .elements
        .retain(|e| !targets.contains(&&e.id));
    next.selection.retain(|id| !targets.contains(&id));
    Some(next)
}

/// Merge properties into each listed element on the current page
///
/// Per-field semantics: text-only fields are skipped on non-text elements.
/// A `group_id` that the page does not define voids the whole action.
pub(crate) fn update_elements(
    state: &EditorState,
    element_ids: &[ElementId],
    properties: &ElementUpdate,
) -> Option<EditorState> {
    let index = state.current_page_index()?;
    if properties.is_empty() {
        return None;
    }
    let page = &state.pages[index];
    if let Some(group_id) = &properties.group_id {
        if !page.groups.contains_key(group_id) {
            return None;
        }
    }
    if !element_ids.iter().any(|id| page.contains_element(id)) {
        return None;
    }

    with_page_at(state, index, |page| {
        for element in &mut page.elements {
            if element_ids.contains(&element.id) {
                properties.apply_to(element);
            }
        }
    })
}

/// Designate an element as the page background
///
/// Clears any previous background flag, sets the new one, and moves the
/// element to the z-order bottom; this is the one operation with layering
/// semantics built in.
pub(crate) fn set_background_element(
    state: &EditorState,
    element_id: &ElementId,
) -> Option<EditorState> {
    let index = state.current_page_index()?;
    let page = &state.pages[index];
    let position = page.element_position(element_id)?;
    if position == 0 && page.elements[0].is_background {
        return None;
    }

    with_page_at(state, index, |page| {
        for element in &mut page.elements {
            element.is_background = false;
        }
        let mut element = page.elements.remove(position);
        element.is_background = true;
        page.elements.insert(0, element);
    })
}

/// Move an element within the current page's z-order
///
/// The background element is pinned at the bottom: it cannot be moved, and
/// other elements cannot take its place.
pub(crate) fn arrange_element(
    state: &EditorState,
    element_id: &ElementId,
    position: usize,
) -> Option<EditorState> {
    let index = state.current_page_index()?;
    let page = &state.pages[index];
    let from = page.element_position(element_id)?;
    if page.elements[from].is_background {
        return None;
    }

    let floor = usize::from(page.elements.first().is_some_and(|e| e.is_background));
    let to = position.clamp(floor, page.elements.len() - 1);
    if from == to {
        return None;
    }

    let mut next = state.clone();
    let element = next.pages[index].elements.remove(from);
    next.pages[index].elements.insert(to, element);
    Some(next)
}
