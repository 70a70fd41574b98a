//! Layer group handlers, scoped to the current page

use crate::actions::GroupUpdate;
use crate::handlers::with_page_at;
use crate::state::EditorState;
use story_model::{Group, GroupId};

/// Insert or overwrite a group
///
/// An empty id or name is a no-op, as is re-inserting an identical entry.
pub(crate) fn add_group(
    state: &EditorState,
    group_id: GroupId,
    name: &str,
    is_locked: bool,
) -> Option<EditorState> {
    let index = state.current_page_index()?;
    if group_id.as_str().is_empty() || name.is_empty() {
        return None;
    }

    with_page_at(state, index, |page| {
        page.groups.insert(
            group_id,
            Group {
                name: name.to_string(),
                is_locked,
            },
        );
    })
}

/// Merge properties into an existing group, one level deep
///
/// No-op when the group does not exist; this never creates entries. The
/// typed [`Page`](story_model::Page) always carries a `groups` map (empty at
/// minimum), so only the entry's existence matters; there is no absent-map
/// case to create.
pub(crate) fn update_group(
    state: &EditorState,
    group_id: &GroupId,
    properties: &GroupUpdate,
) -> Option<EditorState> {
    let index = state.current_page_index()?;
    if properties.is_empty() {
        return None;
    }
    if !state.pages[index].groups.contains_key(group_id) {
        return None;
    }

    with_page_at(state, index, |page| {
        if let Some(group) = page.groups.get_mut(group_id) {
            if let Some(name) = &properties.name {
                group.name.clone_from(name);
            }
            if let Some(is_locked) = properties.is_locked {
                group.is_locked = is_locked;
            }
        }
    })
}

/// Remove a group and detach its member elements
pub(crate) fn delete_group(state: &EditorState, group_id: &GroupId) -> Option<EditorState> {
    let index = state.current_page_index()?;
    if !state.pages[index].groups.contains_key(group_id) {
        return None;
    }

    with_page_at(state, index, |page| {
        page.groups.shift_remove(group_id);
        for element in &mut page.elements {
            if element.group_id.as_ref() == Some(group_id) {
                element.group_id = None;
            }
        }
    })
}
