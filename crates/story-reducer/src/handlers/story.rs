//! Story-level property handler

use crate::actions::StoryUpdate;
use crate::state::EditorState;

/// Merge or replace the story-level properties
///
/// Merging is shallow and last-write-wins per key; it never deletes keys.
/// Replacing swaps the whole metadata object. Either way, a result equal to
/// the existing properties is a no-op.
pub(crate) fn update_story(state: &EditorState, properties: StoryUpdate) -> Option<EditorState> {
    let story = match properties {
        StoryUpdate::Merge(update) => {
            if update.is_empty() {
                return None;
            }
            let mut story = state.story.clone();
            update.apply_to(&mut story);
            story
        }
        StoryUpdate::Replace(story) => story,
    };

    if story == state.story {
        return None;
    }

    let mut next = state.clone();
    next.story = story;
    Some(next)
}
