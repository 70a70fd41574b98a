//! Full editing session: load a legacy document, migrate it, edit it through
//! the reducer, and serialize it back out.

use pretty_assertions::assert_eq;
use std::sync::Arc;
use story_migration::MigrationRegistry;
use story_model::{Capabilities, ElementId, GroupId, PageId};
use story_reducer::{
    reduce, EditorState, ElementUpdate, StoryAction, StoryPropertiesUpdate, StoryUpdate,
};
use story_test_utils::{legacy_story_json, page_with_elements, text_element};

fn seeded_state() -> Arc<EditorState> {
    let registry = MigrationRegistry::with_defaults();
    let document = story_migration::load(&registry, legacy_story_json()).unwrap();
    Arc::new(EditorState::from_document(document, Capabilities::default()))
}

#[test]
fn migrated_document_seeds_a_consistent_state() {
    let state = seeded_state();
    assert_eq!(state.current, Some(PageId::from("p1")));
    assert!(state.selection.is_empty());
    assert_eq!(state.pages.len(), 2);
}

#[test]
fn edit_and_save_round_trip() {
    let registry = MigrationRegistry::with_defaults();
    let mut state = seeded_state();

    state = reduce(
        &state,
        StoryAction::UpdateStory {
            properties: StoryUpdate::Merge(StoryPropertiesUpdate {
                title: Some("Edited title".to_string()),
                ..StoryPropertiesUpdate::default()
            }),
        },
    );
    state = reduce(
        &state,
        StoryAction::AddPage {
            page: page_with_elements("p3", vec![text_element("new-text")]),
            position: None,
            select: true,
        },
    );
    state = reduce(
        &state,
        StoryAction::UpdateElements {
            element_ids: vec![ElementId::from("new-text")],
            properties: ElementUpdate {
                opacity: Some(80.0),
                ..ElementUpdate::default()
            },
        },
    );

    let saved = state.to_document(registry.latest_version());
    saved.validate().unwrap();
    assert_eq!(saved.story.title.as_deref(), Some("Edited title"));
    assert_eq!(saved.pages.len(), 3);
    // inserted right after p1, the page that was current
    assert_eq!(saved.pages[1].id, PageId::from("p3"));

    // saving and loading again is lossless
    let reloaded = story_migration::load(&registry, serde_json::to_value(&saved).unwrap()).unwrap();
    assert_eq!(reloaded, saved);
}

#[test]
fn selection_follows_page_navigation() {
    let mut state = seeded_state();

    state = reduce(
        &state,
        StoryAction::SetSelectedElements {
            element_ids: vec![ElementId::from("t1")],
        },
    );
    assert_eq!(state.selection, vec![ElementId::from("t1")]);

    state = reduce(
        &state,
        StoryAction::SetCurrentPage {
            page_id: PageId::from("p2"),
        },
    );
    assert!(state.selection.is_empty());
}

#[test]
fn group_lifecycle_on_current_page() {
    let mut state = seeded_state();

    // the legacy fixture's group was normalized by migration
    let g1 = GroupId::from("g1");
    assert!(state.pages[0].groups.contains_key(&g1));

    state = reduce(
        &state,
        StoryAction::UpdateGroup {
            group_id: g1.clone(),
            properties: story_reducer::GroupUpdate {
                is_locked: Some(true),
                ..story_reducer::GroupUpdate::default()
            },
        },
    );
    assert!(state.pages[0].groups[&g1].is_locked);

    state = reduce(&state, StoryAction::DeleteGroup { group_id: g1.clone() });
    assert!(!state.pages[0].groups.contains_key(&g1));
}

#[test]
fn noop_chain_preserves_the_allocation() {
    let state = seeded_state();
    let mut next = Arc::clone(&state);

    for action in [
        StoryAction::SetCurrentPage {
            page_id: PageId::from("unknown"),
        },
        StoryAction::DeletePage {
            page_id: PageId::from("unknown"),
        },
        StoryAction::DeleteElements {
            element_ids: vec![ElementId::from("unknown")],
        },
        StoryAction::UpdateGroup {
            group_id: GroupId::from("unknown"),
            properties: story_reducer::GroupUpdate::default(),
        },
    ] {
        next = reduce(&next, action);
    }

    assert!(Arc::ptr_eq(&state, &next));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Step {
        Navigate(usize),
        Delete(usize),
        Select(usize),
        Arrange(usize, usize),
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            (0usize..4).prop_map(Step::Navigate),
            (0usize..4).prop_map(Step::Delete),
            (0usize..6).prop_map(Step::Select),
            ((0usize..6), (0usize..6)).prop_map(|(a, b)| Step::Arrange(a, b)),
        ]
    }

    fn page_id(n: usize) -> PageId {
        PageId::from(format!("p{n}").as_str())
    }

    fn element_id(n: usize) -> ElementId {
        ElementId::from(format!("e{n}").as_str())
    }

    fn fixture() -> Arc<EditorState> {
        let pages = (0..3)
            .map(|p| {
                let elements = (0..2).map(|e| text_element(&format!("e{}", p * 2 + e))).collect();
                page_with_elements(&format!("p{p}"), elements)
            })
            .collect();
        let document = story_test_utils::story_document(6, pages);
        Arc::new(EditorState::from_document(document, Capabilities::default()))
    }

    proptest! {
        #[test]
        fn invariants_hold_under_random_action_sequences(steps in proptest::collection::vec(step(), 0..25)) {
            let mut state = fixture();

            for s in steps {
                let action = match s {
                    Step::Navigate(n) => StoryAction::SetCurrentPage { page_id: page_id(n) },
                    Step::Delete(n) => StoryAction::DeletePage { page_id: page_id(n) },
                    Step::Select(n) => StoryAction::SelectElement { element_id: element_id(n) },
                    Step::Arrange(n, to) => StoryAction::ArrangePage { page_id: page_id(n), position: to },
                };
                state = reduce(&state, action);

                // current always references an existing page (or none remain)
                match &state.current {
                    Some(current) => prop_assert!(state.pages.iter().any(|p| &p.id == current)),
                    None => prop_assert!(state.pages.is_empty()),
                }

                // selection only references elements on the current page
                let page = state.current_page();
                for id in &state.selection {
                    prop_assert!(page.is_some_and(|p| p.contains_element(id)));
                }

                // the edited document always validates
                state.to_document(6).validate().unwrap();
            }
        }
    }
}
