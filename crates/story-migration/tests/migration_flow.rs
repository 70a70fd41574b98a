//! End-to-end migration flow: legacy JSON in, validated current-schema
//! document out.

use pretty_assertions::assert_eq;
use serde_json::json;
use story_migration::{load, migrate, LoadError, MigrationError, MigrationRegistry};
use story_model::{ElementKind, Padding};
use story_test_utils::legacy_story_json;

#[test]
fn legacy_document_loads_at_latest_version() {
    let registry = MigrationRegistry::with_defaults();
    let document = load(&registry, legacy_story_json()).unwrap();

    assert_eq!(document.version, registry.latest_version());
    assert_eq!(document.pages.len(), 2);
    document.validate().unwrap();
}

#[test]
fn migrated_document_carries_all_rewrites() {
    let registry = MigrationRegistry::with_defaults();
    let migrated = migrate(&registry, legacy_story_json()).unwrap();

    // v1: story-level advancement defaults
    assert_eq!(migrated["autoAdvance"], json!(true));
    assert_eq!(migrated["defaultPageDuration"], json!(7));

    // v2: numeric text padding became an object
    assert_eq!(
        migrated["pages"][0]["elements"][1]["padding"],
        json!({"horizontal": 5.0, "vertical": 5.0})
    );

    // v3: every element got an opacity
    assert_eq!(migrated["pages"][0]["elements"][0]["opacity"], json!(100));

    // v4: page backdrop derived from the background shape
    assert_eq!(
        migrated["pages"][0]["backgroundColor"],
        json!({"color": {"r": 10, "g": 20, "b": 30}})
    );
    assert_eq!(
        migrated["pages"][1]["backgroundColor"],
        json!({"color": {"r": 255, "g": 255, "b": 255}})
    );

    // v5: gif resource unified
    let resource = &migrated["pages"][1]["elements"][0]["resource"];
    assert_eq!(resource["isOptimized"], json!(true));
    assert_eq!(resource["id"], json!("cat"));
    assert_eq!(resource["posterId"], json!("cat-poster"));
    assert_eq!(resource["poster"], json!("https://cdn.example/cat.jpg"));
    assert!(resource.get("output").is_none());

    // v6: bare-string group entry normalized
    assert_eq!(
        migrated["pages"][0]["groups"]["g1"],
        json!({"name": "Header", "isLocked": false})
    );
}

#[test]
fn full_pipeline_is_idempotent() {
    let registry = MigrationRegistry::with_defaults();
    let once = migrate(&registry, legacy_story_json()).unwrap();
    let twice = migrate(&registry, once.clone()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn loaded_document_round_trips_through_serde() {
    let registry = MigrationRegistry::with_defaults();
    let document = load(&registry, legacy_story_json()).unwrap();

    let serialized = serde_json::to_value(&document).unwrap();
    let reloaded = load(&registry, serialized).unwrap();
    assert_eq!(document, reloaded);
}

#[test]
fn unmodeled_element_keys_survive_load_and_save() {
    let registry = MigrationRegistry::with_defaults();
    let document = load(&registry, legacy_story_json()).unwrap();

    let text = &document.pages[0].elements[1];
    assert_eq!(text.extra.get("x"), Some(&json!(10)));
    assert_eq!(text.extra.get("width"), Some(&json!(300)));

    let saved = serde_json::to_value(&document).unwrap();
    assert_eq!(saved["pages"][0]["elements"][1]["x"], json!(10));
    assert_eq!(saved["pages"][0]["elements"][1]["rotationAngle"], json!(0));
}

#[test]
fn loaded_text_element_has_typed_padding() {
    let registry = MigrationRegistry::with_defaults();
    let document = load(&registry, legacy_story_json()).unwrap();

    let text = document.pages[0].elements[1].clone();
    match text.kind {
        ElementKind::Text { padding, .. } => assert_eq!(padding, Padding::uniform(5.0)),
        other => panic!("expected text element, got {other:?}"),
    }
}

#[test]
fn document_without_pages_fails_fast() {
    let registry = MigrationRegistry::with_defaults();
    let err = migrate(&registry, json!({"title": "broken"})).unwrap_err();
    assert!(matches!(err, MigrationError::MissingPages));
}

#[test]
fn duplicate_element_ids_fail_validation_on_load() {
    let registry = MigrationRegistry::with_defaults();
    let raw = json!({
        "pages": [
            {"id": "p1", "elements": [{"id": "dup", "type": "text", "content": ""}]},
            {"id": "p2", "elements": [{"id": "dup", "type": "text", "content": ""}]}
        ]
    });
    let err = load(&registry, raw).unwrap_err();
    assert!(matches!(err, LoadError::Invalid(_)));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn arbitrary_story() -> impl Strategy<Value = serde_json::Value> {
        (
            proptest::option::of(0u32..=6),
            proptest::collection::vec(
                (any::<bool>(), proptest::option::of(0.0f64..40.0)),
                0..4,
            ),
        )
            .prop_map(|(version, elements)| {
                let elements: Vec<_> = elements
                    .into_iter()
                    .enumerate()
                    .map(|(i, (is_text, padding))| {
                        let mut element = json!({
                            "id": format!("el-{i}"),
                            "type": if is_text { "text" } else { "shape" },
                        });
                        if is_text {
                            element["content"] = json!("x");
                        }
                        if let Some(padding) = padding {
                            element["padding"] = json!(padding);
                        }
                        element
                    })
                    .collect();

                let mut doc = json!({"pages": [{"id": "p1", "elements": elements}]});
                if let Some(version) = version {
                    doc["version"] = json!(version);
                }
                doc
            })
    }

    proptest! {
        #[test]
        fn migrate_reaches_latest_version(doc in arbitrary_story()) {
            let registry = MigrationRegistry::with_defaults();
            let migrated = migrate(&registry, doc).unwrap();
            prop_assert_eq!(
                migrated["version"].as_u64(),
                Some(u64::from(registry.latest_version()))
            );
        }

        #[test]
        fn migrate_is_idempotent(doc in arbitrary_story()) {
            let registry = MigrationRegistry::with_defaults();
            let once = migrate(&registry, doc).unwrap();
            let twice = migrate(&registry, once.clone()).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
