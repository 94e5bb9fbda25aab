mod common;

use common::{comment_model, part_model, person_model, record, serializer, widget_model};
use jsonapi_model::{ModelDescriptor, Record, RelationSpec};
use jsonapi_serializer::ResourceIdentifier;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

// ── Target resolution ────────────────────────────────────────────

#[test]
fn direct_relation_resolves_target() {
    let s = serializer();
    let m = widget_model();
    let target = s.resolve_relation_target(m.relation("owner").unwrap()).unwrap();
    assert_eq!(s.type_of(target), "people");
    assert_eq!(s.id_field_of(target), "id");
}

#[test]
fn polymorphic_relation_has_no_target() {
    let s = serializer();
    let m = comment_model();
    assert!(s.resolve_relation_target(m.relation("commentable").unwrap()).is_none());
}

// ── Resource identifiers ─────────────────────────────────────────

#[test]
fn identifier_uses_target_id_field() {
    let part = record(json!({"partId": "p-1", "label": "bolt"}));
    let id = ResourceIdentifier::for_record(&part, &part_model());
    assert_eq!(id.resource_type, "parts");
    assert_eq!(id.id, json!("p-1"));
    assert_eq!(id.to_json(), json!({"type": "parts", "id": "p-1"}));
}

#[test]
fn identifier_without_id_is_null() {
    let id = ResourceIdentifier::for_record(&Record::new(), &person_model());
    assert_eq!(id.to_json(), json!({"type": "people", "id": null}));
}

// ── Relationship data ────────────────────────────────────────────

#[test]
fn to_one_linkage_is_an_object() {
    let s = serializer();
    let r = record(json!({"id": 1, "owner": {"id": 9, "name": "Alice"}}));
    let data = s.build_relationship_data(&r, &widget_model());
    assert_eq!(
        Value::Object(data),
        json!({"owner": {"data": {"type": "people", "id": 9}}})
    );
}

#[test]
fn to_many_linkage_keeps_order() {
    let s = serializer();
    let r = record(json!({
        "id": 1,
        "parts": [{"partId": "c"}, {"partId": "a"}, {"partId": "b"}]
    }));
    let data = s.build_relationship_data(&r, &widget_model());
    assert_eq!(
        data["parts"],
        json!({"data": [
            {"type": "parts", "id": "c"},
            {"type": "parts", "id": "a"},
            {"type": "parts", "id": "b"}
        ]})
    );
}

#[test]
fn empty_sequence_yields_empty_array() {
    let s = serializer();
    let r = record(json!({"id": 1, "parts": []}));
    let data = s.build_relationship_data(&r, &widget_model());
    assert_eq!(data["parts"], json!({"data": []}));
}

#[test]
fn absent_related_data_is_omitted() {
    let s = serializer();
    let r = record(json!({"id": 1, "ownerId": 9}));
    let data = s.build_relationship_data(&r, &widget_model());
    assert!(data.is_empty());
}

#[test]
fn null_and_false_related_data_is_omitted() {
    let s = serializer();
    for value in [json!(null), json!(false)] {
        let r = record(json!({"id": 1, "owner": value}));
        assert!(!s.build_relationship_data(&r, &widget_model()).contains_key("owner"));
    }
}

#[test]
fn scalar_related_value_yields_null_id() {
    let s = serializer();
    let r = record(json!({"id": 1, "owner": 9}));
    let data = s.build_relationship_data(&r, &widget_model());
    assert_eq!(data["owner"], json!({"data": {"type": "people", "id": null}}));
}

#[test]
fn polymorphic_relation_never_gets_data() {
    let s = serializer();
    let r = record(json!({
        "id": 3,
        "commentable": {"id": 7},
        "commentableType": "Widget",
        "author": {"id": 2}
    }));
    let data = s.build_relationship_data(&r, &comment_model());
    assert!(!data.contains_key("commentable"));
    assert_eq!(data["author"], json!({"data": {"type": "people", "id": 2}}));
}

#[test]
fn has_one_with_single_record() {
    let s = serializer();
    let m = ModelDescriptor::new("Widget", "id", "widgets")
        .with_relation(RelationSpec::has_one("manual", part_model()));
    let r = record(json!({"id": 1, "manual": {"partId": "m1"}}));
    let data = s.build_relationship_data(&r, &m);
    assert_eq!(data["manual"], json!({"data": {"type": "parts", "id": "m1"}}));
}

// ── Composition ──────────────────────────────────────────────────

#[test]
fn relationships_merge_links_and_data() {
    let s = serializer();
    let r = record(json!({
        "id": "5",
        "owner": {"id": 9},
        "parts": [{"partId": "p1"}]
    }));
    let rels = s.build_relationships(&r, &widget_model()).unwrap();
    assert_eq!(
        Value::Object(rels),
        json!({
            "owner": {
                "links": {"related": "http://api.test/widgets/5/owner"},
                "data": {"type": "people", "id": 9}
            },
            "parts": {
                "links": {"related": "http://api.test/widgets/5/parts"},
                "data": [{"type": "parts", "id": "p1"}]
            }
        })
    );
}

#[test]
fn relationships_keep_links_without_data() {
    let s = serializer();
    let r = record(json!({"id": 3, "commentable": {"id": 7}}));
    let rels = s.build_relationships(&r, &comment_model()).unwrap();
    assert_eq!(
        rels["commentable"],
        json!({"links": {"related": "http://api.test/comments/3/commentable"}})
    );
    assert_eq!(
        rels["author"],
        json!({"links": {"related": "http://api.test/comments/3/author"}})
    );
}

#[test]
fn relationship_keys_match_declared_relations() {
    let s = serializer();
    let r = record(json!({"id": 1, "owner": {"id": 2}}));
    let rels = s.build_relationships(&r, &widget_model()).unwrap();
    let keys: Vec<&str> = rels.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["owner", "parts"]);
}

#[test]
fn merged_output_matches_independent_builds() {
    let s = serializer();
    let m = widget_model();
    let r = record(json!({"id": 1, "owner": {"id": 2}, "parts": [{"partId": "x"}]}));
    let links = s.build_relationship_links(&r, &m).unwrap();
    let data = s.build_relationship_data(&r, &m);
    let rels = s.build_relationships(&r, &m).unwrap();
    for (name, rel) in &rels {
        assert_eq!(rel["links"], links[name]["links"]);
        if let Some(d) = data.get(name) {
            assert_eq!(rel["data"], d["data"]);
        }
    }
}
