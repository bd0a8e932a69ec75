//! Tests for ops-model document types.

use ops_model::{ConfidenceTier, DocumentType, OperationalDocument};

fn base_fields(doc_type: &str) -> String {
    format!(
        r#""type": "{doc_type}",
        "id": "doc-1",
        "title": "Test Document",
        "status": "published",
        "version": "1.2",
        "created_at": "2025-02-10T08:00:00Z",
        "updated_at": "2025-03-01T16:30:00Z",
        "owner_user_id": "user-7",
        "source_evidence": [{{"source_id": "src-1", "locator": "p.4", "note": null}}],
        "open_questions": ["Is the hold time confirmed?"],
        "confidence_score": 0.85"#
    )
}

#[test]
fn recipe_dispatches_on_type_tag() {
    let json = format!(
        r#"{{
            {},
            "yield": {{"amount": 4, "unit": "portions"}},
            "ingredients": [
                {{"name": "Butter", "group": "Sauce", "prep": "cubed",
                  "per_portion": {{"qty": 25, "unit": "g"}},
                  "per_batch": null, "notes": null}}
            ],
            "steps": [
                {{"id": "s1", "instruction": "Melt the butter.", "timer_seconds": 90}}
            ],
            "prep_time_minutes": 10,
            "cook_time_minutes": 25,
            "allergens": ["dairy"]
        }}"#,
        base_fields("Recipe")
    );

    let doc: OperationalDocument = serde_json::from_str(&json).expect("parse recipe");
    assert_eq!(doc.doc_type(), Some(DocumentType::Recipe));
    assert_eq!(doc.id(), "doc-1");
    assert_eq!(doc.time_estimate_minutes(), Some(35));
    assert_eq!(doc.allergens(), ["dairy".to_string()]);
    assert_eq!(doc.confidence_tier(), ConfidenceTier::High);

    let OperationalDocument::Recipe(recipe) = doc else {
        panic!("expected recipe variant");
    };
    assert_eq!(recipe.ingredients[0].per_portion.as_ref().unwrap().qty, Some(25.0));
    assert_eq!(recipe.steps[0].timer_seconds, Some(90));
}

#[test]
fn dispatch_ignores_field_order_and_extra_optionals() {
    // `type` last, unrelated optional fields present.
    let json = format!(
        r#"{{
            "steps": [{{"id": "s1", "title": "Drain", "instruction": "Open the valve."}}],
            "estimated_time_minutes": 15,
            "prerequisites": ["Machine cooled down"],
            {}
        }}"#,
        base_fields("SOP")
    );

    let doc: OperationalDocument = serde_json::from_str(&json).expect("parse sop");
    assert_eq!(doc.doc_type(), Some(DocumentType::Sop));
    assert_eq!(doc.type_label(), "SOP");
    assert_eq!(doc.time_estimate_minutes(), Some(15));
}

#[test]
fn checklist_round_trips() {
    let json = format!(
        r#"{{
            {},
            "frequency": "daily",
            "shift": "am",
            "items": [
                {{"id": "c1", "label": "Walk-in temp", "category": "Temperatures",
                  "is_mandatory": true, "response_type": "temperature",
                  "numeric_field": {{"label": "Temp", "unit": "C", "min": 0, "max": 5,
                                     "target": 3, "target_text": "0-5 C"}}}},
                {{"id": "c2", "label": "Sanitizer buckets set", "is_mandatory": false,
                  "response_type": "checkbox"}}
            ]
        }}"#,
        base_fields("Checklist")
    );

    let doc: OperationalDocument = serde_json::from_str(&json).expect("parse checklist");
    let serialized = serde_json::to_string(&doc).expect("serialize checklist");
    let round: OperationalDocument = serde_json::from_str(&serialized).expect("reparse");
    assert_eq!(doc, round);

    let OperationalDocument::Checklist(checklist) = round else {
        panic!("expected checklist variant");
    };
    assert_eq!(checklist.items.len(), 2);
    let field = checklist.items[0].numeric_field.as_ref().unwrap();
    assert!(!field.is_out_of_range(5.0));
    assert!(field.is_out_of_range(5.5));
}

#[test]
fn equipment_quick_actions_parse_as_keyed_map() {
    let json = format!(
        r#"{{
            {},
            "machine_name": "Rational iCombi",
            "quick_actions": {{
                "startup": {{"steps": ["Open water valve", "Press power"]}},
                "cleaning_daily": {{"title": "Nightly rinse", "steps": ["Run program C1"]}}
            }},
            "error_codes": [{{"code": "E19", "meaning": "Water inlet", "immediate_action": "Check valve"}}]
        }}"#,
        base_fields("Equipment")
    );

    let doc: OperationalDocument = serde_json::from_str(&json).expect("parse equipment");
    let OperationalDocument::Equipment(equipment) = doc else {
        panic!("expected equipment variant");
    };
    let ordered = equipment.ordered_quick_actions();
    assert_eq!(ordered.len(), 2);
    assert_eq!(ordered[0].0.label(), "Startup");
    assert_eq!(ordered[1].1.title.as_deref(), Some("Nightly rinse"));
}

#[test]
fn unknown_type_falls_back_without_error() {
    let json = r#"{
        "type": "Memo",
        "id": "memo-1",
        "title": "Shift Notes",
        "body": "Walk-in door is sticking again."
    }"#;

    let doc: OperationalDocument = serde_json::from_str(json).expect("parse unknown");
    assert_eq!(doc.doc_type(), None);
    assert_eq!(doc.type_label(), "Memo");
    assert_eq!(doc.id(), "memo-1");
    assert_eq!(doc.title(), "Shift Notes");

    let OperationalDocument::Unknown(unknown) = doc else {
        panic!("expected fallback variant");
    };
    let dump = unknown.pretty_dump();
    assert!(dump.contains("Memo"));
    assert!(dump.contains("sticking"));
}

#[test]
fn header_accessors_are_total_over_variants() {
    let json = format!(
        r#"{{
            {},
            "frequency": "weekly",
            "sections": [{{"title": "Greeting", "bullets": ["Smile", "Use names"]}}]
        }}"#,
        base_fields("Guide")
    );

    let doc: OperationalDocument = serde_json::from_str(&json).expect("parse guide");
    assert_eq!(doc.title(), "Test Document");
    assert!(doc.hazards().is_empty());
    assert!(doc.allergens().is_empty());
    assert_eq!(doc.time_estimate_minutes(), None);
    assert_eq!(doc.frequency().map(|f| f.label()), Some("weekly"));
    assert_eq!(doc.open_questions().len(), 1);
}
