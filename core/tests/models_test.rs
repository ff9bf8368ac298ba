// Unit tests for models module

use formdesk_core::*;
use serde_json::json;

// ==================== ApiVersion Tests ====================

#[test]
fn test_api_version_constructors() {
    assert_eq!(ApiVersion::latest().as_str(), "latest");
    assert_eq!(ApiVersion::v0_4().as_str(), "v0.4");
    assert_eq!(ApiVersion::new("v0.5").as_str(), "v0.5");
}

#[test]
fn test_api_version_default_is_latest() {
    assert_eq!(ApiVersion::default(), ApiVersion::latest());
}

#[test]
fn test_api_version_serializes_transparently() {
    let json = serde_json::to_value(ApiVersion::v0_4()).unwrap();
    assert_eq!(json, json!("v0.4"));

    let parsed: ApiVersion = serde_json::from_value(json!("latest")).unwrap();
    assert_eq!(parsed, ApiVersion::latest());
}

// ==================== FieldType Tests ====================

#[test]
fn test_field_type_wire_names() {
    let cases = [
        (FieldType::ShortText, "short_text"),
        (FieldType::LongText, "long_text"),
        (FieldType::MultipleChoice, "multiple_choice"),
        (FieldType::PictureChoice, "picture_choice"),
        (FieldType::Statement, "statement"),
        (FieldType::Dropdown, "dropdown"),
        (FieldType::YesNo, "yes_no"),
        (FieldType::Number, "number"),
        (FieldType::Rating, "rating"),
        (FieldType::OpinionScale, "opinion_scale"),
        (FieldType::Email, "email"),
        (FieldType::Website, "website"),
        (FieldType::Legal, "legal"),
    ];

    for (field_type, wire_name) in cases {
        let encoded = serde_json::to_value(field_type).unwrap();
        assert_eq!(encoded, json!(wire_name));

        let decoded: FieldType = serde_json::from_value(json!(wire_name)).unwrap();
        assert_eq!(decoded, field_type);
    }
}

// ==================== Form Tests ====================

#[test]
fn test_minimal_form_omits_optional_keys() {
    let form = Form {
        title: "My form".to_string(),
        fields: vec![Field {
            field_type: FieldType::ShortText,
            question: "Your name?".to_string(),
            ..Field::default()
        }],
        ..Form::default()
    };

    let value = serde_json::to_value(&form).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 2, "only title and fields should be present: {object:?}");
    assert_eq!(value["title"], "My form");

    let field = value["fields"][0].as_object().unwrap();
    assert_eq!(field.len(), 2, "only type and question should be present: {field:?}");
    assert_eq!(field["type"], "short_text");
    assert_eq!(field["question"], "Your name?");
}

#[test]
fn test_form_round_trips_field_for_field() {
    let form = Form {
        title: "Survey".to_string(),
        branding: Some(true),
        logic_jumps: vec![LogicJump {
            from: "decisive-question".to_string(),
            to: "jump-here".to_string(),
            condition: true,
        }],
        fields: vec![
            Field {
                field_type: FieldType::ShortText,
                question: "Favorite 3 characters?".to_string(),
                tags: vec!["some-tag".to_string()],
                max_characters: Some(3),
                ..Field::default()
            },
            Field {
                field_type: FieldType::MultipleChoice,
                question: "Pick a few".to_string(),
                description: Some("some description".to_string()),
                allow_multiple_selections: Some(true),
                add_other_choice: Some(true),
                choices: vec![
                    Choice {
                        label: Some("this".to_string()),
                        ..Choice::default()
                    },
                    Choice {
                        label: Some("that".to_string()),
                        ..Choice::default()
                    },
                ],
                ..Field::default()
            },
            Field {
                field_type: FieldType::YesNo,
                question: "Do you wanna jump?".to_string(),
                reference: Some("decisive-question".to_string()),
                required: Some(true),
                ..Field::default()
            },
            Field {
                field_type: FieldType::OpinionScale,
                question: "Opinion scale".to_string(),
                steps: Some(7),
                labels: Some(Labels {
                    left: Some("Forms suck".to_string()),
                    center: Some("Who cares".to_string()),
                    right: Some("I love you".to_string()),
                }),
                ..Field::default()
            },
            Field {
                field_type: FieldType::Number,
                question: "How many cats?".to_string(),
                min_value: Some(0),
                max_value: Some(99999),
                ..Field::default()
            },
        ],
        ..Form::default()
    };

    let json = serde_json::to_string(&form).unwrap();
    let decoded: Form = serde_json::from_str(&json).unwrap();

    // Form has no PartialEq; compare the serialized values
    assert_eq!(
        serde_json::to_value(&decoded).unwrap(),
        serde_json::to_value(&form).unwrap()
    );
}

#[test]
fn test_field_reserved_word_renames() {
    let field = Field {
        field_type: FieldType::YesNo,
        question: "Jump?".to_string(),
        reference: Some("decisive-question".to_string()),
        ..Field::default()
    };

    let value = serde_json::to_value(&field).unwrap();
    assert_eq!(value["type"], "yes_no");
    assert_eq!(value["ref"], "decisive-question");
    assert!(value.get("field_type").is_none());
    assert!(value.get("reference").is_none());
}

#[test]
fn test_logic_jump_if_rename() {
    let jump = LogicJump {
        from: "a".to_string(),
        to: "b".to_string(),
        condition: true,
    };

    let value = serde_json::to_value(&jump).unwrap();
    assert_eq!(value, json!({"from": "a", "to": "b", "if": true}));
}

// ==================== Response Record Tests ====================

#[test]
fn test_form_info_deserialization() {
    let body = json!({
        "_links": [{"href": "https://api.formdesk.io/latest/forms/f1", "rel": "self"}],
        "fields": [{"type": "short_text", "question": "Name?"}],
        "id": "f1",
        "title": "My form",
        "urls": [{"form_id": "f1", "id": "u1", "version": "latest"}],
        "version": "latest"
    });

    let info: FormInfo = serde_json::from_value(body).unwrap();
    assert_eq!(info.id, "f1");
    assert_eq!(info.links[0].rel, "self");
    assert_eq!(info.fields[0].field_type, FieldType::ShortText);
    assert_eq!(info.urls[0].id, "u1");
    assert_eq!(info.version, ApiVersion::latest());
}

#[test]
fn test_form_info_tolerates_missing_lists() {
    let info: FormInfo = serde_json::from_value(json!({
        "id": "f1",
        "title": "Bare",
        "version": "latest"
    }))
    .unwrap();

    assert!(info.links.is_empty());
    assert!(info.fields.is_empty());
    assert!(info.urls.is_empty());
}

#[test]
fn test_image_records_type_rename() {
    let new_image: NewImage = serde_json::from_value(json!({
        "id": "img1",
        "original_url": "https://example.com/logo.png",
        "type": "image",
        "version": "latest"
    }))
    .unwrap();
    assert_eq!(new_image.image_type, "image");

    let info: ImageInfo = serde_json::from_value(json!({
        "filename": "logo.png",
        "height": 92,
        "id": "img1",
        "type": "image",
        "url": "https://images.formdesk.io/img1",
        "version": "latest",
        "width": 272
    }))
    .unwrap();
    assert_eq!(info.image_type, "image");
    assert_eq!(info.width, 272);
}

#[test]
fn test_design_round_trip() {
    let design = Design {
        colors: Colors {
            question: "#3D3D3D".to_string(),
            button: "#4FB0AE".to_string(),
            answer: "#4FB0AE".to_string(),
            background: "#FFFFFF".to_string(),
        },
        font: "Source Sans Pro".to_string(),
    };

    let json = serde_json::to_string(&design).unwrap();
    let decoded: Design = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.colors, design.colors);
    assert_eq!(decoded.font, design.font);
}

#[test]
fn test_url_info_links_rename() {
    let info: UrlInfo = serde_json::from_value(json!({
        "id": "u1",
        "form_id": "f1",
        "version": "latest",
        "_links": [{"href": "https://forms.formdesk.io/u1", "rel": "form_render"}]
    }))
    .unwrap();

    assert_eq!(info.form_id, "f1");
    assert_eq!(info.links[0].rel, "form_render");
}

#[test]
fn test_base_info_parses_service_timestamp() {
    let info: BaseInfo = serde_json::from_value(json!({
        "name": "Formdesk API",
        "description": "Forms on demand",
        "version": "latest",
        "documentation": "https://docs.formdesk.io",
        "support": "support@formdesk.io",
        "time": "2015-09-18 16:21:39 +0000 UTC"
    }))
    .unwrap();

    assert_eq!(info.name, "Formdesk API");
    assert_eq!(info.time.to_string(), "2015-09-18 16:21:39 +0000 UTC");
}

// ==================== ErrorPayload Tests ====================

#[test]
fn test_error_payload_display() {
    let payload = ErrorPayload {
        error: "E1".to_string(),
        field: "title".to_string(),
        description: "required".to_string(),
    };

    assert_eq!(
        payload.to_string(),
        "Error: \"E1\"; Field: \"title\"; Description: \"required\""
    );
}

#[test]
fn test_error_payload_defaults_missing_fields() {
    let payload: ErrorPayload = serde_json::from_value(json!({"error": "E1"})).unwrap();
    assert_eq!(payload.error, "E1");
    assert!(payload.field.is_empty());
    assert!(payload.description.is_empty());
}
