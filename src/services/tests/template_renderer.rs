//! Tests for HandlebarsRenderer

use serde_json::{json, Map, Value};

use crate::error::PosterError;
use crate::services::template_renderer::HandlebarsRenderer;
use crate::traits::Renderer;
use crate::types::Candidate;

fn candidate_from(value: Value) -> Candidate {
    let fields = match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    };
    Candidate::from_fields(0, fields).unwrap()
}

#[test]
fn substitutes_named_fields() {
    let renderer = HandlebarsRenderer::new("Read {{title}} at {{url}}").unwrap();
    let candidate = candidate_from(json!({
        "id": "a",
        "title": "Spotlight",
        "url": "https://example.com/a",
    }));

    let text = renderer.render(&candidate).unwrap();
    assert_eq!(text, "Read Spotlight at https://example.com/a");
}

#[test]
fn id_is_available_to_templates() {
    let renderer = HandlebarsRenderer::new("entry {{id}}").unwrap();
    let candidate = candidate_from(json!({"id": "abc"}));

    assert_eq!(renderer.render(&candidate).unwrap(), "entry abc");
}

#[test]
fn missing_field_fails_the_render() {
    let renderer = HandlebarsRenderer::new("{{title}} — {{missing}}").unwrap();
    let candidate = candidate_from(json!({"id": "a", "title": "T"}));

    let err = renderer.render(&candidate).unwrap_err();
    assert!(matches!(err, PosterError::TemplateError { .. }));
}

#[test]
fn invalid_syntax_fails_at_construction() {
    let err = HandlebarsRenderer::new("{{#if broken").unwrap_err();
    assert!(matches!(err, PosterError::TemplateError { .. }));
}

#[test]
fn template_without_fields_is_constant() {
    let renderer = HandlebarsRenderer::new("same text every time").unwrap();
    let mut fields = Map::new();
    fields.insert("id".to_string(), Value::String("a".to_string()));
    let candidate = Candidate::from_fields(0, fields).unwrap();

    assert_eq!(renderer.render(&candidate).unwrap(), "same text every time");
}
