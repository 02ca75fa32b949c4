//! Integration tests for schema conformance.

use serde_json::{json, Value};
use storyshape::model::{Dimension, LayerTemplate, ThirdsTemplate};
use storyshape::{
    conform_str, conform_value, ConformOptions, ContainerElement, Conformer, Element, Error,
    FillLayer, HeadingElement, HorizontalLayer, ImageElement, Layer, MetaField, Page,
    ParagraphElement, Story, ThirdsLayer, VerticalLayer, VideoElement,
};

fn paragraph(text: &str) -> Value {
    json!({"type": "paragraph", "text": text})
}

// ==================== Elements ====================

#[test]
fn test_container_with_paragraph_conforms() {
    let value = json!({"type": "container", "elements": [{"type": "paragraph", "text": "hi"}]});

    let container: ContainerElement = conform_value(value.clone()).unwrap();
    let children = container.elements.unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].text(), Some("hi"));

    let element: Element = conform_value(value).unwrap();
    assert!(matches!(element, Element::Container(_)));
}

#[test]
fn test_media_dimensions_accept_numbers_and_strings() {
    let image: ImageElement = conform_value(json!({
        "type": "image",
        "source": "a.jpg",
        "width": 640,
        "height": "auto",
        "layout": "responsive"
    }))
    .unwrap();
    assert_eq!(image.width, Dimension::Number(640.0));
    assert_eq!(image.height, Dimension::Text("auto".to_string()));

    let video: VideoElement = conform_value(json!({
        "type": "video",
        "sources": [],
        "width": "100%",
        "height": 360.5,
        "layout": "fill"
    }))
    .unwrap();
    assert_eq!(video.width, Dimension::Text("100%".to_string()));
    assert_eq!(video.height, Dimension::Number(360.5));
}

#[test]
fn test_media_dimensions_reject_other_values() {
    let result = conform_value::<ImageElement>(json!({
        "type": "image",
        "source": "a.jpg",
        "width": true,
        "height": 1,
        "layout": "fixed"
    }));
    assert!(matches!(result, Err(Error::Shape(_))));
}

#[test]
fn test_element_shapes_require_their_own_tag() {
    let paragraph = json!({"type": "paragraph", "text": "hi"});
    let result = conform_value::<ContainerElement>(paragraph.clone());
    assert!(matches!(result, Err(Error::Shape(_))));
    assert!(conform_value::<HeadingElement>(paragraph.clone()).is_err());
    assert!(conform_value::<ParagraphElement>(paragraph).is_ok());

    assert!(conform_value::<ParagraphElement>(json!({"text": "hi"})).is_err());

    let image_as_video = json!({
        "type": "video",
        "source": "a.jpg",
        "width": 1,
        "height": 1,
        "layout": "fixed"
    });
    assert!(conform_value::<ImageElement>(image_as_video).is_err());
}

#[test]
fn test_element_shapes_are_open() {
    let element: Element = conform_value(json!({
        "type": "heading2",
        "text": "Open",
        "id": "extra-field"
    }))
    .unwrap();
    assert_eq!(element.text(), Some("Open"));
}

// ==================== Layers ====================

#[test]
fn test_thirds_with_two_elements_rejected() {
    let value = json!({"template": "thirds", "elements": [paragraph("a"), paragraph("b")]});

    assert!(conform_value::<Layer>(value.clone()).is_err());
    assert!(conform_value::<ThirdsLayer>(value).is_err());
}

#[test]
fn test_thirds_with_three_elements_accepted() {
    let layer: ThirdsLayer = conform_value(json!({
        "template": "thirds",
        "elements": [paragraph("a"), paragraph("b"), paragraph("c")]
    }))
    .unwrap();
    assert_eq!(layer.template, ThirdsTemplate::Thirds);
    assert!(layer.extra.is_empty());
}

#[test]
fn test_fill_with_extra_field_rejected() {
    let value = json!({"template": "fill", "element": paragraph("e"), "foo": 1});

    assert!(conform_value::<FillLayer>(value.clone()).is_err());
    assert!(conform_value::<Layer>(value).is_err());
}

#[test]
fn test_vertical_and_horizontal_with_extra_field_rejected() {
    assert!(conform_value::<VerticalLayer>(json!({"template": "vertical", "foo": 1})).is_err());
    assert!(
        conform_value::<HorizontalLayer>(json!({"template": "horizontal", "foo": 1})).is_err()
    );
}

#[test]
fn test_thirds_with_extra_field_accepted_by_default() {
    let layer: Layer = conform_value(json!({"template": "thirds", "foo": 1})).unwrap();
    assert_eq!(layer.template(), LayerTemplate::Thirds);
    assert!(!layer.template().is_exact());
    assert_eq!(layer.extra_fields(), vec!["foo"]);
}

#[test]
fn test_thirds_with_extra_field_rejected_when_exact() {
    let json = r#"{"template": "thirds", "foo": 1}"#;
    let options = ConformOptions::new().exact_thirds();
    let result = Conformer::from_json_with_options(json, options).check_layer();
    assert!(matches!(result, Err(Error::InexactLayer { .. })));
}

// ==================== Pages and stories ====================

#[test]
fn test_page_is_exact() {
    let result = conform_str::<Page>(r#"{"id": "p", "background": "red"}"#);
    assert!(matches!(result, Err(Error::Shape(_))));
}

#[test]
fn test_meta_accepts_string_or_object() {
    let short: Story = conform_value(json!({"meta": "Just a string"})).unwrap();
    assert!(matches!(short.meta, Some(MetaField::Shorthand(_))));

    let full: Story = conform_value(json!({
        "meta": {"title": "Full", "author": "A. Writer", "description": "d"}
    }))
    .unwrap();
    match full.meta {
        Some(MetaField::Full(meta)) => assert_eq!(meta.author.as_deref(), Some("A. Writer")),
        other => panic!("expected structured meta, got {:?}", other),
    }
}

#[test]
fn test_nested_error_is_reported() {
    let err = conform_str::<Story>(
        r#"{"pages": [{"id": "p", "layers": [{"template": "vertical", "elements": [{"type": "image"}]}]}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::Shape(_)));
    let message = err.to_string();
    assert!(message.contains("vertical layer"), "{}", message);
    assert!(message.contains("image element"), "{}", message);
}
