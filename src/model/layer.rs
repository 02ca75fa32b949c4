//! Layer types: layout templates that arrange elements on a page.
//!
//! Each layer shape carries its `template` tag as a field, so the shapes
//! also check on their own. `fill`, `vertical` and `horizontal` are exact
//! (undeclared fields are rejected). `thirds` is open: undeclared fields
//! are accepted and kept in [`ThirdsLayer::extra`].

use super::{tag_field, Element, Styles};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

macro_rules! template_tag {
    ($(#[$doc:meta])* $name:ident, $variant:ident, $tag:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        pub enum $name {
            #[default]
            #[serde(rename = $tag)]
            $variant,
        }
    };
}

template_tag!(
    /// The `"fill"` template tag.
    FillTemplate,
    Fill,
    "fill"
);
template_tag!(
    /// The `"thirds"` template tag.
    ThirdsTemplate,
    Thirds,
    "thirds"
);
template_tag!(
    /// The `"vertical"` template tag.
    VerticalTemplate,
    Vertical,
    "vertical"
);
template_tag!(
    /// The `"horizontal"` template tag.
    HorizontalTemplate,
    Horizontal,
    "horizontal"
);

/// Layout strategy of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerTemplate {
    /// A single element filling the layer
    Fill,
    /// Exactly three elements stacked in thirds
    Thirds,
    /// Elements stacked vertically
    Vertical,
    /// Elements laid out horizontally
    Horizontal,
}

impl LayerTemplate {
    /// The tag as written in documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            LayerTemplate::Fill => "fill",
            LayerTemplate::Thirds => "thirds",
            LayerTemplate::Vertical => "vertical",
            LayerTemplate::Horizontal => "horizontal",
        }
    }

    /// Check if layers of this template reject undeclared fields.
    pub fn is_exact(&self) -> bool {
        !matches!(self, LayerTemplate::Thirds)
    }
}

impl fmt::Display for LayerTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A layer holding at most one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FillLayer<E = Element, S = Styles> {
    /// Template tag
    pub template: FillTemplate,

    /// The filling element
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub element: Option<E>,

    /// Layer styles
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub styles: Option<S>,
}

/// A layer holding exactly three elements.
///
/// Unlike the other layer shapes this one is open: fields beyond the
/// declared set are accepted and collected in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThirdsLayer<E = Element, S = Styles> {
    /// Template tag
    pub template: ThirdsTemplate,

    /// Upper, middle and lower elements
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub elements: Option<[E; 3]>,

    /// Layer styles
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub styles: Option<S>,

    /// Undeclared fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A layer stacking any number of elements vertically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VerticalLayer<E = Element, S = Styles> {
    /// Template tag
    pub template: VerticalTemplate,

    /// Stacked elements
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<E>>,

    /// Layer styles
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub styles: Option<S>,
}

/// A layer laying out any number of elements horizontally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HorizontalLayer<E = Element, S = Styles> {
    /// Template tag
    pub template: HorizontalTemplate,

    /// Elements from left to right
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<E>>,

    /// Layer styles
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub styles: Option<S>,
}

/// Any layer, discriminated by its `template` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Layer {
    Fill(FillLayer),
    Thirds(ThirdsLayer),
    Vertical(VerticalLayer),
    Horizontal(HorizontalLayer),
}

impl<'de> Deserialize<'de> for Layer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let tag = tag_field::<D::Error>(&value, "template", "a layer object")?;
        let template = match LayerTemplate::deserialize(tag) {
            Ok(template) => template,
            Err(e) => return Err(de::Error::custom(e)),
        };

        let layer = match template {
            LayerTemplate::Fill => FillLayer::deserialize(value).map(Layer::Fill),
            LayerTemplate::Thirds => ThirdsLayer::deserialize(value).map(Layer::Thirds),
            LayerTemplate::Vertical => VerticalLayer::deserialize(value).map(Layer::Vertical),
            LayerTemplate::Horizontal => {
                HorizontalLayer::deserialize(value).map(Layer::Horizontal)
            }
        };
        layer.map_err(|e| de::Error::custom(format!("{} layer: {}", template, e)))
    }
}

impl Layer {
    /// The layer's template.
    pub fn template(&self) -> LayerTemplate {
        match self {
            Layer::Fill(_) => LayerTemplate::Fill,
            Layer::Thirds(_) => LayerTemplate::Thirds,
            Layer::Vertical(_) => LayerTemplate::Vertical,
            Layer::Horizontal(_) => LayerTemplate::Horizontal,
        }
    }

    /// Layer styles, if any.
    pub fn styles(&self) -> Option<&Styles> {
        match self {
            Layer::Fill(l) => l.styles.as_ref(),
            Layer::Thirds(l) => l.styles.as_ref(),
            Layer::Vertical(l) => l.styles.as_ref(),
            Layer::Horizontal(l) => l.styles.as_ref(),
        }
    }

    /// Top-level elements of the layer, in order.
    pub fn elements(&self) -> Vec<&Element> {
        match self {
            Layer::Fill(l) => l.element.iter().collect(),
            Layer::Thirds(l) => l.elements.iter().flatten().collect(),
            Layer::Vertical(l) => l.elements.iter().flatten().collect(),
            Layer::Horizontal(l) => l.elements.iter().flatten().collect(),
        }
    }

    /// Names of undeclared fields. Only `thirds` layers can have any.
    pub fn extra_fields(&self) -> Vec<&str> {
        match self {
            Layer::Thirds(l) => l.extra.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Number of elements in the layer, including nested ones.
    pub fn element_count(&self) -> usize {
        self.elements()
            .iter()
            .map(|e| 1 + e.descendant_count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paragraph(text: &str) -> Value {
        json!({"type": "paragraph", "text": text})
    }

    #[test]
    fn test_fill_layer() {
        let layer: Layer = serde_json::from_value(json!({
            "template": "fill",
            "element": {"type": "image", "source": "a.jpg", "width": 1, "height": 1, "layout": "fill"}
        }))
        .unwrap();
        assert_eq!(layer.template(), LayerTemplate::Fill);
        assert_eq!(layer.elements().len(), 1);
    }

    #[test]
    fn test_fill_layer_without_element() {
        let layer: Layer = serde_json::from_value(json!({"template": "fill"})).unwrap();
        assert!(layer.elements().is_empty());
    }

    #[test]
    fn test_exact_layers_reject_extra_fields() {
        for template in ["fill", "vertical", "horizontal"] {
            let result = serde_json::from_value::<Layer>(json!({"template": template, "foo": 1}));
            let err = result.unwrap_err().to_string();
            assert!(err.contains("foo"), "{}: {}", template, err);
        }
    }

    #[test]
    fn test_thirds_keeps_extra_fields() {
        let layer: Layer = serde_json::from_value(json!({
            "template": "thirds",
            "elements": [paragraph("a"), paragraph("b"), paragraph("c")],
            "foo": 1
        }))
        .unwrap();
        assert_eq!(layer.extra_fields(), vec!["foo"]);
        assert_eq!(layer.elements().len(), 3);
    }

    #[test]
    fn test_thirds_arity() {
        let two = json!({"template": "thirds", "elements": [paragraph("a"), paragraph("b")]});
        assert!(serde_json::from_value::<Layer>(two).is_err());

        let four = json!({
            "template": "thirds",
            "elements": [paragraph("a"), paragraph("b"), paragraph("c"), paragraph("d")]
        });
        assert!(serde_json::from_value::<Layer>(four).is_err());
    }

    #[test]
    fn test_vertical_any_length() {
        let layer: Layer = serde_json::from_value(json!({
            "template": "vertical",
            "elements": [paragraph("a"), paragraph("b"), paragraph("c"), paragraph("d")]
        }))
        .unwrap();
        assert_eq!(layer.element_count(), 4);
    }

    #[test]
    fn test_fill_rejects_elements_field() {
        let result = serde_json::from_value::<Layer>(json!({
            "template": "fill",
            "elements": [paragraph("a")]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_template() {
        let err = serde_json::from_value::<Layer>(json!({"template": "grid"}))
            .unwrap_err()
            .to_string();
        assert!(err.contains("grid"));
    }

    #[test]
    fn test_missing_template() {
        let err = serde_json::from_value::<Layer>(json!({"elements": []}))
            .unwrap_err()
            .to_string();
        assert!(err.contains("template"));
    }

    #[test]
    fn test_standalone_shape_checks_its_tag() {
        let layer: FillLayer = serde_json::from_value(json!({"template": "fill"})).unwrap();
        assert_eq!(layer.template, FillTemplate::Fill);
        let result = serde_json::from_value::<FillLayer>(json!({"template": "vertical"}));
        assert!(result.is_err());

        let thirds = json!({
            "template": "thirds",
            "elements": [paragraph("a"), paragraph("b"), paragraph("c")]
        });
        assert!(serde_json::from_value::<ThirdsLayer>(thirds).is_ok());
        let result = serde_json::from_value::<ThirdsLayer>(json!({"template": "fill"}));
        assert!(result.is_err());

        let vertical: VerticalLayer =
            serde_json::from_value(json!({"template": "vertical"})).unwrap();
        assert_eq!(vertical.template, VerticalTemplate::Vertical);
        let result = serde_json::from_value::<VerticalLayer>(json!({"template": "horizontal"}));
        assert!(result.is_err());

        let horizontal: HorizontalLayer =
            serde_json::from_value(json!({"template": "horizontal"})).unwrap();
        assert_eq!(horizontal.template, HorizontalTemplate::Horizontal);
        let result = serde_json::from_value::<HorizontalLayer>(json!({"template": "thirds"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_generic_slots() {
        let layer: VerticalLayer<String, u8> = serde_json::from_value(json!({
            "template": "vertical",
            "elements": ["a", "b"],
            "styles": 7
        }))
        .unwrap();
        assert_eq!(layer.elements.unwrap(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(layer.styles, Some(7));
    }

    #[test]
    fn test_layer_serializes_with_template() {
        let layer = Layer::Vertical(VerticalLayer {
            template: VerticalTemplate::Vertical,
            elements: None,
            styles: None,
        });
        assert_eq!(serde_json::to_value(&layer).unwrap(), json!({"template": "vertical"}));
    }
}
