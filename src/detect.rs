//! Shape detection for untyped JSON input.

use crate::error::{Error, Result};
use crate::model::ElementKind;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A named shape of the document schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A whole story
    Story,
    /// A single page
    Page,
    /// A single layer
    Layer,
    /// A single element of any kind
    Element,
    /// An image or video element
    Media,
    /// A style property bag
    Styles,
}

impl Shape {
    /// Shape name as used on the command line and in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Story => "story",
            Shape::Page => "page",
            Shape::Layer => "layer",
            Shape::Element => "element",
            Shape::Media => "media",
            Shape::Styles => "styles",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "story" => Ok(Shape::Story),
            "page" => Ok(Shape::Page),
            "layer" => Ok(Shape::Layer),
            "element" => Ok(Shape::Element),
            "media" => Ok(Shape::Media),
            "styles" => Ok(Shape::Styles),
            other => Err(Error::UnknownShape(other.to_string())),
        }
    }
}

/// Guess which shape a JSON value is meant to be.
///
/// Objects with a `template` field are layers; objects whose `type` names
/// an element kind are elements; objects with an `id` and no `pages` are
/// pages; any other object is taken as a story. Styles are never guessed
/// since every style property is optional.
///
/// # Example
/// ```
/// use serde_json::json;
/// use storyshape::detect::{detect_shape, Shape};
///
/// let shape = detect_shape(&json!({"template": "fill"}));
/// assert_eq!(shape, Some(Shape::Layer));
/// ```
pub fn detect_shape(value: &Value) -> Option<Shape> {
    let map = value.as_object()?;

    if map.contains_key("template") {
        return Some(Shape::Layer);
    }

    let is_element = map
        .get("type")
        .and_then(Value::as_str)
        .and_then(ElementKind::from_tag)
        .is_some();
    if is_element {
        return Some(Shape::Element);
    }

    if map.contains_key("id") && !map.contains_key("pages") {
        return Some(Shape::Page);
    }

    Some(Shape::Story)
}
