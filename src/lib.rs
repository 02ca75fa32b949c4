//! # storyshape
//!
//! Typed schema for layered story documents.
//!
//! A story is a sequence of pages. Each page stacks layers, each layer
//! arranges elements with a layout template (`fill`, `thirds`, `vertical`,
//! `horizontal`), and every element and layer can carry CSS-like styles.
//! Stories also hold metadata and analytics configuration.
//!
//! ## Quick Start
//!
//! ```
//! use storyshape::conform_story_str;
//!
//! fn main() -> storyshape::Result<()> {
//!     let story = conform_story_str(r#"{
//!         "title": "Hello",
//!         "meta": "A one-page story",
//!         "pages": [{
//!             "id": "cover",
//!             "layers": [{
//!                 "template": "vertical",
//!                 "elements": [{"type": "heading1", "text": "Hello"}]
//!             }]
//!         }]
//!     }"#)?;
//!
//!     assert_eq!(story.page_count(), 1);
//!     assert_eq!(story.meta_title(), Some("A one-page story"));
//!     Ok(())
//! }
//! ```
//!
//! ## Shape rules
//!
//! - **Tagged unions**: elements are discriminated by `type`, layers by
//!   `template`
//! - **Exact shapes**: pages and the `fill`, `vertical` and `horizontal`
//!   layers reject undeclared fields
//! - **Open shapes**: stories, elements, styles and `thirds` layers accept
//!   them (see [`ThirdsMode`] for the `thirds` policy)
//! - **Shorthands**: story `meta` may be a plain string; media `width` and
//!   `height` may be numbers or strings

pub mod conform;
pub mod detect;
pub mod error;
pub mod json;
pub mod model;

// Re-export commonly used types
pub use conform::{ConformOptions, Conformed, Conformer, ThirdsMode};
pub use detect::{detect_shape, Shape};
pub use error::{Error, Result};
pub use json::{to_json, JsonFormat};
pub use model::{
    ContainerElement, Element, ElementKind, ElementStyles, FillLayer, HeadingElement,
    HorizontalLayer, ImageElement, Layer, LayerTemplate, MediaElement, MetaField, Page,
    ParagraphElement, Story, StoryAnalytics, StoryMeta, Styles, ThirdsLayer, VerticalLayer,
    VideoElement,
};

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

/// Check JSON text against any schema type.
///
/// # Example
///
/// ```
/// use storyshape::{conform_str, Element};
///
/// let element: Element = conform_str(r#"{"type": "paragraph", "text": "hi"}"#).unwrap();
/// assert_eq!(element.text(), Some("hi"));
/// ```
pub fn conform_str<T: DeserializeOwned>(json: &str) -> Result<T> {
    Conformer::from_json(json).check()
}

/// Check an in-memory JSON value against any schema type.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use storyshape::{conform_value, Layer};
///
/// let result = conform_value::<Layer>(json!({"template": "fill", "foo": 1}));
/// assert!(result.is_err());
/// ```
pub fn conform_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    log::debug!("Checking value as {}", std::any::type_name::<T>());
    Ok(serde_json::from_value(value)?)
}

/// Check a JSON file against any schema type.
pub fn conform_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    Conformer::open(path)?.check()
}

/// Check JSON text as a story, applying the default `thirds` policy.
pub fn conform_story_str(json: &str) -> Result<Story> {
    Conformer::from_json(json).check_story()
}

/// Check a JSON file as a story with custom options.
///
/// # Example
///
/// ```no_run
/// use storyshape::{conform_story_file, ConformOptions};
///
/// let options = ConformOptions::new().exact_thirds();
/// let story = conform_story_file("story.json", options).unwrap();
/// println!("Pages: {}", story.page_count());
/// ```
pub fn conform_story_file<P: AsRef<Path>>(path: P, options: ConformOptions) -> Result<Story> {
    Conformer::open_with_options(path, options)?.check_story()
}
