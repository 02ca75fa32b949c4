//! Schema conformance checker backed by serde_json.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::detect::{detect_shape, Shape};
use crate::error::{Error, Result};
use crate::model::{Element, Layer, LayerTemplate, MediaElement, Page, Story, Styles};

use super::options::{ConformOptions, ThirdsMode};

/// A value that passed a conformance check, tagged by its shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Conformed {
    Story(Story),
    Page(Page),
    Layer(Layer),
    Element(Element),
    Media(MediaElement),
    Styles(Styles),
}

impl Conformed {
    /// The shape the value was checked against.
    pub fn shape(&self) -> Shape {
        match self {
            Conformed::Story(_) => Shape::Story,
            Conformed::Page(_) => Shape::Page,
            Conformed::Layer(_) => Shape::Layer,
            Conformed::Element(_) => Shape::Element,
            Conformed::Media(_) => Shape::Media,
            Conformed::Styles(_) => Shape::Styles,
        }
    }
}

/// Checks JSON input against the document schema.
pub struct Conformer {
    data: Vec<u8>,
    options: ConformOptions,
}

impl Conformer {
    /// Open a JSON file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ConformOptions::default())
    }

    /// Open a JSON file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ConformOptions) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Reading {}", path.display());
        let data = fs::read(path)?;
        Ok(Self { data, options })
    }

    /// Check JSON text.
    pub fn from_json(json: &str) -> Self {
        Self::from_json_with_options(json, ConformOptions::default())
    }

    /// Check JSON text with custom options.
    pub fn from_json_with_options(json: &str, options: ConformOptions) -> Self {
        Self::from_bytes_with_options(json.as_bytes(), options)
    }

    /// Check JSON bytes.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self::from_bytes_with_options(data, ConformOptions::default())
    }

    /// Check JSON bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ConformOptions) -> Self {
        Self {
            data: data.to_vec(),
            options,
        }
    }

    /// Check JSON from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ConformOptions::default())
    }

    /// Check JSON from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ConformOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Self { data, options })
    }

    /// Options in effect.
    pub fn options(&self) -> &ConformOptions {
        &self.options
    }

    /// Check the input against an arbitrary schema type.
    ///
    /// Only serde-level rules apply here; the `thirds` policy needs the
    /// shape-specific methods.
    pub fn check<T: DeserializeOwned>(&self) -> Result<T> {
        log::debug!(
            "Checking {} bytes as {}",
            self.data.len(),
            std::any::type_name::<T>()
        );
        Ok(serde_json::from_slice(&self.data)?)
    }

    /// Check the input as a story.
    pub fn check_story(&self) -> Result<Story> {
        let story: Story = self.check()?;
        for extras in story.thirds_extras() {
            let location = format!("page \"{}\", layer {}", extras.page, extras.layer);
            review_thirds(&location, &extras.fields, &self.options)?;
        }
        Ok(story)
    }

    /// Check the input as a page.
    pub fn check_page(&self) -> Result<Page> {
        let page: Page = self.check()?;
        for (index, layer) in page.layers().iter().enumerate() {
            if layer.template() == LayerTemplate::Thirds {
                let location = format!("page \"{}\", layer {}", page.id, index);
                review_thirds(&location, &layer.extra_fields(), &self.options)?;
            }
        }
        Ok(page)
    }

    /// Check the input as a layer.
    pub fn check_layer(&self) -> Result<Layer> {
        let layer: Layer = self.check()?;
        review_thirds("top level", &layer.extra_fields(), &self.options)?;
        Ok(layer)
    }

    /// Check the input against a named shape.
    pub fn check_as(&self, shape: Shape) -> Result<Conformed> {
        let conformed = match shape {
            Shape::Story => Conformed::Story(self.check_story()?),
            Shape::Page => Conformed::Page(self.check_page()?),
            Shape::Layer => Conformed::Layer(self.check_layer()?),
            Shape::Element => Conformed::Element(self.check()?),
            Shape::Media => Conformed::Media(self.check()?),
            Shape::Styles => Conformed::Styles(self.check()?),
        };
        Ok(conformed)
    }

    /// Detect the shape of the input, then check against it.
    pub fn check_detected(&self) -> Result<Conformed> {
        let value: Value = serde_json::from_slice(&self.data)?;
        let shape = detect_shape(&value).ok_or_else(|| {
            Error::UnknownShape(format!("expected a JSON object, found {}", kind_of(&value)))
        })?;
        log::debug!("Detected shape: {}", shape);
        self.check_as(shape)
    }
}

/// Apply the `thirds` policy to one layer's undeclared fields.
fn review_thirds(location: &str, fields: &[&str], options: &ConformOptions) -> Result<()> {
    if fields.is_empty() {
        return Ok(());
    }

    match options.thirds {
        ThirdsMode::Exact => Err(Error::InexactLayer {
            location: location.to_string(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }),
        ThirdsMode::Open => {
            if options.warn_on_open_thirds {
                log::warn!(
                    "Thirds layer at {} has undeclared fields: {}",
                    location,
                    fields.join(", ")
                );
            }
            Ok(())
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
