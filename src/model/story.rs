//! Story-level types: the document root, metadata and analytics.

use super::{ElementStyles, LayerTemplate, Page};
use chrono::{DateTime, FixedOffset};
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A story: the root of the document model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    /// Story title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Metadata, as a plain string or a structured record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<MetaField>,

    /// Raw CSS appended after generated styles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,

    /// Styles applied to every element of a given kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_styles: Option<ElementStyles>,

    /// Pages in reading order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<Page>>,

    /// Canonical URL of the story
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,

    /// Analytics configurations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics: Option<Vec<StoryAnalytics>>,
}

/// A `thirds` layer carrying undeclared fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThirdsExtras<'a> {
    /// Page identifier
    pub page: &'a str,
    /// Zero-based layer index within the page
    pub layer: usize,
    /// Names of the undeclared fields
    pub fields: Vec<&'a str>,
}

impl Story {
    /// Pages of the story; empty when none are declared.
    pub fn pages(&self) -> &[Page] {
        self.pages.as_deref().unwrap_or(&[])
    }

    /// Get the number of pages in the story.
    pub fn page_count(&self) -> usize {
        self.pages().len()
    }

    /// Get a page by its identifier.
    pub fn get_page(&self, id: &str) -> Option<&Page> {
        self.pages().iter().find(|page| page.id == id)
    }

    /// Check if the story has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages().is_empty()
    }

    /// Number of elements across all pages, including nested ones.
    pub fn element_count(&self) -> usize {
        self.pages().iter().map(Page::element_count).sum()
    }

    /// Title from the metadata: the shorthand string itself, or the
    /// structured record's `title`.
    pub fn meta_title(&self) -> Option<&str> {
        match self.meta.as_ref()? {
            MetaField::Shorthand(s) => Some(s),
            MetaField::Full(meta) => meta.title.as_deref(),
        }
    }

    /// Every `thirds` layer that carries undeclared fields.
    pub fn thirds_extras(&self) -> Vec<ThirdsExtras<'_>> {
        self.pages()
            .iter()
            .flat_map(|page| {
                page.layers()
                    .iter()
                    .enumerate()
                    .filter(|(_, layer)| layer.template() == LayerTemplate::Thirds)
                    .filter_map(move |(index, layer)| {
                        let fields = layer.extra_fields();
                        (!fields.is_empty()).then_some(ThirdsExtras {
                            page: &page.id,
                            layer: index,
                            fields,
                        })
                    })
            })
            .collect()
    }
}

/// Story metadata: a plain string or a structured record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetaField {
    /// Shorthand string
    Shorthand(String),
    /// Structured metadata
    Full(StoryMeta),
}

impl<'de> Deserialize<'de> for MetaField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MetaFieldVisitor)
    }
}

/// Picks the variant from the JSON type, so errors inside a structured
/// record surface unchanged.
struct MetaFieldVisitor;

impl<'de> Visitor<'de> for MetaFieldVisitor {
    type Value = MetaField;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a metadata string or object")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<MetaField, E> {
        Ok(MetaField::Shorthand(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<MetaField, E> {
        Ok(MetaField::Shorthand(v))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<MetaField, A::Error> {
        StoryMeta::deserialize(de::value::MapAccessDeserializer::new(map)).map(MetaField::Full)
    }
}

/// Structured story metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,

    /// Poster image URLs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,

    /// Publication date, usually RFC 3339
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,

    /// Last modification date, usually RFC 3339
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Publisher>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl StoryMeta {
    /// Publication date, if present and in RFC 3339 form.
    pub fn published_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_date(self.date_published.as_deref()?)
    }

    /// Modification date, if present and in RFC 3339 form.
    pub fn modified_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_date(self.date_modified.as_deref()?)
    }
}

fn parse_date(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s).ok()
}

/// Story publisher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publisher {
    /// Publisher name
    pub name: String,

    /// Publisher logo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<PublisherLogo>,
}

/// Publisher logo image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublisherLogo {
    /// Image URL
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

/// One analytics configuration block.
///
/// The request, variable and trigger maps are free-form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryAnalytics {
    /// Analytics vendor type
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests: Option<Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vars: Option<Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_url_params: Option<Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggers: Option<Map<String, Value>>,

    /// Transport channels to send pings over
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport: Option<Transport>,
}

/// Transport channel selection for analytics pings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beacon: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xhrpost: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<bool>,
}
