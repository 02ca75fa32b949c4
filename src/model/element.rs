//! Element types: containers, text, and media.

use super::{tag_field, Styles};
use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// The `type` tag of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Holds child elements
    Container,
    /// Heading without a level
    Heading,
    /// Level 1 heading
    Heading1,
    /// Level 2 heading
    Heading2,
    /// Level 3 heading
    Heading3,
    /// Level 4 heading
    Heading4,
    /// Level 5 heading
    Heading5,
    /// Level 6 heading
    Heading6,
    /// Paragraph of text
    Paragraph,
    /// Still image
    Image,
    /// Video with one or more sources
    Video,
}

impl ElementKind {
    /// Every element kind, in declaration order.
    pub const ALL: [ElementKind; 11] = [
        ElementKind::Container,
        ElementKind::Heading,
        ElementKind::Heading1,
        ElementKind::Heading2,
        ElementKind::Heading3,
        ElementKind::Heading4,
        ElementKind::Heading5,
        ElementKind::Heading6,
        ElementKind::Paragraph,
        ElementKind::Image,
        ElementKind::Video,
    ];

    /// The tag as written in documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Container => "container",
            ElementKind::Heading => "heading",
            ElementKind::Heading1 => "heading1",
            ElementKind::Heading2 => "heading2",
            ElementKind::Heading3 => "heading3",
            ElementKind::Heading4 => "heading4",
            ElementKind::Heading5 => "heading5",
            ElementKind::Heading6 => "heading6",
            ElementKind::Paragraph => "paragraph",
            ElementKind::Image => "image",
            ElementKind::Video => "video",
        }
    }

    /// Look up a kind by its tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == tag)
    }

    /// Check if this is any heading kind, including the level-less `heading`.
    pub fn is_heading(&self) -> bool {
        matches!(
            self,
            ElementKind::Heading
                | ElementKind::Heading1
                | ElementKind::Heading2
                | ElementKind::Heading3
                | ElementKind::Heading4
                | ElementKind::Heading5
                | ElementKind::Heading6
        )
    }

    /// Check if elements of this kind carry a `text` field.
    pub fn is_text(&self) -> bool {
        self.is_heading() || *self == ElementKind::Paragraph
    }

    /// Check if this is an image or video.
    pub fn is_media(&self) -> bool {
        matches!(self, ElementKind::Image | ElementKind::Video)
    }

    /// Heading level (1-6). `None` for non-headings and the bare `heading`.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            ElementKind::Heading1 => Some(1),
            ElementKind::Heading2 => Some(2),
            ElementKind::Heading3 => Some(3),
            ElementKind::Heading4 => Some(4),
            ElementKind::Heading5 => Some(5),
            ElementKind::Heading6 => Some(6),
            _ => None,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default styles keyed by element kind.
pub type ElementStyles = BTreeMap<ElementKind, Styles>;

/// A flag that may only be present as the literal `true`.
///
/// Used for `loop` and `autoplay` on videos: the field is either absent
/// or `true`, never `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LiteralTrue;

impl Serialize for LiteralTrue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(true)
    }
}

impl<'de> Deserialize<'de> for LiteralTrue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if bool::deserialize(deserializer)? {
            Ok(LiteralTrue)
        } else {
            Err(de::Error::invalid_value(
                Unexpected::Bool(false),
                &"the literal `true`",
            ))
        }
    }
}

/// How a media element sizes itself within its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaLayout {
    /// Fill the parent
    #[serde(rename = "fill")]
    Fill,
    /// Exact width and height
    #[serde(rename = "fixed")]
    Fixed,
    /// Fixed height, width fills the parent
    #[serde(rename = "fixed-height")]
    FixedHeight,
    /// Sized as a flex item
    #[serde(rename = "flex-item")]
    FlexItem,
    /// Not displayed
    #[serde(rename = "nodisplay")]
    NoDisplay,
    /// Scaled to the parent width, keeping the aspect ratio
    #[serde(rename = "responsive")]
    Responsive,
}

/// A media dimension; numbers and strings are accepted interchangeably.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    /// Numeric dimension
    Number(f64),
    /// String dimension (e.g. `"100%"`, `"320"`)
    Text(String),
}

impl From<f64> for Dimension {
    fn from(value: f64) -> Self {
        Dimension::Number(value)
    }
}

impl From<&str> for Dimension {
    fn from(value: &str) -> Self {
        Dimension::Text(value.to_string())
    }
}

macro_rules! element_tag {
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

element_tag!(
    /// The `"container"` element tag.
    ContainerTag,
    Container,
    "container"
);
element_tag!(
    /// The `"paragraph"` element tag.
    ParagraphTag,
    Paragraph,
    "paragraph"
);
element_tag!(
    /// The `"image"` element tag.
    ImageTag,
    Image,
    "image"
);
element_tag!(
    /// The `"video"` element tag.
    VideoTag,
    Video,
    "video"
);

/// The `type` tag of a heading: the level-less `heading` or one of
/// `heading1` to `heading6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingKind {
    /// Heading without a level
    #[default]
    Heading,
    /// Level 1 heading
    Heading1,
    /// Level 2 heading
    Heading2,
    /// Level 3 heading
    Heading3,
    /// Level 4 heading
    Heading4,
    /// Level 5 heading
    Heading5,
    /// Level 6 heading
    Heading6,
}

impl HeadingKind {
    /// Heading level (1-6). `None` for the bare `heading`.
    pub fn level(&self) -> Option<u8> {
        ElementKind::from(*self).heading_level()
    }
}

impl From<HeadingKind> for ElementKind {
    fn from(kind: HeadingKind) -> Self {
        match kind {
            HeadingKind::Heading => ElementKind::Heading,
            HeadingKind::Heading1 => ElementKind::Heading1,
            HeadingKind::Heading2 => ElementKind::Heading2,
            HeadingKind::Heading3 => ElementKind::Heading3,
            HeadingKind::Heading4 => ElementKind::Heading4,
            HeadingKind::Heading5 => ElementKind::Heading5,
            HeadingKind::Heading6 => ElementKind::Heading6,
        }
    }
}

/// A container holding child elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerElement<E = Element, S = Styles> {
    /// Element tag
    #[serde(rename = "type")]
    pub kind: ContainerTag,

    /// Child elements
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<E>>,

    /// Element styles
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub styles: Option<S>,
}

/// A heading, with or without a level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingElement<S = Styles> {
    /// Heading tag
    #[serde(rename = "type")]
    pub kind: HeadingKind,

    /// Heading text
    pub text: String,

    /// Element styles
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub styles: Option<S>,
}

/// A paragraph of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphElement<S = Styles> {
    /// Element tag
    #[serde(rename = "type")]
    pub kind: ParagraphTag,

    /// Paragraph text
    pub text: String,

    /// Element styles
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub styles: Option<S>,
}

/// An image element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageElement<S = Styles> {
    /// Element tag
    #[serde(rename = "type")]
    pub kind: ImageTag,

    /// Alternative text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    /// Image URL
    pub source: String,

    /// Image width
    pub width: Dimension,

    /// Image height
    pub height: Dimension,

    /// Sizing mode
    pub layout: MediaLayout,

    /// Element styles
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub styles: Option<S>,
}

/// One encoding of a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSource {
    /// Video URL
    pub source: String,

    /// MIME type (e.g. "video/mp4")
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// A video element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoElement<S = Styles> {
    /// Element tag
    #[serde(rename = "type")]
    pub kind: VideoTag,

    /// Available encodings
    pub sources: Vec<VideoSource>,

    /// Loop playback
    #[serde(rename = "loop", default, skip_serializing_if = "Option::is_none")]
    pub looped: Option<LiteralTrue>,

    /// Start playing automatically
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<LiteralTrue>,

    /// Video width
    pub width: Dimension,

    /// Video height
    pub height: Dimension,

    /// Sizing mode
    pub layout: MediaLayout,

    /// Poster image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,

    /// Element styles
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub styles: Option<S>,
}

/// Any visual element placeable inside a layer, discriminated by its
/// `type` field.
///
/// Each variant's shape writes its own tag, so serialization is untagged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Element {
    /// `container`
    Container(ContainerElement),
    /// `heading` and `heading1` to `heading6`
    Heading(HeadingElement),
    /// `paragraph`
    Paragraph(ParagraphElement),
    /// `image`
    Image(ImageElement),
    /// `video`
    Video(VideoElement),
}

impl<'de> Deserialize<'de> for Element {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let tag = tag_field::<D::Error>(&value, "type", "an element object")?;
        let kind = match ElementKind::deserialize(tag) {
            Ok(kind) => kind,
            Err(e) => return Err(de::Error::custom(e)),
        };

        let element = match kind {
            ElementKind::Container => ContainerElement::deserialize(value).map(Element::Container),
            ElementKind::Paragraph => ParagraphElement::deserialize(value).map(Element::Paragraph),
            ElementKind::Image => ImageElement::deserialize(value).map(Element::Image),
            ElementKind::Video => VideoElement::deserialize(value).map(Element::Video),
            _ => HeadingElement::deserialize(value).map(Element::Heading),
        };
        element.map_err(|e| de::Error::custom(format!("{} element: {}", kind, e)))
    }
}

impl Element {
    /// The element's `type` tag.
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Container(_) => ElementKind::Container,
            Element::Heading(e) => e.kind.into(),
            Element::Paragraph(_) => ElementKind::Paragraph,
            Element::Image(_) => ElementKind::Image,
            Element::Video(_) => ElementKind::Video,
        }
    }

    /// Attached styles, if any.
    pub fn styles(&self) -> Option<&Styles> {
        match self {
            Element::Container(e) => e.styles.as_ref(),
            Element::Heading(e) => e.styles.as_ref(),
            Element::Paragraph(e) => e.styles.as_ref(),
            Element::Image(e) => e.styles.as_ref(),
            Element::Video(e) => e.styles.as_ref(),
        }
    }

    /// Text content for headings and paragraphs.
    pub fn text(&self) -> Option<&str> {
        match self {
            Element::Heading(e) => Some(&e.text),
            Element::Paragraph(e) => Some(&e.text),
            _ => None,
        }
    }

    /// Direct children of a container. Empty for every other kind.
    pub fn children(&self) -> &[Element] {
        match self {
            Element::Container(c) => c.elements.as_deref().unwrap_or(&[]),
            _ => &[],
        }
    }

    /// Number of elements nested below this one, at any depth.
    pub fn descendant_count(&self) -> usize {
        self.children()
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }

    /// Convert into a media element, if this is an image or video.
    pub fn into_media(self) -> Option<MediaElement> {
        match self {
            Element::Image(image) => Some(MediaElement::Image(image)),
            Element::Video(video) => Some(MediaElement::Video(video)),
            _ => None,
        }
    }
}

/// An image or video element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MediaElement {
    /// `image`
    Image(ImageElement),
    /// `video`
    Video(VideoElement),
}

impl<'de> Deserialize<'de> for MediaElement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let tag = tag_field::<D::Error>(&value, "type", "a media element object")?;
        let kind = match ElementKind::deserialize(tag) {
            Ok(kind) => kind,
            Err(e) => return Err(de::Error::custom(e)),
        };

        let media = match kind {
            ElementKind::Image => ImageElement::deserialize(value).map(MediaElement::Image),
            ElementKind::Video => VideoElement::deserialize(value).map(MediaElement::Video),
            other => {
                return Err(de::Error::invalid_value(
                    Unexpected::Str(other.as_str()),
                    &"`image` or `video`",
                ));
            }
        };
        media.map_err(|e| de::Error::custom(format!("{} element: {}", kind, e)))
    }
}

impl MediaElement {
    /// Media width.
    pub fn width(&self) -> &Dimension {
        match self {
            MediaElement::Image(image) => &image.width,
            MediaElement::Video(video) => &video.width,
        }
    }

    /// Media height.
    pub fn height(&self) -> &Dimension {
        match self {
            MediaElement::Image(image) => &image.height,
            MediaElement::Video(video) => &video.height,
        }
    }

    /// Sizing mode.
    pub fn layout(&self) -> MediaLayout {
        match self {
            MediaElement::Image(image) => image.layout,
            MediaElement::Video(video) => video.layout,
        }
    }
}

impl From<MediaElement> for Element {
    fn from(media: MediaElement) -> Self {
        match media {
            MediaElement::Image(image) => Element::Image(image),
            MediaElement::Video(video) => Element::Video(video),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_container_with_paragraph() {
        let element: Element = serde_json::from_value(json!({
            "type": "container",
            "elements": [{"type": "paragraph", "text": "hi"}]
        }))
        .unwrap();

        assert_eq!(element.kind(), ElementKind::Container);
        assert_eq!(element.children().len(), 1);
        assert_eq!(element.children()[0].text(), Some("hi"));
    }

    #[test]
    fn test_text_requires_text() {
        let result = serde_json::from_value::<Element>(json!({"type": "heading2"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result = serde_json::from_value::<Element>(json!({"type": "heading7", "text": "x"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_bare_heading_kind() {
        let element: Element =
            serde_json::from_value(json!({"type": "heading", "text": "Title"})).unwrap();
        assert!(element.kind().is_heading());
        assert_eq!(element.kind().heading_level(), None);
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(ElementKind::Heading1.heading_level(), Some(1));
        assert_eq!(ElementKind::Heading6.heading_level(), Some(6));
        assert_eq!(ElementKind::Paragraph.heading_level(), None);
        assert!(ElementKind::Paragraph.is_text());
        assert!(!ElementKind::Container.is_text());
    }

    #[test]
    fn test_kind_tags_round_trip_through_from_tag() {
        for kind in ElementKind::ALL {
            assert_eq!(ElementKind::from_tag(kind.as_str()), Some(kind));
        }
        assert_eq!(ElementKind::from_tag("section"), None);
    }

    #[test]
    fn test_image_dimensions_number_or_string() {
        let element: Element = serde_json::from_value(json!({
            "type": "image",
            "source": "cat.jpg",
            "width": 320,
            "height": "240",
            "layout": "fixed"
        }))
        .unwrap();

        let media = element.into_media().unwrap();
        assert_eq!(media.width(), &Dimension::Number(320.0));
        assert_eq!(media.height(), &Dimension::Text("240".to_string()));
        assert_eq!(media.layout(), MediaLayout::Fixed);
    }

    #[test]
    fn test_image_requires_layout() {
        let result = serde_json::from_value::<Element>(json!({
            "type": "image",
            "source": "cat.jpg",
            "width": 1,
            "height": 1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_media_layout_tokens() {
        let layouts: Vec<MediaLayout> = serde_json::from_value(json!([
            "fill", "fixed", "fixed-height", "flex-item", "nodisplay", "responsive"
        ]))
        .unwrap();
        assert_eq!(layouts[3], MediaLayout::FlexItem);
        assert_eq!(layouts[4], MediaLayout::NoDisplay);
    }

    #[test]
    fn test_video_loop_only_true() {
        let video = json!({
            "type": "video",
            "sources": [{"source": "clip.mp4", "type": "video/mp4"}],
            "loop": true,
            "width": "100%",
            "height": 200,
            "layout": "responsive"
        });
        let element: Element = serde_json::from_value(video.clone()).unwrap();
        match element {
            Element::Video(v) => {
                assert_eq!(v.looped, Some(LiteralTrue));
                assert_eq!(v.autoplay, None);
                assert_eq!(v.sources[0].mime_type, "video/mp4");
            }
            other => panic!("expected video, got {}", other.kind()),
        }

        let mut looped_false = video;
        looped_false["loop"] = json!(false);
        assert!(serde_json::from_value::<Element>(looped_false).is_err());
    }

    #[test]
    fn test_media_element_excludes_text() {
        let result = serde_json::from_value::<MediaElement>(json!({"type": "paragraph", "text": "x"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_descendant_count() {
        let element: Element = serde_json::from_value(json!({
            "type": "container",
            "elements": [
                {"type": "heading1", "text": "a"},
                {"type": "container", "elements": [{"type": "paragraph", "text": "b"}]}
            ]
        }))
        .unwrap();
        assert_eq!(element.descendant_count(), 3);
    }

    #[test]
    fn test_element_styles_keyed_by_kind() {
        let styles: ElementStyles = serde_json::from_value(json!({
            "heading1": {"fontSize": 32},
            "paragraph": {"lineHeight": 1.4}
        }))
        .unwrap();
        assert_eq!(styles.len(), 2);
        assert_eq!(styles[&ElementKind::Paragraph].line_height, Some(1.4));

        assert!(serde_json::from_value::<ElementStyles>(json!({"span": {}})).is_err());
    }

    #[test]
    fn test_generic_styles_slot() {
        #[derive(Debug, PartialEq, Deserialize)]
        struct Theme {
            accent: String,
        }

        let text: ParagraphElement<Theme> = serde_json::from_value(json!({
            "type": "paragraph",
            "text": "x",
            "styles": {"accent": "red"}
        }))
        .unwrap();
        assert_eq!(text.styles.unwrap().accent, "red");
    }

    #[test]
    fn test_standalone_shapes_check_their_tag() {
        let paragraph = json!({"type": "paragraph", "text": "hi"});
        assert!(serde_json::from_value::<ContainerElement>(paragraph.clone()).is_err());
        assert!(serde_json::from_value::<HeadingElement>(paragraph.clone()).is_err());
        assert!(serde_json::from_value::<ParagraphElement>(paragraph).is_ok());

        let untagged = json!({"text": "hi"});
        assert!(serde_json::from_value::<ParagraphElement>(untagged).is_err());

        let video_tagged = json!({"type": "video", "source": "a.jpg", "width": 1, "height": 1, "layout": "fill"});
        assert!(serde_json::from_value::<ImageElement>(video_tagged).is_err());
    }

    #[test]
    fn test_heading_shape_accepts_every_heading_tag() {
        for tag in ["heading", "heading1", "heading2", "heading3", "heading4", "heading5", "heading6"] {
            let heading: HeadingElement =
                serde_json::from_value(json!({"type": tag, "text": "t"})).unwrap();
            assert_eq!(ElementKind::from(heading.kind).as_str(), tag);
        }
        let heading: HeadingElement =
            serde_json::from_value(json!({"type": "heading4", "text": "t"})).unwrap();
        assert_eq!(heading.kind.level(), Some(4));
        assert_eq!(HeadingKind::Heading.level(), None);
    }

    #[test]
    fn test_element_serializes_its_tag_once() {
        let element: Element =
            serde_json::from_value(json!({"type": "heading2", "text": "Title"})).unwrap();
        assert_eq!(
            serde_json::to_value(&element).unwrap(),
            json!({"type": "heading2", "text": "Title"})
        );

        let media = MediaElement::Image(ImageElement {
            kind: ImageTag::Image,
            alt: None,
            source: "a.jpg".to_string(),
            width: 1.0.into(),
            height: "auto".into(),
            layout: MediaLayout::Fill,
            styles: None,
        });
        let value = serde_json::to_value(&media).unwrap();
        assert_eq!(value["type"], "image");
        assert_eq!(serde_json::from_value::<MediaElement>(value).unwrap(), media);
    }

    #[test]
    fn test_nested_element_error_names_kinds() {
        let err = serde_json::from_value::<Element>(json!({
            "type": "container",
            "elements": [{"type": "paragraph"}]
        }))
        .unwrap_err()
        .to_string();
        assert!(err.contains("container element"), "{}", err);
        assert!(err.contains("paragraph element"), "{}", err);
        assert!(err.contains("text"), "{}", err);
    }
}
