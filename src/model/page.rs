//! Page-level types.

use super::Layer;
use serde::{Deserialize, Serialize};

/// A single page of a story.
///
/// The shape is exact: fields other than `id` and `layers` are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Page<L = Layer> {
    /// Page identifier
    pub id: String,

    /// Layers, back to front
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub layers: Option<Vec<L>>,
}

impl<L> Page<L> {
    /// Layers of the page; empty when none are declared.
    pub fn layers(&self) -> &[L] {
        self.layers.as_deref().unwrap_or(&[])
    }

    /// Get the number of layers on the page.
    pub fn layer_count(&self) -> usize {
        self.layers().len()
    }

    /// Check if the page has no layers.
    pub fn is_empty(&self) -> bool {
        self.layers().is_empty()
    }
}

impl Page {
    /// Number of elements on the page, including nested ones.
    pub fn element_count(&self) -> usize {
        self.layers().iter().map(Layer::element_count).sum()
    }
}
