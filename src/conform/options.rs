//! Conformance options and configuration.

/// How `thirds` layers treat fields beyond their declared set.
///
/// The other layer templates are always exact. Whether `thirds` should be
/// too is an open question, so both readings are available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThirdsMode {
    /// Accept undeclared fields (the schema as written)
    #[default]
    Open,

    /// Reject undeclared fields, like `fill`, `vertical` and `horizontal`
    Exact,
}

/// Options for checking documents against the schema.
#[derive(Debug, Clone)]
pub struct ConformOptions {
    /// Treatment of undeclared fields on `thirds` layers
    pub thirds: ThirdsMode,

    /// Log a warning for each open `thirds` layer with undeclared fields
    pub warn_on_open_thirds: bool,
}

impl ConformOptions {
    /// Create new conformance options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the thirds mode.
    pub fn with_thirds_mode(mut self, mode: ThirdsMode) -> Self {
        self.thirds = mode;
        self
    }

    /// Reject undeclared fields on `thirds` layers.
    pub fn exact_thirds(mut self) -> Self {
        self.thirds = ThirdsMode::Exact;
        self
    }

    /// Enable or disable warnings for open `thirds` layers.
    pub fn with_warnings(mut self, warn: bool) -> Self {
        self.warn_on_open_thirds = warn;
        self
    }
}

impl Default for ConformOptions {
    fn default() -> Self {
        Self {
            thirds: ThirdsMode::Open,
            warn_on_open_thirds: true,
        }
    }
}
