//! Error types for storyshape library.

use std::io;
use thiserror::Error;

/// Result type alias for storyshape operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while checking or emitting story documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not well-formed JSON.
    #[error("JSON syntax error: {0}")]
    Syntax(String),

    /// The input does not conform to the requested shape.
    #[error("Shape mismatch: {0}")]
    Shape(String),

    /// A `thirds` layer carries fields outside its declared set while
    /// exact thirds checking is enabled.
    #[error("Thirds layer at {location} has undeclared fields: {}", .fields.join(", "))]
    InexactLayer {
        /// Where the layer sits, e.g. `page "cover", layer 2`
        location: String,
        /// Names of the extra fields
        fields: Vec<String>,
    },

    /// The input could not be matched to any known shape.
    #[error("Unknown shape: {0}")]
    UnknownShape(String),

    /// Error while writing a value back to JSON.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Io => Error::Io(err.into()),
            serde_json::error::Category::Syntax | serde_json::error::Category::Eof => {
                Error::Syntax(err.to_string())
            }
            serde_json::error::Category::Data => Error::Shape(err.to_string()),
        }
    }
}
