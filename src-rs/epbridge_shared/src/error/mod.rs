//! Errors as presented to users of epbridge

mod context;
mod location;
mod traits;

use std::path::PathBuf;

pub use context::Context;
pub use location::ErrorLocation;
pub use traits::AsBridgeError;

/// Unified error representation for epbridge
///
/// Holds everything the command line tool needs to print an error: the file
/// it came from (if any), the message, an optional source location, and any
/// notes or help.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeError {
    path: Option<PathBuf>,
    message: String,
    location: Option<ErrorLocation>,
    context: Vec<Context>,
}

impl BridgeError {
    /// Creates a new `BridgeError` without source location information.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that implements `AsBridgeError`
    /// * `path` - The file the error relates to, if any
    ///
    /// # Examples
    ///
    /// ```rust
    /// use epbridge_shared::error::{AsBridgeError, BridgeError};
    ///
    /// struct SimpleError(String);
    ///
    /// impl AsBridgeError for SimpleError {
    ///     fn message(&self) -> String {
    ///         self.0.clone()
    ///     }
    /// }
    ///
    /// let error = SimpleError("zone has two spaces".to_string());
    /// let error = BridgeError::from_error(&error, None);
    /// assert_eq!(error.message(), "zone has two spaces");
    /// ```
    pub fn from_error(error: &impl AsBridgeError, path: Option<PathBuf>) -> Self {
        Self {
            path,
            message: error.message(),
            location: None,
            context: error.context(),
        }
    }

    /// Creates a new `BridgeError` with a location computed from the source
    /// text the error refers to.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that implements `AsBridgeError`
    /// * `path` - The path of the model description
    /// * `source` - The full contents of the model description
    pub fn from_error_with_source(error: &impl AsBridgeError, path: PathBuf, source: &str) -> Self {
        Self {
            path: Some(path),
            message: error.message(),
            location: error.error_location(source),
            context: error.context(),
        }
    }

    /// Returns the file the error relates to
    #[must_use]
    pub const fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }

    /// Returns the error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the source location, if known
    #[must_use]
    pub const fn location(&self) -> Option<&ErrorLocation> {
        self.location.as_ref()
    }

    /// Returns the notes and help attached to the error
    #[must_use]
    pub fn context(&self) -> &[Context] {
        &self.context
    }
}
