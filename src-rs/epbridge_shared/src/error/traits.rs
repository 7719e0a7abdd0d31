use crate::error::{Context, ErrorLocation};

/// Trait for types that can be reported to a user as an epbridge error.
///
/// Every error type in the workspace implements this so the command line
/// tool can print them all the same way.
pub trait AsBridgeError {
    /// Returns the primary error message.
    ///
    /// This should be a short, lowercase description of what went wrong.
    fn message(&self) -> String;

    /// Returns notes and help attached to the error.
    ///
    /// Returns an empty vector if no context is available.
    fn context(&self) -> Vec<Context> {
        vec![]
    }

    /// Returns the location of the error in the given source text, if the
    /// error originated in a model description.
    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        let _ = source;
        None
    }
}
