/// Supplementary information attached to an error or diagnostic.
///
/// Context lines are printed after the main message and help users
/// understand what went wrong and how to resolve it.
///
/// # Examples
///
/// ```rust
/// use epbridge_shared::error::Context;
///
/// let note = Context::Note("zone 'Core' was declared here".to_string());
/// let help = Context::Help("remove one of the spaces or split the zone".to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// Additional information about the error.
    Note(String),

    /// A suggestion for resolving the error.
    Help(String),
}
