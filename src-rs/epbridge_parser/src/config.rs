/// Configuration for the model description parser.
///
/// The configuration travels with the input span, so every parser can see it
/// without it being threaded through by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    allow_unnamed_objects: bool,
}

impl Config {
    /// Creates a configuration with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            allow_unnamed_objects: true,
        }
    }

    /// Sets whether objects may be declared without a name.
    ///
    /// Unnamed objects are allowed by default and receive a generated name
    /// when they are translated.
    #[must_use]
    pub const fn with_allow_unnamed_objects(mut self, allow: bool) -> Self {
        self.allow_unnamed_objects = allow;
        self
    }

    /// Returns whether objects may be declared without a name.
    #[must_use]
    pub const fn allow_unnamed_objects(&self) -> bool {
        self.allow_unnamed_objects
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
