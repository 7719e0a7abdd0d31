//! Identity handles for source objects.

use std::fmt;

/// A stable handle to a source object within one [`SourceModel`](crate::SourceModel).
///
/// `ObjectId` is a small index into the model's arena. It is cheap to copy,
/// comparable and hashable, which lets the translator use it as the key of
/// its memo table. Handles from one model mean nothing in another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(usize);

impl ObjectId {
    /// Creates a handle from an arena index.
    ///
    /// # Example
    ///
    /// ```rust
    /// use epbridge_model::ObjectId;
    ///
    /// let id = ObjectId::new(3);
    /// assert_eq!(id.index(), 3);
    /// ```
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the arena index of this handle.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
