//! Source location spans for mapping model objects back to their declaration

/// A span of source text
///
/// A span is a pair of source locations, the start being inclusive and the end
/// exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    start: SourceLocation,
    end: SourceLocation,
}

impl Span {
    /// Creates a new span from a start and end source location
    ///
    /// # Panics
    ///
    /// Panics if `end` comes before `start`.
    #[must_use]
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        assert!(
            start.offset <= end.offset,
            "start offset must not come after end offset"
        );

        Self { start, end }
    }

    /// Returns the start source location
    #[must_use]
    pub const fn start(&self) -> &SourceLocation {
        &self.start
    }

    /// Returns the end source location
    #[must_use]
    pub const fn end(&self) -> &SourceLocation {
        &self.end
    }

    /// Returns the number of bytes covered by the span
    #[must_use]
    pub const fn length(&self) -> usize {
        self.end.offset - self.start.offset
    }
}

/// A position in the source text
///
/// The offset is assumed to correspond to the line and column. Code that
/// displays locations relies on that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    /// The byte offset from the beginning of the source (0-indexed)
    pub offset: usize,
    /// The line number (1-indexed)
    pub line: usize,
    /// The column number (1-indexed)
    pub column: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(offset: usize, line: usize, column: usize) -> SourceLocation {
        SourceLocation {
            offset,
            line,
            column,
        }
    }

    #[test]
    fn length_is_end_minus_start() {
        let span = Span::new(location(4, 1, 5), location(10, 1, 11));
        assert_eq!(span.length(), 6);
        assert_eq!(span.start().column, 5);
        assert_eq!(span.end().offset, 10);
    }

    #[test]
    fn empty_span_is_allowed() {
        let span = Span::new(location(3, 2, 1), location(3, 2, 1));
        assert_eq!(span.length(), 0);
    }

    #[test]
    #[should_panic(expected = "start offset must not come after end offset")]
    fn reversed_span_panics() {
        let _ = Span::new(location(10, 1, 11), location(4, 1, 5));
    }
}
