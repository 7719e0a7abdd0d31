use crate::span::Span;

/// Width used when expanding tab characters for display
const TAB_WIDTH: usize = 4;

/// Where in a model description an error occurred
///
/// Line and column numbers are 1-indexed. The column accounts for tabs being
/// displayed as four spaces, and `line_source` has its tabs expanded the same
/// way so that a pointer printed under it lines up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLocation {
    offset: usize,
    line: usize,
    column: usize,
    length: usize,
    line_source: String,
}

impl ErrorLocation {
    fn new(source: &str, offset: usize, length: usize) -> Self {
        // clamp rather than panic so that a stale offset still produces
        // something printable
        let offset = offset.min(source.len());

        let line_start = source[..offset].rfind('\n').map_or(0, |index| index + 1);
        let line_end = source[offset..]
            .find('\n')
            .map_or(source.len(), |index| offset + index);

        let line = source[..offset].matches('\n').count() + 1;

        let before = &source[line_start..offset];
        let tab_count = before.matches('\t').count();
        let column = before.chars().count() + 1 + tab_count * (TAB_WIDTH - 1);

        // multi-line highlights are cut off at the end of the first line
        let length = length.clamp(1, (line_end - offset).max(1));

        let line_source = source[line_start..line_end].replace('\t', &" ".repeat(TAB_WIDTH));

        Self {
            offset,
            line,
            column,
            length,
            line_source,
        }
    }

    /// Creates an error location pointing at a single character
    #[must_use]
    pub fn from_source_and_offset(source: &str, offset: usize) -> Self {
        Self::new(source, offset, 1)
    }

    /// Creates an error location covering a span of the source
    #[must_use]
    pub fn from_source_and_span(source: &str, span: &Span) -> Self {
        Self::new(source, span.start().offset, span.length())
    }

    /// Returns the byte offset from the beginning of the source
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the line number (1-indexed)
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the column number (1-indexed)
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Returns the number of characters to highlight
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Returns the text of the line containing the error
    #[must_use]
    pub fn line_source(&self) -> &str {
        &self.line_source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::SourceLocation;

    #[test]
    fn offset_on_second_line() {
        let source = "Building \"B\" {\n  north_axis = x\n}\n";
        let offset = source.find('x').expect("source contains x");

        let location = ErrorLocation::from_source_and_offset(source, offset);

        assert_eq!(location.line(), 2);
        assert_eq!(location.column(), 16);
        assert_eq!(location.line_source(), "  north_axis = x");
        assert_eq!(location.length(), 1);
    }

    #[test]
    fn tabs_are_expanded() {
        let source = "\tvalue = 1";
        let location = ErrorLocation::from_source_and_offset(source, 1);

        assert_eq!(location.column(), 5);
        assert_eq!(location.line_source(), "    value = 1");
    }

    #[test]
    fn span_length_is_kept_within_the_line() {
        let source = "abc\ndef";
        let span = Span::new(
            SourceLocation {
                offset: 1,
                line: 1,
                column: 2,
            },
            SourceLocation {
                offset: 6,
                line: 2,
                column: 3,
            },
        );

        let location = ErrorLocation::from_source_and_span(source, &span);

        assert_eq!(location.line(), 1);
        assert_eq!(location.length(), 2);
    }

    #[test]
    fn offset_at_end_of_source() {
        let source = "Zone {";
        let location = ErrorLocation::from_source_and_offset(source, source.len());

        assert_eq!(location.line(), 1);
        assert_eq!(location.column(), 7);
        assert_eq!(location.length(), 1);
    }
}
