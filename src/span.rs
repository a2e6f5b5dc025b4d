/// A location in the source text.
///
/// Spans are attached to tokens, AST nodes and errors purely for diagnostics;
/// evaluation never looks at them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Line number, starting at 1.
    pub line:   usize,
    /// Byte offset of the first character, starting at 0.
    pub offset: usize,
    /// Number of bytes covered. Zero only for synthetic positions such as the
    /// end of input.
    pub length: usize,
}

impl Default for Span {
    fn default() -> Self {
        Self { line:   1,
               offset: 0,
               length: 0, }
    }
}

impl Span {
    /// Creates a span from its three components.
    ///
    /// # Example
    /// ```
    /// use lox::span::Span;
    ///
    /// let span = Span::new(2, 10, 3);
    ///
    /// assert_eq!(span.end(), 13);
    /// ```
    #[must_use]
    pub const fn new(line: usize, offset: usize, length: usize) -> Self {
        Self { line,
               offset,
               length }
    }

    /// Byte offset one past the last covered byte.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.length
    }

    /// A zero-length span placed right after `self`, on the same line.
    #[must_use]
    pub const fn after(&self) -> Self {
        Self::new(self.line, self.end(), 0)
    }
}
