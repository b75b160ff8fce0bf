//! Span module - Source location tracking.
//!
//! This module provides [`Span`], the source location attached to
//! diagnostics. A span records the byte range of the offending text
//! together with the 1-based line it was reported on.

/// Source location span
///
/// # Examples
///
/// ```
/// use coolc_util::span::Span;
///
/// let span = Span::new(10, 20, 1);
/// assert_eq!(span.start, 10);
/// assert_eq!(span.line, 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
}

impl Span {
    /// Dummy span for diagnostics with no location
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
    };

    /// Create a new span
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32) -> Self {
        Self { start, end, line }
    }

    /// Create a span that only carries a line
    ///
    /// # Examples
    ///
    /// ```
    /// use coolc_util::span::Span;
    ///
    /// let point = Span::point(5);
    /// assert_eq!(point.start, point.end);
    /// assert_eq!(point.line, 5);
    /// ```
    #[inline]
    pub const fn point(line: u32) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
        }
    }
}
