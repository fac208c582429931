//! Parser configuration.

/// Tunables for diagnostics produced by [`Parser`](super::Parser).
///
/// ```rust
/// use minisql_parser::ParserConfig;
///
/// let config = ParserConfig::default()
///     .context_before(30)
///     .report_furthest_error(false);
/// assert_eq!(config.context_before, 30);
/// assert_eq!(config.context_after, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Characters of source shown before the error position.
    pub context_before: usize,
    /// Characters of source shown from the error position onwards.
    pub context_after: usize,
    /// Surface the syntax error that got furthest into the input when all
    /// grammar alternatives fail, instead of the last one raised.
    pub report_furthest_error: bool,
}

impl ParserConfig {
    /// Default number of characters shown before the error position.
    pub const DEFAULT_CONTEXT_BEFORE: usize = 15;
    /// Default number of characters shown from the error position onwards.
    pub const DEFAULT_CONTEXT_AFTER: usize = 50;

    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            context_before: Self::DEFAULT_CONTEXT_BEFORE,
            context_after: Self::DEFAULT_CONTEXT_AFTER,
            report_furthest_error: true,
        }
    }

    /// Sets the number of characters shown before the error position.
    #[must_use]
    pub const fn context_before(mut self, chars: usize) -> Self {
        self.context_before = chars;
        self
    }

    /// Sets the number of characters shown from the error position onwards.
    #[must_use]
    pub const fn context_after(mut self, chars: usize) -> Self {
        self.context_after = chars;
        self
    }

    /// Enables or disables furthest-error reporting.
    #[must_use]
    pub const fn report_furthest_error(mut self, enabled: bool) -> Self {
        self.report_furthest_error = enabled;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}
