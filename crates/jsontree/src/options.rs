/// Configuration options for the JSON parser.
///
/// # Examples
///
/// ```rust
/// use jsontree::{ErrorKind, ParserOptions, parse_with_options};
///
/// let options = ParserOptions {
///     max_depth: 2,
///     ..Default::default()
/// };
/// assert!(parse_with_options("[[1]]", options).is_ok());
/// let err = parse_with_options("[[[1]]]", options).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DepthLimitExceeded);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum number of arrays and objects that may be open at once.
    ///
    /// Each nesting level costs one stack frame of recursion, so this bounds
    /// stack usage on adversarial input. Opening a container beyond the limit
    /// fails with [`ErrorKind::DepthLimitExceeded`](crate::ErrorKind).
    ///
    /// # Default
    ///
    /// `128`
    pub max_depth: usize,
}

impl ParserOptions {
    /// Nesting limit used by [`ParserOptions::default`].
    pub const DEFAULT_MAX_DEPTH: usize = 128;
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
