use thiserror::Error;

/// Failure modes of [`crate::expand`].
///
/// Strings produced by [`crate::optimize`] never trigger any of these;
/// they only arise when the expander is handed text from outside the
/// codec's own grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    /// A parenthesis without a partner, or a parenthesis left over after
    /// group expansion.
    #[error("unbalanced parentheses in token stream")]
    UnbalancedParens,

    /// A `(` group with no decimal count immediately before it.
    #[error("group at char offset {offset} has no repeat count")]
    MissingCount {
        /// Char offset of the `(` in the text being expanded.
        offset: usize,
    },

    /// A run of digits with no symbol after it to repeat.
    #[error("count {digits:?} is not followed by a symbol")]
    DanglingCount {
        /// The digit run as written.
        digits: String,
    },

    /// A count too large to repeat anything by.
    #[error("count {digits:?} does not fit in usize")]
    CountOverflow {
        /// The digit run as written.
        digits: String,
    },

    /// Expansion would produce more characters than the codec is willing
    /// to allocate. Compressor output never expands past the size of the
    /// string it was built from, so this only fires on hand-written
    /// token streams.
    #[error("expanded output would exceed {limit} characters")]
    TooLarge {
        /// The expansion ceiling, in characters.
        limit: usize,
    },
}
