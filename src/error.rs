use thiserror::Error;

/// Classification of a failed parse.
///
/// The parser stops at the first error; there is no recovery or multi-error
/// accumulation. Variants carry no position information — the classification
/// is the whole diagnostic surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input is empty or contains only whitespace.
    #[error("expected a value")]
    ExpectValue,
    /// Syntactic garbage at a value position, including malformed literals
    /// and numbers (`nul`, `+1`, `.5`, `1.`, `INF`).
    #[error("invalid value")]
    InvalidValue,
    /// Non-whitespace input remains after a complete root value.
    #[error("unexpected trailing characters after the root value")]
    RootNotSingular,
    /// A syntactically valid number overflows an `f64` to ±∞.
    #[error("number out of range")]
    NumberTooBig,
    /// A string ran off the end of the input before its closing `"`.
    #[error("missing closing quotation mark")]
    MissQuotationMark,
    /// An escape sequence other than `\" \\ \/ \b \f \n \r \t \uXXXX`.
    #[error("invalid escape sequence in string")]
    InvalidStringEscape,
    /// An unescaped control character (below U+0020) inside a string.
    #[error("invalid raw character in string")]
    InvalidStringChar,
    /// `\u` not followed by exactly four hexadecimal digits.
    #[error("invalid unicode escape")]
    InvalidUnicodeHex,
    /// A malformed or incomplete surrogate pair.
    #[error("invalid unicode surrogate pair")]
    InvalidUnicodeSurrogate,
    /// An array element not followed by `,` or `]`.
    #[error("expected ',' or ']' in array")]
    MissCommaOrSquareBracket,
    /// An object member key missing where one is required.
    #[error("expected a member key")]
    MissKey,
    /// An object member key not followed by `:`.
    #[error("expected ':' after member key")]
    MissColon,
    /// An object member not followed by `,` or `}`.
    #[error("expected ',' or '}}' in object")]
    MissCommaOrCurlyBracket,
    /// Container nesting exceeded [`ParserOptions::max_depth`].
    ///
    /// [`ParserOptions::max_depth`]: crate::ParserOptions::max_depth
    #[error("nesting depth limit exceeded")]
    RecursionLimitExceeded,
}
