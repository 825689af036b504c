//! Errors returned while parsing, building, or querying a [`MediaType`].
//!
//! [`MediaType`]: crate::MediaType

use std::fmt;
use std::error::Error as StdError;

/// The grammar rule a [`GrammarError`] reports as violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum GrammarErrorKind {
    /// The input was empty or contained only whitespace.
    Empty,
    /// There was no `/` separating the type from the subtype.
    MissingSlash,
    /// Nothing preceded the `/`.
    MissingType,
    /// Nothing followed the `/`.
    MissingSubtype,
    /// A `;` was not followed by a parameter attribute.
    MissingAttribute,
    /// A parameter attribute was not followed by `=`.
    MissingEquals,
    /// A `=` was not followed by a parameter value.
    MissingValue,
    /// A quoted parameter value was never closed.
    UnterminatedQuote,
    /// A character not allowed at its position.
    InvalidChar(char),
}

/// The input does not match the structural media type grammar.
///
/// The `index` is a byte offset into the input and is advisory: it points at
/// or near the offending character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarError {
    kind: GrammarErrorKind,
    index: usize,
    input: String,
}

impl GrammarError {
    pub(crate) fn new(kind: GrammarErrorKind, index: usize, input: &str) -> GrammarError {
        GrammarError { kind, index, input: input.to_string() }
    }

    /// The rule that was violated.
    #[inline]
    pub fn kind(&self) -> GrammarErrorKind {
        self.kind
    }

    /// The byte offset in [`input()`](GrammarError::input()) where parsing
    /// stopped.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The complete string that failed to parse.
    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for GrammarErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GrammarErrorKind::Empty => write!(f, "empty media type"),
            GrammarErrorKind::MissingSlash => write!(f, "expected '/' after type"),
            GrammarErrorKind::MissingType => write!(f, "missing type before '/'"),
            GrammarErrorKind::MissingSubtype => write!(f, "missing subtype"),
            GrammarErrorKind::MissingAttribute => write!(f, "expected parameter attribute after ';'"),
            GrammarErrorKind::MissingEquals => write!(f, "expected '=' after parameter attribute"),
            GrammarErrorKind::MissingValue => write!(f, "missing parameter value after '='"),
            GrammarErrorKind::UnterminatedQuote => write!(f, "unterminated quoted string"),
            GrammarErrorKind::InvalidChar(c) => write!(f, "unexpected character {:?}", c),
        }
    }
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at index {} in {:?}", self.kind, self.index, self.input)
    }
}

impl StdError for GrammarError {  }

/// The position of a token within a media type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Type,
    Subtype,
    Attribute,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Type => f.write_str("type"),
            TokenKind::Subtype => f.write_str("subtype"),
            TokenKind::Attribute => f.write_str("parameter attribute"),
        }
    }
}

/// A media type could not be parsed or built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The string didn't match the grammar.
    Grammar(GrammarError),
    /// A type, subtype, or attribute contains characters outside the token
    /// class, or is empty.
    InvalidToken {
        kind: TokenKind,
        token: String,
    },
    /// A parameter value contains a non-ASCII or control character.
    InvalidValue {
        attribute: String,
        value: String,
    },
    /// The type is `*` but the subtype isn't.
    WildcardType {
        subtype: String,
    },
}

impl ValidationError {
    /// Returns the underlying grammar error if this error came from the
    /// tokenizer.
    pub fn grammar(&self) -> Option<&GrammarError> {
        match self {
            ValidationError::Grammar(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GrammarError> for ValidationError {
    #[inline(always)]
    fn from(error: GrammarError) -> Self {
        ValidationError::Grammar(error)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Grammar(e) => write!(f, "malformed media type: {}", e),
            ValidationError::InvalidToken { kind, token } => {
                write!(f, "invalid {}: {:?}", kind, token)
            }
            ValidationError::InvalidValue { attribute, value } => {
                write!(f, "invalid value for parameter {:?}: {:?}", attribute, value)
            }
            ValidationError::WildcardType { subtype } => {
                write!(f, "wildcard type requires a wildcard subtype, found {:?}", subtype)
            }
        }
    }
}

impl StdError for ValidationError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ValidationError::Grammar(e) => Some(e),
            _ => None,
        }
    }
}

/// The `charset` parameter of a media type could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharsetError {
    /// More than one distinct `charset` value is present.
    Ambiguous(Vec<String>),
    /// The value isn't a syntactically legal charset name.
    IllegalName(String),
    /// The name is legal but no encoding is registered under it.
    Unsupported(String),
}

impl fmt::Display for CharsetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharsetError::Ambiguous(values) => {
                write!(f, "multiple charset values: {:?}", values)
            }
            CharsetError::IllegalName(name) => write!(f, "illegal charset name: {:?}", name),
            CharsetError::Unsupported(name) => write!(f, "unsupported charset: {:?}", name),
        }
    }
}

impl StdError for CharsetError {  }
