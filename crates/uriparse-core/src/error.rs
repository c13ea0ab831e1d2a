//! Error type returned by [`crate::parse`] and the dynamic argument front-end.

use thiserror::Error;

use crate::grammar::GrammarError;

/// Failure of a single parse call. No partial result accompanies an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// First argument missing or not a string.
    #[error("first argument has to be a string")]
    InvalidArgument,
    /// The url string has zero length.
    #[error("url string mustn't be empty")]
    EmptyInput,
    /// The grammar collaborator rejected the input, or returned components
    /// that contradict the requested selection.
    #[error("malformed url: {0}")]
    MalformedUrl(String),
}

impl From<GrammarError> for ParseError {
    fn from(e: GrammarError) -> Self {
        ParseError::MalformedUrl(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            ParseError::InvalidArgument.to_string(),
            "first argument has to be a string"
        );
        assert_eq!(ParseError::EmptyInput.to_string(), "url string mustn't be empty");
        assert_eq!(
            ParseError::MalformedUrl("relative URL without a base".into()).to_string(),
            "malformed url: relative URL without a base"
        );
    }

    #[test]
    fn grammar_error_becomes_malformed() {
        let err: ParseError = GrammarError("invalid port number".into()).into();
        assert_eq!(err, ParseError::MalformedUrl("invalid port number".into()));
    }
}
