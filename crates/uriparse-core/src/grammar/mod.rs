//! URI grammar collaborator.
//!
//! Splits a raw string into its syntactic substrings. The assembler only sees
//! [`UriComponents`]; any grammar implementation can sit behind [`UriGrammar`].

mod rfc3986;

pub use rfc3986::Rfc3986Grammar;

use thiserror::Error;

/// Syntactic pieces of a URL, as substrings of the input. Absent components
/// are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UriComponents {
    /// `None` for a relative reference. `Some("")` means the grammar saw a
    /// scheme delimiter but no scheme, which the assembler rejects.
    pub scheme: Option<String>,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: String,
    pub path: String,
    /// Raw query, without the leading `?`.
    pub query: String,
    /// Raw fragment, without the leading `#`.
    pub fragment: String,
}

/// The grammar could not make sense of the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct GrammarError(pub String);

/// Splits URL strings into [`UriComponents`].
pub trait UriGrammar {
    fn split(&self, input: &str) -> Result<UriComponents, GrammarError>;
}
