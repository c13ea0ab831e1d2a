//! Entry points: URL string plus selection mask in, [`ParsedUrl`] out.

use crate::assemble::{assemble, ParsedUrl};
use crate::error::ParseError;
use crate::grammar::{Rfc3986Grammar, UriGrammar};
use crate::options::SelectionMask;

/// Parses `url` with the default grammar, populating the fields in `mask`.
///
/// # Examples
///
/// - `parse("http://h/?a=1&a=2", SelectionMask::ALL)` → host `h`, path `/`,
///   query `{a: ["1", "2"]}`
/// - `parse("", SelectionMask::ALL)` → `Err(ParseError::EmptyInput)`
pub fn parse(url: &str, mask: SelectionMask) -> Result<ParsedUrl, ParseError> {
    parse_with(&Rfc3986Grammar, url, mask)
}

/// Like [`parse`], with a caller-supplied grammar.
pub fn parse_with<G>(grammar: &G, url: &str, mask: SelectionMask) -> Result<ParsedUrl, ParseError>
where
    G: UriGrammar + ?Sized,
{
    if url.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let parts = grammar.split(url).map_err(|e| {
        tracing::debug!(error = %e, "grammar rejected url");
        ParseError::from(e)
    })?;
    tracing::debug!(
        %mask,
        relative = parts.scheme.is_none(),
        has_query = !parts.query.is_empty(),
        "split url"
    );
    assemble(parts, mask)
}
