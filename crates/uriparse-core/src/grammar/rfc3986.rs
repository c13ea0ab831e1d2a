//! Grammar backed by `fluent-uri` (RFC 3986 URI references).

use fluent_uri::UriRef as Uri;

use super::{GrammarError, UriComponents, UriGrammar};

/// Default grammar. Every component is reported exactly as it appears in
/// the input: no case folding, no dot-segment removal, no re-encoding.
/// Relative references are accepted and carry no scheme.
///
/// Literal `[` and `]` are tolerated in the query and fragment, where RFC 3986
/// only allows them percent-encoded, so `a[]=1` style keys reach the decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rfc3986Grammar;

/// Splits `input` before its first `?` or `#`. The path never contains either.
fn split_tail(input: &str) -> (&str, &str) {
    let at = input.find(|c: char| c == '?' || c == '#').unwrap_or(input.len());
    input.split_at(at)
}

/// Raw query and fragment from a tail starting at `?`, `#`, or empty.
fn query_and_fragment(tail: &str) -> (&str, &str) {
    let (before_hash, fragment) = tail.split_once('#').unwrap_or((tail, ""));
    (before_hash.strip_prefix('?').unwrap_or(before_hash), fragment)
}

impl UriGrammar for Rfc3986Grammar {
    fn split(&self, input: &str) -> Result<UriComponents, GrammarError> {
        let (head, tail) = split_tail(input);
        // Brackets only get escaped in the tail, so everything fluent-uri
        // reports for the head is still a slice of the input.
        let checked = format!("{head}{}", tail.replace('[', "%5B").replace(']', "%5D"));
        let uri = Uri::parse(checked.as_str()).map_err(|e| GrammarError(e.to_string()))?;

        let (query, fragment) = query_and_fragment(tail);
        let mut parts = UriComponents {
            scheme: uri.scheme().map(|s| s.as_str().to_string()),
            path: uri.path().as_str().to_string(),
            query: query.to_string(),
            fragment: fragment.to_string(),
            ..UriComponents::default()
        };

        if let Some(authority) = uri.authority() {
            let raw = authority.as_str();
            let host = authority.host();
            let host_port = match raw.split_once('@') {
                Some((userinfo, rest)) => {
                    let (user, password) = userinfo.split_once(':').unwrap_or((userinfo, ""));
                    parts.user = user.to_string();
                    parts.password = password.to_string();
                    rest
                }
                None => raw,
            };
            parts.host = host.to_string();
            parts.port = host_port
                .strip_prefix(host)
                .and_then(|rest| rest.strip_prefix(':'))
                .unwrap_or_default()
                .to_string();
        }

        Ok(parts)
    }
}
