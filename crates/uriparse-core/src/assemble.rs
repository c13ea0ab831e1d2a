//! Result assembly: applies the selection mask and per-field emission rules
//! to the grammar's components and the decoded query.

use serde::Serialize;

use crate::error::ParseError;
use crate::grammar::UriComponents;
use crate::options::SelectionMask;
use crate::query::{self, QueryMap, SuffixMap};

/// Path reported when the URL has none, or when the path was not selected.
pub const DEFAULT_PATH: &str = "/";

/// Credentials; only ever emitted as a complete pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Auth {
    pub user: String,
    pub password: String,
}

/// Structured URL. Absent fields are omitted when serialized; `path` is
/// always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedUrl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<Auth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<QueryMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_suffix: Option<SuffixMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment: Option<String>,
}

fn selected(mask: SelectionMask, flag: SelectionMask, value: String) -> Option<String> {
    (mask.contains(flag) && !value.is_empty()).then_some(value)
}

/// Builds a [`ParsedUrl`] from grammar output.
///
/// The query decoder only runs when [`SelectionMask::QUERY`] is set and the
/// raw query is non-empty.
pub fn assemble(parts: UriComponents, mask: SelectionMask) -> Result<ParsedUrl, ParseError> {
    let UriComponents {
        scheme,
        user,
        password,
        host,
        port,
        path,
        query: raw_query,
        fragment,
    } = parts;

    // A relative reference simply has no protocol. A scheme delimiter with
    // nothing before it is a grammar inconsistency.
    let protocol = match scheme {
        Some(scheme) if scheme.is_empty() && mask.contains(SelectionMask::PROTOCOL) => {
            return Err(ParseError::MalformedUrl(
                "grammar reported an empty scheme".to_string(),
            ));
        }
        Some(scheme) => selected(mask, SelectionMask::PROTOCOL, scheme),
        None => None,
    };

    let auth = if mask.contains(SelectionMask::AUTH) && !user.is_empty() && !password.is_empty() {
        Some(Auth { user, password })
    } else {
        if mask.contains(SelectionMask::AUTH) && (!user.is_empty() || !password.is_empty()) {
            tracing::debug!("dropping partial credentials");
        }
        None
    };

    let (query, query_suffix) = if mask.contains(SelectionMask::QUERY) && !raw_query.is_empty() {
        match query::decode(&raw_query) {
            Some(decoded) => {
                let suffix = (!decoded.suffix.is_empty()).then_some(decoded.suffix);
                (Some(decoded.query), suffix)
            }
            None => (None, None),
        }
    } else {
        (None, None)
    };

    let path =
        selected(mask, SelectionMask::PATH, path).unwrap_or_else(|| DEFAULT_PATH.to_string());

    Ok(ParsedUrl {
        protocol,
        auth,
        host: selected(mask, SelectionMask::HOST, host),
        port: selected(mask, SelectionMask::PORT, port),
        path,
        query,
        query_suffix,
        fragment: selected(mask, SelectionMask::FRAGMENT, fragment),
    })
}
