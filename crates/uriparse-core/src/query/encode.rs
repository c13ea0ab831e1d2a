//! Canonical re-encoding of a decoded query.

use super::{QueryMap, SuffixMap};

/// Writes `query` back out as a query string (no leading `?`).
///
/// Keys come out in map order with their recorded array marker re-attached,
/// one `key=value` pair per value. Feeding the result to
/// [`decode`](super::decode) yields the same maps.
pub fn encode(query: &QueryMap, suffix: &SuffixMap) -> String {
    let mut out = String::new();
    for (key, value) in query.iter() {
        let marker = suffix.get(key).map(|m| m.as_str()).unwrap_or("");
        for v in value.values() {
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str(key);
            out.push_str(marker);
            out.push('=');
            out.push_str(v);
        }
    }
    out
}
