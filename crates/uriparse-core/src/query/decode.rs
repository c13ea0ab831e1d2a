//! Query-string decoder.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::{ArrayMarker, DecodedQuery, QueryMap, QueryValue, SuffixMap};

/// Decodes a raw query substring (after `?`, before `#`) into an ordered map.
///
/// Pairs are split on `&` (empty pairs skipped) and then on the first `=`.
/// Pairs with an empty key (`=x`) are dropped. A trailing `[]` or `%5B%5D`
/// on a key is stripped and recorded in the suffix map, and forces a list
/// value even for a single occurrence. Values are not percent-decoded.
///
/// Returns `None` when no key survives, so callers can omit the query
/// entirely rather than report an empty map.
///
/// # Examples
///
/// - `decode("a=1&a=2")` → `{a: ["1", "2"]}`
/// - `decode("a[]=1")` → `{a: ["1"]}` with suffix `{a: "[]"}`
/// - `decode("=x&b=y")` → `{b: "y"}`
pub fn decode(raw: &str) -> Option<DecodedQuery> {
    let mut seen: HashMap<&str, Occurrences<'_>> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for pair in raw.split('&').filter(|p| !p.is_empty()) {
        if pair.starts_with('=') {
            continue;
        }
        let (raw_key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let (key, marker) = match ArrayMarker::strip(raw_key) {
            Some((stem, marker)) => (stem, Some(marker)),
            None => (raw_key, None),
        };
        let slot = match seen.entry(key) {
            Entry::Vacant(slot) => {
                order.push(key);
                slot.insert(Occurrences::default())
            }
            Entry::Occupied(slot) => slot.into_mut(),
        };
        slot.values.push(value);
        if marker.is_some() {
            slot.marker = marker;
        }
    }

    if order.is_empty() {
        tracing::debug!(len = raw.len(), "query has no usable pairs");
        return None;
    }

    let mut entries = Vec::with_capacity(order.len());
    let mut markers = Vec::new();
    for key in order {
        let Some(occurrences) = seen.remove(key) else {
            continue;
        };
        let value = match (occurrences.values.as_slice(), occurrences.marker) {
            ([single], None) => QueryValue::Scalar(single.to_string()),
            (values, _) => QueryValue::List(values.iter().map(|v| v.to_string()).collect()),
        };
        if let Some(marker) = occurrences.marker {
            markers.push((key.to_string(), marker));
        }
        entries.push((key.to_string(), value));
    }

    let query: QueryMap = entries.into_iter().collect();
    let suffix: SuffixMap = markers.into_iter().collect();

    tracing::debug!(
        keys = query.len(),
        array_keys = suffix.len(),
        "decoded query string"
    );

    Some(DecodedQuery { query, suffix })
}

/// Values seen for one key, and the last array marker it carried.
#[derive(Default)]
struct Occurrences<'a> {
    values: Vec<&'a str>,
    marker: Option<ArrayMarker>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded(raw: &str) -> DecodedQuery {
        decode(raw).expect("non-empty query")
    }

    fn list(values: &[&str]) -> QueryValue {
        QueryValue::List(values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn repeated_key_becomes_list() {
        let d = decoded("a=1&a=2&a=3");
        assert_eq!(d.query.len(), 1);
        assert_eq!(d.query.get("a"), Some(&list(&["1", "2", "3"])));
        assert!(d.suffix.is_empty());
    }

    #[test]
    fn bracket_key_once_is_list() {
        let d = decoded("a[]=1");
        assert_eq!(d.query.get("a"), Some(&list(&["1"])));
        assert_eq!(d.suffix.get("a"), Some(ArrayMarker::Brackets));
    }

    #[test]
    fn encoded_bracket_key() {
        let d = decoded("a%5B%5D=1&a%5B%5D=2");
        assert_eq!(d.query.get("a"), Some(&list(&["1", "2"])));
        assert_eq!(d.suffix.get("a"), Some(ArrayMarker::EncodedBrackets));
        assert_eq!(d.suffix.len(), 1);
    }

    #[test]
    fn empty_key_pair_dropped() {
        let d = decoded("=x&b=y");
        assert_eq!(d.query.len(), 1);
        assert_eq!(d.query.get("b"), Some(&QueryValue::Scalar("y".into())));
    }

    #[test]
    fn key_without_equals_has_empty_value() {
        let d = decoded("k");
        assert_eq!(d.query.get("k"), Some(&QueryValue::Scalar(String::new())));
    }

    #[test]
    fn splits_on_first_equals_only() {
        let d = decoded("a=b=c&d==e");
        assert_eq!(d.query.get("a"), Some(&QueryValue::Scalar("b=c".into())));
        assert_eq!(d.query.get("d"), Some(&QueryValue::Scalar("=e".into())));
    }

    #[test]
    fn separators_do_not_create_keys() {
        let d = decoded("&&a=1&&b=2&");
        let keys: Vec<&str> = d.query.keys().collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn first_seen_order_kept() {
        let d = decoded("b=1&a=2&b=3&c=4");
        let keys: Vec<&str> = d.query.keys().collect();
        assert_eq!(keys, ["b", "a", "c"]);
        assert_eq!(d.query.get("b"), Some(&list(&["1", "3"])));
        assert_eq!(d.query.get("a"), Some(&QueryValue::Scalar("2".into())));
    }

    #[test]
    fn plain_and_bracket_forms_merge() {
        let d = decoded("a=1&a[]=2");
        assert_eq!(d.query.len(), 1);
        assert_eq!(d.query.get("a"), Some(&list(&["1", "2"])));
        assert_eq!(d.suffix.get("a"), Some(ArrayMarker::Brackets));
    }

    #[test]
    fn mixed_marker_forms_last_wins() {
        let d = decoded("a[]=1&a%5B%5D=2");
        assert_eq!(d.query.get("a"), Some(&list(&["1", "2"])));
        assert_eq!(d.suffix.get("a"), Some(ArrayMarker::EncodedBrackets));
    }

    #[test]
    fn bare_marker_key_is_verbatim() {
        let d = decoded("[]=1");
        assert_eq!(d.query.get("[]"), Some(&QueryValue::Scalar("1".into())));
        assert!(d.suffix.is_empty());
    }

    #[test]
    fn values_are_not_percent_decoded() {
        let d = decoded("q=a%20b&r=c+d");
        assert_eq!(d.query.get("q"), Some(&QueryValue::Scalar("a%20b".into())));
        assert_eq!(d.query.get("r"), Some(&QueryValue::Scalar("c+d".into())));
    }

    #[test]
    fn many_distinct_bracket_keys() {
        const N: usize = 50_000;
        let raw = (0..N)
            .map(|i| format!("k{i}[]={i}"))
            .chain((0..N).map(|i| format!("k{i}%5B%5D=again")))
            .collect::<Vec<_>>()
            .join("&");
        let d = decoded(&raw);
        assert_eq!(d.query.len(), N);
        assert_eq!(d.suffix.len(), N);
        assert_eq!(d.query.keys().next(), Some("k0"));
        assert_eq!(d.query.get("k49999"), Some(&list(&["49999", "again"])));
        assert_eq!(d.suffix.get("k123"), Some(ArrayMarker::EncodedBrackets));
    }

    #[test]
    fn nothing_usable_is_none() {
        assert!(decode("").is_none());
        assert!(decode("&&&").is_none());
        assert!(decode("=1&=2").is_none());
    }
}
