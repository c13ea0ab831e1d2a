//! Query-string model: ordered key/value map plus the array-marker record.
//!
//! Keys keep first-seen order. A key maps to a scalar when it occurred once
//! without an array marker, and to an ordered list otherwise.

mod decode;
mod encode;

pub use decode::decode;
pub use encode::encode;

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Bracket notation observed on a key, e.g. `a[]=1` or `a%5B%5D=1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayMarker {
    /// Literal `[]`.
    Brackets,
    /// Percent-encoded `%5B%5D`.
    EncodedBrackets,
}

impl ArrayMarker {
    pub const fn as_str(self) -> &'static str {
        match self {
            ArrayMarker::Brackets => "[]",
            ArrayMarker::EncodedBrackets => "%5B%5D",
        }
    }

    /// Splits a trailing marker off `key`. The encoded form is checked first.
    ///
    /// A key consisting only of a marker is left alone so stripping never
    /// yields an empty key.
    pub(crate) fn strip(key: &str) -> Option<(&str, ArrayMarker)> {
        [ArrayMarker::EncodedBrackets, ArrayMarker::Brackets]
            .into_iter()
            .find_map(|marker| {
                key.strip_suffix(marker.as_str())
                    .filter(|stem| !stem.is_empty())
                    .map(|stem| (stem, marker))
            })
    }
}

impl Serialize for ArrayMarker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Value of a query key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Scalar(String),
    List(Vec<String>),
}

impl QueryValue {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            QueryValue::Scalar(s) => Some(s.as_str()),
            QueryValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            QueryValue::Scalar(_) => None,
            QueryValue::List(values) => Some(values.as_slice()),
        }
    }

    /// All values in occurrence order, whatever the shape.
    pub fn values(&self) -> &[String] {
        match self {
            QueryValue::Scalar(s) => std::slice::from_ref(s),
            QueryValue::List(values) => values.as_slice(),
        }
    }
}

impl Serialize for QueryValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            QueryValue::Scalar(s) => serializer.serialize_str(s),
            QueryValue::List(values) => values.serialize(serializer),
        }
    }
}

/// Insertion-ordered entries with a hash index on the key.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Ordered<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> Default for Ordered<V> {
    fn default() -> Self {
        Ordered {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> Ordered<V> {
    /// Inserts or replaces; a replaced entry keeps its position.
    fn insert(&mut self, key: String, value: V) {
        match self.index.get(key.as_str()) {
            Some(&at) => self.entries[at].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&at| &self.entries[at].1)
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V: Serialize> Serialize for Ordered<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<V> FromIterator<(String, V)> for Ordered<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut ordered = Ordered::default();
        for (key, value) in iter {
            ordered.insert(key, value);
        }
        ordered
    }
}

/// Ordered mapping from key to value; each key appears once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap(Ordered<QueryValue>);

impl QueryMap {
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.0.iter()
    }
}

impl FromIterator<(String, QueryValue)> for QueryMap {
    /// A repeated key replaces the earlier value in place.
    fn from_iter<I: IntoIterator<Item = (String, QueryValue)>>(iter: I) -> Self {
        QueryMap(iter.into_iter().collect())
    }
}

impl Serialize for QueryMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// Keys whose raw name carried an array marker, with the marker seen last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixMap(Ordered<ArrayMarker>);

impl SuffixMap {
    pub fn get(&self, key: &str) -> Option<ArrayMarker> {
        self.0.get(key).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ArrayMarker)> {
        self.0.iter().map(|(k, m)| (k, *m))
    }
}

impl FromIterator<(String, ArrayMarker)> for SuffixMap {
    /// A repeated key takes the later marker, keeping its first position.
    fn from_iter<I: IntoIterator<Item = (String, ArrayMarker)>>(iter: I) -> Self {
        SuffixMap(iter.into_iter().collect())
    }
}

impl Serialize for SuffixMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// Output of [`decode`] for a query with at least one key.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DecodedQuery {
    pub query: QueryMap,
    #[serde(rename = "querySuffix", skip_serializing_if = "SuffixMap::is_empty")]
    pub suffix: SuffixMap,
}
