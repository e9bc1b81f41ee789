//! Query-string parsing and merging.
//!
//! Snapshots use application/x-www-form-urlencoded semantics (`&`-separated
//! `key=value` pairs, `+` as space, permissive percent-decoding): malformed
//! escapes never fail, the offending bytes simply pass through undecoded.

mod merge;

pub use merge::{merge_into, MergedQuery};

use indexmap::IndexMap;
use url::form_urlencoded;

/// Parsed view of a query string.
///
/// `params`, `keys` and `values` preserve every pair in source order,
/// duplicates included; `collection` keeps at most one value per key, the
/// last occurrence winning while the key stays at its first-seen position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySnapshot {
    /// Decoded pairs exactly as parsed, in source order.
    pub params: Vec<(String, String)>,
    /// Canonical re-serialization of `params` (form-urlencoded).
    pub query_string: String,
    /// The raw search string this snapshot was built from.
    pub search: String,
    /// Key of every pair, in pair order.
    pub keys: Vec<String>,
    /// Value of every pair, in pair order.
    pub values: Vec<String>,
    /// Key -> value mapping, last occurrence wins.
    pub collection: IndexMap<String, String>,
}

impl QuerySnapshot {
    /// Parses a search string (`?a=1&b=2` or `a=1&b=2`) into a snapshot.
    ///
    /// Never fails: empty input yields an empty snapshot, and undecodable
    /// tokens are carried through as their raw literal form.
    pub fn from_search(search: &str) -> Self {
        let trimmed = search.strip_prefix('?').unwrap_or(search);
        let params: Vec<(String, String)> = form_urlencoded::parse(trimmed.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let query_string = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .finish();

        let keys = params.iter().map(|(k, _)| k.clone()).collect();
        let values = params.iter().map(|(_, v)| v.clone()).collect();

        let mut collection = IndexMap::new();
        for (k, v) in &params {
            collection.insert(k.clone(), v.clone());
        }

        Self {
            params,
            query_string,
            search: search.to_string(),
            keys,
            values,
            collection,
        }
    }
}
