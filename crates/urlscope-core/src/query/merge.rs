//! Merging caller-supplied pairs into a query collection.

use indexmap::IndexMap;

/// Result of merging pairs into a query collection.
///
/// `query_string` is built by appending `key=value&` per entry in iteration
/// order: no percent-encoding, and the trailing `&` is kept. That matches the
/// historical output format this module reproduces; callers that need an
/// RFC-compliant string should re-serialize the `collection` themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedQuery {
    /// Key -> value mapping after the merge.
    pub collection: IndexMap<String, String>,
    /// `key=value&` concatenation of `collection`, trailing `&` included.
    pub query_string: String,
}

/// Merges `entries` into `base`, caller entries overwriting existing keys.
///
/// Overwritten keys keep their original position; new keys append in input
/// order. Values are stringified with `ToString`, so scalars like numbers or
/// booleans work directly. Purely computational: nothing is navigated.
pub fn merge_into<I, K, V>(mut base: IndexMap<String, String>, entries: I) -> MergedQuery
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: ToString,
{
    for (key, value) in entries {
        base.insert(key.into(), value.to_string());
    }

    let mut query_string = String::new();
    for (key, value) in &base {
        query_string.push_str(key);
        query_string.push('=');
        query_string.push_str(value);
        query_string.push('&');
    }

    MergedQuery {
        collection: base,
        query_string,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QuerySnapshot;

    #[test]
    fn overwrite_keeps_position() {
        let base = QuerySnapshot::from_search("?a=1&b=3").collection;
        let merged = merge_into(base, [("a", 2)]);
        assert_eq!(merged.collection.get("a").map(String::as_str), Some("2"));
        assert_eq!(merged.collection.get("b").map(String::as_str), Some("3"));
        assert_eq!(merged.query_string, "a=2&b=3&");
    }

    #[test]
    fn empty_input_reserializes_current() {
        let base = QuerySnapshot::from_search("?a=1&b=3").collection;
        let merged = merge_into(base.clone(), std::iter::empty::<(String, String)>());
        assert_eq!(merged.collection, base);
        assert_eq!(merged.query_string, "a=1&b=3&");
    }

    #[test]
    fn new_keys_append_in_input_order() {
        let base = QuerySnapshot::from_search("x=0").collection;
        let merged = merge_into(base, [("b", "2"), ("a", "1")]);
        assert_eq!(merged.query_string, "x=0&b=2&a=1&");
    }

    #[test]
    fn values_are_not_encoded() {
        let base = QuerySnapshot::from_search("").collection;
        let merged = merge_into(base, [("q", "a b&c")]);
        // Historical quirk: raw values, trailing delimiter kept.
        assert_eq!(merged.query_string, "q=a b&c&");
    }

    #[test]
    fn scalar_values_stringified() {
        let base = IndexMap::new();
        let merged = merge_into(base, [("n", 42)]);
        assert_eq!(merged.query_string, "n=42&");
        let merged = merge_into(merged.collection, [("flag", true)]);
        assert_eq!(merged.query_string, "n=42&flag=true&");
    }

    #[test]
    fn merge_onto_empty_query() {
        let base = QuerySnapshot::from_search("").collection;
        let merged = merge_into(base, [("a", "1")]);
        assert_eq!(merged.query_string, "a=1&");
    }
}
