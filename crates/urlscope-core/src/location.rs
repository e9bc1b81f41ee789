//! Location snapshot model.
//!
//! A [`LocationContext`] is a value snapshot of a document location, shaped
//! like the DOM `Location` fields: `protocol` without its trailing `:`,
//! `search` with its leading `?`, `hash` with its leading `#`. Providers hand
//! out a fresh snapshot per call so it always reflects navigation that
//! happened between calls.

use thiserror::Error;
use url::Url;

/// Error building a [`LocationContext`] from a URL string.
#[derive(Debug, Error)]
pub enum LocationError {
    /// The string is not a parseable absolute URL.
    #[error("invalid location URL: {0}")]
    Parse(#[from] url::ParseError),
}

/// Value snapshot of a document location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationContext {
    /// Scheme without the trailing `:` (e.g. `https`).
    pub protocol: String,
    /// Host, including a non-default port (e.g. `example.com:8080`).
    pub host: String,
    /// Path component, always starting with `/` for hierarchical URLs.
    pub path: String,
    /// Raw query with its leading `?`, or empty when there is none.
    pub search: String,
    /// Raw fragment with its leading `#`, or empty when there is none.
    pub hash: String,
}

impl LocationContext {
    /// Builds a snapshot from a parsed URL.
    pub fn from_url(url: &Url) -> Self {
        let host = match (url.host_str(), url.port()) {
            (Some(h), Some(p)) => format!("{h}:{p}"),
            (Some(h), None) => h.to_string(),
            (None, _) => String::new(),
        };
        Self {
            protocol: url.scheme().to_string(),
            host,
            path: url.path().to_string(),
            search: url.query().map(|q| format!("?{q}")).unwrap_or_default(),
            hash: url.fragment().map(|f| format!("#{f}")).unwrap_or_default(),
        }
    }

    /// Parses an absolute URL string into a snapshot.
    pub fn parse(input: &str) -> Result<Self, LocationError> {
        let url = Url::parse(input)?;
        Ok(Self::from_url(&url))
    }

    /// Full URL string: `protocol://host` + path + search + hash.
    pub fn href(&self) -> String {
        format!(
            "{}://{}{}{}{}",
            self.protocol, self.host, self.path, self.search, self.hash
        )
    }

    /// Fragment without the leading `#` (no percent-decoding applied).
    pub fn fragment(&self) -> &str {
        self.hash.strip_prefix('#').unwrap_or(&self.hash)
    }

    /// `protocol://host` + path, dropping query and fragment.
    pub fn base(&self) -> String {
        format!("{}://{}{}", self.protocol, self.host, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_fields() {
        let loc = LocationContext::parse("https://example.com/app/page.html?x=1#top").unwrap();
        assert_eq!(loc.protocol, "https");
        assert_eq!(loc.host, "example.com");
        assert_eq!(loc.path, "/app/page.html");
        assert_eq!(loc.search, "?x=1");
        assert_eq!(loc.hash, "#top");
    }

    #[test]
    fn non_default_port_kept_in_host() {
        let loc = LocationContext::parse("http://localhost:8080/").unwrap();
        assert_eq!(loc.host, "localhost:8080");
        // Default ports are omitted, like Location.host.
        let loc = LocationContext::parse("https://example.com:443/").unwrap();
        assert_eq!(loc.host, "example.com");
    }

    #[test]
    fn empty_search_and_hash() {
        let loc = LocationContext::parse("https://example.com/page").unwrap();
        assert_eq!(loc.search, "");
        assert_eq!(loc.hash, "");
        assert_eq!(loc.fragment(), "");
    }

    #[test]
    fn href_round_trip() {
        let loc = LocationContext::parse("https://example.com/a/b?k=v#frag").unwrap();
        assert_eq!(loc.href(), "https://example.com/a/b?k=v#frag");
        assert_eq!(loc.base(), "https://example.com/a/b");
    }

    #[test]
    fn rejects_relative_input() {
        assert!(LocationContext::parse("/just/a/path").is_err());
    }
}
