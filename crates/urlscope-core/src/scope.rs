//! The `UrlScope` facade tying providers, identity and the query model together.

use crate::config::Overrides;
use crate::location::LocationContext;
use crate::page::page_name;
use crate::provider::Browser;
use crate::query::{merge_into, MergedQuery, QuerySnapshot};
use crate::site::SiteIdentity;

/// URL introspection facade over an injected platform.
///
/// The [`SiteIdentity`] is computed once when the scope is built and frozen;
/// everything else reads a fresh location snapshot per call, so it reflects
/// navigation that happened in between.
#[derive(Debug)]
pub struct UrlScope<B> {
    browser: B,
    identity: SiteIdentity,
}

impl<B: Browser> UrlScope<B> {
    /// Builds a scope, freezing the site identity from the current location
    /// and the given overrides.
    pub fn initialize(browser: B, overrides: &Overrides) -> Self {
        let identity = SiteIdentity::initialize(&browser.location(), overrides);
        Self { browser, identity }
    }

    /// The frozen init-time identity.
    pub fn identity(&self) -> &SiteIdentity {
        &self.identity
    }

    /// Fresh snapshot of the current location.
    pub fn location(&self) -> LocationContext {
        self.browser.location()
    }

    /// The underlying platform, for assertions in tests.
    pub fn browser(&self) -> &B {
        &self.browser
    }

    /// Short page identifier derived from the current URL (last path segment,
    /// extension stripped; see [`page_name`] for the fallback rules).
    pub fn page(&self) -> String {
        page_name(
            &self.browser.location().href(),
            &self.identity.host,
            &self.identity.protocol,
        )
    }

    /// Parsed snapshot of the current query string.
    pub fn params(&self) -> QuerySnapshot {
        QuerySnapshot::from_search(&self.browser.location().search)
    }

    /// Canonical form-urlencoded rendering of the current query string.
    pub fn query(&self) -> String {
        self.params().query_string
    }

    /// Merges `entries` into the current query collection and returns the
    /// result. Purely computational: the address bar is not touched; applying
    /// the result is the caller's business.
    pub fn add_to_query<I, K, V>(&self, entries: I) -> MergedQuery
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        merge_into(self.params().collection, entries)
    }

    /// Current fragment without the leading `#`, undecoded.
    pub fn hash(&self) -> String {
        self.browser.location().fragment().to_string()
    }

    /// Sets the fragment; a real change fires [`Self::on_change`] callbacks.
    pub fn set_hash(&mut self, hash: &str) {
        self.browser.set_hash(hash);
    }

    /// Removes the fragment by replacing the current history entry with the
    /// path-only URL. No new history entry is created.
    pub fn delete_hash(&mut self) {
        let path = self.browser.location().path;
        self.browser.replace_state(&path);
    }

    /// Navigates to `url`. Always returns `false` so callers can return the
    /// result from a link handler to suppress the default behavior.
    pub fn go_to(&mut self, url: &str) -> bool {
        self.browser.assign(url);
        false
    }

    /// Opens `url` in a new or named browsing context. `name` defaults to
    /// `_blank` and `features` to the empty string; the feature string is
    /// passed through unvalidated.
    pub fn open(&mut self, url: &str, name: Option<&str>, features: Option<&str>) {
        self.browser
            .open_window(url, name.unwrap_or("_blank"), features.unwrap_or(""));
    }

    /// Registers `callback` to run once per fragment change. Query- or
    /// path-only changes never fire it. There is no unregister operation.
    pub fn on_change<F>(&mut self, callback: F)
    where
        F: FnMut() + 'static,
    {
        self.browser.on_hash_change(Box::new(callback));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockBrowser;

    fn scope_at(url: &str) -> UrlScope<MockBrowser> {
        UrlScope::initialize(MockBrowser::new(url).unwrap(), &Overrides::default())
    }

    #[test]
    fn page_from_current_url() {
        let scope = scope_at("https://example.com/app/dashboard.html?x=1");
        assert_eq!(scope.page(), "dashboard");
    }

    #[test]
    fn add_to_query_merges_without_navigating() {
        let scope = scope_at("https://example.com/page?a=1&b=3");
        let merged = scope.add_to_query([("a", 2)]);
        assert_eq!(merged.query_string, "a=2&b=3&");
        assert_eq!(scope.location().search, "?a=1&b=3", "address bar untouched");
    }

    #[test]
    fn hash_accessors() {
        let mut scope = scope_at("https://example.com/page#section1");
        assert_eq!(scope.hash(), "section1");

        scope.delete_hash();
        assert_eq!(scope.hash(), "");
        assert_eq!(scope.location().path, "/page");
    }

    #[test]
    fn go_to_reports_false() {
        let mut scope = scope_at("https://example.com/");
        assert!(!scope.go_to("https://example.com/next"));
        assert_eq!(scope.location().path, "/next");
    }

    #[test]
    fn open_defaults() {
        let mut scope = scope_at("https://example.com/");
        scope.open("https://example.org/", None, None);
        let opened = &scope.browser().opened_windows()[0];
        assert_eq!(opened.name, "_blank");
        assert_eq!(opened.features, "");
    }

    #[test]
    fn identity_is_frozen_across_navigation() {
        let mut scope = scope_at("https://example.com/app/page.html");
        let before = scope.identity().clone();
        scope.go_to("https://example.com/elsewhere.html");
        assert_eq!(scope.identity(), &before);
        // The live location did move.
        assert_eq!(scope.location().path, "/elsewhere.html");
    }
}
