//! Deterministic in-memory browser for tests and offline introspection.

use std::fmt;

use tracing::debug;
use url::Url;

use crate::location::{LocationContext, LocationError};
use crate::provider::{HashChangeEvents, HistoryProvider, LocationProvider, WindowOpener};

/// A window opened through [`WindowOpener::open_window`], recorded verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedWindow {
    pub url: String,
    pub name: String,
    pub features: String,
}

/// In-memory implementation of all platform providers over a single URL.
///
/// Hash-change listeners fire synchronously, exactly once per mutation that
/// changed the fragment and nothing else; query or path changes stay silent,
/// as does [`HistoryProvider::replace_state`]. Opened windows and replaced
/// history entries are recorded for assertions.
pub struct MockBrowser {
    url: Url,
    listeners: Vec<Box<dyn FnMut()>>,
    opened: Vec<OpenedWindow>,
    replaced: Vec<String>,
}

impl MockBrowser {
    /// Creates a browser positioned at `url`.
    pub fn new(url: &str) -> Result<Self, LocationError> {
        let url = Url::parse(url)?;
        Ok(Self {
            url,
            listeners: Vec::new(),
            opened: Vec::new(),
            replaced: Vec::new(),
        })
    }

    /// Current full URL string.
    pub fn href(&self) -> String {
        self.url.to_string()
    }

    /// Windows opened so far, oldest first.
    pub fn opened_windows(&self) -> &[OpenedWindow] {
        &self.opened
    }

    /// URLs passed to `replace_state` so far, resolved, oldest first.
    pub fn replaced_entries(&self) -> &[String] {
        &self.replaced
    }

    fn dispatch_hash_change(&mut self) {
        for listener in &mut self.listeners {
            listener();
        }
    }
}

impl fmt::Debug for MockBrowser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockBrowser")
            .field("url", &self.url.as_str())
            .field("listeners", &self.listeners.len())
            .field("opened", &self.opened)
            .field("replaced", &self.replaced)
            .finish()
    }
}

impl LocationProvider for MockBrowser {
    fn location(&self) -> LocationContext {
        LocationContext::from_url(&self.url)
    }

    fn assign(&mut self, url: &str) {
        match self.url.join(url) {
            Ok(next) => {
                let fragment_only = {
                    let mut a = next.clone();
                    let mut b = self.url.clone();
                    a.set_fragment(None);
                    b.set_fragment(None);
                    a == b && next.fragment() != self.url.fragment()
                };
                self.url = next;
                if fragment_only {
                    self.dispatch_hash_change();
                }
            }
            Err(err) => debug!(%err, url, "ignoring unresolvable navigation target"),
        }
    }

    fn set_hash(&mut self, hash: &str) {
        let hash = hash.strip_prefix('#').unwrap_or(hash);
        let next = if hash.is_empty() { None } else { Some(hash) };
        if self.url.fragment() != next {
            self.url.set_fragment(next);
            self.dispatch_hash_change();
        }
    }
}

impl HistoryProvider for MockBrowser {
    fn replace_state(&mut self, url: &str) {
        match self.url.join(url) {
            Ok(next) => {
                self.replaced.push(next.to_string());
                self.url = next;
            }
            Err(err) => debug!(%err, url, "ignoring unresolvable history replacement"),
        }
    }
}

impl WindowOpener for MockBrowser {
    fn open_window(&mut self, url: &str, name: &str, features: &str) {
        self.opened.push(OpenedWindow {
            url: url.to_string(),
            name: name.to_string(),
            features: features.to_string(),
        });
    }
}

impl HashChangeEvents for MockBrowser {
    fn on_hash_change(&mut self, listener: Box<dyn FnMut()>) {
        self.listeners.push(listener);
    }
}
