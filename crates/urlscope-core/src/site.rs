//! Site identity: URL-derived constants frozen at initialization.

use crate::config::Overrides;
use crate::location::LocationContext;

/// URL-derived constants computed once at init time.
///
/// Later navigation does not refresh these; a scope built at page load keeps
/// the identity of that load for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteIdentity {
    /// Scheme without the trailing `:` (e.g. `https`).
    pub protocol: String,
    /// Configured or ambient host.
    pub host: String,
    /// Template path prefix; empty unless overridden.
    pub template: String,
    /// Path at init time.
    pub path: String,
    /// Root URL with no page path.
    pub site_url: String,
    /// Root URL plus the init-time path.
    pub full_url: String,
    /// The complete href at init time, query and fragment included.
    pub read_url: String,
}

impl SiteIdentity {
    /// Builds the identity from an init-time location snapshot and overrides.
    ///
    /// A host override replaces the ambient host and collapses both
    /// `site_url` and `full_url` to exactly the override value; protocol and
    /// path composition is skipped in that case.
    pub fn initialize(location: &LocationContext, overrides: &Overrides) -> Self {
        let protocol = location.protocol.clone();
        let path = location.path.clone();
        let template = overrides.template.clone().unwrap_or_default();

        let (host, site_url, full_url) = match &overrides.host {
            Some(h) => (h.clone(), h.clone(), h.clone()),
            None => {
                let site = format!("{}://{}", protocol, location.host);
                let full = format!("{site}{path}");
                (location.host.clone(), site, full)
            }
        };

        Self {
            protocol,
            host,
            template,
            path,
            site_url,
            full_url,
            read_url: location.href(),
        }
    }
}
