mod inspect;
mod merge;
mod page;
mod params;

pub use inspect::run_inspect;
pub use merge::run_merge;
pub use page::run_page;
pub use params::run_params;

use anyhow::{Context, Result};
use urlscope_core::config::Overrides;
use urlscope_core::mock::MockBrowser;
use urlscope_core::scope::UrlScope;

/// Builds a scope positioned at `url` with the resolved overrides.
pub(crate) fn scope_for(url: &str, overrides: &Overrides) -> Result<UrlScope<MockBrowser>> {
    let browser =
        MockBrowser::new(url).with_context(|| format!("cannot parse URL: {url}"))?;
    Ok(UrlScope::initialize(browser, overrides))
}
