//! Browser-style URL introspection and manipulation.
//!
//! The [`scope::UrlScope`] facade exposes derived facts about a document
//! location (page name, site identity, query snapshot, hash fragment) over a
//! set of injected platform providers, so everything is unit-testable against
//! [`mock::MockBrowser`] without a real browser.

pub mod config;
pub mod logging;

pub mod location;
pub mod mock;
pub mod page;
pub mod provider;
pub mod query;
pub mod scope;
pub mod site;
