//! Platform provider seams.
//!
//! The facade never touches a real browser; it talks to these traits. Each
//! trait covers one collaborator: location reads/navigation, history
//! rewriting, window opening, and hash-change notification.

use crate::location::LocationContext;

/// Read access to the ambient location plus assignment-style navigation.
pub trait LocationProvider {
    /// Fresh snapshot of the current location. Never cached by callers.
    fn location(&self) -> LocationContext;

    /// Assignment-style navigation (`location.href = url`).
    fn assign(&mut self, url: &str);

    /// Sets the fragment. A real change is observable via [`HashChangeEvents`].
    fn set_hash(&mut self, hash: &str);
}

/// Rewrites the current history entry without a reload.
pub trait HistoryProvider {
    /// Replaces the current entry's URL in place; no new entry is created.
    fn replace_state(&mut self, url: &str);
}

/// Opens a URL in a new or named browsing context.
pub trait WindowOpener {
    /// `features` is an opaque pass-through string
    /// (`toolbar=yes, width=400, ...`); it is not validated here.
    fn open_window(&mut self, url: &str, name: &str, features: &str);
}

/// Fragment-change notification.
pub trait HashChangeEvents {
    /// Registers a listener invoked once per fragment change. There is no
    /// unregister operation; listeners live as long as the provider.
    fn on_hash_change(&mut self, listener: Box<dyn FnMut()>);
}

/// Everything a [`crate::scope::UrlScope`] needs from the platform.
pub trait Browser: LocationProvider + HistoryProvider + WindowOpener + HashChangeEvents {}

impl<T> Browser for T where T: LocationProvider + HistoryProvider + WindowOpener + HashChangeEvents {}
