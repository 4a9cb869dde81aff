//! System colour-scheme preference.
//!
//! The browser implementation wraps a `MediaQueryList` and delivers change
//! events through its `change` listener; see `browser::MediaQueryPreference`.

use std::cell::Cell;

#[cfg(test)]
#[path = "system_test.rs"]
mod system_test;

/// Ambient light/dark preference reported by the OS or browser.
pub trait SystemPreference {
    /// Whether the system currently prefers a light colour scheme.
    fn prefers_light(&self) -> bool;
}

/// Fixed preference for native hosts and tests. `set` simulates an OS change.
#[derive(Debug, Default)]
pub struct StaticPreference {
    prefers_light: Cell<bool>,
}

impl StaticPreference {
    #[must_use]
    pub fn new(prefers_light: bool) -> Self {
        Self { prefers_light: Cell::new(prefers_light) }
    }

    pub fn set(&self, prefers_light: bool) {
        self.prefers_light.set(prefers_light);
    }
}

impl SystemPreference for StaticPreference {
    fn prefers_light(&self) -> bool {
        self.prefers_light.get()
    }
}
