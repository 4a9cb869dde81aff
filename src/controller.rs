//! Theme controller — resolves, applies, and toggles the page theme.
//!
//! DESIGN
//! ======
//! The controller owns handles to its three collaborators (preference store,
//! system preference, DOM surface) and is otherwise stateless: every handler
//! re-reads the store, so the persisted value is the single source of truth
//! for an explicit choice. Handlers take `&self` and run to completion on the
//! UI event loop; collaborators use interior mutability.
//!
//! STATE MACHINE
//! =============
//! - page ready: resolve (stored choice, else system preference); write the
//!   root attribute only when a choice is stored; always write the button.
//! - click: invert the resolved theme, write root + store + button. This is
//!   the only path that persists anything.
//! - system change: ignored once a choice is stored. Otherwise only the
//!   button follows the system, unless
//!   [`ThemeConfig::sync_root_on_system_change`] is set. With the default the
//!   button can disagree with the root attribute written at load time.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here fails. A stored value that is not a known theme is logged
//! and treated as no choice at all.

use log::{debug, warn};

use crate::config::ThemeConfig;
use crate::store::PreferenceStore;
use crate::surface::ThemeSurface;
use crate::system::SystemPreference;
use crate::theme::Theme;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

pub struct ThemeController<S, P, U> {
    store: S,
    system: P,
    surface: U,
    config: ThemeConfig,
}

impl<S, P, U> ThemeController<S, P, U>
where
    S: PreferenceStore,
    P: SystemPreference,
    U: ThemeSurface,
{
    pub fn new(store: S, system: P, surface: U, config: ThemeConfig) -> Self {
        Self { store, system, surface, config }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn system(&self) -> &P {
        &self.system
    }

    pub fn surface(&self) -> &U {
        &self.surface
    }

    /// The explicit choice in the store, if it names a known theme.
    pub fn stored_theme(&self) -> Option<Theme> {
        let raw = self.store.get(&self.config.storage_key)?;
        match raw.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(e) => {
                warn!("ignoring stored {:?}: {e}", self.config.storage_key);
                None
            }
        }
    }

    /// Theme derived from the system preference alone.
    pub fn system_theme(&self) -> Theme {
        Theme::from_prefers_light(self.system.prefers_light())
    }

    /// Effective theme: the stored choice, else the system preference.
    pub fn current_theme(&self) -> Theme {
        self.stored_theme().unwrap_or_else(|| self.system_theme())
    }

    /// Write `theme` to the root attribute and the button.
    pub fn apply_theme(&self, theme: Theme) {
        self.surface.set_root_theme(theme);
        self.update_toggle_ui(theme);
    }

    /// Write only the button projection of `theme`.
    pub fn update_toggle_ui(&self, theme: Theme) {
        self.surface.set_toggle_label(theme.toggle_label());
    }

    /// Page-ready setup. Returns the resolved theme.
    pub fn init(&self) -> Theme {
        let stored = self.stored_theme();
        let theme = stored.unwrap_or_else(|| self.system_theme());
        if stored.is_some() {
            self.surface.set_root_theme(theme);
        }
        self.update_toggle_ui(theme);
        debug!("theme initialised: {theme} (stored: {})", stored.is_some());
        theme
    }

    /// Button click: switch to the other theme and remember the choice.
    pub fn handle_toggle(&self) -> Theme {
        let next = self.current_theme().inverse();
        self.surface.set_root_theme(next);
        self.store.set(&self.config.storage_key, next.as_str());
        self.update_toggle_ui(next);
        debug!("theme toggled to {next}");
        next
    }

    /// System preference changed. Returns the theme now shown on the button,
    /// or `None` when a stored choice takes precedence.
    pub fn handle_system_change(&self, prefers_light: bool) -> Option<Theme> {
        if self.stored_theme().is_some() {
            debug!("system preference change ignored: explicit choice stored");
            return None;
        }
        let theme = Theme::from_prefers_light(prefers_light);
        if self.config.sync_root_on_system_change {
            self.apply_theme(theme);
        } else {
            self.update_toggle_ui(theme);
        }
        debug!("system preference now {theme}");
        Some(theme)
    }
}
