//! Theme toggle configuration.
//!
//! DESIGN
//! ======
//! Every knob has a default matching the page markup the toggle ships with.
//! Pages override individual values through `data-*` attributes on the
//! toggle button (see [`ThemeConfig::from_lookup`]) or a JSON blob. Values
//! that are missing, empty, or fail to parse fall back to the default.

use std::str::FromStr;

use log::{Level, warn};
use serde::Deserialize;

use crate::error::ThemeError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_ROOT_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_TOGGLE_ID: &str = "theme-toggle";
pub const ICON_CLASS: &str = "toggle-icon";
pub const TEXT_CLASS: &str = "toggle-text";
pub const DEFAULT_MEDIA_QUERY: &str = "(prefers-color-scheme: light)";
pub const DEFAULT_LOG_LEVEL: Level = Level::Info;

pub const STORAGE_KEY_ATTR: &str = "data-storage-key";
pub const ROOT_ATTRIBUTE_ATTR: &str = "data-root-attribute";
pub const ICON_SELECTOR_ATTR: &str = "data-icon-selector";
pub const TEXT_SELECTOR_ATTR: &str = "data-text-selector";
pub const MEDIA_QUERY_ATTR: &str = "data-media-query";
pub const SYNC_ROOT_ATTR: &str = "data-sync-root";
pub const LOG_LEVEL_ATTR: &str = "data-log-level";

/// Keys, selectors, and behaviour switches for one toggle control.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Persistent store key holding the explicit choice.
    pub storage_key: String,
    /// Attribute on the document root mirrored from the active theme.
    pub root_attribute: String,
    /// Element id of the toggle button.
    pub toggle_id: String,
    /// Selector for the icon region, relative to the button.
    pub icon_selector: String,
    /// Selector for the text region, relative to the button.
    pub text_selector: String,
    /// Media query whose match means "system prefers light".
    pub media_query: String,
    /// Also write the root attribute when the system preference changes and
    /// no explicit choice is stored. Off by default: only the button follows.
    pub sync_root_on_system_change: bool,
    /// Console log level in the browser.
    pub log_level: Level,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            root_attribute: DEFAULT_ROOT_ATTRIBUTE.to_owned(),
            toggle_id: DEFAULT_TOGGLE_ID.to_owned(),
            icon_selector: format!(".{ICON_CLASS}"),
            text_selector: format!(".{TEXT_CLASS}"),
            media_query: DEFAULT_MEDIA_QUERY.to_owned(),
            sync_root_on_system_change: false,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl ThemeConfig {
    /// Build a config from a key lookup, typically the toggle button's
    /// attributes. Keys are the `*_ATTR` constants of this module.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            storage_key: string_or(&lookup, STORAGE_KEY_ATTR, defaults.storage_key),
            root_attribute: string_or(&lookup, ROOT_ATTRIBUTE_ATTR, defaults.root_attribute),
            toggle_id: defaults.toggle_id,
            icon_selector: string_or(&lookup, ICON_SELECTOR_ATTR, defaults.icon_selector),
            text_selector: string_or(&lookup, TEXT_SELECTOR_ATTR, defaults.text_selector),
            media_query: string_or(&lookup, MEDIA_QUERY_ATTR, defaults.media_query),
            sync_root_on_system_change: parse_or(&lookup, SYNC_ROOT_ATTR, defaults.sync_root_on_system_change),
            log_level: parse_or(&lookup, LOG_LEVEL_ATTR, defaults.log_level),
        }
    }

    /// Parse a JSON object; absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidConfig`] if `raw` is not a JSON object
    /// matching [`ThemeConfig`]'s fields.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        serde_json::from_str(raw).map_err(|e| ThemeError::InvalidConfig(e.to_string()))
    }
}

fn string_or<F>(lookup: &F, key: &str, default: String) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => value.trim().to_owned(),
        _ => default,
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            warn!("ignoring unparsable {key}={raw:?}");
            default
        }
    }
}
