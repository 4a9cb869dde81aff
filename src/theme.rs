//! The binary theme value and the toggle button's projection of it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

pub const LIGHT: &str = "light";
pub const DARK: &str = "dark";

const SUN_ICON: &str = "☀️";
const MOON_ICON: &str = "🌙";

/// Active visual theme of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => LIGHT,
            Self::Dark => DARK,
        }
    }

    /// The other theme.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Map a `prefers-color-scheme: light` match onto a theme.
    #[must_use]
    pub fn from_prefers_light(prefers_light: bool) -> Self {
        if prefers_light { Self::Light } else { Self::Dark }
    }

    /// Button contents while this theme is active.
    ///
    /// The button always offers the opposite theme: a light page shows the
    /// moon and "Dark Mode", a dark page shows the sun and "Light Mode".
    #[must_use]
    pub fn toggle_label(self) -> ToggleLabel {
        match self {
            Self::Light => ToggleLabel { icon: MOON_ICON, text: "Dark Mode" },
            Self::Dark => ToggleLabel { icon: SUN_ICON, text: "Light Mode" },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            LIGHT => Ok(Self::Light),
            DARK => Ok(Self::Dark),
            other => Err(ThemeError::InvalidTheme(other.to_owned())),
        }
    }
}

/// Icon glyph and text shown in the toggle button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleLabel {
    pub icon: &'static str,
    pub text: &'static str,
}

impl fmt::Display for ToggleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.text)
    }
}
