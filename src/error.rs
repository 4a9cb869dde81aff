//! Errors raised while setting up the theme toggle.
//!
//! The event handlers themselves never fail: a missing stored value is a
//! normal state and storage/DOM write failures are logged by the browser
//! bindings. Only parsing and mounting return [`ThemeError`].

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid theme: {0:?}")]
    InvalidTheme(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("browser window or document unavailable")]
    NoWindow,
    #[error("missing element: {0}")]
    MissingElement(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl ThemeError {
    /// Stable code for log lines.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTheme(_) => "E_INVALID_THEME",
            Self::InvalidConfig(_) => "E_INVALID_CONFIG",
            Self::NoWindow => "E_NO_WINDOW",
            Self::MissingElement(_) => "E_MISSING_ELEMENT",
            Self::Js(_) => "E_JS",
        }
    }
}
