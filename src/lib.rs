//! # theme-toggle
//!
//! Light/dark theme switching for a web page, compiled to WebAssembly.
//!
//! The controller resolves the active theme from a persisted choice or the
//! system colour-scheme preference, mirrors it onto the document root, and
//! keeps the toggle button's icon and label in sync. Browser collaborators
//! sit behind small traits so the controller runs natively under test.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | The [`theme::Theme`] value and its button projection |
//! | [`controller`] | [`controller::ThemeController`] and its event handlers |
//! | [`store`] | Persistent preference storage seam |
//! | [`system`] | System colour-scheme preference seam |
//! | [`surface`] | DOM surface seam (root attribute, button icon/text) |
//! | [`config`] | Keys, selectors, and switches, with `data-*` overrides |
//! | [`error`] | Setup errors |
//! | [`components`] | Leptos markup for the toggle button |
//! | `browser` | `web_sys` implementations and the wasm entry point (`hydrate` only) |

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod store;
pub mod surface;
pub mod system;
pub mod theme;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use error::ThemeError;
pub use theme::{Theme, ToggleLabel};
