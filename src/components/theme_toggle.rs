//! Toggle button markup.
//!
//! Renders the button the browser bindings attach to: an element with the
//! default toggle id holding an icon region and a text region. The initial
//! contents should match what the controller writes on page-ready so server
//! output and the first client paint agree.

use leptos::prelude::*;

use crate::config::{DEFAULT_TOGGLE_ID, ICON_CLASS, TEXT_CLASS};
use crate::theme::Theme;

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

/// Theme toggle button, pre-filled for `initial` (dark if omitted).
#[component]
pub fn ThemeToggle(#[prop(optional)] initial: Theme) -> impl IntoView {
    let label = initial.toggle_label();

    view! {
        <button id=DEFAULT_TOGGLE_ID class="theme-toggle" type="button" aria-label=label.text>
            <span class=ICON_CLASS aria-hidden="true">{label.icon}</span>
            <span class=TEXT_CLASS>{label.text}</span>
        </button>
    }
}
