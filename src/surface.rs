//! DOM surface the controller writes to.
//!
//! Two targets: the document root's theme attribute, read by the page's
//! stylesheet, and the toggle button's icon and text regions.

use std::cell::{Cell, RefCell};

use crate::theme::{Theme, ToggleLabel};

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

pub trait ThemeSurface {
    /// Mirror `theme` onto the document root.
    fn set_root_theme(&self, theme: Theme);

    /// Replace the button's icon glyph and text.
    fn set_toggle_label(&self, label: ToggleLabel);
}

/// Surface that records what was written, for native hosts and tests.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    root: Cell<Option<Theme>>,
    label: Cell<Option<ToggleLabel>>,
    root_writes: Cell<usize>,
    history: RefCell<Vec<ToggleLabel>>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current root attribute value; `None` until first written.
    #[must_use]
    pub fn root_theme(&self) -> Option<Theme> {
        self.root.get()
    }

    /// Current button contents; `None` until first written.
    #[must_use]
    pub fn toggle_label(&self) -> Option<ToggleLabel> {
        self.label.get()
    }

    #[must_use]
    pub fn root_writes(&self) -> usize {
        self.root_writes.get()
    }

    /// Every label written, oldest first.
    #[must_use]
    pub fn label_history(&self) -> Vec<ToggleLabel> {
        self.history.borrow().clone()
    }
}

impl ThemeSurface for RecordingSurface {
    fn set_root_theme(&self, theme: Theme) {
        self.root.set(Some(theme));
        self.root_writes.set(self.root_writes.get() + 1);
    }

    fn set_toggle_label(&self, label: ToggleLabel) {
        self.label.set(Some(label));
        self.history.borrow_mut().push(label);
    }
}
