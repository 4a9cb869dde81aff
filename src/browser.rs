//! Browser bindings and the wasm entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! Implements the store, system-preference, and surface seams over
//! `web_sys`, wires the controller to the toggle button's `click` event and
//! the media query's `change` event, and boots on `DOMContentLoaded`.
//!
//! ERROR HANDLING
//! ==============
//! Locating the window, storage, and elements happens once in [`mount`] and
//! fails loudly with [`ThemeError`]. After that, individual storage or DOM
//! writes that throw are logged and dropped so a handler always completes.

use std::rc::Rc;

use log::{error, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, MediaQueryList, MediaQueryListEvent, Storage, Window};

use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::error::ThemeError;
use crate::store::PreferenceStore;
use crate::surface::ThemeSurface;
use crate::system::SystemPreference;
use crate::theme::{Theme, ToggleLabel};

pub type BrowserController = ThemeController<LocalStorageStore, MediaQueryPreference, DomSurface>;

fn js_error(err: &JsValue) -> ThemeError {
    ThemeError::Js(format!("{err:?}"))
}

// =============================================================================
// SEAMS
// =============================================================================

/// `window.localStorage`.
pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// # Errors
    ///
    /// Fails if storage access throws (e.g. blocked by privacy settings) or
    /// the browser has no `localStorage`.
    pub fn from_window(window: &Window) -> Result<Self, ThemeError> {
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(ThemeError::Js("localStorage unavailable".to_owned())),
            Err(e) => Err(js_error(&e)),
        }
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("localStorage read {key:?} failed: {e:?}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            warn!("localStorage write {key:?} failed: {e:?}");
        }
    }
}

/// A `matchMedia` query; a match means the system prefers light.
pub struct MediaQueryPreference {
    list: MediaQueryList,
}

impl MediaQueryPreference {
    /// # Errors
    ///
    /// Fails if `matchMedia` throws or returns nothing for `query`.
    pub fn from_window(window: &Window, query: &str) -> Result<Self, ThemeError> {
        match window.match_media(query) {
            Ok(Some(list)) => Ok(Self { list }),
            Ok(None) => Err(ThemeError::Js(format!("matchMedia({query:?}) returned null"))),
            Err(e) => Err(js_error(&e)),
        }
    }

    pub fn list(&self) -> &MediaQueryList {
        &self.list
    }
}

impl SystemPreference for MediaQueryPreference {
    fn prefers_light(&self) -> bool {
        self.list.matches()
    }
}

/// Document root plus the toggle button's icon and text regions.
pub struct DomSurface {
    root: Element,
    icon: Element,
    text: Element,
    root_attribute: String,
}

impl DomSurface {
    /// Find the root element and the button's regions.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::MissingElement`] naming the first region that
    /// could not be found.
    pub fn locate(document: &Document, button: &Element, config: &ThemeConfig) -> Result<Self, ThemeError> {
        let root = document
            .document_element()
            .ok_or_else(|| ThemeError::MissingElement("document root".to_owned()))?;
        Ok(Self {
            root,
            icon: select(button, &config.icon_selector)?,
            text: select(button, &config.text_selector)?,
            root_attribute: config.root_attribute.clone(),
        })
    }
}

fn select(parent: &Element, selector: &str) -> Result<Element, ThemeError> {
    parent
        .query_selector(selector)
        .map_err(|e| js_error(&e))?
        .ok_or_else(|| ThemeError::MissingElement(selector.to_owned()))
}

impl ThemeSurface for DomSurface {
    fn set_root_theme(&self, theme: Theme) {
        if let Err(e) = self.root.set_attribute(&self.root_attribute, theme.as_str()) {
            warn!("setting {} failed: {e:?}", self.root_attribute);
        }
    }

    fn set_toggle_label(&self, label: ToggleLabel) {
        self.icon.set_text_content(Some(label.icon));
        self.text.set_text_content(Some(label.text));
    }
}

// =============================================================================
// MOUNT
// =============================================================================

/// Live controller plus the listeners feeding it.
///
/// Dropping the handle invalidates the listeners' callbacks; call
/// [`ThemeHandle::leak`] to keep them for the page's lifetime or
/// [`ThemeHandle::detach`] to unregister them.
pub struct ThemeHandle {
    controller: Rc<BrowserController>,
    button: Element,
    media: MediaQueryList,
    on_click: Closure<dyn FnMut(Event)>,
    on_change: Closure<dyn FnMut(MediaQueryListEvent)>,
}

impl ThemeHandle {
    pub fn controller(&self) -> &BrowserController {
        &self.controller
    }

    /// Unregister both listeners.
    ///
    /// # Errors
    ///
    /// Returns the first `removeEventListener` failure.
    pub fn detach(self) -> Result<(), ThemeError> {
        self.button
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref())
            .map_err(|e| js_error(&e))?;
        self.media
            .remove_event_listener_with_callback("change", self.on_change.as_ref().unchecked_ref())
            .map_err(|e| js_error(&e))?;
        Ok(())
    }

    /// Keep both listeners alive until the page unloads.
    pub fn leak(self) {
        self.on_click.forget();
        self.on_change.forget();
    }
}

/// Locate the toggle, apply the initial theme, and subscribe to clicks and
/// system preference changes.
///
/// # Errors
///
/// Fails if there is no window/document, storage or `matchMedia` is
/// unavailable, an element is missing, or a listener cannot be registered.
pub fn mount(config: ThemeConfig) -> Result<ThemeHandle, ThemeError> {
    let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
    let document = window.document().ok_or(ThemeError::NoWindow)?;
    let button = document
        .get_element_by_id(&config.toggle_id)
        .ok_or_else(|| ThemeError::MissingElement(format!("#{}", config.toggle_id)))?;

    let surface = DomSurface::locate(&document, &button, &config)?;
    let store = LocalStorageStore::from_window(&window)?;
    let system = MediaQueryPreference::from_window(&window, &config.media_query)?;
    let media = system.list().clone();

    let controller = Rc::new(ThemeController::new(store, system, surface, config));
    let theme = controller.init();

    let on_click = {
        let controller = Rc::clone(&controller);
        Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            controller.handle_toggle();
        })
    };
    let on_change = {
        let controller = Rc::clone(&controller);
        Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
            controller.handle_system_change(event.matches());
        })
    };

    button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| js_error(&e))?;
    if let Err(e) = media.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref()) {
        if let Err(undo) = button.remove_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
            warn!("removing click listener after failed mount: {undo:?}");
        }
        return Err(js_error(&e));
    }

    info!("theme toggle mounted on #{} ({theme})", controller.config().toggle_id);
    Ok(ThemeHandle { controller, button, media, on_click, on_change })
}

// =============================================================================
// ENTRY POINT
// =============================================================================

/// Wasm start hook: mount once the DOM is ready.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(boot);
        if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
            web_sys::console::error_1(&e);
        }
    } else {
        boot();
    }
}

fn boot() {
    let config = read_config();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger already set: {e}")));
    }
    match mount(config) {
        Ok(handle) => handle.leak(),
        Err(e) => error!("[{}] theme toggle not mounted: {e}", e.error_code()),
    }
}

/// Defaults overridden by `data-*` attributes on the toggle button.
fn read_config() -> ThemeConfig {
    let defaults = ThemeConfig::default();
    let button = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&defaults.toggle_id));
    match button {
        Some(button) => ThemeConfig::from_lookup(|key| button.get_attribute(key)),
        None => defaults,
    }
}
