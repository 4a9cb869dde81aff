use super::*;
use crate::store::MemoryStore;
use crate::surface::RecordingSurface;
use crate::system::StaticPreference;

type TestController = ThemeController<MemoryStore, StaticPreference, RecordingSurface>;

// =============================================================
// Helpers
// =============================================================

fn controller(stored: Option<&str>, prefers_light: bool) -> TestController {
    controller_with(stored, prefers_light, ThemeConfig::default())
}

fn controller_with(stored: Option<&str>, prefers_light: bool, config: ThemeConfig) -> TestController {
    let store = match stored {
        Some(value) => MemoryStore::with_entry(&config.storage_key, value),
        None => MemoryStore::new(),
    };
    ThemeController::new(store, StaticPreference::new(prefers_light), RecordingSurface::new(), config)
}

fn stored_value(c: &TestController) -> Option<String> {
    c.store().get(DEFAULT_KEY)
}

fn button_text(c: &TestController) -> String {
    c.surface().toggle_label().map(|l| l.to_string()).unwrap_or_default()
}

const DEFAULT_KEY: &str = "theme";

// =============================================================
// Resolution
// =============================================================

#[test]
fn no_stored_value_resolves_to_system_preference() {
    assert_eq!(controller(None, true).current_theme(), Theme::Light);
    assert_eq!(controller(None, false).current_theme(), Theme::Dark);
}

#[test]
fn stored_value_wins_over_system_preference() {
    for prefers_light in [true, false] {
        assert_eq!(controller(Some("light"), prefers_light).current_theme(), Theme::Light);
        assert_eq!(controller(Some("dark"), prefers_light).current_theme(), Theme::Dark);
    }
}

#[test]
fn invalid_stored_value_falls_back_to_system_preference() {
    let c = controller(Some("blue"), true);
    assert_eq!(c.stored_theme(), None);
    assert_eq!(c.current_theme(), Theme::Light);
}

#[test]
fn resolution_reads_nothing_into_the_store() {
    let c = controller(None, false);
    c.current_theme();
    assert_eq!(c.store().write_count(), 0);
}

#[test]
fn custom_storage_key_is_used() {
    let config = ThemeConfig { storage_key: "site.theme".into(), ..ThemeConfig::default() };
    let c = controller_with(Some("light"), false, config);
    assert_eq!(c.current_theme(), Theme::Light);
    c.handle_toggle();
    assert_eq!(c.store().get("site.theme").as_deref(), Some("dark"));
    assert_eq!(c.store().get(DEFAULT_KEY), None);
}

// =============================================================
// Apply
// =============================================================

#[test]
fn apply_theme_writes_root_and_label() {
    let c = controller(None, false);
    c.apply_theme(Theme::Light);
    assert_eq!(c.surface().root_theme(), Some(Theme::Light));
    assert_eq!(c.surface().toggle_label(), Some(Theme::Light.toggle_label()));
}

#[test]
fn apply_theme_twice_is_idempotent() {
    let c = controller(None, false);
    c.apply_theme(Theme::Dark);
    let root = c.surface().root_theme();
    let label = c.surface().toggle_label();
    c.apply_theme(Theme::Dark);
    assert_eq!(c.surface().root_theme(), root);
    assert_eq!(c.surface().toggle_label(), label);
    assert_eq!(c.store().write_count(), 0);
}

#[test]
fn update_toggle_ui_leaves_root_alone() {
    let c = controller(None, false);
    c.update_toggle_ui(Theme::Light);
    assert_eq!(c.surface().root_theme(), None);
    assert_eq!(button_text(&c), "🌙 Dark Mode");
}

// =============================================================
// Init
// =============================================================

#[test]
fn init_without_stored_value_skips_root_attribute() {
    // Scenario A: system prefers dark, nothing stored.
    let c = controller(None, false);
    assert_eq!(c.init(), Theme::Dark);
    assert_eq!(c.surface().root_theme(), None);
    assert_eq!(button_text(&c), "☀️ Light Mode");
}

#[test]
fn init_with_stored_value_sets_root_attribute() {
    // Scenario B: stored light.
    let c = controller(Some("light"), false);
    assert_eq!(c.init(), Theme::Light);
    assert_eq!(c.surface().root_theme(), Some(Theme::Light));
    assert_eq!(button_text(&c), "🌙 Dark Mode");
}

#[test]
fn init_with_invalid_stored_value_behaves_as_unset() {
    let c = controller(Some("sepia"), true);
    assert_eq!(c.init(), Theme::Light);
    assert_eq!(c.surface().root_theme(), None);
    assert_eq!(button_text(&c), "🌙 Dark Mode");
}

#[test]
fn init_never_persists() {
    let c = controller(None, true);
    c.init();
    assert_eq!(c.store().write_count(), 0);
    assert_eq!(stored_value(&c), None);
}

// =============================================================
// Manual toggle
// =============================================================

#[test]
fn toggle_from_stored_light_switches_to_dark() {
    // Scenario C.
    let c = controller(Some("light"), true);
    c.init();
    assert_eq!(c.handle_toggle(), Theme::Dark);
    assert_eq!(c.surface().root_theme(), Some(Theme::Dark));
    assert_eq!(stored_value(&c).as_deref(), Some("dark"));
    assert_eq!(button_text(&c), "☀️ Light Mode");
}

#[test]
fn toggle_without_stored_value_inverts_system_preference() {
    let c = controller(None, false);
    c.init();
    assert_eq!(c.handle_toggle(), Theme::Light);
    assert_eq!(c.surface().root_theme(), Some(Theme::Light));
    assert_eq!(stored_value(&c).as_deref(), Some("light"));
}

#[test]
fn every_click_inverts_previous_theme() {
    let c = controller(None, true);
    c.init();
    let mut before = c.current_theme();
    for _ in 0..5 {
        let after = c.handle_toggle();
        assert_eq!(after, before.inverse());
        assert_eq!(c.surface().root_theme(), Some(after));
        assert_eq!(stored_value(&c).as_deref(), Some(after.as_str()));
        assert_eq!(c.surface().toggle_label(), Some(after.toggle_label()));
        before = after;
    }
    assert_eq!(c.store().write_count(), 5);
}

#[test]
fn toggle_over_invalid_stored_value_replaces_it() {
    let c = controller(Some("blue"), false);
    assert_eq!(c.handle_toggle(), Theme::Light);
    assert_eq!(stored_value(&c).as_deref(), Some("light"));
}

#[test]
fn toggle_follows_external_store_changes() {
    let c = controller(Some("light"), false);
    c.store().set(DEFAULT_KEY, "dark");
    assert_eq!(c.handle_toggle(), Theme::Light);
}

// =============================================================
// System preference change
// =============================================================

#[test]
fn system_change_without_stored_value_updates_button_only() {
    // Scenario D: dark at load, system flips to light.
    let c = controller(None, false);
    c.init();
    c.system().set(true);
    assert_eq!(c.handle_system_change(true), Some(Theme::Light));
    assert_eq!(button_text(&c), "🌙 Dark Mode");
    assert_eq!(c.surface().root_theme(), None);
    assert_eq!(c.surface().root_writes(), 0);
    assert_eq!(c.store().write_count(), 0);
}

#[test]
fn system_change_after_stored_root_leaves_root_diverged() {
    let c = controller(Some("dark"), false);
    c.init();
    c.store().remove(DEFAULT_KEY);
    assert_eq!(c.handle_system_change(true), Some(Theme::Light));
    assert_eq!(c.surface().root_theme(), Some(Theme::Dark));
    assert_eq!(c.surface().toggle_label(), Some(Theme::Light.toggle_label()));
}

#[test]
fn system_change_with_stored_value_is_ignored() {
    let c = controller(Some("dark"), false);
    c.init();
    let history_len = c.surface().label_history().len();
    assert_eq!(c.handle_system_change(true), None);
    assert_eq!(c.surface().label_history().len(), history_len);
    assert_eq!(button_text(&c), "☀️ Light Mode");
}

#[test]
fn system_change_after_click_is_ignored() {
    let c = controller(None, false);
    c.init();
    c.handle_toggle();
    assert_eq!(c.handle_system_change(false), None);
    assert_eq!(c.surface().toggle_label(), Some(Theme::Light.toggle_label()));
}

#[test]
fn system_change_uses_event_value_not_current_query() {
    let c = controller(None, false);
    assert_eq!(c.handle_system_change(true), Some(Theme::Light));
}

#[test]
fn system_change_with_invalid_stored_value_updates_button() {
    let c = controller(Some("blue"), false);
    assert_eq!(c.handle_system_change(true), Some(Theme::Light));
    assert_eq!(stored_value(&c).as_deref(), Some("blue"));
}

#[test]
fn system_change_syncs_root_when_configured() {
    let config = ThemeConfig { sync_root_on_system_change: true, ..ThemeConfig::default() };
    let c = controller_with(None, false, config);
    c.init();
    assert_eq!(c.handle_system_change(true), Some(Theme::Light));
    assert_eq!(c.surface().root_theme(), Some(Theme::Light));
    assert_eq!(c.store().write_count(), 0);
}
