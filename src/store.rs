// Settings Store
// Reactive in-memory holder for user preferences and cached environment state

use std::sync::{Mutex, MutexGuard, OnceLock};

use serde::Serialize;
use serde_json::json;

use crate::models::{AppInfo, FileNamingMode, Theme, UserSettings};
use crate::services::{emit_event, EventSink};

/// Event names emitted to subscribed sinks, one per mutated field
pub mod store_events {
    pub const SETTINGS_CHANGED: &str = "settings_changed";
    pub const APP_INFO_CHANGED: &str = "app_info_changed";
    pub const FFMPEG_AVAILABILITY_CHANGED: &str = "ffmpeg_availability_changed";
    pub const LOADING_CHANGED: &str = "loading_changed";
}

/// A single-field update to [`UserSettings`]
///
/// Carries the field selector and the replacement value in one tagged value,
/// so a partial update is checked at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingUpdate {
    LastOutputDirectory(String),
    DefaultNamingMode(FileNamingMode),
    DefaultMakeCopies(bool),
    Theme(Theme),
}

/// Holds the application's reactive state and notifies subscribers of every
/// change
///
/// The store performs no validation, persistence, or I/O; collaborators load
/// values from wherever they live and push them in through the setters. Each
/// setter produces exactly one notification, delivered synchronously before
/// the call returns.
pub struct SettingsStore {
    settings: UserSettings,
    app_info: Option<AppInfo>,
    ffmpeg_available: bool,
    is_loading: bool,
    subscribers: Vec<Box<dyn EventSink>>,
}

impl SettingsStore {
    /// Create a store holding the documented defaults
    pub fn new() -> Self {
        Self {
            settings: UserSettings::default(),
            app_info: None,
            ffmpeg_available: false,
            is_loading: true,
            subscribers: Vec::new(),
        }
    }

    /// Register a sink that receives one event per state transition
    ///
    /// Sinks are notified in subscription order and are never removed.
    pub fn subscribe(&mut self, sink: Box<dyn EventSink>) {
        self.subscribers.push(sink);
    }

    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    pub fn app_info(&self) -> Option<&AppInfo> {
        self.app_info.as_ref()
    }

    pub fn ffmpeg_available(&self) -> bool {
        self.ffmpeg_available
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Replace the settings value wholesale
    pub fn set_settings(&mut self, settings: UserSettings) {
        self.settings = settings;
        let payload = self.settings.clone();
        self.notify(store_events::SETTINGS_CHANGED, &payload);
    }

    /// Cache the application metadata
    ///
    /// Last write wins; there is no clear operation, so the info stays
    /// present for the rest of the process lifetime.
    pub fn set_app_info(&mut self, info: AppInfo) {
        let payload = info.clone();
        self.app_info = Some(info);
        self.notify(store_events::APP_INFO_CHANGED, &payload);
    }

    /// Record whether an ffmpeg install was found
    pub fn set_ffmpeg_available(&mut self, available: bool) {
        self.ffmpeg_available = available;
        self.notify(
            store_events::FFMPEG_AVAILABILITY_CHANGED,
            &json!({ "available": available }),
        );
    }

    /// Flip the startup loading flag
    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
        self.notify(store_events::LOADING_CHANGED, &json!({ "loading": loading }));
    }

    /// Replace exactly one settings field, keeping the rest
    ///
    /// Builds a new [`UserSettings`] value and installs it through
    /// [`set_settings`](Self::set_settings), so observers see a single
    /// `settings_changed` transition.
    pub fn update_setting(&mut self, update: SettingUpdate) {
        let mut next = self.settings.clone();
        match update {
            SettingUpdate::LastOutputDirectory(dir) => next.last_output_directory = dir,
            SettingUpdate::DefaultNamingMode(mode) => next.default_naming_mode = mode,
            SettingUpdate::DefaultMakeCopies(make_copies) => next.default_make_copies = make_copies,
            SettingUpdate::Theme(theme) => next.theme = theme,
        }
        self.set_settings(next);
    }

    fn notify<T: Serialize>(&self, event: &str, payload: &T) {
        for sink in &self.subscribers {
            emit_event(sink.as_ref(), event, payload);
        }
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Shareable handle around a [`SettingsStore`]
///
/// The lock exists so the one store instance can be reached from anywhere in
/// the shell; all access is still expected to come from the UI thread.
pub struct SharedSettingsStore {
    inner: Mutex<SettingsStore>,
}

impl SharedSettingsStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(SettingsStore::new()),
        }
    }

    /// Run a closure against the store while holding the lock
    pub fn with<R>(&self, f: impl FnOnce(&mut SettingsStore) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn subscribe(&self, sink: Box<dyn EventSink>) {
        self.lock().subscribe(sink);
    }

    pub fn settings(&self) -> UserSettings {
        self.lock().settings.clone()
    }

    pub fn app_info(&self) -> Option<AppInfo> {
        self.lock().app_info.clone()
    }

    pub fn ffmpeg_available(&self) -> bool {
        self.lock().ffmpeg_available
    }

    pub fn is_loading(&self) -> bool {
        self.lock().is_loading
    }

    pub fn set_settings(&self, settings: UserSettings) {
        self.lock().set_settings(settings);
    }

    pub fn set_app_info(&self, info: AppInfo) {
        self.lock().set_app_info(info);
    }

    pub fn set_ffmpeg_available(&self, available: bool) {
        self.lock().set_ffmpeg_available(available);
    }

    pub fn set_loading(&self, loading: bool) {
        self.lock().set_loading(loading);
    }

    pub fn update_setting(&self, update: SettingUpdate) {
        self.lock().update_setting(update);
    }

    fn lock(&self) -> MutexGuard<'_, SettingsStore> {
        self.inner.lock().unwrap()
    }
}

impl Default for SharedSettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide store instance
///
/// Created on first access with the documented defaults and alive until
/// process exit; identity never changes and there is no teardown.
pub fn settings_store() -> &'static SharedSettingsStore {
    static STORE: OnceLock<SharedSettingsStore> = OnceLock::new();
    STORE.get_or_init(SharedSettingsStore::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::CollectingEventSink;
    use serde_json::Value;
    use std::sync::Arc;

    fn store_with_sink() -> (SettingsStore, Arc<CollectingEventSink>) {
        let mut store = SettingsStore::new();
        let sink = Arc::new(CollectingEventSink::new());
        store.subscribe(Box::new(sink.clone()));
        (store, sink)
    }

    fn sample_info(version: &str) -> AppInfo {
        AppInfo {
            name: "FileConverter".to_string(),
            version: version.to_string(),
            platform: "linux".to_string(),
        }
    }

    #[test]
    fn test_default_state() {
        let store = SettingsStore::new();
        assert_eq!(store.settings(), &UserSettings::default());
        assert_eq!(store.settings().last_output_directory, "");
        assert_eq!(store.settings().default_naming_mode, FileNamingMode::Original);
        assert!(store.settings().default_make_copies);
        assert_eq!(store.settings().theme, Theme::System);
        assert!(store.app_info().is_none());
        assert!(!store.ffmpeg_available());
        assert!(store.is_loading());
    }

    #[test]
    fn test_set_settings_round_trip() {
        let mut store = SettingsStore::new();
        let settings = UserSettings {
            last_output_directory: "/videos/out".to_string(),
            default_naming_mode: FileNamingMode::Custom,
            default_make_copies: false,
            theme: Theme::Light,
        };
        store.set_settings(settings.clone());
        assert_eq!(store.settings(), &settings);
    }

    #[test]
    fn test_update_setting_changes_only_that_field() {
        let mut store = SettingsStore::new();
        let before = store.settings().clone();

        store.update_setting(SettingUpdate::Theme(Theme::Dark));

        let after = store.settings();
        assert_eq!(after.theme, Theme::Dark);
        assert_eq!(after.last_output_directory, before.last_output_directory);
        assert_eq!(after.default_naming_mode, before.default_naming_mode);
        assert_eq!(after.default_make_copies, before.default_make_copies);
        // The replaced value is untouched
        assert_eq!(before.theme, Theme::System);
    }

    #[test]
    fn test_update_setting_each_variant() {
        let mut store = SettingsStore::new();
        store.update_setting(SettingUpdate::LastOutputDirectory("/out".to_string()));
        store.update_setting(SettingUpdate::DefaultNamingMode(FileNamingMode::Custom));
        store.update_setting(SettingUpdate::DefaultMakeCopies(false));
        store.update_setting(SettingUpdate::Theme(Theme::Light));

        let settings = store.settings();
        assert_eq!(settings.last_output_directory, "/out");
        assert_eq!(settings.default_naming_mode, FileNamingMode::Custom);
        assert!(!settings.default_make_copies);
        assert_eq!(settings.theme, Theme::Light);
    }

    #[test]
    fn test_each_setter_emits_exactly_one_event() {
        let (mut store, sink) = store_with_sink();

        store.set_settings(UserSettings::default());
        store.set_app_info(sample_info("1.0.0"));
        store.set_ffmpeg_available(true);
        store.set_loading(false);
        store.update_setting(SettingUpdate::Theme(Theme::Dark));

        assert_eq!(
            sink.event_names(),
            vec![
                store_events::SETTINGS_CHANGED,
                store_events::APP_INFO_CHANGED,
                store_events::FFMPEG_AVAILABILITY_CHANGED,
                store_events::LOADING_CHANGED,
                store_events::SETTINGS_CHANGED,
            ]
        );
    }

    #[test]
    fn test_notification_payload_reflects_new_state() {
        let (mut store, sink) = store_with_sink();
        store.update_setting(SettingUpdate::Theme(Theme::Dark));

        let events = sink.events();
        assert_eq!(events.len(), 1);
        let (name, payload) = &events[0];
        assert_eq!(name, store_events::SETTINGS_CHANGED);
        assert_eq!(payload["theme"], "dark");
        assert_eq!(payload["defaultNamingMode"], "original");
    }

    #[test]
    fn test_loading_flag_follows_call_order() {
        let (mut store, sink) = store_with_sink();

        store.set_loading(true);
        assert!(store.is_loading());
        store.set_loading(false);
        assert!(!store.is_loading());

        let payloads: Vec<Value> = sink.events().into_iter().map(|(_, p)| p).collect();
        assert_eq!(payloads[0]["loading"], true);
        assert_eq!(payloads[1]["loading"], false);
    }

    #[test]
    fn test_app_info_last_write_wins() {
        let mut store = SettingsStore::new();
        store.set_app_info(sample_info("1.0.0"));
        store.set_app_info(sample_info("1.1.0"));

        assert_eq!(store.app_info(), Some(&sample_info("1.1.0")));
    }

    #[test]
    fn test_subscribers_notified_in_subscription_order() {
        struct TaggedSink {
            tag: &'static str,
            seen: Arc<std::sync::Mutex<Vec<&'static str>>>,
        }

        impl EventSink for TaggedSink {
            fn emit(&self, _event: &str, _payload: Value) {
                self.seen.lock().unwrap().push(self.tag);
            }
        }

        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let mut store = SettingsStore::new();
        store.subscribe(Box::new(TaggedSink { tag: "first", seen: seen.clone() }));
        store.subscribe(Box::new(TaggedSink { tag: "second", seen: seen.clone() }));

        store.set_ffmpeg_available(true);

        assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_shared_store_delegates() {
        let shared = SharedSettingsStore::new();
        let sink = Arc::new(CollectingEventSink::new());
        shared.subscribe(Box::new(sink.clone()));

        shared.update_setting(SettingUpdate::DefaultMakeCopies(false));
        assert!(!shared.settings().default_make_copies);
        assert_eq!(sink.len(), 1);

        shared.with(|store| store.set_loading(false));
        assert!(!shared.is_loading());
    }

    #[test]
    fn test_settings_store_is_process_wide() {
        assert!(std::ptr::eq(settings_store(), settings_store()));
    }
}
