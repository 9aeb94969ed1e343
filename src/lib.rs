// FileConverter - Core Backend
// Reactive settings state, shared models, and environment probing for the
// desktop converter app. The GUI shell embeds this crate and owns IPC,
// persistence, and the conversion pipeline.

pub mod models;
pub mod services;
pub mod store;

pub use store::{settings_store, SettingUpdate, SettingsStore, SharedSettingsStore};
