// Bootstrap
// Fills the settings store once the environment has been probed

use crate::models::AppInfo;
use crate::store::SettingsStore;

use super::ffmpeg_locator;

pub const APP_NAME: &str = "FileConverter";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Probe the environment and populate the store's cached fields
///
/// Intended to run once at startup, after the shell has subscribed its event
/// sink so the frontend sees each transition. Clears the loading flag last.
pub fn initialize_store(store: &mut SettingsStore) {
    store.set_app_info(current_app_info());

    let available = ffmpeg_locator::ffmpeg_available();
    if !available {
        log::warn!("No ffmpeg install found; conversions will be unavailable");
    }
    store.set_ffmpeg_available(available);

    store.set_loading(false);
    log::info!("Settings store initialized (ffmpeg available: {available})");
}

/// Metadata describing this build and platform
pub fn current_app_info() -> AppInfo {
    AppInfo {
        name: APP_NAME.to_string(),
        version: APP_VERSION.to_string(),
        platform: std::env::consts::OS.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_clears_loading_flag() {
        let mut store = SettingsStore::new();
        initialize_store(&mut store);
        assert!(!store.is_loading());
    }

    #[test]
    fn test_initialize_caches_app_info() {
        let mut store = SettingsStore::new();
        initialize_store(&mut store);

        let info = store.app_info().expect("app info should be cached");
        assert_eq!(info.name, APP_NAME);
        assert_eq!(info.version, APP_VERSION);
        assert_eq!(info.platform, std::env::consts::OS);
    }
}
