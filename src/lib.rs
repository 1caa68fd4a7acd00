//! Client-side state model for aggregated game presence.
//!
//! [`GuiStore`] owns the configuration tree ([`Gui`]) and arbitrates which
//! single platform is focused for rich presence display.

pub mod config;
pub mod constants;
pub mod error;
pub mod focus;
pub mod models;
#[cfg(test)]
mod test_utils;
pub mod validation;

pub use crate::config::ConfigStore;
pub use crate::error::{AppError, AppResult};
pub use crate::focus::{lock_store, Change, GuiObserver, GuiStore, SharedGuiStore};
pub use crate::models::{
    ordinal, Activity, AssetSource, AssetWidgetEntry, Games, Gui, NativeAsset, Platform,
    PlatformService, Presence, ServiceKind, Services,
};

use log::info;

/// Load the stored configuration and build the application's store.
///
/// Configuration edits made through [`GuiStore::update`] are written back
/// to `config` automatically.
pub fn open_store(config: &ConfigStore) -> AppResult<GuiStore> {
    let gui = config.load()?;
    let mut store = GuiStore::new(gui);
    store.subscribe(config.clone().autosave());
    info!(
        "Opened store with {} enabled platform(s)",
        store.gui().services.enabled_platforms().len()
    );
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_store_starts_unfocused() {
        let dir = tempdir().unwrap();
        let config = ConfigStore::at(dir.path().join("config.json"));
        let mut gui = Gui::default();
        gui.services.xbox.enabled = true;
        config.save(&gui).unwrap();

        let store = open_store(&config).unwrap();

        assert!(store.focused_platform().is_none());
        assert!(store.gui().services.is_enabled(Platform::Xbox));
    }

    #[test]
    fn test_open_store_autosaves() {
        let dir = tempdir().unwrap();
        let config = ConfigStore::at(dir.path().join("config.json"));

        let mut store = open_store(&config).unwrap();
        store.update(|gui| {
            gui.services.nintendo.disclaimer_acknowledged = true;
            gui.services.nintendo.enabled = true;
        });
        store.unfocus_platform(Platform::Steam);

        let reloaded = open_store(&config).unwrap();
        assert!(reloaded.gui().services.nintendo.disclaimer_acknowledged);
        assert!(reloaded.focused_platform().is_none());
        assert_eq!(store.focused_platform(), Some(Platform::Nintendo));
    }
}
