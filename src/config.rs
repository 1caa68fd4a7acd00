//! JSON persistence of the configuration tree.

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::error::{AppError, AppResult};
use crate::focus::{Change, GuiObserver};
use crate::models::{Gui, Platform};
use crate::validation::{repair_gui, validate_gui};
use directories::BaseDirs;
use log::{error, info, warn};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Location of the settings file on disk.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// `<config dir>/game-presence/config.json` for the current user.
    pub fn default_location() -> AppResult<Self> {
        let base = BaseDirs::new().ok_or(AppError::NoConfigDir)?;
        let path = base
            .config_dir()
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME);
        Ok(Self { path })
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn create_parent(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
        }
        Ok(())
    }

    /// Read the stored tree.
    ///
    /// A missing or unparsable file is replaced with the default tree.
    /// Repeated priority entries are dropped in place, keeping everything
    /// else. Either way the result is written back. I/O failures are
    /// returned.
    pub fn load(&self) -> AppResult<Gui> {
        self.create_parent()?;

        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => return Err(AppError::io(&self.path, e)),
        };

        let mut gui = match serde_json::from_str::<Gui>(&json) {
            Ok(gui) => gui,
            Err(e) => {
                if !json.is_empty() {
                    warn!("Discarding configuration at {}: {e}", self.path.display());
                }
                let gui = Gui::default();
                self.save(&gui)?;
                return Ok(gui);
            }
        };

        if let Err(e) = validate_gui(&gui) {
            warn!("Repairing configuration at {}: {e}", self.path.display());
            repair_gui(&mut gui);
            self.save(&gui)?;
        }

        info!("Loaded configuration from {}", self.path.display());
        Ok(gui)
    }

    /// Write the tree to a sibling temp file, then rename it over the
    /// settings file so a crash never leaves a partial document behind.
    pub fn save(&self, gui: &Gui) -> AppResult<()> {
        self.create_parent()?;
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));

        let json = serde_json::to_vec_pretty(gui)?;
        let mut file = NamedTempFile::new_in(dir).map_err(|e| AppError::io(dir, e))?;
        file.write_all(&json)
            .map_err(|e| AppError::io(file.path(), e))?;
        file.as_file()
            .sync_all()
            .map_err(|e| AppError::io(file.path(), e))?;
        file.persist(&self.path)
            .map_err(|e| AppError::io(&self.path, e.error))?;

        info!("Saved configuration to {}", self.path.display());
        Ok(())
    }

    /// An observer that writes the tree back after every configuration edit.
    /// Focus changes are not persisted.
    pub fn autosave(self) -> Box<dyn GuiObserver> {
        Box::new(move |gui: &Gui, _: Option<Platform>, change: Change| {
            if change != Change::Config {
                return;
            }
            if let Err(e) = self.save(gui) {
                error!("Failed to save configuration: {e}");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::GuiStore;
    use crate::models::services::{steam, xbox};
    use crate::models::AssetSource;
    use tempfile::{tempdir, TempDir};

    fn setup() -> (ConfigStore, TempDir) {
        let dir = tempdir().unwrap();
        let store = ConfigStore::at(dir.path().join("game-presence").join("config.json"));
        (store, dir)
    }

    #[test]
    fn test_load_missing_file_writes_default() {
        let (config, _dir) = setup();

        let gui = config.load().unwrap();

        assert_eq!(gui, Gui::default());
        assert!(config.path().exists());
        let written: Gui = serde_json::from_str(&fs::read_to_string(config.path()).unwrap()).unwrap();
        assert_eq!(written, Gui::default());
    }

    #[test]
    fn test_save_and_load() {
        let (config, _dir) = setup();

        let mut gui = Gui::default();
        gui.activity.polling_active = true;
        gui.services.steam.enabled = true;
        gui.services.steam.data = Some(steam::Data::new("KEY"));
        gui.services.xbox.assets_priorities = vec![AssetSource::Twitch, AssetSource::Native];
        config.save(&gui).unwrap();

        let loaded = config.load().unwrap();
        assert_eq!(loaded, gui);
    }

    #[test]
    fn test_load_garbage_falls_back_to_default() {
        let (config, _dir) = setup();
        fs::create_dir_all(config.path().parent().unwrap()).unwrap();
        fs::write(config.path(), "{ not json").unwrap();

        let gui = config.load().unwrap();

        assert_eq!(gui, Gui::default());
        let rewritten = fs::read_to_string(config.path()).unwrap();
        assert!(rewritten.contains("\"servicePriorities\""));
    }

    #[test]
    fn test_load_duplicate_priorities_keeps_credentials() {
        let (config, _dir) = setup();
        let mut gui = Gui::default();
        gui.activity.polling_active = true;
        gui.activity.service_priorities = vec![Platform::Steam, Platform::Steam];
        gui.services.nintendo.disclaimer_acknowledged = true;
        gui.services.steam.enabled = true;
        gui.services.steam.data = Some(steam::Data::new("SECRET"));
        gui.services.xbox.assets_priorities = vec![AssetSource::Native, AssetSource::Native];
        gui.services.xbox.data = Some(xbox::Data::new("player"));
        config.save(&gui).unwrap();

        let loaded = config.load().unwrap();

        assert_eq!(loaded.services.steam.data.as_ref().map(|d| d.api_key.as_str()), Some("SECRET"));
        assert_eq!(loaded.services.xbox.data.as_ref().map(|d| d.gamertag.as_str()), Some("player"));
        assert!(loaded.services.nintendo.disclaimer_acknowledged);
        assert!(loaded.activity.polling_active);
        assert_eq!(loaded.activity.service_priorities, vec![Platform::Steam]);
        assert_eq!(loaded.services.xbox.assets_priorities, vec![AssetSource::Native]);

        // The repaired tree is written back
        let stored = fs::read_to_string(config.path()).unwrap();
        assert!(stored.contains("SECRET"));
        let stored: Gui = serde_json::from_str(&stored).unwrap();
        assert_eq!(stored, loaded);
    }

    #[test]
    fn test_save_leaves_no_temp_files() {
        let (config, _dir) = setup();
        config.save(&Gui::default()).unwrap();
        config.save(&Gui::default()).unwrap();

        let entries: Vec<_> = fs::read_dir(config.path().parent().unwrap())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("config.json")]);
    }

    #[test]
    fn test_save_replaces_existing_file() {
        let (config, _dir) = setup();
        fs::create_dir_all(config.path().parent().unwrap()).unwrap();
        fs::write(config.path(), "x".repeat(4096)).unwrap();

        config.save(&Gui::default()).unwrap();

        let stored: Gui = serde_json::from_str(&fs::read_to_string(config.path()).unwrap()).unwrap();
        assert_eq!(stored, Gui::default());
    }

    #[test]
    fn test_save_truncates_previous_contents() {
        let (config, _dir) = setup();
        let mut gui = Gui::default();
        gui.activity.service_priorities = vec![Platform::Nintendo, Platform::Playstation, Platform::Xbox];
        config.save(&gui).unwrap();

        config.save(&Gui::default()).unwrap();

        assert_eq!(config.load().unwrap(), Gui::default());
    }

    #[test]
    fn test_autosave_persists_config_edits() {
        let (config, _dir) = setup();
        let mut store = GuiStore::default();
        store.subscribe(config.clone().autosave());

        store.update(|gui| gui.activity.discord_display_presence = true);

        assert!(config.load().unwrap().activity.discord_display_presence);
    }

    #[test]
    fn test_autosave_ignores_focus_changes() {
        let (config, _dir) = setup();
        let mut store = GuiStore::default();
        store.subscribe(config.clone().autosave());

        store.focus_platform(Some(Platform::Steam));

        assert!(!config.path().exists());
    }
}
