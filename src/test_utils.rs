//! Shared test utilities for game-presence.
//!
//! This module provides common setup functions used across test modules.

#![cfg(test)]

use crate::focus::{Change, GuiObserver, GuiStore};
use crate::models::{Gui, Platform};
use std::sync::{Arc, Mutex};

/// Build a store whose listed platforms are enabled and all others disabled.
pub fn store_with_enabled(platforms: &[Platform]) -> GuiStore {
    let mut gui = Gui::default();
    for platform in platforms {
        match platform {
            Platform::Nintendo => gui.services.nintendo.enabled = true,
            Platform::Playstation => gui.services.playstation.enabled = true,
            Platform::Steam => gui.services.steam.enabled = true,
            Platform::Xbox => gui.services.xbox.enabled = true,
        }
    }
    GuiStore::new(gui)
}

/// An observer that records every change it is handed.
pub fn recording_observer() -> (Box<dyn GuiObserver>, Arc<Mutex<Vec<Change>>>) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let observer = move |_: &Gui, _: Option<Platform>, change: Change| {
        sink.lock().expect("observer log poisoned").push(change);
    };
    (Box::new(observer), log)
}
