use crate::models::{Gui, Platform, Presence};
use log::{debug, warn};
use std::sync::{Arc, Mutex, MutexGuard};

/// What changed in a [`GuiStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// The focused platform moved.
    Focus {
        previous: Option<Platform>,
        current: Option<Platform>,
    },
    /// The configuration tree was edited through [`GuiStore::update`].
    Config,
}

/// Receives change notifications from a [`GuiStore`].
pub trait GuiObserver: Send {
    fn on_change(&self, gui: &Gui, focused: Option<Platform>, change: Change);
}

impl<F> GuiObserver for F
where
    F: Fn(&Gui, Option<Platform>, Change) + Send,
{
    fn on_change(&self, gui: &Gui, focused: Option<Platform>, change: Change) {
        self(gui, focused, change);
    }
}

/// Root state container: the configuration tree plus the derived focused
/// platform.
///
/// `focused_platform` is only ever written by [`GuiStore::focus_platform`]
/// and [`GuiStore::unfocus_platform`]. It is not part of [`Gui`] and is
/// never persisted.
pub struct GuiStore {
    gui: Gui,
    focused_platform: Option<Platform>,
    observers: Vec<Box<dyn GuiObserver>>,
}

/// Store handle for hosts that touch state from more than one thread.
pub type SharedGuiStore = Arc<Mutex<GuiStore>>;

impl GuiStore {
    pub fn new(gui: Gui) -> Self {
        Self {
            gui,
            focused_platform: None,
            observers: Vec::new(),
        }
    }

    pub fn shared(self) -> SharedGuiStore {
        Arc::new(Mutex::new(self))
    }

    pub fn gui(&self) -> &Gui {
        &self.gui
    }

    pub fn focused_platform(&self) -> Option<Platform> {
        self.focused_platform
    }

    /// Register an observer. Observers run synchronously, in registration order.
    pub fn subscribe(&mut self, observer: Box<dyn GuiObserver>) {
        self.observers.push(observer);
    }

    /// Edit the configuration tree and notify observers.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut Gui) -> R) -> R {
        let result = f(&mut self.gui);
        self.notify(Change::Config);
        result
    }

    /// Focus `platform` unconditionally, even if its service is disabled.
    pub fn focus_platform(&mut self, platform: Option<Platform>) {
        self.set_focused(platform);
    }

    /// Move focus away from `platform`.
    ///
    /// Picks the first enabled platform other than `platform`, in the fixed
    /// order nintendo, playstation, steam, xbox. Focus is cleared when no
    /// other platform is enabled. `platform` does not need to be the one
    /// currently focused.
    pub fn unfocus_platform(&mut self, platform: Platform) {
        let services = &self.gui.services;
        let next = Platform::ALL
            .into_iter()
            .find(|candidate| *candidate != platform && services.is_enabled(*candidate));
        self.set_focused(next);
    }

    /// Presence of the focused platform, if it is enabled and reporting.
    pub fn focused_presence(&self) -> Option<&Presence> {
        self.focused_platform
            .and_then(|platform| self.gui.services.presence(platform))
    }

    /// Presence to hand to the Discord renderer, honouring the display toggle.
    pub fn display_presence(&self) -> Option<&Presence> {
        if !self.gui.activity.discord_display_presence {
            return None;
        }
        self.focused_presence()
    }

    fn set_focused(&mut self, platform: Option<Platform>) {
        let previous = self.focused_platform;
        self.focused_platform = platform;
        if previous != platform {
            debug!(
                "Focused platform changed: {} -> {}",
                describe(previous),
                describe(platform)
            );
            self.notify(Change::Focus {
                previous,
                current: platform,
            });
        }
    }

    fn notify(&self, change: Change) {
        for observer in &self.observers {
            observer.on_change(&self.gui, self.focused_platform, change);
        }
    }
}

impl Default for GuiStore {
    fn default() -> Self {
        Self::new(Gui::default())
    }
}

fn describe(platform: Option<Platform>) -> &'static str {
    platform.map_or("none", Platform::as_str)
}

/// Lock a shared store, recovering from poisoning if necessary
pub fn lock_store(store: &SharedGuiStore) -> MutexGuard<'_, GuiStore> {
    match store.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!("GuiStore mutex was poisoned, recovering");
            poisoned.into_inner()
        }
    }
}
