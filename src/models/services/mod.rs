pub mod nintendo;
pub mod playstation;
pub mod steam;
pub mod twitch;
pub mod xbox;

pub use nintendo::Nintendo;
pub use playstation::Playstation;
pub use steam::Steam;
pub use twitch::Twitch;
pub use xbox::Xbox;

use crate::models::{AssetSource, Platform, Presence, ServiceKind};
use serde::{Deserialize, Serialize};

/// Read access shared by the four focusable services.
pub trait PlatformService {
    fn is_enabled(&self) -> bool;

    /// Current presence, or `None` when the service is disabled or idle.
    fn presence(&self) -> Option<&Presence>;

    fn assets_priorities(&self) -> &[AssetSource];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Services {
    pub nintendo: Nintendo,
    pub playstation: Playstation,
    pub steam: Steam,
    pub twitch: Twitch,
    pub xbox: Xbox,
}

impl Services {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn platform(&self, platform: Platform) -> &dyn PlatformService {
        match platform {
            Platform::Nintendo => &self.nintendo,
            Platform::Playstation => &self.playstation,
            Platform::Steam => &self.steam,
            Platform::Xbox => &self.xbox,
        }
    }

    pub fn is_enabled(&self, platform: Platform) -> bool {
        self.platform(platform).is_enabled()
    }

    pub fn is_service_enabled(&self, kind: ServiceKind) -> bool {
        match kind.platform() {
            Some(platform) => self.is_enabled(platform),
            None => self.twitch.enabled,
        }
    }

    pub fn presence(&self, platform: Platform) -> Option<&Presence> {
        self.platform(platform).presence()
    }

    /// Focusable platforms that are currently enabled, in fallback order.
    pub fn enabled_platforms(&self) -> Vec<Platform> {
        Platform::ALL
            .into_iter()
            .filter(|p| self.is_enabled(*p))
            .collect()
    }

    /// Disable a service and clear its data.
    pub fn disable(&mut self, kind: ServiceKind) {
        match kind {
            ServiceKind::Nintendo => self.nintendo.disable(),
            ServiceKind::Playstation => self.playstation.disable(),
            ServiceKind::Steam => self.steam.disable(),
            ServiceKind::Twitch => self.twitch.disable(),
            ServiceKind::Xbox => self.xbox.disable(),
        }
    }
}
