use serde::{Deserialize, Serialize};
use std::fmt;

/// A platform that can hold focus.
///
/// Twitch is a presence source for asset lookups only and is deliberately
/// not a variant here, so it can never become the focused platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Nintendo,
    Playstation,
    Steam,
    Xbox,
}

impl Platform {
    /// All focusable platforms in fallback order.
    pub const ALL: [Platform; 4] = [
        Platform::Nintendo,
        Platform::Playstation,
        Platform::Steam,
        Platform::Xbox,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Nintendo => "nintendo",
            Platform::Playstation => "playstation",
            Platform::Steam => "steam",
            Platform::Xbox => "xbox",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every configurable service, focusable or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Nintendo,
    Playstation,
    Steam,
    Twitch,
    Xbox,
}

impl ServiceKind {
    /// The focusable platform backing this service, if any.
    pub fn platform(self) -> Option<Platform> {
        match self {
            ServiceKind::Nintendo => Some(Platform::Nintendo),
            ServiceKind::Playstation => Some(Platform::Playstation),
            ServiceKind::Steam => Some(Platform::Steam),
            ServiceKind::Xbox => Some(Platform::Xbox),
            ServiceKind::Twitch => None,
        }
    }
}

impl From<Platform> for ServiceKind {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Nintendo => ServiceKind::Nintendo,
            Platform::Playstation => ServiceKind::Playstation,
            Platform::Steam => ServiceKind::Steam,
            Platform::Xbox => ServiceKind::Xbox,
        }
    }
}
