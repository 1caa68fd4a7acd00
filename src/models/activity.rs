use crate::error::AppResult;
use crate::models::Platform;
use crate::validation::validate_service_priorities;
use serde::{Deserialize, Serialize};

/// Global activity settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub polling_active: bool,
    pub discord_display_presence: bool,
    pub games_require_whitelisting: bool,
    /// Preferred platform order. Not consulted by focus fallback.
    pub service_priorities: Vec<Platform>,
}

impl Activity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a platform unless it is already listed.
    /// Returns false when the list was left unchanged.
    pub fn add_service_priority(&mut self, platform: Platform) -> bool {
        if self.service_priorities.contains(&platform) {
            return false;
        }
        self.service_priorities.push(platform);
        true
    }

    pub fn remove_service_priority(&mut self, platform: Platform) -> bool {
        let before = self.service_priorities.len();
        self.service_priorities.retain(|p| *p != platform);
        self.service_priorities.len() != before
    }

    pub fn set_service_priorities(&mut self, priorities: Vec<Platform>) -> AppResult<()> {
        validate_service_priorities(&priorities)?;
        self.service_priorities = priorities;
        Ok(())
    }
}
