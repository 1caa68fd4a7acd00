use super::PlatformService;
use crate::error::AppResult;
use crate::models::{AssetSource, Presence};
use crate::validation::validate_assets_priorities;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Steam {
    pub enabled: bool,
    pub assets_priorities: Vec<AssetSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Data>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Data {
    /// Steam Web API key used by the poller
    pub api_key: String,
    pub presence: Option<Presence>,
}

impl Data {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            presence: None,
        }
    }
}

impl Default for Steam {
    fn default() -> Self {
        Self {
            enabled: false,
            assets_priorities: vec![AssetSource::default()],
            data: None,
        }
    }
}

impl Steam {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_data(&self) -> Option<&Data> {
        self.data.as_ref().filter(|_| self.enabled)
    }

    /// Disable the service and drop its data, API key included.
    pub fn disable(&mut self) {
        self.enabled = false;
        self.data = None;
    }

    pub fn set_assets_priorities(&mut self, priorities: Vec<AssetSource>) -> AppResult<()> {
        validate_assets_priorities(&priorities)?;
        self.assets_priorities = priorities;
        Ok(())
    }
}

impl PlatformService for Steam {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn presence(&self) -> Option<&Presence> {
        self.active_data().and_then(|d| d.presence.as_ref())
    }

    fn assets_priorities(&self) -> &[AssetSource] {
        &self.assets_priorities
    }
}
