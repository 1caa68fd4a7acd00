use super::PlatformService;
use crate::error::AppResult;
use crate::models::{AssetSource, Presence};
use crate::validation::validate_assets_priorities;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nintendo {
    /// Set once the user accepts the unofficial-API disclaimer.
    pub disclaimer_acknowledged: bool,
    pub enabled: bool,
    pub assets_priorities: Vec<AssetSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Data>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Data {
    pub presence: Option<Presence>,
}

impl Default for Nintendo {
    fn default() -> Self {
        Self {
            disclaimer_acknowledged: false,
            enabled: false,
            assets_priorities: vec![AssetSource::default()],
            data: None,
        }
    }
}

impl Nintendo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Data is only meaningful while the service is enabled.
    pub fn active_data(&self) -> Option<&Data> {
        self.data.as_ref().filter(|_| self.enabled)
    }

    /// Disable the service and drop any data it was holding.
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

impl PlatformService for Nintendo {
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
