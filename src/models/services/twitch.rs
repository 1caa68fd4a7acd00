use serde::{Deserialize, Serialize};

/// Twitch only supplies artwork to the other services, so it carries no
/// asset priorities and is never focused.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Twitch {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Data>,
}

#[allow(
    clippy::empty_structs_with_brackets,
    reason = "serialized as an empty JSON object"
)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Data {}

impl Twitch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_data(&self) -> Option<&Data> {
        self.data.as_ref().filter(|_| self.enabled)
    }

    pub fn disable(&mut self) {
        self.enabled = false;
        self.data = None;
    }
}
