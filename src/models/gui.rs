use crate::models::{Activity, Games, Services};
use serde::{Deserialize, Serialize};

/// Root configuration tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gui {
    pub activity: Activity,
    pub services: Services,
    pub games: Games,
}

impl Gui {
    pub fn new() -> Self {
        Self::default()
    }
}
