use serde::{Deserialize, Serialize};

/// Per-game settings. Reserved for title whitelisting.
#[allow(
    clippy::empty_structs_with_brackets,
    reason = "serialized as an empty JSON object"
)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Games {}

impl Games {
    pub fn new() -> Self {
        Self::default()
    }
}
