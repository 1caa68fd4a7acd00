use crate::constants::{TWITCH_ICON, TWITCH_ICON_COLOR};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a presence icon is taken from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetSource {
    #[default]
    Native,
    Twitch,
}

impl AssetSource {
    pub fn as_str(self) -> &'static str {
        match self {
            AssetSource::Native => "native",
            AssetSource::Twitch => "twitch",
        }
    }

    /// Map this source to the record shown in the priority picker.
    ///
    /// `native` is the platform's own icon, supplied by the icon
    /// resolution layer. Twitch always renders with the Twitch brand icon.
    pub fn widget_entry(self, native: &NativeAsset) -> AssetWidgetEntry {
        match self {
            AssetSource::Native => AssetWidgetEntry {
                name: self,
                icon: native.icon.clone(),
                icon_color: native.icon_color.clone(),
            },
            AssetSource::Twitch => AssetWidgetEntry {
                name: self,
                icon: TWITCH_ICON.to_string(),
                icon_color: TWITCH_ICON_COLOR.to_string(),
            },
        }
    }
}

impl fmt::Display for AssetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon and colour of a platform's own assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeAsset {
    pub icon: String,
    pub icon_color: String,
}

impl NativeAsset {
    pub fn new(icon: &str, icon_color: &str) -> Self {
        Self {
            icon: icon.to_string(),
            icon_color: icon_color.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetWidgetEntry {
    pub name: AssetSource,
    pub icon: String,
    pub icon_color: String,
}

/// CLDR plural category of a number used as an ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrdinalCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl OrdinalCategory {
    /// English ordinal rules: 1, 21, 31 are `one`; 2, 22 are `two`;
    /// 3, 23 are `few`; the teens 11-13 fall through to `other`.
    pub fn for_english(n: u64) -> Self {
        let (ones, tens) = (n % 10, n % 100);
        match (ones, tens) {
            (1, t) if t != 11 => OrdinalCategory::One,
            (2, t) if t != 12 => OrdinalCategory::Two,
            (3, t) if t != 13 => OrdinalCategory::Few,
            _ => OrdinalCategory::Other,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            OrdinalCategory::One => "st",
            OrdinalCategory::Two => "nd",
            OrdinalCategory::Few => "rd",
            OrdinalCategory::Zero | OrdinalCategory::Many | OrdinalCategory::Other => "th",
        }
    }
}

/// Format `n` with its ordinal suffix ("1st", "2nd", "11th", ...).
pub fn ordinal(n: u64) -> String {
    format!("{n}{}", OrdinalCategory::for_english(n).suffix())
}
