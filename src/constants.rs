// src/constants.rs

/// Directory under the platform config dir holding the settings file
pub const CONFIG_DIR_NAME: &str = "game-presence";

/// Settings file name
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Icon identifier shown for Twitch-sourced assets
pub const TWITCH_ICON: &str = "mdi-twitch";

/// Colour token shown for Twitch-sourced assets
pub const TWITCH_ICON_COLOR: &str = "brand-twitch";
