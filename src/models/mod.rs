pub mod activity;
pub mod asset;
pub mod games;
pub mod gui;
pub mod platform;
pub mod presence;
pub mod services;

pub use activity::Activity;
pub use asset::{ordinal, AssetSource, AssetWidgetEntry, NativeAsset, OrdinalCategory};
pub use games::Games;
pub use gui::Gui;
pub use platform::{Platform, ServiceKind};
pub use presence::Presence;
pub use services::{PlatformService, Services};
