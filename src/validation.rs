use crate::error::AppError;
use crate::models::{AssetSource, Gui, Platform};
use std::fmt::Display;

fn validate_unique<T: PartialEq + Display>(field: &'static str, entries: &[T]) -> Result<(), AppError> {
    for (i, entry) in entries.iter().enumerate() {
        if entries.iter().skip(i + 1).any(|other| other == entry) {
            return Err(AppError::InvalidInput {
                field,
                reason: format!("duplicate entry '{entry}'"),
            });
        }
    }
    Ok(())
}

/// Validate a service's asset priority list (no duplicate sources).
pub fn validate_assets_priorities(entries: &[AssetSource]) -> Result<(), AppError> {
    validate_unique("assets_priorities", entries)
}

/// Validate the global service priority list (no duplicate platforms).
pub fn validate_service_priorities(entries: &[Platform]) -> Result<(), AppError> {
    validate_unique("service_priorities", entries)
}

/// Validate every ordered list in a configuration tree.
pub fn validate_gui(gui: &Gui) -> Result<(), AppError> {
    validate_service_priorities(&gui.activity.service_priorities)?;
    let services = &gui.services;
    validate_assets_priorities(&services.nintendo.assets_priorities)?;
    validate_assets_priorities(&services.playstation.assets_priorities)?;
    validate_assets_priorities(&services.steam.assets_priorities)?;
    validate_assets_priorities(&services.xbox.assets_priorities)?;
    Ok(())
}

fn dedup_in_place<T: PartialEq>(entries: &mut Vec<T>) -> bool {
    let before = entries.len();
    let mut kept: Vec<T> = Vec::with_capacity(before);
    for entry in entries.drain(..) {
        if !kept.contains(&entry) {
            kept.push(entry);
        }
    }
    *entries = kept;
    entries.len() != before
}

/// Drop repeated entries from every ordered list, keeping the first
/// occurrence. Returns true when anything was removed.
pub fn repair_gui(gui: &mut Gui) -> bool {
    let services = &mut gui.services;
    // Non-short-circuiting so every list is repaired
    [
        dedup_in_place(&mut gui.activity.service_priorities),
        dedup_in_place(&mut services.nintendo.assets_priorities),
        dedup_in_place(&mut services.playstation.assets_priorities),
        dedup_in_place(&mut services.steam.assets_priorities),
        dedup_in_place(&mut services.xbox.assets_priorities),
    ]
    .contains(&true)
}
