//! Strips the light checker background from the shared `etc` sprite assets,
//! overwriting each file in place.

use anyhow::bail;
use itertools::Itertools;
use log::{info, warn};
use sprite_bg_clean::{clean_in_place, Config};

/// Only these need transparency; the rest of the directory is left alone.
const ETC_SPRITES: &[&str] = &[
    "plant_shadow.png",
    "fresh_effect_sprite_dot.png",
    "sparkling_effect_sprite_dot.png",
    "plant_neglected_overlay_sprite.png",
    "signpost_empty.png",
    "garden_border_hedge.png",
];

fn main() -> anyhow::Result<()> {
    Config::init();
    pretty_env_logger::init_timed();

    let dir = Config::assets_dir();
    if !dir.is_dir() {
        bail!("Asset directory not found: {}", dir.display());
    }

    let threshold = Config::light_threshold();
    info!(
        "Cleaning light backgrounds under {} (threshold {}).",
        dir.display(),
        threshold
    );

    let mut missing = Vec::new();
    let mut attempted = 0;
    let mut succeeded = 0;
    for name in ETC_SPRITES {
        let path = dir.join(name);
        if !path.exists() {
            missing.push(*name);
            continue;
        }
        attempted += 1;
        info!("[{}/{}] cleaning {}", attempted, ETC_SPRITES.len(), name);
        match clean_in_place(&path, threshold) {
            Ok(cleared) => {
                info!("Replaced {} ({} pixels cleared).", name, cleared);
                succeeded += 1;
            }
            Err(e) => warn!("Failed to clean {}: {}", name, e),
        }
    }

    if !missing.is_empty() {
        warn!("Missing asset files skipped: {}", missing.iter().join(", "));
    }
    info!("Cleaned {}/{} asset files.", succeeded, attempted);
    Ok(())
}
