//! Produces the `_v3` tree sprite variants with their light checker
//! background removed. Run from the directory holding the `_old` originals.

use std::path::Path;

use log::{error, info};
use sprite_bg_clean::{clean_file, Config};

const TREE_SPRITES: &[(&str, &str)] = &[
    ("sprout_dot_old.png", "sprout_dot_v3.png"),
    ("bloom_orange_dot_old.png", "bloom_orange_dot_v3.png"),
    ("bloom_purple_dot_old.png", "bloom_purple_dot_v3.png"),
];

fn main() -> anyhow::Result<()> {
    Config::init();
    pretty_env_logger::init_timed();

    let threshold = Config::light_threshold();
    info!(
        "Removing light backgrounds from {} tree sprites (threshold {}).",
        TREE_SPRITES.len(),
        threshold
    );

    let mut cleaned = 0;
    for (input, output) in TREE_SPRITES {
        match clean_file(Path::new(input), Path::new(output), threshold) {
            Ok(cleared) => {
                info!("Saved {} ({} pixels cleared).", output, cleared);
                cleaned += 1;
            }
            Err(e) => error!("Failed to clean {}: {}", input, e),
        }
    }

    info!("Done, {}/{} tree sprites cleaned.", cleaned, TREE_SPRITES.len());
    Ok(())
}
