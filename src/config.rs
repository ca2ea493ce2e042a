use dotenv::dotenv;
use std::env::var;
use std::path::PathBuf;

use crate::transform::DEFAULT_LIGHT_THRESHOLD;

/// Where the in-place cleaner looks for assets when `SBC_ASSETS_DIR` is unset.
/// Matches running the tool from its directory inside the asset tree.
const DEFAULT_ASSETS_DIR: &str = "../etc";

pub enum Config {
    AssetsDir,
    LightThreshold,
}

impl Config {
    pub fn init() {
        dotenv().ok();
    }

    pub fn get_or_none(&self) -> Option<String> {
        match self {
            Config::AssetsDir => var("SBC_ASSETS_DIR").ok(),
            Config::LightThreshold => var("SBC_LIGHT_THRESHOLD").ok(),
        }
    }

    /// Directory holding the assets that are cleaned in place.
    pub fn assets_dir() -> PathBuf {
        Self::AssetsDir
            .get_or_none()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR))
    }

    /// Brightness threshold for the background keying.
    pub fn light_threshold() -> u8 {
        Self::LightThreshold
            .get_or_none()
            .map(|v| v.parse::<u8>().expect("Invalid SBC_LIGHT_THRESHOLD"))
            .unwrap_or(DEFAULT_LIGHT_THRESHOLD)
    }
}
