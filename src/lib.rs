//! Helpers for stripping light backgrounds from sprite assets.
//!
//! Sprites exported with a white/gray checker behind them are made usable
//! in-game by clearing the alpha of every bright pixel, keeping only dark
//! outlines and colored areas.
#![forbid(unused_must_use)]

pub mod cleanup;
pub mod config;
pub mod transform;

pub use crate::cleanup::{clean_file, clean_in_place, CleanError};
pub use crate::config::Config;
pub use crate::transform::{strip_light_background, DEFAULT_LIGHT_THRESHOLD};
