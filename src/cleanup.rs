use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::transform::{png_bytes, strip_light_background};

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Could not read or encode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Cleans `input` and writes the result to `output` as PNG.
/// Returns the number of pixels made transparent.
pub fn clean_file(input: &Path, output: &Path, threshold: u8) -> Result<u64, CleanError> {
    let mut img = image::open(input)?.to_rgba8();
    let cleared = strip_light_background(&mut img, threshold);
    fs::write(output, png_bytes(img)?)?;
    Ok(cleared)
}

/// Cleans `path`, replacing the file itself. The cleaned image goes to a
/// sibling temp file first and only replaces the original once it was fully
/// written; on failure the temp file is removed and the original is left
/// untouched.
pub fn clean_in_place(path: &Path, threshold: u8) -> Result<u64, CleanError> {
    let tmp = tmp_path(path);
    let cleared = match clean_file(path, &tmp, threshold) {
        Ok(cleared) => cleared,
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
    };
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(cleared)
}

fn tmp_path(path: &Path) -> PathBuf {
    path.with_extension("tmp.png")
}
