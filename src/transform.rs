use image::RgbaImage;
use std::io::Cursor;

/// Brightness above which a pixel counts as background.
pub const DEFAULT_LIGHT_THRESHOLD: u8 = 180;

/// Clears the alpha of every pixel whose RGB mean is above `threshold`.
///
/// Dark outlines and colored areas keep their alpha; near-white and
/// near-gray pixels (the export checker) become fully transparent. RGB
/// channels are never touched. Returns the number of pixels cleared.
pub fn strip_light_background(img: &mut RgbaImage, threshold: u8) -> u64 {
    // mean(r, g, b) > threshold, scaled by 3 to stay in integers
    let limit = 3 * u16::from(threshold);
    let mut cleared = 0;
    for px in img.pixels_mut() {
        let [r, g, b, _] = px.0;
        if u16::from(r) + u16::from(g) + u16::from(b) > limit {
            px.0[3] = 0;
            cleared += 1;
        }
    }
    cleared
}

pub fn png_bytes(img: RgbaImage) -> Result<Vec<u8>, image::ImageError> {
    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), image::ImageOutputFormat::Png)?;
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn uniform(color: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(4, 4, Rgba(color))
    }

    #[test]
    fn clears_light_pixels_only() {
        let mut img = uniform([200, 200, 200, 255]);
        img.put_pixel(0, 0, Rgba([10, 20, 30, 255]));
        let cleared = strip_light_background(&mut img, 180);
        assert_eq!(cleared, 15);
        assert_eq!(img.get_pixel(0, 0).0, [10, 20, 30, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [200, 200, 200, 0]);
    }

    #[test]
    fn brightness_equal_to_threshold_stays_opaque() {
        let mut img = uniform([180, 180, 180, 255]);
        assert_eq!(strip_light_background(&mut img, 180), 0);
        assert_eq!(img.get_pixel(0, 0).0[3], 255);
    }

    #[test]
    fn brightness_one_step_above_threshold_is_cleared() {
        // mean of (181, 180, 180) is just over 180
        let mut img = uniform([181, 180, 180, 255]);
        assert_eq!(strip_light_background(&mut img, 180), 16);
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn rgb_of_cleared_pixels_is_kept() {
        let mut img = uniform([250, 240, 230, 128]);
        strip_light_background(&mut img, 180);
        assert_eq!(img.get_pixel(2, 2).0, [250, 240, 230, 0]);
    }

    #[test]
    fn max_threshold_clears_nothing() {
        let mut img = uniform([255, 255, 255, 255]);
        assert_eq!(strip_light_background(&mut img, 255), 0);
        assert_eq!(img.get_pixel(3, 3).0[3], 255);
    }
}
