use image::{imageops, DynamicImage};
use log::debug;

/// Height that keeps the aspect ratio of a `width`×`height` image scaled to
/// `new_width`, truncated.
pub fn scaled_height(width: u32, height: u32, new_width: u32) -> u32 {
    (u64::from(height) * u64::from(new_width) / u64::from(width)) as u32
}

/// Shrinks `img` to `width` pixels wide with bilinear filtering.
///
/// Images already `width` or narrower come back untouched.
pub fn resize_to_width(img: DynamicImage, width: u32) -> DynamicImage {
    let (original_width, original_height) = (img.width(), img.height());
    if original_width <= width {
        debug!("{original_width}x{original_height} is not wider than {width}, keeping it");
        return img;
    }

    let height = scaled_height(original_width, original_height, width);
    debug!("Resizing {original_width}x{original_height} to {width}x{height}");

    let resized = imageops::resize(
        &img.to_rgba8(),
        width,
        height,
        imageops::FilterType::Triangle,
    );
    DynamicImage::ImageRgba8(resized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        }))
    }

    #[test]
    fn height_is_truncated() {
        assert_eq!(scaled_height(2000, 1000, 500), 250);
        assert_eq!(scaled_height(1000, 333, 500), 166);
        assert_eq!(scaled_height(3, 2, 2), 1);
        assert_eq!(scaled_height(4000, 1, 800), 0);
    }

    #[test]
    fn height_does_not_overflow() {
        assert_eq!(scaled_height(100_000, 100_000, 99_999), 99_999);
    }

    #[test]
    fn narrower_images_pass_through() {
        let img = gradient(300, 200);
        let out = resize_to_width(img.clone(), 800);
        assert_eq!(out, img);
    }

    #[test]
    fn equal_width_passes_through() {
        let img = gradient(800, 600);
        let out = resize_to_width(img.clone(), 800);
        assert_eq!(out, img);
    }

    #[test]
    fn wider_images_are_downscaled() {
        let out = resize_to_width(gradient(2000, 1000), 500);
        assert_eq!((out.width(), out.height()), (500, 250));

        let out = resize_to_width(gradient(1000, 333), 500);
        assert_eq!((out.width(), out.height()), (500, 166));
    }

    #[test]
    fn resampling_keeps_flat_colour() {
        let flat = DynamicImage::ImageRgb8(RgbImage::from_pixel(40, 20, Rgb([10, 200, 30])));
        let out = resize_to_width(flat, 10).to_rgb8();
        assert!(out.pixels().all(|p| *p == Rgb([10, 200, 30])));
    }
}
