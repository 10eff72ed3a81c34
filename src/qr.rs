use crate::error::{Error, Result};
use image::{GrayImage, Luma};
use log::debug;
use qrcode::{Color, EcLevel, QrCode};

/// Light modules surrounding the symbol on every side.
pub const QUIET_ZONE: usize = 4;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

pub fn generate_qr_data(text: &str, ec_level: EcLevel) -> Result<Vec<Vec<bool>>> {
    if text.is_empty() {
        return Err(Error::EmptyContent);
    }

    let code = QrCode::with_error_correction_level(text, ec_level)?;

    let modules = code.to_colors();
    let width = code.width();

    let mut qr_data = vec![vec![false; width]; width];
    for y in 0..width {
        for x in 0..width {
            qr_data[y][x] = matches!(modules[y * width + x], Color::Dark);
        }
    }

    Ok(qr_data)
}

/// Renders `text` as a `size`×`size` QR image at medium error correction.
///
/// Each pixel takes the colour of the nearest module of the symbol plus its
/// quiet zone. The image grows when `size` is smaller than one pixel per module.
pub fn render_qr(text: &str, size: u32) -> Result<GrayImage> {
    let qr_data = generate_qr_data(text, EcLevel::M)?;
    let symbol = qr_data.len();
    let real_size = symbol + 2 * QUIET_ZONE;
    debug!("QR symbol is {symbol} modules wide ({real_size} with quiet zone)");

    let size = size.max(real_size as u32);
    let modules_per_pixel = real_size as f64 / size as f64;

    Ok(GrayImage::from_fn(size, size, |x, y| {
        let mx = (x as f64 * modules_per_pixel) as usize;
        let my = (y as f64 * modules_per_pixel) as usize;

        let inside = (QUIET_ZONE..QUIET_ZONE + symbol).contains(&mx)
            && (QUIET_ZONE..QUIET_ZONE + symbol).contains(&my);

        if inside && qr_data[my - QUIET_ZONE][mx - QUIET_ZONE] {
            DARK
        } else {
            LIGHT
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_requested_square_size() {
        let img = render_qr("https://example.com", 900).unwrap();
        assert_eq!(img.dimensions(), (900, 900));
    }

    #[test]
    fn quiet_zone_is_light_and_finder_is_dark() {
        let text = "https://example.com";
        let symbol = generate_qr_data(text, EcLevel::M).unwrap().len();
        let real_size = (symbol + 2 * QUIET_ZONE) as u32;
        let img = render_qr(text, 900).unwrap();

        // Pixel centred on the top-left finder's outer ring.
        let px = (900 * QUIET_ZONE as u32 + 900 / 2) / real_size;
        assert_eq!(*img.get_pixel(px, px), DARK);

        assert_eq!(*img.get_pixel(0, 0), LIGHT);
        assert_eq!(*img.get_pixel(899, 899), LIGHT);
        assert_eq!(*img.get_pixel(899, 0), LIGHT);
    }

    #[test]
    fn small_size_grows_to_one_pixel_per_module() {
        let symbol = generate_qr_data("hi", EcLevel::M).unwrap().len();
        let img = render_qr("hi", 3).unwrap();
        let expected = (symbol + 2 * QUIET_ZONE) as u32;
        assert_eq!(img.dimensions(), (expected, expected));
    }

    #[test]
    fn medium_level_is_used() {
        // 20 bytes overflow version 1 at level M, so version 2 (25 modules) is chosen.
        let data = generate_qr_data("abcdefghijklmnopqrst", EcLevel::M).unwrap();
        assert_eq!(data.len(), 25);
    }

    #[test]
    fn empty_content_is_rejected() {
        assert!(matches!(render_qr("", 900), Err(Error::EmptyContent)));
    }

    #[test]
    fn oversized_content_fails() {
        let text = "x".repeat(4000);
        assert!(matches!(
            render_qr(&text, 900),
            Err(Error::QrGeneration(_))
        ));
    }
}
