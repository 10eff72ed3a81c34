use crate::error::{Error, Result};
use image::{ColorType, DynamicImage, ImageOutputFormat};
use std::io::{self, Cursor, Write};

/// Encodes `img` as a complete PNG in memory.
///
/// Floating point images are narrowed to 8-bit RGBA first.
pub fn encode_png(img: &DynamicImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut cursor = Cursor::new(&mut buf);

    let written = match img.color() {
        ColorType::Rgb32F | ColorType::Rgba32F => {
            DynamicImage::ImageRgba8(img.to_rgba8()).write_to(&mut cursor, ImageOutputFormat::Png)
        }
        _ => img.write_to(&mut cursor, ImageOutputFormat::Png),
    };
    written.map_err(Error::Encode)?;

    Ok(buf)
}

pub fn write_stdout(bytes: &[u8]) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(bytes).map_err(Error::Write)?;
    stdout.flush().map_err(Error::Write)
}
