use crate::error::{Error, Result};
use image::{DynamicImage, ImageFormat};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub format: ImageFormat,
    pub name: &'static str,
}

/// Decoders in the order they are tried.
pub const CANDIDATES: [Candidate; 6] = [
    Candidate { format: ImageFormat::Png, name: "png" },
    Candidate { format: ImageFormat::Jpeg, name: "jpeg" },
    Candidate { format: ImageFormat::Gif, name: "gif" },
    Candidate { format: ImageFormat::Bmp, name: "bmp" },
    Candidate { format: ImageFormat::Tiff, name: "tiff" },
    Candidate { format: ImageFormat::WebP, name: "webp" },
];

pub struct Decoded {
    pub image: DynamicImage,
    pub format: Candidate,
}

pub const SUPPORTED_FORMATS: &str = "JPEG, PNG, GIF, BMP, TIFF, WebP";

/// Tries each candidate decoder in turn and returns the first success.
///
/// When every decoder refuses the data, the error carries the failure of the
/// decoder whose signature matched, if any did.
pub fn decode_image(bytes: &[u8]) -> Result<Decoded> {
    let sniffed = image::guess_format(bytes).ok();
    let mut cause = None;

    for candidate in CANDIDATES {
        match image::load_from_memory_with_format(bytes, candidate.format) {
            Ok(image) => {
                return Ok(Decoded {
                    image,
                    format: candidate,
                })
            }
            Err(e) if sniffed == Some(candidate.format) => cause = Some(e),
            Err(_) => {}
        }
    }

    Err(Error::Decode {
        supported: SUPPORTED_FORMATS.to_string(),
        cause,
    })
}
