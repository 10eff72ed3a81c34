use crate::args::{Args, OperationType};
use crate::canvas::{self, LABEL_FONT_SIZE, QR_SIZE};
use crate::decode;
use crate::error::Result;
use crate::font::LabelFont;
use crate::input;
use crate::output;
use crate::qr;
use crate::resize;
use image::DynamicImage;
use log::info;

/// One invocation's worth of work.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    QrCode { content: String, label: String },
    Resize { width: u32 },
}

impl From<Args> for Operation {
    fn from(args: Args) -> Self {
        match args.operation {
            OperationType::Qrcode => Operation::QrCode {
                content: args.content,
                label: args.code,
            },
            OperationType::Resize => Operation::Resize { width: args.width },
        }
    }
}

impl Operation {
    /// Runs the operation and returns the finished PNG.
    pub fn run(&self) -> Result<Vec<u8>> {
        match self {
            Operation::QrCode { content, label } => qr_card_png(content, label),
            Operation::Resize { width } => {
                let bytes = input::read_piped_stdin()?;
                resize_png(&bytes, *width)
            }
        }
    }
}

pub fn qr_card_png(content: &str, label: &str) -> Result<Vec<u8>> {
    let font = LabelFont::embedded(LABEL_FONT_SIZE)?;
    let qr = qr::render_qr(content, QR_SIZE)?;
    let card = canvas::draw_qr_with_label(&qr, label, &font);
    output::encode_png(&DynamicImage::ImageRgba8(card))
}

pub fn resize_png(bytes: &[u8], width: u32) -> Result<Vec<u8>> {
    let decoded = decode::decode_image(bytes)?;
    info!("Decoded image format: {}", decoded.format.name);

    let resized = resize::resize_to_width(decoded.image, width);
    output::encode_png(&resized)
}
