use image::ImageError;
use qrcode::types::QrError;
use thiserror::Error;

/// Everything that can stop a pipeline before its PNG is written.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to load font: {0}")]
    Font(String),

    #[error("QR generation failed: content must not be empty")]
    EmptyContent,

    #[error("QR generation failed: {0}")]
    QrGeneration(#[from] QrError),

    #[error("no data provided via stdin (pipe some image data)")]
    NoInput,

    #[error("stdin was empty (pipe some image data)")]
    EmptyInput,

    #[error("failed to read stdin: {0}")]
    ReadInput(#[source] std::io::Error),

    #[error("failed to decode image (supported formats: {supported})")]
    Decode {
        supported: String,
        #[source]
        cause: Option<ImageError>,
    },

    #[error("failed to encode PNG: {0}")]
    Encode(#[source] ImageError),

    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
