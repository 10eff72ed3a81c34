use crate::font::LabelFont;
use image::buffer::ConvertBuffer;
use image::{imageops, GrayImage, Rgba, RgbaImage};
use log::debug;

pub const CANVAS_WIDTH: u32 = 1000;
pub const CANVAS_HEIGHT: u32 = 1100;
pub const QR_SIZE: u32 = 900;
pub const QR_Y: u32 = 50;
pub const TEXT_Y: u32 = QR_Y + QR_SIZE + 100;
pub const LABEL_FONT_SIZE: f32 = 100.0;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Left edge of a label `text_width` pixels wide centred on the canvas.
///
/// Negative when the label is wider than the canvas.
pub fn label_origin_x(text_width: i32) -> i32 {
    (CANVAS_WIDTH as i32 - text_width) / 2
}

/// Lays out the QR code and its label on a white card.
pub fn draw_qr_with_label(qr: &GrayImage, label: &str, font: &LabelFont) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, WHITE);

    let qr: RgbaImage = qr.convert();
    let qr = imageops::crop_imm(&qr, 0, 0, QR_SIZE, QR_SIZE);
    let qr_x = (CANVAS_WIDTH - QR_SIZE) / 2;
    imageops::overlay(&mut canvas, &*qr, qr_x as i64, QR_Y as i64);

    let text_width = font.measure(label).round() as i32;
    let text_x = label_origin_x(text_width);
    debug!("Label {label:?} is {text_width}px wide, drawn from x={text_x}");
    font.draw(&mut canvas, label, text_x as f32, TEXT_Y as f32, BLACK);

    canvas
}
