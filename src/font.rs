use crate::error::{Error, Result};
use ab_glyph::{point, Font, FontRef, GlyphId, PxScale, ScaleFont};
use image::{Pixel, Rgba, RgbaImage};

static EMBEDDED_FONT: &[u8] = include_bytes!("../assets/DejaVuSans-Bold.ttf");

/// A bold face at a fixed pixel-per-em size, used to draw the card label.
pub struct LabelFont {
    font: FontRef<'static>,
    scale: PxScale,
}

impl LabelFont {
    /// Loads the font bundled into the executable.
    pub fn embedded(px_per_em: f32) -> Result<Self> {
        Self::from_bytes(EMBEDDED_FONT, px_per_em)
    }

    pub fn from_bytes(data: &'static [u8], px_per_em: f32) -> Result<Self> {
        let font = FontRef::try_from_slice(data).map_err(|e| Error::Font(e.to_string()))?;
        let units_per_em = font
            .units_per_em()
            .ok_or_else(|| Error::Font("font does not declare units per em".to_string()))?;

        // ab_glyph scales by ascent-to-descent height, not by em.
        let scale = PxScale::from(px_per_em * font.height_unscaled() / units_per_em);

        Ok(Self { font, scale })
    }

    /// Horizontal advance of `text` in pixels, kerning included.
    pub fn measure(&self, text: &str) -> f32 {
        let scaled = self.font.as_scaled(self.scale);
        let mut width = 0.0;
        let mut prev: Option<GlyphId> = None;

        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = prev {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            prev = Some(id);
        }

        width
    }

    /// Draws `text` with its baseline starting at (`x`, `baseline`).
    ///
    /// Coverage is blended over the existing pixels. Anything falling outside
    /// the image is dropped.
    pub fn draw(&self, img: &mut RgbaImage, text: &str, x: f32, baseline: f32, color: Rgba<u8>) {
        let scaled = self.font.as_scaled(self.scale);
        let (width, height) = (img.width() as i32, img.height() as i32);
        let mut caret = x;
        let mut prev: Option<GlyphId> = None;

        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = prev {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(self.scale, point(caret, baseline));
            caret += scaled.h_advance(id);
            prev = Some(id);

            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();

            outlined.draw(|gx, gy, coverage| {
                let px = bounds.min.x as i32 + gx as i32;
                let py = bounds.min.y as i32 + gy as i32;
                if px < 0 || py < 0 || px >= width || py >= height {
                    return;
                }

                let alpha = (color[3] as f32 * coverage.clamp(0.0, 1.0)).round() as u8;
                let ink = Rgba([color[0], color[1], color[2], alpha]);
                img.get_pixel_mut(px as u32, py as u32).blend(&ink);
            });
        }
    }
}
