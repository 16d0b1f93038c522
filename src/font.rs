//! Label fonts: TrueType files through rusttype, plus an embedded bitmap font.

use crate::badge::FontSource;
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use rusttype::{point, Font, Scale};
use thiserror::Error;

/// Why a label could not be drawn. The icon is still written without it.
#[derive(Debug, Error)]
pub enum TextRenderError {
    #[error("label is empty")]
    EmptyLabel,
    #[error("none of the {0} font sources could be loaded")]
    NoFont(usize),
    #[error("built-in font has no glyph for {0:?}")]
    MissingGlyph(char),
}

pub enum LoadedFont {
    Truetype(Font<'static>),
    Bitmap,
}

/// Load the first usable font of `sources`.
pub fn resolve_font(sources: &[FontSource]) -> Result<LoadedFont, TextRenderError> {
    for source in sources {
        if *source == FontSource::Builtin {
            return Ok(LoadedFont::Bitmap);
        }
        for path in source.candidates() {
            let data = match std::fs::read(&path) {
                Ok(data) => data,
                Err(err) => {
                    tracing::debug!("Skipping font {}: {err}", path.display());
                    continue;
                }
            };
            match Font::try_from_vec(data) {
                Some(font) => {
                    tracing::debug!("Using font {}", path.display());
                    return Ok(LoadedFont::Truetype(font));
                }
                None => tracing::debug!("Skipping font {}: not a TrueType font", path.display()),
            }
        }
    }
    Err(TextRenderError::NoFont(sources.len()))
}

impl LoadedFont {
    /// Width and height in pixels of the inked area of `text` drawn at `px`.
    /// Side bearings before the first glyph are not counted.
    pub fn measure(&self, text: &str, px: u32) -> Result<(u32, u32), TextRenderError> {
        match self {
            LoadedFont::Truetype(font) => {
                let scale = Scale::uniform(px as f32);
                let ascent = font.v_metrics(scale).ascent;
                let (mut left, mut top) = (i32::MAX, i32::MAX);
                let (mut right, mut bottom) = (i32::MIN, i32::MIN);
                for glyph in font.layout(text, scale, point(0.0, ascent)) {
                    if let Some(bb) = glyph.pixel_bounding_box() {
                        left = left.min(bb.min.x);
                        top = top.min(bb.min.y);
                        right = right.max(bb.max.x);
                        bottom = bottom.max(bb.max.y);
                    }
                }
                if left > right {
                    return Ok((0, 0));
                }
                Ok(((right - left) as u32, (bottom - top) as u32))
            }
            LoadedFont::Bitmap => {
                for c in text.chars() {
                    bitmap_glyph(c)?;
                }
                let cell = bitmap_cell(px);
                let count = text.chars().count() as u32;
                let width = (count * (GLYPH_WIDTH + 1)).saturating_sub(1) * cell;
                Ok((width, GLYPH_HEIGHT * cell))
            }
        }
    }

    /// Draw `text` with its top-left corner at (`x`, `y`).
    pub fn draw(
        &self,
        canvas: &mut RgbaImage,
        color: Rgba<u8>,
        x: i32,
        y: i32,
        px: u32,
        text: &str,
    ) -> Result<(), TextRenderError> {
        match self {
            LoadedFont::Truetype(font) => {
                draw_text_mut(canvas, color, x, y, Scale::uniform(px as f32), font, text);
                Ok(())
            }
            LoadedFont::Bitmap => {
                let cell = bitmap_cell(px) as i32;
                let glyphs = text
                    .chars()
                    .map(bitmap_glyph)
                    .collect::<Result<Vec<_>, _>>()?;
                for (index, rows) in glyphs.iter().enumerate() {
                    let left = x + index as i32 * (GLYPH_WIDTH as i32 + 1) * cell;
                    for (row, bits) in rows.iter().enumerate() {
                        for col in 0..GLYPH_WIDTH as i32 {
                            if bits & (1 << (GLYPH_WIDTH as i32 - 1 - col)) == 0 {
                                continue;
                            }
                            fill_cell(
                                canvas,
                                left + col * cell,
                                y + row as i32 * cell,
                                cell,
                                color,
                            );
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;

/// Integer scale of the bitmap font for a requested pixel size.
fn bitmap_cell(px: u32) -> u32 {
    (px / 8).max(1)
}

fn fill_cell(canvas: &mut RgbaImage, x: i32, y: i32, cell: i32, color: Rgba<u8>) {
    for py in y..y + cell {
        for px in x..x + cell {
            if px >= 0 && py >= 0 && (px as u32) < canvas.width() && (py as u32) < canvas.height()
            {
                canvas.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

/// Rows of a 5x7 glyph, most significant of the low five bits leftmost.
/// Lowercase letters share the uppercase shapes.
fn bitmap_glyph(c: char) -> Result<[u8; 7], TextRenderError> {
    let rows = match c.to_ascii_uppercase() {
        ' ' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        _ => return Err(TextRenderError::MissingGlyph(c)),
    };
    Ok(rows)
}
