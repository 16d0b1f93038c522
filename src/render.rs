//! Draws one badge icon and saves it as PNG.

use crate::{
    badge::BadgeStyle,
    font::{resolve_font, TextRenderError},
    icon_gen::{Capability, IconKind, IconSpec},
};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, Rgba, RgbaImage,
};
use imageproc::{
    drawing::{draw_filled_circle_mut, draw_line_segment_mut, draw_polygon_mut},
    point::Point,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
};

/// Outline ring width of the badge circle, in pixels.
const OUTLINE_WIDTH: f32 = 2.0;

/// Render the badge described by `style` at `spec.size` and write it to
/// `spec.output_path`. A label that cannot be drawn is logged and skipped.
pub fn render_icon(_capability: &Capability, spec: &IconSpec, style: &BadgeStyle) -> Result<IconKind> {
    let size = spec.size();
    let mut canvas = draw_badge(size, style);

    let labelled = match draw_label(&mut canvas, style) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!("Could not add text to {size}x{size} icon: {err}");
            false
        }
    };

    save_png(&canvas, spec)?;
    Ok(IconKind::Rendered { labelled })
}

/// Everything but the label: circle, chart lines and chart dots.
pub fn draw_badge(size: u32, style: &BadgeStyle) -> RgbaImage {
    let mut canvas = RgbaImage::new(size, size);

    let margin = size / 8;
    draw_outlined_circle(
        &mut canvas,
        (margin, margin, size - margin, size - margin),
        style.fill,
        style.outline,
    );

    let points = chart_points(size);
    let stroke = (size / 16).max(1);
    for pair in points.windows(2) {
        draw_thick_segment(&mut canvas, pair[0], pair[1], stroke, style.mark);
    }

    let radius = (size / 32).max(1) as i32;
    for (x, y) in points {
        draw_filled_circle_mut(&mut canvas, (x as i32, y as i32), radius, style.mark);
    }

    canvas
}

/// The three vertices of the rising chart line.
pub fn chart_points(size: u32) -> [(u32, u32); 3] {
    [
        (size / 4, size * 3 / 4),
        (size / 2, size / 2),
        (size * 3 / 4, size / 4),
    ]
}

/// Draw the label horizontally centered with its top at `size / 8`.
pub fn draw_label(canvas: &mut RgbaImage, style: &BadgeStyle) -> Result<(), TextRenderError> {
    if style.label.is_empty() {
        return Err(TextRenderError::EmptyLabel);
    }
    let size = canvas.width();
    let px = (size / 6).max(8);

    let font = resolve_font(&style.fonts)?;
    let (text_width, _) = font.measure(&style.label, px)?;

    let x = (size as i32 - text_width as i32).div_euclid(2);
    let y = (size / 8) as i32;
    font.draw(canvas, style.mark, x, y, px, &style.label)
}

/// Filled circle inscribed in the inclusive box `(x0, y0, x1, y1)`, with an
/// outline ring drawn inside the box edge. Pixels are overwritten, not blended.
fn draw_outlined_circle(
    canvas: &mut RgbaImage,
    (x0, y0, x1, y1): (u32, u32, u32, u32),
    fill: Rgba<u8>,
    outline: Rgba<u8>,
) {
    let center_x = (x0 + x1) as f32 / 2.0;
    let center_y = (y0 + y1) as f32 / 2.0;
    let radius = (x1 - x0).min(y1 - y0) as f32 / 2.0 + 0.5;

    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            let distance = (dx * dx + dy * dy).sqrt();

            if distance > radius {
                continue;
            }
            let color = if distance > radius - OUTLINE_WIDTH {
                outline
            } else {
                fill
            };
            canvas.put_pixel(x, y, color);
        }
    }
}

/// Straight stroke of `width` pixels between `from` and `to`, with round ends.
fn draw_thick_segment(
    canvas: &mut RgbaImage,
    from: (u32, u32),
    to: (u32, u32),
    width: u32,
    color: Rgba<u8>,
) {
    let (ax, ay) = (from.0 as f32, from.1 as f32);
    let (bx, by) = (to.0 as f32, to.1 as f32);
    let length = ((bx - ax).powi(2) + (by - ay).powi(2)).sqrt();
    let cap = (width / 2) as i32;

    if length == 0.0 {
        draw_filled_circle_mut(canvas, (from.0 as i32, from.1 as i32), cap, color);
        return;
    }
    if width <= 1 {
        draw_line_segment_mut(canvas, (ax, ay), (bx, by), color);
        return;
    }

    // Normal of the segment, half a stroke long.
    let half = width as f32 / 2.0;
    let nx = -(by - ay) / length * half;
    let ny = (bx - ax) / length * half;
    let corner = |x: f32, y: f32| Point::new(x.round() as i32, y.round() as i32);
    let quad = [
        corner(ax + nx, ay + ny),
        corner(bx + nx, by + ny),
        corner(bx - nx, by - ny),
        corner(ax - nx, ay - ny),
    ];
    draw_polygon_mut(canvas, &quad, color);

    draw_filled_circle_mut(canvas, (from.0 as i32, from.1 as i32), cap, color);
    draw_filled_circle_mut(canvas, (to.0 as i32, to.1 as i32), cap, color);
}

fn save_png(canvas: &RgbaImage, spec: &IconSpec) -> Result<()> {
    let path = spec.output_path();
    if let Some(parent) = path.parent() {
        create_dir_all(parent).context("Can't create output directory")?;
    }

    let mut out_file =
        BufWriter::new(File::create(path).context("Failed to create PNG file")?);
    write_png(canvas.as_raw(), &mut out_file, spec.size())?;
    out_file.flush().context("Failed to write PNG")?;
    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, size, size, ColorType::Rgba8)?;
    Ok(())
}
