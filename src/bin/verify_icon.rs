use anyhow::{Context, Result};
use extension_icons::fallback::FALLBACK_PNG;
use image::io::Reader as ImageReader;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "icons/icon-128.png".to_string());

    let bytes = std::fs::read(&path).with_context(|| format!("Failed to read {path}"))?;
    println!("Checking icon: {}", path);

    if bytes == FALLBACK_PNG {
        println!("⚠ File is the minimal fallback PNG (always 16x16)");
        return Ok(());
    }

    let img = ImageReader::open(&path)?
        .with_guessed_format()?
        .decode()
        .context("Failed to decode image")?;

    let rgba_img = img.to_rgba8();
    let width = img.width();
    let height = img.height();
    println!("Image dimensions: {}x{}", width, height);

    if width != height {
        println!("⚠ Icon is not square");
    }

    // The badge circle covers the center; sample just left of the chart line.
    let center_x = width / 2;
    let center_y = height / 2;
    let pixel = rgba_img.get_pixel(center_x.saturating_sub(width / 8), center_y);

    println!("\nBadge pixel (x={}, y={}):", center_x.saturating_sub(width / 8), center_y);
    println!("  RGBA: [{}, {}, {}, {}]", pixel[0], pixel[1], pixel[2], pixel[3]);

    let painted = rgba_img.pixels().filter(|p| p[3] > 0).count();
    let total = (width * height) as usize;
    println!("\nCoverage: {} of {} pixels painted", painted, total);

    if pixel[3] > 0 {
        println!("✓ Badge detected!");
    } else {
        println!("⚠ Badge center is transparent");
    }

    Ok(())
}
