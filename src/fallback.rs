//! Pre-encoded icon used when the drawing stack is not available.

use anyhow::{Context, Result};
use std::{fs::create_dir_all, path::Path};

/// Minimal 16x16 RGBA PNG written verbatim for every requested size.
///
/// The IHDR always declares 16x16, so `icon-128.png` written from this blob
/// still holds 16x16 data and relies on the browser to scale it.
pub const FALLBACK_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, // signature
    0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44, 0x52, // IHDR
    0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00, 0x10,
    0x08, 0x06, 0x00, 0x00, 0x00, 0x1f, 0xf3, 0xff,
    0x61, 0x00, 0x00, 0x00, 0x18, 0x49, 0x44, 0x41, // IDAT
    0x54, 0x18, 0x9c, 0x63, 0x64, 0xa0, 0x31, 0x60,
    0x0c, 0x05, 0xa3, 0x60, 0x04, 0x1a, 0xc0, 0xc2,
    0x01, 0x02, 0x00, 0x0b, 0x50, 0x04, 0x9c, 0x7a,
    0xaa, 0x23, 0x73, 0x00, 0x00, 0x00, 0x00, 0x49, // IEND
    0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

/// Write [`FALLBACK_PNG`] to `path`, creating the parent directory if needed.
pub fn write_fallback(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent).context("Can't create output directory")?;
    }
    std::fs::write(path, FALLBACK_PNG)
        .with_context(|| format!("Failed to write fallback icon {}", path.display()))?;
    Ok(())
}
