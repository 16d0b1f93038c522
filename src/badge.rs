//! Look of the extension badge: colors, label and the fonts tried for it.

use anyhow::Result;
use image::Rgba;
use std::{path::PathBuf, str::FromStr};

/// Circle fill (material green).
pub const FILL: Rgba<u8> = Rgba([76, 175, 80, 255]);
/// Circle outline (material blue, slightly translucent).
pub const OUTLINE: Rgba<u8> = Rgba([33, 150, 243, 200]);
/// Chart lines, chart dots and label.
pub const MARK: Rgba<u8> = Rgba([255, 255, 255, 255]);

pub const DEFAULT_LABEL: &str = "LS";

/// Where a label font may come from. Sources are tried in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A font file at an exact path.
    File(PathBuf),
    /// A font file name looked up in the working directory and the usual
    /// system font directories.
    Named(String),
    /// The embedded 5x7 bitmap font. Always loads.
    Builtin,
}

impl FontSource {
    /// Bold DejaVu, then Arial, then the embedded font.
    pub fn defaults() -> Vec<FontSource> {
        vec![
            FontSource::File(PathBuf::from(
                "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
            )),
            FontSource::Named("arial.ttf".to_string()),
            FontSource::Builtin,
        ]
    }

    /// Candidate paths for this source, in lookup order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        match self {
            FontSource::File(path) => vec![path.clone()],
            FontSource::Named(name) => {
                let mut paths = vec![PathBuf::from(name)];
                paths.extend(
                    [
                        "/usr/share/fonts/truetype/msttcorefonts",
                        "/usr/share/fonts/truetype",
                        "/usr/share/fonts",
                        "/Library/Fonts",
                        "/System/Library/Fonts/Supplemental",
                        "C:\\Windows\\Fonts",
                    ]
                    .iter()
                    .map(|dir| PathBuf::from(dir).join(name)),
                );
                paths
            }
            FontSource::Builtin => Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BadgeStyle {
    pub fill: Rgba<u8>,
    pub outline: Rgba<u8>,
    pub mark: Rgba<u8>,
    pub label: String,
    pub fonts: Vec<FontSource>,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            fill: FILL,
            outline: OUTLINE,
            mark: MARK,
            label: DEFAULT_LABEL.to_string(),
            fonts: FontSource::defaults(),
        }
    }
}

/// Parse a CSS color. The color's own alpha is scaled by `max_alpha`, so
/// `#2196f3` parsed with `max_alpha = 200` gives the default outline.
pub fn parse_css_color(value: &str, max_alpha: u8) -> Result<Rgba<u8>> {
    let color = css_color::Srgb::from_str(value)
        .map_err(|_| anyhow::anyhow!("Invalid CSS color: {value}"))?;
    Ok(Rgba([
        (color.red * 255.).round() as u8,
        (color.green * 255.).round() as u8,
        (color.blue * 255.).round() as u8,
        (color.alpha * max_alpha as f32).round() as u8,
    ]))
}
