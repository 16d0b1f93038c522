use anyhow::Result;
use clap::Parser;
use extension_icons::{
    badge::{parse_css_color, BadgeStyle, FontSource, FILL, OUTLINE},
    icon_gen::{self, Config, DEFAULT_SIZES},
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "extension-icons",
    about = "Generate the PNG badge icons of the browser extension"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "icons")]
    output: PathBuf,

    /// Icon sizes to generate.
    #[clap(
        short,
        long,
        value_delimiter = ',',
        value_name = "SIZES",
        default_values_t = DEFAULT_SIZES.to_vec(),
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    sizes: Vec<u32>,

    /// Text drawn on top of the badge.
    #[clap(long, default_value = "LS")]
    label: String,

    /// Font file tried before the system fonts.
    #[clap(long, value_name = "PATH")]
    font: Option<PathBuf>,

    /// Circle fill color (CSS color format).
    #[clap(long, value_name = "COLOR")]
    fill: Option<String>,

    /// Circle outline color (CSS color format). Opacity is capped at 200/255.
    #[clap(long, value_name = "COLOR")]
    outline: Option<String>,

    /// Skip drawing and write the minimal fallback PNG for every size.
    #[clap(long)]
    minimal: bool,
}

impl Args {
    fn into_config(self) -> Result<Config> {
        let mut style = BadgeStyle {
            label: self.label,
            ..BadgeStyle::default()
        };
        if let Some(font) = self.font {
            style.fonts.insert(0, FontSource::File(font));
        }
        if let Some(fill) = &self.fill {
            style.fill = parse_css_color(fill, FILL.0[3])?;
        }
        if let Some(outline) = &self.outline {
            style.outline = parse_css_color(outline, OUTLINE.0[3])?;
        }

        Ok(Config {
            output: self.output,
            sizes: self.sizes,
            style,
            force_fallback: self.minimal,
        })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = Args::parse().into_config()?;
    icon_gen::run(&config)?;
    Ok(())
}
