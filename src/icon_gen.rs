use crate::{badge::BadgeStyle, fallback::write_fallback};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Icon sizes a browser extension manifest asks for.
pub const DEFAULT_SIZES: [u32; 4] = [16, 32, 48, 128];

#[derive(Debug, Clone)]
pub struct Config {
    pub output: PathBuf,
    pub sizes: Vec<u32>,
    pub style: BadgeStyle,
    /// Skip drawing and write the fallback PNG for every size.
    pub force_fallback: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from("icons"),
            sizes: DEFAULT_SIZES.to_vec(),
            style: BadgeStyle::default(),
            force_fallback: false,
        }
    }
}

/// One square icon to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    size: u32,
    output_path: PathBuf,
}

impl IconSpec {
    pub fn new(size: u32, output_path: impl Into<PathBuf>) -> Result<Self> {
        if size == 0 {
            anyhow::bail!("Icon size must be at least 1 pixel");
        }
        Ok(Self {
            size,
            output_path: output_path.into(),
        })
    }

    /// `{dir}/icon-{size}.png`
    pub fn in_dir(dir: &Path, size: u32) -> Result<Self> {
        Self::new(size, dir.join(format!("icon-{size}.png")))
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

/// Proof that the drawing stack can be used for this run.
#[cfg(feature = "render")]
#[derive(Debug)]
pub struct Capability {
    _private: (),
}

/// Without the `render` feature no capability can exist.
#[cfg(not(feature = "render"))]
#[derive(Debug)]
pub enum Capability {}

#[derive(Debug, Error)]
pub enum Unavailable {
    #[error("built without the `render` feature")]
    NotCompiled,
    #[error("drawing disabled by request")]
    Disabled,
}

pub fn acquire_capability(force_fallback: bool) -> Result<Capability, Unavailable> {
    if force_fallback {
        return Err(Unavailable::Disabled);
    }
    #[cfg(feature = "render")]
    {
        Ok(Capability { _private: () })
    }
    #[cfg(not(feature = "render"))]
    {
        Err(Unavailable::NotCompiled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Rendered { labelled: bool },
    /// [`crate::fallback::FALLBACK_PNG`] written as is, whatever the size.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub size: u32,
    pub path: PathBuf,
    pub kind: IconKind,
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub icons: Vec<GeneratedIcon>,
}

impl RunReport {
    pub fn used_fallback(&self) -> bool {
        self.icons.iter().any(|icon| icon.kind == IconKind::Fallback)
    }
}

/// Produce `icon-{size}.png` in `config.output` for every configured size.
///
/// The drawing capability is acquired once. Without it every file gets the
/// fallback PNG. I/O errors abort the run; files written so far are kept.
pub fn run(config: &Config) -> Result<RunReport> {
    // Ensure the output directory exists
    std::fs::create_dir_all(&config.output).context("Can't create output directory")?;

    let mut report = RunReport::default();

    match acquire_capability(config.force_fallback) {
        Ok(capability) => {
            println!("Generating PNG icons...");
            render_sizes(&capability, config, &mut report)?;
            println!("All PNG icons created successfully!");
        }
        Err(reason) => {
            tracing::warn!("Drawing unavailable: {reason}");
            println!("Drawing unavailable ({reason}). Creating minimal PNG files...");
            for &size in &config.sizes {
                let spec = IconSpec::in_dir(&config.output, size)?;
                write_fallback(spec.output_path())?;
                println!("  ✓ Created minimal {}", spec.output_path().display());
                report.icons.push(GeneratedIcon {
                    size,
                    path: spec.output_path().to_path_buf(),
                    kind: IconKind::Fallback,
                });
            }
            println!("Minimal PNG icons created (build with the `render` feature for drawn icons)");
        }
    }

    Ok(report)
}

#[cfg(feature = "render")]
fn render_sizes(capability: &Capability, config: &Config, report: &mut RunReport) -> Result<()> {
    for &size in &config.sizes {
        let spec = IconSpec::in_dir(&config.output, size)?;
        let kind = crate::render::render_icon(capability, &spec, &config.style)?;
        let note = match kind {
            IconKind::Rendered { labelled: false } => ", no label",
            _ => "",
        };
        println!(
            "  ✓ Created {} ({size}x{size}{note})",
            spec.output_path().display()
        );
        report.icons.push(GeneratedIcon {
            size,
            path: spec.output_path().to_path_buf(),
            kind,
        });
    }
    Ok(())
}

#[cfg(not(feature = "render"))]
fn render_sizes(capability: &Capability, _config: &Config, _report: &mut RunReport) -> Result<()> {
    match *capability {}
}
