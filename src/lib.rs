//! Draws the PNG badge icons of a browser extension.
//!
//! With the default `render` feature every icon is drawn at its own size.
//! Without it, or when forced, every icon is the embedded fallback PNG.

pub mod badge;
pub mod fallback;
#[cfg(feature = "render")]
pub mod font;
pub mod icon_gen;
#[cfg(feature = "render")]
pub mod render;

pub use icon_gen::{run, Config, IconKind, IconSpec, RunReport};
