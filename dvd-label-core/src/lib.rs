//! # dvd-label
//!
//! Layout and PDF rendering for a printable DVD/CD disc label.
//!
//! A US Letter page carries two identical circular labels, one above the
//! other. Each shows the product name, a date, a version string and a logo,
//! optionally with guide circles marking the disc hub and edge.
//!
//! The work is split in two:
//!
//! - [`layout`] computes the page as a list of [`DrawCommand`]s. It is pure
//!   and needs no PDF backend.
//! - [`render`] replays those commands against a [`Renderer`]. The
//!   [`PdfRenderer`] draws them with oxidize-pdf; [`RecordingRenderer`]
//!   just records them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use dvd_label::{write_label_pdf, LabelConfig, Result};
//!
//! # fn main() -> Result<()> {
//! let config = LabelConfig::new("206", false)?;
//! let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
//! write_label_pdf(&config, &date, "logo.png", "dvd_label.pdf")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Inspecting the layout
//!
//! ```rust
//! use chrono::NaiveDate;
//! use dvd_label::{render_page, LabelConfig};
//!
//! let config = LabelConfig::new("206", true).unwrap();
//! let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
//! let commands = render_page(&config, &date);
//!
//! // Two instances, each with two guide circles, three text lines and a logo.
//! assert_eq!(commands.len(), 12);
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod logo;
pub mod render;

pub use config::LabelConfig;
pub use content::{format_label_date, format_version, LabelContent, PRODUCT_NAME};
pub use error::{LabelError, Result};
pub use geometry::{PageSize, Point, Size};
pub use layout::{
    render_page, DrawCommand, ImagePlacement, LabelInstance, PageLayout, TextBlock, TextStyle,
};
pub use logo::Logo;
pub use render::{render, PdfRenderer, RecordedCall, RecordingRenderer, Renderer};

use chrono::NaiveDate;
use std::path::Path;

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "dvd_label.pdf";

/// Lays out, renders and writes the label PDF.
///
/// The logo is loaded before anything is written, so a missing or
/// unreadable logo never leaves a partial file at `output`.
pub fn write_label_pdf(
    config: &LabelConfig,
    now: &NaiveDate,
    logo_path: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<()> {
    let layout = PageLayout::default();
    let content = LabelContent::new(config, now);
    let commands = layout.commands(&content, config.include_outline());

    let logo = Logo::load(logo_path)?;
    let mut renderer = PdfRenderer::new(layout.page, &logo)?;
    renderer.set_title(format!("{} disc label", content.product_name));
    renderer.set_subject(content.version_text.as_str());

    render(&commands, &mut renderer)?;
    renderer.save(output)
}

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
