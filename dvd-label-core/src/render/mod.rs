//! Rendering collaborators
//!
//! A [`Renderer`] turns layout commands into real output. [`render`] replays
//! a command list against any renderer, so the layout can be checked with
//! [`RecordingRenderer`] and printed with [`PdfRenderer`].

mod pdf;
mod recording;

pub use pdf::{baseline_offset, PdfRenderer};
pub use recording::{RecordedCall, RecordingRenderer};

use crate::error::Result;
use crate::geometry::Point;
use crate::layout::{DrawCommand, ImagePlacement, TextBlock};

/// Drawing operations the label layout needs from a backend.
pub trait Renderer {
    /// Stroke an unfilled circle.
    fn stroke_circle(&mut self, center: Point, radius: f64) -> Result<()>;

    /// Write one line of text centred horizontally within the block.
    fn centered_text(&mut self, block: &TextBlock) -> Result<()>;

    /// Place the logo image.
    fn place_image(&mut self, placement: &ImagePlacement) -> Result<()>;
}

/// Replays `commands` in order, stopping at the first failure.
pub fn render<R: Renderer + ?Sized>(commands: &[DrawCommand], renderer: &mut R) -> Result<()> {
    for command in commands {
        tracing::debug!(?command, "render");
        match command {
            DrawCommand::Circle { center, radius } => renderer.stroke_circle(*center, *radius)?,
            DrawCommand::CenteredText(block) => renderer.centered_text(block)?,
            DrawCommand::Image(placement) => renderer.place_image(placement)?,
        }
    }
    Ok(())
}
