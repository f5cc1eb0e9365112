use super::Renderer;
use crate::error::Result;
use crate::geometry::Point;
use crate::layout::{ImagePlacement, TextBlock};

/// A call received by [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Circle { center: Point, radius: f64 },
    Text(TextBlock),
    Image(ImagePlacement),
}

/// Renderer that only remembers what it was asked to draw.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    calls: Vec<RecordedCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[RecordedCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<RecordedCall> {
        self.calls
    }
}

impl Renderer for RecordingRenderer {
    fn stroke_circle(&mut self, center: Point, radius: f64) -> Result<()> {
        self.calls.push(RecordedCall::Circle { center, radius });
        Ok(())
    }

    fn centered_text(&mut self, block: &TextBlock) -> Result<()> {
        self.calls.push(RecordedCall::Text(block.clone()));
        Ok(())
    }

    fn place_image(&mut self, placement: &ImagePlacement) -> Result<()> {
        self.calls.push(RecordedCall::Image(*placement));
        Ok(())
    }
}
