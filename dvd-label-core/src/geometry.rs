//! Basic geometric types for label layout
//!
//! All layout coordinates are millimetres with the origin at the top-left
//! corner of the page and y growing downwards.

use serde::Serialize;

/// Points per millimetre (1 pt = 1/72 inch, 1 inch = 25.4 mm).
pub const PT_PER_MM: f64 = 72.0 / 25.4;

/// Convert millimetres to PDF points.
pub fn mm_to_pt(mm: f64) -> f64 {
    mm * PT_PER_MM
}

/// Convert PDF points to millimetres.
pub fn pt_to_mm(pt: f64) -> f64 {
    pt / PT_PER_MM
}

/// A point in 2D space
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Return this point moved by `(dx, dy)`
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A width/height pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A square of the given side length
    pub const fn square(side: f64) -> Self {
        Self::new(side, side)
    }
}

/// Physical page dimensions in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    /// US Letter, portrait (8.5 x 11 in).
    pub const LETTER: PageSize = PageSize {
        width: 215.9,
        height: 279.4,
    };

    /// Width in PDF points
    pub fn width_pt(&self) -> f64 {
        mm_to_pt(self.width)
    }

    /// Height in PDF points
    pub fn height_pt(&self) -> f64 {
        mm_to_pt(self.height)
    }

    /// Horizontal position in PDF points for a layout x coordinate.
    pub fn x_to_pt(&self, x: f64) -> f64 {
        mm_to_pt(x)
    }

    /// Flip a top-down layout y coordinate into bottom-up PDF points.
    pub fn y_to_pt(&self, y: f64) -> f64 {
        mm_to_pt(self.height - y)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::LETTER
    }
}
