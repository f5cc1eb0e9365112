//! Placement of the label artwork on the page.
//!
//! Two identical label instances are laid out on a US Letter page, one
//! above the other. Each instance is positioned from a fixed anchor; every
//! other coordinate is a constant offset from the instance centre, which is
//! itself `anchor + (3, 7)`.
//!
//! The layout only describes what to draw as a list of [`DrawCommand`]s.
//! Drawing is left to a [`Renderer`](crate::render::Renderer).
//!
//! ```text
//!            Plutus                <- centre.y - 40, title style
//!        .-----------.
//!      /    .---.     \   [logo]   <- (centre.x + 27, centre.y - 10), 25 x 25
//!     |    (  +  )     |
//!      \    '---'     /
//!        '-----------'
//!         Jan 2, 2024              <- centre.y + 30, body style
//!            (206)                 <- centre.y + 35, body style
//! ```

use crate::config::LabelConfig;
use crate::content::LabelContent;
use crate::geometry::{PageSize, Point, Size};
use chrono::NaiveDate;
use serde::Serialize;

/// Anchors of the two label instances, top then bottom.
pub const ANCHORS: [Point; 2] = [Point::new(105.0, 70.0), Point::new(105.0, 196.0)];

/// Offset from an anchor to the centre of the disc.
pub const CENTER_OFFSET: (f64, f64) = (3.0, 7.0);

/// Radius of the inner (hub) guide circle.
pub const INNER_RADIUS: f64 = 20.0;

/// Radius of the outer (disc edge) guide circle.
pub const OUTER_RADIUS: f64 = 60.0;

/// Vertical offsets of the text boxes from the disc centre.
pub const TITLE_OFFSET: f64 = -40.0;
pub const DATE_OFFSET: f64 = 30.0;
pub const VERSION_OFFSET: f64 = 35.0;

/// Height of every text box.
pub const LINE_HEIGHT: f64 = 10.0;

/// Logo placement relative to the disc centre.
pub const LOGO_OFFSET: (f64, f64) = (37.0 - 10.0, -10.0);
pub const LOGO_SIZE: Size = Size::square(25.0);

/// Typographic role of a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    Title,
    Body,
}

impl TextStyle {
    /// Font size in points
    pub fn font_size(self) -> f64 {
        match self {
            TextStyle::Title => 16.0,
            TextStyle::Body => 12.0,
        }
    }
}

/// A line of text centred horizontally inside a box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBlock {
    pub text: String,
    /// Left edge of the box
    pub x: f64,
    /// Top edge of the box
    pub y: f64,
    pub width: f64,
    pub line_height: f64,
    pub style: TextStyle,
}

/// Where the logo goes: top-left corner plus explicit size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImagePlacement {
    pub origin: Point,
    pub size: Size,
}

/// One drawing primitive, in layout millimetres.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Stroked, unfilled circle
    Circle { center: Point, radius: f64 },
    CenteredText(TextBlock),
    Image(ImagePlacement),
}

impl DrawCommand {
    pub fn is_circle(&self) -> bool {
        matches!(self, DrawCommand::Circle { .. })
    }

    pub fn text(&self) -> Option<&TextBlock> {
        match self {
            DrawCommand::CenteredText(block) => Some(block),
            _ => None,
        }
    }

    pub fn image(&self) -> Option<&ImagePlacement> {
        match self {
            DrawCommand::Image(placement) => Some(placement),
            _ => None,
        }
    }
}

/// A single printed copy of the label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelInstance {
    pub anchor: Point,
}

impl LabelInstance {
    pub fn new(anchor: Point) -> Self {
        Self { anchor }
    }

    /// Centre of the disc.
    pub fn center(&self) -> Point {
        self.anchor.offset(CENTER_OFFSET.0, CENTER_OFFSET.1)
    }

    /// Commands for this instance: outline first (if requested), then the
    /// title, date and version lines, then the logo.
    pub fn commands(
        &self,
        content: &LabelContent,
        include_outline: bool,
        page: &PageSize,
    ) -> Vec<DrawCommand> {
        let center = self.center();
        let mut commands = Vec::with_capacity(6);

        if include_outline {
            for radius in [INNER_RADIUS, OUTER_RADIUS] {
                commands.push(DrawCommand::Circle { center, radius });
            }
        }

        let line = |text: &str, offset: f64, style: TextStyle| {
            DrawCommand::CenteredText(TextBlock {
                text: text.to_string(),
                x: 0.0,
                y: center.y + offset,
                width: page.width,
                line_height: LINE_HEIGHT,
                style,
            })
        };
        commands.push(line(&content.product_name, TITLE_OFFSET, TextStyle::Title));
        commands.push(line(&content.date, DATE_OFFSET, TextStyle::Body));
        commands.push(line(&content.version_text, VERSION_OFFSET, TextStyle::Body));

        commands.push(DrawCommand::Image(ImagePlacement {
            origin: center.offset(LOGO_OFFSET.0, LOGO_OFFSET.1),
            size: LOGO_SIZE,
        }));

        commands
    }
}

/// The fixed two-up arrangement on one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub page: PageSize,
    pub instances: [LabelInstance; 2],
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            page: PageSize::LETTER,
            instances: ANCHORS.map(LabelInstance::new),
        }
    }
}

impl PageLayout {
    /// Commands for every instance, top first.
    pub fn commands(&self, content: &LabelContent, include_outline: bool) -> Vec<DrawCommand> {
        self.instances
            .iter()
            .flat_map(|instance| instance.commands(content, include_outline, &self.page))
            .collect()
    }
}

/// Lays out a full page for `config`, dated `now`.
///
/// Pure: the same inputs always give the same commands.
pub fn render_page(config: &LabelConfig, now: &NaiveDate) -> Vec<DrawCommand> {
    let content = LabelContent::new(config, now);
    PageLayout::default().commands(&content, config.include_outline())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn content() -> LabelContent {
        LabelContent {
            product_name: "Plutus".to_string(),
            date: "Jan 2, 2024".to_string(),
            version_text: "(206)".to_string(),
        }
    }

    #[test]
    fn test_instance_center() {
        let instance = LabelInstance::new(Point::new(105.0, 70.0));
        assert_eq!(instance.center(), Point::new(108.0, 77.0));
    }

    #[test]
    fn test_instance_commands_without_outline() {
        let instance = LabelInstance::new(Point::new(105.0, 70.0));
        let commands = instance.commands(&content(), false, &PageSize::LETTER);

        assert_eq!(
            commands,
            vec![
                DrawCommand::CenteredText(TextBlock {
                    text: "Plutus".to_string(),
                    x: 0.0,
                    y: 37.0,
                    width: 215.9,
                    line_height: 10.0,
                    style: TextStyle::Title,
                }),
                DrawCommand::CenteredText(TextBlock {
                    text: "Jan 2, 2024".to_string(),
                    x: 0.0,
                    y: 107.0,
                    width: 215.9,
                    line_height: 10.0,
                    style: TextStyle::Body,
                }),
                DrawCommand::CenteredText(TextBlock {
                    text: "(206)".to_string(),
                    x: 0.0,
                    y: 112.0,
                    width: 215.9,
                    line_height: 10.0,
                    style: TextStyle::Body,
                }),
                DrawCommand::Image(ImagePlacement {
                    origin: Point::new(135.0, 67.0),
                    size: Size::new(25.0, 25.0),
                }),
            ]
        );
    }

    #[test]
    fn test_instance_outline_comes_first() {
        let instance = LabelInstance::new(Point::new(105.0, 196.0));
        let commands = instance.commands(&content(), true, &PageSize::LETTER);

        assert_eq!(commands.len(), 6);
        let center = Point::new(108.0, 203.0);
        assert_eq!(
            commands[0],
            DrawCommand::Circle {
                center,
                radius: 20.0
            }
        );
        assert_eq!(
            commands[1],
            DrawCommand::Circle {
                center,
                radius: 60.0
            }
        );
        assert!(commands[2..].iter().all(|c| !c.is_circle()));
    }

    #[test]
    fn test_default_page_layout() {
        let layout = PageLayout::default();
        assert_eq!(layout.page, PageSize::LETTER);
        assert_eq!(layout.instances[0].anchor, Point::new(105.0, 70.0));
        assert_eq!(layout.instances[1].anchor, Point::new(105.0, 196.0));
    }

    #[test]
    fn test_render_page_emits_top_instance_first() {
        let config = LabelConfig::new("206", false).unwrap();
        let now = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let commands = render_page(&config, &now);

        assert_eq!(commands.len(), 8);
        let logos: Vec<_> = commands.iter().filter_map(DrawCommand::image).collect();
        assert_eq!(logos[0].origin, Point::new(135.0, 67.0));
        assert_eq!(logos[1].origin, Point::new(135.0, 193.0));
    }

    #[test]
    fn test_text_style_sizes() {
        assert_eq!(TextStyle::Title.font_size(), 16.0);
        assert_eq!(TextStyle::Body.font_size(), 12.0);
    }

    #[test]
    fn test_draw_command_serializes_with_kind_tag() {
        let command = DrawCommand::Circle {
            center: Point::new(108.0, 77.0),
            radius: 20.0,
        };
        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(json["kind"], "circle");
        assert_eq!(json["radius"], 20.0);
        assert_eq!(json["center"]["x"], 108.0);
    }
}
