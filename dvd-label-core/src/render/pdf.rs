use super::Renderer;
use crate::error::Result;
use crate::geometry::{mm_to_pt, pt_to_mm, PageSize, Point};
use crate::layout::{ImagePlacement, TextBlock};
use crate::logo::Logo;
use oxidize_pdf::{measure_text, Color, Document, Font, Image, Page};
use std::path::Path;

const LOGO_RESOURCE: &str = "Logo";
const STROKE_WIDTH_MM: f64 = 0.2;
const FONT: Font = Font::HelveticaBold;

/// Renders a single label page through oxidize-pdf.
///
/// Layout coordinates (millimetres, top-left origin) are converted to PDF
/// points with the origin at the bottom-left of the page.
pub struct PdfRenderer {
    page_size: PageSize,
    page: Page,
    document: Document,
}

impl PdfRenderer {
    /// Starts a page of `page_size` with zero margins and `logo` available
    /// for placement.
    pub fn new(page_size: PageSize, logo: &Logo) -> Result<Self> {
        let mut page = Page::new(page_size.width_pt(), page_size.height_pt());
        page.set_margins(0.0, 0.0, 0.0, 0.0);
        page.add_image(LOGO_RESOURCE, Image::from_jpeg_data(logo.jpeg_data().to_vec())?);

        let mut document = Document::new();
        document.set_creator(concat!("dvd-label ", env!("CARGO_PKG_VERSION")));

        Ok(Self {
            page_size,
            page,
            document,
        })
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.document.set_title(title);
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.document.set_subject(subject);
    }

    /// Writes the finished document to `path`, replacing any existing file.
    pub fn save(self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let Self {
            page, mut document, ..
        } = self;
        document.add_page(page);
        document.save(path)?;

        tracing::info!(path = %path.display(), "label written");
        Ok(())
    }
}

/// Baseline of a line of text inside a box, measured from the box top.
///
/// Vertically centres the line: half the box height plus 30% of the font
/// size (both in millimetres).
pub fn baseline_offset(line_height: f64, font_size_pt: f64) -> f64 {
    line_height / 2.0 + 0.3 * pt_to_mm(font_size_pt)
}

/// Characters of `text` the standard PDF fonts cannot show.
///
/// The built-in fonts use WinAnsiEncoding: Latin-1 plus a handful of
/// typographic symbols from the 0x80-0x9F range.
pub fn unencodable_chars(text: &str) -> Vec<char> {
    const WIN_ANSI_EXTRAS: &str = "€‚ƒ„…†‡ˆ‰Š‹ŒŽ‘’“”•–—˜™š›œžŸ";
    text.chars()
        .filter(|&c| {
            let code = c as u32;
            let latin1 = (0x20..=0x7E).contains(&code) || (0xA0..=0xFF).contains(&code);
            !latin1 && !WIN_ANSI_EXTRAS.contains(c)
        })
        .collect()
}

impl Renderer for PdfRenderer {
    fn stroke_circle(&mut self, center: Point, radius: f64) -> Result<()> {
        let cx = self.page_size.x_to_pt(center.x);
        let cy = self.page_size.y_to_pt(center.y);

        self.page
            .graphics()
            .set_stroke_color(Color::black())
            .set_line_width(mm_to_pt(STROKE_WIDTH_MM))
            .circle(cx, cy, mm_to_pt(radius))
            .stroke();
        Ok(())
    }

    fn centered_text(&mut self, block: &TextBlock) -> Result<()> {
        let lost = unencodable_chars(&block.text);
        if !lost.is_empty() {
            tracing::warn!(
                text = %block.text,
                ?lost,
                "characters outside WinAnsiEncoding will not render"
            );
        }

        let size = block.style.font_size();
        let text_width = measure_text(&block.text, FONT, size);
        let x = self.page_size.x_to_pt(block.x) + (mm_to_pt(block.width) - text_width) / 2.0;
        let y = self
            .page_size
            .y_to_pt(block.y + baseline_offset(block.line_height, size));

        self.page
            .text()
            .set_font(FONT, size)
            .at(x, y)
            .write(&block.text)?;
        Ok(())
    }

    fn place_image(&mut self, placement: &ImagePlacement) -> Result<()> {
        let x = self.page_size.x_to_pt(placement.origin.x);
        // PDF images are anchored at their lower-left corner.
        let y = self
            .page_size
            .y_to_pt(placement.origin.y + placement.size.height);

        self.page.graphics().draw_image(
            LOGO_RESOURCE,
            x,
            y,
            mm_to_pt(placement.size.width),
            mm_to_pt(placement.size.height),
        );
        Ok(())
    }
}
