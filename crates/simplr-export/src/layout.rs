//! Phase two of report generation: place every line and the trailer image.
//!
//! The plan is pure data. [`crate::pdf::render`] turns it into a document, and
//! tests inspect it directly.

use serde::Serialize;
use simplr_core::models::metadata::ReportMetadata;

use crate::assemble::SourceFile;
use crate::image::{TrailerImage, fit_within};
use crate::styles::ReportStyle;
use crate::wrap::{Monospace, wrap_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Font {
    Helvetica,
    Courier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedText {
    pub x: f32,
    /// Baseline, measured from the top of the page.
    pub y: f32,
    pub font: Font,
    pub size: f32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedImage {
    pub x: f32,
    /// Top edge, measured from the top of the page.
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutItem {
    Text(PlacedText),
    Image(PlacedImage),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LayoutPage {
    pub items: Vec<LayoutItem>,
}

/// One printed file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionSummary {
    pub name: String,
    pub line_count: usize,
    /// Zero-based page holding the file's heading.
    pub first_page: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub pages: Vec<LayoutPage>,
    pub sections: Vec<SectionSummary>,
}

impl ReportLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every text item with the index of the page it sits on.
    pub fn texts(&self) -> impl Iterator<Item = (usize, &PlacedText)> {
        self.items().filter_map(|(page, item)| match item {
            LayoutItem::Text(text) => Some((page, text)),
            LayoutItem::Image(_) => None,
        })
    }

    pub fn images(&self) -> impl Iterator<Item = (usize, &PlacedImage)> {
        self.items().filter_map(|(page, item)| match item {
            LayoutItem::Image(image) => Some((page, image)),
            LayoutItem::Text(_) => None,
        })
    }

    fn items(&self) -> impl Iterator<Item = (usize, &LayoutItem)> {
        self.pages
            .iter()
            .enumerate()
            .flat_map(|(index, page)| page.items.iter().map(move |item| (index, item)))
    }
}

/// The running vertical position. Only ever moves down, except when a new
/// page resets it to the top margin.
struct PageCursor<'a> {
    style: &'a ReportStyle,
    pages: Vec<LayoutPage>,
    y: f32,
}

impl<'a> PageCursor<'a> {
    fn new(style: &'a ReportStyle) -> Self {
        Self {
            style,
            pages: vec![LayoutPage::default()],
            y: style.margin,
        }
    }

    fn page_index(&self) -> usize {
        self.pages.len() - 1
    }

    fn new_page(&mut self) {
        self.pages.push(LayoutPage::default());
        self.y = self.style.margin;
    }

    /// Break before a line that would start below the break line.
    fn break_if_past_bottom(&mut self) {
        if self.y > self.style.break_line() {
            self.new_page();
        }
    }

    fn push(&mut self, item: LayoutItem) {
        if let Some(page) = self.pages.last_mut() {
            page.items.push(item);
        }
    }

    fn text(&mut self, font: Font, size: f32, text: String, advance: f32) {
        let item = LayoutItem::Text(PlacedText {
            x: self.style.margin,
            y: self.y,
            font,
            size,
            text,
        });
        self.push(item);
        self.y += advance;
    }
}

/// Lay out a report: header block, then each loaded file in order, then the
/// trailer image. Skipped files contribute nothing.
pub fn compose(
    style: &ReportStyle,
    metadata: &ReportMetadata,
    files: &[SourceFile],
    trailer: Option<&TrailerImage>,
) -> ReportLayout {
    let mut cursor = PageCursor::new(style);

    let rule = style.rule();
    let header = [
        rule.clone(),
        format!("Name: {}", metadata.student_name),
        format!("Class: {}", metadata.class_name),
        format!("Roll Number: {}", metadata.roll_number),
        format!("Experiment: {}", metadata.experiment_label.to_uppercase()),
        rule,
    ];
    for line in header {
        cursor.text(Font::Helvetica, style.header_size, line, style.header_advance);
    }

    let columns = Monospace::COURIER.columns(style.text_width(), style.code_size);
    let mut sections = Vec::new();

    for file in files {
        let SourceFile::Loaded { name, text } = file else {
            continue;
        };
        if text.is_empty() {
            continue;
        }

        cursor.break_if_past_bottom();
        let first_page = cursor.page_index();
        cursor.text(
            Font::Helvetica,
            style.heading_size,
            format!("{name}:"),
            style.heading_advance,
        );

        let lines = wrap_text(text, columns);
        let line_count = lines.len();
        for line in lines {
            cursor.break_if_past_bottom();
            cursor.text(Font::Courier, style.code_size, line, style.code_advance);
        }
        cursor.y += style.file_gap;

        sections.push(SectionSummary {
            name: name.clone(),
            line_count,
            first_page,
        });
    }

    if let Some(trailer) = trailer {
        let (width, height) = fit_within(
            trailer.width() as f32,
            trailer.height() as f32,
            style.text_width() * style.image_width_fraction,
            style.content_height() * style.image_height_fraction,
        );
        if style.page_height - cursor.y - style.margin < height {
            cursor.new_page();
        }
        let image = LayoutItem::Image(PlacedImage {
            x: style.margin,
            y: cursor.y,
            width,
            height,
        });
        cursor.push(image);
        cursor.y += height;
    }

    ReportLayout {
        page_width: style.page_width,
        page_height: style.page_height,
        pages: cursor.pages,
        sections,
    }
}
