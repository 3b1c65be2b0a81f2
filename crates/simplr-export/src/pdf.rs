use printpdf::{
    BuiltinFont, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, Point, Pt, RawImage, TextItem,
    XObjectId, XObjectTransform,
};
use tracing::{debug, warn};

use crate::error::ExportError;
use crate::image::TrailerImage;
use crate::layout::{Font, LayoutItem, PlacedImage, PlacedText, ReportLayout};

const PT_PER_MM: f32 = 72.0 / 25.4;

/// Embedded images are placed at 72 dpi so one pixel is one point.
const IMAGE_DPI: f32 = 72.0;

fn pt(mm: f32) -> Pt {
    Pt(mm * PT_PER_MM)
}

fn builtin(font: Font) -> BuiltinFont {
    match font {
        Font::Helvetica => BuiltinFont::Helvetica,
        Font::Courier => BuiltinFont::Courier,
    }
}

/// Draw a layout plan into a PDF. The trailer image is embedded once and
/// referenced by every image item.
pub fn render(
    layout: &ReportLayout,
    title: &str,
    trailer: Option<&TrailerImage>,
) -> Result<Vec<u8>, ExportError> {
    let mut doc = PdfDocument::new(title);
    let mut warnings = Vec::new();

    let image = match trailer {
        Some(trailer) => {
            let raw = RawImage::decode_from_bytes(trailer.bytes(), &mut warnings)
                .map_err(ExportError::Pdf)?;
            Some((doc.add_image(&raw), trailer))
        }
        None => None,
    };

    let page_height = layout.page_height;
    let pages = layout
        .pages
        .iter()
        .map(|page| {
            let mut ops = Vec::new();
            for item in &page.items {
                match item {
                    LayoutItem::Text(text) => text_ops(text, page_height, &mut ops),
                    LayoutItem::Image(placed) => match &image {
                        Some((id, trailer)) => image_op(id, trailer, placed, page_height, &mut ops),
                        None => warn!("layout places an image but no trailer was supplied"),
                    },
                }
            }
            PdfPage::new(Mm(layout.page_width), Mm(layout.page_height), ops)
        })
        .collect();

    let bytes = doc
        .with_pages(pages)
        .save(&PdfSaveOptions::default(), &mut warnings);

    debug!(
        pages = layout.page_count(),
        bytes = bytes.len(),
        warnings = warnings.len(),
        "pdf rendered"
    );
    Ok(bytes)
}

fn text_ops(text: &PlacedText, page_height: f32, ops: &mut Vec<Op>) {
    ops.extend([
        Op::StartTextSection,
        Op::SetTextCursor {
            pos: Point {
                x: pt(text.x),
                y: pt(page_height - text.y),
            },
        },
        Op::SetFontSizeBuiltinFont {
            size: Pt(text.size),
            font: builtin(text.font),
        },
        Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(text.text.clone())],
            font: builtin(text.font),
        },
        Op::EndTextSection,
    ]);
}

fn image_op(
    id: &XObjectId,
    trailer: &TrailerImage,
    placed: &PlacedImage,
    page_height: f32,
    ops: &mut Vec<Op>,
) {
    let scale_x = pt(placed.width).0 / trailer.width() as f32;
    let scale_y = pt(placed.height).0 / trailer.height() as f32;

    ops.push(Op::UseXobject {
        id: id.clone(),
        transform: XObjectTransform {
            translate_x: Some(pt(placed.x)),
            translate_y: Some(pt(page_height - placed.y - placed.height)),
            scale_x: Some(scale_x),
            scale_y: Some(scale_y),
            dpi: Some(IMAGE_DPI),
            ..Default::default()
        },
    });
}
