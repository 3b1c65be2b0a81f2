use simplr_core::models::metadata::ReportMetadata;
use simplr_export::assemble::SourceFile;
use simplr_export::image::{TrailerImage, fit_within};
use simplr_export::layout::{Font, compose};
use simplr_export::styles::ReportStyle;

const TRAILER_PNG: &[u8] = include_bytes!("fixtures/trailer.png");

fn metadata() -> ReportMetadata {
    ReportMetadata {
        student_name: "A".to_string(),
        class_name: "S7".to_string(),
        roll_number: "1".to_string(),
        experiment_label: "exp1".to_string(),
    }
}

fn trailer() -> TrailerImage {
    TrailerImage::from_bytes(TRAILER_PNG.to_vec()).unwrap()
}

fn numbered_lines(count: usize) -> String {
    (0..count)
        .map(|i| format!("line {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn single_file_report() {
    let style = ReportStyle::default();
    let trailer = trailer();
    let files = [SourceFile::loaded("main.c", "int main(){}")];

    let layout = compose(&style, &metadata(), &files, Some(&trailer));
    assert_eq!(layout.page_count(), 1);

    let headings: Vec<_> = layout
        .texts()
        .filter(|(_, t)| t.font == Font::Helvetica && t.size == style.heading_size)
        .map(|(_, t)| t.text.as_str())
        .collect();
    assert_eq!(headings, ["main.c:"]);

    let code: Vec<_> = layout
        .texts()
        .filter(|(_, t)| t.font == Font::Courier)
        .collect();
    assert_eq!(code.len(), 1);
    assert_eq!(code[0].1.text, "int main(){}");
    assert_eq!(code[0].1.size, style.code_size);

    let last = layout.pages[0].items.last().unwrap();
    assert!(matches!(last, simplr_export::layout::LayoutItem::Image(_)));
    let (_, image) = layout.images().next().unwrap();
    assert!(image.y > code[0].1.y);
    assert_eq!(image.x, style.margin);
}

#[test]
fn header_block_lists_student_details() {
    let style = ReportStyle::default();
    let layout = compose(&style, &metadata(), &[], None);

    let header: Vec<_> = layout.texts().map(|(_, t)| t.text.clone()).collect();
    let rule = "*".repeat(105);
    assert_eq!(
        header,
        [
            rule.as_str(),
            "Name: A",
            "Class: S7",
            "Roll Number: 1",
            "Experiment: EXP1",
            rule.as_str(),
        ]
    );

    let ys: Vec<f32> = layout.texts().map(|(_, t)| t.y).collect();
    for pair in ys.windows(2) {
        assert!((pair[1] - pair[0] - style.header_advance).abs() < 1e-4);
    }
    assert!(layout.texts().all(|(_, t)| t.size == style.header_size));
}

#[test]
fn compact_style_narrows_the_rule() {
    assert_eq!(ReportStyle::compact().rule().len(), 84);
    assert_eq!(ReportStyle::default().rule().len(), 105);
}

#[test]
fn one_section_per_loaded_file_in_selection_order() {
    let style = ReportStyle::default();
    let files = [
        SourceFile::loaded("b.c", "int b;"),
        SourceFile::Skipped {
            name: "gone.c".to_string(),
            reason: "Failed to fetch file content".to_string(),
        },
        SourceFile::loaded("a.c", "int a;\nint aa;"),
        SourceFile::loaded("empty.c", ""),
        SourceFile::loaded("c.c", "int c;"),
    ];

    let layout = compose(&style, &metadata(), &files, None);

    let names: Vec<_> = layout.sections.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["b.c", "a.c", "c.c"]);
    assert_eq!(layout.sections[1].line_count, 2);

    let headings: Vec<_> = layout
        .texts()
        .filter(|(_, t)| t.size == style.heading_size)
        .map(|(_, t)| t.text.as_str())
        .collect();
    assert_eq!(headings, ["b.c:", "a.c:", "c.c:"]);
    assert!(!layout.texts().any(|(_, t)| t.text.contains("gone")));
}

#[test]
fn skipped_file_leaves_no_trace() {
    let style = ReportStyle::default();
    let with_skip = compose(
        &style,
        &metadata(),
        &[
            SourceFile::Skipped {
                name: "x.c".to_string(),
                reason: "empty file".to_string(),
            },
            SourceFile::loaded("main.c", "int main(){}"),
        ],
        None,
    );
    let without = compose(
        &style,
        &metadata(),
        &[SourceFile::loaded("main.c", "int main(){}")],
        None,
    );
    assert_eq!(with_skip, without);
}

#[test]
fn long_listing_breaks_across_pages() {
    let style = ReportStyle::default();
    let files = [SourceFile::loaded("long.c", numbered_lines(100))];

    let layout = compose(&style, &metadata(), &files, None);
    assert!(layout.page_count() > 1);

    for (_, text) in layout.texts() {
        assert!(
            text.y <= style.break_line(),
            "{:?} drawn at {} past {}",
            text.text,
            text.y,
            style.break_line()
        );
    }

    let code: Vec<_> = layout
        .texts()
        .filter(|(_, t)| t.font == Font::Courier)
        .collect();
    assert_eq!(code.len(), 100);
    for (i, (_, text)) in code.iter().enumerate() {
        assert_eq!(text.text, format!("line {i}"));
    }

    // Page order and vertical order agree.
    for pair in code.windows(2) {
        let (page_a, a) = pair[0];
        let (page_b, b) = pair[1];
        assert!(page_b > page_a || (page_b == page_a && b.y > a.y));
    }

    let first_on_second_page = code.iter().find(|(page, _)| *page == 1).unwrap();
    assert_eq!(first_on_second_page.1.y, style.margin);
}

#[test]
fn heading_moves_to_a_new_page_when_the_cursor_is_past_the_bottom() {
    let style = ReportStyle::default();
    let files = [
        SourceFile::loaded("first.c", numbered_lines(41)),
        SourceFile::loaded("second.c", "int x;"),
    ];

    let layout = compose(&style, &metadata(), &files, None);
    assert_eq!(layout.sections[0].first_page, 0);
    assert_eq!(layout.sections[1].first_page, 1);

    let (page, heading) = layout
        .texts()
        .find(|(_, t)| t.text == "second.c:")
        .unwrap();
    assert_eq!(page, 1);
    assert_eq!(heading.y, style.margin);
}

#[test]
fn trailer_moves_to_a_new_page_when_it_does_not_fit() {
    let style = ReportStyle::default();
    let trailer = trailer();
    let files = [SourceFile::loaded("main.c", numbered_lines(40))];

    let layout = compose(&style, &metadata(), &files, Some(&trailer));
    assert_eq!(layout.page_count(), 2);

    let images: Vec<_> = layout.images().collect();
    assert_eq!(images.len(), 1);
    let (page, image) = images[0];
    assert_eq!(page, 1);
    assert_eq!(image.y, style.margin);
    assert!(image.y + image.height <= style.page_height - style.margin);
}

#[test]
fn trailer_is_scaled_to_its_budget() {
    let style = ReportStyle::default();
    let trailer = trailer();
    let layout = compose(&style, &metadata(), &[], Some(&trailer));

    let (_, image) = layout.images().next().unwrap();
    // 4x2 pixels: width is the binding budget.
    assert!((image.width - 152.0).abs() < 1e-3);
    assert!((image.height - 76.0).abs() < 1e-3);
}

#[test]
fn fit_within_keeps_aspect_ratio_and_budget() {
    let cases = [
        (400.0, 100.0, 152.0, 83.1),
        (100.0, 400.0, 152.0, 83.1),
        (10.0, 10.0, 152.0, 83.1),
        (3000.0, 2000.0, 121.6, 83.1),
    ];
    for (w, h, max_w, max_h) in cases {
        let (fw, fh) = fit_within(w, h, max_w, max_h);
        assert!(fw <= max_w + 1e-3 && fh <= max_h + 1e-3);
        assert!((fw / fh - w / h).abs() < 1e-3);
        assert!((fw - max_w).abs() < 1e-3 || (fh - max_h).abs() < 1e-3);
    }
}

#[test]
fn image_dimensions_come_from_the_header() {
    let trailer = trailer();
    assert_eq!((trailer.width(), trailer.height()), (4, 2));

    assert!(TrailerImage::from_bytes(b"not an image".to_vec()).is_err());

    let mut zero_width = TRAILER_PNG[..24].to_vec();
    zero_width[16..20].copy_from_slice(&0u32.to_be_bytes());
    assert!(TrailerImage::from_bytes(zero_width).is_err());
}
