use serde::{Deserialize, Serialize};

/// Page geometry and typography for a lab report.
///
/// Lengths are millimetres, font sizes are points. Vertical positions in a
/// layout are measured from the top edge of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportStyle {
    pub page_width: f32,
    pub page_height: f32,
    /// Applied uniformly to all four sides.
    pub margin: f32,

    /// Size of the rules and student detail lines.
    pub header_size: f32,
    /// Size of the `name:` line above each file.
    pub heading_size: f32,
    /// Size of the monospaced source lines.
    pub code_size: f32,

    pub header_advance: f32,
    pub heading_advance: f32,
    pub code_advance: f32,
    /// Extra space after the last line of a file.
    pub file_gap: f32,
    /// A new page is started once the cursor passes
    /// `page_height - margin - break_threshold`.
    pub break_threshold: f32,

    pub rule_char: char,
    /// Rule length is `floor(content_width / rule_divisor)` characters.
    pub rule_divisor: f32,
    /// Scales the content width used for rules and wrapping.
    pub width_scale: f32,

    /// Trailer image budget as fractions of the content box.
    pub image_width_fraction: f32,
    pub image_height_fraction: f32,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin: 10.0,
            header_size: 9.6,
            heading_size: 11.2,
            code_size: 8.0,
            header_advance: 8.0,
            heading_advance: 8.0,
            code_advance: 4.8,
            file_gap: 10.0,
            break_threshold: 20.0,
            rule_char: '*',
            rule_divisor: 1.8,
            width_scale: 1.0,
            image_width_fraction: 0.8,
            image_height_fraction: 0.3,
        }
    }
}

impl ReportStyle {
    /// The narrower variant: rules and wrapping use 80% of the content width.
    pub fn compact() -> Self {
        Self {
            width_scale: 0.8,
            ..Self::default()
        }
    }

    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    pub fn content_height(&self) -> f32 {
        self.page_height - 2.0 * self.margin
    }

    /// Width text is wrapped and ruled against.
    pub fn text_width(&self) -> f32 {
        self.content_width() * self.width_scale
    }

    /// Lowest cursor position a line may be drawn at without a page break.
    pub fn break_line(&self) -> f32 {
        self.page_height - self.margin - self.break_threshold
    }

    pub fn rule(&self) -> String {
        let len = (self.text_width() / self.rule_divisor).floor().max(0.0) as usize;
        std::iter::repeat_n(self.rule_char, len).collect()
    }
}
