//! Greedy word wrap for source listings drawn in a monospaced font.

const MM_PER_PT: f32 = 25.4 / 72.0;
const TAB: &str = "    ";

/// Horizontal advance of a fixed-width font, as a fraction of its size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Monospace {
    pub advance_em: f32,
}

impl Monospace {
    pub const COURIER: Monospace = Monospace { advance_em: 0.6 };

    /// How many glyphs of `size_pt` fit across `width_mm`. Never less than one.
    pub fn columns(&self, width_mm: f32, size_pt: f32) -> usize {
        let advance_mm = self.advance_em * size_pt * MM_PER_PT;
        if advance_mm <= 0.0 {
            return 1;
        }
        ((width_mm / advance_mm).floor() as usize).max(1)
    }
}

/// Break `text` into display lines of at most `columns` characters.
///
/// Every `\n` starts a new paragraph and empty paragraphs become empty lines.
/// Trailing newlines at the end of the text do not add lines. A paragraph that
/// fits is kept byte for byte; one that does not is wrapped on spaces, keeping
/// its leading indentation on the first line. Words wider than the budget are
/// split.
pub fn wrap_text(text: &str, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let text = text.replace("\r\n", "\n").replace('\t', TAB);

    let mut lines = Vec::new();
    for paragraph in text.trim_end_matches('\n').split('\n') {
        wrap_paragraph(paragraph, columns, &mut lines);
    }
    lines
}

fn wrap_paragraph(paragraph: &str, columns: usize, out: &mut Vec<String>) {
    if paragraph.chars().count() <= columns {
        out.push(paragraph.to_string());
        return;
    }

    let body = paragraph.trim_start_matches(' ');
    let mut indent = &paragraph[..paragraph.len() - body.len()];
    if indent.len() >= columns {
        indent = "";
    }

    let mut line = String::from(indent);
    let mut width = indent.len();
    let mut has_word = false;

    for word in body.split(' ').filter(|w| !w.is_empty()) {
        let chars: Vec<char> = word.chars().collect();
        let needed = if has_word { chars.len() + 1 } else { chars.len() };

        if width + needed <= columns {
            if has_word {
                line.push(' ');
            }
            line.extend(&chars);
            width += needed;
            has_word = true;
            continue;
        }

        if has_word {
            out.push(std::mem::take(&mut line));
            width = 0;
        }

        let mut rest = chars.as_slice();
        while width + rest.len() > columns {
            let take = columns - width;
            line.extend(&rest[..take]);
            out.push(std::mem::take(&mut line));
            width = 0;
            rest = &rest[take..];
        }
        line.extend(rest);
        width += rest.len();
        has_word = true;
    }

    if !line.is_empty() || !has_word {
        out.push(line);
    }
}
