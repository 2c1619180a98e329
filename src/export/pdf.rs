//! Single-page PDF writer using the built-in Helvetica font.
//!
//! Output is a pure function of the drawing calls: no timestamps, no random
//! document IDs, fixed number formatting.

use super::font;

pub const MM_TO_PT: f64 = 72.0 / 25.4;
pub const A4_WIDTH_MM: f64 = 210.0;
pub const A4_HEIGHT_MM: f64 = 297.0;
pub const LINE_HEIGHT_FACTOR: f64 = 1.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    fn operator(self) -> String {
        format!(
            "{:.3} {:.3} {:.3} rg",
            f64::from(self.0) / 255.0,
            f64::from(self.1) / 255.0,
            f64::from(self.2) / 255.0
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone)]
pub struct PdfPage {
    content: Vec<u8>,
    font_size: f64,
    color: Rgb,
    title: Option<String>,
}

impl Default for PdfPage {
    fn default() -> Self {
        Self::a4()
    }
}

impl PdfPage {
    pub fn a4() -> Self {
        Self {
            content: Vec::new(),
            font_size: 16.0,
            color: Rgb::BLACK,
            title: None,
        }
    }

    pub fn width_mm(&self) -> f64 {
        A4_WIDTH_MM
    }

    pub fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
    }

    pub fn set_text_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Document title recorded in the info dictionary.
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    pub fn text_width_mm(&self, text: &str) -> f64 {
        font::text_width_pt(text, self.font_size) / MM_TO_PT
    }

    fn line_height_mm(&self) -> f64 {
        self.font_size * LINE_HEIGHT_FACTOR / MM_TO_PT
    }

    /// Draw one line with its baseline at `y_mm` from the top edge.
    pub fn text(&mut self, text: &str, x_mm: f64, y_mm: f64, align: Align) {
        if text.is_empty() {
            return;
        }

        let x_mm = match align {
            Align::Left => x_mm,
            Align::Center => x_mm - self.text_width_mm(text) / 2.0,
        };
        let x_pt = x_mm * MM_TO_PT;
        let y_pt = (A4_HEIGHT_MM - y_mm) * MM_TO_PT;

        let header = format!(
            "BT\n/F1 {:.2} Tf\n{}\n{:.2} {:.2} Td\n(",
            self.font_size,
            self.color.operator(),
            x_pt,
            y_pt
        );
        self.content.extend_from_slice(header.as_bytes());
        escape_into(&mut self.content, &font::encode(text));
        self.content.extend_from_slice(b") Tj\nET\n");
    }

    /// Draw consecutive lines, each one line-height below the previous.
    pub fn lines(&mut self, lines: &[String], x_mm: f64, y_mm: f64) {
        let step = self.line_height_mm();
        for (index, line) in lines.iter().enumerate() {
            self.text(line, x_mm, y_mm + step * index as f64, Align::Left);
        }
    }

    /// Break `text` into lines no wider than `max_width_mm` at the current font size.
    ///
    /// Newlines always start a new line; words wrap greedily on spaces, and a
    /// single word wider than the limit is split between characters.
    pub fn split_text_to_size(&self, text: &str, max_width_mm: f64) -> Vec<String> {
        text.split('\n')
            .map(|paragraph| paragraph.strip_suffix('\r').unwrap_or(paragraph))
            .flat_map(|paragraph| self.wrap_paragraph(paragraph, max_width_mm))
            .collect()
    }

    fn wrap_paragraph(&self, paragraph: &str, max_width_mm: f64) -> Vec<String> {
        let space = self.text_width_mm(" ");
        let mut lines = Vec::new();
        let mut line = String::new();

        for (index, word) in paragraph.split(' ').enumerate() {
            if index == 0 {
                line.push_str(word);
            } else if self.text_width_mm(&line) + space + self.text_width_mm(word) <= max_width_mm
            {
                line.push(' ');
                line.push_str(word);
            } else {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
            }

            while self.text_width_mm(&line) > max_width_mm && line.chars().count() > 1 {
                let cut = self.fitting_prefix_len(&line, max_width_mm);
                let rest = line.split_off(cut);
                lines.push(std::mem::replace(&mut line, rest));
            }
        }

        lines.push(line);
        lines
    }

    /// Byte length of the longest prefix that fits, never less than one character.
    fn fitting_prefix_len(&self, line: &str, max_width_mm: f64) -> usize {
        let mut width = 0.0;
        for (offset, c) in line.char_indices() {
            let mut buf = [0u8; 4];
            width += self.text_width_mm(c.encode_utf8(&mut buf));
            if width > max_width_mm {
                return if offset == 0 { c.len_utf8() } else { offset };
            }
        }
        line.len()
    }

    pub fn finish(self) -> Vec<u8> {
        let mut stream = format!("<< /Length {} >>\nstream\n", self.content.len()).into_bytes();
        stream.extend_from_slice(&self.content);
        stream.extend_from_slice(b"\nendstream");

        let mut info = b"<< /Producer (SkillKwiz)".to_vec();
        if let Some(title) = &self.title {
            info.extend_from_slice(b" /Title (");
            escape_into(&mut info, &font::encode(title));
            info.extend_from_slice(b")");
        }
        info.extend_from_slice(b" >>");

        let objects: Vec<Vec<u8>> = vec![
            b"<< /Type /Catalog /Pages 2 0 R >>".to_vec(),
            b"<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_vec(),
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>",
                A4_WIDTH_MM * MM_TO_PT,
                A4_HEIGHT_MM * MM_TO_PT
            )
            .into_bytes(),
            stream,
            b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_vec(),
            info,
        ];

        let mut out = b"%PDF-1.3\n%\xBA\xDF\xAC\xE0\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (index, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n", index + 1).as_bytes());
            out.extend_from_slice(body);
            out.extend_from_slice(b"\nendobj\n");
        }

        let xref_offset = out.len();
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in offsets {
            xref.push_str(&format!("{:010} 00000 n \n", offset));
        }
        xref.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R /Info 6 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        ));
        out.extend_from_slice(xref.as_bytes());
        out
    }
}

fn escape_into(buf: &mut Vec<u8>, encoded: &[u8]) {
    for &byte in encoded {
        if matches!(byte, b'(' | b')' | b'\\') {
            buf.push(b'\\');
        }
        buf.push(byte);
    }
}
