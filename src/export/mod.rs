//! Blog article download: renders one article to a single-page PDF.

pub mod font;
pub mod pdf;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::content;
use pdf::{Align, PdfPage, Rgb};

/// Body text used when no article is registered under the requested title.
pub const PLACEHOLDER: &str = "Article content unavailable.";

const MARGIN_MM: f64 = 15.0;
const TITLE_BASELINE_MM: f64 = 20.0;
const BODY_TOP_MM: f64 = 30.0;
const TITLE_FONT_SIZE: f64 = 18.0;
const BODY_FONT_SIZE: f64 = 12.0;
const TITLE_COLOR: Rgb = Rgb(0x00, 0x41, 0x8d);
const BODY_COLOR: Rgb = Rgb(20, 20, 20);

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A rendered article ready to hand to the browser or write to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleExport {
    pub title: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub used_placeholder: bool,
}

impl ArticleExport {
    /// Write the document into `dir` under its download file name.
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(&self.file_name);
        fs::create_dir_all(dir)
            .and_then(|_| fs::write(&path, &self.bytes))
            .map_err(|source| ExportError::Write {
                path: path.clone(),
                source,
            })?;

        info!(path = %path.display(), bytes = self.bytes.len(), "article exported");
        Ok(path)
    }
}

/// Render the article registered under `title`.
///
/// Unknown titles still produce a document, with [`PLACEHOLDER`] as the body.
pub fn download_pdf(title: &str) -> ArticleExport {
    let (body, used_placeholder) = match content::article_body(title) {
        Some(body) => (body, false),
        None => {
            warn!(title, "no article registered for title");
            (PLACEHOLDER, true)
        }
    };

    let mut page = PdfPage::a4();
    page.set_title(title);
    let max_line_width = page.width_mm() - MARGIN_MM * 2.0;

    page.set_font_size(TITLE_FONT_SIZE);
    page.set_text_color(TITLE_COLOR);
    page.text(title, page.width_mm() / 2.0, TITLE_BASELINE_MM, Align::Center);

    page.set_font_size(BODY_FONT_SIZE);
    page.set_text_color(BODY_COLOR);
    let lines = page.split_text_to_size(body, max_line_width);
    page.lines(&lines, MARGIN_MM, BODY_TOP_MM);

    ArticleExport {
        title: title.to_string(),
        file_name: export_file_name(title),
        bytes: page.finish(),
        used_placeholder,
    }
}

/// Every run of whitespace becomes a single underscore, then `.pdf` is appended.
///
/// Whitespace is the ECMAScript `\s` class: it includes U+FEFF and excludes
/// U+0085, unlike [`char::is_whitespace`].
pub fn export_file_name(title: &str) -> String {
    let mut name = String::with_capacity(title.len() + 4);
    let mut in_whitespace = false;
    for c in title.chars() {
        if is_title_whitespace(c) {
            if !in_whitespace {
                name.push('_');
            }
            in_whitespace = true;
        } else {
            name.push(c);
            in_whitespace = false;
        }
    }
    name.push_str(".pdf");
    name
}

fn is_title_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
