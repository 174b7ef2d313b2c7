use crate::{ImageRecord, TypoFinding};
use std::io::{self, Write};
use std::path::Path;

/// Rendering strategy, chosen once from the output file's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStyle {
    PlainText,
    Html,
}

impl ReportStyle {
    /// `.html`/`.htm` (case-insensitive) select HTML; everything else,
    /// including no extension, falls back to plain text.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "html" | "htm" => ReportStyle::Html,
            _ => ReportStyle::PlainText,
        }
    }
}

/// Renders report sections to the output stream, one link at a time.
pub struct ReportWriter<W: Write> {
    style: ReportStyle,
    out: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(style: ReportStyle, out: W) -> Self {
        Self { style, out }
    }

    /// Title/link header opening a per-page section.
    pub fn page_header(&mut self, title: &str, link: &str) -> io::Result<()> {
        match self.style {
            ReportStyle::PlainText => writeln!(self.out, "{} {}", title, link),
            ReportStyle::Html => {
                writeln!(self.out, "<h1>{} {}</h1>", escape(title), escape(link))
            }
        }
    }

    pub fn typo_finding(&mut self, finding: &TypoFinding) -> io::Result<()> {
        let words = quoted_list(&finding.words);
        match self.style {
            ReportStyle::PlainText => writeln!(
                self.out,
                "\t{} ({} total): \"{}\"",
                words,
                finding.count(),
                finding.original_text
            ),
            ReportStyle::Html => writeln!(
                self.out,
                "<p>{} ({} total): \"{}\"</p>",
                escape(&words),
                finding.count(),
                escape(&finding.original_text)
            ),
        }
    }

    pub fn empty_alt(&mut self, image: &ImageRecord) -> io::Result<()> {
        let src = image.src.as_deref().unwrap_or("(no src)");
        match self.style {
            ReportStyle::PlainText => writeln!(
                self.out,
                "\tEmpty or missing alt text!\n\t\tImage source link: {}\n\t\tImage tag: {}",
                src, image.raw_tag
            ),
            ReportStyle::Html => writeln!(
                self.out,
                "<p>Empty or missing alt text!<br/>Image source link: {}<br/>Image tag: {}</p>",
                escape(src),
                escape(&image.raw_tag)
            ),
        }
    }

    pub fn fetch_error(&mut self, link: &str, detail: &str) -> io::Result<()> {
        match self.style {
            ReportStyle::PlainText => writeln!(
                self.out,
                "Error occurred. Page could not be found at {}\n{}",
                link, detail
            ),
            ReportStyle::Html => writeln!(
                self.out,
                "<p>Error occurred. Page could not be found at {}<br/>{}</p>",
                escape(link),
                escape(detail)
            ),
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

fn quoted_list(words: &[String]) -> String {
    words
        .iter()
        .map(|w| format!("\"{}\"", w))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Escape markup so diagnostic tag text renders as literal markup.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
