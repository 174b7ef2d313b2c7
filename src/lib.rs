pub mod checker;
pub mod cli;
pub mod config;
pub mod dict;
pub mod fetcher;
pub mod pipeline;
pub mod report;
pub mod scanner;

pub use checker::SpellChecker;
pub use config::Config;
pub use report::{ReportStyle, ReportWriter};

/// One `<img>` element extracted from a fetched page.
#[derive(Debug, Clone)]
pub struct ImageRecord {
    pub src: Option<String>,
    pub alt: Option<String>,
    /// Outer HTML of the element, kept for diagnostic display.
    pub raw_tag: String,
}

/// Produced when at least one token in an alt text is unrecognized.
#[derive(Debug, Clone)]
pub struct TypoFinding {
    /// Distinct unmatched tokens, in order of first appearance.
    pub words: Vec<String>,
    /// The alt text as it appeared in the page.
    pub original_text: String,
}

impl TypoFinding {
    pub fn count(&self) -> usize {
        self.words.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub pages_checked: usize,
    pub fetch_errors: usize,
    pub typo_findings: usize,
    pub empty_alt_findings: usize,
}
