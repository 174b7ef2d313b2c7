use crate::fetcher::FetchError;
use crate::report::ReportWriter;
use crate::{cli, scanner, RunSummary, SpellChecker};
use anyhow::{Context, Result};
use std::io::Write;

/// Sequence fetch, scan, detect, and format over the links in input order,
/// flushing after each link so a partial report survives interruption.
pub fn run_report<W, F>(
    links: &[String],
    checker: &SpellChecker,
    writer: &mut ReportWriter<W>,
    ignore_empty: bool,
    colored: bool,
    mut fetch: F,
) -> Result<RunSummary>
where
    W: Write,
    F: FnMut(&str) -> Result<String, FetchError>,
{
    let mut summary = RunSummary::default();

    for link in links {
        let content = match fetch(link) {
            Ok(content) => content,
            Err(err) => {
                let detail = err.to_string();
                cli::output::print_fetch_error(link, &detail, colored);
                writer
                    .fetch_error(link, &detail)
                    .context("Failed to write report")?;
                writer.flush().context("Failed to flush report")?;
                summary.fetch_errors += 1;
                continue;
            }
        };

        let page = scanner::scan(&content);
        // Pages without a <title> fall back to the URL itself
        let title = page.title.as_deref().unwrap_or(link);
        writer
            .page_header(title, link)
            .context("Failed to write report")?;
        summary.pages_checked += 1;

        for image in &page.images {
            match image.alt.as_deref() {
                Some(alt) if !alt.is_empty() => {
                    if let Some(finding) = checker.check_text(alt) {
                        writer
                            .typo_finding(&finding)
                            .context("Failed to write report")?;
                        summary.typo_findings += 1;
                    }
                }
                _ => {
                    if !ignore_empty {
                        writer
                            .empty_alt(image)
                            .context("Failed to write report")?;
                        summary.empty_alt_findings += 1;
                    }
                }
            }
        }

        writer.flush().context("Failed to flush report")?;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::dictionary::Dictionary;
    use crate::report::ReportStyle;

    const GOOD_PAGE: &str = r#"<html>
        <head><title>Gallery</title></head>
        <body>
            <img src="/ok.png" alt="a red arrow">
            <img src="/typo.png" alt="a redd arow pxqz">
            <img src="/empty.png" alt="">
            <img src="/missing.png">
        </body>
    </html>"#;

    fn checker() -> SpellChecker {
        SpellChecker::with_dictionary(
            Dictionary::from_words(["a", "red", "arrow", "gallery"]).unwrap(),
        )
    }

    fn fake_fetch(url: &str) -> Result<String, FetchError> {
        if url.contains("down") {
            Err(FetchError::Status {
                url: url.to_string(),
                status: reqwest::StatusCode::NOT_FOUND,
            })
        } else {
            Ok(GOOD_PAGE.to_string())
        }
    }

    fn run(links: &[&str], ignore_empty: bool) -> (String, RunSummary) {
        let links: Vec<String> = links.iter().map(|l| l.to_string()).collect();
        let mut buf = Vec::new();
        let mut writer = ReportWriter::new(ReportStyle::PlainText, &mut buf);
        let summary = run_report(
            &links,
            &checker(),
            &mut writer,
            ignore_empty,
            false,
            fake_fetch,
        )
        .unwrap();
        (String::from_utf8(buf).unwrap(), summary)
    }

    #[test]
    fn test_sections_in_input_order() {
        let (out, summary) = run(&["http://one.example", "http://two.example"], false);
        let first = out.find("Gallery http://one.example").unwrap();
        let second = out.find("Gallery http://two.example").unwrap();
        assert!(first < second);
        assert_eq!(summary.pages_checked, 2);
    }

    #[test]
    fn test_typo_and_empty_findings() {
        let (out, summary) = run(&["http://one.example"], false);
        // "redd" and "arow" are within one edit of dictionary words;
        // "pxqz" is not
        assert!(out.contains("\t\"pxqz\" (1 total): \"a redd arow pxqz\""));
        // Both the empty-alt and the missing-alt image are reported
        assert!(out.contains("Empty or missing alt text!"));
        assert!(out.contains("Image source link: /empty.png"));
        assert!(out.contains("Image source link: /missing.png"));
        assert_eq!(summary.typo_findings, 1);
        assert_eq!(summary.empty_alt_findings, 2);
    }

    #[test]
    fn test_ignore_empty_suppresses_findings() {
        let (out, summary) = run(&["http://one.example"], true);
        assert!(!out.contains("Empty or missing alt text!"));
        assert_eq!(summary.empty_alt_findings, 0);
        // Typo findings are unaffected
        assert_eq!(summary.typo_findings, 1);
    }

    #[test]
    fn test_fetch_failure_is_non_fatal() {
        let (out, summary) = run(&["http://down.example", "http://up.example"], false);
        assert!(out.contains("Error occurred. Page could not be found at http://down.example"));
        assert!(out.contains("Gallery http://up.example"));
        assert_eq!(summary.fetch_errors, 1);
        assert_eq!(summary.pages_checked, 1);
    }
}
