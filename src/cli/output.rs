use crate::RunSummary;
use colored::*;
use std::path::Path;

pub fn print_fetch_error(link: &str, detail: &str, colored: bool) {
    if colored {
        println!(
            "{} Page could not be found at {}\n  {}",
            "✗".red().bold(),
            link.cyan(),
            detail.dimmed()
        );
    } else {
        println!("✗ Page could not be found at {}\n  {}", link, detail);
    }
}

pub fn print_run_summary(summary: &RunSummary, output: &Path, colored: bool) {
    println!();

    let total = summary.typo_findings + summary.empty_alt_findings;
    let page_word = if summary.pages_checked == 1 {
        "page"
    } else {
        "pages"
    };

    if total == 0 && summary.fetch_errors == 0 {
        if colored {
            println!(
                "{} {} {} checked, no alt text issues found!",
                "✓".green().bold(),
                summary.pages_checked.to_string().green().bold(),
                page_word
            );
        } else {
            println!(
                "✓ {} {} checked, no alt text issues found!",
                summary.pages_checked, page_word
            );
        }
    } else if colored {
        println!(
            "{} {} potential typo {}, {} empty/missing alt {}, {} fetch {} across {} {}",
            "✗".red().bold(),
            summary.typo_findings.to_string().red().bold(),
            plural(summary.typo_findings, "finding", "findings"),
            summary.empty_alt_findings.to_string().yellow().bold(),
            plural(summary.empty_alt_findings, "finding", "findings"),
            summary.fetch_errors.to_string().red(),
            plural(summary.fetch_errors, "error", "errors"),
            summary.pages_checked,
            page_word
        );
    } else {
        println!(
            "✗ {} potential typo {}, {} empty/missing alt {}, {} fetch {} across {} {}",
            summary.typo_findings,
            plural(summary.typo_findings, "finding", "findings"),
            summary.empty_alt_findings,
            plural(summary.empty_alt_findings, "finding", "findings"),
            summary.fetch_errors,
            plural(summary.fetch_errors, "error", "errors"),
            summary.pages_checked,
            page_word
        );
    }

    if colored {
        println!("Report written to {}", output.display().to_string().cyan());
    } else {
        println!("Report written to {}", output.display());
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}
