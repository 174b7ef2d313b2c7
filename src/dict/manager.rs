use anyhow::{Context, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;

// Pinned to a specific commit so dictionary builds are reproducible
const WORDLIST_BASE_URL: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/6e4bc58ad764c3e6df8b5be4048671962c9d6a23";
const WORDLIST_VERSION: &str = "2023.12";

pub fn list_dictionaries() -> Result<()> {
    let data_dir = crate::config::Config::data_dir().context("Failed to get data directory")?;

    if !data_dir.exists() {
        println!("{}", "No dictionaries installed.".yellow());
        println!(
            "Run {} to download a dictionary.",
            "altchk dict download en_US".cyan()
        );
        return Ok(());
    }

    println!("{}", "Installed dictionaries:".bold());
    println!();

    let entries = fs::read_dir(&data_dir)?;
    let mut found_any = false;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        if path.extension().and_then(|s| s.to_str()) == Some("dict") {
            found_any = true;
            let language = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("unknown");

            let metadata = fs::metadata(&path)?;
            let size_kb = metadata.len() / 1024;

            println!(
                "  {} {} ({})",
                "✓".green(),
                language.cyan().bold(),
                format!("{}KB", size_kb).dimmed()
            );
        }
    }

    if !found_any {
        println!("{}", "No dictionaries found.".yellow());
    }

    println!();
    println!(
        "Data directory: {}",
        data_dir.display().to_string().dimmed()
    );

    Ok(())
}

pub fn download_dictionary(language: &str) -> Result<()> {
    println!(
        "{} dictionary for {} (version: {})...",
        "Downloading".cyan().bold(),
        language.yellow(),
        WORDLIST_VERSION.dimmed()
    );

    let data_dir = crate::config::Config::data_dir().context("Failed to get data directory")?;

    fs::create_dir_all(&data_dir).context("Failed to create data directory")?;

    let wordlist_url = match language {
        "en_US" | "en_GB" => {
            format!("{}/words_alpha.txt", WORDLIST_BASE_URL)
        }
        other => {
            anyhow::bail!(
                "Language '{}' is not supported. Only 'en_US' and 'en_GB' are currently available.",
                other
            );
        }
    };

    println!("Source: {}", wordlist_url.dimmed());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message("Downloading...");

    let response =
        reqwest::blocking::get(&wordlist_url).context("Failed to download dictionary")?;

    if !response.status().is_success() {
        anyhow::bail!("Failed to download dictionary: HTTP {}", response.status());
    }

    let content = response.text()?;
    pb.finish_with_message("Download complete");

    println!("{}", "Building dictionary...".cyan());
    let words: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty() && line.len() > 1)
        .collect();

    println!("Found {} words", words.len().to_string().yellow());

    let dict_path = data_dir.join(format!("{}.dict", language));
    crate::checker::dictionary::Dictionary::build_from_words(&words, &dict_path)?;

    println!(
        "{} Dictionary installed: {}",
        "✓".green().bold(),
        dict_path.display().to_string().cyan()
    );

    Ok(())
}

pub fn show_info(language: &str) -> Result<()> {
    let data_dir = crate::config::Config::data_dir().context("Failed to get data directory")?;

    let dict_path = data_dir.join(format!("{}.dict", language));

    if !dict_path.exists() {
        println!(
            "{} Dictionary for {} not found.",
            "✗".red().bold(),
            language.yellow()
        );
        println!(
            "Run {} to download it.",
            format!("altchk dict download {}", language).cyan()
        );
        return Ok(());
    }

    let metadata = fs::metadata(&dict_path)?;

    println!("{}", format!("Dictionary: {}", language).bold());
    println!("  Path: {}", dict_path.display());
    println!("  Size: {} KB", metadata.len() / 1024);
    println!("  Version: {}", WORDLIST_VERSION);
    println!("  Format: FST (Finite State Transducer)");

    Ok(())
}
