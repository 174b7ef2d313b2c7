use altchk::{checker, cli, dict, fetcher, pipeline, Config, ReportStyle, ReportWriter};
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "altchk")]
#[command(version, about = "Find potential typos in image alt text", long_about = None)]
struct Cli {
    /// Links to check alt text on
    #[arg(value_name = "LINKS")]
    links: Vec<String>,

    /// File to store output in; a .html/.htm extension selects HTML formatting
    #[arg(long, default_value = "output.txt")]
    output: PathBuf,

    /// File of extra known words (one per line) to treat as correctly spelled
    #[arg(long, value_name = "PATH")]
    dict: Option<PathBuf>,

    /// Ignore empty alt text; do not record it in the output file
    #[arg(long = "ignore_empty")]
    ignore_empty: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Language/dictionary to use (e.g., en_US, en_GB)
    #[arg(short, long, default_value = "en_US")]
    language: String,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Dictionary management
    Dict {
        #[command(subcommand)]
        action: DictCommands,
    },
}

#[derive(Parser, Debug)]
enum DictCommands {
    /// List installed dictionaries
    List,
    /// Download a dictionary
    Download {
        /// Language code (e.g., en_US, en_GB)
        language: String,
    },
    /// Show dictionary info
    Info {
        /// Language code
        language: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "altchk", &mut io::stdout());
        return Ok(());
    }

    // Handle subcommands
    if let Some(command) = cli.command {
        return handle_command(command);
    }

    if cli.links.is_empty() {
        anyhow::bail!("No links specified. Use --help for usage information.");
    }

    let config = Config::load(cli.language.clone(), cli.dict.clone())?;

    // Dictionary problems abort the run before any page is fetched
    let checker = checker::SpellChecker::new(&config)?;

    let style = ReportStyle::from_path(&cli.output);
    let file = File::create(&cli.output)
        .with_context(|| format!("Failed to create output file: {}", cli.output.display()))?;
    let mut writer = ReportWriter::new(style, BufWriter::new(file));

    let summary = pipeline::run_report(
        &cli.links,
        &checker,
        &mut writer,
        cli.ignore_empty,
        !cli.no_color,
        fetcher::fetch,
    )?;

    writer.flush().context("Failed to flush report")?;

    cli::output::print_run_summary(&summary, &cli.output, !cli.no_color);

    Ok(())
}

fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Dict { action } => match action {
            DictCommands::List => {
                dict::manager::list_dictionaries()?;
            }
            DictCommands::Download { language } => {
                dict::manager::download_dictionary(&language)?;
            }
            DictCommands::Info { language } => {
                dict::manager::show_info(&language)?;
            }
        },
    }
    Ok(())
}
