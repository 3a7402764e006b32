//! Precis CLI - extractive summaries of webpages and text
//!
//! The summarization logic is contained in lib.rs, and this file is responsible
//! for parsing arguments, getting the text and printing results.

use anyhow::Context;
use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};
use colored::Colorize;
use dialoguer::Input;
use precis::{scraper, Config, FrequencyMap, SentenceOrder, Summary};
use std::io::Read;
use std::path::PathBuf;
use tracing::Level;

/// Number of top words logged at debug level
const TOP_WORDS: usize = 10;

#[derive(Parser)]
#[command(name = "precis")]
#[command(author, version, about = "Extractive summaries of webpages and text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    options: SummaryOptions,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise a webpage by URL
    Url {
        /// URL to summarise
        url: String,
        /// Show raw extracted text instead of summary
        #[arg(long)]
        raw: bool,
    },
    /// Summarise a text file, or stdin when no file is given
    Text {
        /// File to read ("-" for stdin)
        file: Option<PathBuf>,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Settings that override precis.toml
#[derive(Args)]
struct SummaryOptions {
    /// Number of sentences in the summary
    #[arg(short = 'n', long, global = true)]
    sentences: Option<usize>,
    /// Ignore words with normalized frequency at or below this
    #[arg(long, global = true)]
    min_cut: Option<f64>,
    /// Ignore words with normalized frequency at or above this
    #[arg(long, global = true)]
    max_cut: Option<f64>,
    /// Sentence order: "document" or "score"
    #[arg(long, global = true)]
    order: Option<SentenceOrder>,
    /// Stopword language (en, de, fr, ...)
    #[arg(long, global = true)]
    language: Option<String>,
    /// Print the summary as JSON
    #[arg(long, global = true)]
    json: bool,
}

impl SummaryOptions {
    fn apply(&self, config: &mut Config) {
        if let Some(n) = self.sentences {
            config.output.sentences = n;
        }
        if let Some(min_cut) = self.min_cut {
            config.summarizer.min_cut = min_cut;
        }
        if let Some(max_cut) = self.max_cut {
            config.summarizer.max_cut = max_cut;
        }
        if let Some(order) = self.order {
            config.summarizer.order = order;
        }
        if let Some(language) = &self.language {
            config.summarizer.language = language.clone();
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let json = cli.options.json;

    match cli.command {
        Some(Commands::Url { url, raw }) => {
            let config = load_config(&cli.options)?;
            summarise_url(&url, raw, &config, json).await?;
        }
        Some(Commands::Text { file }) => {
            let config = load_config(&cli.options)?;
            let (text, source) = match file {
                Some(path) if path.to_str() != Some("-") => {
                    let text = std::fs::read_to_string(&path)
                        .with_context(|| format!("failed to read {}", path.display()))?;
                    (text, Some(path.display().to_string()))
                }
                _ => (read_stdin()?, None),
            };
            summarise_text(&text, None, source, &config, json)?;
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "precis", &mut std::io::stdout());
        }
        None => {
            let config = load_config(&cli.options)?;
            if atty::is(atty::Stream::Stdin) {
                // Default: ask for a URL
                let url: String = Input::new()
                    .with_prompt("Enter a URL to summarise")
                    .interact_text()?;
                summarise_url(url.trim(), false, &config, json).await?;
            } else {
                let text = read_stdin()?;
                summarise_text(&text, None, None, &config, json)?;
            }
        }
    }

    Ok(())
}

/// Load precis.toml and apply command line overrides
fn load_config(options: &SummaryOptions) -> anyhow::Result<Config> {
    let mut config = Config::load()?;
    options.apply(&mut config);
    Ok(config)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_stdin() -> anyhow::Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    Ok(text)
}

async fn summarise_url(url: &str, raw: bool, config: &Config, json: bool) -> anyhow::Result<()> {
    eprintln!("Fetching: {}", url);
    let article = scraper::fetch_article(url, &config.fetch).await?;

    if raw {
        let title = article.title.as_deref().unwrap_or("No title");
        println!("\n=== {} ===\n", title);
        println!("{}", article.text);
        println!("\n--- Extracted {} characters ---", article.text.len());
        return Ok(());
    }

    summarise_text(&article.text, article.title, article.url, config, json)
}

fn summarise_text(
    text: &str,
    title: Option<String>,
    source: Option<String>,
    config: &Config,
    json: bool,
) -> anyhow::Result<()> {
    let summarizer = config.summarizer()?;
    let mut summary = summarizer.summarize_detailed(text, config.output.sentences)?;
    summary.title = title;
    summary.source = source;

    if tracing::enabled!(Level::DEBUG) {
        log_top_words(&summarizer.frequencies(text)?);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

/// Highest weighted words that survived the cutoffs
fn log_top_words(freq: &FrequencyMap) {
    tracing::debug!(words = freq.len(), "frequency map");
    for (word, weight) in freq.sorted().into_iter().take(TOP_WORDS) {
        tracing::debug!(word, weight, "top word");
    }
}

fn print_summary(summary: &Summary) {
    if let Some(title) = &summary.title {
        println!("=== {} ===", title.bold());
    }
    if let Some(source) = &summary.source {
        println!("{}", source.dimmed());
    }
    if summary.title.is_some() || summary.source.is_some() {
        println!();
    }

    for sentence in &summary.sentences {
        println!("  {} {}", "•".cyan(), sentence.text);
    }
}
