//! precis CLI - Extractive Text Summarization
//!
//! Command-line interface for summarizing text and inspecting word frequencies.

use clap::{Parser, Subcommand};
use log::error;
use precis::shell::{self, Outcome};
use precis::{Config, Result, Session, Summarizer};
use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "precis")]
#[command(version)]
#[command(about = "Extractive text summarization by word frequency", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Stop-word language (overrides the config file)
    #[arg(short, long, global = true)]
    language: Option<String>,

    /// Stop-word file, one word per line (overrides the language)
    #[arg(long, global = true)]
    stopwords: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize text
    Summarize {
        /// Text to summarize (reads --input or stdin when omitted)
        text: Option<String>,

        /// Input text file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Number of sentences (default: from config, 3)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        sentences: Option<i64>,

        /// Print every selected sentence with its score
        #[arg(long)]
        scores: bool,
    },

    /// List the most frequent significant words
    Keywords {
        /// Text to analyze (reads --input or stdin when omitted)
        text: Option<String>,

        /// Input text file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Number of words (default: 10)
        #[arg(short = 'k', long, default_value = "10")]
        count: usize,
    },

    /// Print the sentences the text is split into
    Sentences {
        /// Text to split (reads --input or stdin when omitted)
        text: Option<String>,

        /// Input text file
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Summarize line by line in an interactive session
    Interactive {
        /// Directory for saved transcripts
        #[arg(short, long, default_value = ".")]
        save_dir: PathBuf,

        /// Number of sentences per summary (default: from config, 3)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        sentences: Option<i64>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let result = load_config(&cli).and_then(|config| match cli.command {
        Commands::Summarize {
            text,
            input,
            sentences,
            scores,
        } => summarize_text(&config, text, input, sentences, scores),

        Commands::Keywords { text, input, count } => show_keywords(&config, text, input, count),

        Commands::Sentences { text, input } => show_sentences(&config, text, input),

        Commands::Interactive {
            save_dir,
            sentences,
        } => run_interactive(&config, save_dir, sentences),
    });

    if let Err(e) = result {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Reads the config file (if any) and applies command-line overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Some(language) = &cli.language {
        config.text.language = language.clone();
    }
    if let Some(path) = &cli.stopwords {
        config.text.stopwords_path = Some(path.clone());
    }

    config.validate()?;
    Ok(config)
}

/// Resolves the text argument, an input file, or stdin.
fn read_input(text: Option<String>, input: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = input {
        return Ok(fs::read_to_string(path)?);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn resolve_count(summarizer: &Summarizer, sentences: Option<i64>) -> Result<usize> {
    match sentences {
        Some(n) => precis::sentence_count(n),
        None => Ok(summarizer.default_sentence_count()),
    }
}

fn summarize_text(
    config: &Config,
    text: Option<String>,
    input: Option<PathBuf>,
    sentences: Option<i64>,
    scores: bool,
) -> Result<()> {
    let summarizer = Summarizer::from_config(config)?;
    let count = resolve_count(&summarizer, sentences)?;
    let text = read_input(text, input)?;

    let summary = summarizer.summarize_detailed(&text, count)?;

    if scores {
        println!(
            "Selected {} of {} sentences",
            summary.len(),
            summary.total_sentences
        );
        for scored in &summary.sentences {
            println!(
                "  [{:>3}] score {:>4}  {}",
                scored.sentence.index, scored.score, scored.sentence.text
            );
        }
    } else {
        println!("{}", summary);
    }

    Ok(())
}

fn show_keywords(
    config: &Config,
    text: Option<String>,
    input: Option<PathBuf>,
    count: usize,
) -> Result<()> {
    let summarizer = Summarizer::from_config(config)?;
    let text = read_input(text, input)?;
    let frequencies = summarizer.frequencies(&text)?;

    println!(
        "{} distinct words, {} occurrences",
        frequencies.len(),
        frequencies.total()
    );
    for (word, freq) in frequencies.most_common(count) {
        println!("  {:<20} {}", word, freq);
    }

    Ok(())
}

fn show_sentences(config: &Config, text: Option<String>, input: Option<PathBuf>) -> Result<()> {
    let summarizer = Summarizer::from_config(config)?;
    let text = read_input(text, input)?;

    for sentence in summarizer.sentences(&text)? {
        println!("[{:>3}] {}", sentence.index, sentence.text);
    }

    Ok(())
}

fn run_interactive(config: &Config, save_dir: PathBuf, sentences: Option<i64>) -> Result<()> {
    let summarizer = Summarizer::from_config(config)?;
    let count = resolve_count(&summarizer, sentences)?;
    let mut session = Session::new(summarizer, save_dir).with_sentence_count(count);

    println!("Enter text to summarize. Commands: :show, :clear, :save, :quit");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        if line.trim() == ":show" {
            print!("{}", session.transcript());
            continue;
        }

        let Some(event) = shell::parse_command(&line) else {
            break;
        };

        match session.handle(event) {
            Outcome::Appended(message) => println!("{}\n", message),
            Outcome::Warning(message) => println!("Input Error: {}", message),
            Outcome::Cleared => println!("Transcript cleared."),
            Outcome::Saved(path) => println!("Summary has been saved to {}", path.display()),
            Outcome::SaveFailed(message) => println!("Could not save summary: {}", message),
        }
    }

    Ok(())
}
