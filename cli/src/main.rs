//! textevent CLI - sentence, token and event annotation tool

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use textevent::{
    render, AnnotationStats, AnnotatorOptions, JsonFormat, PipelineRegistry, SentenceRecord,
    TextEventAnnotator, DEFAULT_MODEL,
};

#[derive(Parser)]
#[command(name = "textevent")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Annotate text with sentences, tokens and root events as JSON", long_about = None)]
struct Cli {
    /// Input text file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output JSON file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Pipeline identifier
    #[arg(long, env = "TEXTEVENT_MODEL", default_value = DEFAULT_MODEL, global = true)]
    model: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Annotate a text file as JSON
    Annotate {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print sentences and tokens as a table
    Show {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show annotation statistics
    Info {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// List available pipelines
    Models,

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let model = cli.model;

    let result = match cli.command {
        Some(Commands::Annotate {
            input,
            output,
            compact,
        }) => cmd_annotate(&input, output.as_deref(), &model, compact),
        Some(Commands::Show { input }) => cmd_show(&input, &model),
        Some(Commands::Info { input, json }) => cmd_info(&input, &model, json),
        Some(Commands::Models) => {
            cmd_models();
            Ok(())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: annotate into a JSON file if input is provided
            if let Some(input) = cli.input {
                cmd_extract(&input, cli.output.as_deref(), &model)
            } else {
                println!("{}", "Usage: textevent <FILE> [OUTPUT]".yellow());
                println!("       textevent --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Default output path: `<stem>_events.json` in the current directory.
fn default_output(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    PathBuf::from(format!("{}_events.json", stem))
}

fn load_annotator(model: &str) -> Result<TextEventAnnotator, Box<dyn std::error::Error>> {
    let annotator = TextEventAnnotator::with_options(AnnotatorOptions::new().with_model(model))?;
    log::debug!("Using pipeline '{}'", annotator.pipeline_name());
    Ok(annotator)
}

fn spinner(message: &str) -> Result<ProgressBar, Box<dyn std::error::Error>> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message.to_string());
    Ok(pb)
}

fn annotate_input(
    input: &Path,
    model: &str,
) -> Result<Vec<SentenceRecord>, Box<dyn std::error::Error>> {
    let annotator = load_annotator(model)?;
    let text = fs::read_to_string(input).map_err(|e| textevent::Error::file_read(input, e))?;
    Ok(annotator.annotate(&text)?)
}

fn cmd_extract(
    input: &Path,
    output: Option<&Path>,
    model: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| default_output(input));

    let pb = spinner("Loading pipeline...")?;
    let annotator = load_annotator(model)?;

    pb.set_message("Annotating...");
    let stats = annotator.annotate_file_with_stats(input, &output);
    pb.finish_and_clear();
    let stats = stats?;

    println!(
        "Event extraction completed. Results saved to {}",
        output.display()
    );
    println!(
        "  {} {} sentences, {} tokens, {} events",
        "└─".dimmed(),
        stats.sentence_count,
        stats.token_count,
        stats.event_count
    );

    Ok(())
}

fn cmd_annotate(
    input: &Path,
    output: Option<&Path>,
    model: &str,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    if let Some(path) = output {
        let annotator = load_annotator(model)?.with_json_format(format);
        annotator.annotate_file(input, path)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        let sentences = annotate_input(input, model)?;
        println!("{}", render::to_json(&sentences, format)?);
    }

    Ok(())
}

fn cmd_show(input: &Path, model: &str) -> Result<(), Box<dyn std::error::Error>> {
    let sentences = annotate_input(input, model)?;
    print!("{}", render::to_text(&sentences));
    Ok(())
}

fn cmd_info(input: &Path, model: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let sentences = annotate_input(input, model)?;
    let stats = AnnotationStats::from_sentences(&sentences);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Annotation Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pipeline".bold(), model);
    println!("{}: {}", "Sentences".bold(), stats.sentence_count);
    println!("{}: {}", "Tokens".bold(), stats.token_count);
    println!("{}: {}", "Events".bold(), stats.event_count);
    println!(
        "{}: {}",
        "Without event".bold(),
        stats.sentences_without_event
    );
    println!(
        "{}: {:.1}",
        "Tokens/sentence".bold(),
        stats.tokens_per_sentence()
    );

    Ok(())
}

fn cmd_models() {
    let registry = PipelineRegistry::with_defaults();

    println!("{}", "Available Pipelines".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for name in registry.names() {
        let marker = if name == DEFAULT_MODEL {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        println!("  {}{}", name.green(), marker);
    }
}

fn cmd_version() {
    println!("{} {}", "textevent".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Sentence, token and event annotation tool");
    println!();
    println!("Default pipeline: {}", DEFAULT_MODEL.dimmed());
    println!("License: MIT");
}
