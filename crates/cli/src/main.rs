//! CLI tool for splitting and inspecting Markdown slide decks.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mdslides_core::{join_slides, Deck, LayoutClassifier};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Split Markdown documents into slides and show how each would be laid out.
#[derive(Parser, Debug)]
#[command(name = "mdslides")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Quote lines (after the first) shorter than this are treated as the attribution
    #[arg(long, global = true, default_value = "30")]
    attribution_max_len: usize,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every slide with its layout and title
    Outline {
        /// Input Markdown document
        input: PathBuf,
    },

    /// Print the classified slides as JSON
    Inspect {
        /// Input Markdown document
        input: PathBuf,

        /// Only print this slide (1-based)
        #[arg(short, long)]
        slide: Option<usize>,
    },

    /// Write each slide to its own file
    Split {
        /// Input Markdown document
        input: PathBuf,

        /// Output directory (default: same as input file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print slides to stdout instead of writing files
        #[arg(short, long)]
        print: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let classifier = LayoutClassifier::new().with_attribution_max_len(args.attribution_max_len);

    match &args.command {
        Command::Outline { input } => {
            let deck = load_deck(input, &classifier)?;
            print!("{}", format_outline(&deck));
        }
        Command::Inspect { input, slide } => {
            let deck = load_deck(input, &classifier)?;
            let json = match slide {
                Some(number) => {
                    let slide = number
                        .checked_sub(1)
                        .and_then(|index| deck.slide(index))
                        .ok_or_else(|| {
                            anyhow::anyhow!("Slide {} not found ({} slides)", number, deck.len())
                        })?;
                    serde_json::to_string_pretty(slide)?
                }
                None => serde_json::to_string_pretty(&deck.slides)?,
            };
            println!("{}", json);
        }
        Command::Split {
            input,
            output,
            print,
        } => {
            let deck = load_deck(input, &classifier)?;
            if *print {
                let bodies: Vec<&str> = deck.iter().map(|s| s.body.as_str()).collect();
                println!("{}", join_slides(&bodies));
            } else {
                let dir = get_output_dir(input, output.as_ref())?;
                for slide in &deck {
                    let path = dir.join(slide_file_name(slide.index));
                    write_output(&path, &format!("{}\n", slide.body))?;
                    log::info!("Written to: {}", path.display());
                }
            }
        }
    }

    Ok(())
}

/// Read and classify a document.
fn load_deck(input: &Path, classifier: &LayoutClassifier) -> Result<Deck> {
    log::debug!("Processing: {}", input.display());

    let deck = Deck::from_path(input, classifier)
        .with_context(|| format!("Failed to load {}", input.display()))?;

    log::info!("Found {} slides in {}", deck.len(), input.display());
    for (kind, count) in deck.layout_counts() {
        if count > 0 {
            log::debug!("  {}: {}", kind, count);
        }
    }

    Ok(deck)
}

/// One line per slide: number, layout, title.
fn format_outline(deck: &Deck) -> String {
    deck.iter()
        .map(|slide| {
            format!(
                "{:>3}  {:<16}  {}\n",
                slide.index + 1,
                slide.kind().name(),
                slide.display_title().unwrap_or("")
            )
        })
        .collect()
}

/// File name for a 0-based slide index.
fn slide_file_name(index: usize) -> String {
    format!("slide-{:02}.md", index + 1)
}

/// Determine the directory split slides are written to.
fn get_output_dir(input_path: &Path, output_dir: Option<&PathBuf>) -> Result<PathBuf> {
    let dir = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.clone()
        }
        None => match input_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        },
    };

    Ok(dir)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
