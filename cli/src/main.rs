//! unresume CLI - resume text parsing tool

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use unresume::{parse, reconstruct, to_json, JsonFormat, Section};

#[derive(Parser)]
#[command(name = "unresume")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Parse resume text to a structured model and back", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse resume text and emit the document model as JSON
    Json {
        /// Input text file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Parse resume text and emit its canonical reconstruction
    Text {
        /// Input text file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Split resume text into coarse editor blocks as JSON
    Blocks {
        /// Input text file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Show document structure information
    Info {
        /// Input text file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Print the stock resume template
    Template,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Json {
            input,
            output,
            compact,
        } => cmd_json(input.as_deref(), output.as_deref(), compact),
        Commands::Text { input, output } => cmd_text(input.as_deref(), output.as_deref()),
        Commands::Blocks { input } => cmd_blocks(input.as_deref()),
        Commands::Info { input } => cmd_info(input.as_deref()),
        Commands::Template => {
            print!("{}", unresume::template::STOCK_RESUME);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn read_input(input: Option<&Path>) -> Result<String, Box<dyn std::error::Error>> {
    let text = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    log::debug!("read {} bytes of input", text.len());
    Ok(text)
}

fn write_output(
    output: Option<&Path>,
    content: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_json(
    input: Option<&Path>,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let doc = parse(&text);

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = to_json(&doc, format)?;

    write_output(output, &json)
}

fn cmd_text(
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let doc = parse(&text);
    write_output(output, reconstruct(&doc).trim_end())
}

fn cmd_blocks(input: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let blocks = unresume::split_blocks(&text);
    println!("{}", serde_json::to_string_pretty(&blocks)?);
    Ok(())
}

fn cmd_info(input: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let doc = parse(&text);

    println!("{}", "Document".green().bold());
    match &doc.header {
        Some(header) => println!("  {} {}", "Header:".dimmed(), header.name),
        None => println!("  {} none", "Header:".dimmed()),
    }
    println!("  {} {}", "Sections:".dimmed(), doc.section_count());
    println!("  {} {}", "Entries:".dimmed(), doc.entry_count());
    println!("  {} {}", "Skills:".dimmed(), doc.skill_count());

    for section in &doc.sections {
        match section {
            Section::Standard(s) => {
                println!(
                    "  {} {} ({} entries)",
                    "├─".dimmed(),
                    s.title,
                    s.entries.len()
                );
            }
            Section::Skills(s) => {
                println!(
                    "  {} {} ({} skills)",
                    "├─".dimmed(),
                    s.title,
                    s.skills.len()
                );
            }
        }
    }

    Ok(())
}
