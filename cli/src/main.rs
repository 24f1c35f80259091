//! statext CLI - statute layout normalization tool

mod source;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use statext::{JsonFormat, LayoutOptions, Normalizer};

use source::load_document;

#[derive(Parser)]
#[command(name = "statext")]
#[command(version)]
#[command(about = "Normalize rendered Polish statutes to structured plain text", long_about = None)]
struct Cli {
    /// Input file (.xml from pdftohtml, .json, or .pdf)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(flatten)]
    layout: LayoutArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize one document to plain text
    Text {
        /// Input file (.xml, .json or .pdf)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Dump assembled lines with line numbers and indentation levels as JSON
    Lines {
        /// Input file (.xml, .json or .pdf)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Normalize many documents into a directory of .txt files
    Convert {
        /// Input files (.xml, .json or .pdf)
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "statext_output")]
        output: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Show version information
    Version,
}

/// Page geometry overrides.
#[derive(Args, Clone, Default)]
struct LayoutArgs {
    /// Page-relative offset where the header band ends
    #[arg(long, value_name = "OFFSET", env = "STATEXT_HEADER_END")]
    header_end: Option<i64>,

    /// Page-relative offset where the footer band starts
    #[arg(long, value_name = "OFFSET", env = "STATEXT_FOOTER_START")]
    footer_start: Option<i64>,

    /// Left offset where margin annotations start
    #[arg(long, value_name = "OFFSET", env = "STATEXT_RIGHT_MARGIN")]
    right_margin: Option<i64>,

    /// Keep @@INDENT<n>@@ markers on tiret lines
    #[arg(long)]
    keep_indent_markers: bool,
}

impl LayoutArgs {
    fn options(&self) -> LayoutOptions {
        let mut options = LayoutOptions::new().with_indent_markers(self.keep_indent_markers);
        if let Some(offset) = self.header_end {
            options = options.with_header_end(offset);
        }
        if let Some(offset) = self.footer_start {
            options = options.with_footer_start(offset);
        }
        if let Some(offset) = self.right_margin {
            options = options.with_right_margin(offset);
        }
        options
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Text {
            input,
            output,
            layout,
        }) => cmd_text(&input, output.as_deref(), &layout),
        Some(Commands::Lines {
            input,
            output,
            compact,
            layout,
        }) => cmd_lines(&input, output.as_deref(), compact, &layout),
        Some(Commands::Convert {
            inputs,
            output,
            layout,
        }) => cmd_convert(&inputs, &output, &layout),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: normalize to stdout if input is provided
            if let Some(input) = cli.input {
                cmd_text(&input, None, &cli.layout)
            } else {
                println!("{}", "Usage: statext <FILE>".yellow());
                println!("       statext --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        print!("{}", content);
    }
    Ok(())
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    layout: &LayoutArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = load_document(input)?;
    let text = Normalizer::new(layout.options())?.normalize(&document)?;
    write_or_print(output, &text)
}

fn cmd_lines(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    layout: &LayoutArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = load_document(input)?;
    let lines = Normalizer::new(layout.options())?.assemble_lines(&document)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = statext::render::to_json(&lines, format)?;
    write_or_print(output, &format!("{}\n", json))
}

fn cmd_convert(
    inputs: &[PathBuf],
    output_dir: &Path,
    layout: &LayoutArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(output_dir)?;
    let normalizer = Normalizer::new(layout.options())?;

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    // Documents are independent; each one runs the whole pipeline on its own.
    let results: Vec<(&PathBuf, Result<PathBuf, String>)> = inputs
        .par_iter()
        .map(|input| {
            let result = convert_one(&normalizer, input, output_dir).map_err(|e| e.to_string());
            pb.inc(1);
            (input, result)
        })
        .collect();
    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    let mut failed = 0;
    for (input, result) in &results {
        match result {
            Ok(path) => println!("  {} {}", "├─".dimmed(), path.display()),
            Err(e) => {
                failed += 1;
                println!("  {} {} {}", "├─".dimmed(), input.display().to_string().red(), e);
            }
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} documents failed", failed, inputs.len()).into());
    }
    Ok(())
}

fn convert_one(
    normalizer: &Normalizer,
    input: &Path,
    output_dir: &Path,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let document = load_document(input)?;
    let text = normalizer.normalize(&document)?;

    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let path = output_dir.join(format!("{}.txt", stem));
    fs::write(&path, text)?;
    Ok(path)
}

fn cmd_version() {
    println!("{} {}", "statext".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Statute layout normalization tool");
    println!();
    println!("Renderer: pdftohtml -zoom 1.35 -xml -stdout");
    println!("License: MIT");
}
