//! layout2md - Convert layout dumps to Markdown
//!
//! A command line tool that reads JSON layout dumps and writes the
//! document as Markdown: the body in reading order, with reconstructed
//! tables appended in a trailing section.

use clap::{ArgAction, Parser};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};

use trestle_core::converter::{TextBodyConverter, render_tables_section};
use trestle_core::error::Result;
use trestle_core::{ConvertOptions, LayoutDump, convert_document, extract_document_tables};

/// Convert layout dumps to Markdown with reconstructed tables.
#[derive(Parser, Debug)]
#[command(name = "layout2md")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
struct Args {
    /// One or more paths to layout dump files, or "-" for stdin
    #[arg(required = true)]
    files: Vec<String>,

    /// Print version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    // === Page selection ===
    /// A space-separated list of page numbers to convert (1-indexed)
    #[arg(long = "page-numbers")]
    page_numbers: Option<String>,

    /// A comma-separated list of page numbers to convert (1-indexed, legacy)
    #[arg(short = 'p', long = "pagenos")]
    pagenos: Option<String>,

    /// The maximum number of pages to convert (0 = no limit)
    #[arg(short = 'm', long, default_value = "0")]
    maxpages: usize,

    // === Output options ===
    /// Skip table reconstruction and output the body only
    #[arg(long = "no-tables", action = ArgAction::SetTrue)]
    no_tables: bool,

    /// Output only the reconstructed tables, without the body
    #[arg(long = "tables-only", action = ArgAction::SetTrue, conflicts_with = "no_tables")]
    tables_only: bool,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,
}

/// Parse page numbers from either --page-numbers or -p option.
fn parse_page_numbers(args: &Args) -> Option<Vec<usize>> {
    // --page-numbers takes precedence
    if let Some(ref nums) = args.page_numbers {
        let nums: Vec<usize> = nums
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .filter_map(|s| s.trim().parse::<usize>().ok())
            .map(|n| n.saturating_sub(1))
            .collect();
        if !nums.is_empty() {
            return Some(nums);
        }
    }

    // Legacy -p option: comma-separated
    if let Some(ref pagenos) = args.pagenos {
        let nums: Vec<usize> = pagenos
            .split(',')
            .filter_map(|s| s.trim().parse::<usize>().ok())
            .map(|n| n.saturating_sub(1))
            .collect();
        if !nums.is_empty() {
            return Some(nums);
        }
    }

    None
}

/// Build conversion options from command line arguments.
fn build_options(args: &Args) -> ConvertOptions {
    ConvertOptions {
        tables: !args.no_tables,
        page_numbers: parse_page_numbers(args),
        maxpages: args.maxpages,
    }
}

/// Read a layout dump from a path, or from stdin for "-".
fn read_dump(path: &str) -> Result<LayoutDump> {
    if path == "-" {
        let mut data = String::new();
        io::stdin().read_to_string(&mut data)?;
        LayoutDump::parse(&data)
    } else {
        LayoutDump::from_path(path)
    }
}

/// Process a single layout dump.
fn process_file<W: Write>(path: &str, writer: &mut W, args: &Args) -> Result<()> {
    let dump = read_dump(path)?;
    let options = build_options(args);

    if args.tables_only {
        let extraction = extract_document_tables(&dump, &options);
        let section = render_tables_section(&extraction.tables);
        if !section.is_empty() {
            writeln!(writer, "{section}")?;
        }
        return Ok(());
    }

    let document = convert_document(&dump, &TextBodyConverter, &options)?;
    let markdown = document.combined();
    if !markdown.is_empty() {
        writer.write_all(markdown.as_bytes())?;
        if !markdown.ends_with('\n') {
            writeln!(writer)?;
        }
    }

    Ok(())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Log to stderr so stdout stays clean for the Markdown payload
    let level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    // Open output file or use stdout
    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .map_err(|e| format!("Failed to create output file {}: {}", args.outfile, e))?;
        Box::new(BufWriter::new(file))
    };

    // Process each input dump
    for path in &args.files {
        if path != "-" && !std::path::Path::new(path).exists() {
            eprintln!("Error: File not found: {path}");
            std::process::exit(1);
        }

        if let Err(e) = process_file(path, &mut output, &args) {
            eprintln!("Error processing {path}: {e}");
            std::process::exit(1);
        }
    }

    // Ensure output is flushed
    output.flush()?;

    Ok(())
}
