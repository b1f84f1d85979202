//! CLI tool to parse fixed-width data files into delimited fields.

use clap::Parser;
use fixed_width_rs::FixedWidthParser;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;

/// Parse a fixed-width data file using declared column start positions.
///
/// Column positions are one-based and ascending, e.g. `1,9,19,29` for an
/// 8/10/10/rest record layout. Fields are trimmed and written one row per
/// line, joined by the output delimiter.
#[derive(Parser)]
#[command(name = "fw-parse")]
struct Cli {
    /// Comma-separated one-based column start positions, e.g. 1,9,19
    columns: String,

    /// Input data file (or /dev/stdin)
    input: String,

    /// Number of header rows to discard before parsing
    #[arg(short = 's', long, default_value_t = 0)]
    skip_header: usize,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Output field delimiter
    #[arg(short, long, default_value = "\t")]
    delimiter: String,

    /// Show paths and row counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let positions: Vec<usize> = match cli
        .columns
        .split(',')
        .map(|p| p.trim().parse())
        .collect::<Result<_, _>>()
    {
        Ok(positions) => positions,
        Err(_) => {
            eprintln!(
                "Error: column positions must be comma-separated integers, got '{}'",
                cli.columns
            );
            process::exit(1);
        }
    };

    let parser = match FixedWidthParser::new(&positions) {
        Ok(parser) => parser,
        Err(e) => {
            eprintln!("Layout error: {e}");
            process::exit(1);
        }
    };

    let input_text = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading input file '{}': {e}", cli.input);
            process::exit(1);
        }
    };

    if cli.verbose {
        eprintln!("Input:   {}", cli.input);
        eprintln!("Output:  {}", cli.output.as_deref().unwrap_or("(stdout)"));
        eprintln!("Columns: {} declared", parser.layout().column_count());
    }

    let mut line_count = 0usize;
    let mut rows = Vec::new();
    for row in parser.parse_lines(input_text.lines(), cli.skip_header) {
        line_count += 1;
        if row.is_blank() {
            continue;
        }
        rows.push(row.fields().join(&cli.delimiter));
    }
    let row_count = rows.len();
    let output = rows.join("\n");

    if let Some(out_path) = &cli.output {
        if let Some(parent) = Path::new(out_path.as_str()).parent()
            && !parent.as_os_str().is_empty()
            && fs::create_dir_all(parent).is_err()
        {
            eprintln!("Error creating output directory for '{out_path}'");
            process::exit(1);
        }
        if let Err(e) = fs::write(out_path, &output) {
            eprintln!("Error writing output file '{out_path}': {e}");
            process::exit(1);
        }
    } else {
        if let Err(e) = io::stdout().write_all(output.as_bytes()) {
            eprintln!("Error writing output: {e}");
            process::exit(1);
        }
        if !output.is_empty() && !output.ends_with('\n') {
            println!();
        }
    }
    if cli.verbose {
        eprintln!("Rows:    {line_count} lines -> {row_count} rows");
    }
}
