//! Diagram Extractor CLI
//!
//! Usage:
//!   diagram-extractor [OPTIONS] [FILE]
//!
//! Options:
//!   -p, --palette <FILE>  Palette file for brand colors (TOML format)
//!   --pretty              Pretty-print the JSON output
//!   -h, --help            Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use diagram_extractor::{extract_with_config, ExtractConfig, Palette};

#[derive(Parser)]
#[command(name = "diagram-extractor")]
#[command(about = "Extract embedded diagrams from document text as renderer-ready JSON")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Palette file for brand colors (TOML format)
    #[arg(short, long)]
    palette: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show a hint
    if cli.input.is_none() && io::stdin().is_terminal() {
        eprintln!("diagram-extractor: pass a document file or pipe text on stdin");
        eprintln!("Try: diagram-extractor --help");
        return;
    }

    // Load palette
    let palette = match &cli.palette {
        Some(path) => match Palette::from_file(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error loading palette '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Palette::default(),
    };

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let config = ExtractConfig::new().with_palette(palette);
    let diagrams = extract_with_config(&source, &config);

    let json = if cli.pretty {
        serde_json::to_string_pretty(&diagrams)
    } else {
        serde_json::to_string(&diagrams)
    };
    match json {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error serializing diagrams: {}", e);
            std::process::exit(1);
        }
    }
}
