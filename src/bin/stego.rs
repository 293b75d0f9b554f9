//! # Steganography CLI
//!
//! Thin wrapper around the `stego_util` library: hides a line of text in an
//! image, or prints the text hidden in one.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin stego -- encode photo.jpg
//! cargo run --bin stego -- encode photo.jpg --message "meet at noon" --report report.json
//! cargo run --bin stego -- decode encrypted_photo.png
//! cargo run --bin stego -- --config config/stego.toml capacity photo.jpg
//! ```
//!
//! When `--message` is omitted the message is read as one line from stdin.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{error, LevelFilter};
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use stego_util::common::config::{load_config, StegoConfig};
use stego_util::common::logging::init_logger;
use stego_util::processing::steganography::{self, EncodeOutcome};
use stego_util::{Message, StegoError};

/// Command-line arguments for the stego binary
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file (TOML format)
    ///
    /// Example: config/stego.toml
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log at debug level regardless of the config file
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hide a message in an image
    Encode {
        /// Carrier image to read
        image: PathBuf,

        /// Message to hide (prompted for when omitted)
        #[arg(short, long)]
        message: Option<String>,

        /// Path to write a JSON summary of the encode pass
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Print the message hidden in an image
    Decode {
        image: PathBuf,
    },
    /// Print how many message bytes an image can hold
    Capacity {
        image: PathBuf,
    },
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        error!("❌ {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config: StegoConfig = match &args.config {
        Some(path) => load_config(path)?,
        None => StegoConfig::default(),
    };

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        config.logging.level_filter()?
    };
    init_logger(level);

    match args.command {
        Command::Encode {
            image,
            message,
            report,
        } => {
            let text = match message {
                Some(text) => text,
                None => prompt_message()?,
            };
            let message = Message::from_text(&text)?;

            let outcome = steganography::encode_file(&image, &message, &config)?;
            println!("Encryption successful");
            println!("{}", outcome.output_path.display());

            if let Some(report_path) = report {
                export_report(&report_path, &image, &outcome)?;
                println!("Report exported to: {}", report_path.display());
            }
        }
        Command::Decode { image } => match steganography::decode_file(&image, &config) {
            Ok(message) => println!("{}", message.to_text()),
            Err(StegoError::NoHiddenMessage { .. }) => {
                println!("No hidden message found");
                std::process::exit(2);
            }
            Err(e) => return Err(e.into()),
        },
        Command::Capacity { image } => {
            let bytes = steganography::capacity_file(&image)?;
            println!("{}", bytes);
        }
    }

    Ok(())
}

/// Read one line of message text from stdin, without its line ending.
fn prompt_message() -> Result<String> {
    println!("Enter the message to encode: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

fn export_report(path: &Path, input: &Path, outcome: &EncodeOutcome) -> Result<()> {
    let output = serde_json::json!({
        "input": input.display().to_string(),
        "output": outcome.output_path.display().to_string(),
        "report": outcome.report,
    });

    let json_string = serde_json::to_string_pretty(&output)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;

    Ok(())
}
