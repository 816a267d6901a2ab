//! `diffview` CLI — diff two JSON documents and render annotated views.
//!
//! ## Usage
//!
//! ```sh
//! # Full annotated view of the differences between two documents
//! diffview diff old.json new.json
//!
//! # Only the changed entries
//! diffview diff old.json new.json --changes-only
//!
//! # The raw change tree as JSON
//! diffview diff old.json new.json --format json
//!
//! # Plain rendering of a single document (stdin → stdout)
//! cat data.json | diffview view
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Read};

use diffview_core::{
    diff_with, render_changes_only, render_full, render_value, DiffOptions, DirectLookup,
    RenderConfig,
};

#[derive(Parser)]
#[command(
    name = "diffview",
    version,
    about = "Structural JSON diff with annotated HTML output"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Diff two JSON documents
    Diff {
        /// Left-hand (old) document
        left: String,
        /// Right-hand (new) document
        right: String,
        /// Render only the changed entries
        #[arg(long)]
        changes_only: bool,
        /// Compare directly-owned keys only
        #[arg(long)]
        own: bool,
        /// Collapse nested containers to an [object] placeholder
        #[arg(long)]
        shallow: bool,
        /// Opening container delimiter
        #[arg(long, default_value_t = '{')]
        open_char: char,
        /// Closing container delimiter
        #[arg(long, default_value_t = '}')]
        close_char: char,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Html)]
        format: Format,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Render a single JSON document as nested markup
    View {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Collapse nested containers to an [object] placeholder
        #[arg(long)]
        shallow: bool,
        /// Opening container delimiter
        #[arg(long, default_value_t = '{')]
        open_char: char,
        /// Closing container delimiter
        #[arg(long, default_value_t = '}')]
        close_char: char,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Annotated markup
    Html,
    /// The serialized change tree
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Diff {
            left,
            right,
            changes_only,
            own,
            shallow,
            open_char,
            close_char,
            format,
            output,
        } => {
            let left_value = read_json_file(&left)?;
            let right_value = read_json_file(&right)?;

            let options = DiffOptions {
                own_properties: own,
                ..DiffOptions::default()
            };
            let tree = diff_with(&left_value, &right_value, &DirectLookup, &options)
                .context("Failed to diff documents")?;

            let config = RenderConfig {
                open_char,
                close_char,
                shallow,
            };
            let rendered = match format {
                Format::Json => serde_json::to_string_pretty(&tree)
                    .context("Failed to serialize change tree")?,
                Format::Html if changes_only => render_changes_only(&tree, &config),
                Format::Html => render_full(&tree, &config),
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::View {
            input,
            shallow,
            open_char,
            close_char,
            output,
        } => {
            let raw = read_input(input.as_deref())?;
            let value: serde_json::Value =
                serde_json::from_str(&raw).context("Input is not valid JSON")?;
            let config = RenderConfig {
                open_char,
                close_char,
                shallow,
            };
            write_output(output.as_deref(), &render_value(&value, &config))?;
        }
    }

    Ok(())
}

fn read_json_file(path: &str) -> Result<serde_json::Value> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("File is not valid JSON: {}", path))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
