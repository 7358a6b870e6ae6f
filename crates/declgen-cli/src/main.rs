//! Command-line interface for the declgen generator.

mod commands;
mod driver;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::driver::Overrides;

#[derive(Parser)]
#[command(name = "declgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate binding declarations from API description files
    #[command(visible_alias = "g")]
    Generate {
        /// API description files to process
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Emit documentation comment blocks
        #[arg(short = 'c', long)]
        comments: bool,

        /// Keep markup in documentation text verbatim
        #[arg(long)]
        raw_docs: bool,

        /// Package name for the generated files
        #[arg(long)]
        package: Option<String>,

        /// Write output files into this directory instead of alongside inputs
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Validate API description files without writing output
    Check {
        /// API description files to validate
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            inputs,
            comments,
            raw_docs,
            package,
            out_dir,
        } => commands::generate::execute(
            &inputs,
            Overrides {
                comments,
                raw_docs,
                package,
                out_dir,
            },
        ),
        Commands::Check { inputs } => commands::check::execute(&inputs),
    }
}
