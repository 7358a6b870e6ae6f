//! Batch driver: load, render, and write each requested input.
//!
//! Pipeline per input: read file → decode schema → render declarations →
//! atomic write. A failed input is reported and the batch continues.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use declgen_codegen::RenderOptions;
use declgen_utils::Config;

use crate::utils::{print_failure, print_status, print_summary, write_atomic};

/// Command-line overrides applied on top of the configuration file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub comments: bool,
    pub raw_docs: bool,
    pub package: Option<String>,
    pub out_dir: Option<PathBuf>,
}

/// Drives generation over a batch of input files.
pub struct Driver {
    options: RenderOptions,
    extension: String,
    out_dir: Option<PathBuf>,
}

impl Driver {
    /// Creates a driver from the discovered configuration and overrides.
    ///
    /// # Errors
    /// Returns an error if an existing declgen.toml cannot be read.
    pub fn new(overrides: Overrides) -> Result<Self> {
        let config = Config::find()?.map(|(config, _)| config).unwrap_or_default();
        Ok(Self::with_config(config, overrides))
    }

    /// Creates a driver from an explicit configuration.
    #[must_use]
    pub fn with_config(config: Config, overrides: Overrides) -> Self {
        let options = RenderOptions {
            comments: overrides.comments || config.docs.comments,
            strip_markup: config.docs.strip_markup && !overrides.raw_docs,
            package: overrides.package.unwrap_or(config.output.package),
        };
        Self {
            options,
            extension: config.output.extension,
            out_dir: overrides.out_dir,
        }
    }

    /// Generates declarations for every input, continuing past failures.
    ///
    /// # Errors
    /// Returns an error naming the failure count if any input failed.
    pub fn generate(&self, inputs: &[PathBuf]) -> Result<()> {
        let start = Instant::now();
        let mut failed = 0usize;
        for input in inputs {
            print_status("Generating", &input.display().to_string());
            if let Err(err) = self.generate_one(input) {
                print_failure(input, &err);
                failed += 1;
            }
        }
        print_summary("generated", inputs.len() - failed, start.elapsed());
        if failed > 0 {
            anyhow::bail!("{failed} of {} inputs failed", inputs.len());
        }
        Ok(())
    }

    /// Validates every input without writing output files.
    ///
    /// # Errors
    /// Returns an error naming the failure count if any input failed.
    pub fn check(&self, inputs: &[PathBuf]) -> Result<()> {
        let start = Instant::now();
        let mut failed = 0usize;
        for input in inputs {
            print_status("Checking", &input.display().to_string());
            if let Err(err) = self.check_one(input) {
                print_failure(input, &err);
                failed += 1;
            }
        }
        print_summary("checked", inputs.len() - failed, start.elapsed());
        if failed > 0 {
            anyhow::bail!("{failed} of {} inputs failed", inputs.len());
        }
        Ok(())
    }

    fn generate_one(&self, input: &Path) -> Result<()> {
        let api = self.load(input)?;
        let text = declgen_codegen::generate(&api, &self.options)?;
        let dest = self.output_path(input);
        write_atomic(&dest, &text)?;
        Ok(())
    }

    fn check_one(&self, input: &Path) -> Result<()> {
        self.load(input)?;
        Ok(())
    }

    fn load(&self, input: &Path) -> Result<declgen_schema::ApiFile> {
        let source = fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))?;
        declgen_schema::decode(&source)
            .with_context(|| format!("Failed to decode {}", input.display()))
    }

    /// Destination path: the input with its extension replaced, optionally
    /// relocated under the output directory.
    #[must_use]
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let renamed = input.with_extension(&self.extension);
        match (&self.out_dir, renamed.file_name()) {
            (Some(dir), Some(name)) => dir.join(name),
            _ => renamed,
        }
    }
}
