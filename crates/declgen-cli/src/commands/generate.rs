//! Implementation of the `declgen generate` command.

use std::path::PathBuf;

use anyhow::Result;

use crate::driver::{Driver, Overrides};

/// Executes the `generate` command over the requested inputs.
///
/// # Errors
/// Returns an error if any input failed to generate.
pub fn execute(inputs: &[PathBuf], overrides: Overrides) -> Result<()> {
    let driver = Driver::new(overrides)?;
    driver.generate(inputs)
}
