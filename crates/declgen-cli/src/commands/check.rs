//! Implementation of the `declgen check` command.

use std::path::PathBuf;

use anyhow::Result;

use crate::driver::{Driver, Overrides};

/// Executes the `check` command: decode and validate only.
///
/// # Errors
/// Returns an error if any input failed to validate.
pub fn execute(inputs: &[PathBuf]) -> Result<()> {
    let driver = Driver::new(Overrides::default())?;
    driver.check(inputs)
}
