//! Declaration generation for scripting API descriptions.
//!
//! This crate renders a decoded schema tree into Go binding declarations:
//! struct types embedding the opaque host object, string constants for
//! events, and tagged members for properties and methods.

mod comment;
mod generator;
mod options;

pub use generator::{Declare, render_list};
pub use options::RenderOptions;

use declgen_core::Result;
use declgen_schema::ApiFile;

/// Renders the full declaration output for an API description.
///
/// # Arguments
/// * `api` - The decoded API description tree
/// * `options` - Rendering knobs for this pass
///
/// # Returns
/// The generated declaration source as a string
///
/// # Errors
/// Returns an error if an entity name cannot form an identifier.
///
/// # Examples
/// ```
/// use declgen_codegen::{RenderOptions, generate};
/// use declgen_schema::decode;
///
/// let api = decode(r#"{"source":"doc/api/fs.md"}"#).unwrap();
/// let output = generate(&api, &RenderOptions::default()).unwrap();
/// assert!(output.starts_with("//doc/api/fs.md"));
/// ```
pub fn generate(api: &ApiFile, options: &RenderOptions) -> Result<String> {
    api.decl(options)
}
