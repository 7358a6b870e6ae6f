//! Schema model for scripting API descriptions.
//!
//! Decodes the JSON API description format into a typed entity tree and
//! validates the tree before rendering starts.

mod model;
mod validate;

pub use model::{
    ApiFile, Base, Class, Event, Method, Module, Param, Property, Return, Signature,
};
pub use validate::validate;

use declgen_core::{Error, Result};

/// Decodes an API description document and validates the resulting tree.
///
/// # Errors
/// Returns a decode error for malformed JSON or a missing `name`, and a
/// schema error for entity names that cannot form identifiers.
///
/// # Examples
/// ```
/// let api = declgen_schema::decode(r#"{"source":"doc/api/fs.md"}"#).unwrap();
/// assert_eq!(api.source, "doc/api/fs.md");
/// assert!(api.modules.is_empty());
/// ```
pub fn decode(source: &str) -> Result<ApiFile> {
    let api: ApiFile =
        serde_json::from_str(source).map_err(|e| Error::Decode(e.to_string()))?;
    validate(&api)?;
    Ok(api)
}
