//! The typed entity tree decoded from an API description document.
//!
//! Field names follow the JSON format exactly; everything is optional except
//! `name`, and absent lists decode to empty lists. Lists preserve input
//! order, which carries through to declaration order in the output.

use serde::Deserialize;

/// Metadata shared by every entity in the tree.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Base {
    /// Verbatim original documentation line.
    #[serde(default, rename = "textRaw")]
    pub text_raw: String,
    /// Scalar type hint; empty when the source gives none.
    #[serde(default, rename = "type")]
    pub type_tag: String,
    /// Display name as it appears in the source API.
    pub name: String,
    /// Long-form description, possibly containing HTML markup.
    #[serde(default)]
    pub desc: String,
    /// One-line description, possibly containing HTML markup.
    #[serde(default, rename = "shortDesc")]
    pub short_desc: String,
}

/// A typed field on a module or class.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Property {
    #[serde(flatten)]
    pub base: Base,
}

/// An event name, rendered as a string constant.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Event {
    #[serde(flatten)]
    pub base: Base,
}

/// A positional parameter of a signature.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Param {
    #[serde(flatten)]
    pub base: Base,
    /// Whether the source API marks the parameter optional. Decoded and
    /// retained; the rendered parameter list does not distinguish it.
    #[serde(default)]
    pub optional: bool,
}

/// The return value of a signature.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Return {
    #[serde(flatten)]
    pub base: Base,
}

/// One call shape of a method.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Signature {
    #[serde(default, rename = "return")]
    pub ret: Option<Return>,
    #[serde(default)]
    pub params: Vec<Param>,
}

/// A callable member. Overloads keep all their signatures in the model;
/// rendering uses only the first.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Method {
    #[serde(flatten)]
    pub base: Base,
    #[serde(default)]
    pub signatures: Vec<Signature>,
}

/// A class exposed by a module.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Class {
    #[serde(flatten)]
    pub base: Base,
    #[serde(default)]
    pub methods: Vec<Method>,
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// A module of the API surface. Modules nest to arbitrary depth.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Module {
    #[serde(flatten)]
    pub base: Base,
    #[serde(default, rename = "displayName")]
    pub display_name: String,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub methods: Vec<Method>,
    #[serde(default)]
    pub classes: Vec<Class>,
    #[serde(default)]
    pub modules: Vec<Module>,
}

/// The root of an API description document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiFile {
    /// Provenance label, emitted as the leading comment of the output.
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub modules: Vec<Module>,
    /// Free-standing top-level declarations; rendered like modules.
    #[serde(default)]
    pub globals: Vec<Module>,
}
