//! Options threaded through the declaration renderer.

/// Knobs for one rendering pass.
///
/// Carried explicitly through every `decl`/`comment` call; the renderer
/// keeps no ambient state.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Emit documentation comment blocks above declarations.
    pub comments: bool,
    /// Convert HTML markup in descriptions to plain text.
    pub strip_markup: bool,
    /// Package name emitted in the generated file header.
    pub package: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            comments: false,
            strip_markup: true,
            package: "nodejs".to_string(),
        }
    }
}
