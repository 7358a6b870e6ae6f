//! Scalar type mapping from schema type tags to Go type expressions.

/// Maps a schema type tag to the Go type used in generated declarations.
///
/// Total over all inputs: the empty tag means a plain string, the known
/// scalar tags map to their 64-bit Go equivalents, and anything else falls
/// through to the opaque `*js.Object` reference type. Only the two literal
/// spellings of each tag are recognized; other casings take the fallthrough.
#[must_use]
pub fn map_type(tag: &str) -> &'static str {
    match tag {
        "" => "string",
        "Integer" | "INTEGER" => "int64",
        "Number" | "NUMBER" => "float64",
        "Function" | "FUNCTION" => "func()",
        "Boolean" | "BOOLEAN" => "bool",
        _ => "*js.Object",
    }
}
