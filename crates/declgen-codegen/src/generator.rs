//! The declaration engine: per-entity `decl`/`comment` rendering.
//!
//! Rendering is a pure fold over the decoded tree. Every entity implements
//! the [`Declare`] capability; parents compose their children's output in a
//! fixed order per entity kind.

use declgen_core::{Result, symbol, types};
use declgen_schema::{
    ApiFile, Class, Event, Method, Module, Param, Property, Return, Signature,
};

use crate::RenderOptions;
use crate::comment::format_comment;

/// Rendering capability implemented by every schema entity.
pub trait Declare {
    /// The declaration text for this entity.
    fn decl(&self, options: &RenderOptions) -> Result<String>;

    /// The documentation block rendered above the declaration.
    fn comment(&self, _options: &RenderOptions) -> Result<String> {
        Ok(String::new())
    }
}

/// Joins the declarations of a sequence of entities.
///
/// Each entry is preceded by its comment block when one is present; entities
/// that declare nothing are skipped entirely. An empty slice yields the
/// empty string.
pub fn render_list<T: Declare>(items: &[T], options: &RenderOptions) -> Result<String> {
    let mut entries = Vec::new();
    for item in items {
        let decl = item.decl(options)?;
        if decl.is_empty() {
            continue;
        }
        let comment = item.comment(options)?;
        if !comment.is_empty() {
            entries.push(comment);
        }
        entries.push(decl);
    }
    Ok(entries.join("\n\t"))
}

/// Assembles a struct block: the embedded host object first, then the
/// non-empty member sections, tab-indented.
fn struct_block(sym: &str, sections: &[String]) -> String {
    let mut members = vec!["*js.Object".to_string()];
    members.extend(sections.iter().filter(|s| !s.is_empty()).cloned());
    format!("type {sym} struct {{\n\t{}\n}}\n", members.join("\n\t"))
}

impl Declare for Property {
    fn decl(&self, _options: &RenderOptions) -> Result<String> {
        let sym = symbol::sanitize(&self.base.name)?;
        Ok(format!(
            "{sym} {} `js:\"{}\"`",
            types::map_type(&self.base.type_tag),
            self.base.name
        ))
    }

    fn comment(&self, options: &RenderOptions) -> Result<String> {
        format_comment(&self.base, options)
    }
}

impl Declare for Event {
    // The constant's value keeps the original name; only the identifier is
    // sanitized.
    fn decl(&self, _options: &RenderOptions) -> Result<String> {
        let sym = symbol::sanitize(&self.base.name)?;
        Ok(format!("Evt{sym} = \"{}\"", self.base.name))
    }

    fn comment(&self, options: &RenderOptions) -> Result<String> {
        format_comment(&self.base, options)
    }
}

impl Declare for Param {
    fn decl(&self, _options: &RenderOptions) -> Result<String> {
        Ok(format!(
            "{} {}",
            self.base.name,
            types::map_type(&self.base.type_tag)
        ))
    }
}

impl Declare for Return {
    fn decl(&self, _options: &RenderOptions) -> Result<String> {
        Ok(types::map_type(&self.base.type_tag).to_string())
    }
}

impl Declare for Signature {
    fn decl(&self, options: &RenderOptions) -> Result<String> {
        let params = self
            .params
            .iter()
            .map(|p| p.decl(options))
            .collect::<Result<Vec<_>>>()?
            .join(",");
        let mut out = format!("func({params})");
        if let Some(ret) = &self.ret {
            out.push_str(&format!(" ({})", ret.decl(options)?));
        }
        Ok(out)
    }
}

impl Declare for Method {
    // Overload sets collapse to the first signature. The stored list is left
    // untouched, so rendering is idempotent.
    fn decl(&self, options: &RenderOptions) -> Result<String> {
        let sym = symbol::sanitize(&self.base.name)?;
        let mut parts = vec![sym];
        if let Some(signature) = self.signatures.first() {
            parts.push(signature.decl(options)?);
        }
        parts.push(format!("`js:\"{}\"`", self.base.name));
        Ok(parts.join(" "))
    }

    fn comment(&self, options: &RenderOptions) -> Result<String> {
        format_comment(&self.base, options)
    }
}

impl Declare for Class {
    fn decl(&self, options: &RenderOptions) -> Result<String> {
        if self.methods.is_empty() && self.properties.is_empty() {
            return Ok(String::new());
        }
        let sym = symbol::sanitize(&self.base.name)?;
        let sections = [
            render_list(&self.properties, options)?,
            render_list(&self.methods, options)?,
        ];
        Ok(struct_block(&sym, &sections))
    }

    fn comment(&self, options: &RenderOptions) -> Result<String> {
        format_comment(&self.base, options)
    }
}

impl Declare for Module {
    // Member order is fixed: nested modules, classes, event constants, then
    // the module's own struct.
    fn decl(&self, options: &RenderOptions) -> Result<String> {
        let direct = self.events.len()
            + self.properties.len()
            + self.methods.len()
            + self.classes.len();
        let nested = render_list(&self.modules, options)?;
        if direct == 0 {
            // A module that only groups other modules declares nothing of
            // its own.
            return Ok(nested);
        }
        let mut out = nested;
        out.push_str(&render_list(&self.classes, options)?);
        let events = render_list(&self.events, options)?;
        if !events.is_empty() {
            out.push_str(&format!("\nconst (\n\t{events}\n)\n"));
        }
        let sym = symbol::sanitize(&self.base.name)?;
        let sections = [
            render_list(&self.properties, options)?,
            render_list(&self.methods, options)?,
        ];
        out.push('\n');
        out.push_str(&struct_block(&sym, &sections));
        Ok(out)
    }

    fn comment(&self, options: &RenderOptions) -> Result<String> {
        format_comment(&self.base, options)
    }
}

impl Declare for ApiFile {
    fn decl(&self, options: &RenderOptions) -> Result<String> {
        let mut out = format!(
            "//{}\npackage {}\n\nimport (\n\t\"github.com/gopherjs/gopherjs/js\"\n)\n",
            self.source, options.package
        );
        out.push_str(&render_list(&self.modules, options)?);
        out.push_str(&render_list(&self.globals, options)?);
        Ok(out)
    }
}
