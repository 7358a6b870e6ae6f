//! Post-decode validation of the entity tree.

use declgen_core::{Error, Result, symbol};

use crate::{ApiFile, Base, Class, Method, Module};

/// Checks every entity name in the tree before rendering starts.
///
/// An empty name, or one with no identifier characters left after
/// sanitization, would otherwise surface in the middle of a render; checking
/// here turns the defect into a decode-time error.
pub fn validate(api: &ApiFile) -> Result<()> {
    for module in api.modules.iter().chain(api.globals.iter()) {
        validate_module(module)?;
    }
    Ok(())
}

fn validate_module(module: &Module) -> Result<()> {
    check_symbol(&module.base, "module")?;
    for event in &module.events {
        check_symbol(&event.base, "event")?;
    }
    for property in &module.properties {
        check_symbol(&property.base, "property")?;
    }
    for method in &module.methods {
        validate_method(method)?;
    }
    for class in &module.classes {
        validate_class(class)?;
    }
    for nested in &module.modules {
        validate_module(nested)?;
    }
    Ok(())
}

fn validate_class(class: &Class) -> Result<()> {
    check_symbol(&class.base, "class")?;
    for property in &class.properties {
        check_symbol(&property.base, "property")?;
    }
    for method in &class.methods {
        validate_method(method)?;
    }
    Ok(())
}

fn validate_method(method: &Method) -> Result<()> {
    check_symbol(&method.base, "method")?;
    for signature in &method.signatures {
        for param in &signature.params {
            check_named(&param.base, "parameter")?;
        }
    }
    Ok(())
}

/// Entities rendered as identifiers must survive sanitization.
fn check_symbol(base: &Base, kind: &str) -> Result<()> {
    check_named(base, kind)?;
    symbol::sanitize(&base.name).map_err(|_| {
        Error::Schema(format!(
            "{kind} name {:?} has no identifier characters",
            base.name
        ))
    })?;
    Ok(())
}

/// Parameters render under their original name, so only presence matters.
fn check_named(base: &Base, kind: &str) -> Result<()> {
    if base.name.is_empty() {
        return Err(Error::Schema(format!("{kind} with empty name")));
    }
    Ok(())
}
