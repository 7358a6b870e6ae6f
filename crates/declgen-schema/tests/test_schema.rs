//! Tests for API description decoding and validation.

use declgen_schema::decode;

#[test]
fn test_decode_module_tree() {
    let source = r#"{
        "source": "doc/api/fs.md",
        "modules": [{
            "textRaw": "File System",
            "name": "fs",
            "properties": [{"name": "mode", "type": "Integer"}],
            "methods": [{
                "name": "rename",
                "signatures": [
                    {"params": [{"name": "oldPath"}, {"name": "newPath"}]},
                    {"params": [{"name": "oldPath"}]}
                ]
            }],
            "classes": [{"name": "fs.Stats", "methods": [], "properties": []}],
            "modules": [{"name": "promises", "methods": [{"name": "access"}]}]
        }]
    }"#;

    let api = decode(source).unwrap();
    assert_eq!(api.source, "doc/api/fs.md");
    assert_eq!(api.modules.len(), 1);

    let fs = &api.modules[0];
    assert_eq!(fs.base.name, "fs");
    assert_eq!(fs.base.text_raw, "File System");
    assert_eq!(fs.properties[0].base.type_tag, "Integer");
    // All signatures are retained at the model level.
    assert_eq!(fs.methods[0].signatures.len(), 2);
    assert_eq!(fs.methods[0].signatures[0].params.len(), 2);
    assert_eq!(fs.classes[0].base.name, "fs.Stats");
    assert_eq!(fs.modules[0].base.name, "promises");
}

#[test]
fn test_decode_absent_lists_are_empty() {
    let api = decode(r#"{"source":"test","modules":[{"name":"os"}]}"#).unwrap();
    let os = &api.modules[0];
    assert!(os.events.is_empty());
    assert!(os.properties.is_empty());
    assert!(os.methods.is_empty());
    assert!(os.classes.is_empty());
    assert!(os.modules.is_empty());
    assert!(api.globals.is_empty());
}

#[test]
fn test_decode_preserves_input_order() {
    let source = r#"{"modules":[{
        "name": "events",
        "events": [{"name": "newListener"}, {"name": "removeListener"}]
    }]}"#;
    let api = decode(source).unwrap();
    let names: Vec<&str> = api.modules[0]
        .events
        .iter()
        .map(|e| e.base.name.as_str())
        .collect();
    assert_eq!(names, ["newListener", "removeListener"]);
}

#[test]
fn test_decode_ignores_unknown_fields() {
    let source = r#"{"modules":[{
        "name": "os",
        "meta": {"added": ["v0.3.3"]},
        "stability": 2
    }]}"#;
    assert!(decode(source).is_ok());
}

#[test]
fn test_decode_keeps_optional_and_display_name() {
    let source = r#"{"modules":[{
        "name": "fs",
        "displayName": "File System",
        "methods": [{
            "name": "open",
            "signatures": [{"params": [{"name": "flags", "optional": true}]}]
        }]
    }]}"#;
    let api = decode(source).unwrap();
    assert_eq!(api.modules[0].display_name, "File System");
    assert!(api.modules[0].methods[0].signatures[0].params[0].optional);
}

#[test]
fn test_decode_rejects_malformed_json() {
    assert!(decode("{ not json").is_err());
    assert!(decode("").is_err());
}

#[test]
fn test_decode_rejects_missing_name() {
    let source = r#"{"modules":[{"type": "module"}]}"#;
    assert!(decode(source).is_err());
}

#[test]
fn test_validate_rejects_empty_name() {
    let source = r#"{"modules":[{"name": ""}]}"#;
    assert!(decode(source).is_err());
}

#[test]
fn test_validate_rejects_names_with_no_identifier_characters() {
    let source = r#"{"modules":[{"name": "os", "properties": [{"name": "__ ()"}]}]}"#;
    let err = decode(source).unwrap_err();
    assert!(err.to_string().contains("identifier"));
}

#[test]
fn test_validate_walks_nested_modules() {
    let source = r#"{"globals":[{
        "name": "process",
        "modules": [{"name": "env", "events": [{"name": ""}]}]
    }]}"#;
    assert!(decode(source).is_err());
}
