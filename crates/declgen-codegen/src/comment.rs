//! Documentation comment assembly.

use declgen_core::{Result, symbol};
use declgen_schema::Base;

use crate::RenderOptions;

/// Builds the `//` comment block for an entity.
///
/// Returns the empty string when comments are disabled or the entity carries
/// no documentation. Otherwise the block is a header line naming the
/// sanitized identifier followed by the non-empty documentation fields in
/// order raw, short, long, with internal newlines re-prefixed so the whole
/// block stays a well-formed comment.
pub fn format_comment(base: &Base, options: &RenderOptions) -> Result<String> {
    if !options.comments {
        return Ok(String::new());
    }
    let mut fields = Vec::new();
    if !base.text_raw.is_empty() {
        fields.push(base.text_raw.clone());
    }
    if !base.short_desc.is_empty() {
        fields.push(plain_text(&base.short_desc, options));
    }
    if !base.desc.is_empty() {
        fields.push(plain_text(&base.desc, options));
    }
    if fields.is_empty() {
        return Ok(String::new());
    }
    let sym = symbol::sanitize(&base.name)?;
    let body = fields.join("\n").replace('\n', "\n//");
    Ok(format!("//{sym} docs\n//{body}"))
}

/// Reduces a description field to plain text when markup stripping is on.
///
/// Tag removal happens before entity decoding, so an escaped angle bracket
/// in the text never reads as a tag. Falls back to the unconverted field
/// when the markup does not scan.
fn plain_text(text: &str, options: &RenderOptions) -> String {
    if !options.strip_markup {
        return text.to_string();
    }
    match strip_tags(text) {
        Some(stripped) => html_escape::decode_html_entities(&stripped).into_owned(),
        None => text.to_string(),
    }
}

/// Removes well-formed `<...>` tag spans. `None` when a tag never closes.
fn strip_tags(input: &str) -> Option<String> {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let end = tail.find('>')?;
        rest = &tail[end + 1..];
    }
    out.push_str(rest);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn documented(name: &str, desc: &str) -> Base {
        Base {
            name: name.to_string(),
            desc: desc.to_string(),
            ..Default::default()
        }
    }

    fn enabled() -> RenderOptions {
        RenderOptions {
            comments: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_disabled_comments_yield_empty_string() {
        let base = documented("mode", "the file mode");
        let out = format_comment(&base, &RenderOptions::default()).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn test_undocumented_entity_yields_empty_string() {
        let base = Base {
            name: "mode".to_string(),
            ..Default::default()
        };
        let out = format_comment(&base, &enabled()).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn test_header_names_sanitized_identifier() {
        let base = documented("fs.mode", "the file mode");
        let out = format_comment(&base, &enabled()).unwrap();
        assert!(out.starts_with("//Fsmode docs\n"));
    }

    #[test]
    fn test_fields_in_raw_short_long_order() {
        let base = Base {
            name: "mode".to_string(),
            text_raw: "`mode` {Integer}".to_string(),
            short_desc: "the mode".to_string(),
            desc: "The file mode.".to_string(),
            ..Default::default()
        };
        let out = format_comment(&base, &enabled()).unwrap();
        assert_eq!(
            out,
            "//Mode docs\n//`mode` {Integer}\n//the mode\n//The file mode."
        );
    }

    #[test]
    fn test_internal_newlines_stay_commented() {
        let base = documented("mode", "first line\nsecond line");
        let out = format_comment(&base, &enabled()).unwrap();
        for line in out.lines() {
            assert!(line.starts_with("//"), "uncommented line {line:?}");
        }
    }

    #[test]
    fn test_markup_is_stripped_from_descriptions() {
        let base = documented("mode", "<p>The <code>mode</code> bits.</p>");
        let out = format_comment(&base, &enabled()).unwrap();
        assert!(out.contains("The mode bits."));
        assert!(!out.contains('<'));
    }

    #[test]
    fn test_entities_are_decoded() {
        let base = documented("mode", "a &amp; b");
        let out = format_comment(&base, &enabled()).unwrap();
        assert!(out.contains("a & b"));
    }

    #[test]
    fn test_raw_text_is_never_converted() {
        let base = Base {
            name: "mode".to_string(),
            text_raw: "<code>mode</code>".to_string(),
            ..Default::default()
        };
        let out = format_comment(&base, &enabled()).unwrap();
        assert!(out.contains("<code>mode</code>"));
    }

    #[test]
    fn test_malformed_markup_falls_back_to_raw_text() {
        let base = documented("mode", "broken <tag without end");
        let out = format_comment(&base, &enabled()).unwrap();
        assert!(out.contains("broken <tag without end"));
    }

    #[test]
    fn test_stripping_can_be_turned_off() {
        let options = RenderOptions {
            comments: true,
            strip_markup: false,
            ..Default::default()
        };
        let base = documented("mode", "<p>kept</p>");
        let out = format_comment(&base, &options).unwrap();
        assert!(out.contains("<p>kept</p>"));
    }
}
