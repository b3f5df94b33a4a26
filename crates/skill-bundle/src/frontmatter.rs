//! Markdown header splitting.
//!
//! Skill and command files open with a `---`-fenced YAML header followed
//! by a markdown body. The splitter is shape-agnostic: it locates the
//! fences and hands back the raw header text, and each caller parses
//! that into whatever header struct it expects.

/// A markdown document split into its raw YAML header and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<'a> {
    /// Raw text between the fences, `None` when the file has no header.
    pub header: Option<&'a str>,
    /// Everything after the closing fence, or the whole file without one.
    pub body: &'a str,
}

/// Split `content` into a YAML header and a markdown body.
///
/// The opening fence must be the first line. An unclosed fence is
/// treated as no header at all, so a document that merely begins with a
/// horizontal rule still reads as plain markdown. Handles LF and CRLF
/// line endings and a closing fence on the last line without a trailing
/// newline.
#[must_use]
pub fn split_document(content: &str) -> Document<'_> {
    let header_start = match content.split_inclusive('\n').next() {
        Some(opener) if opener.trim_end() == "---" => opener.len(),
        _ => {
            return Document {
                header: None,
                body: content,
            };
        }
    };
    let mut offset = header_start;

    for line in content[header_start..].split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Document {
                header: Some(&content[header_start..offset]),
                body: &content[offset + line.len()..],
            };
        }
        offset += line.len();
    }

    Document {
        header: None,
        body: content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_standard_header() {
        let doc = split_document("---\nname: test\n---\n# Body\n");
        assert_eq!(doc.header, Some("name: test\n"));
        assert_eq!(doc.body, "# Body\n");
    }

    #[test]
    fn no_header_returns_whole_body() {
        let content = "# Just Markdown\nNo header here.";
        let doc = split_document(content);
        assert_eq!(doc.header, None);
        assert_eq!(doc.body, content);
    }

    #[test]
    fn empty_header_is_present_but_blank() {
        let doc = split_document("---\n---\nBody content");
        assert_eq!(doc.header, Some(""));
        assert_eq!(doc.body, "Body content");
    }

    #[test]
    fn handles_crlf_line_endings() {
        let doc = split_document("---\r\nname: test\r\n---\r\nBody");
        assert_eq!(doc.header, Some("name: test\r\n"));
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn closing_fence_at_eof_leaves_empty_body() {
        let doc = split_document("---\nname: test\n---");
        assert_eq!(doc.header, Some("name: test\n"));
        assert_eq!(doc.body, "");
    }

    #[test]
    fn unclosed_fence_is_not_a_header() {
        let content = "---\nname: test\nno closing fence";
        let doc = split_document(content);
        assert_eq!(doc.header, None);
        assert_eq!(doc.body, content);
    }

    #[test]
    fn horizontal_rules_in_body_survive() {
        let doc = split_document("---\nname: test\n---\n# Title\n\n---\n\nMore");
        assert_eq!(doc.header, Some("name: test\n"));
        assert_eq!(doc.body, "# Title\n\n---\n\nMore");
    }

    #[test]
    fn empty_input_has_no_header() {
        let doc = split_document("");
        assert_eq!(doc.header, None);
        assert_eq!(doc.body, "");
    }

    #[test]
    fn lone_fence_is_not_a_header() {
        let doc = split_document("---");
        assert_eq!(doc.header, None);
        assert_eq!(doc.body, "---");
    }

    #[test]
    fn indented_fence_does_not_open_a_header() {
        let content = " ---\nname: test\n---\n";
        let doc = split_document(content);
        assert_eq!(doc.header, None);
        assert_eq!(doc.body, content);
    }
}
