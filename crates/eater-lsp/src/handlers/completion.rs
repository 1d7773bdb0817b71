use std::path::PathBuf;

use eater_lsp_core::{CompletionEntry, CompletionKind, Resolver};
use tower_lsp::lsp_types::*;

use crate::document::Document;

/// Get completion items for a position in the document
pub fn get_completions(
    doc: &Document,
    position: Position,
    uri: &Url,
    resolver: &Resolver,
) -> Vec<CompletionItem> {
    let offset = doc.offset_at(position);
    let file_path: Option<PathBuf> = uri.to_file_path().ok();

    resolver
        .resolve(doc.text(), offset, file_path.as_deref())
        .into_iter()
        .map(convert_to_lsp_completion)
        .collect()
}

/// Convert a core completion entry to an LSP completion item
fn convert_to_lsp_completion(entry: CompletionEntry) -> CompletionItem {
    let kind = match entry.kind {
        CompletionKind::Function => CompletionItemKind::FUNCTION,
        CompletionKind::File => CompletionItemKind::FILE,
        CompletionKind::Variable => CompletionItemKind::VARIABLE,
        CompletionKind::Keyword => CompletionItemKind::KEYWORD,
        CompletionKind::Class => CompletionItemKind::CLASS,
        CompletionKind::Snippet => CompletionItemKind::SNIPPET,
        CompletionKind::EnumMember => CompletionItemKind::ENUM_MEMBER,
    };

    let detail = if entry.detail.is_empty() {
        None
    } else {
        Some(entry.detail)
    };

    CompletionItem {
        label: entry.label,
        kind: Some(kind),
        detail,
        documentation: entry.documentation.map(Documentation::String),
        insert_text: entry.insert_text,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eater_lsp_core::LibraryIndex;

    fn file_url(path: &std::path::Path) -> Url {
        Url::from_file_path(path).expect("absolute path")
    }

    #[test]
    fn converts_kinds_and_optional_fields() {
        let entry = CompletionEntry {
            label: "include".to_string(),
            kind: CompletionKind::Keyword,
            detail: String::new(),
            insert_text: Some(" include(".to_string()),
            documentation: None,
        };

        let item = convert_to_lsp_completion(entry);
        assert_eq!(item.label, "include");
        assert_eq!(item.kind, Some(CompletionItemKind::KEYWORD));
        assert_eq!(item.detail, None);
        assert_eq!(item.insert_text.as_deref(), Some(" include("));
        assert!(item.documentation.is_none());
    }

    #[test]
    fn converts_documentation_to_plain_string() {
        let entry = CompletionEntry {
            label: "noise".to_string(),
            kind: CompletionKind::Function,
            detail: "float noise(vec2 p) [noise.glsl]".to_string(),
            insert_text: Some("noise".to_string()),
            documentation: Some("Value noise.\n\nfloat noise(vec2 p)".to_string()),
        };

        let item = convert_to_lsp_completion(entry);
        assert_eq!(item.kind, Some(CompletionItemKind::FUNCTION));
        match item.documentation {
            Some(Documentation::String(text)) => {
                assert_eq!(text, "Value noise.\n\nfloat noise(vec2 p)")
            }
            other => panic!("expected plain string documentation, got {:?}", other),
        }
    }

    #[test]
    fn uniform_line_completions_through_the_handler() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("main.frag");
        std::fs::write(&path, "uniform ").expect("write");

        let doc = Document::new("uniform ".to_string());
        let resolver = Resolver::new(LibraryIndex::default());
        let items = get_completions(&doc, Position::new(0, 8), &file_url(&path), &resolver);

        assert!(items
            .iter()
            .any(|item| item.label == "float u_time"
                && item.kind == Some(CompletionItemKind::SNIPPET)
                && item.insert_text.as_deref() == Some("float u_time;")));
        assert!(items
            .iter()
            .any(|item| item.label == "sampler2D"
                && item.kind == Some(CompletionItemKind::CLASS)));
    }

    #[test]
    fn default_context_serves_system_uniforms() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("main.frag");
        std::fs::write(&path, "").expect("write");

        let doc = Document::new(String::new());
        let resolver = Resolver::new(LibraryIndex::default());
        let items = get_completions(&doc, Position::new(0, 0), &file_url(&path), &resolver);

        assert_eq!(items[0].label, "u_time");
        assert_eq!(items[0].kind, Some(CompletionItemKind::VARIABLE));
        assert_eq!(items[0].detail.as_deref(), Some("float: Time in seconds"));
    }

    #[test]
    fn include_completions_scan_the_documents_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("common.glsl"), "").expect("write");
        let path = dir.path().join("main.frag");
        std::fs::write(&path, "#pragma include(").expect("write");

        let doc = Document::new("#pragma include(".to_string());
        let resolver = Resolver::new(LibraryIndex::default());
        let items = get_completions(&doc, Position::new(0, 16), &file_url(&path), &resolver);

        assert!(items
            .iter()
            .any(|item| item.label == "common.glsl"
                && item.kind == Some(CompletionItemKind::FILE)
                && item.detail.as_deref() == Some("Local: common.glsl")));
    }
}
