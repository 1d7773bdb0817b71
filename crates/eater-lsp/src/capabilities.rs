use tower_lsp::lsp_types::*;

/// Define the server capabilities for the 4K Eater LSP
pub fn server_capabilities() -> ServerCapabilities {
    ServerCapabilities {
        text_document_sync: Some(TextDocumentSyncCapability::Kind(
            TextDocumentSyncKind::INCREMENTAL,
        )),

        // Completion with resolve pass-through; triggered inside pragma
        // argument lists and after keywords
        completion_provider: Some(CompletionOptions {
            resolve_provider: Some(true),
            trigger_characters: Some(vec!["(".to_string(), " ".to_string()]),
            ..Default::default()
        }),

        ..Default::default()
    }
}
