use tower_lsp::lsp_types::{Position, TextDocumentContentChangeEvent};

/// Represents an open document in the LSP server
pub struct Document {
    /// The current text content of the document
    text: String,
}

impl Document {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Apply one sync change: a ranged incremental edit, or a full
    /// replacement when the change carries no range.
    pub fn apply_change(&mut self, change: TextDocumentContentChangeEvent) {
        match change.range {
            Some(range) => {
                let start = self.offset_at(range.start);
                let end = self.offset_at(range.end).max(start);
                self.text.replace_range(start..end, &change.text);
            }
            None => self.text = change.text,
        }
    }

    /// Byte offset of an LSP position. Positions count UTF-16 code units;
    /// out-of-range positions clamp to the end of their line or document.
    pub fn offset_at(&self, position: Position) -> usize {
        let mut offset = 0;
        let mut line = 0u32;

        for l in self.text.split_inclusive('\n') {
            if line == position.line {
                let mut utf16 = 0u32;
                for (byte_idx, ch) in l.char_indices() {
                    if utf16 >= position.character {
                        return offset + byte_idx;
                    }
                    utf16 += ch.len_utf16() as u32;
                }
                // Past the end of the line: clamp to its content, before any
                // line terminator
                let content = l.strip_suffix('\n').unwrap_or(l);
                let content = content.strip_suffix('\r').unwrap_or(content);
                return offset + content.len();
            }
            offset += l.len();
            line += 1;
        }

        self.text.len()
    }
}
