//! Library index model and builder
//!
//! The index is a static snapshot of the bundled shader libraries: one File
//! entry per library file and one Function entry per recognized top-level
//! signature, with the leading comment block attached as documentation. It
//! is written by the offline generator and loaded once at server startup.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::completion::{CompletionEntry, CompletionKind};

/// Extension of the bundled library sources
pub const LIBRARY_EXTENSION: &str = "glsl";

/// First tokens that disqualify a match as a function signature
const CONTROL_KEYWORDS: [&str; 6] = ["return", "if", "else", "while", "for", "switch"];

/// `<type> <name>(<args>)` at the start of a line, leading whitespace allowed.
///
/// Deliberately narrow: multi-line signatures and macro-generated functions
/// are not recognized. That is an accepted limitation of the index, not a
/// parsing bug.
static SIGNATURE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([A-Za-z0-9_]+)\s+([A-Za-z0-9_]+)\s*\(([^)]*)\)")
        .expect("signature pattern compiles")
});

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("libs directory not found at {0}")]
    MissingDirectory(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// The completion index over the bundled shader libraries
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryIndex {
    #[serde(default)]
    pub libs_functions: Vec<CompletionEntry>,
    #[serde(default)]
    pub libs_files: Vec<CompletionEntry>,
}

impl LibraryIndex {
    /// Load a previously generated index file
    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Write the index as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<(), IndexError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Build the index by scanning a library directory.
    ///
    /// Only `.glsl` files are considered; everything else is ignored
    /// silently. Files are visited in directory-listing order and functions
    /// in textual order, with no sorting and no deduplication.
    pub fn build(libs_dir: &Path) -> Result<Self, IndexError> {
        if !libs_dir.is_dir() {
            return Err(IndexError::MissingDirectory(libs_dir.to_path_buf()));
        }

        let mut index = LibraryIndex::default();
        for entry in fs::read_dir(libs_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(LIBRARY_EXTENSION) {
                continue;
            }
            if !path.is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy().into_owned();
            index.libs_files.push(CompletionEntry {
                label: file_name.clone(),
                kind: CompletionKind::File,
                detail: format!("System Library: {file_name}"),
                insert_text: Some(file_name.clone()),
                documentation: None,
            });

            let content = fs::read_to_string(&path)?;
            index
                .libs_functions
                .extend(extract_functions(&file_name, &content));
        }

        Ok(index)
    }
}

/// Scan one library source for function signatures
fn extract_functions(file_name: &str, content: &str) -> Vec<CompletionEntry> {
    let lines: Vec<&str> = content.lines().collect();
    let mut entries = Vec::new();

    for (line_idx, line) in lines.iter().enumerate() {
        let Some(caps) = SIGNATURE_RE.captures(line) else {
            continue;
        };
        let return_type = caps.get(1).map_or("", |m| m.as_str());
        let name = caps.get(2).map_or("", |m| m.as_str());
        let args = caps.get(3).map_or("", |m| m.as_str());

        // Guard against `main` and control statements whose first token
        // would otherwise read as a return type.
        if name == "main" || CONTROL_KEYWORDS.contains(&return_type) {
            continue;
        }

        let signature = format!("{return_type} {name}({args})");
        let comments = collect_doc_comments(&lines, line_idx);
        let documentation = if comments.is_empty() {
            signature.clone()
        } else {
            format!("{}\n\n{}", comments.join("\n"), signature)
        };

        entries.push(CompletionEntry {
            label: name.to_string(),
            kind: CompletionKind::Function,
            detail: format!("{signature} [{file_name}]"),
            insert_text: Some(name.to_string()),
            documentation: Some(documentation),
        });
    }

    entries
}

/// Walk upward from the line above a signature, collecting its comment block.
///
/// Stops at a separator comment, at a blank line once at least one comment
/// has been collected (blank lines before the block are skipped), or at any
/// other non-comment line. Returns the lines in source order with the `//`
/// marker and one following space stripped.
fn collect_doc_comments(lines: &[&str], signature_line: usize) -> Vec<String> {
    let mut collected = Vec::new();

    for line in lines[..signature_line].iter().rev() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if collected.is_empty() {
                continue;
            }
            break;
        }
        let Some(rest) = trimmed.strip_prefix("//") else {
            break;
        };
        if is_separator(rest) {
            break;
        }
        let text = rest.strip_prefix(' ').unwrap_or(rest);
        collected.push(text.to_string());
    }

    collected.reverse();
    collected
}

/// A comment counts as a separator rule when the marker is followed by three
/// or more repetitions of one punctuation character (`//-----`, `//=====`).
fn is_separator(rest: &str) -> bool {
    let rest = rest.trim();
    let mut chars = rest.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    rest.len() >= 3 && first.is_ascii_punctuation() && chars.all(|c| c == first)
}
