//! Context-sensitive completion resolution
//!
//! `Resolver` owns the loaded library index and dispatches a completion
//! request to the set that applies at the caret. It is constructed once at
//! startup and immutable afterwards; aside from live directory scans it is a
//! pure function of the document text, caret offset and file location.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::completion::{self, CompletionEntry, CompletionKind};
use crate::context::{classify, current_line_prefix, CompletionContext};
use crate::includes::{find_project_root, scan_directory, ScanOrigin};
use crate::index::LibraryIndex;

/// Uniform declarations whose names can be targeted by `#pragma label(...)`
/// and `#pragma range(...)`
static UNIFORM_DECL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"uniform\s+(?:float|vec2|vec3|vec4)\s+([A-Za-z0-9_]+);")
        .expect("uniform pattern compiles")
});

pub struct Resolver {
    index: LibraryIndex,
}

impl Resolver {
    pub fn new(index: LibraryIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &LibraryIndex {
        &self.index
    }

    /// Resolve the completions that apply at `offset` in `text`.
    ///
    /// `file_path` is the on-disk location of the document when it has one;
    /// without it, include completion falls back to the static library
    /// entries alone.
    pub fn resolve(
        &self,
        text: &str,
        offset: usize,
        file_path: Option<&Path>,
    ) -> Vec<CompletionEntry> {
        let prefix = current_line_prefix(text, offset);

        match classify(prefix) {
            CompletionContext::IncludePath => self.include_completions(file_path),
            CompletionContext::SwitchFlag => completion::get_switch_flags().to_vec(),
            CompletionContext::PragmaDirective => completion::get_pragma_directives().to_vec(),
            CompletionContext::UniformParameter => document_uniforms(text),
            CompletionContext::SwitchArgument { has_comma } => {
                if has_comma {
                    completion::get_boolean_literals().to_vec()
                } else {
                    completion::get_switch_flags().to_vec()
                }
            }
            CompletionContext::UniformDeclaration => {
                completion::get_uniform_suggestions().to_vec()
            }
            CompletionContext::General => {
                let mut items = completion::get_system_uniforms().to_vec();
                items.extend(self.index.libs_functions.iter().cloned());
                items
            }
        }
    }

    /// Static library files first, then the live scans: the edited file's
    /// directory, then the project's `shaders/` and `libs/` directories when
    /// a project root is discoverable.
    fn include_completions(&self, file_path: Option<&Path>) -> Vec<CompletionEntry> {
        let mut items = self.index.libs_files.clone();

        let Some(current_dir) = file_path.and_then(Path::parent) else {
            return items;
        };

        items.extend(scan_directory(current_dir, current_dir, ScanOrigin::Local));

        if let Some(root) = find_project_root(current_dir) {
            items.extend(scan_directory(
                &root.join("shaders"),
                current_dir,
                ScanOrigin::ProjectShader,
            ));
            items.extend(scan_directory(
                &root.join("libs"),
                current_dir,
                ScanOrigin::ProjectLib,
            ));
        }

        items
    }
}

/// Scan the whole document for uniform declarations, in order of occurrence,
/// duplicates included.
fn document_uniforms(text: &str) -> Vec<CompletionEntry> {
    UNIFORM_DECL_RE
        .captures_iter(text)
        .map(|caps| CompletionEntry {
            label: caps[1].to_string(),
            kind: CompletionKind::Variable,
            detail: String::new(),
            insert_text: None,
            documentation: None,
        })
        .collect()
}
