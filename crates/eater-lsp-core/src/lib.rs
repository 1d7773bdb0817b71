//! Core completion logic for the 4K Eater shader dialect
//!
//! This crate provides the completion machinery shared by the LSP server
//! and the offline index generator.
//!
//! # Features
//!
//! - **Completion tables**: static suggestions for system uniforms, uniform
//!   declarations, pragma directives, switch flags and boolean literals
//! - **Context classification**: maps the current line prefix to the
//!   completion set that applies there
//! - **Library index**: builds, stores and loads the completion index for
//!   the bundled shader libraries
//! - **Include scanning**: lists includable shader files relative to the
//!   edited file, widened by the project root when one is found
//!
//! # Example
//!
//! ```
//! use eater_lsp_core::{LibraryIndex, Resolver};
//!
//! let resolver = Resolver::new(LibraryIndex::default());
//! let items = resolver.resolve("uniform ", 8, None);
//! assert!(items.iter().any(|item| item.label == "float u_time"));
//! ```

pub mod completion;
pub mod context;
pub mod includes;
pub mod index;
pub mod resolver;

// Re-export main types for convenience
pub use completion::{
    get_boolean_literals, get_pragma_directives, get_switch_flags, get_system_uniforms,
    get_uniform_suggestions, CompletionEntry, CompletionKind,
};
pub use context::{classify, current_line_prefix, CompletionContext};
pub use includes::{
    find_project_root, relative_path, scan_directory, ScanOrigin, PROJECT_MANIFEST_FILENAME,
};
pub use index::{IndexError, LibraryIndex};
pub use resolver::Resolver;
