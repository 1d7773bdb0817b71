//! Completion-context classification
//!
//! The current line's prefix (document start to caret, truncated to the last
//! newline) decides which completion set applies. Classification is purely
//! textual; the dialect's pragmas are line-oriented, so no parsing is needed.

/// The completion context resolved from the current line prefix
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompletionContext {
    /// Inside `#pragma include(`: include paths
    IncludePath,
    /// Inside `#pragma ... switch(`: feature-switch flags
    SwitchFlag,
    /// A bare `#pragma`: directive names
    PragmaDirective,
    /// Inside `#pragma label(` or `#pragma range(`: uniforms declared in
    /// the document
    UniformParameter,
    /// Inside `#pragma switch(` when the pragma prefix rules did not already
    /// claim the line; the flag list again, or boolean literals once a comma
    /// separates the flag from its value
    SwitchArgument { has_comma: bool },
    /// A `uniform` declaration in progress: types and standard declarations
    UniformDeclaration,
    /// Anything else: system uniforms and library functions
    General,
}

/// Extract the current line's prefix: everything between the last newline
/// before the caret and the caret itself.
///
/// `offset` is a byte offset; it is clamped to the document and snapped back
/// to the nearest character boundary.
pub fn current_line_prefix(text: &str, offset: usize) -> &str {
    let mut end = offset.min(text.len());
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    let head = &text[..end];
    match head.rfind('\n') {
        Some(newline) => &head[newline + 1..],
        None => head,
    }
}

/// Classify a line prefix into the completion context that applies there.
///
/// The first matching branch wins; no branch falls through to another. The
/// `include(`/`switch(` checks look at the untrimmed prefix; the
/// starts-with checks use the trimmed form.
pub fn classify(line_prefix: &str) -> CompletionContext {
    let trimmed = line_prefix.trim();

    if trimmed.starts_with("#pragma") {
        if line_prefix.contains("include(") {
            return CompletionContext::IncludePath;
        }
        if line_prefix.contains("switch(") {
            return CompletionContext::SwitchFlag;
        }
        if trimmed == "#pragma" {
            return CompletionContext::PragmaDirective;
        }
    }

    if trimmed.starts_with("#pragma label(") || trimmed.starts_with("#pragma range(") {
        return CompletionContext::UniformParameter;
    }

    if trimmed.starts_with("#pragma switch(") {
        return CompletionContext::SwitchArgument {
            has_comma: trimmed.contains(','),
        };
    }

    if trimmed.starts_with("uniform ") || trimmed == "uniform" {
        return CompletionContext::UniformDeclaration;
    }

    CompletionContext::General
}
