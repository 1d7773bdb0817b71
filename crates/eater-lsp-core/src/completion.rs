//! Core completion data for the 4K Eater shader dialect
//! Provides completion entries that can be used by the LSP server and CLI

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A completion entry that can be used by both the LSP server and CLI
///
/// Doubles as the on-disk schema of the library index file, so the serde
/// names follow the index format (`insertText`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionEntry {
    pub label: String,
    pub kind: CompletionKind,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub detail: String,
    /// Text to insert; the label is inserted when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

/// The kind of completion entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompletionKind {
    Function,
    File,
    Variable,
    Keyword,
    Class,
    Snippet,
    EnumMember,
}

/// System uniforms provided by the host at draw time
pub static SYSTEM_UNIFORMS: Lazy<Vec<CompletionEntry>> = Lazy::new(build_system_uniforms);

/// Feature-switch flags understood by `#pragma switch(...)`
pub static SWITCH_FLAGS: Lazy<Vec<CompletionEntry>> = Lazy::new(build_switch_flags);

/// Suggestions offered after `uniform ` (standard declarations plus types)
pub static UNIFORM_SUGGESTIONS: Lazy<Vec<CompletionEntry>> = Lazy::new(build_uniform_suggestions);

/// Directive names offered after a bare `#pragma`
pub static PRAGMA_DIRECTIVES: Lazy<Vec<CompletionEntry>> = Lazy::new(build_pragma_directives);

/// Boolean literals accepted as the second `#pragma switch(...)` argument
pub static BOOLEAN_LITERALS: Lazy<Vec<CompletionEntry>> = Lazy::new(build_boolean_literals);

/// Get the system uniform completions
pub fn get_system_uniforms() -> &'static [CompletionEntry] {
    &SYSTEM_UNIFORMS
}

/// Get the known feature-switch flag completions
pub fn get_switch_flags() -> &'static [CompletionEntry] {
    &SWITCH_FLAGS
}

/// Get the uniform-declaration completions
pub fn get_uniform_suggestions() -> &'static [CompletionEntry] {
    &UNIFORM_SUGGESTIONS
}

/// Get the pragma directive-name completions
pub fn get_pragma_directives() -> &'static [CompletionEntry] {
    &PRAGMA_DIRECTIVES
}

/// Get the boolean literal completions
pub fn get_boolean_literals() -> &'static [CompletionEntry] {
    &BOOLEAN_LITERALS
}

fn variable(label: &str, detail: &str) -> CompletionEntry {
    CompletionEntry {
        label: label.to_string(),
        kind: CompletionKind::Variable,
        detail: detail.to_string(),
        insert_text: None,
        documentation: None,
    }
}

fn keyword(label: &str, detail: &str) -> CompletionEntry {
    CompletionEntry {
        label: label.to_string(),
        kind: CompletionKind::Keyword,
        detail: detail.to_string(),
        insert_text: None,
        documentation: None,
    }
}

fn build_system_uniforms() -> Vec<CompletionEntry> {
    vec![
        variable("u_time", "float: Time in seconds"),
        variable("iTime", "float: Shadertoy compatibility"),
        variable("u_resolution", "vec2: Viewport resolution"),
        variable("iResolution", "vec3: Shadertoy compatibility"),
        variable("u_mouse", "vec4: Mouse coordinates"),
        variable("iMouse", "vec4: Shadertoy compatibility"),
        variable("u_mouse_rel", "vec2: Relative mouse (wrap-around)"),
        variable("TexCoord", "vec2: Texture coordinates"),
        variable("FragColor", "vec4: Output color"),
    ]
}

fn build_switch_flags() -> Vec<CompletionEntry> {
    vec![CompletionEntry {
        label: "FORK_DISABLE_MOUSE_LOOK".to_string(),
        kind: CompletionKind::EnumMember,
        detail: "Disable mouse-based camera rotation [camera.glsl]".to_string(),
        insert_text: None,
        documentation: None,
    }]
}

fn build_uniform_suggestions() -> Vec<CompletionEntry> {
    let snippet = |label: &str, detail: &str, insert: &str| CompletionEntry {
        label: label.to_string(),
        kind: CompletionKind::Snippet,
        detail: detail.to_string(),
        insert_text: Some(insert.to_string()),
        documentation: None,
    };
    let class = |label: &str, detail: &str| CompletionEntry {
        label: label.to_string(),
        kind: CompletionKind::Class,
        detail: detail.to_string(),
        insert_text: None,
        documentation: None,
    };

    vec![
        // === STANDARD DECLARATIONS ===
        snippet("float u_time", "Standard time uniform", "float u_time;"),
        snippet("vec2 u_resolution", "Standard resolution uniform", "vec2 u_resolution;"),
        snippet("vec4 u_mouse", "Standard mouse uniform", "vec4 u_mouse;"),
        snippet("vec2 u_mouse_rel", "Relative mouse uniform", "vec2 u_mouse_rel;"),
        // Shadertoy compatibility
        snippet("float iTime", "Shadertoy time", "float iTime;"),
        snippet("vec3 iResolution", "Shadertoy resolution", "vec3 iResolution;"),
        snippet("vec4 iMouse", "Shadertoy mouse", "vec4 iMouse;"),
        // === GENERIC TYPES ===
        keyword("float", "Floating point"),
        keyword("int", "Integer"),
        keyword("bool", "Boolean"),
        class("vec2", "Vector 2"),
        class("vec3", "Vector 3"),
        class("vec4", "Vector 4"),
        class("mat3", "Matrix 3x3"),
        class("mat4", "Matrix 4x4"),
        class("sampler2D", "2D Texture Sampler"),
    ]
}

fn build_pragma_directives() -> Vec<CompletionEntry> {
    let directive = |name: &str| CompletionEntry {
        label: name.to_string(),
        kind: CompletionKind::Keyword,
        detail: String::new(),
        insert_text: Some(format!(" {name}(")),
        documentation: None,
    };

    vec![
        directive("include"),
        directive("switch"),
        directive("label"),
        directive("range"),
        directive("group"),
        directive("endgroup"),
    ]
}

fn build_boolean_literals() -> Vec<CompletionEntry> {
    vec![
        keyword("true", ""),
        keyword("false", ""),
        keyword("on", ""),
        keyword("off", ""),
    ]
}
