//! Include-path completion scanning
//!
//! `#pragma include(...)` completions come from live directory scans: the
//! edited file's own directory, plus the `shaders/` and `libs/` directories
//! of the enclosing project when a project root can be found. Scans that
//! fail contribute nothing; the rest of the completion response is still
//! served.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::completion::{CompletionEntry, CompletionKind};

/// Marker file that denotes a project root
pub const PROJECT_MANIFEST_FILENAME: &str = "4k-eater.project";

/// Extensions that qualify a file for include completion
pub const INCLUDE_EXTENSIONS: [&str; 3] = ["glsl", "frag", "vert"];

/// Where a scanned include candidate was found
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanOrigin {
    Local,
    ProjectShader,
    ProjectLib,
}

impl ScanOrigin {
    pub fn label(self) -> &'static str {
        match self {
            ScanOrigin::Local => "Local",
            ScanOrigin::ProjectShader => "Project Shader",
            ScanOrigin::ProjectLib => "Project Lib",
        }
    }
}

/// Find the project root by walking up from `start` until a directory
/// containing the project manifest is found.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        if dir.join(PROJECT_MANIFEST_FILENAME).exists() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}

/// Relative path from `from` (a directory) to `to`, with separators
/// normalized to `/` for use inside shader source.
pub fn relative_path(from: &Path, to: &Path) -> String {
    let from_components: Vec<Component> = from.components().collect();
    let to_components: Vec<Component> = to.components().collect();

    let common = from_components
        .iter()
        .zip(&to_components)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = Vec::new();
    for _ in common..from_components.len() {
        parts.push("..".to_string());
    }
    for component in &to_components[common..] {
        parts.push(component.as_os_str().to_string_lossy().into_owned());
    }
    parts.join("/")
}

/// List the includable shader files in `dir` as completion entries.
///
/// Labels and insert texts are paths relative to `current_file_dir`, the
/// directory of the file being edited. An unreadable or missing directory
/// yields an empty list.
pub fn scan_directory(
    dir: &Path,
    current_file_dir: &Path,
    origin: ScanOrigin,
) -> Vec<CompletionEntry> {
    let mut items = Vec::new();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return items,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !INCLUDE_EXTENSIONS.contains(&extension) {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        let rel = relative_path(current_file_dir, &path);
        items.push(CompletionEntry {
            label: rel.clone(),
            kind: CompletionKind::File,
            detail: format!("{}: {}", origin.label(), file_name),
            insert_text: Some(rel),
            documentation: None,
        });
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_same_directory() {
        assert_eq!(
            relative_path(Path::new("/proj/shaders"), Path::new("/proj/shaders/main.frag")),
            "main.frag"
        );
    }

    #[test]
    fn relative_path_into_subdirectory() {
        assert_eq!(
            relative_path(Path::new("/proj"), Path::new("/proj/libs/noise.glsl")),
            "libs/noise.glsl"
        );
    }

    #[test]
    fn relative_path_through_parent() {
        assert_eq!(
            relative_path(
                Path::new("/proj/shaders/fx"),
                Path::new("/proj/libs/noise.glsl")
            ),
            "../../libs/noise.glsl"
        );
    }

    #[test]
    fn finds_project_root_upward() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();
        std::fs::write(root.join(PROJECT_MANIFEST_FILENAME), "").expect("marker");
        let nested = root.join("shaders").join("fx");
        std::fs::create_dir_all(&nested).expect("mkdirs");

        assert_eq!(find_project_root(&nested), Some(root.to_path_buf()));
    }

    #[test]
    fn no_project_root_without_marker() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).expect("mkdirs");

        // The search may only stop at the filesystem root, so anything found
        // must actually carry the marker.
        if let Some(root) = find_project_root(&nested) {
            assert!(root.join(PROJECT_MANIFEST_FILENAME).exists());
        }
    }

    #[test]
    fn scan_filters_by_extension() {
        let dir = tempfile::tempdir().expect("tempdir");
        for name in ["a.glsl", "b.frag", "c.vert", "d.txt", "e.glsl.bak"] {
            std::fs::write(dir.path().join(name), "").expect("write");
        }

        let items = scan_directory(dir.path(), dir.path(), ScanOrigin::Local);
        let mut labels: Vec<&str> = items.iter().map(|e| e.label.as_str()).collect();
        labels.sort_unstable();
        assert_eq!(labels, vec!["a.glsl", "b.frag", "c.vert"]);
        assert!(items.iter().all(|e| e.kind == CompletionKind::File));
        assert!(items.iter().all(|e| e.detail.starts_with("Local: ")));
    }

    #[test]
    fn scan_labels_are_relative_with_forward_slashes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let libs = dir.path().join("libs");
        std::fs::create_dir(&libs).expect("mkdir");
        std::fs::write(libs.join("noise.glsl"), "").expect("write");
        let editing_dir = dir.path().join("shaders");
        std::fs::create_dir(&editing_dir).expect("mkdir");

        let items = scan_directory(&libs, &editing_dir, ScanOrigin::ProjectLib);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "../libs/noise.glsl");
        assert_eq!(items[0].insert_text.as_deref(), Some("../libs/noise.glsl"));
        assert_eq!(items[0].detail, "Project Lib: noise.glsl");
    }

    #[test]
    fn scan_missing_directory_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let items = scan_directory(
            &dir.path().join("does-not-exist"),
            dir.path(),
            ScanOrigin::ProjectShader,
        );
        assert!(items.is_empty());
    }
}
