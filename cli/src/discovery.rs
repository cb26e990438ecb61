use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Directory names skipped by default: generated output, vendored
/// dependencies, and VCS metadata.
const DEFAULT_EXCLUDES: &[&str] = &[".dart_tool", "build", ".git", ".pub-cache"];

pub fn collect_dart_files(root: &Path, excludes: &[String]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| is_dart_file(entry.path()) && !is_excluded(entry.path(), excludes))
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}

fn is_dart_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "dart") && !is_generated(path)
}

/// Generated Dart files carry a marker extension before `.dart`.
fn is_generated(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.ends_with(".g.dart") || name.ends_with(".freezed.dart") || name.ends_with(".mocks.dart")
}

fn is_excluded(path: &Path, excludes: &[String]) -> bool {
    path.components().any(|part| {
        let text = part.as_os_str().to_string_lossy();
        DEFAULT_EXCLUDES.contains(&text.as_ref()) || excludes.iter().any(|e| e == text.as_ref())
    })
}
