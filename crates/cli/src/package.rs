use std::path::{Path, PathBuf};

/// Derive a Kotlin package from where the output file sits.
///
/// The first source root that contains `out_file` wins; the package is the
/// output file's parent directory relative to that root, segments joined
/// with `.`. A file directly inside the root, or inside no root, gets no
/// package.
pub(crate) fn infer_package(out_file: &Path, source_roots: &[PathBuf]) -> Option<String> {
    let root = source_roots.iter().find(|root| out_file.starts_with(root))?;
    let relative = out_file.parent()?.strip_prefix(root).ok()?;
    let segments: Vec<String> = relative
        .iter()
        .map(|s| s.to_string_lossy().into_owned())
        .collect();
    if segments.is_empty() {
        None
    } else {
        Some(segments.join("."))
    }
}
