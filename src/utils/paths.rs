use std::path::Path;

/// Extract the trimmed final path segment, rejecting empty results.
///
/// Returns `None` for root paths, `..` endings, and segments that are
/// empty after trimming whitespace.
pub(crate) fn folder_name(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}
