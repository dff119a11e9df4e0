use std::fs;
use std::path::{Path, PathBuf};

/// Recursively collect files ending in `.html` or `.htm`, case-insensitively.
///
/// Entries are sorted by name within each directory so an unchanged tree is
/// visited in the same order on every run. Subdirectories that cannot be
/// read are logged and skipped; discovery itself never fails.
pub fn find_html_files(root: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    walk(root, &mut found);
    found
}

fn walk(dir: &Path, found: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("skipping unreadable directory {}: {err}", dir.display());
            return;
        }
    };
    let mut entries: Vec<_> = entries.filter_map(|entry| entry.ok()).collect();
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, found);
        } else if has_html_extension(&path) && path.is_file() {
            found.push(path);
        }
    }
}

fn has_html_extension(path: &Path) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::has_html_extension;
    use std::path::Path;

    #[test]
    fn extension_match_is_case_insensitive() {
        assert!(has_html_extension(Path::new("a/b.html")));
        assert!(has_html_extension(Path::new("a/b.HTM")));
        assert!(has_html_extension(Path::new("b.HtMl")));
        assert!(!has_html_extension(Path::new("c.txt")));
        assert!(!has_html_extension(Path::new("html")));
    }
}
