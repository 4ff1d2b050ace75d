//! Filesystem traversal helpers for the asset pipeline.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Files to ignore during directory traversal
pub const IGNORED_FILES: &[&str] = &[".DS_Store", "Thumbs.db"];

/// Collect all files from a directory recursively
pub fn collect_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(|e| e.into_path())
        .collect()
}

/// Check if destination is up-to-date compared to source
pub fn is_up_to_date(src: &Path, dst: &Path) -> bool {
    let Ok(src_meta) = src.metadata() else {
        return false;
    };
    let Ok(dst_meta) = dst.metadata() else {
        return false;
    };

    let Ok(src_time) = src_meta.modified() else {
        return false;
    };
    let Ok(dst_time) = dst_meta.modified() else {
        return false;
    };

    src_time <= dst_time
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collect_files_recurses_and_skips_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("images/weddings")).unwrap();
        fs::write(dir.path().join("style.css"), "body{}").unwrap();
        fs::write(dir.path().join("images/weddings/cover.jpg"), "jpg").unwrap();
        fs::write(dir.path().join("images/.DS_Store"), "junk").unwrap();

        let mut files = collect_files(dir.path());
        files.sort();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|p| p.ends_with("style.css")));
        assert!(files.iter().any(|p| p.ends_with("cover.jpg")));
    }

    #[test]
    fn test_collect_files_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let files = collect_files(&dir.path().join("does-not-exist"));
        assert!(files.is_empty());
    }

    #[test]
    fn test_is_up_to_date() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src.jpg");
        let dst = dir.path().join("dst.jpg");

        fs::write(&src, "a").unwrap();

        // Destination missing
        assert!(!is_up_to_date(&src, &dst));

        // Destination written after source
        fs::write(&dst, "a").unwrap();
        assert!(is_up_to_date(&src, &dst));
    }
}
