//! Recursive directory copy.

use std::fs;
use std::path::Path;

use crate::FileOpsError;

/// Recursively copies `source` into `dest`, creating `dest` as needed.
///
/// Returns the number of files copied.
pub fn copy_dir_recursive(source: &Path, dest: &Path) -> Result<u64, FileOpsError> {
    fs::create_dir_all(dest).map_err(|e| FileOpsError::io("create directory", dest, e))?;

    let entries =
        fs::read_dir(source).map_err(|e| FileOpsError::io("read directory", source, e))?;

    let mut copied = 0;
    for entry in entries {
        let entry = entry.map_err(|e| FileOpsError::io("read directory", source, e))?;
        let entry_path = entry.path();
        let dest_path = dest.join(entry.file_name());

        if entry_path.is_dir() {
            copied += copy_dir_recursive(&entry_path, &dest_path)?;
        } else {
            fs::copy(&entry_path, &dest_path)
                .map_err(|e| FileOpsError::io("copy", &entry_path, e))?;
            copied += 1;
        }
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_nested_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        std::fs::create_dir_all(src.join("plugins").join("deep")).unwrap();
        std::fs::write(src.join("config.json"), "{}").unwrap();
        std::fs::write(src.join("plugins").join("a.js"), "a").unwrap();
        std::fs::write(src.join("plugins").join("deep").join("b.js"), "b").unwrap();

        let dst = tmp.path().join("dst");
        let copied = copy_dir_recursive(&src, &dst).unwrap();

        assert_eq!(copied, 3);
        assert_eq!(std::fs::read_to_string(dst.join("config.json")).unwrap(), "{}");
        assert_eq!(
            std::fs::read_to_string(dst.join("plugins").join("deep").join("b.js")).unwrap(),
            "b"
        );
    }

    #[test]
    fn copies_empty_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("empty");
        std::fs::create_dir(&src).unwrap();

        let dst = tmp.path().join("out");
        assert_eq!(copy_dir_recursive(&src, &dst).unwrap(), 0);
        assert!(dst.is_dir());
    }

    #[test]
    fn missing_source_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let result = copy_dir_recursive(&tmp.path().join("nope"), &tmp.path().join("out"));
        assert!(matches!(result, Err(FileOpsError::Io { op: "read directory", .. })));
    }
}
