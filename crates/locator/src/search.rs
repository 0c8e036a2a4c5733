//! Heuristic folder search over well-known install locations.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{SearchRoot, USERNAME_PLACEHOLDER};

/// Expands a search root into a concrete directory.
///
/// The environment variable wins when set and non-empty; otherwise the fallback
/// literal is used. `%USERNAME%` is substituted in either case (empty when unset).
pub fn expand_root<F>(root: &SearchRoot, lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    let raw = root
        .env
        .as_deref()
        .and_then(&lookup)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| root.fallback.clone());

    if raw.contains(USERNAME_PLACEHOLDER) {
        let user = lookup("USERNAME").unwrap_or_default();
        PathBuf::from(raw.replace(USERNAME_PLACEHOLDER, &user))
    } else {
        PathBuf::from(raw)
    }
}

/// Scans each root in order and returns the first subdirectory whose name
/// contains `keyword` (case-insensitive).
pub fn search_folders<F>(roots: &[SearchRoot], keyword: &str, lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    let keyword = keyword.to_lowercase();

    for root in roots {
        let dir = expand_root(root, &lookup);
        match first_matching_child(&dir, &keyword) {
            Ok(Some(found)) => {
                info!(path = %found.display(), "found target folder");
                return Some(found);
            }
            Ok(None) => debug!(root = %dir.display(), "no matching folder"),
            Err(e) => debug!(root = %dir.display(), error = %e, "skipping unreadable root"),
        }
    }

    None
}

/// Returns the first child directory of `dir`, in enumeration order, whose
/// name contains `keyword`.
fn first_matching_child(dir: &Path, keyword: &str) -> std::io::Result<Option<PathBuf>> {
    let found = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .to_string_lossy()
                .to_lowercase()
                .contains(keyword)
        })
        .map(|entry| entry.path())
        .find(|path| path.is_dir());

    Ok(found)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn expand_prefers_environment() {
        let root = SearchRoot::from_env("ProgramFiles", r"C:\Program Files");
        let path = expand_root(&root, env_of(&[("ProgramFiles", r"E:\Apps")]));
        assert_eq!(path, PathBuf::from(r"E:\Apps"));
    }

    #[test]
    fn expand_uses_fallback_with_username() {
        let root = SearchRoot::from_env("APPDATA", r"C:\Users\%USERNAME%\AppData\Roaming");
        let path = expand_root(&root, env_of(&[("USERNAME", "alice")]));
        assert_eq!(path, PathBuf::from(r"C:\Users\alice\AppData\Roaming"));
    }

    #[test]
    fn expand_empty_username_when_unset() {
        let root = SearchRoot::from_env("LOCALAPPDATA", r"C:\Users\%USERNAME%\AppData\Local");
        let path = expand_root(&root, env_of(&[]));
        assert_eq!(path, PathBuf::from(r"C:\Users\\AppData\Local"));
    }

    #[test]
    fn expand_ignores_empty_variable() {
        let root = SearchRoot::from_env("ProgramFiles", "/fallback");
        let path = expand_root(&root, env_of(&[("ProgramFiles", "")]));
        assert_eq!(path, PathBuf::from("/fallback"));
    }

    #[test]
    fn finds_case_insensitive_match() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("Common Files")).unwrap();
        std::fs::create_dir(tmp.path().join("MyETS")).unwrap();

        let roots = vec![SearchRoot::from_env("ProgramFiles", "/unused")];
        let lookup = env_of(&[("ProgramFiles", tmp.path().to_str().unwrap())]);

        let found = search_folders(&roots, "ets", lookup).unwrap();
        assert_eq!(found, tmp.path().join("MyETS"));
    }

    #[test]
    fn ignores_matching_files() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("ets_notes.txt"), "x").unwrap();

        let roots = vec![SearchRoot::fixed(tmp.path().to_str().unwrap())];
        assert!(search_folders(&roots, "ets", env_of(&[])).is_none());
    }

    #[test]
    fn first_root_in_order_wins() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        std::fs::create_dir(first.path().join("zz-ets")).unwrap();
        std::fs::create_dir(second.path().join("aa-ets")).unwrap();

        let roots = vec![
            SearchRoot::fixed("/definitely/not/real"),
            SearchRoot::fixed(first.path().to_str().unwrap()),
            SearchRoot::fixed(second.path().to_str().unwrap()),
        ];

        let found = search_folders(&roots, "ETS", env_of(&[])).unwrap();
        assert_eq!(found, first.path().join("zz-ets"));
    }

    #[test]
    fn within_root_enumeration_order_wins() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("assets")).unwrap();
        std::fs::create_dir(tmp.path().join("Ets")).unwrap();
        std::fs::create_dir(tmp.path().join("Tets")).unwrap();

        let expected = std::fs::read_dir(tmp.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .find(|path| path.is_dir())
            .unwrap();

        let roots = vec![SearchRoot::fixed(tmp.path().to_str().unwrap())];
        let found = search_folders(&roots, "ets", env_of(&[])).unwrap();
        assert_eq!(found, expected);
    }

    #[test]
    fn skips_matching_file_before_directory() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("ets.log"), "x").unwrap();
        std::fs::write(tmp.path().join("Ets.exe"), "x").unwrap();
        std::fs::create_dir(tmp.path().join("Ets")).unwrap();

        let roots = vec![SearchRoot::fixed(tmp.path().to_str().unwrap())];
        let found = search_folders(&roots, "ets", env_of(&[])).unwrap();
        assert_eq!(found, tmp.path().join("Ets"));
    }

    #[test]
    fn nothing_found() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("Other")).unwrap();

        let roots = vec![SearchRoot::fixed(tmp.path().to_str().unwrap())];
        assert!(search_folders(&roots, "ets", env_of(&[])).is_none());
    }
}
