use crate::CoreError;
use ignore::overrides::OverrideBuilder;
use ignore::{DirEntry, Walk, WalkBuilder};
use std::path::{Path, PathBuf};

pub const JAVA_EXTENSIONS: &[&str] = &["java"];
pub const JAVASCRIPT_EXTENSIONS: &[&str] = &["js", "jsx"];

pub const DEFAULT_JAVA_ROOT: &str = "backend/src/main/java";
pub const DEFAULT_JAVASCRIPT_ROOT: &str = "FrontEnd/src";

/// A labelled directory tree plus the file extensions to strip inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanGroup {
    pub label: &'static str,
    pub root: PathBuf,
    pub extensions: &'static [&'static str],
}

impl ScanGroup {
    pub fn java(root: impl Into<PathBuf>) -> Self {
        ScanGroup {
            label: "Java",
            root: root.into(),
            extensions: JAVA_EXTENSIONS,
        }
    }

    pub fn javascript(root: impl Into<PathBuf>) -> Self {
        ScanGroup {
            label: "JavaScript",
            root: root.into(),
            extensions: JAVASCRIPT_EXTENSIONS,
        }
    }
}

pub fn default_groups() -> Vec<ScanGroup> {
    vec![
        ScanGroup::java(DEFAULT_JAVA_ROOT),
        ScanGroup::javascript(DEFAULT_JAVASCRIPT_ROOT),
    ]
}

/// True when the file name ends in `.<ext>` for one of `extensions`.
/// Case-sensitive.
pub fn matches_extension(path: &Path, extensions: &[&str]) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy();
    extensions.iter().any(|ext| {
        name.strip_suffix(ext)
            .is_some_and(|stem| stem.ends_with('.'))
    })
}

pub(crate) fn build_walker(root: &Path, exclude: &[String]) -> Result<Walk, CoreError> {
    let mut w = WalkBuilder::new(root);
    w.standard_filters(false);
    w.hidden(false);
    w.sort_by_file_name(|a, b| a.cmp(b));
    if !exclude.is_empty() {
        let mut o = OverrideBuilder::new(root);
        for pattern in exclude {
            o.add(&format!("!{}", pattern))
                .map_err(|source| CoreError::Pattern {
                    pattern: pattern.clone(),
                    source,
                })?;
        }
        let overrides = o.build().map_err(|source| CoreError::Pattern {
            pattern: exclude.join(", "),
            source,
        })?;
        w.overrides(overrides);
    }
    Ok(w.build())
}

/// Regular files strictly below the walk root that pass the extension
/// predicate. The root entry itself is never a target.
pub(crate) fn is_target_entry(entry: &DirEntry, extensions: &[&str]) -> bool {
    entry.depth() > 0
        && entry.file_type().is_some_and(|ft| ft.is_file())
        && matches_extension(entry.path(), extensions)
}

/// Lists every file under `root` that would be stripped, in walk order.
pub fn find_files(
    root: &Path,
    extensions: &[&str],
    exclude: &[String],
) -> Result<Vec<PathBuf>, CoreError> {
    if !root.exists() {
        return Err(CoreError::RootNotFound(root.to_path_buf()));
    }
    let mut f = Vec::new();
    for entry in build_walker(root, exclude)? {
        let entry = entry?;
        if is_target_entry(&entry, extensions) {
            f.push(entry.into_path());
        }
    }
    Ok(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_matches_extension_suffix_rules() {
        assert!(matches_extension(Path::new("src/App.java"), JAVA_EXTENSIONS));
        assert!(matches_extension(Path::new("index.js"), JAVASCRIPT_EXTENSIONS));
        assert!(matches_extension(Path::new("Card.jsx"), JAVASCRIPT_EXTENSIONS));
        assert!(matches_extension(Path::new(".java"), JAVA_EXTENSIONS));

        assert!(!matches_extension(Path::new("App.JAVA"), JAVA_EXTENSIONS));
        assert!(!matches_extension(Path::new("App.class"), JAVA_EXTENSIONS));
        assert!(!matches_extension(Path::new("notjava"), JAVA_EXTENSIONS));
        assert!(!matches_extension(Path::new("styles.json"), JAVASCRIPT_EXTENSIONS));
        assert!(!matches_extension(Path::new("types.ts"), JAVASCRIPT_EXTENSIONS));
    }

    #[test]
    fn test_default_groups_use_fixed_roots() {
        let groups = default_groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].root, PathBuf::from("backend/src/main/java"));
        assert_eq!(groups[0].extensions, &["java"]);
        assert_eq!(groups[1].root, PathBuf::from("FrontEnd/src"));
        assert_eq!(groups[1].extensions, &["js", "jsx"]);
    }

    #[test]
    fn test_find_files_walks_recursively_and_sorted() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("com/app/service")).unwrap();
        fs::create_dir_all(root.join(".hidden")).unwrap();
        fs::write(root.join("com/app/Main.java"), "").unwrap();
        fs::write(root.join("com/app/service/Svc.java"), "").unwrap();
        fs::write(root.join("com/app/README.md"), "").unwrap();
        fs::write(root.join(".hidden/Secret.java"), "").unwrap();
        fs::write(root.join(".gitignore"), "*.java\n").unwrap();

        let files = find_files(root, JAVA_EXTENSIONS, &[]).unwrap();
        let relative: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            relative,
            vec![
                PathBuf::from(".hidden/Secret.java"),
                PathBuf::from("com/app/Main.java"),
                PathBuf::from("com/app/service/Svc.java"),
            ]
        );
    }

    #[test]
    fn test_find_files_honours_excludes() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("components")).unwrap();
        fs::create_dir_all(root.join("vendor")).unwrap();
        fs::write(root.join("components/App.jsx"), "").unwrap();
        fs::write(root.join("vendor/lib.js"), "").unwrap();

        let files = find_files(root, JAVASCRIPT_EXTENSIONS, &["vendor/".to_string()]).unwrap();
        assert_eq!(files, vec![root.join("components/App.jsx")]);
    }

    #[test]
    fn test_find_files_missing_root() {
        let dir = TempDir::new().unwrap();
        let err = find_files(&dir.path().join("nope"), JAVA_EXTENSIONS, &[]).unwrap_err();
        assert!(matches!(err, CoreError::RootNotFound(_)));
    }
}
