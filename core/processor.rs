use crate::CoreError;
use crate::file_finder::{build_walker, is_target_entry};
use crate::stripper::{self, StripStrategy};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default)]
pub struct StripOptions {
    pub strategy: StripStrategy,
    /// Compute results without writing anything back.
    pub dry_run: bool,
    /// Gitignore-style globs, relative to the scan root, to skip.
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupOutcome {
    /// The root directory does not exist; nothing was touched.
    Missing,
    /// `scanned` files matched the predicate, `modified` of them changed
    /// (or would change, on a dry run).
    Processed { scanned: usize, modified: usize },
}

/// Strips comments from every file under `root` whose name ends in one of
/// `extensions`, rewriting each file in place.
///
/// Files are handled one at a time in walk order. `on_file` is called with
/// each path before it is read. The first read, decode or write failure
/// aborts the walk; files already rewritten stay rewritten.
pub fn strip_comments_under<F>(
    root: &Path,
    extensions: &[&str],
    options: &StripOptions,
    mut on_file: F,
) -> Result<GroupOutcome, CoreError>
where
    F: FnMut(&Path),
{
    if !root.exists() {
        warn!(root = %root.display(), "scan root not found, skipping");
        return Ok(GroupOutcome::Missing);
    }

    let mut scanned = 0;
    let mut modified = 0;
    for entry in build_walker(root, &options.exclude)? {
        let entry = entry?;
        if !is_target_entry(&entry, extensions) {
            continue;
        }
        let path = entry.path();
        on_file(path);
        scanned += 1;
        if process_single_file(path, options)? {
            modified += 1;
        }
    }

    info!(
        root = %root.display(),
        scanned,
        modified,
        dry_run = options.dry_run,
        "finished scan group"
    );
    Ok(GroupOutcome::Processed { scanned, modified })
}

/// Returns whether the file content changed.
fn process_single_file(path: &Path, options: &StripOptions) -> Result<bool, CoreError> {
    let bytes = fs::read(path).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let original_content = String::from_utf8(bytes).map_err(|source| CoreError::Utf8 {
        path: path.to_path_buf(),
        source,
    })?;

    let stripped_content = stripper::strip_text(&original_content, options.strategy).map_err(
        |message| CoreError::Strip {
            path: path.to_path_buf(),
            message,
        },
    )?;

    if stripped_content == original_content {
        debug!(path = %path.display(), "no comments found");
        return Ok(false);
    }

    let removed = original_content.len() - stripped_content.len();
    if options.dry_run {
        debug!(path = %path.display(), removed, "would strip comments");
        return Ok(true);
    }

    fs::write(path, stripped_content).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), removed, "stripped comments");
    Ok(true)
}
