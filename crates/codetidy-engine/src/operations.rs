//! One call per command: read, transform, write, report.

use std::path::{Path, PathBuf};

use crate::io::{self, IoError};
use crate::rewrite::{ImportRule, insert_import, rewrite_query_params};
use crate::sorting::{BlockPatterns, sort_document};

/// Outcome of sorting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortReport {
    pub output_path: PathBuf,
    pub block_count: usize,
}

/// Sort the blocks of `input` into `sorted_<name>` beside it.
///
/// The input file is never modified. Zero blocks is not an error and
/// produces an empty output file.
pub fn sort_components_file(
    input: &Path,
    patterns: &BlockPatterns,
) -> Result<SortReport, IoError> {
    let content = io::read_source(input)?;
    let sorted = sort_document(&content, patterns);
    log::debug!("Found {} blocks in {}", sorted.len(), input.display());

    let output_path = io::sorted_output_path(input)?;
    io::write_output(&output_path, &sorted.render())?;
    log::info!("Wrote {}", output_path.display());

    Ok(SortReport {
        output_path,
        block_count: sorted.len(),
    })
}

/// Rewrite query lookups in every matching file under `root`.
///
/// Returns the files that were changed.
pub fn replace_params_in_dir(
    root: &Path,
    extension: &str,
    helper: &str,
) -> Result<Vec<PathBuf>, IoError> {
    rewrite_tree(root, extension, |content| rewrite_query_params(content, helper))
}

/// Add the import line to every matching file under `root` that needs it.
///
/// Returns the files that were changed.
pub fn add_import_in_dir(
    root: &Path,
    extension: &str,
    rule: &ImportRule,
) -> Result<Vec<PathBuf>, IoError> {
    rewrite_tree(root, extension, |content| insert_import(content, rule))
}

fn rewrite_tree<F>(root: &Path, extension: &str, rewrite: F) -> Result<Vec<PathBuf>, IoError>
where
    F: Fn(&str) -> Option<String>,
{
    let files = io::scan_source_files(root, extension)?;
    log::debug!("Scanning {} files under {}", files.len(), root.display());

    let mut changed = Vec::new();
    for path in files {
        let content = io::read_source(&path)?;
        if let Some(updated) = rewrite(&content) {
            io::write_output(&path, &updated)?;
            log::info!("Rewrote {}", path.display());
            changed.push(path);
        }
    }

    Ok(changed)
}
