use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Prepended to the input file name to form the sorted output name.
pub const SORTED_PREFIX: &str = "sorted_";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("The file {0} does not exist.")]
    NotFound(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid project directory: {0}")]
    InvalidProjectDir(String),
    #[error("Path has no file name: {0}")]
    NoFileName(PathBuf),
}

/// Read a whole source file into memory
pub fn read_source(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write content to a new or existing file, creating parent directories
pub fn write_output(path: &Path, content: &str) -> Result<(), IoError> {
    let write_error = |source| IoError::Write {
        path: path.to_path_buf(),
        source,
    };

    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    fs::write(path, content).map_err(write_error)
}

/// `dir/name.rs` -> `dir/sorted_name.rs`
pub fn sorted_output_path(input: &Path) -> Result<PathBuf, IoError> {
    let file_name = input
        .file_name()
        .ok_or_else(|| IoError::NoFileName(input.to_path_buf()))?;

    let mut sorted_name = OsString::from(SORTED_PREFIX);
    sorted_name.push(file_name);
    Ok(input.with_file_name(sorted_name))
}

/// Recursively list files with the given extension, sorted by path
pub fn scan_source_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>, IoError> {
    validate_project_dir(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, extension, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(
    dir: &Path,
    extension: &str,
    files: &mut Vec<PathBuf>,
) -> Result<(), IoError> {
    let read_error = |source| IoError::Read {
        path: dir.to_path_buf(),
        source,
    };
    let entries = fs::read_dir(dir).map_err(read_error)?;

    for entry in entries {
        let entry = entry.map_err(read_error)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, extension, files)?;
        } else if let Some(ext) = path.extension()
            && ext == extension
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_project_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidProjectDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}
