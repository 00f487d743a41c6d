//! Collect the stylesheets to process from command line paths.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Expand `paths` into the list of stylesheet files to process.
///
/// Directories are searched recursively for files with one of `extensions`, in sorted
/// order. Files named explicitly are kept whatever their extension. No paths means the
/// current directory.
///
/// # Errors
///
/// Returns an error if a directory cannot be walked.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let paths = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths
    };

    let mut documents = Vec::new();
    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(&path).sort_by_file_name() {
                let entry = entry.map_err(|source| Error::Walk {
                    path: path.clone(),
                    source,
                })?;
                if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
                    documents.push(entry.into_path());
                }
            }
        } else {
            documents.push(path);
        }
    }
    Ok(documents)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
