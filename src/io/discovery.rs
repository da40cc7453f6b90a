//! Input discovery for image files and directories

use crate::io::configuration::SUPPORTED_EXTENSIONS;
use crate::io::error::{BrandError, Result, file_system};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Check whether a path has a supported image extension (case-insensitive)
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

/// Ordered, canonical-path-unique set of image files
#[derive(Debug, Default)]
struct Collected {
    paths: Vec<PathBuf>,
    seen: HashSet<PathBuf>,
}

impl Collected {
    fn add_file(&mut self, path: &Path) {
        if !path.is_file() || !is_supported_image(path) {
            return;
        }
        let Ok(canonical) = path.canonicalize() else {
            return;
        };
        if self.seen.insert(canonical.clone()) {
            self.paths.push(canonical);
        }
    }

    fn walk(&mut self, directory: &Path, recursive: bool) -> Result<()> {
        if !directory.is_dir() {
            warn!(directory = %directory.display(), "skipping missing directory");
            return Ok(());
        }

        let mut entries = std::fs::read_dir(directory)
            .map_err(|e| file_system(directory, "read directory", e))?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| file_system(directory, "read directory entry", e))?;
        entries.sort();

        for entry in entries {
            if entry.is_dir() {
                if recursive {
                    self.walk(&entry, recursive)?;
                }
            } else {
                self.add_file(&entry);
            }
        }
        Ok(())
    }
}

/// Gather unique image paths from explicit inputs and an optional directory
///
/// Inputs are visited in order; directories are listed in sorted order and
/// descended into only when `recursive` is set. Returned paths are canonical.
///
/// # Errors
///
/// Returns [`BrandError::NoInputs`] when nothing was found, or a file system
/// error when a directory listing fails
pub fn collect_image_paths(
    inputs: &[PathBuf],
    input_dir: Option<&Path>,
    recursive: bool,
) -> Result<Vec<PathBuf>> {
    let mut collected = Collected::default();

    for input in inputs {
        if input.is_dir() {
            collected.walk(input, recursive)?;
        } else {
            collected.add_file(input);
        }
    }

    if let Some(directory) = input_dir {
        collected.walk(directory, recursive)?;
    }

    if collected.paths.is_empty() {
        return Err(BrandError::NoInputs {
            reason: format!(
                "searched {} input(s){}",
                inputs.len(),
                input_dir.map_or_else(String::new, |d| format!(" and '{}'", d.display()))
            ),
        });
    }

    Ok(collected.paths)
}
