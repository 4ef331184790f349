//! Output writers for charts and reports.
//!
//! This module handles writing data to disk in various formats:
//! - SVG charts rendered in memory
//! - JSON aggregation reports
//! - Opening saved images in a viewer

pub mod display;
pub mod json;
pub mod svg;

// Re-export main functions
pub use display::show_image;
pub use json::{build_report, read_report, write_report, Report};
pub use svg::write_svg;

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Validate an output path and create its parent directories
///
/// **Public** - shared by every file sink
pub fn prepare_output_path(path: &Path) -> Result<(), OutputError> {
    validate_path(path)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
