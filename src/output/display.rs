//! Opening saved images in the platform's default viewer.

use crate::utils::error::DisplayError;
use log::debug;
use std::path::Path;
use std::process::Command;

/// Launch the system image viewer for a saved file
///
/// Does not wait for the viewer to exit.
pub fn show_image(path: &Path) -> Result<(), DisplayError> {
    let mut command = viewer_command(path)?;

    debug!("Launching viewer: {:?}", command);
    command.spawn()?;

    Ok(())
}

/// Build the platform viewer invocation
fn viewer_command(path: &Path) -> Result<Command, DisplayError> {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else if cfg!(unix) {
        Command::new("xdg-open")
    } else {
        return Err(DisplayError::Unsupported);
    };

    command.arg(path);
    Ok(command)
}
