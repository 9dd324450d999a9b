//! Output files and the system viewer for the CLI frontend.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::info;

use crate::error::{MenuError, Result};

/// Output path next to the menu file, with its extension replaced.
pub fn default_output_path(menu_path: &Path, extension: &str) -> PathBuf {
    menu_path.with_extension(extension)
}

/// Write a finished rendering to `path`.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| MenuError::output_write(path, e))?;
    info!(path = %path.display(), bytes = contents.len(), "wrote rendering");
    Ok(())
}

/// Create (or truncate) `path` for a streamed rendering.
pub fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|e| MenuError::output_write(path, e))?;
    Ok(BufWriter::new(file))
}

/// Hand `path` to the platform's default viewer without waiting for it.
pub fn open_viewer(path: &Path) -> Result<()> {
    let mut command = viewer_command(path);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    command.spawn().map_err(|e| MenuError::Viewer {
        message: format!("{:?}: {e}", command.get_program()),
    })?;
    info!(path = %path.display(), "opened viewer");
    Ok(())
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("../data/menu.txt"), "svg"),
            PathBuf::from("../data/menu.svg")
        );
        assert_eq!(
            default_output_path(Path::new("menu"), "dot"),
            PathBuf::from("menu.dot")
        );
    }

    #[test]
    fn test_write_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.svg");
        write_output(&path, "<svg/>").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg/>");
    }

    #[test]
    fn test_create_output() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.svg");
        let mut out = create_output(&path).unwrap();
        out.write_all(b"<svg/>").unwrap();
        out.flush().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg/>");
    }

    #[test]
    fn test_write_output_to_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("menu.svg");
        assert!(matches!(
            write_output(&path, ""),
            Err(MenuError::OutputWrite { .. })
        ));
    }
}
