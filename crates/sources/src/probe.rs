//! Helpers for external command line tools
//!
//! Several sources shell out to a desktop tool. Whether the tool exists is
//! decided once at startup, and the source is swapped for a
//! [`doomguy_status_core::NullSource`] or a documented default when it
//! does not.

use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Locate an executable on `PATH`
pub fn find_executable(name: &str) -> Option<PathBuf> {
    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        path.metadata()
            .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }

    #[cfg(not(unix))]
    {
        path.is_file()
    }
}

/// Run a command and return its stdout
pub fn run_command(program: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new(program)
        .args(args)
        .output()
        .with_context(|| format!("Failed to run {}", program.display()))?;

    if !output.status.success() {
        return Err(anyhow!(
            "{} {} exited with {}: {}",
            program.display(),
            args.join(" "),
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        ));
    }

    String::from_utf8(output.stdout)
        .with_context(|| format!("{} produced non-UTF-8 output", program.display()))
}

/// Read a trimmed sysfs attribute
pub fn read_attribute(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(content.trim().to_string())
}

/// Read an integer sysfs attribute
pub fn read_int_attribute(path: &Path) -> Result<i64> {
    read_attribute(path)?
        .parse::<i64>()
        .with_context(|| format!("Failed to parse integer from {}", path.display()))
}


#[cfg(test)]
mod tests {
    use super::testing::{scratch_dir, write};
    use super::*;

    #[test]
    fn test_read_attributes() {
        let dir = scratch_dir("probe");
        write(&dir, "speed", "1000\n");
        write(&dir, "operstate", "up\n");
        write(&dir, "garbage", "fast\n");

        assert_eq!(read_int_attribute(&dir.join("speed")).unwrap(), 1000);
        assert_eq!(read_attribute(&dir.join("operstate")).unwrap(), "up");
        assert!(read_int_attribute(&dir.join("garbage")).is_err());
        assert!(read_attribute(&dir.join("missing")).is_err());

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_missing_executable() {
        assert!(find_executable("definitely-not-a-real-tool-4711").is_none());
    }
}
