//! Application configuration

use anyhow::Result;
use doomguy_status_core::StatusError;
use doomguy_status_types::AmmoSource;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application-wide configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the config format
    #[serde(default = "default_version")]
    pub version: u32,
    /// Directory holding the sprite files
    #[serde(default)]
    pub graphics_dir: Option<PathBuf>,
    /// Window geometry
    #[serde(default)]
    pub window: WindowConfig,
    /// What the ammo counter shows
    #[serde(default)]
    pub ammo: AmmoSource,
}

fn default_version() -> u32 {
    1
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = project_dirs()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Pick the sprite directory: command line, then config, then the
    /// first installed location that exists
    pub fn resolve_graphics_dir(
        &self,
        cli_override: Option<&Path>,
    ) -> Result<PathBuf, StatusError> {
        match cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.graphics_dir.clone())
        {
            Some(dir) => pick_graphics_dir(&[dir]),
            None => pick_graphics_dir(&installed_graphics_dirs()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            graphics_dir: None,
            window: WindowConfig::default(),
            ammo: AmmoSource::default(),
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "github.doomguy", "doomguy-status")
}

/// Where an installed sprite set is looked for, in order
///
/// The per-user data directory (`~/.local/share/doomguy-status/graphics` on
/// Linux) comes first, then `share/doomguy-status/graphics` under the
/// installation prefix of the running executable.
pub fn installed_graphics_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(project) = project_dirs() {
        dirs.push(project.data_dir().join("graphics"));
    }
    if let Some(prefix) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().and_then(Path::parent).map(Path::to_path_buf))
    {
        dirs.push(prefix.join("share").join("doomguy-status").join("graphics"));
    }
    dirs
}

/// First candidate that is a directory
pub fn pick_graphics_dir(candidates: &[PathBuf]) -> Result<PathBuf, StatusError> {
    candidates
        .iter()
        .find(|dir| dir.is_dir())
        .cloned()
        .ok_or_else(|| {
            let tried: Vec<String> = candidates.iter().map(|d| d.display().to_string()).collect();
            StatusError::ConfigurationInvalid(format!(
                "no graphics directory found (tried {}); pass --graphics DIR",
                tried.join(", ")
            ))
        })
}

/// Window geometry
///
/// The canvas is `pixel_width` x `pixel_height` sprite pixels. `dpi` and
/// `zoom` turn that into a physical size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub dpi: u32,
    pub zoom: f64,
}

impl WindowConfig {
    /// Size in inches
    pub fn inches(&self) -> (f64, f64) {
        let dpi = self.dpi.max(1) as f64;
        (
            self.pixel_width as f64 / dpi * self.zoom,
            self.pixel_height as f64 / dpi * self.zoom,
        )
    }

    /// Size in device pixels
    pub fn physical_size(&self) -> (i32, i32) {
        let (w, h) = self.inches();
        let dpi = self.dpi.max(1) as f64;
        ((w * dpi).round() as i32, (h * dpi).round() as i32)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            pixel_width: 320,
            pixel_height: 32,
            dpi: 141,
            zoom: 2.0,
        }
    }
}
