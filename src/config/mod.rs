//! Configuration management

mod settings;

pub use settings::{installed_graphics_dirs, pick_graphics_dir, AppConfig, WindowConfig};
