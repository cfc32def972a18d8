//! doomguy-status: a Doom-style status bar for the desktop
//!
//! Battery, CPU, network, volume, clock and workspace readings are drawn
//! with the classic status bar sprites:
//! - Configuration loading and resource root resolution
//! - The GTK window that drives the render loop

pub mod config;
pub mod ui;

pub use config::AppConfig;
