use clap::Parser;
use doomguy_status::config::AppConfig;
use doomguy_status::ui::build_status_window;
use doomguy_status_render::SpriteCatalogue;
use doomguy_status_sources::host_sampler;
use gtk4::prelude::*;
use gtk4::{glib, Application};
use log::{error, info, warn};
use std::path::PathBuf;
use std::rc::Rc;

const APP_ID: &str = "com.github.doomguy.doomguy_status";

/// doomguy-status - Doom-style status bar for battery, CPU, network and clock
#[derive(Parser, Debug, Clone)]
#[command(name = "doomguy-status")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Directory holding the status bar sprites
    #[arg(long = "graphics", value_name = "DIR", env = "DOOMGUY_STATUS_GRAPHICS")]
    graphics: Option<PathBuf>,

    /// Configuration file to use instead of the default one
    #[arg(long = "config", value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> glib::ExitCode {
    let cli = Cli::parse();

    // Level 0 (default): warn only, which still shows the === milestones
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    warn!("=== Starting doomguy-status v{} ===", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli);

    let graphics_dir = match config.resolve_graphics_dir(cli.graphics.as_deref()) {
        Ok(dir) => dir,
        Err(e) => {
            error!("{}", e);
            return glib::ExitCode::FAILURE;
        }
    };

    // gdk-pixbuf works before GTK is initialised, so a bad sprite set fails fast
    let catalogue = match SpriteCatalogue::load(&graphics_dir) {
        Ok(catalogue) => Rc::new(catalogue),
        Err(e) => {
            error!("{}", e);
            return glib::ExitCode::FAILURE;
        }
    };
    warn!("=== Sprites loaded from {} ===", catalogue.root().display());

    let app = Application::builder().application_id(APP_ID).build();

    app.connect_activate(move |app| {
        info!("Building UI");
        let sampler = host_sampler(config.ammo);
        let window = build_status_window(app, &config, catalogue.clone(), sampler);
        window.present();
        warn!("=== Status bar running ===");
    });

    // Pass only the program name since clap already consumed the arguments
    app.run_with_args(&["doomguy-status"])
}

fn load_config(cli: &Cli) -> AppConfig {
    let loaded = match cli.config {
        Some(ref path) => AppConfig::load_from_path(path),
        None => AppConfig::load(),
    };
    match loaded {
        Ok(config) => {
            info!("Loaded configuration");
            config
        }
        Err(e) => {
            warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        }
    }
}
