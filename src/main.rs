mod components;
mod config;
mod history;
mod page;
mod sidebar;
mod state;
mod timer;
mod window;

use anyhow::Context as _;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;

use components::app::{LaunchOptions, LAUNCH_OPTIONS};
use config::Config;
use state::{FileStorage, Storage};

const VERSION: &str = concat!(
    env!("TEOMANAGER_BUILD_VERSION"),
    " (",
    compile_time::datetime_str!(),
    ")",
);

/// TEOmanager: admin shell with a persistent collapsible sidebar
#[derive(Parser, Debug)]
#[command(
    version = VERSION,
    about,
    after_long_help = "Examples:\n\
        \x20 teomanager                   Launch with the stored layout\n\
        \x20 teomanager --reset-layout    Forget the stored sidebar layout first\n\
        \x20 teomanager --ephemeral       Keep the layout in memory only"
)]
struct Cli {
    /// Config file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Storage file holding the layout preference
    #[arg(long, value_name = "PATH")]
    storage: Option<PathBuf>,

    /// Do not persist the layout preference
    #[arg(long, conflicts_with = "storage")]
    ephemeral: bool,

    /// Remove the stored sidebar layout before launching
    #[arg(long)]
    reset_layout: bool,
}

const DEFAULT_LOGLEVEL: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "info"
};

fn main() {
    let cli = Cli::parse();

    // Load environment variables from .env file
    if let Ok(dotenv) = dotenvy::dotenv() {
        println!("Loaded .env file from: {}", dotenv.display());
    }
    init_tracing();

    let config_path = cli.config.clone().unwrap_or_else(Config::path);
    let mut config = Config::load(&config_path);
    if let Some(path) = cli.storage {
        config.storage.path = Some(path);
    }
    let options = LaunchOptions {
        config,
        ephemeral: cli.ephemeral,
    };

    if cli.reset_layout && !options.ephemeral {
        if let Err(e) = reset_layout(&options) {
            tracing::error!(error = ?e, "Failed to reset sidebar layout");
        }
    }

    let window_config = window::create_main_window_config(&options.config.layout);
    tracing::info!(version = VERSION, ephemeral = options.ephemeral, "Starting TEOmanager");
    LAUNCH_OPTIONS.get_or_init(|| options);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window_config)
        .launch(components::app::App);
}

fn reset_layout(options: &LaunchOptions) -> anyhow::Result<()> {
    let key = &options.config.storage.key;
    let mut storage = FileStorage::new(options.config.storage.file_path());
    storage
        .remove_item(key)
        .with_context(|| format!("removing {key} from {}", storage.path().display()))?;
    tracing::info!(path = %storage.path().display(), "Stored sidebar layout removed");
    Ok(())
}

fn init_tracing() {
    let silence_filter = tracing_subscriber::filter::filter_fn(|metadata| {
        // Known issue: https://github.com/DioxusLabs/dioxus/issues/3872
        metadata.target() != "dioxus_core::properties::__component_called_as_function"
    });

    let env_filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOGLEVEL));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .pretty()
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(silence_filter.clone());

    let registry = tracing_subscriber::registry()
        .with(env_filter_layer)
        .with(fmt_layer);

    // On macOS, also log to Console.app via oslog
    #[cfg(target_os = "macos")]
    let registry = registry.with(
        tracing_oslog::OsLogger::new("dev.teomanager.TEOmanager", "default")
            .with_filter(silence_filter),
    );

    registry.init();
}
