use std::sync::Arc;

use clap::Parser;
use color_eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ptdx_modal::config::{self, KeyResolver};
use ptdx_modal::modal::StyleSheet;
use ptdx_modal::theme;

use crate::app::App;

mod app;
mod cli;
mod demo;
mod tui;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _guard = initialize_logging()?;
    info!("Starting ptdx-modal demo");

    let args = cli::Args::parse();

    let mut config = config::load()?;
    args.apply(&mut config);
    let resolver = Arc::new(KeyResolver::new(Arc::new(config.keybindings.clone())));
    let stylesheet = Arc::new(StyleSheet::builtin().merged(config.styles.clone()));
    let theme = theme::theme_from_name(&config.theme.name);

    let mut app = App::new(&config, resolver, stylesheet, theme);
    if let Some(section) = args.open {
        app.open(section.into());
    }
    app.run().await?;

    Ok(())
}

fn initialize_logging() -> Result<WorkerGuard> {
    let directory = dirs::data_local_dir().map_or_else(
        || std::path::PathBuf::from("logs"),
        |path| path.join("ptdx-modal").join("logs"),
    );
    std::fs::create_dir_all(&directory)?;

    let file_appender = tracing_appender::rolling::daily(&directory, "ptdx-modal.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .init();

    Ok(guard)
}
