//! # Keycloak Rust login theme server
//!
//! Main entry point: serves the theme over HTTP or renders a single context.

#![forbid(unsafe_code)]

use std::io::Write;

use clap::Parser;
use kc_theme::{Theme, ThemeConfig};
use kc_theme_server::cli::{Cli, Command, RenderArgs, ServeArgs};
use kc_theme_server::{Server, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ServerConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Some(Command::Render(args)) => render(cli.config, &args),
        Some(Command::Serve(args)) => serve(config, cli.config, args).await,
        None => serve(config, cli.config, ServeArgs::default()).await,
    }
}

async fn serve(
    mut config: ServerConfig,
    theme_config: Option<std::path::PathBuf>,
    args: ServeArgs,
) -> anyhow::Result<()> {
    if theme_config.is_some() {
        config.theme_config_path = theme_config;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    tracing::info!("Keycloak Rust login theme starting...");
    Server::new(config)?.run().await
}

fn render(theme_config: Option<std::path::PathBuf>, args: &RenderArgs) -> anyhow::Result<()> {
    let config = match theme_config {
        Some(path) => ThemeConfig::from_file(path)?,
        None => ThemeConfig::default(),
    };
    let theme = Theme::new(config)?;

    let json = std::fs::read_to_string(&args.context)?;
    let html = theme.render_json(&json)?;

    match &args.out {
        Some(path) => {
            std::fs::write(path, html)?;
            tracing::info!(path = %path.display(), "Page written");
        }
        None => std::io::stdout().write_all(html.as_bytes())?,
    }
    Ok(())
}
