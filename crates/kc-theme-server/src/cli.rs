//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Keycloak Rust login theme server.
#[derive(Debug, Parser)]
#[command(name = "kc-theme-server")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Theme configuration file (overrides KC_THEME_CONFIG).
    #[arg(short, long, env = "KC_THEME_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute. Defaults to `serve`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server.
    Serve(ServeArgs),

    /// Render one context file to HTML.
    Render(RenderArgs),
}

/// Arguments of `serve`.
#[derive(Debug, Default, clap::Args)]
pub struct ServeArgs {
    /// Host to bind to (overrides KC_THEME_HOST).
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides KC_THEME_PORT).
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments of `render`.
#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    /// JSON file holding the page context.
    #[arg(long)]
    pub context: PathBuf,

    /// Output file. Standard output when omitted.
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}
