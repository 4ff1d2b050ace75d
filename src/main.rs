//! Aperture - a static site generator for photography studios.

mod build;
mod cli;
mod config;
mod content;
mod generator;
mod init;
mod logger;
mod render;
mod serve;
mod utils;
mod watch;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::{SiteConfig, cfg, init_config};

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    init_config(SiteConfig::load(cli)?);

    match &cli.command {
        Commands::Init { name } => init::new_site(&cfg(), name.is_some()),
        Commands::Build { .. } => build::build_site(&cfg()),
        Commands::Serve { .. } => {
            build::build_site(&cfg())?;
            serve::serve_site()
        }
    }
}
