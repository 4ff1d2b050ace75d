//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Aperture static site generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (defaults to the current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Assets directory path (relative to project root)
    #[arg(short, long)]
    pub assets: Option<PathBuf>,

    /// Config file name (default: aperture.toml)
    #[arg(short = 'C', long, default_value = "aperture.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared build arguments for Build and Serve commands
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(long)]
    pub clean: bool,

    /// Minify the generated html and xml
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// enable rss feed generation
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub rss: Option<bool>,

    /// enable sitemap generation
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub sitemap: Option<bool>,

    /// Override base URL for the site.
    ///
    /// Useful for CI/CD deployments where the production URL differs from local development.
    /// This avoids modifying aperture.toml, keeping the source file clean.
    ///
    /// Example: Deploying to a GitHub Pages project site:
    ///   aperture build --base-url "https://studio.github.io/site"
    #[arg(long = "base-url")]
    pub base_url: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Init a starter site with sample content
    Init {
        /// the name(path) of site directory, related to `root`
        name: Option<PathBuf>,
    },

    /// Build the site into the output directory
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Serve the site. Rebuild and reload on change automatically
    Serve {
        #[command(flatten)]
        build_args: BuildArgs,

        /// Interface to bind on
        #[arg(short, long)]
        interface: Option<String>,

        /// The port you should provide
        #[arg(short, long)]
        port: Option<u16>,

        /// enable watch
        #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        watch: Option<bool>,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
    pub const fn is_serve(&self) -> bool {
        matches!(self.command, Commands::Serve { .. })
    }

    /// Build arguments for the commands that carry them.
    pub fn build_args(&self) -> Option<&BuildArgs> {
        match &self.command {
            Commands::Build { build_args } | Commands::Serve { build_args, .. } => Some(build_args),
            Commands::Init { .. } => None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_parse_build_defaults() {
        let cli = Cli::try_parse_from(["aperture", "build"]).unwrap();
        assert!(cli.is_build());
        assert_eq!(cli.config, PathBuf::from("aperture.toml"));

        let args = cli.build_args().unwrap();
        assert!(!args.clean);
        assert_eq!(args.minify, None);
        assert_eq!(args.rss, None);
    }

    #[test]
    fn test_parse_toggle_flags() {
        // Bare flag means true, explicit value is honored
        let cli = Cli::try_parse_from(["aperture", "build", "--minify"]).unwrap();
        assert_eq!(cli.build_args().unwrap().minify, Some(true));

        let cli = Cli::try_parse_from(["aperture", "build", "--minify", "false", "--rss"]).unwrap();
        let args = cli.build_args().unwrap();
        assert_eq!(args.minify, Some(false));
        assert_eq!(args.rss, Some(true));
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from([
            "aperture", "serve", "-p", "8080", "-i", "0.0.0.0", "-w", "false",
        ])
        .unwrap();
        assert!(cli.is_serve());

        let Commands::Serve {
            interface,
            port,
            watch,
            ..
        } = &cli.command
        else {
            panic!("expected serve command");
        };
        assert_eq!(interface.as_deref(), Some("0.0.0.0"));
        assert_eq!(*port, Some(8080));
        assert_eq!(*watch, Some(false));
    }

    #[test]
    fn test_parse_init_with_name() {
        let cli = Cli::try_parse_from(["aperture", "init", "studio"]).unwrap();
        assert!(cli.is_init());
        assert!(cli.build_args().is_none());

        let Commands::Init { name } = &cli.command else {
            panic!("expected init command");
        };
        assert_eq!(name.as_deref(), Some(Path::new("studio")));
    }

    #[test]
    fn test_parse_root_and_base_url() {
        let cli = Cli::try_parse_from([
            "aperture",
            "--root",
            "/tmp/site",
            "build",
            "--base-url",
            "https://lumiere.example",
        ])
        .unwrap();
        assert_eq!(cli.root.as_deref(), Some(Path::new("/tmp/site")));
        assert_eq!(
            cli.build_args().unwrap().base_url.as_deref(),
            Some("https://lumiere.example")
        );
    }
}
