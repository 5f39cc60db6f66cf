//! Command-line interface definitions.

use crate::generator::ExportFormat;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Site/theme configuration provider for a static blog
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: sitecfg.toml, searched upward)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print debug messages
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a sitecfg.toml with the built-in values
    #[command(visible_alias = "i")]
    Init {
        /// Print the config to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Emit the configuration object the site generator reads
    #[command(visible_alias = "e")]
    Export {
        #[command(flatten)]
        args: ExportArgs,
    },

    /// Validate links, sidebar groups and social icons
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },
}

/// Export command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Emit single-line output
    #[arg(long)]
    pub compact: bool,

    /// Write to this file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Content directory used to resolve internal routes
    #[arg(long, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Report problems without failing
    #[arg(long, short = 'w')]
    pub warn_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_defaults() {
        let cli = Cli::parse_from(["sitecfg", "export"]);
        let Commands::Export { args } = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.format, ExportFormat::Json);
        assert!(!args.compact);
        assert!(args.output.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["sitecfg", "e", "--format", "esm", "-C", "blog.toml", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("blog.toml")));
        assert!(matches!(
            cli.command,
            Commands::Export { args: ExportArgs { format: ExportFormat::Esm, .. } }
        ));
    }

    #[test]
    fn test_check_args() {
        let cli = Cli::parse_from(["sitecfg", "check", "--content", "docs", "-w"]);
        let Commands::Check { args } = cli.command else {
            panic!("expected check");
        };
        assert_eq!(args.content, Some(PathBuf::from("docs")));
        assert!(args.warn_only);
    }

    #[test]
    fn test_init() {
        let cli = Cli::parse_from(["sitecfg", "init", "--dry"]);
        assert!(matches!(cli.command, Commands::Init { dry: true }));
    }
}
