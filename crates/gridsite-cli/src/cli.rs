//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};

// ============================================================================
// CLI argument types
// ============================================================================

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "GRIDSITE_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch every configured collection and export the content tree.
    Build {
        /// Output directory (overrides the configured one).
        #[arg(short, long)]
        out: Option<String>,

        /// Fetch and assemble without writing anything.
        #[arg(long)]
        dry_run: bool,
    },

    /// Fetch and normalize, reporting counts without writing.
    Check,

    /// Print version information.
    Version,

    /// Configuration operations.
    Config(ConfigCommand),
}

/// Config-specific subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Config subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite existing file.
        #[arg(long)]
        force: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_args_default() {
        let args = CliArgs::parse_from(["test"]);
        assert!(args.config.is_none());
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_cli_args_verbose() {
        let args = CliArgs::parse_from(["test", "--verbose"]);
        assert!(args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_cli_args_quiet() {
        let args = CliArgs::parse_from(["test", "--quiet"]);
        assert!(!args.verbose);
        assert!(args.quiet);
    }

    #[test]
    fn test_cli_args_config() {
        let args = CliArgs::parse_from(["test", "--config", "/path/to/config.toml"]);
        assert_eq!(args.config, Some("/path/to/config.toml".to_string()));
    }

    #[test]
    fn test_build_command_defaults() {
        let args = CliArgs::parse_from(["test", "build"]);
        match args.command {
            Some(Command::Build { out, dry_run }) => {
                assert!(out.is_none());
                assert!(!dry_run);
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_build_command_out_override() {
        let args = CliArgs::parse_from(["test", "build", "--out", "dist/content"]);
        match args.command {
            Some(Command::Build { out, .. }) => {
                assert_eq!(out.as_deref(), Some("dist/content"));
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_build_command_dry_run() {
        let args = CliArgs::parse_from(["test", "build", "--dry-run"]);
        match args.command {
            Some(Command::Build { dry_run, .. }) => assert!(dry_run),
            _ => panic!("Expected Build command with dry_run"),
        }
    }

    #[test]
    fn test_check_command() {
        let args = CliArgs::parse_from(["test", "check"]);
        assert!(matches!(args.command, Some(Command::Check)));
    }

    #[test]
    fn test_version_command() {
        let args = CliArgs::parse_from(["test", "version"]);
        assert!(matches!(args.command, Some(Command::Version)));
    }

    #[test]
    fn test_config_path_command() {
        let args = CliArgs::parse_from(["test", "config", "path"]);
        match args.command {
            Some(Command::Config(ConfigCommand {
                command: ConfigAction::Path,
            })) => {}
            _ => panic!("Expected Config Path command"),
        }
    }

    #[test]
    fn test_config_init_command() {
        let args = CliArgs::parse_from(["test", "config", "init"]);
        match args.command {
            Some(Command::Config(ConfigCommand {
                command: ConfigAction::Init { file, force },
            })) => {
                assert!(file.is_none());
                assert!(!force);
            }
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_config_init_force() {
        let args = CliArgs::parse_from(["test", "config", "init", "--force"]);
        match args.command {
            Some(Command::Config(ConfigCommand {
                command: ConfigAction::Init { force, .. },
            })) => assert!(force),
            _ => panic!("Expected Config Init command with force"),
        }
    }
}
