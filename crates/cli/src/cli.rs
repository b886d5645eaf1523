use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{
    ResolveArgs, actions_command, init_command, resolve_command, scopes_command,
};

#[derive(Parser, Debug)]
#[command(name = "scope-resolver")]
#[command(version, about, long_about = None)]
#[command(subcommand_required = true, arg_required_else_help = true)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve partial targets at a location into full targets
    #[command(visible_alias = "r")]
    Resolve {
        /// File with optional 1-based line and column (e.g., src/app.ts:12:5)
        location: String,

        /// Partial targets as JSON, or @path to a JSON file
        #[arg(short, long)]
        targets: String,

        /// Named action whose preferences apply
        #[arg(short, long, default_value = "take")]
        action: String,

        /// Explicit preferences as JSON (overrides --action), or @path
        #[arg(short, long)]
        preferences: Option<String>,

        /// Print the resolved targets as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the innermost match of every scope type at a location
    #[command(visible_alias = "s")]
    Scopes {
        /// File with optional 1-based line and column (e.g., data.json:3:7)
        location: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List built-in and configured actions
    Actions {
        /// Directory to look up configuration from (defaults to current directory)
        #[arg(long)]
        cwd: Option<String>,

        /// Print the actions as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a default .scope-resolver.json
    Init {
        /// Custom working directory (defaults to current directory)
        #[arg(long)]
        cwd: Option<String>,

        /// Force overwrite an existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Resolve {
                location,
                targets,
                action,
                preferences,
                json,
            } => resolve_command(ResolveArgs {
                location: &location,
                targets: &targets,
                action: &action,
                preferences: preferences.as_deref(),
                json,
            }),
            Commands::Scopes { location, json } => scopes_command(&location, json),
            Commands::Actions { cwd, json } => actions_command(cwd.as_deref(), json),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}
