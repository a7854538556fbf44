// src/cli.rs

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "vibeshare - archive your vibe coding results from the command line",
    long_about = "vibeshare keeps a local feed of vibe coding artifacts: the prompt you used, links to the builder, repository and deployment, and an optional AI-generated title, summary and tags."
)]
pub struct Cli {
    /// Path to the database file. Defaults to ~/.config/vibeshare/vibeshare.db
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error). RUST_LOG overrides it.
    #[arg(long, global = true, default_value = crate::logging::DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Default)]
pub struct CreateArgs {
    #[arg(short, long, help = "The prompt text. Opens the default editor when omitted")]
    pub prompt: Option<String>,

    #[arg(long, help = "Link to the builder session (v0, bolt, ...)")]
    pub builder_url: Option<String>,

    #[arg(long, help = "Link to the source repository")]
    pub repo_url: Option<String>,

    #[arg(long, help = "Link to the deployment")]
    pub deploy_url: Option<String>,

    #[arg(short, long, help = "Author name")]
    pub author: Option<String>,

    #[arg(long, help = "Derive title, summary and tags with the AI service")]
    pub analyze: bool,

    #[arg(long, requires = "analyze", help = "Skip the network call and use the fallback analysis")]
    pub offline: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Creates the database and reports its location.
    Init,

    /// Shows every entry, newest first.
    Feed,

    /// Records a new entry and shows the updated feed.
    Create(CreateArgs),

    /// Previews the AI analysis of a prompt without saving anything.
    Analyze {
        /// The prompt to analyze. Opens the default editor when omitted.
        prompt: Option<String>,
    },

    /// Prints one entry including the full prompt.
    Show {
        #[arg(help = "The entry ID")]
        id: String,
    },

    /// Deletes one or more entries by ID.
    Del {
        #[arg(required = true, value_name = "ID")]
        ids: Vec<String>,
    },
}
