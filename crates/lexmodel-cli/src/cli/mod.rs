//! CLI command definitions for the `lexm` binary.
//!
//! Uses clap derive macros for argument parsing. Request documents are the
//! service's own JSON request syntax (camelCase members), read from a file or
//! from stdin when the path is `-`.

pub mod config;
pub mod decode;
pub mod operations;
pub mod request;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Check, bind and inspect Lex Model Building Service requests offline.
#[derive(Parser)]
#[command(name = "lexm", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of `~/.lexmodel/config.toml`.
    #[arg(long, global = true, env = "LEXMODEL_CONFIG")]
    pub config: Option<PathBuf>,

    /// AWS region, overriding the config file.
    #[arg(long, global = true, env = "AWS_REGION")]
    pub region: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the supported operations with their HTTP bindings.
    #[command(alias = "ops")]
    Operations,

    /// Check a request document against the service constraints.
    Validate {
        /// Operation name (`GetBot`, `get-bot`).
        operation: String,

        /// JSON request document, or `-` for stdin.
        file: PathBuf,
    },

    /// Print the HTTP request a document binds to.
    Render {
        /// Operation name (`PutIntent`, `put-intent`).
        operation: String,

        /// JSON request document, or `-` for stdin.
        file: PathBuf,

        /// Bind even when the document breaks constraints.
        #[arg(long)]
        no_validate: bool,
    },

    /// Classify a service error response body.
    #[command(name = "decode-error")]
    DecodeError {
        /// HTTP status code of the response.
        #[arg(long)]
        status: u16,

        /// Value of the `x-amzn-ErrorType` response header.
        #[arg(long)]
        error_type: Option<String>,

        /// Value of the `Retry-After` response header.
        #[arg(long)]
        retry_after: Option<String>,

        /// Response body, or `-` for stdin.
        file: PathBuf,
    },

    /// Show the effective client configuration.
    Config,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
