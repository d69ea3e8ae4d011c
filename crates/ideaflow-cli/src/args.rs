use clap::{Parser, Subcommand};

use crate::cli::BriefArgs;

/// Turn a short creative brief into a short-video content plan
///
/// Ideaflow expands a platform, idea, goal and audience into a project card,
/// platform guide and several topics with scripts and shot lists. It runs as
/// an MCP server for AI assistants (the default) or as a one-shot command.
#[derive(Parser)]
#[command(version, about, name = "ideaflow")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(flatten)]
    pub model: ModelArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Chat-completion endpoint settings
#[derive(clap::Args)]
pub struct ModelArgs {
    /// API credential; generation fails without it, the server still starts
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Model identifier [default: gpt-4.1-mini]
    #[arg(long, env = "OPENAI_MODEL", global = true)]
    pub model: Option<String>,

    /// Chat-completion endpoint URL
    #[arg(long, env = "OPENAI_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Deadline for one model call, in seconds
    #[arg(long, env = "IDEAFLOW_TIMEOUT_SECS", default_value_t = 120, global = true)]
    pub timeout_secs: u64,
}

/// Available commands for the Ideaflow CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Start the MCP server on stdio
    Serve,
    /// Generate a content plan and print it
    #[command(alias = "p")]
    Plan {
        #[command(flatten)]
        brief: BriefArgs,
        /// Print the plan as JSON instead of Markdown
        #[arg(long)]
        json: bool,
    },
    /// Print the model instruction for a brief without calling the model
    Prompt {
        #[command(flatten)]
        brief: BriefArgs,
    },
    /// List supported platforms with their guidance
    Platforms,
}
