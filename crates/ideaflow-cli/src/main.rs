//! Ideaflow CLI Application
//!
//! Runs the content planner as an MCP server on stdio, or as one-shot
//! commands for planning from the terminal.

mod args;
mod cli;
mod mcp;
mod renderer;

use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands, ModelArgs};
use clap::Parser;
use cli::Cli;
use ideaflow_core::{ContentPlanner, ContentPlannerBuilder};
use log::info;
use mcp::{run_stdio_server, IdeaflowMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

/// Builds the content planner from the model settings. Only the commands
/// that may call the model need one.
fn build_planner(model: ModelArgs) -> Result<ContentPlanner> {
    ContentPlannerBuilder::new()
        .with_api_key(model.api_key)
        .with_model(model.model)
        .with_api_url(model.api_url)
        .with_timeout(Duration::from_secs(model.timeout_secs))
        .build()
        .context("Failed to initialize content planner")
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        no_color,
        model,
        command,
    } = Args::parse();

    let cli = Cli::new(TerminalRenderer::new(!no_color));

    info!("Ideaflow started");

    match command.unwrap_or(Serve) {
        Serve => {
            let planner = build_planner(model)?;
            run_stdio_server(IdeaflowMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
        Plan { brief, json } => cli.plan(&build_planner(model)?, brief, json).await,
        Prompt { brief } => cli.prompt(brief),
        Platforms => cli.platforms(),
    }
}
