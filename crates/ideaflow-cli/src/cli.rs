//! Command handlers for the one-shot CLI commands.
//!
//! Brief arguments are parsed by clap into [`BriefArgs`] and converted into
//! the core [`PlanContent`], so the CLI and the MCP tool go through exactly
//! the same validation.

use std::fmt::Write;

use anyhow::{Context, Result};
use clap::Args;
use ideaflow_core::{prompt::build_prompt, ContentPlanner, IdeaInput, PlanContent, Platform};
use log::debug;

use crate::renderer::TerminalRenderer;

/// Creative brief
///
/// CLI wrapper for PlanContent that adds clap-specific argument handling.
#[derive(Args, Debug)]
pub struct BriefArgs {
    /// Target platform: douyin, bilibili, xiaohongshu, youtubeShorts or kuaishou
    #[arg(short, long)]
    pub platform: Option<String>,
    /// Core idea of the project
    #[arg(long)]
    pub idea: String,
    /// What the content should achieve
    #[arg(long)]
    pub goal: String,
    /// Who the content is for
    #[arg(long)]
    pub audience: String,
    /// Optional style preference
    #[arg(long)]
    pub style: Option<String>,
}

impl From<BriefArgs> for PlanContent {
    fn from(val: BriefArgs) -> Self {
        PlanContent {
            platform: val.platform,
            idea: val.idea,
            goal: val.goal,
            audience: val.audience,
            style: val.style,
        }
    }
}

/// CLI handler for one-shot commands
pub struct Cli {
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self { renderer }
    }

    /// Generate a plan and print it as Markdown (with review notes) or JSON.
    pub async fn plan(&self, planner: &ContentPlanner, brief: BriefArgs, json: bool) -> Result<()> {
        let params = PlanContent::from(brief);
        debug!("plan: {params:?}");

        let (plan, findings) = planner
            .plan_and_review(&params)
            .await
            .context("Failed to generate content plan")?;

        if json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
            return Ok(());
        }

        let mut output = plan.to_string();
        if !findings.is_empty() {
            writeln!(output, "## Review")?;
            writeln!(output)?;
            for finding in &findings {
                writeln!(output, "- {finding}")?;
            }
        }
        self.renderer.render(&output)
    }

    /// Print the model instruction for a brief.
    pub fn prompt(&self, brief: BriefArgs) -> Result<()> {
        let input = IdeaInput::try_from(PlanContent::from(brief))?;
        println!("{}", build_prompt(&input));
        Ok(())
    }

    /// List supported platforms.
    pub fn platforms(&self) -> Result<()> {
        let mut output = String::from("# Platforms\n\n");
        for platform in Platform::ALL {
            let range = platform.recommended_seconds();
            writeln!(
                output,
                "- **{}** ({}, {}-{}s): {}",
                platform.as_str(),
                platform.display_name(),
                range.start(),
                range.end(),
                platform.guidance()
            )?;
        }
        self.renderer.render(&output)
    }
}
