//! High-level API turning a brief into a content plan.
//!
//! [`ContentPlanner::plan_content`] is the whole pipeline:
//!
//! ```text
//! PlanContent ──validate──▶ IdeaInput ──build_prompt──▶ prompt
//!                                                          │
//!        Plan ◀──validate_plan── JSON ◀──ModelClient::generate
//! ```
//!
//! Any stage failing ends the call with that stage's error. The planner holds
//! no per-call state, so one instance serves concurrent calls.
//!
//! # Usage
//!
//! ```rust,no_run
//! use ideaflow_core::{params::PlanContent, ContentPlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = ContentPlannerBuilder::new()
//!     .with_api_key(std::env::var("OPENAI_API_KEY").ok())
//!     .build()?;
//!
//! let plan = planner
//!     .plan_content(&PlanContent {
//!         platform: Some("bilibili".to_string()),
//!         idea: "一个AI自动剪辑脚本".to_string(),
//!         goal: "吸引独立开发者关注".to_string(),
//!         audience: "独立开发者".to_string(),
//!         style: None,
//!     })
//!     .await?;
//! println!("{plan}");
//! # Ok(())
//! # }
//! ```

mod builder;

pub use builder::ContentPlannerBuilder;
use log::{debug, info, warn};

use crate::{
    client::ModelClient,
    error::Result,
    models::{IdeaInput, Plan},
    params::PlanContent,
    prompt::build_prompt,
    review::{review, Finding},
};

/// Main interface for generating content plans.
#[derive(Clone)]
pub struct ContentPlanner {
    client: ModelClient,
}

impl ContentPlanner {
    fn new(client: ModelClient) -> Self {
        Self { client }
    }

    /// The model client used for generation.
    pub fn client(&self) -> &ModelClient {
        &self.client
    }

    /// Validates a brief and builds its model instruction without calling
    /// the model.
    pub fn prompt_for(&self, params: &PlanContent) -> Result<(IdeaInput, String)> {
        let input = IdeaInput::try_from(params)?;
        let prompt = build_prompt(&input);
        Ok((input, prompt))
    }

    /// Generates a validated content plan for a brief.
    ///
    /// # Errors
    ///
    /// `Validation` for a bad brief (the model is not called), otherwise any
    /// error from [`ModelClient::generate`].
    pub async fn plan_content(&self, params: &PlanContent) -> Result<Plan> {
        self.plan_and_review(params).await.map(|(plan, _)| plan)
    }

    /// Like [`plan_content`](Self::plan_content), also returning the quality
    /// findings for the accepted plan. Findings never fail the call.
    pub async fn plan_and_review(&self, params: &PlanContent) -> Result<(Plan, Vec<Finding>)> {
        let (input, prompt) = self.prompt_for(params)?;
        debug!("Planning content for {} ({})", input.platform, input.idea);

        let plan = self.client.generate(&prompt).await?;

        let findings = review(&plan, input.platform);
        for finding in &findings {
            warn!("Plan '{}': {finding}", plan.project.name);
        }
        info!(
            "Generated plan '{}' with {} topics for {}",
            plan.project.name,
            plan.topics.len(),
            input.platform
        );

        Ok((plan, findings))
    }
}

#[cfg(test)]
mod tests;
