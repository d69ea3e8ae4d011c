//! Core library for the Ideaflow content planner.
//!
//! Turns a short creative brief (platform, idea, goal, audience, optional
//! style) into a strictly typed short-video content plan: a project card, a
//! platform guide and a list of topics, each with a script and a shot list.
//! Creative generation is delegated to an external chat-completion endpoint;
//! this crate owns the contract around it.
//!
//! - [`models`]: platforms, the validated brief and the plan types
//! - [`prompt`]: deterministic model instruction for a brief
//! - [`schema`]: strict validation of model output
//! - [`client`]: the single HTTP call and its error classification
//! - [`planner`]: the pipeline tying it together
//! - [`review`]: advisory quality findings on accepted plans
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ideaflow_core::{ContentPlannerBuilder, PlanContent};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = ContentPlannerBuilder::new()
//!     .with_api_key(Some("sk-..."))
//!     .build()?;
//!
//! let brief = PlanContent {
//!     platform: Some("douyin".to_string()),
//!     idea: "用AI自动整理会议纪要".to_string(),
//!     goal: "展示效率提升".to_string(),
//!     audience: "职场新人".to_string(),
//!     style: Some("轻松幽默".to_string()),
//! };
//!
//! let plan = planner.plan_content(&brief).await?;
//! for topic in &plan.topics {
//!     println!("{} ({})", topic.title, topic.angle);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod prompt;
pub mod review;
pub mod schema;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use client::{ChatTransport, ModelClient, ModelConfig};
pub use error::{ContentError, Result};
pub use models::{IdeaInput, Plan, Platform};
pub use params::PlanContent;
pub use planner::{ContentPlanner, ContentPlannerBuilder};
pub use review::{review, Finding};
