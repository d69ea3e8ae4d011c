//! Data models for briefs and content plans.
//!
//! - [`Platform`]: closed set of supported platforms plus the guidance table
//! - [`IdeaInput`]: a validated brief, built from [`crate::params::PlanContent`]
//! - [`Plan`] and its nested records: the output contract
//!
//! Plans implement [`std::fmt::Display`] as Markdown for terminal output.

mod input;
mod plan;
mod platform;


pub use input::{IdeaInput, MIN_AUDIENCE_CHARS, MIN_GOAL_CHARS, MIN_IDEA_CHARS};
pub use plan::{
    Angle, Hook, Outro, Plan, PlatformGuide, ProjectCard, Script, Shot, ShotType, StepPoint,
    Topic,
};
pub use platform::{guidance_for_tag, Platform};
