//! Validated creative brief.

use crate::{
    error::{ContentError, Result},
    models::Platform,
    params::PlanContent,
};

/// Minimum length of `idea`, in characters.
pub const MIN_IDEA_CHARS: usize = 5;
/// Minimum length of `goal`, in characters.
pub const MIN_GOAL_CHARS: usize = 3;
/// Minimum length of `audience`, in characters.
pub const MIN_AUDIENCE_CHARS: usize = 2;

/// A brief that passed input validation.
///
/// Built from a [`PlanContent`] with `IdeaInput::try_from`, which rejects
/// unsupported platforms and text fields below their minimum length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaInput {
    pub platform: Platform,
    pub idea: String,
    pub goal: String,
    pub audience: String,
    /// Left absent when unspecified; the prompt supplies its own fallback.
    pub style: Option<String>,
}

fn require_min_chars(field: &str, value: &str, min: usize) -> Result<()> {
    let count = value.chars().count();
    if count < min {
        return Err(ContentError::invalid_input(field).with_reason(format!(
            "must be at least {min} characters, got {count}"
        )));
    }
    Ok(())
}

impl TryFrom<&PlanContent> for IdeaInput {
    type Error = ContentError;

    fn try_from(params: &PlanContent) -> Result<Self> {
        let platform = match params.platform.as_deref() {
            None => Platform::default(),
            Some(tag) => tag
                .parse()
                .map_err(|reason: String| ContentError::invalid_input("platform").with_reason(reason))?,
        };

        require_min_chars("idea", &params.idea, MIN_IDEA_CHARS)?;
        require_min_chars("goal", &params.goal, MIN_GOAL_CHARS)?;
        require_min_chars("audience", &params.audience, MIN_AUDIENCE_CHARS)?;

        Ok(Self {
            platform,
            idea: params.idea.clone(),
            goal: params.goal.clone(),
            audience: params.audience.clone(),
            style: params.style.clone(),
        })
    }
}

impl TryFrom<PlanContent> for IdeaInput {
    type Error = ContentError;

    fn try_from(params: PlanContent) -> Result<Self> {
        IdeaInput::try_from(&params)
    }
}
