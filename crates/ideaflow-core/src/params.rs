//! Parameter structures for Ideaflow operations
//!
//! These are the raw, caller-supplied shapes shared by every interface (CLI,
//! MCP). They carry serde and schemars derives so the MCP layer can publish
//! their JSON schema directly, but they perform no validation themselves:
//! [`crate::models::IdeaInput`] is the validated form.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │   IdeaInput     │
//! │  (clap derives) │───▶│  (PlanContent)  │───▶│   (validated)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{Platform, MIN_AUDIENCE_CHARS, MIN_GOAL_CHARS, MIN_IDEA_CHARS};

/// A short creative brief to expand into a content plan.
///
/// The published schema carries the platform enum and the minimum lengths
/// enforced by [`crate::models::IdeaInput`]; `platform` and `style` are the
/// only optional fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PlanContent {
    /// Target platform: one of "douyin", "bilibili", "xiaohongshu",
    /// "youtubeShorts", "kuaishou". Defaults to "douyin".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Platform")]
    pub platform: Option<String>,
    /// Core idea of the project (at least 5 characters)
    #[schemars(length(min = MIN_IDEA_CHARS))]
    pub idea: String,
    /// What the content should achieve (at least 3 characters)
    #[schemars(length(min = MIN_GOAL_CHARS))]
    pub goal: String,
    /// Who the content is for (at least 2 characters)
    #[schemars(length(min = MIN_AUDIENCE_CHARS))]
    pub audience: String,
    /// Optional style preference, e.g. "轻松幽默" or "硬核技术向"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

#[cfg(test)]
mod tests {
    use schemars::schema_for;
    use serde_json::{json, Value};

    use super::*;

    fn input_schema() -> Value {
        schema_for!(PlanContent).to_value()
    }

    #[test]
    fn test_schema_requires_text_fields_only() {
        let schema = input_schema();
        let mut required: Vec<&str> = schema["required"]
            .as_array()
            .expect("required list")
            .iter()
            .filter_map(Value::as_str)
            .collect();
        required.sort_unstable();
        assert_eq!(required, ["audience", "goal", "idea"]);

        for field in ["idea", "goal", "audience"] {
            assert!(schema["properties"][field].get("default").is_none());
        }
    }

    #[test]
    fn test_schema_min_lengths_match_validation() {
        let schema = input_schema();
        let properties = &schema["properties"];
        assert_eq!(properties["idea"]["minLength"], json!(MIN_IDEA_CHARS));
        assert_eq!(properties["goal"]["minLength"], json!(MIN_GOAL_CHARS));
        assert_eq!(properties["audience"]["minLength"], json!(MIN_AUDIENCE_CHARS));
    }

    #[test]
    fn test_schema_lists_platform_tags() {
        let schema = input_schema().to_string();
        for platform in Platform::ALL {
            assert!(schema.contains(&format!("\"{}\"", platform.as_str())));
        }
    }

    #[test]
    fn test_missing_required_field_fails_to_parse() {
        let parsed = serde_json::from_value::<PlanContent>(json!({
            "platform": "bilibili",
            "idea": "一个AI自动剪辑脚本",
            "goal": "吸引独立开发者关注"
        }));
        assert!(parsed.is_err());
    }
}
