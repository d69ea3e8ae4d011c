//! MCP tool handlers implementation

use std::sync::Arc;

use ideaflow_core::{ContentPlanner, Plan, PlanContent};
use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use serde_json::Value;

use super::errors::to_mcp_error;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Arc<ContentPlanner>,
}

impl McpHandlers {
    pub fn new(planner: Arc<ContentPlanner>) -> Self {
        Self { planner }
    }

    /// Run the planning pipeline for one brief.
    ///
    /// The plan goes out twice: as pretty-printed JSON text for clients that
    /// only read content blocks, and as structured content for clients that
    /// consume the output schema directly.
    pub async fn plan_content(&self, Parameters(params): Parameters<PlanContent>) -> McpResult {
        debug!("planContent: {:?}", params);

        let plan = self
            .planner
            .plan_content(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to plan content", &e))?;

        let (text, structured) = render_plan(&plan)?;
        let mut result = CallToolResult::success(vec![Content::text(text)]);
        result.structured_content = Some(structured);
        Ok(result)
    }
}

/// Pretty JSON text and structured value of a plan, from the same
/// serialization so both carry identical numbers.
fn render_plan(plan: &Plan) -> Result<(String, Value), ErrorData> {
    let structured = serde_json::to_value(plan)
        .map_err(|e| ErrorData::internal_error(format!("Failed to serialize plan: {e}"), None))?;
    let text = serde_json::to_string_pretty(&structured)
        .map_err(|e| ErrorData::internal_error(format!("Failed to serialize plan: {e}"), None))?;
    Ok((text, structured))
}
