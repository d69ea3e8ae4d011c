//! MCP server implementation for Ideaflow
//!
//! Exposes the content planner to AI assistants as a single `planContent`
//! tool over the Model Context Protocol.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use ideaflow_core::{schema::plan_schema, ContentPlanner, PlanContent};
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::McpResult;

/// Name the server reports during the MCP handshake.
pub const SERVER_NAME: &str = "idea-to-content-mcp";

const PLAN_CONTENT_TOOL: &str = "planContent";

/// MCP server for Ideaflow
#[derive(Clone)]
pub struct IdeaflowMcpServer {
    planner: Arc<ContentPlanner>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl IdeaflowMcpServer {
    /// Create a new Ideaflow MCP server
    pub fn new(planner: ContentPlanner) -> Self {
        let mut tool_router = Self::tool_router();
        if let Some(route) = tool_router.map.get_mut(PLAN_CONTENT_TOOL) {
            route.attr.output_schema = plan_schema().as_object().cloned().map(Arc::new);
        }

        Self {
            planner: Arc::new(planner),
            tool_router,
        }
    }

    #[tool(
        name = "planContent",
        description = "根据平台、项目想法、目标与受众, 生成结构化的短视频内容规划: 项目卡片、平台指南, 以及带口播脚本和分镜的多个选题。Generate a structured short-video content plan (project card, platform guide, topics with scripts and shot lists) from a platform, idea, goal and audience. platform is one of douyin (default), bilibili, xiaohongshu, youtubeShorts, kuaishou; idea needs at least 5 characters, goal 3, audience 2; style is optional."
    )]
    async fn plan_content(&self, params: Parameters<PlanContent>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.planner.clone());
        handlers.plan_content(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for IdeaflowMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Ideaflow 把一句话的项目想法扩展成可直接开拍的短视频内容规划。
Ideaflow turns a one-line project idea into a ready-to-shoot short-video content plan.

## Tool
- `planContent`: provide `platform`, `idea`, `goal`, `audience` and optionally `style`

## Platforms
- `douyin` (抖音, default), `kuaishou` (快手): 30-90s vertical
- `bilibili` (B站): 3-10 minutes, horizontal
- `xiaohongshu` (小红书): 30-120s, vertical or 3:4
- `youtubeShorts`: 15-60s vertical

## Output
The plan contains a project card, a platform guide and at least four topics
(efficiency, experiment, story, tutorial angles), each with a hook, body
points, an outro with a call to action, and an ordered shot list.

Generation needs `OPENAI_API_KEY` in the server environment; without it the
tool returns a configuration error."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: IdeaflowMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting {SERVER_NAME} on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
