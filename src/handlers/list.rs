//! List handler for the study planner MCP server

use crate::PlannerServerHandler;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl PlannerServerHandler {
    /// Renders the whole catalog with per-class and per-module totals.
    pub async fn handle_list(&self) -> McpResult<String> {
        let session = self.session.lock().unwrap();
        Ok(formatting::format_catalog(session.catalog()))
    }
}
