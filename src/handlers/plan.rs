//! Plan handler for the study planner MCP server

use crate::PlannerServerHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl PlannerServerHandler {
    /// Parses the date range, runs the scheduler over the current catalog and
    /// renders the resulting plan. The new plan replaces the previous one.
    pub async fn handle_plan(
        &self,
        start_date: String,
        end_date: String,
        daily_limit: Option<i64>,
    ) -> McpResult<String> {
        let start = validation::parse_date("start_date", &start_date)?;
        let end = validation::parse_date("end_date", &end_date)?;

        let mut session = self.session.lock().unwrap();
        if let Err(e) = session.check_request(start, end, daily_limit) {
            drop(session);
            bail_public!(_, "{}", e);
        }
        if session.catalog().is_empty() {
            drop(session);
            bail_public!(_, "Nothing to plan: add a class with modules and articles first.");
        }

        let result = session
            .plan(start, end, daily_limit)
            .map(formatting::format_allocation);
        drop(session);

        match result {
            Ok(text) => Ok(text),
            Err(e) => bail_public!(_, "{}", e),
        }
    }
}
