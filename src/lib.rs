//! Study Planner MCP Server Library
//!
//! This library spreads a hierarchical study catalog (class → module → article,
//! each article with a duration in minutes) across the days of a calendar window
//! under a daily time budget, and serves it over the Model Context Protocol.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `PlannerServerHandler` - Handles MCP protocol communication
//! - **Session Layer**: `PlanningSession` - Owns the catalog and the latest plan
//! - **Domain Layer**: `catalog`, `scheduler` and `schedule` - Data model and the
//!   greedy day allocation
//!
//! # Example
//!
//! ```no_run
//! use study_planner::{PlannerConfig, PlannerServerHandler};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = PlannerServerHandler::new(Some("syllabus.toml"), PlannerConfig::default())?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod formatting;
mod handlers;
pub mod schedule;
pub mod scheduler;
pub mod session;
mod storage;
pub mod validation;

use anyhow::Result;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::Mutex;

// Re-export commonly used types
pub use catalog::{Article, BatchOutcome, Catalog, Class, Module, Task, parse_article_line};
pub use config::{DEFAULT_DAILY_LIMIT_MINUTES, PlannerConfig};
pub use error::{EntityKind, PlanError, PlanResult};
pub use schedule::{Allocation, Schedule};
pub use scheduler::{OverflowPolicy, Scheduler};
pub use session::PlanningSession;
pub use storage::Storage;

/// MCP Server handler for study planning
///
/// Holds one planning session for the lifetime of the server. Tool calls are
/// serialized through the session lock.
pub struct PlannerServerHandler {
    pub(crate) session: Mutex<PlanningSession>,
}

impl PlannerServerHandler {
    /// Create a new study planner server handler
    ///
    /// # Arguments
    /// * `catalog_path` - Optional TOML catalog to seed the session with; a missing file starts empty
    /// * `config` - Planner configuration (default limit, overflow policy, name policy)
    ///
    /// # Returns
    /// Result containing the handler or an error
    ///
    /// # Example
    /// ```no_run
    /// # use study_planner::{PlannerConfig, PlannerServerHandler};
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = PlannerServerHandler::new(None, PlannerConfig::default())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(catalog_path: Option<&str>, config: PlannerConfig) -> Result<Self> {
        let catalog = match catalog_path {
            Some(path) => Storage::new(path).load(config.unique_names)?,
            None => Catalog::with_unique_names(config.unique_names),
        };
        Ok(Self::from_session(PlanningSession::with_catalog(
            catalog, config,
        )))
    }

    /// Wrap an existing session
    pub fn from_session(session: PlanningSession) -> Self {
        Self {
            session: Mutex::new(session),
        }
    }
}

/// Study planner that spreads a syllabus across calendar days under a daily time budget.
///
/// The catalog is a three-level outline: classes contain modules, modules contain articles,
/// and every article has a duration in minutes. A module may instead carry its own duration
/// and be scheduled as one unit. Names are unique among siblings, ignoring case.
///
/// Planning keeps syllabus order: tasks are packed into each day while they fit under the
/// daily limit and are never split or reordered. A task longer than the limit gets a day
/// to itself. Tasks that do not fit in the date range are reported as unplaced.
///
/// Workflow: add_class → add_module → add_articles → list to review → plan.
#[mcp_server]
impl McpServer for PlannerServerHandler {
    /// **Add Class**: Append a class (course) to the catalog. Names are unique, ignoring case.
    #[tool]
    async fn add_class(
        &self,
        /// Class name (e.g., "Biology")
        name: String,
    ) -> McpResult<String> {
        self.handle_add_class(name).await
    }

    /// **Add Module**: Append a module to a class.
    /// **Duration**: Give a duration only for a module studied as one block without articles.
    #[tool]
    async fn add_module(
        &self,
        /// Name of the owning class
        class: String,
        /// Module name (e.g., "Cells")
        name: String,
        /// Minutes, only for a module scheduled as a single unit (optional)
        duration: Option<i64>,
    ) -> McpResult<String> {
        self.handle_add_module(class, name, duration).await
    }

    /// **Add Articles**: Paste articles into a module, one per line as "<title> <minutes>".
    /// **Lenient**: Lines not in that form are skipped; duplicates are reported; valid lines are kept.
    #[tool]
    async fn add_articles(
        &self,
        /// Name of the owning class
        class: String,
        /// Name of the owning module
        module: String,
        /// One article per line, e.g. "Intro 30\nMitosis 45"
        lines: String,
    ) -> McpResult<String> {
        self.handle_add_articles(class, module, lines).await
    }

    /// **Remove Class**: Delete a class with all of its modules and articles.
    #[tool]
    async fn remove_class(
        &self,
        /// Class name
        name: String,
    ) -> McpResult<String> {
        self.handle_remove_class(name).await
    }

    /// **Remove Module**: Delete a module with all of its articles.
    #[tool]
    async fn remove_module(
        &self,
        /// Name of the owning class
        class: String,
        /// Module name
        name: String,
    ) -> McpResult<String> {
        self.handle_remove_module(class, name).await
    }

    /// **Remove Article**: Delete one article from a module.
    #[tool]
    async fn remove_article(
        &self,
        /// Name of the owning class
        class: String,
        /// Name of the owning module
        module: String,
        /// Article title
        title: String,
    ) -> McpResult<String> {
        self.handle_remove_article(class, module, title).await
    }

    /// **List**: Show the catalog outline with minutes per class and module.
    #[tool]
    async fn list(&self) -> McpResult<String> {
        self.handle_list().await
    }

    /// **Plan**: Spread the catalog over the days from start_date to end_date (inclusive).
    /// **Output**: Tasks per day with totals, free days, and any tasks that did not fit.
    #[tool]
    async fn plan(
        &self,
        /// First day, YYYY-MM-DD
        start_date: String,
        /// Last day (inclusive), YYYY-MM-DD
        end_date: String,
        /// Daily limit in minutes; defaults to the server setting (optional)
        daily_limit: Option<i64>,
    ) -> McpResult<String> {
        self.handle_plan(start_date, end_date, daily_limit).await
    }
}
