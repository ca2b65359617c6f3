//! Study Planner MCP Server - Main Entry Point
//!
//! This is the main entry point for the study planner server application.
//! The actual implementation is in the `study_planner` library.
//!
//! Logs go to stderr; stdout carries the MCP protocol. Set `RUST_LOG` to
//! change the level (default: info).

use anyhow::Result;
use clap::Parser;
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;
use study_planner::{OverflowPolicy, PlannerConfig, PlannerServerHandler};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Study Planner - spread a study syllabus across calendar days via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML catalog to start the session with
    catalog: Option<String>,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Default daily limit in minutes (overrides the config file)
    #[arg(long)]
    daily_limit: Option<u32>,

    /// What to do with tasks that do not fit: report or last-day (overrides the config file)
    #[arg(long)]
    overflow: Option<OverflowPolicy>,

    /// Accept sibling names that differ only in case
    #[arg(long)]
    allow_duplicates: bool,
}

impl Args {
    fn planner_config(&self) -> Result<PlannerConfig> {
        let mut config = match &self.config {
            Some(path) => PlannerConfig::load(path)?,
            None => PlannerConfig::default(),
        };

        if let Some(limit) = self.daily_limit {
            config.daily_limit_minutes = limit;
        }
        if let Some(policy) = self.overflow {
            config.overflow_policy = policy;
        }
        if self.allow_duplicates {
            config.unique_names = false;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let args = Args::parse();
    let config = args.planner_config()?;

    info!(
        daily_limit = config.daily_limit_minutes,
        overflow = %config.overflow_policy,
        unique_names = config.unique_names,
        "starting study planner"
    );

    let handler = PlannerServerHandler::new(args.catalog.as_deref(), config)?;
    serve_stdio(handler).await?;
    Ok(())
}
