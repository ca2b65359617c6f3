//! Common test utilities for integration tests
#![allow(dead_code)]

use chrono::NaiveDate;
use study_planner::{Catalog, PlannerConfig, PlannerServerHandler, Task};

pub fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Create a test handler with an empty session and default configuration
pub fn get_test_handler() -> PlannerServerHandler {
    PlannerServerHandler::new(None, PlannerConfig::default()).unwrap()
}

/// Create a test handler with a custom configuration
pub fn get_test_handler_with(config: PlannerConfig) -> PlannerServerHandler {
    PlannerServerHandler::new(None, config).unwrap()
}

/// Biology → Cells → Intro(30), Mitosis(45), Meiosis(50)
pub fn biology_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add_class("Biology").unwrap();
    catalog.add_module("Biology", "Cells").unwrap();
    catalog.add_article("Biology", "Cells", "Intro", 30).unwrap();
    catalog.add_article("Biology", "Cells", "Mitosis", 45).unwrap();
    catalog.add_article("Biology", "Cells", "Meiosis", 50).unwrap();
    catalog
}

/// Build a task list from (title, minutes) pairs under one class and module
pub fn tasks(items: &[(&str, u32)]) -> Vec<Task> {
    items
        .iter()
        .map(|(title, minutes)| Task::new("Class", "Module", *title, *minutes))
        .collect()
}
