//! A single planning session: the catalog being edited and its latest plan

use crate::catalog::Catalog;
use crate::config::PlannerConfig;
use crate::error::PlanResult;
use crate::schedule::Allocation;
use crate::scheduler::Scheduler;
use chrono::NaiveDate;

/// Owns the catalog and the most recent allocation for one user session
///
/// The driver holds a session and threads it through every call. A plan is
/// recomputed from scratch on each request, and any successful catalog edit
/// discards the previous plan so stale results are never shown.
#[derive(Debug, Clone)]
pub struct PlanningSession {
    catalog: Catalog,
    config: PlannerConfig,
    last_plan: Option<Allocation>,
}

impl PlanningSession {
    /// Start with an empty catalog using the configured name policy
    pub fn new(config: PlannerConfig) -> Self {
        Self::with_catalog(Catalog::with_unique_names(config.unique_names), config)
    }

    pub fn with_catalog(catalog: Catalog, config: PlannerConfig) -> Self {
        Self {
            catalog,
            config,
            last_plan: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn last_plan(&self) -> Option<&Allocation> {
        self.last_plan.as_ref()
    }

    /// Apply an edit to the catalog
    ///
    /// The closure works on a copy that replaces the catalog only when it
    /// returns `Ok`, so a closure making several changes is all or nothing.
    /// A successful edit drops the previous plan; a rejected one changes nothing.
    pub fn edit<T>(&mut self, f: impl FnOnce(&mut Catalog) -> PlanResult<T>) -> PlanResult<T> {
        let mut draft = self.catalog.clone();
        let value = f(&mut draft)?;
        self.catalog = draft;
        self.last_plan = None;
        Ok(value)
    }

    fn daily_limit(&self, daily_limit: Option<i64>) -> i64 {
        daily_limit.unwrap_or(i64::from(self.config.daily_limit_minutes))
    }

    /// Check a plan request without running it
    pub fn check_request(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        daily_limit: Option<i64>,
    ) -> PlanResult<()> {
        Scheduler::check_request(start_date, end_date, self.daily_limit(daily_limit)).map(|_| ())
    }

    /// Build a new plan over `[start_date, end_date]`, replacing the previous one
    ///
    /// `daily_limit` falls back to the configured default when `None`.
    pub fn plan(
        &mut self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        daily_limit: Option<i64>,
    ) -> PlanResult<&Allocation> {
        let limit = self.daily_limit(daily_limit);
        let scheduler = Scheduler::new(self.config.overflow_policy);
        let allocation = scheduler.run(self.catalog.flatten(), start_date, end_date, limit)?;
        Ok(self.last_plan.insert(allocation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlanError;

    fn d(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn session_with_article() -> PlanningSession {
        let mut session = PlanningSession::new(PlannerConfig::default());
        session
            .edit(|c| {
                c.add_class("Math")?;
                c.add_module("Math", "Algebra")?;
                c.add_article("Math", "Algebra", "Groups", 40)
            })
            .unwrap();
        session
    }

    #[test]
    fn test_plan_uses_configured_default_limit() {
        let mut session = session_with_article();
        let allocation = session.plan(d(2025, 5, 1), d(2025, 5, 1), None).unwrap();
        assert_eq!(allocation.schedule.daily_limit(), 360);
    }

    #[test]
    fn test_successful_edit_discards_plan() {
        let mut session = session_with_article();
        session.plan(d(2025, 5, 1), d(2025, 5, 2), Some(60)).unwrap();
        assert!(session.last_plan().is_some());

        session.edit(|c| c.add_class("Physics")).unwrap();
        assert!(session.last_plan().is_none());
    }

    #[test]
    fn test_rejected_edit_keeps_plan() {
        let mut session = session_with_article();
        session.plan(d(2025, 5, 1), d(2025, 5, 2), Some(60)).unwrap();

        let err = session.edit(|c| c.add_class("MATH")).unwrap_err();
        assert!(matches!(err, PlanError::DuplicateName { .. }));
        assert!(session.last_plan().is_some());
    }

    #[test]
    fn test_failing_multi_step_edit_is_rolled_back() {
        let mut session = session_with_article();
        let before = session.catalog().clone();

        let err = session
            .edit(|c| {
                c.add_class("Physics")?;
                c.add_module("Physics", "Optics")?;
                c.add_class("math")
            })
            .unwrap_err();

        assert!(matches!(err, PlanError::DuplicateName { .. }));
        assert_eq!(session.catalog(), &before);
    }

    #[test]
    fn test_check_request_uses_configured_limit() {
        let session = session_with_article();
        assert!(session.check_request(d(2025, 5, 1), d(2025, 5, 1), None).is_ok());
        assert_eq!(
            session.check_request(d(2025, 5, 1), d(2025, 5, 1), Some(0)),
            Err(PlanError::InvalidBudget(0))
        );
    }

    #[test]
    fn test_failed_plan_keeps_previous_plan() {
        let mut session = session_with_article();
        session.plan(d(2025, 5, 1), d(2025, 5, 2), Some(60)).unwrap();

        let err = session.plan(d(2025, 5, 2), d(2025, 5, 1), None).unwrap_err();
        assert!(matches!(err, PlanError::InvalidRange { .. }));
        assert_eq!(session.last_plan().unwrap().schedule.day_count(), 2);
    }

    #[test]
    fn test_lenient_config_allows_duplicates() {
        let config = PlannerConfig {
            unique_names: false,
            ..PlannerConfig::default()
        };
        let mut session = PlanningSession::new(config);
        session.edit(|c| c.add_class("Math")).unwrap();
        session.edit(|c| c.add_class("math")).unwrap();
        assert_eq!(session.catalog().classes().len(), 2);
    }
}
