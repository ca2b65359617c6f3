//! Catalog editing handlers for the study planner MCP server

use crate::PlannerServerHandler;
use crate::formatting;
use mcp_attr::{Result as McpResult, bail_public};

impl PlannerServerHandler {
    /// Appends a class to the end of the catalog.
    pub async fn handle_add_class(&self, name: String) -> McpResult<String> {
        let mut session = self.session.lock().unwrap();

        if let Err(e) = session.edit(|catalog| catalog.add_class(&name)) {
            drop(session);
            bail_public!(_, "{}", e);
        }

        let count = session.catalog().classes().len();
        Ok(format!(
            "Class '{}' added ({} class(es) in catalog)",
            name.trim(),
            count
        ))
    }

    /// Appends a module to a class. A module given a duration is scheduled as
    /// one unit and cannot hold articles.
    pub async fn handle_add_module(
        &self,
        class: String,
        name: String,
        duration: Option<i64>,
    ) -> McpResult<String> {
        let mut session = self.session.lock().unwrap();

        let result = session.edit(|catalog| match duration {
            Some(minutes) => catalog.add_timed_module(&class, &name, minutes),
            None => catalog.add_module(&class, &name),
        });
        if let Err(e) = result {
            drop(session);
            bail_public!(_, "{}", e);
        }
        drop(session);

        Ok(match duration {
            Some(minutes) => format!(
                "Module '{}' added to class '{}' as a single {} min unit",
                name.trim(),
                class.trim(),
                minutes
            ),
            None => format!("Module '{}' added to class '{}'", name.trim(), class.trim()),
        })
    }

    /// Adds pasted `<title> <duration>` lines as articles, keeping the valid ones.
    pub async fn handle_add_articles(
        &self,
        class: String,
        module: String,
        lines: String,
    ) -> McpResult<String> {
        let mut session = self.session.lock().unwrap();

        let result = session.edit(|catalog| catalog.add_articles_from_text(&class, &module, &lines));
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                drop(session);
                bail_public!(_, "{}", e);
            }
        };
        drop(session);

        Ok(formatting::format_batch_outcome(module.trim(), &outcome))
    }

    /// Removes a class with all its modules and articles.
    pub async fn handle_remove_class(&self, name: String) -> McpResult<String> {
        let mut session = self.session.lock().unwrap();

        match session.edit(|catalog| catalog.remove_class(&name)) {
            Ok(class) => Ok(format!(
                "Class '{}' removed ({} module(s))",
                class.name(),
                class.modules().len()
            )),
            Err(e) => {
                drop(session);
                bail_public!(_, "{}", e);
            }
        }
    }

    /// Removes a module with its articles.
    pub async fn handle_remove_module(&self, class: String, name: String) -> McpResult<String> {
        let mut session = self.session.lock().unwrap();

        match session.edit(|catalog| catalog.remove_module(&class, &name)) {
            Ok(module) => Ok(format!(
                "Module '{}' removed ({} article(s))",
                module.name(),
                module.articles().len()
            )),
            Err(e) => {
                drop(session);
                bail_public!(_, "{}", e);
            }
        }
    }

    /// Removes a single article.
    pub async fn handle_remove_article(
        &self,
        class: String,
        module: String,
        title: String,
    ) -> McpResult<String> {
        let mut session = self.session.lock().unwrap();

        match session.edit(|catalog| catalog.remove_article(&class, &module, &title)) {
            Ok(article) => Ok(format!(
                "Article '{}' ({} min) removed",
                article.title(),
                article.duration()
            )),
            Err(e) => {
                drop(session);
                bail_public!(_, "{}", e);
            }
        }
    }
}
