use crate::error::{EntityKind, PlanError, PlanResult};
use serde::{Deserialize, Serialize};

/// Case-insensitive name comparison used for every sibling lookup
pub(crate) fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.trim().to_lowercase()
}

/// Trim a user-supplied name, rejecting empty or whitespace-only input
pub(crate) fn clean_name(kind: EntityKind, raw: &str) -> PlanResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        let field = if kind == EntityKind::Article {
            "title"
        } else {
            "name"
        };
        return Err(PlanError::InvalidInput(format!(
            "{} {} must not be empty",
            kind, field
        )));
    }
    Ok(name.to_string())
}

/// Validate a duration in minutes and narrow it to the stored width
pub(crate) fn checked_duration(minutes: i64) -> PlanResult<u32> {
    match u32::try_from(minutes) {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(PlanError::InvalidDuration(minutes)),
    }
}

/// A single reading or lesson with a fixed duration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    title: String,
    duration: u32,
}

impl Article {
    pub(crate) fn new(title: String, duration: u32) -> Self {
        Self { title, duration }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Duration in minutes
    pub fn duration(&self) -> u32 {
        self.duration
    }
}

/// A module groups articles, or is itself scheduled as one timed unit
///
/// A timed module carries its own duration and never holds articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) articles: Vec<Article>,
}

impl Module {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            duration: None,
            articles: Vec::new(),
        }
    }

    pub(crate) fn timed(name: String, duration: u32) -> Self {
        Self {
            name,
            duration: Some(duration),
            articles: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Own duration of a timed module, `None` for article-bearing modules
    pub fn duration(&self) -> Option<u32> {
        self.duration
    }

    pub fn is_timed(&self) -> bool {
        self.duration.is_some()
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Find an article by title, ignoring case
    pub fn article(&self, title: &str) -> Option<&Article> {
        self.articles.iter().find(|a| names_match(&a.title, title))
    }

    /// Sum of all schedulable minutes in this module
    pub fn total_minutes(&self) -> u64 {
        self.tasks("").map(|t| u64::from(t.duration)).sum()
    }

    /// Schedulable leaves of this module, in insertion order
    pub(crate) fn tasks<'a>(&'a self, class_name: &'a str) -> impl Iterator<Item = Task> + 'a {
        let own = self
            .duration
            .map(|duration| Task::new(class_name, &self.name, &self.name, duration));
        own.into_iter().chain(self.articles.iter().map(move |article| {
            Task::new(class_name, &self.name, &article.title, article.duration)
        }))
    }
}

/// A course made of ordered modules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) modules: Vec<Module>,
}

impl Class {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            modules: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Find a module by name, ignoring case
    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.iter().find(|m| names_match(&m.name, name))
    }

    pub fn total_minutes(&self) -> u64 {
        self.modules.iter().map(Module::total_minutes).sum()
    }
}

/// One schedulable unit, derived from the catalog by flattening
///
/// For a timed module `article_title` repeats the module name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    pub class_name: String,
    pub module_name: String,
    pub article_title: String,
    /// Duration in minutes
    pub duration: u32,
}

impl Task {
    pub fn new(
        class_name: impl Into<String>,
        module_name: impl Into<String>,
        article_title: impl Into<String>,
        duration: u32,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            module_name: module_name.into(),
            article_title: article_title.into(),
            duration,
        }
    }
}
