use crate::catalog::entities::{
    Article, Class, Module, Task, checked_duration, clean_name, names_match,
};
use crate::catalog::parse::parse_article_line;
use crate::error::{EntityKind, PlanError, PlanResult};
use serde::Serialize;
use tracing::debug;

/// Outcome of a pasted batch of article lines
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BatchOutcome {
    /// Titles added, in input order
    pub added: Vec<String>,
    /// Non-blank lines that were not `<title> <duration>` and were dropped
    pub skipped: usize,
    /// Well-formed lines the catalog refused, with the reason
    pub rejected: Vec<(String, PlanError)>,
}

fn timed_module_error(module: &Module) -> PlanError {
    PlanError::InvalidInput(format!(
        "module '{}' is scheduled as a single unit and cannot hold articles",
        module.name()
    ))
}

/// The ordered Class → Module → Article hierarchy of one planning session
///
/// Insertion order is the syllabus order and is never re-sorted. Names are
/// unique among siblings, ignoring case, unless the catalog was created in
/// lenient mode with [`Catalog::with_unique_names`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    pub(crate) classes: Vec<Class>,

    /// Not serialized: the policy belongs to the session, not to the data
    #[serde(skip)]
    pub(crate) unique_names: bool,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            classes: Vec::new(),
            unique_names: true,
        }
    }
}

// Deserialize is implemented in serde_impl.rs

impl Catalog {
    /// Create an empty catalog that rejects duplicate sibling names
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty catalog with an explicit duplicate-name policy
    ///
    /// With `unique_names = false` sibling names may repeat; references then
    /// resolve to the first match. Empty names and bad durations are still
    /// rejected.
    pub fn with_unique_names(unique_names: bool) -> Self {
        Self {
            classes: Vec::new(),
            unique_names,
        }
    }

    pub fn unique_names(&self) -> bool {
        self.unique_names
    }

    pub fn classes(&self) -> &[Class] {
        &self.classes
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Find a class by name, ignoring case
    pub fn class(&self, name: &str) -> Option<&Class> {
        self.classes.iter().find(|c| names_match(c.name(), name))
    }

    fn class_index(&self, name: &str) -> PlanResult<usize> {
        self.classes
            .iter()
            .position(|c| names_match(c.name(), name))
            .ok_or_else(|| PlanError::not_found(EntityKind::Class, name))
    }

    fn module_index(&self, class_idx: usize, name: &str) -> PlanResult<usize> {
        self.classes[class_idx]
            .modules
            .iter()
            .position(|m| names_match(m.name(), name))
            .ok_or_else(|| PlanError::not_found(EntityKind::Module, name))
    }

    fn resolve(&self, class: &str, module: &str) -> PlanResult<(usize, usize)> {
        let class_idx = self.class_index(class)?;
        let module_idx = self.module_index(class_idx, module)?;
        Ok((class_idx, module_idx))
    }

    /// Append a new empty class
    pub fn add_class(&mut self, name: &str) -> PlanResult<()> {
        let name = clean_name(EntityKind::Class, name)?;

        if self.unique_names && self.class(&name).is_some() {
            return Err(PlanError::DuplicateName {
                kind: EntityKind::Class,
                name,
            });
        }

        debug!(class = %name, "class added");
        self.classes.push(Class::new(name));
        Ok(())
    }

    /// Append a new empty module to a class
    pub fn add_module(&mut self, class: &str, name: &str) -> PlanResult<()> {
        let name = clean_name(EntityKind::Module, name)?;
        let class_idx = self.class_index(class)?;
        self.insert_module(class_idx, Module::new(name))
    }

    /// Append a module that is scheduled as one unit with its own duration
    pub fn add_timed_module(&mut self, class: &str, name: &str, duration: i64) -> PlanResult<()> {
        let name = clean_name(EntityKind::Module, name)?;
        let duration = checked_duration(duration)?;
        let class_idx = self.class_index(class)?;
        self.insert_module(class_idx, Module::timed(name, duration))
    }

    pub(crate) fn insert_module(&mut self, class_idx: usize, module: Module) -> PlanResult<()> {
        let unique = self.unique_names;
        let class = &mut self.classes[class_idx];

        if unique && class.module(module.name()).is_some() {
            return Err(PlanError::DuplicateName {
                kind: EntityKind::Module,
                name: module.name().to_string(),
            });
        }

        debug!(class = %class.name(), module = %module.name(), "module added");
        class.modules.push(module);
        Ok(())
    }

    /// Append an article to a module
    pub fn add_article(
        &mut self,
        class: &str,
        module: &str,
        title: &str,
        duration: i64,
    ) -> PlanResult<()> {
        let title = clean_name(EntityKind::Article, title)?;
        let duration = checked_duration(duration)?;
        let (class_idx, module_idx) = self.resolve(class, module)?;
        self.insert_article(class_idx, module_idx, Article::new(title, duration))
    }

    pub(crate) fn insert_article(
        &mut self,
        class_idx: usize,
        module_idx: usize,
        article: Article,
    ) -> PlanResult<()> {
        let unique = self.unique_names;
        let module = &mut self.classes[class_idx].modules[module_idx];

        if module.is_timed() {
            return Err(timed_module_error(module));
        }

        if unique && module.article(article.title()).is_some() {
            return Err(PlanError::DuplicateName {
                kind: EntityKind::Article,
                name: article.title().to_string(),
            });
        }

        module.articles.push(article);
        Ok(())
    }

    /// Add every `<title> <duration>` line of a pasted block
    ///
    /// Malformed lines are skipped and counted, lines the catalog refuses are
    /// collected in [`BatchOutcome::rejected`], and every other line is kept.
    /// An unknown class or module fails the whole batch.
    pub fn add_articles_from_text(
        &mut self,
        class: &str,
        module: &str,
        text: &str,
    ) -> PlanResult<BatchOutcome> {
        let (class_idx, module_idx) = self.resolve(class, module)?;
        let target = &self.classes[class_idx].modules[module_idx];
        if target.is_timed() {
            return Err(timed_module_error(target));
        }

        let mut outcome = BatchOutcome::default();
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            let Some((title, duration)) = parse_article_line(line) else {
                outcome.skipped += 1;
                continue;
            };
            let article = Article::new(title.clone(), duration);
            match self.insert_article(class_idx, module_idx, article) {
                Ok(()) => outcome.added.push(title),
                Err(e) => outcome.rejected.push((title, e)),
            }
        }

        debug!(
            added = outcome.added.len(),
            skipped = outcome.skipped,
            rejected = outcome.rejected.len(),
            "article batch processed"
        );
        Ok(outcome)
    }

    /// Remove a class and everything under it
    pub fn remove_class(&mut self, name: &str) -> PlanResult<Class> {
        let class_idx = self.class_index(name)?;
        Ok(self.classes.remove(class_idx))
    }

    /// Remove a module and its articles from a class
    pub fn remove_module(&mut self, class: &str, name: &str) -> PlanResult<Module> {
        let (class_idx, module_idx) = self.resolve(class, name)?;
        Ok(self.classes[class_idx].modules.remove(module_idx))
    }

    /// Remove a single article from a module
    pub fn remove_article(&mut self, class: &str, module: &str, title: &str) -> PlanResult<Article> {
        let (class_idx, module_idx) = self.resolve(class, module)?;
        let module = &mut self.classes[class_idx].modules[module_idx];
        let pos = module
            .articles
            .iter()
            .position(|a| names_match(a.title(), title))
            .ok_or_else(|| PlanError::not_found(EntityKind::Article, title))?;
        Ok(module.articles.remove(pos))
    }

    /// All schedulable tasks, depth-first in insertion order
    ///
    /// The iterator borrows the catalog and has no side effects, so repeated
    /// calls on an unchanged catalog yield identical sequences.
    pub fn flatten(&self) -> impl Iterator<Item = Task> + '_ {
        self.classes.iter().flat_map(|class| {
            class
                .modules
                .iter()
                .flat_map(move |module| module.tasks(class.name()))
        })
    }

    /// Number of schedulable tasks
    pub fn task_count(&self) -> usize {
        self.flatten().count()
    }

    /// Sum of all task durations in minutes
    pub fn total_minutes(&self) -> u64 {
        self.classes.iter().map(Class::total_minutes).sum()
    }
}
