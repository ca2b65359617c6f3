//! Deserialization for Catalog
//!
//! A catalog is never deserialized field by field. The seed document is read
//! into plain records and replayed through the mutation API, so a file gets
//! exactly the same name, duplicate and duration checks as interactive edits.

use super::catalog_data::Catalog;
use super::entities::{Article, Module, checked_duration, clean_name};
use crate::error::{EntityKind, PlanResult};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct CatalogSeed {
    #[serde(default)]
    classes: Vec<ClassSeed>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClassSeed {
    name: String,
    #[serde(default)]
    modules: Vec<ModuleSeed>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModuleSeed {
    name: String,
    duration: Option<i64>,
    #[serde(default)]
    articles: Vec<ArticleSeed>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ArticleSeed {
    title: String,
    duration: i64,
}

impl CatalogSeed {
    /// Build a catalog by replaying every entry in document order
    ///
    /// Entries attach to the class or module just added rather than to a name
    /// lookup, so lenient catalogs with repeated names keep their structure.
    pub(crate) fn into_catalog(self, unique_names: bool) -> PlanResult<Catalog> {
        let mut catalog = Catalog::with_unique_names(unique_names);

        for class in self.classes {
            catalog.add_class(&class.name)?;
            let class_idx = catalog.classes.len() - 1;

            for (module_idx, module) in class.modules.into_iter().enumerate() {
                let name = clean_name(EntityKind::Module, &module.name)?;
                let entry = match module.duration {
                    Some(duration) => Module::timed(name, checked_duration(duration)?),
                    None => Module::new(name),
                };
                catalog.insert_module(class_idx, entry)?;

                for article in module.articles {
                    let title = clean_name(EntityKind::Article, &article.title)?;
                    let duration = checked_duration(article.duration)?;
                    catalog.insert_article(class_idx, module_idx, Article::new(title, duration))?;
                }
            }
        }

        Ok(catalog)
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seed = CatalogSeed::deserialize(deserializer)?;
        seed.into_catalog(true).map_err(serde::de::Error::custom)
    }
}
