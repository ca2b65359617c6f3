//! Study catalog domain model
//!
//! - `entities`: Class, Module, Article and the derived Task
//! - `catalog_data`: the ordered hierarchy with its mutation API and flattening
//! - `parse`: free-text `<title> <duration>` article lines
//! - `serde_impl`: validated deserialization of catalog seed documents

mod catalog_data;
mod entities;
mod parse;
mod serde_impl;

pub use catalog_data::{BatchOutcome, Catalog};
pub use entities::{Article, Class, Module, Task};
pub use parse::parse_article_line;
pub(crate) use serde_impl::CatalogSeed;
