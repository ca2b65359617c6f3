//! Catalog seed file loading tests
mod common;

use std::io::Write;
use study_planner::*;
use tempfile::NamedTempFile;

fn write_catalog(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

const SYLLABUS: &str = r#"
[[classes]]
name = "Biology"

[[classes.modules]]
name = "Cells"
articles = [
  { title = "Intro", duration = 30 },
  { title = "Mitosis", duration = 45 },
]

[[classes.modules]]
name = "Lab review"
duration = 90

[[classes]]
name = "Chemistry"
"#;

#[test]
fn test_load_seed_catalog() {
    let file = write_catalog(SYLLABUS);
    let catalog = Storage::new(file.path()).load(true).unwrap();

    assert_eq!(catalog.classes().len(), 2);
    let tasks: Vec<Task> = catalog.flatten().collect();
    assert_eq!(
        tasks,
        vec![
            Task::new("Biology", "Cells", "Intro", 30),
            Task::new("Biology", "Cells", "Mitosis", 45),
            Task::new("Biology", "Lab review", "Lab review", 90),
        ]
    );
}

#[test]
fn test_missing_file_gives_empty_catalog() {
    let catalog = Storage::new("/nonexistent/syllabus.toml").load(true).unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn test_seed_duplicates_rejected_in_strict_mode() {
    let file = write_catalog(
        r#"
[[classes]]
name = "Math"

[[classes]]
name = "math"
"#,
    );
    let err = Storage::new(file.path()).load(true).unwrap_err();
    assert!(format!("{:#}", err).contains("Duplicate class name 'math'"));
}

#[test]
fn test_seed_duplicates_keep_structure_in_lenient_mode() {
    let file = write_catalog(
        r#"
[[classes]]
name = "Math"

[[classes]]
name = "Math"

[[classes.modules]]
name = "Algebra"
articles = [{ title = "Groups", duration = 40 }]
"#,
    );
    let catalog = Storage::new(file.path()).load(false).unwrap();

    assert!(catalog.classes()[0].modules().is_empty());
    assert_eq!(catalog.classes()[1].modules().len(), 1);
    assert!(!catalog.unique_names());
}

#[test]
fn test_seed_invalid_duration_rejected() {
    let file = write_catalog(
        r#"
[[classes]]
name = "Math"

[[classes.modules]]
name = "Algebra"
articles = [{ title = "Groups", duration = -5 }]
"#,
    );
    let err = Storage::new(file.path()).load(true).unwrap_err();
    assert!(format!("{:#}", err).contains("Invalid duration -5"));
}

#[test]
fn test_seed_timed_module_with_articles_rejected() {
    let file = write_catalog(
        r#"
[[classes]]
name = "Math"

[[classes.modules]]
name = "Review"
duration = 60
articles = [{ title = "Sets", duration = 10 }]
"#,
    );
    assert!(Storage::new(file.path()).load(true).is_err());
}

#[test]
fn test_seed_unknown_field_rejected() {
    let file = write_catalog(
        r#"
[[classes]]
title = "Math"
"#,
    );
    assert!(Storage::new(file.path()).load(true).is_err());
}

#[test]
fn test_catalog_serializes_back_to_seed_format() {
    let file = write_catalog(SYLLABUS);
    let catalog = Storage::new(file.path()).load(true).unwrap();

    let text = toml::to_string(&catalog).unwrap();
    let reparsed: Catalog = toml::from_str(&text).unwrap();
    assert_eq!(reparsed, catalog);
}
