//! Plain-text rendering of the catalog and of schedules

use crate::catalog::{BatchOutcome, Catalog, Task};
use crate::schedule::Allocation;

/// Render minutes as `N min (~Hh Mm)`
pub fn format_minutes(total: u64) -> String {
    format!("{} min (~{}h {}m)", total, total / 60, total % 60)
}

fn format_task(task: &Task) -> String {
    format!(
        "- {} → {} → {} ({} min)\n",
        task.class_name, task.module_name, task.article_title, task.duration
    )
}

/// Render the catalog as an indented outline with totals
pub fn format_catalog(catalog: &Catalog) -> String {
    if catalog.is_empty() {
        return "Catalog is empty. Add a class to get started.".to_string();
    }

    let mut result = format!(
        "Catalog: {} class(es), {} task(s), {}\n\n",
        catalog.classes().len(),
        catalog.task_count(),
        format_minutes(catalog.total_minutes())
    );

    for class in catalog.classes() {
        result.push_str(&format!(
            "Class: {} ({})\n",
            class.name(),
            format_minutes(class.total_minutes())
        ));
        if class.modules().is_empty() {
            result.push_str("  (no modules)\n");
        }
        for module in class.modules() {
            match module.duration() {
                Some(minutes) => result.push_str(&format!(
                    "  Module: {} ({} min, single unit)\n",
                    module.name(),
                    minutes
                )),
                None => {
                    result.push_str(&format!(
                        "  Module: {} ({})\n",
                        module.name(),
                        format_minutes(module.total_minutes())
                    ));
                    for article in module.articles() {
                        result.push_str(&format!(
                            "    - {} ({} min)\n",
                            article.title(),
                            article.duration()
                        ));
                    }
                }
            }
        }
    }

    result
}

/// Render a plan day by day, followed by any unplaced tasks
pub fn format_allocation(allocation: &Allocation) -> String {
    let schedule = &allocation.schedule;
    let mut result = format!(
        "Study plan {} to {} ({} day(s), daily limit {})\n\n",
        schedule.start_date(),
        schedule.end_date(),
        schedule.day_count(),
        format_minutes(u64::from(schedule.daily_limit()))
    );

    for (date, tasks) in schedule.days() {
        if tasks.is_empty() {
            result.push_str(&format!("{} - Free Day\n", date));
            continue;
        }

        result.push_str(&format!(
            "{} - Total {}",
            date,
            format_minutes(schedule.total_minutes(date))
        ));
        if schedule.is_overflow_day(date) {
            result.push_str(" [over daily limit]");
        }
        result.push('\n');
        for task in tasks {
            result.push_str(&format_task(task));
        }
    }

    if !allocation.is_complete() {
        let minutes: u64 = allocation.unplaced.iter().map(|t| u64::from(t.duration)).sum();
        result.push_str(&format!(
            "\nWarning: {} task(s) ({}) did not fit in the date range:\n",
            allocation.unplaced.len(),
            format_minutes(minutes)
        ));
        for task in &allocation.unplaced {
            result.push_str(&format_task(task));
        }
        result.push_str("Widen the date range or raise the daily limit to place them.\n");
    }

    result
}

/// Summarize a batch of pasted article lines
pub fn format_batch_outcome(module: &str, outcome: &BatchOutcome) -> String {
    let mut result = format!(
        "Added {} article(s) to module '{}'",
        outcome.added.len(),
        module
    );
    if outcome.skipped > 0 {
        result.push_str(&format!(
            "; skipped {} line(s) not in '<title> <duration>' form",
            outcome.skipped
        ));
    }
    result.push('\n');

    for (title, err) in &outcome.rejected {
        result.push_str(&format!("  Rejected '{}': {}\n", title, err));
    }

    result
}
