//! Categories command implementation

use super::shared::{print_json, setup_logging};
use crate::Result;
use crate::app::services::category_registry::CategoryRegistry;
use crate::app::services::row_ingestor::RowIngestor;
use crate::cli::args::CategoriesArgs;
use colored::*;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryEntry<'a> {
    id: &'a str,
    label: &'a str,
    sex: String,
    level: String,
    first_row: usize,
    last_row: usize,
}

/// Categories command runner
///
/// Needs no data source: the registry and its row bindings are fixed.
pub async fn run_categories(args: CategoriesArgs) -> Result<()> {
    setup_logging(&args.common)?;

    let ingestor = RowIngestor::competition()?;
    let entries = entries(&ingestor);

    if args.common.is_json() {
        return print_json(&entries);
    }

    println!(
        "{}",
        format!(
            "{:<18} {:<18} {:<7} {:<7} {}",
            "Id", "Label", "Sex", "Level", "Rows"
        )
        .bright_green()
        .bold()
    );
    for entry in &entries {
        println!(
            "{:<18} {:<18} {:<7} {:<7} {}-{}",
            entry.id, entry.label, entry.sex, entry.level, entry.first_row, entry.last_row
        );
    }
    println!(
        "\n{} categories",
        CategoryRegistry::competition()
            .category_count()
            .to_string()
            .bright_white()
            .bold()
    );

    Ok(())
}

fn entries(ingestor: &RowIngestor) -> Vec<CategoryEntry<'_>> {
    ingestor
        .bindings()
        .iter()
        .map(|binding| CategoryEntry {
            id: &binding.category.id,
            label: &binding.category.label,
            sex: binding.category.sex.to_string(),
            level: binding.category.level.to_string(),
            first_row: binding.start_row,
            last_row: binding.end_row,
        })
        .collect()
}
