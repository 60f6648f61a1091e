use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use checkup_core::StationCatalog;
use checkup_model::{PersonStatus, ResultSummary};

pub fn print_summary(summary: &ResultSummary, output: &Path) {
    println!("Output: {}", output.display());
    println!("{}", status_table(summary));
    if !summary.stations.is_empty() {
        println!("{}", station_table(summary));
    }
}

/// Person counts per status plus a bold total row.
pub fn status_table(summary: &ResultSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Status"), header_cell("Persons")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let rows = [
        (PersonStatus::Complete, summary.complete, Color::Green),
        (PersonStatus::Incomplete, summary.incomplete, Color::Yellow),
        (PersonStatus::NotRegistered, summary.not_registered, Color::Red),
    ];
    for (status, count, color) in rows {
        table.add_row(vec![Cell::new(status.label()), count_cell(count, color)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.total).add_attribute(Attribute::Bold),
    ]);
    table
}

/// Completion counts for every active station.
pub fn station_table(summary: &ResultSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Station"),
        header_cell("Name"),
        header_cell("Required"),
        header_cell("Checked"),
        header_cell("Pending"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for tally in &summary.stations {
        table.add_row(vec![
            Cell::new(tally.key)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(tally.name),
            Cell::new(tally.required),
            Cell::new(tally.checked),
            count_cell(tally.pending(), Color::Yellow),
        ]);
    }
    table
}

/// Every catalog entry with its columns and match type.
pub fn catalog_table(catalog: &StationCatalog) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Key", "Name", "Columns", "Type"]);
    apply_table_style(&mut table);
    for entry in catalog.entries() {
        table.add_row(vec![
            Cell::new(entry.key),
            match entry.display_name {
                Some(name) => Cell::new(name),
                None => dim_cell("-"),
            },
            Cell::new(entry.columns.join(", ")),
            match entry.match_type {
                Some(match_type) => Cell::new(match_type),
                None => dim_cell("field"),
            },
        ]);
    }
    table
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
