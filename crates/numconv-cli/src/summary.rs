use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use numconv_model::{Classification, ColumnOutcome, ConversionReport};

use crate::commands::{ConvertOutcome, InspectOutcome};

pub fn print_convert_summary(outcome: &ConvertOutcome) {
    println!("Input: {}", outcome.input.display());
    match &outcome.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    if let Some(path) = &outcome.report_file {
        println!("Report: {}", path.display());
    }
    println!("{}", column_table(&outcome.report));
    println!(
        "Converted {} of {} column(s), {} row(s), sample size {}",
        outcome.report.converted_count(),
        outcome.report.columns.len(),
        outcome.rows,
        outcome.report.sample_size
    );
    if outcome.report.coerced_to_missing > 0 {
        eprintln!(
            "warning: {} value(s) outside the sample could not be parsed and are now missing",
            outcome.report.coerced_to_missing
        );
    }
}

pub fn print_inspect_summary(outcome: &InspectOutcome) {
    println!("Input: {}", outcome.input.display());
    println!("{}", column_table(&outcome.report));
    println!(
        "{} of {} column(s) would be converted, {} row(s), sample size {}",
        outcome.report.converted_count(),
        outcome.report.columns.len(),
        outcome.rows,
        outcome.report.sample_size
    );
}

/// One row per scanned column: name, storage kind, decision.
pub fn column_table(report: &ConversionReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Kind"),
        header_cell("Outcome"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for column in &report.columns {
        table.add_row(vec![
            Cell::new(&column.name).add_attribute(Attribute::Bold),
            dim_cell(column.outcome.kind()),
            outcome_cell(column.outcome),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn outcome_cell(outcome: ColumnOutcome) -> Cell {
    match outcome.classification() {
        Some(Classification::DirectNumeric) => Cell::new(outcome).fg(Color::Green),
        Some(Classification::NormalizedNumeric) => Cell::new(outcome).fg(Color::Cyan),
        Some(Classification::NotNumeric) => Cell::new(outcome),
        None => dim_cell(outcome),
    }
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
