use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use painel_ingest::LoadedTable;
use painel_model::{FinalStatus, RunReport, ValidationStatus};

pub fn print_summary(report: &RunReport) {
    println!("Panel: {}", report.panel.display());
    println!(
        "Reference keys: EDUCAPI {}, COMERCIAL {}",
        report.reference_sizes.educapi, report.reference_sizes.comercial
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Value"),
        header_cell("Rows"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    add_count_rows(&mut table, "FINAL_STATUS", &report.counts.final_status);
    add_count_rows(&mut table, "VALIDATION_STATUS", &report.counts.validation_status);
    add_count_rows(&mut table, "LOOKUP_VALIDATION", &report.counts.lookup);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(report.rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    println!("Rows without primary key: {}", report.missing_key_rows);
    print_output("Annotated panel", report.outputs.annotated.as_ref());
    print_output("Missing-key report", report.outputs.missing_keys.as_ref());
}

/// Prints the report as JSON; returns the process exit code.
pub fn print_json(report: &RunReport) -> i32 {
    match serde_json::to_string_pretty(report) {
        Ok(json) => {
            println!("{json}");
            0
        }
        Err(error) => {
            eprintln!("error: failed to serialize run report: {error}");
            1
        }
    }
}

pub fn print_inspection(path: &Path, table: &LoadedTable) {
    let mut info = Table::new();
    apply_table_style(&mut info);
    info.add_row(vec![header_cell("File"), Cell::new(path.display())]);
    info.add_row(vec![header_cell("Format"), Cell::new(&table.format)]);
    info.add_row(vec![header_cell("Rows"), Cell::new(table.height())]);
    info.add_row(vec![
        header_cell("Skipped records"),
        count_cell(table.skipped_records, Color::Yellow),
    ]);
    println!("{info}");

    let mut columns = Table::new();
    columns.set_header(vec![header_cell("#"), header_cell("Column")]);
    apply_table_style(&mut columns);
    align_column(&mut columns, 0, CellAlignment::Right);
    for (idx, name) in table.column_names().into_iter().enumerate() {
        columns.add_row(vec![dim_cell(idx + 1), Cell::new(name)]);
    }
    println!("{columns}");
}

fn add_count_rows(table: &mut Table, column: &str, counts: &BTreeMap<String, usize>) {
    for (label, count) in counts {
        let value = if label.is_empty() {
            dim_cell("(empty)")
        } else {
            status_cell(label)
        };
        table.add_row(vec![
            Cell::new(column).fg(Color::Blue),
            value,
            Cell::new(count),
        ]);
    }
}

fn status_cell(label: &str) -> Cell {
    let color = if label == FinalStatus::Ok.as_str() {
        Color::Green
    } else if label == FinalStatus::Verificar.as_str()
        || label == ValidationStatus::Corrigir.as_str()
    {
        Color::Yellow
    } else if label == FinalStatus::StatusIncorreto.as_str() {
        Color::Red
    } else {
        Color::Reset
    };
    Cell::new(label).fg(color)
}

fn print_output(label: &str, path: Option<&PathBuf>) {
    match path {
        Some(path) => println!("{label}: {}", path.display()),
        None => println!("{label}: -"),
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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
