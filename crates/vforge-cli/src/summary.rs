use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use vforge_core::{active_states, combinations, member_name};
use vforge_expand::ExpansionSummary;
use vforge_model::ComponentSpec;
use vforge_validate::{AutoFix, Severity, ValidationReport};

/// One diagnostic as displayed: severity, code, path, message.
pub type DiagnosticRow = [String; 4];

/// Errors first, then warnings, each in check order.
pub fn diagnostic_rows(report: &ValidationReport) -> Vec<DiagnosticRow> {
    report
        .diagnostics()
        .map(|diagnostic| {
            [
                diagnostic.severity.label().to_string(),
                diagnostic.code.as_str().to_string(),
                diagnostic.path.clone().unwrap_or_else(|| "-".to_string()),
                diagnostic.message.clone(),
            ]
        })
        .collect()
}

/// One combination as displayed: index, member name, active state names.
pub fn variant_rows(spec: &ComponentSpec) -> Vec<[String; 3]> {
    combinations(&spec.variants)
        .iter()
        .enumerate()
        .map(|(index, combination)| {
            let states = active_states(&spec.states, combination)
                .iter()
                .map(|state| state.name.as_str())
                .collect::<Vec<_>>();
            [
                (index + 1).to_string(),
                member_name(combination),
                if states.is_empty() {
                    "-".to_string()
                } else {
                    states.join(", ")
                },
            ]
        })
        .collect()
}

pub fn print_report(name: &str, report: &ValidationReport) {
    println!("Component: {name}");
    let status = if report.ok { "valid" } else { "invalid" };
    println!(
        "Status: {status} ({} error(s), {} warning(s))",
        report.error_count(),
        report.warning_count()
    );
    let rows = diagnostic_rows(report);
    if rows.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Code"),
        header_cell("Path"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for [severity, code, path, message] in rows {
        table.add_row(vec![
            severity_cell(&severity),
            Cell::new(code),
            if path == "-" {
                dim_cell(path)
            } else {
                Cell::new(path)
            },
            Cell::new(message),
        ]);
    }
    println!("{table}");
}

pub fn print_fixes(fixes: &[AutoFix], destination: &str) {
    if fixes.is_empty() {
        return;
    }
    println!();
    println!("Applied {} fix(es), written to {destination}:", fixes.len());
    for fix in fixes {
        println!("- {}", fix.describe());
    }
}

pub fn print_variants(spec: &ComponentSpec) {
    let rows = variant_rows(spec);
    println!("Component: {}", spec.name);
    println!("Combinations: {}", rows.len());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Member"),
        header_cell("Active states"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for [index, name, states] in rows {
        table.add_row(vec![
            dim_cell(index),
            Cell::new(name),
            if states == "-" {
                dim_cell(states)
            } else {
                Cell::new(states)
            },
        ]);
    }
    println!("{table}");
}

pub fn print_expansion<N>(summary: &ExpansionSummary<N>, warnings: usize, manifest: &str) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Step"), header_cell("Result")]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new("Members"),
        count_cell(summary.member_count(), Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Family"),
        if summary.family.is_some() {
            Cell::new("combined").fg(Color::Green)
        } else {
            dim_cell("single artifact")
        },
    ]);
    table.add_row(vec![
        Cell::new("Warnings"),
        count_cell(warnings, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Skipped bindings"),
        count_cell(summary.skipped_bindings.len(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Font fallbacks"),
        count_cell(summary.failed_fonts.len(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Saved"),
        match (&summary.save_error, summary.saved) {
            (Some(error), _) => Cell::new(format!("failed: {error}")).fg(Color::Red),
            (None, true) => Cell::new("yes").fg(Color::Green),
            (None, false) => dim_cell("skipped"),
        },
    ]);
    table.add_row(vec![
        Cell::new("Duration"),
        dim_cell(format!("{} ms", summary.duration_ms)),
    ]);
    println!("Manifest: {manifest}");
    println!("{table}");
    for skipped in &summary.skipped_bindings {
        eprintln!("warning: {skipped}");
    }
    for font in &summary.failed_fonts {
        eprintln!("warning: font {font} unavailable, text uses the host default");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(label: &str) -> Cell {
    if label == Severity::Error.label() {
        Cell::new(label).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        Cell::new(label).fg(Color::Yellow)
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
