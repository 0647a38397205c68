use std::fmt::Write as _;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use critvar_model::{HIGH_CONFIDENCE, MatchResult, QualityLevel, VariableDefinition};
use critvar_report::{AnalysisReport, MEDIUM_CONFIDENCE};

/// Renders the analysis as text: dataset header, results table, totals,
/// findings and suggestions.
pub fn render_analysis(report: &AnalysisReport) -> String {
    let dataset = &report.dataset;
    let statistics = &report.analysis.statistics;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Dataset: {} ({} rows, {} columns)",
        dataset.file_name, dataset.row_count, dataset.column_count
    );
    let _ = writeln!(out, "Threshold: {}", statistics.threshold);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Variable"),
        header_cell("Found"),
        header_cell("Column"),
        header_cell("Confidence"),
        header_cell("Synonym"),
        header_cell("Notes"),
    ]);
    apply_results_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    for result in &report.analysis.results {
        table.add_row(vec![
            Cell::new(&result.variable)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            found_cell(result.found),
            optional_cell(result.column.as_deref()),
            confidence_cell(result),
            optional_cell(result.synonym.as_deref()),
            optional_cell(result.notes()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{}/{}",
            statistics.found_variables, statistics.total_variables
        ))
        .add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}%", statistics.coverage_percent))
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{:.3}", statistics.mean_confidence)).add_attribute(Attribute::Bold),
        dim_cell("-"),
        quality_cell(report.analysis.quality),
    ]);
    let _ = writeln!(out, "{table}");

    write_list(&mut out, "Findings", &report.summary.findings);
    write_list(&mut out, "Suggestions", &report.analysis.suggestions);
    write_list(&mut out, "Dataset warnings", &dataset.warnings);
    out
}

/// Renders the catalogue as a table of variables and their synonyms.
pub fn render_catalog<'a>(definitions: impl IntoIterator<Item = &'a VariableDefinition>) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Variable"),
        header_cell("Policy"),
        header_cell("Synonyms"),
    ]);
    apply_table_style(&mut table);
    for definition in definitions {
        table.add_row(vec![
            Cell::new(&definition.key)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            dim_cell(definition.policy),
            Cell::new(definition.synonyms.join(", ")),
        ]);
    }
    table.to_string()
}

/// Renders one variable with one synonym per line.
pub fn render_variable(definition: &VariableDefinition) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Variable: {}", definition.key);
    let _ = writeln!(out, "Policy: {}", definition.policy);
    let _ = writeln!(out, "Synonyms ({}):", definition.synonyms.len());
    for synonym in &definition.synonyms {
        let _ = writeln!(out, "- {synonym}");
    }
    out
}

fn write_list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{title}:");
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_results_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(14)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::LowerBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
        ]);
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

fn found_cell(found: bool) -> Cell {
    if found {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("✗").fg(Color::Red)
    }
}

/// Colored by confidence band; a near-miss score is shown dimmed.
fn confidence_cell(result: &MatchResult) -> Cell {
    if result.column.is_none() {
        return dim_cell("-");
    }
    let text = format!("{:.3}", result.confidence);
    if !result.found {
        return dim_cell(text);
    }
    let color = if result.confidence >= HIGH_CONFIDENCE {
        Color::Green
    } else if result.confidence >= MEDIUM_CONFIDENCE {
        Color::Yellow
    } else {
        Color::Red
    };
    Cell::new(text).fg(color)
}

fn quality_cell(quality: QualityLevel) -> Cell {
    let color = match quality {
        QualityLevel::Excellent => Color::Green,
        QualityLevel::Good => Color::Cyan,
        QualityLevel::Fair => Color::Yellow,
        QualityLevel::Poor => Color::Red,
    };
    Cell::new(quality)
        .fg(color)
        .add_attribute(Attribute::Bold)
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(text) if !text.is_empty() => Cell::new(text),
        _ => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
