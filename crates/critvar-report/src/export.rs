//! Flat exports of match results.

use anyhow::{Context, Result, anyhow};

use critvar_model::MatchResult;

/// CSV header for result exports.
pub const CSV_HEADER: [&str; 6] = [
    "Variable",
    "Found",
    "Column",
    "Confidence",
    "Synonym",
    "Notes",
];

/// One row per result, in result order.
pub fn results_to_csv(results: &[MatchResult]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER).context("write csv header")?;
    for result in results {
        let confidence = format!("{:?}", result.confidence);
        writer
            .write_record([
                capitalize(&result.variable).as_str(),
                if result.found { "Yes" } else { "No" },
                result.column.as_deref().unwrap_or_default(),
                confidence.as_str(),
                result.synonym.as_deref().unwrap_or_default(),
                result.notes().unwrap_or_default(),
            ])
            .with_context(|| format!("write csv row for {}", result.variable))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow!("finish csv output: {}", err.error()))?;
    String::from_utf8(bytes).context("csv output is not UTF-8")
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
