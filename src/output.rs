//! Rendering of gathered facts.

use crate::error::{Error, Result};
use crate::facts::FactsResult;

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON, one document per run
    #[default]
    Json,
    /// Indented JSON
    Pretty,
    Yaml,
    /// The records as an aligned text table
    Table,
}

pub fn render(facts: &FactsResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string(facts).map_err(|e| Error::Serialize(e.to_string()))
        }
        OutputFormat::Pretty => {
            serde_json::to_string_pretty(facts).map_err(|e| Error::Serialize(e.to_string()))
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(facts).map_err(|e| Error::Serialize(e.to_string()))
        }
        OutputFormat::Table => Ok(to_table(facts)),
    }
}

fn to_table(facts: &FactsResult) -> String {
    let fields = facts.category.schema().fields;
    let records = facts.records();

    let mut widths: Vec<usize> = fields.iter().map(|f| f.len()).collect();
    for record in records {
        for (width, value) in widths.iter_mut().zip(record.values()) {
            *width = (*width).max(value.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &widths, fields.iter().copied());
    for record in records {
        push_row(&mut out, &widths, record.values());
    }
    out
}

fn push_row<'a>(out: &mut String, widths: &[usize], cells: impl Iterator<Item = &'a str>) {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
