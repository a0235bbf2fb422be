//! Parsing of the fixed-column tables printed by `dladm show-*`.
//!
//! Every subcommand prints one header line followed by one line per datalink,
//! with columns separated by runs of blanks. The header is skipped, and each
//! data line is cut into exactly as many cells as the schema has fields. The
//! last cell takes whatever remains of the line, so a trailing column may hold
//! embedded whitespace.
//!
//! Only the last column may contain blanks. A value with internal whitespace
//! in any other column shifts the following cells to the right without being
//! detected.

use crate::category::Category;
use crate::error::{Error, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::trace;

/// Column layout of one `dladm show-*` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub category: Category,
    pub fields: &'static [&'static str],
}

impl TableSchema {
    /// Number of cells each data line must split into.
    pub fn width(&self) -> usize {
        self.fields.len()
    }

    /// Field names joined the way they appear in error messages, e.g.
    /// `LINK,CLASS,MTU,STATE,OVER`.
    pub fn layout(&self) -> String {
        self.fields.join(",")
    }

    /// Parse the raw output of the subcommand into one record per data line.
    ///
    /// The first line is always treated as the header. A table without data
    /// lines yields an empty list. The first line whose cell count differs from
    /// [`width`](Self::width) aborts the whole parse with
    /// [`Error::MalformedRow`].
    pub fn parse(&self, raw: &str) -> Result<Vec<Record>> {
        raw.lines().skip(1).map(|line| self.parse_row(line)).collect()
    }

    fn parse_row(&self, line: &str) -> Result<Record> {
        let cells = split_columns(line, self.width());
        if cells.len() != self.width() {
            return Err(Error::MalformedRow {
                category: self.category,
                expected: self.width(),
                layout: self.layout(),
                line: line.to_string(),
            });
        }

        let fields = self
            .fields
            .iter()
            .copied()
            .zip(cells.into_iter().map(String::from))
            .collect();
        let record = Record { fields };
        trace!(category = %self.category, ?record, "parsed row");
        Ok(record)
    }
}

/// Parse `raw` with the schema of `category`.
pub fn parse_table(category: Category, raw: &str) -> Result<Vec<Record>> {
    category.schema().parse(raw)
}

/// Split `line` on runs of whitespace into at most `max` cells.
///
/// The first `max - 1` cells are single tokens; the final cell is the rest of
/// the line with only its surrounding whitespace removed. Fewer cells are
/// returned when the line runs out of tokens.
pub fn split_columns(line: &str, max: usize) -> Vec<&str> {
    let mut cells = Vec::with_capacity(max);
    if max == 0 {
        return cells;
    }

    let mut rest = line.trim_start();
    while !rest.is_empty() && cells.len() + 1 < max {
        match rest.find(char::is_whitespace) {
            Some(end) => {
                cells.push(&rest[..end]);
                rest = rest[end..].trim_start();
            }
            None => {
                cells.push(rest);
                rest = "";
            }
        }
    }

    let rest = rest.trim_end();
    if !rest.is_empty() {
        cells.push(rest);
    }
    cells
}

/// One data line of a `dladm` table, keyed by column name in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(&'static str, String)>,
}

impl Record {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(key, _)| *key)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
