//! Result presenter.
//!
//! A command produces a [`Report`]: a title, labelled summary lines, an
//! optional row table (schedules, per-unit conversions) and the raw result
//! as JSON. [`Report::render`] turns it into text for the chosen format.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Boxed key/value table
    #[default]
    Table,
    /// Pretty-printed JSON of the result record
    Json,
}

/// Rows with a header line.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column headers
    pub headers: Vec<String>,
    /// Cells, one vector per row
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates an empty table with the given headers.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    pub fn push<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }
}

/// Presentable command result.
#[derive(Debug, Clone)]
pub struct Report {
    /// Heading
    pub title: String,
    /// Label/value summary lines
    pub fields: Vec<(String, String)>,
    /// Detail rows, shown when requested or always for list commands
    pub table: Option<Table>,
    /// Result record for JSON output
    pub data: serde_json::Value,
}

impl Report {
    /// Starts a report whose JSON form is `data`.
    pub fn new<T: Serialize>(title: impl Into<String>, data: &T) -> Result<Self> {
        Ok(Self {
            title: title.into(),
            fields: Vec::new(),
            table: None,
            data: serde_json::to_value(data)?,
        })
    }

    /// Adds a summary line.
    pub fn field(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((label.into(), value.into()));
        self
    }

    /// Attaches detail rows.
    pub fn with_table(mut self, table: Table) -> Self {
        self.table = Some(table);
        self
    }

    /// Looks up a summary value by label.
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    /// Renders for the terminal.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&self.data)?),
            OutputFormat::Table => {
                let mut out = String::new();
                out.push_str(&self.title);
                out.push('\n');
                let summary = Table {
                    headers: vec!["항목".to_string(), "값".to_string()],
                    rows: self
                        .fields
                        .iter()
                        .map(|(l, v)| vec![l.clone(), v.clone()])
                        .collect(),
                };
                out.push_str(&draw(&summary));
                if let Some(table) = &self.table {
                    out.push('\n');
                    out.push_str(&draw(table));
                }
                Ok(out)
            }
        }
    }
}

/// Terminal columns taken by `s`; Hangul and other wide glyphs take two.
pub fn display_width(s: &str) -> usize {
    s.chars().map(|c| if is_wide(c) { 2 } else { 1 }).sum()
}

fn is_wide(c: char) -> bool {
    matches!(
        c as u32,
        0x1100..=0x115F
            | 0x2E80..=0x303E
            | 0x3041..=0x33FF
            | 0x3400..=0x4DBF
            | 0x4E00..=0x9FFF
            | 0xA960..=0xA97F
            | 0xAC00..=0xD7A3
            | 0xF900..=0xFAFF
            | 0xFE30..=0xFE4F
            | 0xFF00..=0xFF60
            | 0xFFE0..=0xFFE6
    )
}

fn pad(s: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(s)));
    if right_align {
        format!("{}{}", fill, s)
    } else {
        format!("{}{}", s, fill)
    }
}

fn looks_numeric(s: &str) -> bool {
    s.starts_with(|c: char| c.is_ascii_digit() || c == '-')
        && s.chars().filter(|c| c.is_ascii_digit()).count() * 2 >= s.chars().count()
}

fn draw(table: &Table) -> String {
    let columns = table
        .rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(table.headers.len()))
        .max()
        .unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|i| {
            table
                .rows
                .iter()
                .chain(std::iter::once(&table.headers))
                .filter_map(|row| row.get(i))
                .map(|cell| display_width(cell))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule = |left: &str, mid: &str, right: &str| {
        let parts: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}\n", left, parts.join(mid), right)
    };
    let line = |row: &[String], header: bool| {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                format!(" {} ", pad(cell, *w, !header && looks_numeric(cell)))
            })
            .collect();
        format!("│{}│\n", cells.join("│"))
    };

    let mut out = rule("┌", "┬", "┐");
    out.push_str(&line(&table.headers, true));
    out.push_str(&rule("├", "┼", "┤"));
    for row in &table.rows {
        out.push_str(&line(row, false));
    }
    out.push_str(&rule("└", "┴", "┘"));
    out
}
