//! Quick look at grade sheets exported as HTML tables under a `.xls` name.

use polars::prelude::*;
use select::document::Document;
use select::node::Node;
use select::predicate::Name;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_PREVIEW_ROWS: usize = 5;

#[derive(Debug)]
pub enum SheetError {
    Io(io::Error),
    NoTables,
    DataFrame(PolarsError),
}

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetError::Io(err) => write!(f, "io error: {err}"),
            SheetError::NoTables => write!(f, "No tables found in the file."),
            SheetError::DataFrame(err) => write!(f, "dataframe conversion error: {err}"),
        }
    }
}

impl std::error::Error for SheetError {}

impl From<io::Error> for SheetError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<PolarsError> for SheetError {
    fn from(value: PolarsError) -> Self {
        Self::DataFrame(value)
    }
}

pub fn load_html_table<P: AsRef<Path>>(path: P) -> Result<DataFrame, SheetError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading html sheet");
    let bytes = fs::read(path)?;
    parse_html_table(&String::from_utf8_lossy(&bytes))
}

/// Builds a frame of string columns from the first `<table>` in `html`.
///
/// Every `<thead>` row is a header row; several header rows are merged per
/// column, joining their non-blank labels with a space. Without a `<thead>`,
/// a leading row made only of `<th>` cells is the header.
pub fn parse_html_table(html: &str) -> Result<DataFrame, SheetError> {
    let document = Document::from(html);
    let table = document.find(Name("table")).next().ok_or(SheetError::NoTables)?;

    let mut header_rows: Vec<Vec<String>> = Vec::new();
    let mut rows: Vec<Vec<String>> = Vec::new();
    for (tr, in_thead) in own_rows(table) {
        let cells: Vec<Node> = tr
            .children()
            .filter(|cell| matches!(cell.name(), Some("td") | Some("th")))
            .collect();
        if cells.is_empty() {
            continue;
        }

        let all_th = cells.iter().all(|cell| cell.is(Name("th")));
        let values: Vec<String> = cells.iter().map(cell_text).collect();
        if in_thead || (header_rows.is_empty() && rows.is_empty() && all_th) {
            header_rows.push(values);
        } else {
            rows.push(values);
        }
    }

    let width = rows
        .iter()
        .chain(header_rows.iter())
        .map(Vec::len)
        .max()
        .unwrap_or(0);
    let names = column_names(merge_header_rows(&header_rows, width), width);

    let mut columns: Vec<Column> = Vec::with_capacity(width);
    for (idx, name) in names.iter().enumerate() {
        let values: Vec<Option<String>> = rows
            .iter()
            .map(|row| row.get(idx).filter(|v| !v.is_empty()).cloned())
            .collect();
        columns.push(Series::new(PlSmallStr::from(name.as_str()), values).into_column());
    }

    let df = DataFrame::new(columns)?;
    debug!(height = df.height(), width = df.width(), "html table loaded");
    Ok(df)
}

/// Rows belonging to `table` itself, flagged when they sit in `<thead>`.
/// Rows of tables nested inside a cell are not included.
fn own_rows(table: Node<'_>) -> Vec<(Node<'_>, bool)> {
    let mut rows = Vec::new();
    for child in table.children() {
        if child.is(Name("tr")) {
            rows.push((child, false));
        } else if child.is(Name("thead")) || child.is(Name("tbody")) || child.is(Name("tfoot")) {
            let in_thead = child.is(Name("thead"));
            rows.extend(
                child
                    .children()
                    .filter(|row| row.is(Name("tr")))
                    .map(|row| (row, in_thead)),
            );
        }
    }
    rows
}

fn merge_header_rows(header_rows: &[Vec<String>], width: usize) -> Vec<String> {
    (0..width)
        .map(|idx| {
            let mut parts: Vec<&str> = Vec::with_capacity(header_rows.len());
            for label in header_rows.iter().filter_map(|row| row.get(idx)) {
                if !label.is_empty() && parts.last() != Some(&label.as_str()) {
                    parts.push(label.as_str());
                }
            }
            parts.join(" ")
        })
        .collect()
}

fn cell_text(cell: &Node) -> String {
    cell.text().split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Header names padded to `width`, blanks replaced by their position and
/// repeats suffixed `.1`, `.2`, ...
fn column_names(header: Vec<String>, width: usize) -> Vec<String> {
    let mut seen = HashSet::with_capacity(width);
    let mut names = Vec::with_capacity(width);
    for idx in 0..width {
        let base = match header.get(idx) {
            Some(name) if !name.is_empty() => name.clone(),
            _ => idx.to_string(),
        };
        let mut name = base.clone();
        let mut suffix = 1;
        while !seen.insert(name.clone()) {
            name = format!("{base}.{suffix}");
            suffix += 1;
        }
        names.push(name);
    }
    names
}

fn cell_display(column: &Column, row_idx: usize) -> String {
    match column.get(row_idx) {
        Ok(AnyValue::Null) | Err(_) => String::new(),
        Ok(AnyValue::String(s)) => s.to_string(),
        Ok(AnyValue::StringOwned(s)) => s.to_string(),
        Ok(other) => other.to_string(),
    }
}

pub fn render_df_as_text_table(df: &DataFrame) -> String {
    let columns = df.get_columns();
    let col_names: Vec<String> = columns.iter().map(|c| c.name().to_string()).collect();

    let mut grid: Vec<Vec<String>> = Vec::with_capacity(df.height());
    for row_idx in 0..df.height() {
        grid.push(columns.iter().map(|c| cell_display(c, row_idx)).collect());
    }

    let mut widths: Vec<usize> = col_names.iter().map(|n| n.chars().count()).collect();
    for row in &grid {
        for (ci, s) in row.iter().enumerate() {
            widths[ci] = widths[ci].max(s.chars().count());
        }
    }

    let mut sep = String::from("+");
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let push_row = |out: &mut String, cells: &[String]| {
        out.push('|');
        for (ci, s) in cells.iter().enumerate() {
            out.push(' ');
            out.push_str(s);
            out.push_str(&" ".repeat(widths[ci] - s.chars().count()));
            out.push_str(" |");
        }
        out.push('\n');
    };

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    push_row(&mut out, &col_names);
    out.push_str(&sep);
    out.push('\n');
    for row in &grid {
        push_row(&mut out, row);
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

/// Shape line followed by the first `rows` rows.
pub fn render_preview(df: &DataFrame, rows: usize) -> String {
    let (height, width) = df.shape();
    format!(
        "Loaded: ({height}, {width})\n{}",
        render_df_as_text_table(&df.head(Some(rows)))
    )
}
