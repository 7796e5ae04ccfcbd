use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::fmt;

/// One spreadsheet cell, typed as the workbook stored it.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    Duration(String),
    Error(String),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) | Cell::Duration(s) | Cell::Error(s) => f.write_str(s),
            Cell::Integer(i) => write!(f, "{i}"),
            // f64's Display already drops a zero fraction (8.0 -> "8")
            Cell::Float(v) => write!(f, "{v}"),
            Cell::Bool(true) => f.write_str("True"),
            Cell::Bool(false) => f.write_str("False"),
            Cell::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// Rectangular data read from a worksheet: header names plus data rows.
///
/// Every row holds exactly `headers().len()` cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Builds a table whose header is the first of `rows`.
    pub fn from_rows(rows: impl IntoIterator<Item = Vec<Cell>>) -> Self {
        let mut rows = rows.into_iter();
        let Some(header_row) = rows.next() else {
            return Self::default();
        };

        let headers = resolve_headers(&header_row);
        let width = headers.len();
        let rows = rows
            .map(|mut row| {
                row.resize(width.max(row.len()), Cell::Empty);
                row
            })
            .collect::<Vec<_>>();

        // a data row wider than the header gets unnamed columns of its own
        let widest = rows.iter().map(Vec::len).max().unwrap_or(width);
        let mut table = Self { headers, rows };
        if widest > width {
            table.widen(widest);
        }
        table
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    fn widen(&mut self, width: usize) {
        for idx in self.headers.len()..width {
            self.headers.push(format!("Unnamed: {idx}"));
        }
        for row in &mut self.rows {
            row.resize(width, Cell::Empty);
        }
    }
}

/// Turns the header row into unique column names.
///
/// Empty names become `Unnamed: <index>`; repeats of a name get `.1`, `.2`, ...
fn resolve_headers(header_row: &[Cell]) -> Vec<String> {
    let mut suffixes: HashMap<String, usize> = HashMap::new();
    let mut headers: Vec<String> = Vec::with_capacity(header_row.len());

    for (idx, cell) in header_row.iter().enumerate() {
        let name = cell.to_string();
        let base = if name.is_empty() {
            format!("Unnamed: {idx}")
        } else {
            name
        };

        let mut candidate = base.clone();
        while headers.contains(&candidate) {
            let suffix = suffixes.entry(base.clone()).or_insert(0);
            *suffix += 1;
            candidate = format!("{base}.{suffix}");
        }
        headers.push(candidate);
    }
    headers
}
