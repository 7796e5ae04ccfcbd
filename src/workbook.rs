use calamine::{Data, Reader, open_workbook_auto};
use std::iter;
use std::path::Path;
use tracing::{debug, info};

use crate::Result;
use crate::error::Error;
use crate::table::{Cell, Table};

/// Reads the first worksheet of the workbook at `path`.
///
/// The format (xlsx, xlsm, xlsb, xls, ods) is picked from the file extension.
/// Columns are counted from A even when leading columns are blank, and rows
/// with no value at all are skipped.
pub fn load_first_sheet(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_name = workbook.sheet_names().first().cloned();
    debug!(path = %path.display(), sheets = ?workbook.sheet_names(), "workbook opened");

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::NoWorksheet(path.to_owned()))??;

    // calamine trims the range to the used cells; keep columns anchored at A
    let first_col = range.start().map(|(_, col)| col as usize).unwrap_or(0);
    let table = Table::from_rows(
        range
            .rows()
            .filter(|row| row.iter().any(|data| !matches!(data, Data::Empty)))
            .map(|row| {
                iter::repeat_n(Cell::Empty, first_col)
                    .chain(row.iter().map(to_cell))
                    .collect::<Vec<_>>()
            }),
    );
    info!(
        sheet = sheet_name.as_deref().unwrap_or_default(),
        columns = table.width(),
        rows = table.height(),
        "worksheet loaded"
    );
    Ok(table)
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Integer(*i),
        Data::Float(v) => Cell::Float(*v),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) if dt.is_duration() => Cell::Duration(format_duration(dt.as_f64())),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(Cell::DateTime)
            .unwrap_or_else(|| Cell::Float(dt.as_f64())),
        Data::DateTimeIso(s) => Cell::Text(s.clone()),
        Data::DurationIso(s) => Cell::Duration(s.clone()),
        Data::Error(e) => Cell::Error(e.to_string()),
    }
}

/// Excel stores durations as fractional days; render them as `H:MM:SS`.
fn format_duration(days: f64) -> String {
    let total = (days * 86_400.0).round() as i64;
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();
    format!(
        "{sign}{}:{:02}:{:02}",
        total / 3600,
        total % 3600 / 60,
        total % 60
    )
}
