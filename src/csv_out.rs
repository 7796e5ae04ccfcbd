use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::Builder;
use tracing::debug;

use crate::Result;
use crate::error::Error;
use crate::table::Table;
use crate::utils::parent_or_current;

/// UTF-8 byte-order mark; spreadsheet applications use it to detect the encoding.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

fn line_terminator() -> Terminator {
    if cfg!(windows) {
        Terminator::CRLF
    } else {
        Terminator::Any(b'\n')
    }
}

/// Writes `table` as BOM-prefixed CSV into `out` and hands the writer back.
pub fn write_csv<W: Write>(table: &Table, mut out: W) -> Result<W> {
    out.write_all(UTF8_BOM)?;

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(line_terminator())
        .from_writer(out);

    if table.width() > 0 {
        writer.write_record(table.headers())?;
    }
    for row in table.rows() {
        writer.write_record(row.iter().map(|cell| cell.to_string()))?;
    }
    writer.flush()?;

    writer.into_inner().map_err(|e| Error::Io(e.into_error()))
}

/// Writes `table` to `path`.
///
/// The CSV goes to a temporary file next to `path` first and is then moved
/// over it, so `path` either keeps its old content or gets the complete new one.
pub fn write_csv_file(table: &Table, path: &Path) -> Result<()> {
    let tmp = Builder::new()
        .prefix(".diem-csv")
        .suffix(".tmp")
        .tempfile_in(parent_or_current(path))?;

    let tmp = write_csv(table, BufWriter::new(tmp))?
        .into_inner()
        .map_err(|e| Error::Io(e.into_error()))?;
    tmp.as_file().sync_all()?;

    // tempfile creates 0600 files; a replaced output keeps its own mode
    match fs::metadata(path) {
        Ok(existing) => tmp.as_file().set_permissions(existing.permissions())?,
        #[cfg(unix)]
        Err(_) => {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))?;
        }
        #[cfg(not(unix))]
        Err(_) => {}
    }

    debug!(tmp = %tmp.path().display(), dest = %path.display(), "persisting csv");
    tmp.persist(path).map_err(|e| Error::Persist {
        path: path.to_owned(),
        source: e.error,
    })?;
    Ok(())
}
