mod converter;
mod csv_out;
mod error;
mod messages;
mod settings;
mod table;
mod utils;
mod workbook;

pub use crate::converter::{Conversion, Outcome, convert, convert_and_report};
pub use crate::csv_out::{UTF8_BOM, write_csv, write_csv_file};
pub use crate::error::Error;
pub use crate::messages::{Language, MessageArgs, MessageKind, render};
pub use crate::settings::Settings;
pub use crate::table::{Cell, Table};
pub use crate::workbook::load_first_sheet;

use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};

pub type Result<T> = std::result::Result<T, Error>;

fn init_logging() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // stdout is reserved for the user-facing lines
    let _ = fmt()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Converts `data/diem.xlsx` into `data/diem.csv`, reporting in Vietnamese.
pub fn run() -> ExitCode {
    init_logging();
    let outcome = convert_and_report(&Settings::default());
    ExitCode::from(outcome.exit_code())
}
