use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::Result;
use crate::csv_out::write_csv_file;
use crate::error::Error;
use crate::messages::{Language, MessageArgs, MessageKind, render};
use crate::settings::Settings;
use crate::table::Table;
use crate::utils::ensure_parent_dir;
use crate::workbook::load_first_sheet;

/// A finished conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    pub columns: usize,
}

/// Converts the first worksheet of `settings.input_path` into a CSV file at
/// `settings.output_path`.
///
/// A missing input returns [`Error::InputMissing`] before anything is written.
pub fn convert(settings: &Settings) -> Result<Conversion> {
    let input = settings.input_path.as_path();
    let output = settings.output_path.as_path();

    if !input.is_file() {
        return Err(Error::InputMissing(input.to_owned()));
    }

    let table = load_input(input)?;
    ensure_parent_dir(output)?;
    write_csv_file(&table, output)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        rows = table.height(),
        "conversion finished"
    );
    Ok(Conversion {
        input: input.to_owned(),
        output: output.to_owned(),
        rows: table.height(),
        columns: table.width(),
    })
}

/// Loads the workbook, telling a file that went away since the existence
/// check apart from one that could not be parsed.
fn load_input(input: &Path) -> Result<Table> {
    load_first_sheet(input).map_err(|err| {
        if input.is_file() {
            err
        } else {
            Error::InputVanished(input.to_owned())
        }
    })
}

/// What the user is told about a run, and what the process exits with.
#[derive(Debug)]
pub enum Outcome {
    Converted(Conversion),
    InputMissing(PathBuf),
    InputVanished(PathBuf),
    Failed { input: PathBuf, detail: String },
}

impl Outcome {
    pub fn from_result(settings: &Settings, result: Result<Conversion>) -> Self {
        match result {
            Ok(conversion) => Outcome::Converted(conversion),
            Err(Error::InputMissing(path)) => Outcome::InputMissing(path),
            Err(Error::InputVanished(path)) => Outcome::InputVanished(path),
            Err(err) => Outcome::Failed {
                input: settings.input_path.clone(),
                detail: err.to_string(),
            },
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Converted(_) => 0,
            Outcome::Failed { .. } => 1,
            Outcome::InputMissing(_) | Outcome::InputVanished(_) => 2,
        }
    }

    /// Console lines for this outcome, in `language`.
    pub fn messages(&self, language: Language) -> Vec<String> {
        match self {
            Outcome::Converted(conversion) => {
                let args = MessageArgs {
                    input: Some(conversion.input.as_path()),
                    output: Some(conversion.output.as_path()),
                    ..Default::default()
                };
                vec![render(language, MessageKind::Success, &args)]
            }
            Outcome::InputMissing(path) => {
                let args = MessageArgs {
                    input: Some(path.as_path()),
                    ..Default::default()
                };
                vec![
                    render(language, MessageKind::InputMissingHint, &args),
                    render(language, MessageKind::InputMissing, &args),
                ]
            }
            Outcome::InputVanished(path) => {
                let args = MessageArgs {
                    input: Some(path.as_path()),
                    ..Default::default()
                };
                vec![render(language, MessageKind::InputVanished, &args)]
            }
            Outcome::Failed { input, detail } => {
                let args = MessageArgs {
                    input: Some(input.as_path()),
                    detail: Some(detail.as_str()),
                    ..Default::default()
                };
                vec![render(language, MessageKind::Failure, &args)]
            }
        }
    }
}

/// Runs one conversion with `settings` and prints the outcome to stdout.
pub fn convert_and_report(settings: &Settings) -> Outcome {
    let outcome = Outcome::from_result(settings, convert(settings));
    match &outcome {
        Outcome::Converted(_) => {}
        Outcome::InputMissing(path) => warn!(input = %path.display(), "input missing"),
        Outcome::InputVanished(path) => warn!(input = %path.display(), "input vanished"),
        Outcome::Failed { detail, .. } => warn!(error = %detail, "conversion failed"),
    }
    for line in outcome.messages(settings.language) {
        println!("{line}");
    }
    outcome
}
