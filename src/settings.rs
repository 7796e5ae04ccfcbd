use std::path::{Path, PathBuf};

use crate::messages::Language;

pub const DATA_DIR: &str = "data";
pub const DEFAULT_INPUT_FILE: &str = "diem.xlsx";
pub const DEFAULT_OUTPUT_FILE: &str = "diem.csv";

/// Where to read the workbook from, where to write the CSV to, and which
/// language to report the outcome in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub language: Language,
}

impl Settings {
    pub fn new(input_path: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Self {
        Self {
            input_path: input_path.as_ref().to_owned(),
            output_path: output_path.as_ref().to_owned(),
            ..Default::default()
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        let data_dir = Path::new(DATA_DIR);
        Self {
            input_path: data_dir.join(DEFAULT_INPUT_FILE),
            output_path: data_dir.join(DEFAULT_OUTPUT_FILE),
            language: Language::default(),
        }
    }
}
