use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Workbook(#[from] calamine::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("Input file not found: {}", .0.display())]
    InputMissing(PathBuf),
    #[error("Input file disappeared before it could be read: {}", .0.display())]
    InputVanished(PathBuf),
    #[error("Workbook has no worksheet: {}", .0.display())]
    NoWorksheet(PathBuf),
    #[error("Cannot replace {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },
}
