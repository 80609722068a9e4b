use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to read CSV export: {0}")]
    Csv(#[from] csv::Error),

    #[error(
        "No barbell lift data found in this file. Make sure you selected the correct source and exported the right CSV."
    )]
    NoEntries,
}
