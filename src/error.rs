use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// crate specific Error enum
///
/// Everything in here aborts a run. Bad input records are reported per record
/// through [`crate::footprint::ValidationError`] instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    CsvError(#[from] csv::Error),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    #[error(transparent)]
    ProjError(#[from] proj4rs::errors::Error),
    #[error("{0} does not exist")]
    MissingInput(PathBuf),
    #[error("please use a csv point layer for this tool, got {0}")]
    UnsupportedInput(PathBuf),
    #[error("the input layer has no field named {0}")]
    MissingField(String),
    #[error("EPSG:{0} is not a recognized coordinate reference system")]
    UnknownCrs(u16),
}
