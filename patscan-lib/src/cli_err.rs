use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("io error: {0}")]
    IoError(#[from] io::Error),
    #[error("bad file format: {0}")]
    BadFileFormat(&'static str),
    #[error("bad pattern: {0}")]
    BadPattern(&'static str),
    #[error("bad argument: {0}")]
    ArgumentError(&'static str),
    #[error("result channel closed early: {0}")]
    SendError(String),
    #[error("search worker {worker} terminated abnormally")]
    WorkerFailed { worker: usize },
}

pub type Result<T> = std::result::Result<T, CliError>;

impl<T> From<crossbeam_channel::SendError<T>> for CliError {
    fn from(error: crossbeam_channel::SendError<T>) -> Self {
        CliError::SendError(error.to_string())
    }
}
