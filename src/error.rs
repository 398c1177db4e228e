use std::io::Error as IoError;
use std::result::Result as StdResult;

use arff::Error as ArffError;
use serde_json::Error as JsonError;
use statrs::StatsError;

pub type Result<T> = StdResult<T, Error>;

#[derive(Debug)]
pub enum Error {
    InvalidArgument(String),
    IoError(IoError),
    ArffError(ArffError),
    JsonError(JsonError),
    StatsError(StatsError),
}

impl Error {
    pub(crate) fn invalid<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::IoError(e)
    }
}

impl From<ArffError> for Error {
    fn from(e: ArffError) -> Self {
        Error::ArffError(e)
    }
}

impl From<JsonError> for Error {
    fn from(e: JsonError) -> Self {
        Error::JsonError(e)
    }
}

impl From<StatsError> for Error {
    fn from(e: StatsError) -> Self {
        Error::StatsError(e)
    }
}
