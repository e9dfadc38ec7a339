use crate::validation::ValidationError;
use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

pub mod file;

pub use file::{
    EmitOptions, load_schedule_from_csv, load_schedule_from_reader, render_schedule_js,
    save_schedule_to_js,
};

#[derive(Debug)]
pub enum ScheduleDataError {
    Validation(ValidationError),
    Io(io::Error),
    Csv(csv::Error),
    Serialization(SerdeJsonError),
}

impl ScheduleDataError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ScheduleDataError::Validation(_))
    }
}

impl fmt::Display for ScheduleDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleDataError::Validation(err) => write!(f, "{err}"),
            ScheduleDataError::Io(err) => write!(f, "io error: {err}"),
            ScheduleDataError::Csv(err) => write!(f, "csv error: {err}"),
            ScheduleDataError::Serialization(err) => write!(f, "serialization error: {err}"),
        }
    }
}

impl std::error::Error for ScheduleDataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScheduleDataError::Validation(err) => Some(err),
            ScheduleDataError::Io(err) => Some(err),
            ScheduleDataError::Csv(err) => Some(err),
            ScheduleDataError::Serialization(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ScheduleDataError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<io::Error> for ScheduleDataError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for ScheduleDataError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<SerdeJsonError> for ScheduleDataError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

pub type ScheduleDataResult<T> = Result<T, ScheduleDataError>;
