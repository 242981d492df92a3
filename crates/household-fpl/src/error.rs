use crate::config::ConfigError;
use crate::fpl::{FplError, GuidelineLoadError};
use crate::telemetry::TelemetryError;
use std::fmt;

/// Process-level failure for the service and CLI entry points.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Guidelines(GuidelineLoadError),
    Fpl(FplError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Guidelines(err) => write!(f, "guideline table error: {}", err),
            AppError::Fpl(err) => write!(f, "poverty level error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Guidelines(err) => Some(err),
            AppError::Fpl(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<GuidelineLoadError> for AppError {
    fn from(value: GuidelineLoadError) -> Self {
        Self::Guidelines(value)
    }
}

impl From<FplError> for AppError {
    fn from(value: FplError) -> Self {
        Self::Fpl(value)
    }
}
