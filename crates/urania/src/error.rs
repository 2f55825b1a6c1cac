use thiserror::Error;

/// Contract violations in a chart snapshot handed over by the ephemeris layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("chart snapshot is missing required body: {0}")]
    MissingBody(String),
    #[error("chart snapshot lists body {0} more than once")]
    DuplicateBody(String),
    #[error("{body}: longitude {value} is outside [0, 360)")]
    LongitudeOutOfRange { body: String, value: f64 },
    #[error("{body}: degree-within-sign {value} is outside [0, 30)")]
    SignDegreeOutOfRange { body: String, value: f64 },
    #[error("{body}: whole-sign house {value} is outside 1..=12")]
    HouseOutOfRange { body: String, value: u8 },
    #[error("{body}: daily speed is not a finite number")]
    NonFiniteSpeed { body: String },
    #[error("ascendant degree {0} is outside [0, 30)")]
    AscendantDegreeOutOfRange(f64),
}

/// Errors raised by the strict knowledge loaders.
#[derive(Error, Debug)]
pub enum KnowledgeError {
    #[error("failed to read knowledge file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {name}: {message}")]
    InvalidJson { name: String, message: String },
    #[error("invalid {table} table: {message}")]
    InvalidTable { table: String, message: String },
}
