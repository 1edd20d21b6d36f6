/// Errors generated by this crate
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The schema tree is structurally invalid.
    Schema(String),
    /// A dotted path could not be inserted into or resolved against a schema tree.
    Path(String),
    /// A record references a column that is not a leaf of the schema.
    UnknownColumn(String),
    /// The compression codec is unknown, not implemented, or its feature is not active.
    UnsupportedCodec(String),
    /// Error presented when trying to use a writer with invalid data or parameters.
    InvalidParameter(String),
    /// The writer can no longer be used: it was closed or a previous flush failed.
    InvalidState(String),
    /// Writing to or closing the underlying sink failed.
    Io(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Schema(message) => {
                write!(fmt, "Invalid schema: {}", message)
            }
            Error::Path(message) => {
                write!(fmt, "Invalid path: {}", message)
            }
            Error::UnknownColumn(name) => {
                write!(fmt, "{} is not a value column", name)
            }
            Error::UnsupportedCodec(message) => {
                write!(fmt, "Unsupported codec: {}", message)
            }
            Error::InvalidParameter(message) => {
                write!(fmt, "Invalid parameter: {}", message)
            }
            Error::InvalidState(message) => {
                write!(fmt, "Invalid state: {}", message)
            }
            Error::Io(message) => {
                write!(fmt, "underlying IO error: {}", message)
            }
        }
    }
}

#[cfg(feature = "snappy")]
impl From<snap::Error> for Error {
    fn from(e: snap::Error) -> Error {
        Error::Io(format!("underlying snap error: {}", e))
    }
}

impl From<parquet_format_safe::thrift::Error> for Error {
    fn from(e: parquet_format_safe::thrift::Error) -> Error {
        Error::Io(format!("underlying thrift error: {}", e))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e.to_string())
    }
}

/// A specialized `Result` for parquet writer errors.
pub type Result<T> = std::result::Result<T, Error>;

macro_rules! schema_err {
    ($fmt:expr) => (Error::Schema($fmt.to_owned()));
    ($fmt:expr, $($args:expr),*) => (Error::Schema(format!($fmt, $($args),*)));
}

macro_rules! path_err {
    ($fmt:expr) => (Error::Path($fmt.to_owned()));
    ($fmt:expr, $($args:expr),*) => (Error::Path(format!($fmt, $($args),*)));
}
