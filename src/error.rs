use std::error;
use std::fmt;
use std::io;




/**
 * Error to represent an invalid equation of state selection, an undefined
 * evaluation point, or malformed grid and dataset inputs.
 */
#[derive(Debug)]
pub enum Error {
    UnsupportedVariant(String),
    DomainError { quantity: &'static str, value: f64 },
    ConfigurationError(String),
    MissingField { field: String, source: String },
    Io(io::Error),
    Decode(String),
}




// ============================================================================
impl Error {

    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Error::ConfigurationError(message.into())
    }

    pub fn missing_field<S: Into<String>, T: Into<String>>(field: S, source: T) -> Self {
        Error::MissingField { field: field.into(), source: source.into() }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        use Error::*;

        match self {
            UnsupportedVariant(v) => write!(fmt, "unsupported equation of state: {}", v),
            DomainError { quantity, value } => write!(fmt, "{} is outside the domain of the equation of state: {}", quantity, value),
            ConfigurationError(m) => write!(fmt, "configuration error: {}", m),
            MissingField { field, source } => write!(fmt, "variable {} not found in: {}", field, source),
            Io(e) => write!(fmt, "i/o error: {}", e),
            Decode(m) => write!(fmt, "could not decode: {}", m),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}
