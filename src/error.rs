use thiserror::Error;

/// Result type for tolc-unparse operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by derived accessors of the node model and by configuration.
///
/// The printer itself never returns these: it turns them into in-band failure
/// markers or out-of-band diagnostics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Malformed {kind} literal `{raw}`: {message}")]
    Literal {
        kind: &'static str,
        raw: String,
        message: String,
    },

    #[error("Unknown {kind} operator `{raw}`")]
    Operator { kind: &'static str, raw: String },

    #[error("Missing {what}")]
    MissingValue { what: &'static str },

    #[error("Literal `{raw}` does not survive a value round trip (rebuilt as `{rebuilt}`)")]
    RoundTrip { raw: String, rebuilt: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl Error {
    /// Create a literal decoding error
    pub fn literal_error(kind: &'static str, raw: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Literal {
            kind,
            raw: raw.into(),
            message: message.into(),
        }
    }

    /// Create an operator lookup error
    pub fn operator_error(kind: &'static str, raw: impl Into<String>) -> Self {
        Self::Operator { kind, raw: raw.into() }
    }

    /// Create a missing value error
    pub fn missing(what: &'static str) -> Self {
        Self::MissingValue { what }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }
}
