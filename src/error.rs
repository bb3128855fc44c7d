use thiserror::Error;

/// Crate-wide error type.
///
/// Every variant carries a human-readable detail. The detail never contains
/// information produced by the RSA primitive during decryption, so
/// [`Error::DecryptionFailed`] stays opaque.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{}: {}", ErrorCode::InvalidParameter, .0)]
    InvalidParameter(String),

    #[error("{}: {}", ErrorCode::InvalidArgument, .0)]
    InvalidArgument(String),

    #[error("{}: {}", ErrorCode::InvalidKeyEncoding, .0)]
    InvalidKeyEncoding(String),

    #[error("{}: {}", ErrorCode::InvalidEncoding, .0)]
    InvalidEncoding(String),

    #[error(
        "{}: plaintext is {} bytes, at most {} fit this key",
        ErrorCode::PlaintextTooLarge,
        .len,
        .max
    )]
    PlaintextTooLarge { len: usize, max: usize },

    #[error("{}: decryption failed", ErrorCode::DecryptionFailed)]
    DecryptionFailed,

    #[error("{}: {}", ErrorCode::SignatureMalformed, .0)]
    SignatureMalformed(String),

    #[error("{}: {}", ErrorCode::Internal, .0)]
    Internal(String),
}

impl Error {
    /// The machine-readable kind of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::InvalidParameter(_) => ErrorCode::InvalidParameter,
            Error::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Error::InvalidKeyEncoding(_) => ErrorCode::InvalidKeyEncoding,
            Error::InvalidEncoding(_) => ErrorCode::InvalidEncoding,
            Error::PlaintextTooLarge { .. } => ErrorCode::PlaintextTooLarge,
            Error::DecryptionFailed => ErrorCode::DecryptionFailed,
            Error::SignatureMalformed(_) => ErrorCode::SignatureMalformed,
            Error::Internal(_) => ErrorCode::Internal,
        }
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Error::InvalidEncoding(format!("malformed base64: {}", err))
    }
}

/// Error codes, as they prefix boundary error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorCode {
    #[serde(rename = "INVALID_PARAMETER")]
    InvalidParameter,
    #[serde(rename = "INVALID_ARGUMENT")]
    InvalidArgument,
    #[serde(rename = "INVALID_KEY_ENCODING")]
    InvalidKeyEncoding,
    #[serde(rename = "INVALID_ENCODING")]
    InvalidEncoding,
    #[serde(rename = "PLAINTEXT_TOO_LARGE")]
    PlaintextTooLarge,
    #[serde(rename = "DECRYPTION_FAILED")]
    DecryptionFailed,
    #[serde(rename = "SIGNATURE_MALFORMED")]
    SignatureMalformed,
    #[serde(rename = "INTERNAL")]
    Internal,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorCode::InvalidParameter => "INVALID_PARAMETER",
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::InvalidKeyEncoding => "INVALID_KEY_ENCODING",
            ErrorCode::InvalidEncoding => "INVALID_ENCODING",
            ErrorCode::PlaintextTooLarge => "PLAINTEXT_TOO_LARGE",
            ErrorCode::DecryptionFailed => "DECRYPTION_FAILED",
            ErrorCode::SignatureMalformed => "SIGNATURE_MALFORMED",
            ErrorCode::Internal => "INTERNAL",
        };
        write!(f, "{}", s)
    }
}
