#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// The fallback encoding is not a canonical encoding name
    UnsupportedName { name: String },
    /// An error-mode string other than "replacement" or "fatal"
    InvalidErrorMode { value: String },
    /// Malformed byte sequence encountered under fatal mode
    Malformed { encoding: &'static str },
}

impl std::fmt::Display for EncodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EncodingError::UnsupportedName { name } => {
                write!(f, "unsupported encoding name: {:?}", name)
            }
            EncodingError::InvalidErrorMode { value } => {
                write!(f, "invalid error mode: {:?}", value)
            }
            EncodingError::Malformed { encoding } => {
                write!(f, "malformed {} byte sequence", encoding)
            }
        }
    }
}

impl std::error::Error for EncodingError {}
