use thiserror::Error;

#[derive(Error, Debug)]
/// Internal enum.
pub enum CliError {
    #[error("{0}")]
    /// Internal variant.
    Message(String),

    #[error("check digit mismatch for {id}: expected '{expected}', got '{got}'")]
    /// Internal variant.
    InvalidCheckDigit {
        /// Normalized contract ID.
        id: String,
        /// Internal field.
        expected: char,
        /// Internal field.
        got: char,
    },

    #[error(transparent)]
    /// Internal variant.
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// Internal variant.
    Evcoid(#[from] evcoid::Error),

    #[error(transparent)]
    /// Internal variant.
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    /// Internal variant.
    TomlDe(#[from] toml::de::Error),
}

/// Internal type alias.
pub type Result<T> = std::result::Result<T, CliError>;

impl CliError {
    /// Message shown on stderr before exiting.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCheckDigit { expected, .. } => {
                format!("ERROR: {self}\nNext: the last character should be '{expected}'")
            }
            Self::Evcoid(evcoid::Error::InvalidLength { .. }) => format!(
                "ERROR: {self}\nNext: use 14 characters (15 with check digit); '-' separators are ignored"
            ),
            Self::Evcoid(evcoid::Error::InvalidChar { .. }) => {
                format!("ERROR: {self}\nNext: contract IDs only use 0-9 and A-Z")
            }
            _ => format!("ERROR: {self}"),
        }
    }
}
