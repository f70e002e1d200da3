use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed metadata on '{label}': expected {expected}")]
    MalformedMetadata { label: String, expected: &'static str },

    #[error("Set item '{name}' has no set name")]
    MissingSetName { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Tables file error: {0}")]
    TablesToml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn malformed(label: &str, expected: &'static str) -> Self {
        Self::MalformedMetadata { label: label.to_string(), expected }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Json(_) | Self::TablesToml(_) => 2,
            Self::Io(_) => 3,
            _ => 1,
        }
    }
}
