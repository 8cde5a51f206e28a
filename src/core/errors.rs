use thiserror::Error;

#[derive(Error, Debug)]
pub enum KelimeError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Backend returned HTTP {code}")]
    Status { code: u16 },

    #[error("KelimeError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for KelimeError {
    fn from(error: std::io::Error) -> Self {
        KelimeError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for KelimeError {
    fn from(error: reqwest::Error) -> Self {
        KelimeError::Reqwest(Box::new(error))
    }
}
