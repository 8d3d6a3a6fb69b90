#[derive(Debug)]
pub enum SourceError {
    FetchError(reqwest::Error),
    InvalidSource(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::FetchError(err)
    }
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::FetchError(e) => write!(f, "Fetch error: {}", e),
            SourceError::InvalidSource(e) => write!(f, "Invalid source: {}", e),
        }
    }
}

impl std::error::Error for SourceError {}
