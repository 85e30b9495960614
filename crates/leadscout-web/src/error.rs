use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
