#[derive(thiserror::Error, Debug)]
pub enum DatasourceError {
    #[error("Health check failed")]
    HealthCheckFailed,

    #[error("Invalid request URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Missing API key: set the {0} environment variable")]
    MissingApiKey(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}
