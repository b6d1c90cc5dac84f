use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read destinations file {path}: {source}")]
    DestinationsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse destinations file: {0}")]
    DestinationsFileParse(#[source] serde_yaml::Error),

    #[error("destinations validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error for {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
