use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("invalid identifier: {0:?} is not numeric")]
    InvalidId(String),

    #[error("validation: {0}")]
    Validation(String),

    #[error("service with id={0} not found in the provider catalog")]
    ServiceNotFound(i64),

    #[error("provider: {0}")]
    Provider(String),

    #[error("config: {0}")]
    Config(String),

    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}
