use thiserror::Error;

#[derive(Debug, Error)]
pub enum DvsError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid vector at index {index}: expected at least 3 components, got {components}")]
    InvalidVector {
        index:      usize,
        components: usize,
    },

    #[error("Invalid file handling")]
    IOError(#[from] std::io::Error),

    #[error("Header options serialization error: {0}")]
    OptionsSerialization(String),

    #[error("Parse error at line {line}: {message}")]
    ParseError {
        line:    usize,
        message: String,
    },
}
