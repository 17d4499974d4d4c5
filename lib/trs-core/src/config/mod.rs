use thiserror::Error;

pub mod core_config;


#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("Config parsing error: `{0}`")]
    GeneralParsingError(String),

    #[error(transparent)]
    Validation(#[from] ConfigValidationError),
}

#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("Invalid value for `{key}`: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}
