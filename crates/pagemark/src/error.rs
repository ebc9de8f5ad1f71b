#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("Input not found: {0}")]
    InputNotFound(String),

    #[error("Invalid page dump: {0}")]
    InvalidDump(String),
}
