use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum GeneratorError {
    #[error("strapi request failed: {0}")]
    StrapiHttp(String),

    #[error("strapi returned status {status}: {body}")]
    StrapiStatus { status: u16, body: String },

    #[error("failed to decode article payload: {0}")]
    Decode(String),

    #[error("serialization failed: {0}")]
    Serialize(String),

    #[error("failed to write {path}: {message}")]
    WriteDocument { path: Utf8PathBuf, message: String },

    #[error("filesystem error: {0}")]
    Filesystem(String),
}
