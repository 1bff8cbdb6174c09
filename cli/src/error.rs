use ipfuscator_core::InvalidAddress;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to compile method '{pattern}': {reason}")]
    InvalidSelector { pattern: String, reason: String },

    #[error("no IP addr provided, use \"-h\" flag.")]
    MissingInput,

    #[error("failed to construct IP addr: {0}")]
    InvalidAddress(#[from] InvalidAddress),
}
