//! Errors raised while building symbology.

use thiserror::Error;

/// Errors of this crate.  Lookups and ramp sampling never fail; only
/// constructing colors from configuration and contract violations do.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid hex color “{input}”: {reason}")]
    InvalidHex { input: String, reason: &'static str },

    #[error("invalid argument: {name} = {value} ({reason})")]
    InvalidArgument {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("invalid symbology configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
