use thiserror::Error;

use crate::config::ConfigError;

/// Errors produced while building ticks, loading sample data or assembling plots.
#[derive(Error, Debug)]
pub enum Error {
    /// A caller passed a value outside the accepted inputs, such as an unknown
    /// granularity name or a domain whose start is after its end.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A bundled dataset could not be parsed.
    #[error("failed to parse dataset `{name}`: {source}")]
    Data {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A dataset had no records, so no domain can be derived from it.
    #[error("dataset `{0}` is empty")]
    EmptyDataset(&'static str),

    /// The plotting widget rejected the configuration.
    #[error("failed to build plot: {0}")]
    Plot(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
