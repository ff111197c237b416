//! Error types, one enum per area.

mod config_error;
mod graph_error;

pub use config_error::ConfigError;
pub use graph_error::GraphError;

/// Top-level error for the Causeway workspace.
#[derive(Debug, thiserror::Error)]
pub enum CausewayError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type CausewayResult<T> = Result<T, CausewayError>;
