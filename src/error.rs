//! Startup and serving failures of the host process.

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("invalid PORT value: {value}")]
    InvalidPort { value: String },

    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("failed to bind listener: {0}")]
    Bind(std::io::Error),

    #[error("server failed: {0}")]
    Serve(std::io::Error),
}
