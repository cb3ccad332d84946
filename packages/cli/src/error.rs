use hellofs_store::ConfigError;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Fs(#[from] hellofs_store::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit status: the errno for filesystem errors, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Fs(e) => e.errno(),
            _ => 1,
        }
    }
}
