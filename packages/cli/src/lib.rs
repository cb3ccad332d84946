//! hellofs: command-line driver for the single-file virtual filesystem
//!
//! Builds the immutable [`Config`] once from arguments and environment,
//! wraps it in a [`VirtualFileStore`], and runs one filesystem operation
//! against it, printing the outcome. A kernel transport would sit where
//! [`execute`] sits, calling the same [`Filesystem`] operations.
//!
//! [`Filesystem`]: hellofs_store::Filesystem

mod args;
mod commands;
mod error;

use std::io::Write;

use hellofs_store::{Config, VirtualFileStore};

pub use args::{Args, Command, DEFAULT_READ_LEN};
pub use commands::{execute, Info};
pub use error::CliError;

/// Build the store from the startup overrides, falling back to defaults.
pub fn build_store(args: &Args) -> Result<VirtualFileStore, CliError> {
    let mut config = Config::default();
    if let Some(name) = &args.name {
        config = config.with_file_name(name.as_str())?;
    }
    if let Some(contents) = &args.contents {
        config = config.with_contents(contents.clone());
    }

    tracing::info!(
        file_name = config.file_name(),
        size = config.contents().len(),
        "configuration loaded"
    );
    Ok(VirtualFileStore::new(config))
}

/// Run the parsed command, writing its output to stdout.
pub fn run(args: Args) -> Result<(), CliError> {
    let store = build_store(&args)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&store, &args.command, &mut out)?;
    out.flush()?;
    Ok(())
}
