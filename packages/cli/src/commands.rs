//! One function per filesystem operation, writing results to `out`.

use std::io::Write;

use hellofs_store::{FileKind, Filesystem, ROOT_PATH};
use serde::Serialize;

use crate::{CliError, Command};

/// Summary printed by `info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Info {
    pub file_name: String,
    pub file_path: String,
    pub size: u64,
    pub kernel_cache: bool,
}

impl Info {
    /// Gather the summary through the public operations only.
    pub fn collect(fs: &impl Filesystem) -> Result<Self, CliError> {
        let file_name = fs
            .list_directory(ROOT_PATH)?
            .into_iter()
            .find(|entry| entry.kind == FileKind::RegularFile)
            .map(|entry| entry.name)
            .ok_or_else(|| hellofs_store::Error::no_such_entry(ROOT_PATH))?;
        let file_path = format!("/{}", file_name);
        let size = fs.get_attributes(&file_path)?.size;

        Ok(Info {
            file_name,
            file_path,
            size,
            kernel_cache: fs.init().kernel_cache,
        })
    }
}

/// Run a single command against `fs`.
pub fn execute<F, W>(fs: &F, command: &Command, out: &mut W) -> Result<(), CliError>
where
    F: Filesystem,
    W: Write,
{
    match command {
        Command::Stat { path } => {
            let attr = fs.get_attributes(path)?;
            serde_json::to_writer_pretty(&mut *out, &attr)?;
            writeln!(out)?;
        }
        Command::Ls { path } => {
            for entry in fs.list_directory(path)? {
                writeln!(out, "{}", entry.name)?;
            }
        }
        Command::Open { path, .. } => {
            fs.open_for_read(path, command.open_flags())?;
            writeln!(out, "ok")?;
        }
        Command::Cat {
            path,
            offset,
            length,
        } => {
            fs.open_for_read(path, command.open_flags())?;
            let data = fs.read_range(path, *offset, *length)?;
            tracing::debug!(path = %path, offset, read = data.len(), "cat");
            out.write_all(&data)?;
        }
        Command::Info => {
            let info = Info::collect(fs)?;
            serde_json::to_writer_pretty(&mut *out, &info)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
