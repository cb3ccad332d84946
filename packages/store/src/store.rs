//! VirtualFileStore: a root directory holding one immutable file.

use bytes::Bytes;
use tracing::{debug, trace};

use crate::{
    classify, Config, DirEntry, Error, FileAttr, FileKind, Filesystem, InitOptions, OpenFlags,
    Resolved,
};

/// The single-file filesystem.
///
/// Owns its [`Config`] and never mutates it. All operations are pure reads,
/// so the store is `Send + Sync` and can be shared behind an `Arc` by a
/// multi-threaded transport without locking.
#[derive(Clone, Debug)]
pub struct VirtualFileStore {
    config: Config,
}

impl VirtualFileStore {
    pub fn new(config: Config) -> Self {
        debug!(
            file_name = config.file_name(),
            size = config.contents().len(),
            "virtual file store created"
        );
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Length of the file in bytes.
    pub fn size(&self) -> u64 {
        self.config.contents().len() as u64
    }

    fn require_file(&self, path: &str) -> Result<(), Error> {
        match self.resolve(path) {
            Resolved::File => Ok(()),
            _ => {
                debug!(path, "not the configured file");
                Err(Error::no_such_entry(path))
            }
        }
    }
}

impl Default for VirtualFileStore {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Filesystem for VirtualFileStore {
    fn init(&self) -> InitOptions {
        // Content is immutable, so cached pages can never go stale.
        InitOptions { kernel_cache: true }
    }

    fn resolve(&self, path: &str) -> Resolved {
        classify(path, self.config.file_name())
    }

    fn get_attributes(&self, path: &str) -> Result<FileAttr, Error> {
        trace!(path, "get_attributes");
        match self.resolve(path) {
            Resolved::Root => Ok(FileAttr::directory()),
            Resolved::File => Ok(FileAttr::regular_file(self.size())),
            Resolved::NotFound => {
                debug!(path, "get_attributes: no such entry");
                Err(Error::no_such_entry(path))
            }
        }
    }

    fn list_directory(&self, path: &str) -> Result<Vec<DirEntry>, Error> {
        trace!(path, "list_directory");
        if self.resolve(path) != Resolved::Root {
            debug!(path, "list_directory: not a directory");
            return Err(Error::no_such_entry(path));
        }

        Ok(vec![
            DirEntry::new(".", FileKind::Directory),
            DirEntry::new("..", FileKind::Directory),
            DirEntry::new(self.config.file_name(), FileKind::RegularFile),
        ])
    }

    fn open_for_read(&self, path: &str, flags: OpenFlags) -> Result<(), Error> {
        trace!(path, %flags, "open_for_read");
        self.require_file(path)?;

        if !flags.is_read_only() {
            debug!(path, %flags, "open_for_read: write access denied");
            return Err(Error::access_denied(path, flags));
        }

        Ok(())
    }

    fn read_range(&self, path: &str, offset: u64, max_len: usize) -> Result<Bytes, Error> {
        trace!(path, offset, max_len, "read_range");
        self.require_file(path)?;

        let contents = self.config.contents();
        let start = match usize::try_from(offset) {
            Ok(start) if start < contents.len() => start,
            // At or past end of file.
            _ => return Ok(Bytes::new()),
        };
        let end = start + max_len.min(contents.len() - start);

        Ok(contents.slice(start..end))
    }
}
