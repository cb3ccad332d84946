//! Async mirror of [`Filesystem`](crate::Filesystem).
//!
//! For transports built on an async runtime such as Tokio. Enable the
//! `async` feature to use it:
//!
//! ```toml
//! [dependencies]
//! hellofs-store = { version = "0.1", features = ["async"] }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use crate::{DirEntry, Error, FileAttr, Filesystem, InitOptions, OpenFlags, Resolved};

/// Async version of `Filesystem`.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn AsyncFilesystem>`.
///
/// # Example
///
/// ```rust,ignore
/// use hellofs_store::{AsyncFilesystem, Bytes, Error};
///
/// async fn head(fs: &dyn AsyncFilesystem, path: &str) -> Result<Bytes, Error> {
///     fs.read_range_async(path, 0, 64).await
/// }
/// ```
#[async_trait]
pub trait AsyncFilesystem: Send + Sync {
    async fn init_async(&self) -> InitOptions;

    async fn resolve_async(&self, path: &str) -> Resolved;

    async fn get_attributes_async(&self, path: &str) -> Result<FileAttr, Error>;

    async fn list_directory_async(&self, path: &str) -> Result<Vec<DirEntry>, Error>;

    async fn open_for_read_async(&self, path: &str, flags: OpenFlags) -> Result<(), Error>;

    async fn read_range_async(
        &self,
        path: &str,
        offset: u64,
        max_len: usize,
    ) -> Result<Bytes, Error>;
}

/// Adapter to expose a sync `Filesystem` through `AsyncFilesystem`.
///
/// No mutex is needed: `Filesystem` methods take `&self` and never block, so
/// they are called inline. Cloning the adapter shares the inner filesystem.
///
/// # Example
///
/// ```rust,ignore
/// use hellofs_store::{SyncToAsync, VirtualFileStore};
///
/// let fs = SyncToAsync::new(VirtualFileStore::default());
/// ```
pub struct SyncToAsync<T> {
    inner: Arc<T>,
}

impl<T> SyncToAsync<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Wrap an already shared filesystem.
    pub fn from_arc(inner: Arc<T>) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }
}

impl<T> Clone for SyncToAsync<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl<T: Filesystem> AsyncFilesystem for SyncToAsync<T> {
    async fn init_async(&self) -> InitOptions {
        self.inner.init()
    }

    async fn resolve_async(&self, path: &str) -> Resolved {
        self.inner.resolve(path)
    }

    async fn get_attributes_async(&self, path: &str) -> Result<FileAttr, Error> {
        self.inner.get_attributes(path)
    }

    async fn list_directory_async(&self, path: &str) -> Result<Vec<DirEntry>, Error> {
        self.inner.list_directory(path)
    }

    async fn open_for_read_async(&self, path: &str, flags: OpenFlags) -> Result<(), Error> {
        self.inner.open_for_read(path, flags)
    }

    async fn read_range_async(
        &self,
        path: &str,
        offset: u64,
        max_len: usize,
    ) -> Result<Bytes, Error> {
        self.inner.read_range(path, offset, max_len)
    }
}
