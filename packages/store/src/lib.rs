//! hellofs-store: a read-only virtual filesystem holding exactly one file
//!
//! The filesystem has a root directory and a single regular file directly
//! beneath it. The file's name and bytes are fixed when the store is built
//! and never change afterwards, so every operation is a pure read over an
//! immutable snapshot and the store can be shared freely across threads.
//!
//! This crate is the filesystem logic only. Whatever carries requests from
//! the operating system (a FUSE session, a test harness, a CLI) talks to it
//! through the [`Filesystem`] trait and translates [`Error`] into its own
//! status codes (see [`Error::errno`]).
//!
//! # Example
//!
//! ```rust
//! use hellofs_store::{Config, Filesystem, OpenFlags, VirtualFileStore};
//!
//! let store = VirtualFileStore::new(Config::default());
//!
//! let attr = store.get_attributes("/Hello").unwrap();
//! assert_eq!(attr.size, 13);
//!
//! store.open_for_read("/Hello", OpenFlags::read_only()).unwrap();
//! assert_eq!(&store.read_range("/Hello", 6, 5).unwrap()[..], b"World");
//! ```
//!
//! # Async Support
//!
//! Enable the `async` feature for [`AsyncFilesystem`] and the
//! [`SyncToAsync`] adapter:
//!
//! ```toml
//! [dependencies]
//! hellofs-store = { version = "0.1", features = ["async"] }
//! ```

pub use bytes::Bytes;

mod attr;
mod config;
mod error;
mod flags;
mod path;
mod store;
mod traits;

pub use attr::{DirEntry, FileAttr, FileKind};
pub use config::{Config, ConfigError, DEFAULT_CONTENTS, DEFAULT_FILE_NAME};
pub use error::{Error, EACCES, ENOENT};
pub use flags::{AccessMode, OpenFlags};
pub use path::{classify, Resolved, ROOT_PATH};
pub use store::VirtualFileStore;
pub use traits::{Filesystem, InitOptions};

#[cfg(feature = "async")]
mod async_traits;

#[cfg(feature = "async")]
pub use async_traits::{AsyncFilesystem, SyncToAsync};
