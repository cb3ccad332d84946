//! The operation set a transport invokes.

use std::sync::Arc;

use bytes::Bytes;

use crate::{DirEntry, Error, FileAttr, OpenFlags, Resolved};

/// Hints returned to the transport when a session starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InitOptions {
    /// Let the kernel keep file pages cached across opens.
    ///
    /// Only safe when content never changes underneath the cache.
    pub kernel_cache: bool,
}

/// Path-addressed filesystem operations.
///
/// Every method takes `&self`: implementations hold no per-call or
/// per-open state, so a transport may call them concurrently from any
/// number of threads. Repeated identical calls return identical results.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn Filesystem>` or
/// `Arc<dyn Filesystem>`.
pub trait Filesystem: Send + Sync {
    /// Called once when the transport starts a session.
    fn init(&self) -> InitOptions {
        InitOptions::default()
    }

    /// Classify a path.
    fn resolve(&self, path: &str) -> Resolved;

    /// Report metadata for a path.
    ///
    /// Fails with [`Error::NoSuchEntry`] iff `resolve(path)` is
    /// [`Resolved::NotFound`].
    fn get_attributes(&self, path: &str) -> Result<FileAttr, Error>;

    /// List a directory.
    ///
    /// Entries come back as `.`, `..`, then the contents.
    fn list_directory(&self, path: &str) -> Result<Vec<DirEntry>, Error>;

    /// Check whether a path may be opened with `flags`.
    ///
    /// Existence is checked before access mode, so a missing path is always
    /// [`Error::NoSuchEntry`]. No handle is returned because reads are fully
    /// addressed by path and offset.
    fn open_for_read(&self, path: &str, flags: OpenFlags) -> Result<(), Error>;

    /// Read up to `max_len` bytes starting at `offset`.
    ///
    /// # Returns
    ///
    /// * `Ok(bytes)` - between 0 and `max_len` bytes. An offset at or past
    ///   the end of the file yields an empty buffer, not an error.
    /// * `Err(Error::NoSuchEntry)` - the path is not a readable file.
    fn read_range(&self, path: &str, offset: u64, max_len: usize) -> Result<Bytes, Error>;
}

// Blanket implementations for references and smart pointers

impl<T: Filesystem + ?Sized> Filesystem for &T {
    fn init(&self) -> InitOptions {
        (**self).init()
    }

    fn resolve(&self, path: &str) -> Resolved {
        (**self).resolve(path)
    }

    fn get_attributes(&self, path: &str) -> Result<FileAttr, Error> {
        (**self).get_attributes(path)
    }

    fn list_directory(&self, path: &str) -> Result<Vec<DirEntry>, Error> {
        (**self).list_directory(path)
    }

    fn open_for_read(&self, path: &str, flags: OpenFlags) -> Result<(), Error> {
        (**self).open_for_read(path, flags)
    }

    fn read_range(&self, path: &str, offset: u64, max_len: usize) -> Result<Bytes, Error> {
        (**self).read_range(path, offset, max_len)
    }
}

impl<T: Filesystem + ?Sized> Filesystem for Box<T> {
    fn init(&self) -> InitOptions {
        self.as_ref().init()
    }

    fn resolve(&self, path: &str) -> Resolved {
        self.as_ref().resolve(path)
    }

    fn get_attributes(&self, path: &str) -> Result<FileAttr, Error> {
        self.as_ref().get_attributes(path)
    }

    fn list_directory(&self, path: &str) -> Result<Vec<DirEntry>, Error> {
        self.as_ref().list_directory(path)
    }

    fn open_for_read(&self, path: &str, flags: OpenFlags) -> Result<(), Error> {
        self.as_ref().open_for_read(path, flags)
    }

    fn read_range(&self, path: &str, offset: u64, max_len: usize) -> Result<Bytes, Error> {
        self.as_ref().read_range(path, offset, max_len)
    }
}

impl<T: Filesystem + ?Sized> Filesystem for Arc<T> {
    fn init(&self) -> InitOptions {
        self.as_ref().init()
    }

    fn resolve(&self, path: &str) -> Resolved {
        self.as_ref().resolve(path)
    }

    fn get_attributes(&self, path: &str) -> Result<FileAttr, Error> {
        self.as_ref().get_attributes(path)
    }

    fn list_directory(&self, path: &str) -> Result<Vec<DirEntry>, Error> {
        self.as_ref().list_directory(path)
    }

    fn open_for_read(&self, path: &str, flags: OpenFlags) -> Result<(), Error> {
        self.as_ref().open_for_read(path, flags)
    }

    fn read_range(&self, path: &str, offset: u64, max_len: usize) -> Result<Bytes, Error> {
        self.as_ref().read_range(path, offset, max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FileKind;

    /// A filesystem with only an empty root directory.
    struct EmptyFs;

    impl Filesystem for EmptyFs {
        fn resolve(&self, path: &str) -> Resolved {
            if path == "/" {
                Resolved::Root
            } else {
                Resolved::NotFound
            }
        }

        fn get_attributes(&self, path: &str) -> Result<FileAttr, Error> {
            match self.resolve(path) {
                Resolved::Root => Ok(FileAttr::directory()),
                _ => Err(Error::no_such_entry(path)),
            }
        }

        fn list_directory(&self, path: &str) -> Result<Vec<DirEntry>, Error> {
            match self.resolve(path) {
                Resolved::Root => Ok(vec![
                    DirEntry::new(".", FileKind::Directory),
                    DirEntry::new("..", FileKind::Directory),
                ]),
                _ => Err(Error::no_such_entry(path)),
            }
        }

        fn open_for_read(&self, path: &str, _flags: OpenFlags) -> Result<(), Error> {
            Err(Error::no_such_entry(path))
        }

        fn read_range(&self, path: &str, _offset: u64, _max_len: usize) -> Result<Bytes, Error> {
            Err(Error::no_such_entry(path))
        }
    }

    #[test]
    fn default_init_has_no_hints() {
        assert_eq!(EmptyFs.init(), InitOptions::default());
        assert!(!EmptyFs.init().kernel_cache);
    }

    #[test]
    fn object_safety_works() {
        let boxed: Box<dyn Filesystem> = Box::new(EmptyFs);
        assert_eq!(boxed.resolve("/"), Resolved::Root);
        assert_eq!(boxed.list_directory("/").unwrap().len(), 2);
    }

    #[test]
    fn ref_blanket_impl_works() {
        fn attrs_of(fs: impl Filesystem, path: &str) -> Result<FileAttr, Error> {
            fs.get_attributes(path)
        }

        let fs = EmptyFs;
        assert!(attrs_of(&fs, "/").unwrap().is_dir());
        assert!(attrs_of(&fs, "/x").unwrap_err().is_not_found());
    }

    #[test]
    fn arc_dyn_works() {
        let shared: Arc<dyn Filesystem> = Arc::new(EmptyFs);
        let clone = Arc::clone(&shared);
        assert!(clone.read_range("/x", 0, 1).is_err());
        assert!(shared.open_for_read("/", OpenFlags::read_only()).is_err());
    }
}
