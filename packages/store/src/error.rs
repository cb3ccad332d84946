//! Error taxonomy for filesystem operations.
//!
//! Both kinds are ordinary outcomes returned to the transport. Neither leaves
//! the store in a different state.

use crate::flags::OpenFlags;

/// POSIX "No such file or directory".
pub const ENOENT: i32 = 2;

/// POSIX "Permission denied".
pub const EACCES: i32 = 13;

/// A failed filesystem operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The path is neither the root nor the configured file, or it names
    /// the wrong kind of object for the operation.
    #[error("no such file or directory: {path}")]
    NoSuchEntry { path: String },

    /// An open asked for anything other than plain read-only access.
    #[error("permission denied: {path} ({flags})")]
    AccessDenied { path: String, flags: OpenFlags },
}

impl Error {
    pub fn no_such_entry(path: impl Into<String>) -> Self {
        Error::NoSuchEntry { path: path.into() }
    }

    pub fn access_denied(path: impl Into<String>, flags: OpenFlags) -> Self {
        Error::AccessDenied {
            path: path.into(),
            flags,
        }
    }

    /// The positive POSIX error number a transport should report.
    pub fn errno(&self) -> i32 {
        match self {
            Error::NoSuchEntry { .. } => ENOENT,
            Error::AccessDenied { .. } => EACCES,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NoSuchEntry { .. })
    }

    pub fn is_access_denied(&self) -> bool {
        matches!(self, Error::AccessDenied { .. })
    }

    /// The path the failed request named.
    pub fn path(&self) -> &str {
        match self {
            Error::NoSuchEntry { path } | Error::AccessDenied { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::AccessMode;

    #[test]
    fn no_such_entry_display() {
        let e = Error::no_such_entry("/missing");
        assert_eq!(e.to_string(), "no such file or directory: /missing");
        assert_eq!(e.errno(), ENOENT);
        assert!(e.is_not_found());
        assert!(!e.is_access_denied());
        assert_eq!(e.path(), "/missing");
    }

    #[test]
    fn access_denied_display() {
        let e = Error::access_denied("/Hello", OpenFlags::new(AccessMode::WriteOnly));
        let display = e.to_string();
        assert!(display.contains("permission denied"));
        assert!(display.contains("/Hello"));
        assert!(display.contains("write-only"));
        assert_eq!(e.errno(), EACCES);
        assert!(e.is_access_denied());
        assert_eq!(e.path(), "/Hello");
    }

    #[test]
    fn errno_values_are_distinct() {
        assert_ne!(ENOENT, EACCES);
    }
}
