//! Open flags as requested by the caller.

use std::fmt;

const O_ACCMODE: i32 = 0o3;
const O_WRONLY: i32 = 0o1;
const O_RDWR: i32 = 0o2;
const O_TRUNC: i32 = 0o1000;
const O_APPEND: i32 = 0o2000;

/// The access mode portion of an open request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessMode {
    ReadOnly,
    WriteOnly,
    ReadWrite,
}

/// Everything about an open request that decides whether it is allowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OpenFlags {
    pub access: AccessMode,
    pub append: bool,
    pub truncate: bool,
}

impl OpenFlags {
    pub fn new(access: AccessMode) -> Self {
        OpenFlags {
            access,
            append: false,
            truncate: false,
        }
    }

    /// Plain read-only open.
    pub fn read_only() -> Self {
        OpenFlags::new(AccessMode::ReadOnly)
    }

    #[must_use]
    pub fn with_append(mut self) -> Self {
        self.append = true;
        self
    }

    #[must_use]
    pub fn with_truncate(mut self) -> Self {
        self.truncate = true;
        self
    }

    /// Decode the flags word passed to `open(2)`.
    ///
    /// Bits other than the access mode, `O_APPEND` and `O_TRUNC` are ignored.
    /// An access mode of 3 is not valid POSIX; it is treated as read-write so
    /// that it is denied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hellofs_store::{AccessMode, OpenFlags};
    ///
    /// assert!(OpenFlags::from_raw(0).is_read_only());
    /// assert_eq!(OpenFlags::from_raw(0o2).access, AccessMode::ReadWrite);
    /// assert!(OpenFlags::from_raw(0o2001).append);
    /// ```
    pub fn from_raw(flags: i32) -> Self {
        let access = match flags & O_ACCMODE {
            0 => AccessMode::ReadOnly,
            O_WRONLY => AccessMode::WriteOnly,
            _ => AccessMode::ReadWrite,
        };
        OpenFlags {
            access,
            append: flags & O_APPEND != 0,
            truncate: flags & O_TRUNC != 0,
        }
    }

    /// Re-encode as an `open(2)` flags word.
    pub fn to_raw(self) -> i32 {
        let mut flags = match self.access {
            AccessMode::ReadOnly => 0,
            AccessMode::WriteOnly => O_WRONLY,
            AccessMode::ReadWrite => O_RDWR,
        };
        if self.append {
            flags |= O_APPEND;
        }
        if self.truncate {
            flags |= O_TRUNC;
        }
        flags
    }

    /// True only for a read-only open that neither appends nor truncates.
    pub fn is_read_only(&self) -> bool {
        self.access == AccessMode::ReadOnly && !self.append && !self.truncate
    }
}

impl Default for OpenFlags {
    fn default() -> Self {
        OpenFlags::read_only()
    }
}

impl fmt::Display for OpenFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let access = match self.access {
            AccessMode::ReadOnly => "read-only",
            AccessMode::WriteOnly => "write-only",
            AccessMode::ReadWrite => "read-write",
        };
        write!(f, "{}", access)?;
        if self.append {
            write!(f, "+append")?;
        }
        if self.truncate {
            write!(f, "+truncate")?;
        }
        Ok(())
    }
}
