//! Metadata and directory entry types.

use serde::Serialize;

const S_IFDIR: u32 = 0o040000;
const S_IFREG: u32 = 0o100000;

/// Kind of filesystem object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Directory,
    RegularFile,
}

/// Attributes reported for the root directory or the file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FileAttr {
    pub kind: FileKind,
    /// Permission bits, e.g. `0o755`.
    pub perm: u16,
    /// Hard link count.
    pub nlink: u32,
    /// Size in bytes.
    pub size: u64,
}

impl FileAttr {
    /// Root directory attributes: rwx for the owner, rx for everyone else.
    pub fn directory() -> Self {
        FileAttr {
            kind: FileKind::Directory,
            perm: 0o755,
            nlink: 2,
            size: 0,
        }
    }

    /// Read-only regular file attributes.
    pub fn regular_file(size: u64) -> Self {
        FileAttr {
            kind: FileKind::RegularFile,
            perm: 0o444,
            nlink: 1,
            size,
        }
    }

    /// The `st_mode` value: file type bits or'd with the permission bits.
    pub fn mode(&self) -> u32 {
        let type_bits = match self.kind {
            FileKind::Directory => S_IFDIR,
            FileKind::RegularFile => S_IFREG,
        };
        type_bits | u32::from(self.perm)
    }

    pub fn is_dir(&self) -> bool {
        self.kind == FileKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == FileKind::RegularFile
    }
}

/// One entry of a directory listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DirEntry {
    pub name: String,
    pub kind: FileKind,
}

impl DirEntry {
    pub fn new(name: impl Into<String>, kind: FileKind) -> Self {
        DirEntry {
            name: name.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_attr() {
        let attr = FileAttr::directory();
        assert!(attr.is_dir());
        assert!(!attr.is_file());
        assert_eq!(attr.nlink, 2);
        assert_eq!(attr.size, 0);
        assert_eq!(attr.mode(), 0o040755);
    }

    #[test]
    fn regular_file_attr() {
        let attr = FileAttr::regular_file(13);
        assert!(attr.is_file());
        assert_eq!(attr.perm, 0o444);
        assert_eq!(attr.nlink, 1);
        assert_eq!(attr.size, 13);
        assert_eq!(attr.mode(), 0o100444);
    }

    #[test]
    fn attr_serializes() {
        let json = serde_json::to_value(FileAttr::regular_file(2)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "regular_file",
                "perm": 0o444,
                "nlink": 1,
                "size": 2
            })
        );
    }

    #[test]
    fn dir_entry_serializes() {
        let json = serde_json::to_value(DirEntry::new("..", FileKind::Directory)).unwrap();
        assert_eq!(json["name"], "..");
        assert_eq!(json["kind"], "directory");
    }
}
