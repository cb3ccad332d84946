//! Path classification against the single configured file.

/// The path of the root directory.
pub const ROOT_PATH: &str = "/";

/// What a path names in this filesystem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resolved {
    /// The root directory, `/`.
    Root,
    /// The configured file, `/<file_name>`.
    File,
    /// Anything else.
    NotFound,
}

impl Resolved {
    /// Whether the path names something that exists.
    pub fn exists(self) -> bool {
        !matches!(self, Resolved::NotFound)
    }
}

/// Classify `path` given the configured `file_name`.
///
/// Comparison is exact: no normalization, no trailing-slash tolerance and no
/// case folding. Since the filesystem has no subdirectories, any path with
/// more than one segment can only be `NotFound`.
///
/// # Examples
///
/// ```rust
/// use hellofs_store::{classify, Resolved};
///
/// assert_eq!(classify("/", "Hello"), Resolved::Root);
/// assert_eq!(classify("/Hello", "Hello"), Resolved::File);
/// assert_eq!(classify("/Hello/", "Hello"), Resolved::NotFound);
/// assert_eq!(classify("/hello", "Hello"), Resolved::NotFound);
/// ```
pub fn classify(path: &str, file_name: &str) -> Resolved {
    if path == ROOT_PATH {
        return Resolved::Root;
    }

    match path.strip_prefix('/') {
        Some(leaf) if leaf == file_name => Resolved::File,
        _ => Resolved::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root() {
        assert_eq!(classify("/", "Hello"), Resolved::Root);
    }

    #[test]
    fn file() {
        assert_eq!(classify("/Hello", "Hello"), Resolved::File);
        assert_eq!(classify("/data.txt", "data.txt"), Resolved::File);
    }

    #[test]
    fn no_normalization() {
        assert_eq!(classify("//", "Hello"), Resolved::NotFound);
        assert_eq!(classify("", "Hello"), Resolved::NotFound);
        assert_eq!(classify("Hello", "Hello"), Resolved::NotFound);
        assert_eq!(classify("//Hello", "Hello"), Resolved::NotFound);
        assert_eq!(classify("/Hello/", "Hello"), Resolved::NotFound);
        assert_eq!(classify("/./Hello", "Hello"), Resolved::NotFound);
        assert_eq!(classify("/HELLO", "Hello"), Resolved::NotFound);
    }

    #[test]
    fn nested_paths_not_found() {
        assert_eq!(classify("/Hello/world", "Hello"), Resolved::NotFound);
        assert_eq!(classify("/dir/Hello", "Hello"), Resolved::NotFound);
    }

    #[test]
    fn dot_entries_are_not_paths() {
        assert_eq!(classify("/.", "Hello"), Resolved::NotFound);
        assert_eq!(classify("/..", "Hello"), Resolved::NotFound);
    }

    #[test]
    fn exists() {
        assert!(Resolved::Root.exists());
        assert!(Resolved::File.exists());
        assert!(!Resolved::NotFound.exists());
    }
}
