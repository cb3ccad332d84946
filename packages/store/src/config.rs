//! Startup configuration: the name and bytes of the single file.

use bytes::Bytes;

/// File name used when no override is supplied.
pub const DEFAULT_FILE_NAME: &str = "Hello";

/// File contents used when no override is supplied.
pub const DEFAULT_CONTENTS: &str = "Hello World!\n";

/// Errors raised while validating a [`Config`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The file name was the empty string.
    #[error("file name must not be empty")]
    EmptyName,

    /// The file name contains a byte that cannot appear in a path component.
    #[error("invalid file name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// The file name would shadow one of the directory's own entries.
    #[error("file name '{name}' is reserved")]
    ReservedName { name: String },
}

/// The immutable (name, content) pair served by the filesystem.
///
/// Built once at startup and handed to
/// [`VirtualFileStore::new`](crate::VirtualFileStore::new), which owns it for
/// the life of the process. There is no way to change either field after
/// construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    file_name: String,
    contents: Bytes,
}

impl Config {
    /// Build a configuration, validating the file name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hellofs_store::Config;
    ///
    /// let config = Config::new("data.txt", "xy").unwrap();
    /// assert_eq!(config.file_path(), "/data.txt");
    ///
    /// assert!(Config::new("a/b", "").is_err());
    /// ```
    pub fn new(
        file_name: impl Into<String>,
        contents: impl Into<Bytes>,
    ) -> Result<Self, ConfigError> {
        let file_name = file_name.into();
        Self::validate_name(&file_name)?;
        Ok(Config {
            file_name,
            contents: contents.into(),
        })
    }

    /// Replace the file name, keeping the contents.
    pub fn with_file_name(self, file_name: impl Into<String>) -> Result<Self, ConfigError> {
        Config::new(file_name, self.contents)
    }

    /// Replace the contents, keeping the file name.
    #[must_use]
    pub fn with_contents(self, contents: impl Into<Bytes>) -> Self {
        Config {
            file_name: self.file_name,
            contents: contents.into(),
        }
    }

    fn validate_name(name: &str) -> Result<(), ConfigError> {
        if name.is_empty() {
            return Err(ConfigError::EmptyName);
        }

        if name == "." || name == ".." {
            return Err(ConfigError::ReservedName {
                name: name.to_string(),
            });
        }

        if name.contains('/') {
            return Err(ConfigError::InvalidName {
                name: name.to_string(),
                reason: "must not contain '/'".to_string(),
            });
        }

        if name.contains('\0') {
            return Err(ConfigError::InvalidName {
                name: name.escape_default().to_string(),
                reason: "must not contain a NUL byte".to_string(),
            });
        }

        Ok(())
    }

    /// The file's leaf name, without the leading slash.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The file's bytes.
    pub fn contents(&self) -> &Bytes {
        &self.contents
    }

    /// The absolute path of the file, `"/" + file_name`.
    pub fn file_path(&self) -> String {
        format!("/{}", self.file_name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            file_name: DEFAULT_FILE_NAME.to_string(),
            contents: Bytes::from_static(DEFAULT_CONTENTS.as_bytes()),
        }
    }
}
