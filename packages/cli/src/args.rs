use clap::{ArgAction, Parser, Subcommand};
use hellofs_store::{AccessMode, OpenFlags};

/// Bytes read by `cat` when no length is given.
pub const DEFAULT_READ_LEN: usize = 4096;

/// hellofs - a read-only filesystem with exactly one file
#[derive(Parser, Debug)]
#[command(name = "hellofs")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Name of the file in the root directory [default: Hello]
    #[arg(long, env = "HELLOFS_NAME")]
    pub name: Option<String>,

    /// Contents of the file [default: "Hello World!\n"]
    #[arg(long, env = "HELLOFS_CONTENTS")]
    pub contents: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the attributes of a path as JSON
    Stat { path: String },

    /// List the entries of a directory
    Ls {
        #[arg(default_value = "/")]
        path: String,
    },

    /// Check whether a path can be opened with the given mode
    Open {
        path: String,

        /// Request write-only access
        #[arg(long, conflicts_with = "read_write")]
        write: bool,

        /// Request read-write access
        #[arg(long)]
        read_write: bool,

        /// Request append mode
        #[arg(long)]
        append: bool,

        /// Request truncate-on-open
        #[arg(long)]
        truncate: bool,
    },

    /// Write a byte range of a file to stdout
    Cat {
        path: String,

        /// Byte offset to start reading at
        #[arg(long, default_value_t = 0)]
        offset: u64,

        /// Maximum number of bytes to read
        #[arg(long, default_value_t = DEFAULT_READ_LEN)]
        length: usize,
    },

    /// Print the filesystem configuration as JSON
    Info,
}

impl Command {
    /// Open flags requested by an `open` command; read-only for the rest.
    pub fn open_flags(&self) -> OpenFlags {
        match self {
            Command::Open {
                write,
                read_write,
                append,
                truncate,
                ..
            } => {
                let access = if *read_write {
                    AccessMode::ReadWrite
                } else if *write {
                    AccessMode::WriteOnly
                } else {
                    AccessMode::ReadOnly
                };
                OpenFlags {
                    access,
                    append: *append,
                    truncate: *truncate,
                }
            }
            _ => OpenFlags::read_only(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv.iter().copied()).unwrap()
    }

    #[test]
    fn overrides_parse() {
        let args = parse(&["hellofs", "--name", "data.txt", "--contents", "xy", "info"]);
        assert_eq!(args.name.as_deref(), Some("data.txt"));
        assert_eq!(args.contents.as_deref(), Some("xy"));
        assert_eq!(args.command, Command::Info);
    }

    #[test]
    fn ls_defaults_to_root() {
        let args = parse(&["hellofs", "ls"]);
        assert_eq!(
            args.command,
            Command::Ls {
                path: "/".to_string()
            }
        );
    }

    #[test]
    fn cat_defaults() {
        let args = parse(&["hellofs", "cat", "/Hello"]);
        assert_eq!(
            args.command,
            Command::Cat {
                path: "/Hello".to_string(),
                offset: 0,
                length: DEFAULT_READ_LEN,
            }
        );
    }

    #[test]
    fn verbose_counts() {
        let args = parse(&["hellofs", "-vv", "stat", "/"]);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn open_flags_from_args() {
        let args = parse(&["hellofs", "open", "/Hello", "--write", "--append"]);
        let flags = args.command.open_flags();
        assert_eq!(flags.access, AccessMode::WriteOnly);
        assert!(flags.append);
        assert!(!flags.truncate);

        let args = parse(&["hellofs", "open", "/Hello"]);
        assert!(args.command.open_flags().is_read_only());
    }

    #[test]
    fn write_conflicts_with_read_write() {
        assert!(
            Args::try_parse_from(["hellofs", "open", "/Hello", "--write", "--read-write"])
                .is_err()
        );
    }
}
