//! Ports (traits) for external dependencies.
//!
//! The scaffolder talks to the outside world only through these
//! traits. Adapters in `kickoff-adapters` implement them:
//!
//! - [`Filesystem`]: `LocalFilesystem` (production), `MemoryFilesystem`
//!   (testing).
//! - [`EntryOpener`]: `CommandOpener` (production), `NullOpener`,
//!   `RecordingOpener` (testing).
//!
//! Filesystem methods return `io::Result`; error codes are opaque to
//! the core, which only ever distinguishes [`std::io::ErrorKind::NotFound`]
//! from any other kind. Paths are strings in platform form (see
//! [`crate::path::SeparatorStyle`]).

use std::io;

/// What a `stat` call learned about a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub is_dir: bool,
    pub is_file: bool,
}

/// Port for filesystem operations.
///
/// Every method is a potential suspension point in the scaffold flow;
/// implementations may block internally but must be callable from
/// multiple threads (the fan-out copy step runs on scoped threads).
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Inspect a path. `ErrorKind::NotFound` when nothing is there.
    fn stat(&self, path: &str) -> io::Result<FileStat>;

    /// Create a single directory (non-recursive) with the given unix
    /// mode. Fails if the directory already exists.
    fn make_dir(&self, path: &str, mode: u32) -> io::Result<()>;

    /// List the entry names (not full paths) inside a directory, in a
    /// stable order.
    fn list_dir(&self, path: &str) -> io::Result<Vec<String>>;

    /// Read an entire file as UTF-8 text.
    fn read_file(&self, path: &str) -> io::Result<String>;

    /// Write an entire file from UTF-8 text, creating it.
    fn write_file(&self, path: &str, contents: &str) -> io::Result<()>;
}

/// Port for the host's "open this file in the editor" integration.
///
/// Fire-and-forget: the scaffolder never consumes a return value and
/// never fails because of the opener.
#[cfg_attr(test, mockall::automock)]
pub trait EntryOpener: Send + Sync {
    /// Request that the host open `path` (canonical form).
    fn open(&self, path: &str);
}
