//! Local filesystem adapter using std::fs.

use std::fs;
use std::io;

use kickoff_core::ports::{FileStat, Filesystem};

/// Production filesystem implementation using `std::fs`.
///
/// Paths arrive already in platform form; they are handed to the
/// standard library as-is.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn stat(&self, path: &str) -> io::Result<FileStat> {
        let metadata = fs::metadata(path)?;
        Ok(FileStat {
            is_dir: metadata.is_dir(),
            is_file: metadata.is_file(),
        })
    }

    fn make_dir(&self, path: &str, mode: u32) -> io::Result<()> {
        let mut builder = fs::DirBuilder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;
        // Non-recursive: a missing parent or an existing directory is
        // an error, exactly what the scaffolder wants.
        builder.create(path)
    }

    fn list_dir(&self, path: &str) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        // read_dir order is platform-dependent; sort for the stable
        // ordering the port promises.
        names.sort();
        Ok(names)
    }

    fn read_file(&self, path: &str) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write_file(&self, path: &str, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}
