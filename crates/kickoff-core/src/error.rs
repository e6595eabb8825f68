//! Error taxonomy for the scaffold operation.
//!
//! Two tiers, with different propagation policies:
//!
//! - [`ScaffoldError`]: directory-level failures. Fatal; they abort
//!   the whole operation before any template copy is dispatched.
//! - [`CopyError`]: per-file copy failures. Never fatal; the fan-in
//!   step counts them and the scaffold still reports success.
//!
//! Both carry the offending path and the underlying [`io::ErrorKind`]
//! so the CLI can show the user exactly what failed where. There is no
//! retry anywhere; every failure is terminal for its unit.

use std::io;
use thiserror::Error;

/// Convenient result type alias.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Fatal, operation-level failures (steps 1-3 of the scaffold).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScaffoldError {
    /// The chosen parent location does not exist or is not a directory.
    /// Nothing was created.
    #[error("parent folder '{path}' is not a directory ({code:?})")]
    ParentNotDirectory { path: String, code: io::ErrorKind },

    /// The project directory could not be created (permissions,
    /// already exists, ...). The template-copy phase was never entered.
    #[error("could not create project directory '{path}' ({code:?})")]
    DirectoryCreateFailed { path: String, code: io::ErrorKind },

    /// The template directory could not be enumerated.
    #[error("could not list template directory '{path}' ({code:?})")]
    TemplateListFailed { path: String, code: io::ErrorKind },
}

impl ScaffoldError {
    /// The path the failure is about.
    pub fn path(&self) -> &str {
        match self {
            Self::ParentNotDirectory { path, .. }
            | Self::DirectoryCreateFailed { path, .. }
            | Self::TemplateListFailed { path, .. } => path,
        }
    }

    /// The underlying opaque I/O code.
    pub fn code(&self) -> io::ErrorKind {
        match self {
            Self::ParentNotDirectory { code, .. }
            | Self::DirectoryCreateFailed { code, .. }
            | Self::TemplateListFailed { code, .. } => *code,
        }
    }

    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ParentNotDirectory { path, .. } => vec![
                format!("'{path}' must exist and be a directory"),
                "Pick a different parent folder with --dir".into(),
            ],
            Self::DirectoryCreateFailed { path, code } => {
                let mut s = vec![format!("Could not create '{path}'")];
                if *code == io::ErrorKind::AlreadyExists {
                    s.push("Something with that name already exists; choose another project name".into());
                } else {
                    s.push("Check that you have write permission in the parent folder".into());
                }
                s
            }
            Self::TemplateListFailed { path, .. } => vec![
                format!("Template folder '{path}' could not be read"),
                "Run 'kickoff init' to create and seed the template folder".into(),
            ],
        }
    }
}

/// Per-file copy failures. Counted during fan-in, never re-raised.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CopyError {
    /// The destination file already exists; a copy never overwrites.
    #[error("destination file '{path}' already exists")]
    DestinationFileExists { path: String },

    /// The source file (or destination probe) could not be read.
    #[error("could not read '{path}' ({code:?})")]
    ReadFailed { path: String, code: io::ErrorKind },

    /// The destination file could not be written.
    ///
    /// A write failure after a successful read leaves no guarantee
    /// about the output file either way; callers treat the copy as
    /// failed and count it.
    #[error("could not write '{path}' ({code:?})")]
    WriteFailed { path: String, code: io::ErrorKind },
}
