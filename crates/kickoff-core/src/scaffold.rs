//! Scaffold service - the main orchestrator.
//!
//! One invocation walks the state machine:
//!
//! 1. validate the parent folder (must exist, must be a directory)
//! 2. create the project directory, exactly once, non-recursive
//! 3. enumerate the template directory
//! 4. fan-out: copy every template file concurrently
//! 5. fan-in: wait for every copy to settle, count failures
//! 6. probe the entry file and signal the opener if present
//!
//! Steps 1-3 abort the whole operation on failure. Step 4/5 failures
//! are counted per file and never escalate: as long as the project
//! directory was created, the scaffold reports success, carrying the
//! error count for the caller to surface (or not).

use std::io;
use std::thread;

use tracing::{debug, info, instrument, warn};

use crate::error::{CopyError, ScaffoldError, ScaffoldResult};
use crate::path::SeparatorStyle;
use crate::ports::{EntryOpener, Filesystem};

/// Conventional entry file probed after a successful scaffold.
pub const ENTRY_FILE: &str = "index.html";

/// Mode for the freshly created project directory.
const PROJECT_DIR_MODE: u32 = 0o777;

/// What a completed scaffold produced.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ScaffoldReport {
    /// Template files copied successfully.
    pub files_copied: usize,
    /// Template files whose copy failed (settled, but with an error).
    pub error_count: usize,
    /// Canonical-form path of the entry file, if one was found and the
    /// opener was signalled.
    pub entry_file: Option<String>,
}

/// Main scaffolding service.
///
/// Holds the two ports and the separator style every path is
/// normalized with before reaching the filesystem.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    opener: Box<dyn EntryOpener>,
    style: SeparatorStyle,
}

impl ScaffoldService {
    /// Create a service using the platform-native separator style.
    pub fn new(filesystem: Box<dyn Filesystem>, opener: Box<dyn EntryOpener>) -> Self {
        Self::with_style(filesystem, opener, SeparatorStyle::native())
    }

    /// Create a service with an explicit separator style.
    ///
    /// Tests pair this with `MemoryFilesystem` to get deterministic
    /// behavior on every platform.
    pub fn with_style(
        filesystem: Box<dyn Filesystem>,
        opener: Box<dyn EntryOpener>,
        style: SeparatorStyle,
    ) -> Self {
        Self {
            filesystem,
            opener,
            style,
        }
    }

    /// Scaffold a new project.
    ///
    /// `parent_folder` and `template_dir` are canonical-form directory
    /// paths; `project_name` is a bare name with no separators. Runs
    /// to completion once invoked; there is no cancellation.
    #[instrument(skip_all, fields(parent = %parent_folder, project = %project_name))]
    pub fn create_project(
        &self,
        parent_folder: &str,
        project_name: &str,
        template_dir: &str,
    ) -> ScaffoldResult<ScaffoldReport> {
        let parent = self.style.to_platform(parent_folder);
        self.validate_parent(&parent)?;

        let destination = format!("{}{}", self.style.ensure_trailing(&parent), project_name);
        self.create_project_dir(&destination)?;

        let (files_copied, error_count) = self.copy_template_files(template_dir, &destination)?;
        let entry_file = self.probe_entry_file(&destination);

        info!(files_copied, error_count, "scaffold completed");
        Ok(ScaffoldReport {
            files_copied,
            error_count,
            entry_file,
        })
    }

    // ── State machine steps ───────────────────────────────────────────────

    /// Step 1: the parent must exist and be a directory. Nothing is
    /// created when this fails.
    fn validate_parent(&self, parent: &str) -> ScaffoldResult<()> {
        match self.filesystem.stat(parent) {
            Ok(stat) if stat.is_dir => Ok(()),
            Ok(_) => Err(ScaffoldError::ParentNotDirectory {
                path: parent.to_owned(),
                code: io::ErrorKind::NotADirectory,
            }),
            Err(e) => Err(ScaffoldError::ParentNotDirectory {
                path: parent.to_owned(),
                code: e.kind(),
            }),
        }
    }

    /// Step 2: single, non-recursive directory creation. "Already
    /// exists" is a failure; a scaffold never merges into prior
    /// contents.
    fn create_project_dir(&self, destination: &str) -> ScaffoldResult<()> {
        self.filesystem
            .make_dir(destination, PROJECT_DIR_MODE)
            .map_err(|e| ScaffoldError::DirectoryCreateFailed {
                path: destination.to_owned(),
                code: e.kind(),
            })?;
        debug!(path = %destination, "project directory created");
        Ok(())
    }

    /// Steps 3-5: enumerate, fan-out, fan-in.
    ///
    /// Every entry gets its own scoped thread; joining the scope is
    /// the fan-in barrier, so no dispatched copy can be dropped or
    /// leaked. Copies are independent: one failure blocks nothing.
    /// Returns `(files_copied, error_count)`.
    fn copy_template_files(
        &self,
        template_dir: &str,
        destination: &str,
    ) -> ScaffoldResult<(usize, usize)> {
        let template_dir = self.style.to_platform(template_dir);
        let entries = self.filesystem.list_dir(&template_dir).map_err(|e| {
            ScaffoldError::TemplateListFailed {
                path: template_dir.clone(),
                code: e.kind(),
            }
        })?;
        debug!(count = entries.len(), "template entries enumerated");

        let templates_root = self.style.ensure_trailing(&template_dir);
        let results: Vec<(&str, Result<(), CopyError>)> = thread::scope(|scope| {
            let handles: Vec<_> = entries
                .iter()
                .map(|name| {
                    let source = format!("{templates_root}{name}");
                    (name, scope.spawn(move || self.copy_file(destination, &source)))
                })
                .collect();

            let dest_root = self.style.ensure_trailing(destination);
            handles
                .into_iter()
                .map(|(name, handle)| {
                    // A panicking copy thread still settles as a failure,
                    // reported against the destination path like any
                    // other failed write.
                    let result = handle.join().unwrap_or_else(|_| {
                        Err(CopyError::WriteFailed {
                            path: format!("{dest_root}{name}"),
                            code: io::ErrorKind::Other,
                        })
                    });
                    (name.as_str(), result)
                })
                .collect()
        });

        let mut error_count = 0;
        for (name, result) in &results {
            if let Err(err) = result {
                warn!(template = %name, error = %err, "template copy failed");
                error_count += 1;
            }
        }
        Ok((results.len() - error_count, error_count))
    }

    /// Copy one template file into the destination directory.
    ///
    /// Stat-first: an existing destination file fails the copy before
    /// anything is read, so a copy never overwrites. The read and the
    /// write are both whole-file single passes; a write failure after
    /// a successful read makes no promise about what (if anything) is
    /// left at the output path.
    fn copy_file(&self, destination: &str, source: &str) -> Result<(), CopyError> {
        let out_path = format!(
            "{}{}",
            self.style.ensure_trailing(destination),
            self.style.base_name(source)
        );

        match self.filesystem.stat(&out_path) {
            Ok(_) => {
                return Err(CopyError::DestinationFileExists { path: out_path });
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                // The existence probe itself failed with something other
                // than "not found"; treat it like a failed read of the
                // destination.
                return Err(CopyError::ReadFailed {
                    path: out_path,
                    code: e.kind(),
                });
            }
        }

        let contents = self
            .filesystem
            .read_file(source)
            .map_err(|e| CopyError::ReadFailed {
                path: source.to_owned(),
                code: e.kind(),
            })?;

        self.filesystem
            .write_file(&out_path, &contents)
            .map_err(|e| CopyError::WriteFailed {
                path: out_path.clone(),
                code: e.kind(),
            })
    }

    /// Step 6: probe for the entry file and signal the opener when it
    /// is a regular file. Absence is not an error; the signal fires at
    /// most once per scaffold.
    fn probe_entry_file(&self, destination: &str) -> Option<String> {
        let entry = format!("{}{ENTRY_FILE}", self.style.ensure_trailing(destination));
        match self.filesystem.stat(&entry) {
            Ok(stat) if stat.is_file => {
                let canonical = self.style.to_canonical(&entry);
                debug!(path = %canonical, "entry file found, signalling opener");
                self.opener.open(&canonical);
                Some(canonical)
            }
            _ => None,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{FileStat, MockEntryOpener, MockFilesystem};
    use mockall::predicate::eq;

    const DIR: FileStat = FileStat {
        is_dir: true,
        is_file: false,
    };
    const FILE: FileStat = FileStat {
        is_dir: false,
        is_file: true,
    };

    fn not_found() -> io::Error {
        io::Error::from(io::ErrorKind::NotFound)
    }

    fn service(fs: MockFilesystem, opener: MockEntryOpener) -> ScaffoldService {
        ScaffoldService::with_style(Box::new(fs), Box::new(opener), SeparatorStyle::Slash)
    }

    #[test]
    fn missing_parent_fails_before_creating_anything() {
        let mut fs = MockFilesystem::new();
        fs.expect_stat()
            .with(eq("/nonexistent/xyz"))
            .return_once(|_| Err(not_found()));
        // No make_dir / list_dir expectations: any call would panic.
        let svc = service(fs, MockEntryOpener::new());

        let err = svc
            .create_project("/nonexistent/xyz", "proj", "/templates")
            .unwrap_err();
        assert_eq!(
            err,
            ScaffoldError::ParentNotDirectory {
                path: "/nonexistent/xyz".into(),
                code: io::ErrorKind::NotFound,
            }
        );
    }

    #[test]
    fn parent_that_is_a_file_fails() {
        let mut fs = MockFilesystem::new();
        fs.expect_stat()
            .with(eq("/home/me/notes.txt"))
            .return_once(|_| Ok(FILE));
        let svc = service(fs, MockEntryOpener::new());

        let err = svc
            .create_project("/home/me/notes.txt", "proj", "/templates")
            .unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::ParentNotDirectory { code, .. }
                if code == io::ErrorKind::NotADirectory
        ));
    }

    #[test]
    fn existing_destination_aborts_before_template_listing() {
        let mut fs = MockFilesystem::new();
        fs.expect_stat().with(eq("/parent")).return_once(|_| Ok(DIR));
        fs.expect_make_dir()
            .with(eq("/parent/proj"), eq(PROJECT_DIR_MODE))
            .return_once(|_, _| Err(io::Error::from(io::ErrorKind::AlreadyExists)));
        let svc = service(fs, MockEntryOpener::new());

        let err = svc.create_project("/parent", "proj", "/templates").unwrap_err();
        assert_eq!(
            err,
            ScaffoldError::DirectoryCreateFailed {
                path: "/parent/proj".into(),
                code: io::ErrorKind::AlreadyExists,
            }
        );
    }

    #[test]
    fn unlistable_template_dir_is_fatal() {
        let mut fs = MockFilesystem::new();
        fs.expect_stat().with(eq("/parent")).return_once(|_| Ok(DIR));
        fs.expect_make_dir().return_once(|_, _| Ok(()));
        fs.expect_list_dir()
            .with(eq("/templates"))
            .return_once(|_| Err(io::Error::from(io::ErrorKind::PermissionDenied)));
        let svc = service(fs, MockEntryOpener::new());

        let err = svc.create_project("/parent", "proj", "/templates").unwrap_err();
        assert!(matches!(err, ScaffoldError::TemplateListFailed { .. }));
    }

    #[test]
    fn empty_template_dir_succeeds_with_zero_copies() {
        let mut fs = MockFilesystem::new();
        fs.expect_stat().with(eq("/parent")).return_once(|_| Ok(DIR));
        fs.expect_make_dir().return_once(|_, _| Ok(()));
        fs.expect_list_dir().return_once(|_| Ok(vec![]));
        // Entry probe finds nothing.
        fs.expect_stat()
            .with(eq("/parent/proj/index.html"))
            .return_once(|_| Err(not_found()));
        let mut opener = MockEntryOpener::new();
        opener.expect_open().never();
        let svc = service(fs, opener);

        let report = svc.create_project("/parent", "proj", "/templates").unwrap();
        assert_eq!(report.files_copied, 0);
        assert_eq!(report.error_count, 0);
        assert_eq!(report.entry_file, None);
    }

    #[test]
    fn copies_template_and_opens_entry_file() {
        let mut fs = MockFilesystem::new();
        fs.expect_stat().with(eq("/parent")).return_once(|_| Ok(DIR));
        fs.expect_make_dir()
            .with(eq("/parent/proj"), eq(PROJECT_DIR_MODE))
            .return_once(|_, _| Ok(()));
        fs.expect_list_dir()
            .with(eq("/templates"))
            .return_once(|_| Ok(vec!["index.html".into()]));
        // Destination probe: not there yet.
        fs.expect_stat()
            .with(eq("/parent/proj/index.html"))
            .times(1)
            .returning(|_| Err(not_found()));
        fs.expect_read_file()
            .with(eq("/templates/index.html"))
            .return_once(|_| Ok("<html></html>".to_string()));
        fs.expect_write_file()
            .with(eq("/parent/proj/index.html"), eq("<html></html>"))
            .return_once(|_, _| Ok(()));
        // Entry probe after the copy: now a regular file.
        fs.expect_stat()
            .with(eq("/parent/proj/index.html"))
            .times(1)
            .returning(|_| Ok(FILE));

        let mut opener = MockEntryOpener::new();
        opener
            .expect_open()
            .with(eq("/parent/proj/index.html"))
            .times(1)
            .return_const(());

        let svc = service(fs, opener);
        let report = svc.create_project("/parent", "proj", "/templates").unwrap();
        assert_eq!(report.files_copied, 1);
        assert_eq!(report.error_count, 0);
        assert_eq!(report.entry_file.as_deref(), Some("/parent/proj/index.html"));
    }

    #[test]
    fn existing_destination_file_is_counted_not_overwritten() {
        let mut fs = MockFilesystem::new();
        fs.expect_stat().with(eq("/parent")).return_once(|_| Ok(DIR));
        fs.expect_make_dir().return_once(|_, _| Ok(()));
        fs.expect_list_dir().return_once(|_| Ok(vec!["a.txt".into()]));
        // The destination probe reports an existing file; read/write
        // must never happen for this entry.
        fs.expect_stat()
            .with(eq("/parent/proj/a.txt"))
            .return_once(|_| Ok(FILE));
        fs.expect_read_file().never();
        fs.expect_write_file().never();
        fs.expect_stat()
            .with(eq("/parent/proj/index.html"))
            .return_once(|_| Err(not_found()));
        let mut opener = MockEntryOpener::new();
        opener.expect_open().never();

        let svc = service(fs, opener);
        let report = svc.create_project("/parent", "proj", "/templates").unwrap();
        assert_eq!(report.files_copied, 0);
        assert_eq!(report.error_count, 1);
    }

    // Filesystem whose reads panic, to exercise the join fallback for
    // a copy thread that dies instead of returning.
    struct PanicOnReadFs;

    impl crate::ports::Filesystem for PanicOnReadFs {
        fn stat(&self, path: &str) -> io::Result<FileStat> {
            match path {
                "/parent" => Ok(DIR),
                _ => Err(not_found()),
            }
        }
        fn make_dir(&self, _path: &str, _mode: u32) -> io::Result<()> {
            Ok(())
        }
        fn list_dir(&self, _path: &str) -> io::Result<Vec<String>> {
            Ok(vec!["a.txt".into()])
        }
        fn read_file(&self, _path: &str) -> io::Result<String> {
            panic!("simulated adapter crash")
        }
        fn write_file(&self, _path: &str, _contents: &str) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn panicking_copy_thread_settles_as_counted_failure() {
        let mut opener = MockEntryOpener::new();
        opener.expect_open().never();
        let svc = ScaffoldService::with_style(
            Box::new(PanicOnReadFs),
            Box::new(opener),
            SeparatorStyle::Slash,
        );

        let report = svc.create_project("/parent", "proj", "/templates").unwrap();
        assert_eq!(report.files_copied, 0);
        assert_eq!(report.error_count, 1);
        assert_eq!(report.entry_file, None);
    }

    #[test]
    fn backslash_style_round_trips_through_opener() {
        // Windows-shaped flow on any host: platform form reaches the
        // filesystem, canonical form reaches the opener.
        let mut fs = MockFilesystem::new();
        fs.expect_stat()
            .with(eq("C:\\Users\\me"))
            .return_once(|_| Ok(DIR));
        fs.expect_make_dir()
            .with(eq("C:\\Users\\me\\proj"), eq(PROJECT_DIR_MODE))
            .return_once(|_, _| Ok(()));
        fs.expect_list_dir()
            .with(eq("C:\\templates"))
            .return_once(|_| Ok(vec![]));
        fs.expect_stat()
            .with(eq("C:\\Users\\me\\proj\\index.html"))
            .return_once(|_| Ok(FILE));
        let mut opener = MockEntryOpener::new();
        opener
            .expect_open()
            .with(eq("C:/Users/me/proj/index.html"))
            .times(1)
            .return_const(());

        let svc = ScaffoldService::with_style(
            Box::new(fs),
            Box::new(opener),
            SeparatorStyle::Backslash,
        );
        let report = svc
            .create_project("C:/Users/me", "proj", "C:/templates")
            .unwrap();
        assert_eq!(
            report.entry_file.as_deref(),
            Some("C:/Users/me/proj/index.html")
        );
    }
}
