//! In-memory filesystem adapter for testing.
//!
//! Slash-separated paths only; pair it with
//! `SeparatorStyle::Slash` so tests behave identically on every
//! platform. Supports write-failure injection so a single template
//! copy can be forced to fail.

use std::{
    collections::{HashMap, HashSet},
    io,
    sync::{Arc, RwLock},
};

use kickoff_core::ports::{FileStat, Filesystem};

/// In-memory filesystem for testing.
///
/// Cloning shares the underlying storage, so a test can keep a handle
/// for inspection while the service owns a boxed clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    files: HashMap<String, String>,
    directories: HashSet<String>,
    // File names (or full paths) whose writes fail with PermissionDenied.
    write_failures: HashSet<String>,
}

/// Strip a trailing slash so `/a/b/` and `/a/b` address the same entry.
fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

fn parent_of(key: &str) -> &str {
    match key.rfind('/') {
        Some(0) => "/",
        Some(idx) => &key[..idx],
        None => "",
    }
}

fn base_of(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

fn poisoned() -> io::Error {
    io::Error::other("memory filesystem lock poisoned")
}

impl MemoryFilesystem {
    /// Create a new memory filesystem containing only the root.
    pub fn new() -> Self {
        let fs = Self::default();
        fs.inner
            .write()
            .expect("fresh lock")
            .directories
            .insert("/".to_string());
        fs
    }

    // ── Test setup helpers ────────────────────────────────────────────────

    /// Create a directory and all its ancestors.
    pub fn add_dir(&self, path: &str) {
        let mut inner = self.inner.write().expect("lock");
        let key = normalize(path);
        let mut current = String::new();
        for component in key.split('/').filter(|c| !c.is_empty()) {
            current.push('/');
            current.push_str(component);
            inner.directories.insert(current.clone());
        }
    }

    /// Create a file (and its ancestor directories).
    pub fn add_file(&self, path: &str, contents: &str) {
        let key = normalize(path).to_string();
        self.add_dir(parent_of(&key));
        self.inner
            .write()
            .expect("lock")
            .files
            .insert(key, contents.to_string());
    }

    /// Force every write to a file with this name (or exact path) to
    /// fail with `PermissionDenied`.
    pub fn fail_writes_to(&self, name: &str) {
        self.inner
            .write()
            .expect("lock")
            .write_failures
            .insert(name.to_string());
    }

    // ── Inspection helpers ────────────────────────────────────────────────

    /// Read a file's content, if present.
    pub fn read(&self, path: &str) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(normalize(path)).cloned()
    }

    /// Whether anything (file or directory) exists at this path.
    pub fn exists(&self, path: &str) -> bool {
        let inner = self.inner.read().expect("lock");
        let key = normalize(path);
        inner.files.contains_key(key) || inner.directories.contains(key)
    }

    /// Names of the files directly inside a directory, sorted.
    pub fn file_names_in(&self, dir: &str) -> Vec<String> {
        let inner = self.inner.read().expect("lock");
        let key = normalize(dir).to_string();
        let mut names: Vec<String> = inner
            .files
            .keys()
            .filter(|f| parent_of(f) == key)
            .map(|f| base_of(f).to_string())
            .collect();
        names.sort();
        names
    }
}

impl Filesystem for MemoryFilesystem {
    fn stat(&self, path: &str) -> io::Result<FileStat> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        let key = normalize(path);
        if inner.files.contains_key(key) {
            Ok(FileStat {
                is_dir: false,
                is_file: true,
            })
        } else if inner.directories.contains(key) {
            Ok(FileStat {
                is_dir: true,
                is_file: false,
            })
        } else {
            Err(io::Error::from(io::ErrorKind::NotFound))
        }
    }

    fn make_dir(&self, path: &str, _mode: u32) -> io::Result<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        let key = normalize(path).to_string();
        if inner.directories.contains(&key) || inner.files.contains_key(&key) {
            return Err(io::Error::from(io::ErrorKind::AlreadyExists));
        }
        if !inner.directories.contains(parent_of(&key)) {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }
        inner.directories.insert(key);
        Ok(())
    }

    fn list_dir(&self, path: &str) -> io::Result<Vec<String>> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        let key = normalize(path).to_string();
        if !inner.directories.contains(&key) {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }
        let mut names: Vec<String> = inner
            .files
            .keys()
            .chain(inner.directories.iter())
            .filter(|p| *p != &key && parent_of(p) == key)
            .map(|p| base_of(p).to_string())
            .collect();
        names.sort();
        Ok(names)
    }

    fn read_file(&self, path: &str) -> io::Result<String> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        let key = normalize(path);
        if inner.directories.contains(key) {
            return Err(io::Error::from(io::ErrorKind::IsADirectory));
        }
        inner
            .files
            .get(key)
            .cloned()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn write_file(&self, path: &str, contents: &str) -> io::Result<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        let key = normalize(path).to_string();
        if inner.write_failures.contains(&key) || inner.write_failures.contains(base_of(&key)) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        if !inner.directories.contains(parent_of(&key)) {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }
        inner.files.insert(key, contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_exists_from_the_start() {
        let fs = MemoryFilesystem::new();
        assert!(fs.stat("/").unwrap().is_dir);
    }

    #[test]
    fn make_dir_requires_parent() {
        let fs = MemoryFilesystem::new();
        let err = fs.make_dir("/a/b", 0o777).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);

        fs.make_dir("/a", 0o777).unwrap();
        fs.make_dir("/a/b", 0o777).unwrap();
        assert!(fs.stat("/a/b").unwrap().is_dir);
    }

    #[test]
    fn make_dir_rejects_existing() {
        let fs = MemoryFilesystem::new();
        fs.make_dir("/a", 0o777).unwrap();
        let err = fs.make_dir("/a", 0o777).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn trailing_slash_addresses_same_entry() {
        let fs = MemoryFilesystem::new();
        fs.add_dir("/templates");
        assert!(fs.stat("/templates/").unwrap().is_dir);
        assert!(fs.list_dir("/templates/").unwrap().is_empty());
    }

    #[test]
    fn list_dir_is_sorted_and_direct_children_only() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/t/b.txt", "b");
        fs.add_file("/t/a.txt", "a");
        fs.add_file("/t/sub/deep.txt", "deep");
        assert_eq!(
            fs.list_dir("/t").unwrap(),
            vec!["a.txt".to_string(), "b.txt".to_string(), "sub".to_string()]
        );
    }

    #[test]
    fn write_failure_injection_by_name() {
        let fs = MemoryFilesystem::new();
        fs.add_dir("/out");
        fs.fail_writes_to("bad.txt");
        let err = fs.write_file("/out/bad.txt", "x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        fs.write_file("/out/good.txt", "x").unwrap();
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let fs = MemoryFilesystem::new();
        let err = fs.read_file("/nope").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn clones_share_storage() {
        let fs = MemoryFilesystem::new();
        let handle = fs.clone();
        fs.add_file("/shared.txt", "hello");
        assert_eq!(handle.read("/shared.txt").as_deref(), Some("hello"));
    }
}
