//! Entry-file opener adapters.
//!
//! The scaffolder's open signal is fire-and-forget: none of these
//! adapters report back, and a failed launch never fails a scaffold.

use std::env;
use std::process::Command;
use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};

use kickoff_core::ports::EntryOpener;

/// Opens the entry file by spawning the user's editor.
///
/// The editor program comes from `$VISUAL`, then `$EDITOR`. When
/// neither is set the opener only logs the path; the scaffold result
/// is unchanged either way.
#[derive(Debug, Clone)]
pub struct CommandOpener {
    program: Option<String>,
}

impl CommandOpener {
    /// Resolve the editor from the environment.
    pub fn from_env() -> Self {
        let program = env::var("VISUAL")
            .or_else(|_| env::var("EDITOR"))
            .ok()
            .filter(|p| !p.is_empty());
        Self { program }
    }

    /// Use an explicit program instead of the environment.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: Some(program.into()),
        }
    }
}

impl EntryOpener for CommandOpener {
    fn open(&self, path: &str) {
        match &self.program {
            Some(program) => {
                // Spawn and forget; the child is never waited on.
                match Command::new(program).arg(path).spawn() {
                    Ok(_) => debug!(%program, %path, "editor launched"),
                    Err(e) => warn!(%program, %path, error = %e, "could not launch editor"),
                }
            }
            None => info!(%path, "entry file ready (no $VISUAL/$EDITOR configured)"),
        }
    }
}

/// Opener that ignores the signal. Used with `--no-open`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullOpener;

impl EntryOpener for NullOpener {
    fn open(&self, _path: &str) {}
}

/// Test opener that records every open signal.
#[derive(Debug, Clone, Default)]
pub struct RecordingOpener {
    opened: Arc<Mutex<Vec<String>>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every path the scaffolder asked to open, in order.
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().expect("lock").clone()
    }
}

impl EntryOpener for RecordingOpener {
    fn open(&self, path: &str) {
        self.opened.lock().expect("lock").push(path.to_string());
    }
}
