//! Kickoff Core - scaffold orchestration for new projects.
//!
//! This crate holds everything the `kickoff` binary needs that is not
//! infrastructure: the path normalizer, the scaffold state machine, the
//! port traits the adapters implement, and the error taxonomy.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          kickoff-cli (binary)           │
//! │   collects parent folder + name, then   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │            ScaffoldService              │
//! │  validate parent → create dir → copy    │
//! │  templates (fan-out/fan-in) → probe     │
//! │  entry file                             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     Ports (Filesystem, EntryOpener)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    kickoff-adapters (infrastructure)    │
//! │  (LocalFilesystem, MemoryFilesystem,    │
//! │   CommandOpener, ...)                   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kickoff_core::prelude::*;
//!
//! # fn demo(filesystem: Box<dyn Filesystem>, opener: Box<dyn EntryOpener>) {
//! let service = ScaffoldService::new(filesystem, opener);
//! let report = service
//!     .create_project("/home/me/Documents", "Untitled-1", "/usr/share/kickoff/templates")
//!     .unwrap();
//! println!("{} files copied, {} failed", report.files_copied, report.error_count);
//! # }
//! ```

pub mod error;
pub mod path;
pub mod ports;
pub mod scaffold;
pub mod state;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::error::{CopyError, ScaffoldError, ScaffoldResult};
    pub use crate::path::SeparatorStyle;
    pub use crate::ports::{EntryOpener, FileStat, Filesystem};
    pub use crate::scaffold::{ENTRY_FILE, ScaffoldReport, ScaffoldService};
    pub use crate::state::NewProjectState;
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
