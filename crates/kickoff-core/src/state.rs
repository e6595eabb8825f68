//! The small state record threaded through `new`-project invocations.
//!
//! The project-name ordinal and the remembered parent folder are not
//! ambient globals: the caller loads this record from the preferences
//! store, passes it into the invocation, and persists whatever comes
//! back. The core never touches the store itself, so a missing or
//! broken store simply means [`NewProjectState::default`].

use serde::{Deserialize, Serialize};

/// Per-user state that survives between `new`-project invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewProjectState {
    /// Ordinal used for the next default project name.
    pub next_ordinal: u32,
    /// Parent folder the user last scaffolded into (canonical form).
    pub projects_folder: Option<String>,
}

impl Default for NewProjectState {
    fn default() -> Self {
        Self {
            next_ordinal: 1,
            projects_folder: None,
        }
    }
}

impl NewProjectState {
    /// The default name offered for the next project: `Untitled-<N>`.
    pub fn default_project_name(&self) -> String {
        format!("Untitled-{}", self.next_ordinal)
    }

    /// Record a successful scaffold. The ordinal only advances after
    /// success; a failed or cancelled invocation reuses the same name.
    pub fn record_created(&mut self) {
        self.next_ordinal = self.next_ordinal.saturating_add(1);
    }

    /// Remember the parent folder for the next invocation.
    pub fn remember_folder(&mut self, folder: impl Into<String>) {
        self.projects_folder = Some(folder.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_starts_at_one() {
        let state = NewProjectState::default();
        assert_eq!(state.next_ordinal, 1);
        assert_eq!(state.default_project_name(), "Untitled-1");
        assert_eq!(state.projects_folder, None);
    }

    #[test]
    fn ordinal_advances_only_when_recorded() {
        let mut state = NewProjectState::default();
        assert_eq!(state.default_project_name(), "Untitled-1");
        state.record_created();
        assert_eq!(state.default_project_name(), "Untitled-2");
        state.record_created();
        assert_eq!(state.default_project_name(), "Untitled-3");
    }

    #[test]
    fn ordinal_saturates_instead_of_wrapping() {
        let mut state = NewProjectState {
            next_ordinal: u32::MAX,
            projects_folder: None,
        };
        state.record_created();
        assert_eq!(state.next_ordinal, u32::MAX);
    }

    #[test]
    fn remember_folder_overwrites_previous() {
        let mut state = NewProjectState::default();
        state.remember_folder("/home/me/Documents");
        state.remember_folder("/home/me/Projects");
        assert_eq!(state.projects_folder.as_deref(), Some("/home/me/Projects"));
    }
}
