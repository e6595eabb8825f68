//! Implementation of the `kickoff new` command.
//!
//! Responsibility: collect the parent folder and project name (flags,
//! preferences, or interactive prompt), call the core scaffold
//! service, persist the updated preferences, and display results. No
//! scaffolding logic lives here.
//!
//! Dispatch sequence:
//! 1. Load preferences (name ordinal + remembered folder)
//! 2. Resolve parent folder and project name
//! 3. Prompt interactively unless `--yes` / non-TTY
//! 4. Run the scaffold
//! 5. Persist preferences, print the report

#[cfg(feature = "interactive")]
use std::io::IsTerminal as _;
use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use kickoff_adapters::{CommandOpener, LocalFilesystem, NullOpener};
use kickoff_core::prelude::*;
use kickoff_core::ports::EntryOpener;

use crate::{
    cli::{GlobalArgs, NewArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prefs::PrefsStore,
};

/// Execute the `kickoff new` command.
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Preferences seed the defaults for this invocation.
    let prefs = PrefsStore::for_config(global.config.as_ref());
    let mut state = prefs.load();

    // 2. Resolve inputs.
    let mut parent = resolve_parent_folder(args.dir.as_ref(), &state);
    let mut name = args
        .name
        .clone()
        .unwrap_or_else(|| state.default_project_name());

    // 3. The dialog surface: confirm/edit name and folder on a TTY.
    #[cfg(feature = "interactive")]
    if args.name.is_none() && !args.yes && !global.quiet && std::io::stdin().is_terminal() {
        (name, parent) = prompt_for_details(&name, &parent)?;
    }

    validate_project_name(&name)?;
    let template_dir = args
        .template_dir
        .clone()
        .unwrap_or_else(|| config.templates_dir())
        .to_string_lossy()
        .into_owned();

    debug!(%parent, %name, %template_dir, "inputs resolved");

    // 4. Build adapters and scaffold.
    let opener: Box<dyn EntryOpener> = if args.no_open {
        Box::new(NullOpener)
    } else {
        Box::new(CommandOpener::from_env())
    };
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()), opener);

    if output.format() != OutputFormat::Json {
        output.header(&format!("Creating '{name}'..."))?;
    }
    info!(project = %name, %parent, "scaffold started");
    let report = service.create_project(&parent, &name, &template_dir)?;

    // 5. Preferences advance only after a successful scaffold.
    state.record_created();
    state.remember_folder(&parent);
    if let Err(e) = prefs.save(&state) {
        // Losing the counter is not worth failing a created project.
        warn!(error = %e, "could not persist preferences");
    }

    render_report(&report, &name, &parent, &output)
}

// ── Input resolution ──────────────────────────────────────────────────────────

/// Parent folder precedence: `--dir` flag, then the remembered folder
/// from preferences, then the user's Documents folder, then home.
fn resolve_parent_folder(flag: Option<&PathBuf>, state: &NewProjectState) -> String {
    if let Some(dir) = flag {
        return dir.to_string_lossy().into_owned();
    }
    if let Some(remembered) = &state.projects_folder {
        return remembered.clone();
    }
    default_documents_folder()
}

fn default_documents_folder() -> String {
    match directories::UserDirs::new() {
        Some(dirs) => dirs
            .document_dir()
            .unwrap_or_else(|| dirs.home_dir())
            .to_string_lossy()
            .into_owned(),
        None => ".".to_string(),
    }
}

fn validate_project_name(name: &str) -> CliResult<()> {
    if name.is_empty() {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.starts_with('.') {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot start with '.'".into(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot contain path separators".into(),
        });
    }
    Ok(())
}

// ── Dialog surface ────────────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
fn prompt_for_details(default_name: &str, default_folder: &str) -> CliResult<(String, String)> {
    let name = dialoguer::Input::<String>::new()
        .with_prompt("Project name")
        .default(default_name.to_string())
        .interact_text()
        .map_err(prompt_err)?;
    let folder = dialoguer::Input::<String>::new()
        .with_prompt("Parent folder")
        .default(default_folder.to_string())
        .interact_text()
        .map_err(prompt_err)?;
    Ok((name, folder))
}

#[cfg(feature = "interactive")]
fn prompt_err(e: dialoguer::Error) -> CliError {
    CliError::IoError {
        message: "interactive prompt failed".into(),
        source: std::io::Error::other(e),
    }
}

// ── Reporting ─────────────────────────────────────────────────────────────────

fn render_report(
    report: &ScaffoldReport,
    name: &str,
    parent: &str,
    output: &OutputManager,
) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        let json = serde_json::to_string_pretty(report).map_err(|e| CliError::ConfigError {
            message: format!("failed to serialise report: {e}"),
            source: Some(Box::new(e)),
        })?;
        output.print(&json)?;
        return Ok(());
    }

    let style = SeparatorStyle::native();
    let destination = format!("{}{}", style.ensure_trailing(parent), name);
    output.success(&format!("Project '{name}' created at {destination}"))?;

    // The scaffold still counts as a success with a nonzero error
    // count; surfacing it is a boundary decision made here, not in
    // the core.
    if report.error_count > 0 {
        output.warning(&format!(
            "{} of {} template file(s) could not be copied",
            report.error_count,
            report.error_count + report.files_copied,
        ))?;
    } else if report.files_copied > 0 {
        output.print(&format!("  {} template file(s) copied", report.files_copied))?;
    }

    if let Some(entry) = &report.entry_file {
        output.print(&format!("  entry file: {entry}"))?;
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
