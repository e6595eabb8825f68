//! `kickoff init`: create the default configuration file and seed
//! the template folder.

use std::path::Path;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Starter template written into an empty template folder so a fresh
/// install can scaffold something immediately.
const STARTER_INDEX_HTML: &str = "\
<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"utf-8\">
    <title>New Project</title>
</head>
<body>
    <h1>New Project</h1>
</body>
</html>
";

/// Create the default configuration and template directory.
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    output.print("Initialising kickoff...")?;

    write_default_config(global.config.as_ref(), args.force, &output)?;
    seed_templates_dir(&config.templates_dir(), &output)?;

    Ok(())
}

fn write_default_config(
    config_override: Option<&std::path::PathBuf>,
    force: bool,
    output: &OutputManager,
) -> CliResult<()> {
    let config_path = config_override
        .cloned()
        .unwrap_or_else(AppConfig::config_path);

    // Bail early if the file already exists and --force was not given.
    if config_path.exists() && !force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let toml = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
            message: format!("failed to create config directory '{}'", parent.display()),
            source: e,
        })?;
    }
    std::fs::write(&config_path, &toml).map_err(|e| CliError::IoError {
        message: format!("failed to write config to '{}'", config_path.display()),
        source: e,
    })?;

    output.success(&format!("Configuration created at {}", config_path.display()))?;
    Ok(())
}

fn seed_templates_dir(templates_dir: &Path, output: &OutputManager) -> CliResult<()> {
    std::fs::create_dir_all(templates_dir).map_err(|e| CliError::IoError {
        message: format!(
            "failed to create template directory '{}'",
            templates_dir.display()
        ),
        source: e,
    })?;

    // Seed only a truly empty folder; never touch user templates.
    let is_empty = std::fs::read_dir(templates_dir)
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false);
    if is_empty {
        let entry = templates_dir.join("index.html");
        std::fs::write(&entry, STARTER_INDEX_HTML).map_err(|e| CliError::IoError {
            message: format!("failed to write starter template '{}'", entry.display()),
            source: e,
        })?;
        output.success(&format!(
            "Template folder seeded at {}",
            templates_dir.display()
        ))?;
    } else {
        output.print(&format!(
            "Template folder already populated at {}",
            templates_dir.display()
        ))?;
    }

    Ok(())
}
