//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names,
//! aliases, help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "kickoff",
    bin_name = "kickoff",
    version  = env!("CARGO_PKG_VERSION"),
    author   = "kickoff contributors",
    about    = "Start new projects from a folder of template files",
    long_about = "Kickoff creates a new project directory inside a parent folder \
                  and populates it with the files from your template directory, \
                  then opens the entry file if one exists.",
    after_help = "EXAMPLES:\n\
        \x20 kickoff new my-site\n\
        \x20 kickoff new --dir ~/Projects my-site\n\
        \x20 kickoff init\n\
        \x20 kickoff completions bash > /usr/share/bash-completion/completions/kickoff",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project from the template directory.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 kickoff new                 # prompts, defaults to Untitled-<N>\n\
            \x20 kickoff new my-site\n\
            \x20 kickoff new my-site --dir ~/Projects --no-open"
    )]
    New(NewArgs),

    /// Create the default configuration and seed the template folder.
    #[command(
        about = "Initialise configuration and templates",
        after_help = "EXAMPLES:\n\
            \x20 kickoff init\n\
            \x20 kickoff init --force   # overwrite existing config"
    )]
    Init(InitArgs),

    /// Inspect the configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 kickoff config show\n\
            \x20 kickoff config path"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 kickoff completions bash > ~/.local/share/bash-completion/completions/kickoff\n\
            \x20 kickoff completions zsh  > ~/.zfunc/_kickoff"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `kickoff new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name. Defaults to `Untitled-<N>` using the preferences
    /// counter; a bare name, never a path.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Parent folder to create the project in.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Parent folder (default: remembered folder, then Documents)"
    )]
    pub dir: Option<PathBuf>,

    /// Template directory override.
    #[arg(
        long = "template-dir",
        value_name = "DIR",
        help = "Copy template files from this directory"
    )]
    pub template_dir: Option<PathBuf>,

    /// Skip the interactive prompt.
    #[arg(short = 'y', long = "yes", help = "Skip prompts and create immediately")]
    pub yes: bool,

    /// Do not open the entry file after scaffolding.
    #[arg(long = "no-open", help = "Do not open index.html after creation")]
    pub no_open: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `kickoff init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `kickoff completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `kickoff config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print all configuration values.
    Show,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
