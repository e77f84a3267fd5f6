//! CLI argument definitions
//!
//! All Clap derive structs for `mirno` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

// ============================================================================
// Root CLI
// ============================================================================

/// Phased countdown timers for low-stimulation classrooms.
#[derive(Parser, Debug)]
#[command(name = "mirno", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "MIRNO_COLOR")]
    pub color: ColorChoice,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a transition countdown.
    Run(RunArgs),

    /// Run the calming breathing exercise.
    Breathe(BreatheArgs),

    /// Show or edit the visual schedule.
    Schedule(ScheduleCommand),

    /// Validate exercise files without running anything.
    Validate(ValidateArgs),

    /// List available exercises, phrase cards, and routes.
    List(ListArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Session Options (shared by run / breathe)
// ============================================================================

/// Options shared by every timer session.
#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Path of the local store document.
    #[arg(long, env = "MIRNO_STORE", default_value = "mirno-store.json")]
    pub store: PathBuf,

    /// Do not read or write the local store.
    #[arg(long)]
    pub no_store: bool,

    /// External speech command (e.g. "espeak-ng -v en").
    #[arg(long, env = "MIRNO_SPEECH_CMD")]
    pub speech_cmd: Option<String>,

    /// Speak announcements even if the stored settings have speech off.
    #[arg(long)]
    pub speak: bool,

    /// Ring the terminal bell on completion even if the stored settings
    /// have it off.
    #[arg(long)]
    pub beep: bool,

    /// Write the JSONL event stream to this file.
    #[arg(long, env = "MIRNO_EVENTS")]
    pub events_file: Option<PathBuf>,
}

/// Arguments for `run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Countdown length in minutes.
    #[arg(
        short,
        long,
        default_value_t = 5,
        value_parser = clap::value_parser!(u32).range(1..=180)
    )]
    pub minutes: u32,

    /// Named exercise from the configuration file instead of a plain
    /// countdown.
    #[arg(short, long, requires = "config")]
    pub exercise: Option<String>,

    /// Path to a YAML exercise file.
    #[arg(short, long, env = "MIRNO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Session options.
    #[command(flatten)]
    pub session: SessionArgs,
}

/// Arguments for `breathe`.
#[derive(Args, Debug)]
pub struct BreatheArgs {
    /// Number of full breathing cycles before stopping.
    #[arg(
        short = 'n',
        long,
        default_value_t = 3,
        value_parser = clap::value_parser!(u32).range(1..=100)
    )]
    pub cycles: u32,

    /// Named cyclic exercise from the configuration file instead of the
    /// built-in pattern.
    #[arg(short, long, requires = "config")]
    pub exercise: Option<String>,

    /// Path to a YAML exercise file.
    #[arg(short, long, env = "MIRNO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Session options.
    #[command(flatten)]
    pub session: SessionArgs,
}

// ============================================================================
// Schedule Command
// ============================================================================

/// Visual schedule commands.
#[derive(Args, Debug)]
pub struct ScheduleCommand {
    /// Schedule subcommand.
    #[command(subcommand)]
    pub subcommand: ScheduleSubcommand,

    /// Path of the local store document.
    #[arg(long, env = "MIRNO_STORE", default_value = "mirno-store.json", global = true)]
    pub store: PathBuf,
}

/// Schedule subcommands.
#[derive(Subcommand, Debug)]
pub enum ScheduleSubcommand {
    /// Print the schedule ordered by time of day.
    List,

    /// Add an item.
    Add {
        /// What happens.
        title: String,

        /// Time of day as HH:MM.
        #[arg(short, long, default_value = "09:00")]
        time: String,
    },

    /// Toggle an item done/not done.
    Done {
        /// Item id (prefix is enough if unambiguous).
        id: String,
    },

    /// Remove an item.
    Remove {
        /// Item id (prefix is enough if unambiguous).
        id: String,
    },

    /// Drop the stored schedule and return to the seeded default.
    Reset,
}

// ============================================================================
// Validate / List
// ============================================================================

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Exercise files to validate.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Enable strict validation (warnings become errors).
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Category to list.
    #[arg(default_value = "all")]
    pub category: ListCategory,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Path to a YAML exercise file whose exercises are included.
    #[arg(short, long, env = "MIRNO_CONFIG")]
    pub config: Option<PathBuf>,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Listable category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ListCategory {
    /// Timer exercises.
    Exercises,
    /// Communication phrase cards.
    Phrases,
    /// Navigable routes.
    Routes,
    /// All categories.
    #[default]
    All,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
