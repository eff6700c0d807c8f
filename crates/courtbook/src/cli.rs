//! Clap derive structures for the `courtbook` CLI.
//!
//! Defines the command tree, global flags, and shared argument groups.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// courtbook -- court slot grids and bookings from the command line
#[derive(Debug, Parser)]
#[command(
    name = "courtbook",
    version,
    about = "Browse court slot grids and lock, unlock or merge booking slots",
    long_about = "Command-line client for a sports-venue booking backend.\n\n\
        Fetches the per-court slot grid of a field for a date, prices a\n\
        selection of slots, and sends lock, unlock, merge and unmerge requests.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Configuration profile to use
    #[arg(long, short = 'p', env = "COURTBOOK_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Booking API base URL (overrides profile)
    #[arg(long, env = "COURTBOOK_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Bearer token (overrides profile and keyring)
    #[arg(long, env = "COURTBOOK_TOKEN", global = true, hide_env = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "COURTBOOK_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "COURTBOOK_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "COURTBOOK_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the time axis between two times (offline)
    #[command(alias = "tl")]
    Timeline(TimelineArgs),

    /// Show a field's slot grid for a date
    #[command(alias = "g")]
    Grid(GridArgs),

    /// Quote, lock, unlock, merge and unmerge slots
    #[command(alias = "s")]
    Slots(SlotsArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared Arguments ─────────────────────────────────────────────────

/// Which grid to work on: a field and a date.
#[derive(Debug, Args)]
pub struct GridContextArgs {
    /// Field ID (defaults to the profile's default_field)
    #[arg(long, short = 'f')]
    pub field: Option<String>,

    /// Date as YYYY-MM-DD (defaults to today)
    #[arg(long, short = 'd')]
    pub date: Option<String>,
}

/// A grid context plus one or more slot IDs.
#[derive(Debug, Args)]
pub struct SlotSelectionArgs {
    #[command(flatten)]
    pub context: GridContextArgs,

    /// Slot ID (repeatable)
    #[arg(long = "slot", short = 's', required = true, num_args = 1..)]
    pub slots: Vec<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  TIMELINE
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct TimelineArgs {
    /// Opening time (HH:MM or HH:MM:SS)
    #[arg(long)]
    pub open: String,

    /// Closing time (HH:MM or HH:MM:SS)
    #[arg(long)]
    pub close: String,

    /// Step in minutes
    #[arg(long, default_value = "30", allow_negative_numbers = true)]
    pub step: i64,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  GRID
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct GridArgs {
    #[command(subcommand)]
    pub command: GridCommand,
}

#[derive(Debug, Subcommand)]
pub enum GridCommand {
    /// List every court and slot with status and price
    Show(GridContextArgs),

    /// Print the time axis over the field's opening hours
    Timeline {
        #[command(flatten)]
        context: GridContextArgs,

        /// Step in minutes (defaults to the field's minimum booking length)
        #[arg(long, allow_negative_numbers = true)]
        step: Option<i64>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SLOTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SlotsArgs {
    #[command(subcommand)]
    pub command: SlotsCommand,
}

#[derive(Debug, Subcommand)]
pub enum SlotsCommand {
    /// Show the selection and its total price without changing anything
    Quote(SlotSelectionArgs),

    /// Lock the given slots
    Lock(SlotSelectionArgs),

    /// Unlock the given slots
    Unlock(SlotSelectionArgs),

    /// Merge consecutive slots of one court into a single slot
    Merge(SlotSelectionArgs),

    /// Split a merged slot back into its original slots
    Unmerge {
        /// Merged slot ID
        slot_id: String,

        /// Refetch and show this grid afterwards
        #[command(flatten)]
        context: GridContextArgs,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current configuration (secrets masked)
    Show,

    /// Set a profile value
    Set {
        /// Profile key (api_url, token_env, default_field, ca_cert, insecure, timeout)
        key: String,

        /// Value to set
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store a bearer token in the system keyring (for --profile or the default)
    SetToken,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
