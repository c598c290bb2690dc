use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use vendas_core::{Layout, Theme};

#[derive(Parser)]
#[command(name = "vendas")]
#[command(about = "Manage sales dashboard preferences and inspect sales exports")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the preference file
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Run without persistent storage (defaults only, writes are dropped)
    #[arg(long, global = true, conflicts_with = "store")]
    pub no_store: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show or change theme and layout
    Prefs {
        #[command(subcommand)]
        command: PrefsCommands,
    },
    /// Show or change privacy blur and sound
    Display {
        #[command(subcommand)]
        command: DisplayCommands,
    },
    /// List sales from a JSON export
    Sales {
        /// JSON file holding an array of sales
        #[arg(short, long, value_name = "PATH")]
        file: PathBuf,
        /// Number of sales to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Format an amount as Brazilian Real
    Format {
        /// Amount such as 1234,56 or "R$ 1.234,56"
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Report which dashboard configuration values are set
    EnvCheck {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum PrefsCommands {
    /// Print the current theme and layout
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change theme and/or layout
    Set {
        /// default, cartoon, retro or neon
        #[arg(long)]
        theme: Option<Theme>,
        /// tabs, sidebar or topbar
        #[arg(long)]
        layout: Option<Layout>,
    },
    /// Forget the stored theme and layout
    Reset,
}

#[derive(Subcommand)]
pub enum DisplayCommands {
    /// Print the current display toggles
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change privacy blur and/or sound
    Set {
        #[arg(long, value_enum, value_name = "on|off")]
        privacy_blur: Option<Toggle>,
        #[arg(long, value_enum, value_name = "on|off")]
        sound: Option<Toggle>,
    },
    /// Forget the stored display toggles
    Reset,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

impl From<Toggle> for bool {
    fn from(value: Toggle) -> Self {
        matches!(value, Toggle::On)
    }
}
