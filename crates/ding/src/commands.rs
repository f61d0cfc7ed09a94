use clap::Parser;
use clap::Subcommand;
pub use clap_complete::Shell;

const LONG_ABOUT: &str = r#"ding schedules delayed desktop notifications from short text commands.

DURATION FORMAT:
    One or more digit+unit groups, concatenated without spaces, followed by
    an optional label. Units: s (seconds), m (minutes), h (hours), any case.

EXAMPLES:
    # Tea in five minutes
    ding set 5m Tea

    # Deep work block with a compound duration
    ding set 1h10m30s Deep Work

    # No label: the notification says "Timer Done"
    ding set 45m

    # See what's pending (also prunes timers that already fired)
    ding list

    # Cancel by id or unique id prefix (ids are shown by 'ding list')
    ding cancel 3f2a"#;

#[derive(Parser)]
#[command(name = "ding")]
#[command(author, version)]
#[command(about = "Schedule delayed desktop notifications from the command line")]
#[command(long_about = LONG_ABOUT)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Set a timer: duration groups followed by an optional label
    #[command(name = "set")]
    Set {
        /// Timer text, e.g. "45m Take a break" (quoting optional)
        #[arg(required = true, trailing_var_arg = true)]
        input: Vec<String>,
    },

    /// List active timers (prunes timers that already fired)
    #[command(name = "list")]
    List,

    /// Cancel a timer by id or unique id prefix
    #[command(name = "cancel")]
    Cancel {
        /// Timer id (or unique prefix) as shown by 'ding list'
        id: String,
    },

    /// Internal worker: sleep then emit the notification
    #[command(name = "fire", hide = true)]
    Fire {
        #[arg(long)]
        seconds: u64,
        #[arg(long)]
        message: String,
    },

    /// Generate shell completion scripts
    #[command(name = "completions")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
