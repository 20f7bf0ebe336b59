use clap::Parser;

/// Command-line interface definition for deepwork.
/// Launching without arguments opens the interactive calendar.
#[derive(Parser, Debug)]
#[command(
    name = "deepwork",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track up to four hours of deep work per day on a terminal calendar",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(long = "db")]
    pub db: Option<String>,

    /// Skip the short pause after saving
    #[arg(long = "no-pause", hide = true)]
    pub no_pause: bool,
}
