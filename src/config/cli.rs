use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "bookstore")]
#[command(about = "Look up titles carried by a bookstore")]
pub struct CliConfig {
    /// Path to the store's TOML configuration file
    #[arg(short, long, default_value = "bookstore.toml")]
    pub config: String,

    /// Override catalog.titles_path from the config file
    #[arg(long)]
    pub titles: Option<String>,

    /// Exact title to look up (repeatable)
    #[arg(long = "find")]
    pub find: Vec<String>,

    /// Word to search for inside titles (repeatable)
    #[arg(long = "word")]
    pub words: Vec<String>,

    /// Match --word fragments regardless of case
    #[arg(long)]
    pub ignore_case: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}
