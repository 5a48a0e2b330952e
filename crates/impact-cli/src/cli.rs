use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "impact",
    about = "Search and inspect Modelica library indexes",
    version,
    arg_required_else_help = true
)]
pub struct Args {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Emit machine readable JSON
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to the configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Proxy used for index requests
    #[arg(long, global = true)]
    pub proxy: Option<String>,

    /// User agent sent with index requests
    #[arg(long, global = true)]
    pub user_agent: Option<String>,

    /// Extra request header, in `Name: value` form (repeatable)
    #[arg(short = 'H', long, global = true)]
    pub header: Option<Vec<String>>,

    /// Timeout in seconds for each index request
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List configured repositories in merge order
    #[clap(name = "repos")]
    Repos,

    /// Search libraries by name or description
    #[clap(name = "search", visible_alias = "s")]
    Search {
        /// Text to look for
        #[arg(required = true)]
        query: String,

        /// Match case exactly
        #[arg(required = false, long)]
        case_sensitive: bool,

        /// Maximum number of results
        #[arg(required = false, long, short)]
        limit: Option<usize>,
    },

    /// Show details of one library
    #[clap(name = "info", visible_alias = "query")]
    Info {
        /// Library name
        #[arg(required = true)]
        name: String,
    },

    /// Print the merged index as JSON
    #[clap(name = "dump")]
    Dump,

    /// Generate a default configuration file
    #[clap(name = "defconfig")]
    DefConfig,
}
