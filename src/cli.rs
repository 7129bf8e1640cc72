use clap::Parser;

use subhunter::config::{OutputFormat, Technique};

#[derive(clap::Parser, Debug)]
#[command(author, version, about = "Enumerate subdomains from certificate-transparency logs", long_about = None)]
pub struct Cli {
    /// Target domain to fetch subdomains from (e.g. example.com)
    #[arg(short = 'd', long)]
    pub domain: String,

    /// Recurse into wildcard results with follow-up queries
    #[arg(short = 'r', long, default_value_t = false)]
    pub recursive: bool,

    /// Include wildcard subdomains (*.sub.domain) in the output
    #[arg(short = 'w', long, default_value_t = false)]
    pub wildcard: bool,

    /// Drop wildcard subdomains entirely (conflicts with -w)
    #[arg(short = 'e', long, default_value_t = false)]
    pub exclude_wildcards: bool,

    /// Output file to save subdomains (stdout listing only when omitted)
    #[arg(short = 'o', long)]
    pub output: Option<std::path::PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Keep only subdomains ending in one of these extensions (comma-separated, e.g. com,net)
    #[arg(short = 'x', long)]
    pub extensions: Option<String>,

    /// Custom User-Agent for lookup requests
    #[arg(long, default_value = "Mozilla/5.0")]
    pub user_agent: String,

    /// Delay before each request in seconds
    #[arg(long, default_value_t = 0.0_f64)]
    pub rate_limit: f64,

    /// Timeout for each request in seconds
    #[arg(long, default_value_t = 25.0_f64)]
    pub timeout: f64,

    /// Maximum number of lookup queries to issue (0 = unbounded)
    #[arg(long, default_value_t = 0_usize)]
    pub max_queries: usize,

    /// Subdomain enumeration technique
    #[arg(short = 't', long, value_enum, default_value_t = Technique::Crtsh)]
    pub technique: Technique,

    /// Confirm the run configuration before any network activity
    #[arg(short = 'i', long, default_value_t = false)]
    pub interactive: bool,

    /// Write logs to this file instead of the console
    #[arg(long)]
    pub log: Option<std::path::PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long, default_value_t = false)]
    pub verbose: bool,

    /// Enable detailed debug logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Skip the startup banner
    #[arg(long, default_value_t = false)]
    pub no_banner: bool,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
