use clap::Parser;

use crate::config::API_BASE_URL;

#[derive(Parser, Debug)]
#[command(name = "submagic-mcp", author, version, about, long_about = None)]
pub struct Cli {
    /// Submagic API base URL (override for testing against a stub)
    #[arg(long, value_name = "URL", default_value = API_BASE_URL)]
    pub base_url: String,
}
