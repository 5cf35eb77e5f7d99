use clap::{Parser, Subcommand};
use page_extract::config::ExtractorConfig;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-extract")]
#[command(about = "Extracts title, description, text, links and metadata from a web page")]
#[command(version)]
pub struct Args {
    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Fetch timeout in seconds
    #[arg(long, global = true)]
    pub fetch_timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP extraction server (default)
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Extract a single URL and print the result as JSON
    Extract {
        /// URL of the page to extract
        url: String,
    },
}

impl Args {
    /// Resolve the effective configuration: file, then environment, then flags
    pub fn load_config(&self) -> Result<ExtractorConfig, Box<dyn Error>> {
        let config = match &self.config {
            Some(path) => ExtractorConfig::from_file(path)?,
            None => ExtractorConfig::default(),
        };

        Ok(self.apply_flags(config.with_env_overrides()?))
    }

    /// Override `config` with any flags given on the command line
    pub fn apply_flags(&self, mut config: ExtractorConfig) -> ExtractorConfig {
        if let Some(secs) = self.fetch_timeout {
            config.fetch_timeout_secs = secs;
        }

        if let Some(Command::Serve { host, port }) = &self.command {
            if let Some(host) = host {
                config.host = host.clone();
            }
            if let Some(port) = port {
                config.port = *port;
            }
        }

        config
    }
}
