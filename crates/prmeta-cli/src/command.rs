use clap::{Args, Parser, Subcommand};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 9090);

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub subcommand: Subcommands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Subcommands {
    /// Serve protected resource metadata
    Run(SubcommandRun),
}

#[derive(Args, Debug, Clone)]
pub struct SubcommandRun {
    #[arg(short, long = "config", env = "PRMETA_CONFIG_FILE")]
    pub configfile: Option<PathBuf>,

    #[arg(short, long = "log-filter", env = "PRMETA_LOG_FILTER")]
    pub log_filter: Option<String>,

    #[arg(long = "prometheus", env = "PRMETA_PROMETHEUS")]
    pub prometheus: Option<bool>,

    #[arg(long = "health-check", env = "PRMETA_HEALTH_CHECK")]
    pub health_check: Option<bool>,

    #[arg(long = "addr", env = "PRMETA_SERVER_ADDR")]
    pub addr: Option<SocketAddr>,

    #[arg(
        long = "authorization-server",
        env = "PRMETA_AUTHORIZATION_SERVERS",
        value_delimiter = ',',
        num_args = 1..
    )]
    pub authorization_servers: Option<Vec<String>>,

    /// Publish this resource identifier instead of deriving it per request
    #[arg(long = "resource-url", env = "PRMETA_RESOURCE_URL")]
    pub resource_url: Option<String>,

    #[arg(long = "well-known-name", env = "PRMETA_WELL_KNOWN_NAME")]
    pub well_known_name: Option<String>,
}
