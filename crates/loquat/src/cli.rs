//! Clap derive structures for the `loquat` CLI.
//!
//! One flat set of flags: the target device, the command to run, and the
//! optional fields consumed by the POST commands.

use clap::Parser;

const EXAMPLES: &str = "\
Examples:
  loquat --server 192.168.1.100 --port 8080 --com get_scan_result
  loquat --server 192.168.1.100 --port 8080 --com connect --ssid MyWiFi --psk password123
  loquat --server 192.168.1.100 --port 8080 --com connect --ssid CafeWiFi --security Open
  loquat --server 192.168.1.100 --port 8080 --com apikey --apikey your-api-key --aiserver ai.example.com";

/// loquat -- talk to a Loquat device's management API
#[derive(Debug, Parser)]
#[command(
    name = "loquat",
    version,
    about = "Provision and query Loquat devices over HTTP",
    long_about = "Issues a single request against a Loquat device's management API\n\
        and prints a readable summary of the response.\n\n\
        Commands: get_scan_result, status, get_status, connect, apikey, get_net_info",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Device host name or IP address
    #[arg(long, short = 's', value_name = "HOST")]
    pub server: String,

    /// Device HTTP port
    #[arg(long, short = 'p')]
    pub port: u16,

    /// Command to run on the device
    #[arg(long = "com", short = 'c', value_name = "COMMAND")]
    pub command: String,

    /// Network SSID (connect)
    #[arg(long, short = 'w')]
    pub ssid: Option<String>,

    /// Network password (connect; ignored for open networks)
    #[arg(long, short = 'k', value_name = "PASSWORD")]
    pub psk: Option<String>,

    /// Security type (connect; "Open" means no password)
    #[arg(long, short = 'e', value_name = "TYPE")]
    pub security: Option<String>,

    /// API key to store on the device (apikey)
    #[arg(long, short = 'a', value_name = "KEY")]
    pub apikey: Option<String>,

    /// AI server address to store on the device (apikey)
    #[arg(long, short = 'i', value_name = "HOST")]
    pub aiserver: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value = "30", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Timeout in seconds for slow commands (connect, apikey)
    #[arg(long, default_value = "120", value_parser = clap::value_parser!(u64).range(1..))]
    pub long_timeout: u64,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the request preamble
    #[arg(long, short = 'q')]
    pub quiet: bool,
}
