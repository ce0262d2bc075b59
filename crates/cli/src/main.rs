use anyhow::Context;
use clap::Parser;
use ferrous_dig_application::use_cases::LookupRequest;
use ferrous_dig_domain::{CliOverrides, RecordType};
use std::net::{IpAddr, SocketAddr};
use std::process::ExitCode;
use tracing::{error, warn};

mod bootstrap;
mod di;
mod render;

#[derive(Parser)]
#[command(name = "ferrous-dig")]
#[command(version)]
#[command(about = "Ferrous Dig - minimal DNS lookup client")]
struct Cli {
    /// Hostname to resolve
    hostname: String,

    /// Record type to query (A, AAAA, CNAME, MX, ...)
    #[arg(short = 't', long = "type", default_value = "A")]
    record_type: RecordType,

    /// Nameserver IP address (overrides resolv.conf)
    #[arg(short = 's', long)]
    server: Option<String>,

    /// Nameserver port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Query timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "Lookup failed");
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let cli_overrides = CliOverrides {
        nameserver: cli.server,
        port: cli.port,
        timeout_secs: cli.timeout,
        log_level: cli.log_level,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    let services = di::LookupServices::new(&config);

    let mut request = LookupRequest::new(cli.hostname, cli.record_type);
    if let Some(nameserver) = &config.resolver.nameserver {
        let ip: IpAddr = nameserver
            .parse()
            .with_context(|| format!("invalid nameserver '{}'", nameserver))?;
        request = request.with_server(SocketAddr::new(ip, config.resolver.port));
    }

    let result = services
        .lookup
        .execute(&request)
        .await
        .with_context(|| format!("lookup of {} failed", request.hostname))?;

    if !result.response_code.is_success() {
        warn!(rcode = %result.response_code, server = %result.server, "Server returned an error");
    }

    let stdout = std::io::stdout();
    let printed = render::render_answers(&result, &mut stdout.lock())?;
    if printed == 0 {
        println!("Not found");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
