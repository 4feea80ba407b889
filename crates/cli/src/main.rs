use clap::Parser;
use tracing::{error, info};
use zonewarden_domain::CliOverrides;

mod bootstrap;
mod di;
mod output;

#[derive(Parser)]
#[command(name = "zonewarden")]
#[command(version)]
#[command(about = "Zonewarden - DNS health diagnostics: nameservers, DNSSEC chain, record scan")]
struct Cli {
    /// Domain to diagnose
    domain: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Recursive resolver used for nameserver discovery
    #[arg(short = 'r', long)]
    resolver: Option<String>,

    /// DNS port used for every query
    #[arg(long)]
    port: Option<u16>,

    /// Per-query timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Queries per second per nameserver during a scan
    #[arg(long)]
    qps: Option<u32>,

    /// Enumerate records (zone transfer, then dictionary sweep)
    #[arg(short = 's', long)]
    scan: bool,

    /// Print one JSON report instead of text
    #[arg(long)]
    json: bool,

    /// Shorthand for --log-level debug
    #[arg(long)]
    debug: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        resolver: cli.resolver.clone(),
        port: cli.port,
        timeout_ms: cli.timeout_ms,
        qps: cli.qps,
        log_level: cli.log_level.clone(),
        debug: cli.debug,
        json: cli.json,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Zonewarden v{}", env!("CARGO_PKG_VERSION"));

    let services = di::DnsServices::new(&config)?;
    let use_cases = di::UseCases::new(&config, &services);

    let report = match output::diagnose(&cli.domain, &services, &use_cases, cli.scan, &config).await
    {
        Ok(report) => report,
        Err(e) => {
            error!(domain = %cli.domain, error = %e, "Diagnosis aborted");
            return Err(e);
        }
    };

    if config.output.json {
        println!("{}", output::render_json(&report)?);
    } else {
        print!("{}", output::render_text(&report));
    }

    Ok(())
}
