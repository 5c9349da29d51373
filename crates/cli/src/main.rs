use clap::Parser;
use std::future::Future;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use vinyl_domain::CliOverrides;
use vinyl_infrastructure::dns::DnsServerHandler;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "vinyl")]
#[command(version)]
#[command(about = "Vinyl - in-process DNS record registry with a management API")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Management API port
    #[arg(short = 'a', long)]
    api_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        api_port: cli.api_port,
        bind_address: cli.bind,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting Vinyl v{}", env!("CARGO_PKG_VERSION"));

    let repos = di::Repositories::new();
    bootstrap::seed_records(repos.records.as_ref(), &config.records)?;

    let use_cases = di::UseCases::new(&repos);
    let app_state = use_cases.app_state();
    let dns_handler = DnsServerHandler::new(use_cases.resolve_query.clone());

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        server::shutdown_signal().await;
        signal_token.cancel();
    });

    let (dns_ok, api_ok) = tokio::join!(
        supervise(
            "dns",
            server::start_dns_server(&config, dns_handler, shutdown.clone()),
            &shutdown,
        ),
        supervise(
            "api",
            server::start_web_server(config.api_bind_addr(), app_state, shutdown.clone()),
            &shutdown,
        ),
    );

    if !(dns_ok && api_ok) {
        anyhow::bail!("a server stopped with an error");
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Runs one server to completion. A failure brings the other one down too.
async fn supervise(
    name: &'static str,
    server: impl Future<Output = anyhow::Result<()>>,
    shutdown: &CancellationToken,
) -> bool {
    match server.await {
        Ok(()) => true,
        Err(e) => {
            error!(server = name, error = %e, "Server failed");
            shutdown.cancel();
            false
        }
    }
}
