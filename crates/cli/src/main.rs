use clap::Parser;
use loopdns_application::use_cases::ProcessDatagramUseCase;
use loopdns_domain::CliOverrides;
use loopdns_infrastructure::dns::{DnsServerHandler, StaticAnswerResolver};
use std::sync::Arc;
use tracing::{error, info};

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "loopdns")]
#[command(version)]
#[command(about = "loopdns - answers every DNS query over UDP with a fixed A record")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

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
        bind_address: cli.bind,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting loopdns v{}", env!("CARGO_PKG_VERSION"));
    info!(
        address = %config.answer.address,
        ttl = config.answer.ttl,
        "Synthetic answer configured"
    );

    let resolver = StaticAnswerResolver::from_config(&config.answer)?;
    let use_case = Arc::new(ProcessDatagramUseCase::new(Arc::new(resolver)));
    let handler = DnsServerHandler::new(use_case);

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    };

    if let Err(e) = server::start_dns_server(&config.server, handler, shutdown).await {
        error!(error = %e, "DNS server error");
        return Err(e);
    }

    info!("Server shutdown complete");
    Ok(())
}
