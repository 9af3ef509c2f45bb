use argent_dns_application::HandleQueryUseCase;
use argent_dns_domain::{CliOverrides, Clock, Config, SystemClock};
use argent_dns_infrastructure::dns::{DnsServer, InMemoryAnswerCache, UdpUpstream};
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod bootstrap;

#[derive(Parser)]
#[command(name = "argent-dns")]
#[command(version)]
#[command(about = "Argent DNS - minimal caching DNS stub resolver")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Listen port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Upstream resolver address (IP:PORT)
    #[arg(short = 'u', long)]
    upstream: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind,
        upstream: cli.upstream,
        log_level: cli.log_level,
    };
    let config = Config::load(cli.config.as_deref(), overrides)?;
    config.validate()?;

    bootstrap::init_logging(&config);
    info!("Starting Argent DNS v{}", env!("CARGO_PKG_VERSION"));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let upstream_addr = config.upstream.socket_addr()?;
    let cache = Arc::new(InMemoryAnswerCache::new(clock.clone()));
    let upstream = Arc::new(UdpUpstream::new(
        upstream_addr,
        Duration::from_millis(config.upstream.timeout_ms),
        clock.clone(),
    ));
    let use_case = Arc::new(HandleQueryUseCase::new(cache, upstream));

    let bind_ip: IpAddr = config
        .server
        .bind_address
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid bind address '{}'", config.server.bind_address))?;
    let listen_addr = SocketAddr::new(bind_ip, config.server.port);

    let server = DnsServer::bind(listen_addr, use_case, clock).await?;
    info!(upstream = %upstream_addr, "forwarding cache misses");

    server.run().await?;
    Ok(())
}
