use home_dns_domain::{Config, Zone};
use home_dns_infrastructure::dns::{
    DnsServer, DnsServerHandler, FailoverExchanger, QueryTracer, ResolutionEngine,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Exit status used when a second interrupt skips the graceful drain.
const FORCED_EXIT_CODE: i32 = 130;

pub async fn start_dns_server(config: &Config, zone: Arc<Zone>) -> anyhow::Result<()> {
    let tracer = QueryTracer::from_debug_flag(config.logging.debug);
    let upstreams = config.upstream_endpoints()?;
    let listeners = config.listen_endpoints()?;

    if upstreams.is_empty() {
        warn!("No nameservers configured; names outside the local zone will be refused");
    }
    for upstream in &upstreams {
        info!(nameserver = %upstream, "Upstream nameserver");
    }

    let exchanger = FailoverExchanger::from_endpoints(&upstreams, tracer.clone());
    let engine = Arc::new(ResolutionEngine::new(zone, exchanger, tracer));
    let server = DnsServer::bind(&listeners, DnsServerHandler::new(engine)).await?;

    let shutdown = CancellationToken::new();
    tokio::spawn(watch_interrupts(shutdown.clone()));

    server.serve(shutdown).await?;
    info!("DNS server stopped");
    Ok(())
}

/// First Ctrl-C cancels `shutdown`; a second one exits immediately.
async fn watch_interrupts(shutdown: CancellationToken) {
    if tokio::signal::ctrl_c().await.is_err() {
        warn!("Cannot listen for Ctrl-C; graceful shutdown unavailable");
        return;
    }
    info!("Interrupt received, draining in-flight queries (press Ctrl-C again to force)");
    shutdown.cancel();

    if tokio::signal::ctrl_c().await.is_ok() {
        warn!("Second interrupt, exiting now");
        std::process::exit(FORCED_EXIT_CODE);
    }
}
