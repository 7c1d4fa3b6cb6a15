use prionis_dns_domain::config::ServerConfig;
use prionis_dns_infrastructure::dns::{DnsListener, DnsServerHandler, ListenerOptions};
use std::net::SocketAddr;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Serves DNS until Ctrl-C.
pub async fn start_dns_server(
    config: &ServerConfig,
    handler: DnsServerHandler,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = config.dns_addr().parse()?;
    let tcp_addr = config.tcp_enabled.then_some(socket_addr);

    info!(
        bind_address = %socket_addr,
        tcp = config.tcp_enabled,
        max_concurrent_requests = config.max_concurrent_requests,
        "Starting DNS server"
    );

    let listener = DnsListener::bind(
        socket_addr,
        tcp_addr,
        handler.with_udp_max_response_size(config.udp_max_response_size),
        ListenerOptions {
            max_concurrent_requests: config.max_concurrent_requests,
            max_tcp_connections: config.max_tcp_connections,
            tcp_idle_timeout: Duration::from_secs(config.tcp_idle_timeout_secs),
        },
    )?;

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown signal received");
                signal_token.cancel();
            }
            Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
        }
    });

    listener.run(shutdown).await;
    Ok(())
}
