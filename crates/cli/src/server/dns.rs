use std::time::Duration;

use hickory_server::ServerFuture;
use tokio::net::{TcpListener, UdpSocket};
use tokio_util::sync::CancellationToken;
use tracing::info;
use vinyl_domain::Config;
use vinyl_infrastructure::dns::DnsServerHandler;

pub async fn start_dns_server(
    config: &Config,
    handler: DnsServerHandler,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let bind_addr = config.dns_bind_addr();
    let mut server = ServerFuture::new(handler);

    let udp_socket = UdpSocket::bind(&bind_addr).await?;
    info!(bind_address = %udp_socket.local_addr()?, "DNS server listening on UDP");
    server.register_socket(udp_socket);

    if config.dns.tcp_enabled {
        let tcp_listener = TcpListener::bind(&bind_addr).await?;
        info!(bind_address = %tcp_listener.local_addr()?, "DNS server listening on TCP");
        server.register_listener(
            tcp_listener,
            Duration::from_secs(config.dns.tcp_timeout_secs),
        );
    }

    shutdown.cancelled().await;
    info!("Stopping DNS server");
    server.shutdown_gracefully().await?;

    Ok(())
}
