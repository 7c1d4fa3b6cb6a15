use crate::dns::server::{DnsServerHandler, Outcome};
use crate::dns::transport::tcp::{read_with_length_prefix, send_with_length_prefix};
use bytes::Bytes;
use prionis_dns_domain::DomainError;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Largest datagram read from the UDP socket.
const MAX_UDP_MESSAGE_SIZE: usize = 4096;

#[derive(Debug, Clone)]
pub struct ListenerOptions {
    pub max_concurrent_requests: usize,
    /// Open TCP connections allowed at once; further clients wait in the
    /// accept backlog.
    pub max_tcp_connections: usize,
    pub tcp_idle_timeout: Duration,
}

impl Default for ListenerOptions {
    fn default() -> Self {
        Self {
            max_concurrent_requests: 1024,
            max_tcp_connections: 128,
            tcp_idle_timeout: Duration::from_secs(10),
        }
    }
}

/// Bound UDP socket and optional TCP listener feeding a [`DnsServerHandler`].
pub struct DnsListener {
    udp: Arc<UdpSocket>,
    tcp: Option<TcpListener>,
    handler: Arc<DnsServerHandler>,
    limiter: Arc<Semaphore>,
    connections: Arc<Semaphore>,
    tcp_idle_timeout: Duration,
}

impl DnsListener {
    /// Binds the sockets. Must be called from within a tokio runtime.
    pub fn bind(
        udp_addr: SocketAddr,
        tcp_addr: Option<SocketAddr>,
        handler: DnsServerHandler,
        options: ListenerOptions,
    ) -> Result<Self, DomainError> {
        let udp = create_udp_socket(udp_addr).map_err(|e| bind_error(udp_addr, e))?;
        let tcp = tcp_addr
            .map(|addr| create_tcp_listener(addr).map_err(|e| bind_error(addr, e)))
            .transpose()?;

        Ok(Self {
            udp: Arc::new(udp),
            tcp,
            handler: Arc::new(handler),
            limiter: Arc::new(Semaphore::new(options.max_concurrent_requests.max(1))),
            connections: Arc::new(Semaphore::new(options.max_tcp_connections.max(1))),
            tcp_idle_timeout: options.tcp_idle_timeout,
        })
    }

    pub fn udp_local_addr(&self) -> Result<SocketAddr, DomainError> {
        self.udp
            .local_addr()
            .map_err(|e| DomainError::IoError(e.to_string()))
    }

    pub fn tcp_local_addr(&self) -> Option<SocketAddr> {
        self.tcp.as_ref().and_then(|l| l.local_addr().ok())
    }

    /// Serves until `shutdown` is cancelled. Requests already being handled
    /// finish on their own tasks.
    pub async fn run(self, shutdown: CancellationToken) {
        let mut join_set: JoinSet<()> = JoinSet::new();

        info!(
            udp = ?self.udp.local_addr().ok(),
            tcp = ?self.tcp_local_addr(),
            max_concurrent_requests = self.limiter.available_permits(),
            max_tcp_connections = self.connections.available_permits(),
            "DNS listener ready"
        );

        if let Some(tcp) = self.tcp {
            join_set.spawn(run_tcp_acceptor(
                tcp,
                self.handler.clone(),
                self.limiter.clone(),
                self.connections,
                self.tcp_idle_timeout,
                shutdown.clone(),
            ));
        }
        join_set.spawn(run_udp_receiver(
            self.udp,
            self.handler,
            self.limiter,
            shutdown,
        ));

        while join_set.join_next().await.is_some() {}
        info!("DNS listener stopped");
    }
}

async fn run_udp_receiver(
    socket: Arc<UdpSocket>,
    handler: Arc<DnsServerHandler>,
    limiter: Arc<Semaphore>,
    shutdown: CancellationToken,
) {
    let mut recv_buf = vec![0u8; MAX_UDP_MESSAGE_SIZE];

    loop {
        // Waiting for a permit before reading leaves excess datagrams in the
        // socket buffer.
        let permit = tokio::select! {
            _ = shutdown.cancelled() => break,
            permit = limiter.clone().acquire_owned() => match permit {
                Ok(permit) => permit,
                Err(_) => break,
            },
        };

        let (len, client) = tokio::select! {
            _ = shutdown.cancelled() => break,
            received = socket.recv_from(&mut recv_buf) => match received {
                Ok(received) => received,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!(error = %e, "UDP recv error");
                    continue;
                }
            },
        };

        let datagram = Bytes::copy_from_slice(&recv_buf[..len]);
        let handler = handler.clone();
        let socket = socket.clone();
        tokio::spawn(async move {
            let _permit = permit;
            if let Outcome::Reply(reply) = handler.handle_datagram(&datagram, client).await {
                if let Err(e) = socket.send_to(&reply, client).await {
                    warn!(client = %client, error = %e, "Failed to send UDP reply");
                }
            }
        });
    }
}

async fn run_tcp_acceptor(
    listener: TcpListener,
    handler: Arc<DnsServerHandler>,
    limiter: Arc<Semaphore>,
    connections: Arc<Semaphore>,
    idle_timeout: Duration,
    shutdown: CancellationToken,
) {
    loop {
        let connection_permit = tokio::select! {
            _ = shutdown.cancelled() => break,
            permit = connections.clone().acquire_owned() => match permit {
                Ok(permit) => permit,
                Err(_) => break,
            },
        };

        let (stream, client) = tokio::select! {
            _ = shutdown.cancelled() => break,
            accepted = listener.accept() => match accepted {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!(error = %e, "TCP accept error");
                    continue;
                }
            },
        };

        if let Err(e) = stream.set_nodelay(true) {
            debug!(client = %client, error = %e, "Failed to set TCP_NODELAY");
        }

        let handler = handler.clone();
        let limiter = limiter.clone();
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            let _connection_permit = connection_permit;
            serve_tcp_connection(stream, client, handler, limiter, idle_timeout, shutdown).await;
        });
    }
}

async fn serve_tcp_connection(
    mut stream: TcpStream,
    client: SocketAddr,
    handler: Arc<DnsServerHandler>,
    limiter: Arc<Semaphore>,
    idle_timeout: Duration,
    shutdown: CancellationToken,
) {
    loop {
        let message = tokio::select! {
            _ = shutdown.cancelled() => break,
            read = tokio::time::timeout(idle_timeout, read_with_length_prefix(&mut stream)) => match read {
                Ok(Ok(Some(message))) => message,
                Ok(Ok(None)) => break,
                Ok(Err(e)) => {
                    debug!(client = %client, error = %e, "Closing TCP connection");
                    break;
                }
                Err(_) => {
                    debug!(client = %client, "TCP connection idle, closing");
                    break;
                }
            },
        };

        let Ok(_permit) = limiter.acquire().await else {
            break;
        };

        if let Outcome::Reply(reply) = handler.handle_stream_message(&message, client).await {
            if let Err(e) = send_with_length_prefix(&mut stream, &reply).await {
                debug!(client = %client, error = %e, "Failed to send TCP reply");
                break;
            }
        }
    }
}

fn create_udp_socket(socket_addr: SocketAddr) -> io::Result<UdpSocket> {
    let socket = Socket::new(domain_for(socket_addr), Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    UdpSocket::from_std(std_socket)
}

fn create_tcp_listener(socket_addr: SocketAddr) -> io::Result<TcpListener> {
    let socket = Socket::new(domain_for(socket_addr), Type::STREAM, Some(Protocol::TCP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

fn domain_for(socket_addr: SocketAddr) -> Domain {
    if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    }
}

fn bind_error(addr: SocketAddr, e: io::Error) -> DomainError {
    error!(address = %addr, error = %e, "Failed to bind DNS socket");
    DomainError::Bind {
        addr: addr.to_string(),
        reason: e.to_string(),
    }
}
