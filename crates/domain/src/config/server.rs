use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    /// Also accept length-prefixed queries over TCP on the same port.
    #[serde(default = "default_true")]
    pub tcp_enabled: bool,

    /// Upper bound on requests handled at once across both transports.
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,

    /// Open TCP connections allowed at once.
    #[serde(default = "default_max_tcp_connections")]
    pub max_tcp_connections: usize,

    #[serde(default = "default_udp_max_response_size")]
    pub udp_max_response_size: usize,

    #[serde(default = "default_tcp_idle_timeout_secs")]
    pub tcp_idle_timeout_secs: u64,
}

impl ServerConfig {
    pub fn dns_addr(&self) -> String {
        if self.bind_address.contains(':') {
            format!("[{}]:{}", self.bind_address, self.dns_port)
        } else {
            format!("{}:{}", self.bind_address, self.dns_port)
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            dns_port: default_dns_port(),
            tcp_enabled: true,
            max_concurrent_requests: default_max_concurrent_requests(),
            max_tcp_connections: default_max_tcp_connections(),
            udp_max_response_size: default_udp_max_response_size(),
            tcp_idle_timeout_secs: default_tcp_idle_timeout_secs(),
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_dns_port() -> u16 {
    53
}

fn default_true() -> bool {
    true
}

fn default_max_concurrent_requests() -> usize {
    1024
}

fn default_max_tcp_connections() -> usize {
    128
}

fn default_udp_max_response_size() -> usize {
    512
}

fn default_tcp_idle_timeout_secs() -> u64 {
    10
}
