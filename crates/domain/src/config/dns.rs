use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Also answer over TCP on the DNS port
    #[serde(default = "default_true")]
    pub tcp_enabled: bool,

    /// Idle timeout for TCP connections, in seconds
    #[serde(default = "default_tcp_timeout_secs")]
    pub tcp_timeout_secs: u64,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            tcp_enabled: true,
            tcp_timeout_secs: default_tcp_timeout_secs(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_tcp_timeout_secs() -> u64 {
    10
}
