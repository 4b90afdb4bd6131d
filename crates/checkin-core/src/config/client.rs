//! Check-in client configuration.

use serde::{Deserialize, Serialize};

/// Settings used by `checkin send` when gathering and posting host facts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Full URL of the check-in endpoint.
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Prefix the internal address must contain before it is reported.
    /// `"ANY"` or empty accepts the first address found.
    #[serde(default = "default_network_range")]
    pub network_range: String,
    /// How many times to look for a matching internal address.
    #[serde(default = "default_wait_attempts")]
    pub network_wait_max_attempts: u32,
    /// Pause between internal address lookups, in seconds.
    #[serde(default = "default_wait_interval")]
    pub network_wait_interval_seconds: u64,
    /// Timeout for each outbound HTTP request, in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Plain-text services echoing the caller's public IPv4 address, tried in order.
    #[serde(default = "default_external_ip_services")]
    pub external_ip_services: Vec<String>,
}

impl ClientConfig {
    /// Whether any internal address is acceptable.
    pub fn accepts_any_network(&self) -> bool {
        let range = self.network_range.trim();
        range.is_empty() || range.eq_ignore_ascii_case("ANY")
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            network_range: default_network_range(),
            network_wait_max_attempts: default_wait_attempts(),
            network_wait_interval_seconds: default_wait_interval(),
            request_timeout_seconds: default_request_timeout(),
            external_ip_services: default_external_ip_services(),
        }
    }
}

fn default_server_url() -> String {
    "http://127.0.0.1:8080/log-ips.php".to_string()
}

fn default_network_range() -> String {
    "ANY".to_string()
}

fn default_wait_attempts() -> u32 {
    24
}

fn default_wait_interval() -> u64 {
    5
}

fn default_request_timeout() -> u64 {
    5
}

fn default_external_ip_services() -> Vec<String> {
    vec![
        "https://api.ipify.org".to_string(),
        "https://ifconfig.me/ip".to_string(),
        "https://icanhazip.com".to_string(),
        "https://checkip.amazonaws.com".to_string(),
        "https://ipinfo.io/ip".to_string(),
    ]
}
