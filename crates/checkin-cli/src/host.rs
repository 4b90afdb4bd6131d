//! Host facts reported with a check-in: name, internal and external address.

use std::net::{IpAddr, Ipv4Addr, UdpSocket};
use std::time::Duration;

use tracing::debug;

use checkin_core::config::ClientConfig;

/// Reported when no echo service returns a usable address.
pub const UNKNOWN_EXTERNAL_IP: &str = "Unknown";

/// Any routable address works; connecting a UDP socket sends no packets.
const ROUTE_PROBE_ADDR: &str = "8.8.8.8:53";

/// Host name from the `hostname` command, then the system call, then `"unknown"`.
pub async fn hostname() -> String {
    match hostname_from_command("hostname").await {
        Some(name) => name,
        None => system_hostname(),
    }
}

async fn hostname_from_command(program: &str) -> Option<String> {
    match tokio::process::Command::new(program).output().await {
        Ok(out) if out.status.success() => {
            let name = String::from_utf8_lossy(&out.stdout).trim().to_string();
            (!name.is_empty()).then_some(name)
        }
        Ok(out) => {
            debug!(program, status = %out.status, "hostname command failed");
            None
        }
        Err(e) => {
            debug!(program, error = %e, "hostname command unavailable");
            None
        }
    }
}

fn system_hostname() -> String {
    hostname::get()
        .map(|h| h.to_string_lossy().trim().to_string())
        .ok()
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Source address the kernel picks for outbound IPv4 traffic.
pub fn primary_ipv4() -> Option<Ipv4Addr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect(ROUTE_PROBE_ADDR).ok()?;
    match socket.local_addr().ok()?.ip() {
        IpAddr::V4(addr) if !addr.is_unspecified() => Some(addr),
        _ => None,
    }
}

/// Whether `ip` satisfies the configured network range.
pub fn matches_network(ip: &str, config: &ClientConfig) -> bool {
    config.accepts_any_network() || ip.contains(config.network_range.trim())
}

/// Poll for an internal address inside the configured range.
///
/// Gives up after `network_wait_max_attempts` and returns the last address
/// seen, which may be outside the range or empty.
pub async fn wait_for_internal_ip(config: &ClientConfig) -> String {
    let attempts = config.network_wait_max_attempts.max(1);
    let interval = Duration::from_secs(config.network_wait_interval_seconds);
    let mut last = String::new();

    for attempt in 1..=attempts {
        if let Some(addr) = primary_ipv4() {
            last = addr.to_string();
            if matches_network(&last, config) {
                return last;
            }
        }

        if attempt < attempts {
            debug!(attempt, last = %last, range = %config.network_range, "Waiting for internal address");
            tokio::time::sleep(interval).await;
        }
    }

    last
}

/// Extract an IPv4 address from an echo service response body.
pub fn parse_ipv4_body(body: &str) -> Option<Ipv4Addr> {
    body.lines().next()?.trim().parse().ok()
}

/// First public IPv4 address reported by the configured echo services.
pub async fn external_ip(http: &reqwest::Client, services: &[String]) -> String {
    for url in services {
        let body = match http.get(url).send().await {
            Ok(response) if response.status().is_success() => response.text().await,
            Ok(response) => {
                debug!(url = %url, status = %response.status(), "External IP service refused");
                continue;
            }
            Err(e) => {
                debug!(url = %url, error = %e, "External IP service unreachable");
                continue;
            }
        };

        match body.ok().as_deref().and_then(parse_ipv4_body) {
            Some(addr) => return addr.to_string(),
            None => debug!(url = %url, "External IP service returned no IPv4 address"),
        }
    }

    UNKNOWN_EXTERNAL_IP.to_string()
}
