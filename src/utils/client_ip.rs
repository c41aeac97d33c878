//! Client address resolution for visit records.

use axum::http::HeaderMap;
use std::net::SocketAddr;

const X_FORWARDED_FOR: &str = "x-forwarded-for";
const X_REAL_IP: &str = "x-real-ip";

/// Resolves the client IP for a request.
///
/// When `behind_proxy` is set, the first non-empty entry of `X-Forwarded-For`
/// wins, then `X-Real-IP`. Otherwise, or when neither header is usable, the
/// peer socket address is used. Proxy headers are only trustworthy when a
/// reverse proxy overwrites them, so keep `behind_proxy` off for direct exposure.
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr, behind_proxy: bool) -> String {
    if behind_proxy {
        let forwarded = headers
            .get(X_FORWARDED_FOR)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').map(str::trim).find(|ip| !ip.is_empty()));

        if let Some(ip) = forwarded {
            return ip.to_string();
        }

        let real_ip = headers
            .get(X_REAL_IP)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|ip| !ip.is_empty());

        if let Some(ip) = real_ip {
            return ip.to_string();
        }
    }

    peer.ip().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn peer() -> SocketAddr {
        "10.0.0.7:5555".parse().unwrap()
    }

    #[test]
    fn test_peer_address_without_proxy() {
        let mut headers = HeaderMap::new();
        headers.insert(X_FORWARDED_FOR, HeaderValue::from_static("203.0.113.9"));

        assert_eq!(client_ip(&headers, peer(), false), "10.0.0.7");
    }

    #[test]
    fn test_forwarded_for_first_entry() {
        let mut headers = HeaderMap::new();
        headers.insert(
            X_FORWARDED_FOR,
            HeaderValue::from_static("203.0.113.9, 198.51.100.1"),
        );

        assert_eq!(client_ip(&headers, peer(), true), "203.0.113.9");
    }

    #[test]
    fn test_real_ip_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(X_REAL_IP, HeaderValue::from_static("198.51.100.4"));

        assert_eq!(client_ip(&headers, peer(), true), "198.51.100.4");
    }

    #[test]
    fn test_behind_proxy_without_headers() {
        assert_eq!(client_ip(&HeaderMap::new(), peer(), true), "10.0.0.7");
    }
}
