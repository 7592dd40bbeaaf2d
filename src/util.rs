// Small shared helpers.

use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Default port of the desktop agent's websocket listener.
pub const DEFAULT_PORT: u16 = 8765;

/// Split user input like "192.168.1.100" or "192.168.1.100:9000" into host
/// and port, falling back to the agent's default port.
pub fn parse_addr(input: &str) -> (String, u16) {
    let input = input.trim();
    match input.rsplit_once(':') {
        Some((host, port)) if !host.is_empty() => match port.parse::<u16>() {
            Ok(port) => (host.to_string(), port),
            Err(_) => (input.to_string(), DEFAULT_PORT),
        },
        _ => (input.to_string(), DEFAULT_PORT),
    }
}

/// Prepend https:// when the user typed a bare domain, matching what the
/// agent's browser controller expects.
pub fn normalize_url(url: &str) -> String {
    let url = url.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_addr_defaults_the_port() {
        assert_eq!(parse_addr("192.168.1.100"), ("192.168.1.100".into(), 8765));
        assert_eq!(parse_addr("  10.0.0.2  "), ("10.0.0.2".into(), 8765));
    }

    #[test]
    fn parse_addr_honors_an_explicit_port() {
        assert_eq!(parse_addr("192.168.1.100:9000"), ("192.168.1.100".into(), 9000));
    }

    #[test]
    fn parse_addr_keeps_malformed_ports_as_part_of_the_host() {
        assert_eq!(parse_addr("pc.local:abc"), ("pc.local:abc".into(), 8765));
    }

    #[test]
    fn normalize_url_prepends_a_scheme_only_when_missing() {
        assert_eq!(normalize_url("youtube.com"), "https://youtube.com");
        assert_eq!(normalize_url("https://github.com"), "https://github.com");
        assert_eq!(normalize_url("http://plain.example"), "http://plain.example");
    }
}
