//! Pure parsers for external tool output.
//!
//! Nothing in here runs a command: every function takes the captured text and
//! returns structured records, so parsing is tested against sample output.

pub mod lsof;
pub mod ss;

/// Parse an address:port string.
///
/// Handles multiple address formats:
/// - IPv4: "127.0.0.1:3000" or "*:8080"
/// - IPv6: "\[::1]:3000" or "\[fe80::1]:8080"
pub fn split_address(address: &str) -> Option<(String, u16)> {
    if address.starts_with('[') {
        let bracket_end = address.find(']')?;
        let port_str = address[bracket_end + 1..].strip_prefix(':')?;
        let port: u16 = port_str.parse().ok()?;
        Some((address[..=bracket_end].to_string(), port))
    } else {
        let last_colon = address.rfind(':')?;
        let addr = &address[..last_colon];
        let port: u16 = address[last_colon + 1..].parse().ok()?;
        let addr = if addr.is_empty() { "*" } else { addr };
        Some((addr.to_string(), port))
    }
}

/// Extract the single value printed by `ps -o <field>=`.
///
/// Returns `None` for blank output (no such process, or the field is empty).
pub fn single_value(output: &str) -> Option<String> {
    let value = output.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_ipv4_address() {
        assert_eq!(split_address("127.0.0.1:3000"), Some(("127.0.0.1".to_string(), 3000)));
        assert_eq!(split_address("*:8080"), Some(("*".to_string(), 8080)));
        assert_eq!(split_address(":8080"), Some(("*".to_string(), 8080)));
    }

    #[test]
    fn test_split_ipv6_address() {
        assert_eq!(split_address("[::1]:3000"), Some(("[::1]".to_string(), 3000)));
        assert_eq!(
            split_address("[::ffff:127.0.0.1]:63342"),
            Some(("[::ffff:127.0.0.1]".to_string(), 63342))
        );
        assert_eq!(split_address("[::1]"), None);
    }

    #[test]
    fn test_split_rejects_wildcard_port() {
        assert_eq!(split_address("*:*"), None);
        assert_eq!(split_address("no-port"), None);
    }

    #[test]
    fn test_single_value() {
        assert_eq!(single_value("  alice\n"), Some("alice".to_string()));
        assert_eq!(single_value("\n"), None);
        assert_eq!(
            single_value("Mon Oct  5 09:12:01 2026\n"),
            Some("Mon Oct  5 09:12:01 2026".to_string())
        );
    }
}
