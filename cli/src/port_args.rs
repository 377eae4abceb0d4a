//! Port argument parsing.

use anyhow::{bail, Result};
use tracing::{info, warn};

/// Expand port arguments into a list of ports, in argument order.
///
/// Accepts single ports (`3000`) and inclusive ranges (`3000-3010`). Invalid
/// tokens are skipped with a warning; it is an error only if nothing valid
/// remains.
pub fn parse_ports(args: &[String]) -> Result<Vec<u16>> {
    let mut ports = Vec::new();

    for arg in args {
        let arg = arg.trim();
        if arg.contains('-') {
            match parse_range(arg) {
                Some((start, end)) => {
                    info!(start = start, end = end, "Added port range");
                    ports.extend(start..=end);
                }
                None => warn!(arg = arg, "Skipping invalid port range"),
            }
            continue;
        }

        match parse_port(arg) {
            Some(port) => ports.push(port),
            None => warn!(arg = arg, "Skipping invalid port"),
        }
    }

    if ports.is_empty() {
        bail!("No valid ports provided");
    }
    Ok(ports)
}

fn parse_port(s: &str) -> Option<u16> {
    s.parse::<u16>().ok().filter(|&port| port != 0)
}

fn parse_range(s: &str) -> Option<(u16, u16)> {
    let (start, end) = s.split_once('-')?;
    let start = parse_port(start)?;
    let end = parse_port(end)?;
    (start <= end).then_some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_ports_keep_order() {
        assert_eq!(parse_ports(&args(&["8080", "3000", "5432"])).unwrap(), vec![8080, 3000, 5432]);
    }

    #[test]
    fn test_range_is_inclusive() {
        assert_eq!(parse_ports(&args(&["3000-3003"])).unwrap(), vec![3000, 3001, 3002, 3003]);
        assert_eq!(parse_ports(&args(&["65535-65535"])).unwrap(), vec![65535]);
    }

    #[test]
    fn test_invalid_tokens_skipped() {
        let ports = parse_ports(&args(&["abc", "0", "70000", "3010-3000", "1-2-3", "8080"])).unwrap();
        assert_eq!(ports, vec![8080]);
    }

    #[test]
    fn test_nothing_valid() {
        assert!(parse_ports(&args(&["http", "0-10"])).is_err());
        assert!(parse_ports(&[]).is_err());
    }

    #[test]
    fn test_duplicates_kept() {
        assert_eq!(parse_ports(&args(&["3000", "3000-3001"])).unwrap(), vec![3000, 3000, 3001]);
    }
}
