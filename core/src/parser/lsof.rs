//! Parsers for `lsof` output.
//!
//! Expected tabular format (`lsof -i -P -n`):
//! ```text
//! COMMAND    PID  USER   FD   TYPE             DEVICE SIZE/OFF NODE NAME
//! node     34805  code   19u  IPv6 0x3d8015e195af1f3f      0t0  TCP [::1]:3000 (LISTEN)
//! ```

use crate::domain::SocketOwner;
use crate::error::{Error, Result};

/// Column index of NAME (the network address) in a data row.
const NAME_COLUMN: usize = 8;

/// Find the process holding a port in `lsof -i :<port>` output.
///
/// The header line is skipped and the first data row with a numeric PID
/// wins; further rows (e.g. the IPv6 twin of an IPv4 socket) are ignored.
pub fn parse_socket_owner(output: &str, port: u16) -> Result<SocketOwner> {
    for line in output.lines().skip(1) {
        let mut fields = line.split_whitespace();
        let (Some(command), Some(pid)) = (fields.next(), fields.next()) else {
            continue;
        };

        let Ok(pid) = pid.parse::<u32>() else {
            continue;
        };

        return Ok(SocketOwner::new(decode_escaped(command), pid));
    }

    Err(Error::NoProcessFound { tool: "lsof", port })
}

/// Collect the ports of every network descriptor in `lsof -p <pid> -i` output.
///
/// Ports are returned in first-seen order without duplicates. Rows without a
/// numeric port (such as `*:*`) are skipped.
pub fn parse_descriptor_ports(output: &str) -> Vec<u16> {
    let mut ports = Vec::new();

    for line in output.lines().skip(1) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() <= NAME_COLUMN {
            continue;
        }

        let address = fields[NAME_COLUMN..].join(" ");
        let Some(port) = port_from_address(&address) else {
            continue;
        };

        if !ports.contains(&port) {
            ports.push(port);
        }
    }

    ports
}

/// Extract the port from an lsof NAME field.
///
/// Takes the text after the last colon and drops a trailing state such as
/// `(LISTEN)`. Returns `None` for a wildcard port or anything non-numeric.
///
/// ```
/// use portscout_core::parser::lsof::port_from_address;
///
/// assert_eq!(port_from_address("*:3000 (LISTEN)"), Some(3000));
/// assert_eq!(port_from_address("*:*"), None);
/// ```
pub fn port_from_address(address: &str) -> Option<u16> {
    let (_, tail) = address.rsplit_once(':')?;
    let port = tail
        .split(|c: char| c.is_whitespace() || c == '(')
        .next()
        .unwrap_or_default()
        .trim();

    if port == "*" {
        return None;
    }
    port.parse().ok()
}

/// Read the working directory from `lsof -a -p <pid> -d cwd -Fn` output.
///
/// Field output is one field per line, prefixed by its identifier; the
/// path is on the first `n` line.
pub fn parse_cwd(output: &str) -> Option<String> {
    output
        .lines()
        .filter_map(|line| line.strip_prefix('n'))
        .find(|path| !path.is_empty())
        .map(str::to_string)
}

/// Decode escaped characters in lsof output.
///
/// lsof escapes special characters in process names as `\xNN`
/// (e.g. `\x20` for a space). Invalid escapes are kept verbatim.
pub fn decode_escaped(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find("\\x") {
        result.push_str(&rest[..pos]);
        let after = &rest[pos + 2..];
        let hex = after.get(..2).filter(|h| h.chars().all(|c| c.is_ascii_hexdigit()));

        match hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
            Some(byte) => {
                result.push(byte as char);
                rest = &after[2..];
            }
            None => {
                result.push_str("\\x");
                rest = after;
            }
        }
    }

    result.push_str(rest);
    result
}
