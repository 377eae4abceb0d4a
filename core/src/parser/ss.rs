//! Parsers for `ss` output (Linux, used when `lsof` is not installed).
//!
//! Expected ss output format (`-H` suppresses the header):
//! ```text
//! LISTEN     0          4096           [::ffff:127.0.0.1]:63342                    *:*         users:(("rustrover",pid=53561,fd=54))
//! ```

use regex::Regex;

use super::split_address;
use crate::domain::SocketOwner;
use crate::error::{Error, Result};

/// One `("name",pid=N,fd=M)` entry of the users column.
const USER_ENTRY_PATTERN: &str = r#"\("([^"]+)",pid=(\d+),fd=(\d+)\)"#;

/// Index of the local `address:port` column.
const LOCAL_COLUMN: usize = 3;
/// Start of the process column. Names are printed unquoted inside it and may
/// contain spaces, so everything from here to the end of the row belongs to it.
const USERS_PREFIX: &str = "users:";

/// Split a row into its whitespace-separated socket columns and the users column.
fn split_row(line: &str) -> Option<(Vec<&str>, &str)> {
    let start = line.find(USERS_PREFIX)?;
    let (columns, users) = line.split_at(start);
    Some((columns.split_whitespace().collect(), users))
}

fn users_regex() -> Result<Regex> {
    Regex::new(USER_ENTRY_PATTERN)
        .map_err(|e| Error::ParseError(format!("Invalid users pattern: {}", e)))
}

/// Find the process holding a port in `ss -Htlnp sport = :<port>` output.
///
/// The first row carrying a `users:` entry wins.
pub fn parse_socket_owner(output: &str, port: u16) -> Result<SocketOwner> {
    let regex = users_regex()?;

    for line in output.lines() {
        let Some((_, users)) = split_row(line) else {
            continue;
        };

        let Some(caps) = regex.captures(users) else {
            continue;
        };

        let Ok(pid) = caps[2].parse::<u32>() else {
            continue;
        };

        return Ok(SocketOwner::new(&caps[1], pid));
    }

    Err(Error::NoProcessFound { tool: "ss", port })
}

/// Collect the local ports of every socket owned by `pid` in `ss -Htanp` output.
///
/// Ports are returned in first-seen order without duplicates.
pub fn parse_process_ports(output: &str, pid: u32) -> Result<Vec<u16>> {
    let regex = users_regex()?;
    let mut ports = Vec::new();

    for line in output.lines() {
        let Some((columns, users)) = split_row(line) else {
            continue;
        };
        if columns.len() <= LOCAL_COLUMN {
            continue;
        }

        // A socket shared by several processes lists all of them.
        let owned = regex
            .captures_iter(users)
            .any(|caps| caps[2].parse::<u32>().ok() == Some(pid));
        if !owned {
            continue;
        }

        let Some((_, port)) = split_address(columns[LOCAL_COLUMN]) else {
            continue;
        };

        if !ports.contains(&port) {
            ports.push(port);
        }
    }

    Ok(ports)
}
