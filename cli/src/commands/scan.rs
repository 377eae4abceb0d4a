//! Scan command - probe ports and report conflicts.

use std::fmt::Write;

use anyhow::Result;
use colored::Colorize;
use portscout_core::{ConfigStore, OutputFormat, PortProbeService, PortStatus};

use super::services::{alternative_port, guess_service, resource_kind, termination_risk, Impact};
use crate::port_args::parse_ports;

const RULE: &str = "──────────────────────────────";

pub async fn run(
    args: &[String],
    format: Option<OutputFormat>,
    project: Option<String>,
    json: bool,
) -> Result<()> {
    let ports = parse_ports(args)?;

    let config = ConfigStore::new()?.load().await?;
    let format = if json {
        OutputFormat::Json
    } else {
        format.unwrap_or(config.default_format)
    };
    let project = project.unwrap_or(config.project_name);

    let service = PortProbeService::for_platform(config.tools);
    let statuses = service.scan(&ports).await;

    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&statuses)?,
        OutputFormat::Simple => render_simple(&statuses),
        OutputFormat::Detailed => render_detailed(&statuses, &project),
        OutputFormat::Table => render_table(&statuses, &project),
    };
    println!("{}", output);
    Ok(())
}

fn conflicts(statuses: &[PortStatus]) -> impl Iterator<Item = &PortStatus> {
    statuses.iter().filter(|s| s.is_conflict())
}

fn all_clear(out: &mut String) {
    out.push_str("• All ports are available and ready for use!\n");
    out.push_str("• No conflicts detected - development environment is clear\n");
}

fn status_label(status: &PortStatus) -> &'static str {
    if status.is_available {
        "READY"
    } else {
        "CONFLICT"
    }
}

/// One line per port.
pub fn render_simple(statuses: &[PortStatus]) -> String {
    let mut out = format!("Scanning {} port(s)...\n\n", statuses.len());
    for status in statuses {
        let _ = match (&status.error, status.is_available) {
            (_, true) => writeln!(out, "Port {}: Available", status.port),
            (Some(err), false) => writeln!(out, "Port {}: Error - {}", status.port, err),
            (None, false) => writeln!(
                out,
                "Port {}: Occupied by {} (PID {})",
                status.port, status.process_name, status.pid
            ),
        };
    }
    out
}

/// Brief conflict table.
pub fn render_table(statuses: &[PortStatus], project: &str) -> String {
    let mut out = format!("PORT CONFLICT ANALYSIS: {}\n{}\n\n", project, RULE);

    let _ = writeln!(
        out,
        "{:<12} {:<6} {:<10} {:<16} {:<8} {}",
        "SERVICE", "PORT", "STATUS", "PROCESS", "IMPACT", "RESOURCES"
    );
    let _ = writeln!(
        out,
        "{:<12} {:<6} {:<10} {:<16} {:<8} {}",
        "-------", "----", "------", "-------", "------", "---------"
    );

    for status in statuses {
        let process = if status.is_available {
            "-".to_string()
        } else if status.is_attributed() {
            format!("{}:{}", status.process_name, status.pid)
        } else {
            "unknown".to_string()
        };
        let impact = if status.is_available {
            "-"
        } else {
            Impact::of(status.port).label()
        };

        let _ = writeln!(
            out,
            "{:<12} {:<6} {:<10} {:<16} {:<8} {}",
            guess_service(status.port),
            status.port,
            status_label(status),
            truncate(&process, 16),
            impact,
            resource_kind(status)
        );
    }

    let count = conflicts(statuses).count();
    if count == 0 {
        all_clear(&mut out);
        return out;
    }

    let _ = writeln!(out, "\nCONFLICT RESOLUTION ({} conflicts):", count);
    let _ = writeln!(out, "{}: Use alternative ports       RECOMMENDED", "1. PORT MAPPING".green());
    let _ = writeln!(out, "{}: Restart on new ports     LOW RISK", "2. SERVICE RESTART".yellow());
    let _ = writeln!(out, "{}: Stop services        HIGH RISK", "3. PROCESS TERMINATION".red());
    out
}

/// Full report with per-conflict impact, risk and resolution paths.
pub fn render_detailed(statuses: &[PortStatus], project: &str) -> String {
    let mut out = format!("DETAILED PORT ANALYSIS: {}\n{}\n\n", project, RULE);

    let _ = writeln!(
        out,
        "{:<12} {:<6} {:<10} {:<16} {:<7} {:<12} {:<8} {}",
        "SERVICE", "PORT", "STATUS", "PROCESS", "PID", "USER", "MEMORY", "STARTED"
    );
    let _ = writeln!(
        out,
        "{:<12} {:<6} {:<10} {:<16} {:<7} {:<12} {:<8} {}",
        "-------", "----", "------", "-------", "---", "----", "------", "-------"
    );

    for status in statuses {
        let (process, pid, user, memory, started) = if status.is_available {
            ("-", "-".to_string(), "-", "-", "-")
        } else {
            (
                or_unknown(&status.process_name),
                if status.pid == 0 { "-".to_string() } else { status.pid.to_string() },
                or_unknown(&status.user),
                or_unknown(&status.memory_usage),
                or_unknown(&status.start_time),
            )
        };

        let _ = writeln!(
            out,
            "{:<12} {:<6} {:<10} {:<16} {:<7} {:<12} {:<8} {}",
            guess_service(status.port),
            status.port,
            status_label(status),
            truncate(process, 16),
            pid,
            truncate(user, 12),
            memory,
            started
        );
    }

    out.push_str("\nIMPACT ANALYSIS:\n");
    let count = conflicts(statuses).count();
    if count == 0 {
        all_clear(&mut out);
        return out;
    }

    for status in conflicts(statuses) {
        let heading = format!(
            "{} ({}): {}",
            guess_service(status.port),
            status.port,
            Impact::describe(status.port)
        );
        let _ = writeln!(out, "• {}", heading.red());
        if status.is_attributed() {
            let _ = writeln!(out, "  - Process: {} (PID {})", status.process_name, status.pid);
            let _ = writeln!(out, "  - User: {}, Memory: {}", status.user, status.memory_usage);
            let _ = writeln!(out, "  - Started: {}", status.start_time);
        } else if let Some(err) = &status.error {
            let _ = writeln!(out, "  - Owner unknown: {}", err);
        }
        let risk = format!("Risk: {}", termination_risk(&status.process_name));
        let _ = writeln!(out, "  - {}\n", risk.yellow());
    }

    let _ = writeln!(out, "DETAILED RESOLUTION PATHS ({} conflicts):", count);
    let _ = writeln!(out, "\n{}", "1. PORT MAPPING (RECOMMENDED)".green());
    for status in conflicts(statuses) {
        let _ = writeln!(out, "   {} → {}", status.port, alternative_port(status.port));
    }
    out.push_str("   Impact: Zero downtime, update configuration files\n");

    let _ = writeln!(out, "\n{}", "2. SERVICE RESTART (LOW RISK)".yellow());
    out.push_str("   Restart services on alternative ports\n");
    out.push_str("   Impact: Brief service interruption (1-2 minutes)\n");

    let _ = writeln!(out, "\n{}", "3. PROCESS TERMINATION (HIGH RISK)".red());
    for status in conflicts(statuses).filter(|s| s.is_attributed()) {
        let _ = writeln!(
            out,
            "   Stop: {} (PID {}) - {}",
            status.process_name,
            status.pid,
            termination_risk(&status.process_name)
        );
    }
    out.push_str("   Impact: Service disruption, potential data loss\n");

    let mut details = conflicts(statuses)
        .filter(|s| !s.command_line.is_empty() && s.command_line != portscout_core::domain::UNKNOWN)
        .peekable();
    if details.peek().is_some() {
        out.push_str("\nPROCESS DETAILS:\n");
        for status in details {
            let _ = writeln!(out, "• {} (PID {}):", status.process_name, status.pid);
            let _ = writeln!(out, "  Command: {}", status.command_line);
        }
    }

    out
}

fn or_unknown(value: &str) -> &str {
    if value.is_empty() {
        portscout_core::domain::UNKNOWN
    } else {
        value
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max - 1).collect();
        format!("{}…", head)
    }
}
