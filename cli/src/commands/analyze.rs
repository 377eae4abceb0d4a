//! Analyze command - describe the process behind a pid.

use std::fmt::Write;

use anyhow::{Context, Result};
use portscout_core::{ConfigStore, ProcessAnalysis, ProcessAnalyzer};

pub async fn run(pid: u32, json: bool) -> Result<()> {
    let config = ConfigStore::new()?.load().await?;
    let analyzer = ProcessAnalyzer::for_platform(config.tools);

    let analysis = analyzer
        .analyze(pid)
        .await
        .with_context(|| format!("Failed to analyze process {}", pid))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", render(&analysis));
    }
    Ok(())
}

fn render(analysis: &ProcessAnalysis) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "PROCESS {} ({})", analysis.pid, analysis.name);
    let _ = writeln!(out, "  Command:    {}", analysis.command_line);
    let _ = writeln!(out, "  User:       {}", analysis.user);
    let _ = writeln!(
        out,
        "  Type:       {} / {}",
        analysis.technology.as_str(),
        analysis.service_type.as_str()
    );

    if !analysis.working_dir.is_empty() {
        let _ = writeln!(out, "  Directory:  {}", analysis.working_dir);
    }

    if analysis.detected_ports.is_empty() {
        out.push_str("  Ports:      none\n");
    } else {
        let ports: Vec<String> = analysis.detected_ports.iter().map(u16::to_string).collect();
        let _ = writeln!(out, "  Ports:      {}", ports.join(", "));
    }

    if let Some(project) = &analysis.project_path {
        let _ = writeln!(out, "  Project:    {}", project.display());
        for marker in &analysis.config_files {
            let _ = writeln!(out, "    - {}", marker.display());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use portscout_core::{ServiceType, Technology};
    use std::path::PathBuf;

    #[test]
    fn test_render() {
        let analysis = ProcessAnalysis {
            pid: 1234,
            name: "node".to_string(),
            command_line: "node server.js".to_string(),
            working_dir: "/srv/shop/web".to_string(),
            user: "alice".to_string(),
            technology: Technology::Node,
            service_type: ServiceType::Web,
            detected_ports: vec![3000, 9229],
            project_path: Some(PathBuf::from("/srv/shop")),
            config_files: vec![PathBuf::from("/srv/shop/package.json")],
        };

        let out = render(&analysis);
        assert!(out.starts_with("PROCESS 1234 (node)"));
        assert!(out.contains("Type:       node / web"));
        assert!(out.contains("Ports:      3000, 9229"));
        assert!(out.contains("Project:    /srv/shop"));
        assert!(out.contains("- /srv/shop/package.json"));
    }

    #[test]
    fn test_render_without_project() {
        let analysis = ProcessAnalysis {
            pid: 7,
            name: "sshd".to_string(),
            command_line: "/usr/sbin/sshd -D".to_string(),
            working_dir: String::new(),
            user: "root".to_string(),
            technology: Technology::Unknown,
            service_type: ServiceType::System,
            detected_ports: Vec::new(),
            project_path: None,
            config_files: Vec::new(),
        };

        let out = render(&analysis);
        assert!(out.contains("Ports:      none"));
        assert!(!out.contains("Directory"));
        assert!(!out.contains("Project"));
    }
}
