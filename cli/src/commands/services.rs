//! Well-known development ports and how much it hurts to lose them.

use portscout_core::PortStatus;

/// Guess what usually runs on a port.
pub fn guess_service(port: u16) -> &'static str {
    match port {
        3000 | 4200 | 5173 => "frontend",
        5000 | 8000 | 8080 | 9000 => "backend",
        8501 => "streamlit",
        5432 => "database",
        6379 => "cache",
        9200 => "search",
        27017 => "mongodb",
        3306 => "mysql",
        _ => "service",
    }
}

/// Severity of a conflict on this port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    pub fn of(port: u16) -> Self {
        match port {
            5432 | 3306 | 27017 => Impact::High,
            6379 | 9200 | 8501 => Impact::Medium,
            _ => Impact::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Impact::High => "HIGH",
            Impact::Medium => "MEDIUM",
            Impact::Low => "LOW",
        }
    }

    /// Longer wording used in the detailed report.
    pub fn describe(port: u16) -> &'static str {
        match port {
            5432 | 3306 | 27017 => "HIGH - Database service",
            6379 | 9200 => "MEDIUM - Cache/Search service",
            8501 => "MEDIUM - Streamlit application",
            _ => "LOW - Development service",
        }
    }
}

/// What stopping the holder would cost.
pub fn termination_risk(process_name: &str) -> &'static str {
    match process_name {
        "postgres" | "mysql" | "mongod" => "Data loss if terminated",
        "redis" => "Session data loss",
        "python" | "node" | "java" => "Service interruption",
        _ => "Minimal impact",
    }
}

/// Kind of resource behind an occupied port.
pub fn resource_kind(status: &PortStatus) -> &'static str {
    if status.is_available {
        return "Available";
    }

    match status.port {
        8501 => return "Streamlit App",
        5173 => return "Vite Dev Server",
        8000 => return "Python/Backend",
        _ => {}
    }

    match status.process_name.as_str() {
        "postgres" | "mysql" | "mongod" => "Database",
        "redis" => "Cache",
        "node" | "python" | "java" => "Application",
        _ => "System",
    }
}

/// Port to move a conflicting service to.
///
/// This is a suggestion only; the returned port is not probed.
pub fn alternative_port(port: u16) -> u16 {
    port.checked_add(1).unwrap_or(port - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_service() {
        assert_eq!(guess_service(5173), "frontend");
        assert_eq!(guess_service(8080), "backend");
        assert_eq!(guess_service(8501), "streamlit");
        assert_eq!(guess_service(27017), "mongodb");
        assert_eq!(guess_service(1234), "service");
    }

    #[test]
    fn test_impact() {
        assert_eq!(Impact::of(5432), Impact::High);
        assert_eq!(Impact::of(8501), Impact::Medium);
        assert_eq!(Impact::of(3000).label(), "LOW");
        assert_eq!(Impact::describe(9200), "MEDIUM - Cache/Search service");
    }

    #[test]
    fn test_resource_kind() {
        let mut status = PortStatus::unattributed(5432, "denied");
        assert_eq!(resource_kind(&status), "System");
        status.process_name = "postgres".to_string();
        assert_eq!(resource_kind(&status), "Database");

        assert_eq!(resource_kind(&PortStatus::unattributed(8501, "x")), "Streamlit App");
        assert_eq!(resource_kind(&PortStatus::available(8501)), "Available");
    }

    #[test]
    fn test_alternative_port() {
        assert_eq!(alternative_port(3000), 3001);
        assert_eq!(alternative_port(5432), 5433);
        assert_eq!(alternative_port(65535), 65534);
    }

    #[test]
    fn test_termination_risk() {
        assert_eq!(termination_risk("redis"), "Session data loss");
        assert_eq!(termination_risk("nginx"), "Minimal impact");
    }
}
