//! Technology and service-type classification of processes.
//!
//! Classification is a pair of lookups over lower-cased process name and
//! command line. Technology comes from [`TECHNOLOGY_RULES`], an ordered table
//! where the first matching rule wins; the service type is then derived from
//! the technology (and, for language runtimes, the command line).

use serde::{Deserialize, Serialize};

/// Coarse technology behind a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Technology {
    Node,
    Python,
    Postgres,
    Mysql,
    Mongodb,
    Redis,
    Memcached,
    Java,
    Go,
    Browser,
    #[default]
    Unknown,
}

impl Technology {
    pub fn as_str(&self) -> &'static str {
        match self {
            Technology::Node => "node",
            Technology::Python => "python",
            Technology::Postgres => "postgres",
            Technology::Mysql => "mysql",
            Technology::Mongodb => "mongodb",
            Technology::Redis => "redis",
            Technology::Memcached => "memcached",
            Technology::Java => "java",
            Technology::Go => "go",
            Technology::Browser => "browser",
            Technology::Unknown => "unknown",
        }
    }

    /// Language runtimes whose processes may be either servers or one-off tools.
    pub fn is_runtime(&self) -> bool {
        matches!(
            self,
            Technology::Node | Technology::Python | Technology::Go | Technology::Java
        )
    }
}

impl std::fmt::Display for Technology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What role the process plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Web,
    Cli,
    Database,
    Cache,
    Browser,
    #[default]
    System,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Web => "web",
            ServiceType::Cli => "cli",
            ServiceType::Database => "database",
            ServiceType::Cache => "cache",
            ServiceType::Browser => "browser",
            ServiceType::System => "system",
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower-cased inputs a rule is evaluated against.
#[derive(Debug, Clone)]
pub struct Subject {
    pub name: String,
    pub command: String,
}

impl Subject {
    pub fn new(name: &str, command_line: &str) -> Self {
        Self {
            name: name.to_lowercase(),
            command: command_line.to_lowercase(),
        }
    }

    fn command_has_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.command.contains(k))
    }

    fn name_or_command_has_any(&self, keywords: &[&str]) -> bool {
        keywords
            .iter()
            .any(|k| self.name.contains(k) || self.command.contains(k))
    }
}

/// One entry of the technology rule table.
pub struct TechnologyRule {
    pub technology: Technology,
    pub matches: fn(&Subject) -> bool,
}

/// Technology rules in precedence order.
///
/// Database and cache rules sit before `go` because names like `mongod`
/// contain it; `go` refuses anything mentioning `google`.
pub const TECHNOLOGY_RULES: &[TechnologyRule] = &[
    TechnologyRule {
        technology: Technology::Node,
        matches: |s| s.command_has_any(&["node", "npm", "npx"]) || s.name == "node",
    },
    TechnologyRule {
        technology: Technology::Python,
        matches: |s| s.command_has_any(&["python", "streamlit", "fastapi", "flask", "django"]),
    },
    TechnologyRule {
        technology: Technology::Postgres,
        matches: |s| s.name_or_command_has_any(&["postgres"]),
    },
    TechnologyRule {
        technology: Technology::Mysql,
        matches: |s| s.name_or_command_has_any(&["mysql", "mariadb"]),
    },
    TechnologyRule {
        technology: Technology::Mongodb,
        matches: |s| s.name_or_command_has_any(&["mongod"]),
    },
    TechnologyRule {
        technology: Technology::Redis,
        matches: |s| s.name_or_command_has_any(&["redis"]),
    },
    TechnologyRule {
        technology: Technology::Memcached,
        matches: |s| s.name_or_command_has_any(&["memcached"]),
    },
    TechnologyRule {
        technology: Technology::Java,
        matches: |s| s.name_or_command_has_any(&["java"]),
    },
    TechnologyRule {
        technology: Technology::Go,
        matches: |s| {
            s.command.contains("go") && !s.command.contains("google") && !s.name.contains("google")
        },
    },
    TechnologyRule {
        technology: Technology::Browser,
        matches: |s| ["firefox", "chrome", "safari"].iter().any(|k| s.name.contains(k)),
    },
];

/// Command-line keywords marking a runtime process as a long-running server.
const SERVER_KEYWORDS: &[&str] = &["server", "start", "run", "dev"];

/// Detect the technology of a process.
pub fn detect_technology(subject: &Subject) -> Technology {
    TECHNOLOGY_RULES
        .iter()
        .find(|rule| (rule.matches)(subject))
        .map(|rule| rule.technology)
        .unwrap_or_default()
}

/// Derive the service type from an already detected technology.
pub fn detect_service_type(technology: Technology, subject: &Subject) -> ServiceType {
    match technology {
        t if t.is_runtime() => {
            if subject.command_has_any(SERVER_KEYWORDS) {
                ServiceType::Web
            } else {
                ServiceType::Cli
            }
        }
        Technology::Postgres | Technology::Mysql | Technology::Mongodb => ServiceType::Database,
        Technology::Redis | Technology::Memcached => ServiceType::Cache,
        Technology::Browser => ServiceType::Browser,
        _ => ServiceType::System,
    }
}

/// Classify a process by name and command line.
///
/// # Examples
/// ```
/// use portscout_core::{classify, ServiceType, Technology};
///
/// assert_eq!(classify("node", "node server.js"), (Technology::Node, ServiceType::Web));
/// assert_eq!(classify("postgres", "postgres -D /var/lib/pg"), (Technology::Postgres, ServiceType::Database));
/// assert_eq!(classify("sshd", "/usr/sbin/sshd -D"), (Technology::Unknown, ServiceType::System));
/// ```
pub fn classify(name: &str, command_line: &str) -> (Technology, ServiceType) {
    let subject = Subject::new(name, command_line);
    let technology = detect_technology(&subject);
    (technology, detect_service_type(technology, &subject))
}
