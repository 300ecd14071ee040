//! Read-only parser for the server's local settings file (`pyload.cfg`).
//!
//! The file is owned by the server process. The client only reads it, for
//! example to find out where the web interface listens.
//!
//! ```text
//! version: 2
//!
//! webui - "Web Interface":
//! 	bool enabled : "Activated" = True
//! 	ip host : "IP" = 0.0.0.0
//! 	int port : "Port" = 8000
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::ConfigType;

/// Errors raised while reading a local settings file.
#[derive(Debug, Error)]
pub enum LocalConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("Line {line}: invalid {expected} value for {key}: {value}")]
    InvalidValue {
        line: usize,
        key: String,
        value: String,
        expected: &'static str,
    },
}

/// A typed value from the settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl LocalValue {
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for LocalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One `<type> <key> : "<description>" = <value>` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalEntry {
    pub kind: ConfigType,
    pub key: String,
    pub description: String,
    pub value: LocalValue,
}

/// A `<key> - "<description>":` header and the entries below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalSection {
    pub key: String,
    pub description: String,
    pub entries: Vec<LocalEntry>,
}

impl LocalSection {
    #[must_use]
    pub fn entry(&self, key: &str) -> Option<&LocalEntry> {
        self.entries.iter().find(|e| e.key == key)
    }
}

/// Parsed settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalConfig {
    pub version: Option<u32>,
    pub sections: Vec<LocalSection>,
}

impl LocalConfig {
    #[must_use]
    pub fn section(&self, key: &str) -> Option<&LocalSection> {
        self.sections.iter().find(|s| s.key == key)
    }

    /// Value of `section.key`, if present.
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&LocalValue> {
        self.section(section)?.entry(key).map(|e| &e.value)
    }

    /// Base URL of the web interface described by the `webui` section.
    ///
    /// Wildcard listen addresses are replaced by the matching loopback
    /// address and IPv6 literals are bracketed.
    #[must_use]
    pub fn webui_base_url(&self) -> Option<String> {
        let webui = self.section("webui")?;
        let host = webui
            .entry("host")
            .map(|e| e.value.to_string())
            .unwrap_or_default();
        let port = webui
            .entry("port")
            .and_then(|e| e.value.as_int())
            .unwrap_or(8000);

        let host = match host.trim() {
            "" | "0.0.0.0" => "127.0.0.1".to_string(),
            "::" => "[::1]".to_string(),
            h if h.contains(':') && !h.starts_with('[') => format!("[{h}]"),
            h => h.to_string(),
        };
        Some(format!("http://{host}:{port}"))
    }
}

/// Default location of the server's settings file.
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".pyload").join("settings").join("pyload.cfg"))
}

/// Read and parse a settings file.
pub fn load(path: &Path) -> Result<LocalConfig, LocalConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| LocalConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text)
}

/// Parse settings file contents.
pub fn parse(text: &str) -> Result<LocalConfig, LocalConfigError> {
    let mut config = LocalConfig::default();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let indented = raw.starts_with('\t') || raw.starts_with(' ');
        if !indented {
            if let Some(version) = trimmed.strip_prefix("version:") {
                let version = version.trim().parse().map_err(|_| LocalConfigError::Syntax {
                    line,
                    message: format!("invalid version: {}", version.trim()),
                })?;
                config.version = Some(version);
                continue;
            }
            config.sections.push(parse_header(trimmed, line)?);
            continue;
        }

        let Some(section) = config.sections.last_mut() else {
            return Err(LocalConfigError::Syntax {
                line,
                message: "entry outside of a section".to_string(),
            });
        };
        section.entries.push(parse_entry(trimmed, line)?);
    }

    Ok(config)
}

fn parse_header(line_text: &str, line: usize) -> Result<LocalSection, LocalConfigError> {
    let syntax = || LocalConfigError::Syntax {
        line,
        message: format!("expected section header, got: {line_text}"),
    };
    let body = line_text.strip_suffix(':').ok_or_else(syntax)?;
    let (key, description) = body.split_once(" - ").ok_or_else(syntax)?;
    Ok(LocalSection {
        key: key.trim().to_string(),
        description: unquote(description.trim()).ok_or_else(syntax)?.to_string(),
        entries: Vec::new(),
    })
}

fn parse_entry(line_text: &str, line: usize) -> Result<LocalEntry, LocalConfigError> {
    let syntax = |what: &str| LocalConfigError::Syntax {
        line,
        message: format!("{what}: {line_text}"),
    };

    let (head, tail) = line_text
        .split_once(" : ")
        .ok_or_else(|| syntax("missing ' : ' separator"))?;
    let (kind, key) = head
        .trim()
        .rsplit_once(char::is_whitespace)
        .ok_or_else(|| syntax("expected '<type> <key>'"))?;

    let tail = tail.trim_start();
    let rest = tail
        .strip_prefix('"')
        .ok_or_else(|| syntax("description must be quoted"))?;
    let close = rest
        .find('"')
        .ok_or_else(|| syntax("unterminated description"))?;
    let description = &rest[..close];
    let value = rest[close + 1..]
        .trim_start()
        .strip_prefix('=')
        .ok_or_else(|| syntax("missing '='"))?
        .trim();

    let kind = ConfigType::parse(kind.trim());
    let key = key.trim().to_string();
    let invalid = |expected: &'static str| LocalConfigError::InvalidValue {
        line,
        key: key.clone(),
        value: value.to_string(),
        expected,
    };
    let value = match kind {
        ConfigType::Bool => match value {
            "True" => LocalValue::Bool(true),
            "False" => LocalValue::Bool(false),
            _ => return Err(invalid("bool")),
        },
        ConfigType::Int => LocalValue::Int(value.parse().map_err(|_| invalid("int"))?),
        _ => LocalValue::Text(value.to_string()),
    };

    Ok(LocalEntry {
        kind,
        key,
        description: description.to_string(),
        value,
    })
}

fn unquote(s: &str) -> Option<&str> {
    s.strip_prefix('"')?.strip_suffix('"')
}
