//! Package and link types as reported by the pyLoad server.
//!
//! These are consumed, never owned: the server is the source of truth and
//! the client only decodes what it returns.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned package identifier (`pid`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(pub i64);

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Server-assigned file/link identifier (`fid`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(pub i64);

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a package lives on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Queue,
    Collector,
}

/// A named group of download links with aggregate progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    #[serde(rename = "pid")]
    pub id: PackageId,
    pub name: String,
    #[serde(default)]
    pub folder: String,
    #[serde(default)]
    pub site: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub order: i64,
    /// Total size of all links in bytes.
    #[serde(rename = "sizetotal", default)]
    pub size_total: u64,
    /// Bytes already downloaded.
    #[serde(rename = "sizedone", default)]
    pub size_done: u64,
    #[serde(rename = "linkstotal", default)]
    pub links_total: u64,
    #[serde(rename = "linksdone", default)]
    pub links_done: u64,
    #[serde(default)]
    pub links: Vec<Link>,
    /// Only present in `get_queue_and_collector` results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue: Option<bool>,
}

impl Package {
    /// Download progress in percent, `0.0` for packages of unknown size.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_percent(&self) -> f64 {
        if self.size_total == 0 {
            return 0.0;
        }
        (self.size_done as f64 / self.size_total as f64) * 100.0
    }

    /// Queue or collector, defaulting to the queue when the flag is absent.
    #[must_use]
    pub fn destination(&self) -> Destination {
        match self.queue {
            Some(false) => Destination::Collector,
            _ => Destination::Queue,
        }
    }

    /// Links of this package matching `filter`, in server order.
    pub fn links_matching(&self, filter: StatusFilter) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(move |link| filter.matches(link.status()))
    }
}

/// One download item belonging to a package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "fid")]
    pub id: FileId,
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub plugin: String,
    /// Raw pyLoad status code, see [`LinkStatus`].
    #[serde(rename = "status", default)]
    pub status_code: i64,
    #[serde(rename = "statusmsg", default)]
    pub status_message: String,
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub size: u64,
    /// Bytes remaining, when the server reports it.
    #[serde(rename = "bleft", default, skip_serializing_if = "Option::is_none")]
    pub bytes_left: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<PackageId>,
    #[serde(default)]
    pub order: i64,
}

impl Link {
    /// Decoded status code.
    #[must_use]
    pub const fn status(&self) -> LinkStatus {
        LinkStatus::from_code(self.status_code)
    }
}

/// pyLoad link status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkStatus {
    Finished,
    Offline,
    Online,
    Queued,
    Skipped,
    Waiting,
    TempOffline,
    Starting,
    Failed,
    Aborted,
    Decrypting,
    Custom,
    Downloading,
    Processing,
    Unknown,
}

impl LinkStatus {
    /// Map a numeric status code; unrecognised codes become `Unknown`.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Finished,
            1 => Self::Offline,
            2 => Self::Online,
            3 => Self::Queued,
            4 => Self::Skipped,
            5 => Self::Waiting,
            6 => Self::TempOffline,
            7 => Self::Starting,
            8 => Self::Failed,
            9 => Self::Aborted,
            10 => Self::Decrypting,
            11 => Self::Custom,
            12 => Self::Downloading,
            13 => Self::Processing,
            _ => Self::Unknown,
        }
    }

    /// Currently being worked on by the server.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(
            self,
            Self::Waiting | Self::Starting | Self::Decrypting | Self::Downloading | Self::Processing
        )
    }

    #[must_use]
    pub const fn is_failed(self) -> bool {
        matches!(
            self,
            Self::Offline | Self::TempOffline | Self::Failed | Self::Aborted
        )
    }
}

/// Link selection used by views that show a subset of a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Finished,
    Failed,
}

impl StatusFilter {
    #[must_use]
    pub const fn matches(self, status: LinkStatus) -> bool {
        match self {
            Self::All => true,
            Self::Active => status.is_active(),
            Self::Finished => matches!(status, LinkStatus::Finished),
            Self::Failed => status.is_failed(),
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "finished" | "done" => Ok(Self::Finished),
            "failed" | "error" => Ok(Self::Failed),
            other => Err(format!("unknown status filter: {other}")),
        }
    }
}

/// Render a byte count the way the queue view does: megabytes, two decimals.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn package_json() -> serde_json::Value {
        json!({
            "pid": 7,
            "name": "Ubuntu ISOs",
            "folder": "ubuntu",
            "site": "",
            "password": "",
            "order": 0,
            "sizetotal": 2048,
            "sizedone": 512,
            "linkstotal": 2,
            "linksdone": 1,
            "links": [
                {
                    "fid": 11,
                    "name": "a.iso",
                    "url": "http://x/a.iso",
                    "plugin": "BasePlugin",
                    "status": 0,
                    "statusmsg": "finished",
                    "error": "",
                    "size": 1024,
                    "package": 7,
                    "order": 0
                },
                {
                    "fid": 12,
                    "name": "b.iso",
                    "url": "http://x/b.iso",
                    "plugin": "BasePlugin",
                    "status": 12,
                    "statusmsg": "downloading",
                    "error": "",
                    "size": 1024,
                    "bleft": 1000
                }
            ]
        })
    }

    #[test]
    fn test_package_decodes_server_shape() {
        let package: Package = serde_json::from_value(package_json()).unwrap();
        assert_eq!(package.id, PackageId(7));
        assert_eq!(package.size_total, 2048);
        assert_eq!(package.links.len(), 2);
        assert_eq!(package.links[1].bytes_left, Some(1000));
        assert_eq!(package.links[0].package, Some(PackageId(7)));
        assert_eq!(package.destination(), Destination::Queue);
    }

    #[test]
    fn test_package_minimal_fields() {
        let package: Package = serde_json::from_value(json!({"pid": 1, "name": "x"})).unwrap();
        assert!(package.links.is_empty());
        assert_eq!(package.size_total, 0);
        assert!(package.queue.is_none());
    }

    #[test]
    fn test_progress_percent() {
        let package: Package = serde_json::from_value(package_json()).unwrap();
        assert!((package.progress_percent() - 25.0).abs() < f64::EPSILON);

        let empty: Package = serde_json::from_value(json!({"pid": 1, "name": "x"})).unwrap();
        assert!(empty.progress_percent().abs() < f64::EPSILON);
    }

    #[test]
    fn test_collector_flag() {
        let package: Package =
            serde_json::from_value(json!({"pid": 2, "name": "c", "queue": false})).unwrap();
        assert_eq!(package.destination(), Destination::Collector);
    }

    #[test]
    fn test_link_status_codes() {
        assert_eq!(LinkStatus::from_code(0), LinkStatus::Finished);
        assert_eq!(LinkStatus::from_code(12), LinkStatus::Downloading);
        assert_eq!(LinkStatus::from_code(99), LinkStatus::Unknown);
        assert!(LinkStatus::Downloading.is_active());
        assert!(!LinkStatus::Queued.is_active());
        assert!(LinkStatus::Offline.is_failed());
    }

    #[test]
    fn test_links_matching_filter() {
        let package: Package = serde_json::from_value(package_json()).unwrap();
        let active: Vec<_> = package.links_matching(StatusFilter::Active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, FileId(12));

        let finished: Vec<_> = package.links_matching(StatusFilter::Finished).collect();
        assert_eq!(finished[0].id, FileId(11));
        assert_eq!(package.links_matching(StatusFilter::All).count(), 2);
    }

    #[test]
    fn test_status_filter_from_str() {
        assert_eq!("Active".parse::<StatusFilter>(), Ok(StatusFilter::Active));
        assert_eq!("done".parse::<StatusFilter>(), Ok(StatusFilter::Finished));
        assert!("bogus".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0.00 MB");
        assert_eq!(format_size(1024 * 1024 * 3 / 2), "1.50 MB");
    }
}
