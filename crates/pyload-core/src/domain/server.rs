//! Server-wide status, active transfers, accounts and users.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::package::PackageId;

/// Polling snapshot from `json/status`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerStatus {
    /// Whether the download queue is paused.
    pub pause: bool,
    /// Number of running downloads.
    pub active: u64,
    /// Links waiting in the queue.
    pub queue: u64,
    /// Total number of links.
    pub total: u64,
    /// Aggregate speed in bytes per second.
    pub speed: f64,
    /// Whether downloading is enabled at all.
    pub download: bool,
    pub reconnect: bool,
    pub captcha: bool,
}

/// A link currently being transferred, from `json/links`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActiveLink {
    #[serde(alias = "fid")]
    pub id: i64,
    pub name: String,
    pub speed: f64,
    pub eta: i64,
    pub format_eta: String,
    #[serde(rename = "bleft")]
    pub bytes_left: u64,
    pub size: u64,
    pub format_size: String,
    pub percent: f64,
    pub status: i64,
    pub statusmsg: String,
    pub package_id: Option<PackageId>,
    pub package_name: String,
}

/// Response of `json/links`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActiveLinks {
    pub links: Vec<ActiveLink>,
    pub ids: Vec<i64>,
}

/// A hoster account configured on the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountInfo {
    /// Account plugin name.
    #[serde(rename = "type", alias = "plugin")]
    pub plugin: String,
    pub login: String,
    pub valid: bool,
    /// Expiry as a unix timestamp, negative when unlimited.
    pub validuntil: f64,
    /// Remaining traffic in bytes, negative when unlimited.
    pub trafficleft: f64,
    pub premium: bool,
    pub options: BTreeMap<String, serde_json::Value>,
}

/// A web UI user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserData {
    pub name: String,
    pub email: String,
    pub role: i64,
    pub permission: i64,
    pub template: String,
}

/// Users keyed by their server-side id.
pub type UserTable = BTreeMap<String, UserData>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_defaults_missing_fields() {
        let status: ServerStatus =
            serde_json::from_value(json!({"pause": true, "active": 2, "speed": 1024.5})).unwrap();
        assert!(status.pause);
        assert_eq!(status.active, 2);
        assert_eq!(status.queue, 0);
        assert!(!status.captcha);
    }

    #[test]
    fn test_active_links_accepts_fid_alias() {
        let links: ActiveLinks = serde_json::from_value(json!({
            "links": [{"fid": 4, "name": "f.bin", "bleft": 10, "percent": 50, "package_id": 3}],
            "ids": [4]
        }))
        .unwrap();
        assert_eq!(links.links[0].id, 4);
        assert_eq!(links.links[0].bytes_left, 10);
        assert_eq!(links.links[0].package_id, Some(PackageId(3)));
        assert_eq!(links.ids, vec![4]);
    }

    #[test]
    fn test_account_info_ignores_unknown_fields() {
        let account: AccountInfo = serde_json::from_value(json!({
            "type": "RapidgatorNet",
            "login": "me",
            "valid": true,
            "validuntil": -1,
            "trafficleft": -1,
            "premium": false,
            "options": {"limitdl": ["0"]},
            "extra": 1
        }))
        .unwrap();
        assert_eq!(account.plugin, "RapidgatorNet");
        assert!(account.options.contains_key("limitdl"));
    }
}
