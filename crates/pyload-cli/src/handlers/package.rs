//! Package detail handler.

use anyhow::Result;
use pyload_core::{Link, LinkStatus, PackageId, StatusFilter, format_size};

use crate::bootstrap::CliContext;
use crate::presentation::{print_separator, truncate_string};

/// Show one package and the links matching `filter`.
pub async fn execute(ctx: &CliContext, id: i64, filter: StatusFilter) -> Result<()> {
    let package = ctx.port().get_package_data(PackageId(id)).await?;

    println!("Package {}: {}", package.id, package.name);
    println!("  Folder:   {}", package.folder);
    if !package.password.is_empty() {
        println!("  Password: {}", package.password);
    }
    println!(
        "  Progress: {:.1}% of {}",
        package.progress_percent(),
        format_size(package.size_total)
    );
    println!();

    let links: Vec<&Link> = package.links_matching(filter).collect();
    if links.is_empty() {
        println!("No links match this filter.");
        return Ok(());
    }

    println!(
        "{:<8} {:<40} {:<12} {:>12} {:<20}",
        "ID", "Name", "Status", "Size", "Message"
    );
    print_separator(96);
    for link in links {
        println!(
            "{:<8} {:<40} {:<12} {:>12} {:<20}",
            link.id.0,
            truncate_string(&link.name, 40),
            status_label(link.status()),
            format_size(link.size),
            truncate_string(message(link), 20),
        );
    }
    Ok(())
}

/// Error text for failed links, status message otherwise.
fn message(link: &Link) -> &str {
    if link.error.is_empty() {
        &link.status_message
    } else {
        &link.error
    }
}

const fn status_label(status: LinkStatus) -> &'static str {
    match status {
        LinkStatus::Finished => "finished",
        LinkStatus::Offline => "offline",
        LinkStatus::Online => "online",
        LinkStatus::Queued => "queued",
        LinkStatus::Skipped => "skipped",
        LinkStatus::Waiting => "waiting",
        LinkStatus::TempOffline => "temp.offline",
        LinkStatus::Starting => "starting",
        LinkStatus::Failed => "failed",
        LinkStatus::Aborted => "aborted",
        LinkStatus::Decrypting => "decrypting",
        LinkStatus::Custom => "custom",
        LinkStatus::Downloading => "downloading",
        LinkStatus::Processing => "processing",
        LinkStatus::Unknown => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_prefers_error() {
        let link: Link = serde_json::from_value(json!({
            "fid": 1, "name": "a", "status": 8, "statusmsg": "failed", "error": "File not found"
        }))
        .unwrap();
        assert_eq!(message(&link), "File not found");
        assert_eq!(status_label(link.status()), "failed");

        let link: Link =
            serde_json::from_value(json!({"fid": 2, "name": "b", "statusmsg": "finished"}))
                .unwrap();
        assert_eq!(message(&link), "finished");
    }
}
