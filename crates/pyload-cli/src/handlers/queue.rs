//! Queue listing handler.

use anyhow::Result;
use pyload_core::{Destination, Package, format_size};

use crate::bootstrap::CliContext;
use crate::presentation::{print_separator, truncate_string};

/// List queued packages, optionally together with the link collector.
pub async fn execute(ctx: &CliContext, all: bool) -> Result<()> {
    let packages = if all {
        ctx.port().get_queue_and_collector().await?
    } else {
        ctx.port().get_queue().await?
    };

    if packages.is_empty() {
        println!("The queue is empty.");
        return Ok(());
    }

    println!(
        "{:<6} {:<40} {:>8} {:>12} {:>7} {:<9}",
        "ID", "Name", "Progress", "Size", "Links", "Where"
    );
    print_separator(87);
    for package in &packages {
        println!(
            "{:<6} {:<40} {:>7.1}% {:>12} {:>7} {:<9}",
            package.id.0,
            truncate_string(&package.name, 40),
            package.progress_percent(),
            format_size(package.size_total),
            links_label(package),
            destination_label(package),
        );
    }
    println!();
    println!("{} package(s)", packages.len());
    Ok(())
}

fn links_label(package: &Package) -> String {
    format!("{}/{}", package.links_done, package.links_total)
}

fn destination_label(package: &Package) -> &'static str {
    match package.destination() {
        Destination::Queue => "queue",
        Destination::Collector => "collector",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_labels() {
        let package: Package = serde_json::from_value(json!({
            "pid": 3, "name": "x", "linkstotal": 4, "linksdone": 1, "queue": false
        }))
        .unwrap();
        assert_eq!(links_label(&package), "1/4");
        assert_eq!(destination_label(&package), "collector");
    }
}
