//! Link removal handlers.

use anyhow::Result;
use pyload_core::{FileId, PackageId};

use crate::bootstrap::CliContext;
use crate::utils::input;

/// Remove links by file id, asking first unless `force` is set.
pub async fn execute(ctx: &CliContext, ids: &[i64], force: bool) -> Result<()> {
    let ids: Vec<FileId> = ids.iter().copied().map(FileId).collect();

    if !force {
        let confirm = input::prompt_confirmation(&format!(
            "Remove {} link(s) from the server?",
            ids.len()
        ))?;
        if !confirm {
            println!("Remove operation cancelled.");
            return Ok(());
        }
    }

    ctx.port().delete_files(&ids).await?;
    println!("Removed {} link(s).", ids.len());
    Ok(())
}

/// Remove every unfinished link from the given packages.
pub async fn execute_unfinished(ctx: &CliContext, packages: &[i64]) -> Result<()> {
    let packages: Vec<PackageId> = packages.iter().copied().map(PackageId).collect();
    let removed = ctx.port().delete_unfinished_links(&packages).await?;
    println!("Removed {removed} unfinished link(s).");
    Ok(())
}
