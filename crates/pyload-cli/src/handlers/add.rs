//! Add package handler.

use anyhow::Result;
use pyload_core::extract_links;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Collect links from the pasted text and create a package from them.
pub async fn execute(
    ctx: &CliContext,
    name: &str,
    text: &[String],
    password: Option<&str>,
) -> Result<()> {
    let (name, links) = prepare(name, text)?;
    let password = password.filter(|p| !p.is_empty());

    let id = ctx.port().add_package(&name, &links, password).await?;
    println!("Added package '{name}' (ID {id}) with {} link(s).", links.len());
    Ok(())
}

/// Trim the name and extract links. Fails without touching the server.
pub fn prepare(name: &str, text: &[String]) -> Result<(String, Vec<String>), CliError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CliError::Arguments("package name must not be empty".to_string()));
    }
    let links = extract_links(&text.join("\n"));
    if links.is_empty() {
        return Err(CliError::Arguments(
            "no http://, https:// or www. links found".to_string(),
        ));
    }
    Ok((name.to_string(), links))
}
