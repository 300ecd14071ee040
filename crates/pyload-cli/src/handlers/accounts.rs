//! Hoster account and web user listings.

use anyhow::Result;
use pyload_core::{AccountInfo, format_size};

use crate::bootstrap::CliContext;
use crate::presentation::{format_optional, print_separator, truncate_string};

/// List configured hoster accounts.
pub async fn accounts(ctx: &CliContext) -> Result<()> {
    let accounts = ctx.port().get_accounts().await?;
    if accounts.is_empty() {
        println!("No accounts configured.");
        return Ok(());
    }

    println!(
        "{:<24} {:<24} {:<6} {:<8} {:>14} {:>14}",
        "Plugin", "Login", "Valid", "Premium", "Valid until", "Traffic left"
    );
    print_separator(95);
    for account in &accounts {
        println!(
            "{:<24} {:<24} {:<6} {:<8} {:>14} {:>14}",
            truncate_string(&account.plugin, 24),
            truncate_string(&account.login, 24),
            if account.valid { "yes" } else { "no" },
            if account.premium { "yes" } else { "no" },
            format_optional(valid_until(account).as_ref(), "unlimited"),
            format_optional(traffic_left(account).as_ref(), "unlimited"),
        );
    }
    Ok(())
}

/// List web interface users.
pub async fn users(ctx: &CliContext) -> Result<()> {
    let users = ctx.port().get_all_userdata().await?;
    if users.is_empty() {
        println!("No users.");
        return Ok(());
    }

    println!("{:<6} {:<20} {:<30} {:>5} {:>10}", "ID", "Name", "Email", "Role", "Permission");
    print_separator(75);
    for (id, user) in &users {
        println!(
            "{:<6} {:<20} {:<30} {:>5} {:>10}",
            id,
            truncate_string(&user.name, 20),
            truncate_string(&user.email, 30),
            user.role,
            user.permission,
        );
    }
    Ok(())
}

/// Expiry as a unix timestamp; negative means no expiry.
#[allow(clippy::cast_possible_truncation)]
fn valid_until(account: &AccountInfo) -> Option<String> {
    (account.validuntil >= 0.0).then(|| format!("@{}", account.validuntil as i64))
}

/// Remaining traffic in bytes; negative means unlimited.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn traffic_left(account: &AccountInfo) -> Option<String> {
    (account.trafficleft >= 0.0).then(|| format_size(account.trafficleft as u64))
}
