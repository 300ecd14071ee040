//! Server status and download control handlers.

use anyhow::Result;
use pyload_core::{ActiveLinks, ServerStatus, format_size};

use crate::bootstrap::CliContext;
use crate::presentation::{format_speed, print_separator, truncate_string};

/// Download control actions that take no arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerAction {
    Start,
    Pause,
    Stop,
    RestartFailed,
}

impl ServerAction {
    const fn done_message(self) -> &'static str {
        match self {
            Self::Start => "Downloads resumed.",
            Self::Pause => "Downloads paused.",
            Self::Stop => "All downloads stopped.",
            Self::RestartFailed => "Failed links requeued.",
        }
    }
}

/// Print the server status snapshot.
pub async fn status(ctx: &CliContext) -> Result<()> {
    let status = ctx.port().status().await?;
    println!("Server:    {}", ctx.base_url());
    for (label, value) in status_lines(&status) {
        println!("{label:<10} {value}");
    }
    Ok(())
}

fn status_lines(status: &ServerStatus) -> Vec<(&'static str, String)> {
    vec![
        ("State:", if status.pause { "paused" } else { "running" }.to_string()),
        ("Active:", status.active.to_string()),
        ("Queued:", format!("{} of {}", status.queue, status.total)),
        ("Speed:", format_speed(status.speed)),
        ("Download:", yes_no(status.download).to_string()),
        ("Reconnect:", yes_no(status.reconnect).to_string()),
        ("Captcha:", yes_no(status.captcha).to_string()),
    ]
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// List transfers the server is working on.
pub async fn active(ctx: &CliContext) -> Result<()> {
    let ActiveLinks { links, .. } = ctx.port().active_links().await?;
    if links.is_empty() {
        println!("Nothing is downloading.");
        return Ok(());
    }

    println!(
        "{:<8} {:<36} {:>6} {:>12} {:>12} {:<10}",
        "ID", "Name", "%", "Left", "Speed", "ETA"
    );
    print_separator(89);
    for link in &links {
        println!(
            "{:<8} {:<36} {:>5.0}% {:>12} {:>12} {:<10}",
            link.id,
            truncate_string(&link.name, 36),
            link.percent,
            format_size(link.bytes_left),
            format_speed(link.speed),
            link.format_eta,
        );
    }
    Ok(())
}

/// Run a download control action.
pub async fn control(ctx: &CliContext, action: ServerAction) -> Result<()> {
    let port = ctx.port();
    match action {
        ServerAction::Start => port.unpause_server().await?,
        ServerAction::Pause => port.pause_server().await?,
        ServerAction::Stop => port.stop_all_downloads().await?,
        ServerAction::RestartFailed => port.restart_failed().await?,
    }
    println!("{}", action.done_message());
    Ok(())
}
