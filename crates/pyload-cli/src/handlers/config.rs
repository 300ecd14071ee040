//! Server configuration handlers.

use anyhow::{Context, Result};
use pyload_core::{ConfigEditor, ConfigItem, ConfigScope, ConfigSection, ConfigType};

use crate::bootstrap::CliContext;
use crate::config_commands::ConfigCommand;
use crate::error::CliError;
use crate::presentation::{print_separator, truncate_string};

/// Dispatch a `config` subcommand.
pub async fn execute(ctx: &CliContext, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show { category, plugins } => {
            show(ctx, scope(plugins), category.as_deref()).await
        }
        ConfigCommand::Set {
            category,
            option,
            value,
            plugin,
        } => set(ctx, scope(plugin), &category, &option, &value).await,
    }
}

const fn scope(plugin: bool) -> ConfigScope {
    if plugin {
        ConfigScope::Plugin
    } else {
        ConfigScope::Core
    }
}

async fn show(ctx: &CliContext, scope: ConfigScope, category: Option<&str>) -> Result<()> {
    let tree = match scope {
        ConfigScope::Core => ctx.port().get_config().await?,
        ConfigScope::Plugin => ctx.port().get_plugin_config().await?,
    };

    let Some(category) = category else {
        println!("{:<28} {:>6}  {:<40}", "Category", "Items", "Description");
        print_separator(76);
        for (key, section) in &tree {
            println!(
                "{:<28} {:>6}  {:<40}",
                key,
                section.items.len(),
                truncate_string(section_title(section), 40)
            );
        }
        return Ok(());
    };

    let section = tree.get(category).ok_or_else(|| {
        CliError::Arguments(format!("no {scope} configuration category '{category}'"))
    })?;

    println!("{} ({category})", section_title(section));
    println!();
    println!("{:<24} {:<12} {:<24} {:<30}", "Option", "Type", "Value", "Description");
    print_separator(93);
    for item in &section.items {
        println!(
            "{:<24} {:<12} {:<24} {:<30}",
            format!("{}{}", item.name, if item.readonly { " (ro)" } else { "" }),
            truncate_string(&item.kind.to_string(), 12),
            truncate_string(&display_value(item), 24),
            truncate_string(&item.description, 30),
        );
    }
    Ok(())
}

fn section_title(section: &ConfigSection) -> &str {
    if section.description.is_empty() {
        &section.name
    } else {
        &section.description
    }
}

/// Value as shown in listings; passwords are masked.
fn display_value(item: &ConfigItem) -> String {
    match item.kind {
        ConfigType::Password if !item.value.is_empty() => "********".to_string(),
        _ => item.value.clone(),
    }
}

/// Validate `value` against the option's declared type, then send it.
async fn set(
    ctx: &CliContext,
    scope: ConfigScope,
    category: &str,
    option: &str,
    value: &str,
) -> Result<()> {
    let snapshot = ctx
        .port()
        .get_core_and_plugins_config()
        .await
        .context("Failed to fetch configuration")?;

    let mut editor = ConfigEditor::new(snapshot);
    editor.stage(scope, category, option, value);
    let report = editor.apply(ctx.port()).await.map_err(CliError::from)?;

    if let Some((key, err)) = report.failed.into_iter().next() {
        return Err(anyhow::Error::new(err).context(format!("Failed to set {key}")));
    }
    for key in &report.applied {
        let shown = editor
            .snapshot()
            .item(key.scope, &key.category, &key.option)
            .map(display_value)
            .unwrap_or_default();
        println!("{key} = {shown}");
    }
    Ok(())
}
