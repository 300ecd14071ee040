//! Local settings file viewer.

use anyhow::Result;
use std::path::PathBuf;

use pyload_core::{LocalConfig, local_config};

use crate::bootstrap::local_config_path;
use crate::presentation::print_separator;

/// Print the server's local settings file. Needs no server connection.
pub fn execute(path: Option<PathBuf>) -> Result<()> {
    let path = local_config_path(path)?;
    let config = local_config::load(&path)?;

    println!("Settings file: {}", path.display());
    if let Some(version) = config.version {
        println!("Version:       {version}");
    }
    if let Some(url) = config.webui_base_url() {
        println!("Web UI:        {url}");
    }
    print_listing(&config);
    Ok(())
}

fn print_listing(config: &LocalConfig) {
    for section in &config.sections {
        println!();
        println!("{} - {}", section.key, section.description);
        print_separator(60);
        for entry in &section.entries {
            println!("  {:<28} {:<10} {}", entry.key, entry.kind.to_string(), entry.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_execute_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "version: 2\n\nwebui - \"Web Interface\":\n\tint port : \"Port\" = 8000").unwrap();
        assert!(execute(Some(file.path().to_path_buf())).is_ok());
    }

    #[test]
    fn test_execute_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = execute(Some(dir.path().join("absent.cfg"))).unwrap_err();
        assert_eq!(crate::error::exit_code_for(&err), 74);
    }
}
