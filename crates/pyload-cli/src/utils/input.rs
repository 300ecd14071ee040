//! User input utilities for interactive command-line prompts.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Prompts the user for a yes/no confirmation.
///
/// Keeps asking until the answer is `y`, `yes`, `n`, `no` or empty (no).
pub fn prompt_confirmation(prompt: &str) -> Result<bool> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    loop {
        print!("{prompt} (y/N): ");
        io::stdout().flush().context("Failed to flush stdout")?;
        let answer = read_trimmed(&mut reader)?;
        match parse_confirmation(&answer) {
            Some(value) => return Ok(value),
            None => println!("Please enter 'y' or 'n'."),
        }
    }
}

fn read_trimmed(reader: &mut impl BufRead) -> Result<String> {
    let mut input = String::new();
    reader
        .read_line(&mut input)
        .context("Failed to read user input")?;
    Ok(input.trim().to_string())
}

fn parse_confirmation(answer: &str) -> Option<bool> {
    match answer.to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "" | "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_confirmation() {
        assert_eq!(parse_confirmation("Y"), Some(true));
        assert_eq!(parse_confirmation("yes"), Some(true));
        assert_eq!(parse_confirmation(""), Some(false));
        assert_eq!(parse_confirmation("no"), Some(false));
        assert_eq!(parse_confirmation("maybe"), None);
    }

    #[test]
    fn test_read_trimmed() {
        let mut input = io::Cursor::new("  hello \n");
        assert_eq!(read_trimmed(&mut input).unwrap(), "hello");
    }
}
