//! Passphrase input.

use dialoguer::Password;
use std::io::{self, BufRead, IsTerminal};
use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Read a passphrase from the terminal, or from stdin when `from_stdin` is
/// set or stdin is not a terminal.
///
/// Only the line terminator is stripped from stdin input; other whitespace
/// is part of the passphrase. An empty passphrase is rejected.
pub fn passphrase(prompt: &str, confirm: bool, from_stdin: bool) -> Result<Zeroizing<String>> {
    let value = if from_stdin || !io::stdin().is_terminal() {
        let mut line = Zeroizing::new(String::new());
        io::stdin().lock().read_line(&mut line)?;
        Zeroizing::new(strip_line_ending(&line).to_string())
    } else {
        let mut input = Password::new().with_prompt(prompt);
        if confirm {
            input = input.with_confirmation("Repeat passphrase", "passphrases do not match");
        }
        Zeroizing::new(input.interact()?)
    };

    if value.is_empty() {
        return Err(Error::Other("passphrase cannot be empty".to_string()));
    }
    Ok(value)
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}
