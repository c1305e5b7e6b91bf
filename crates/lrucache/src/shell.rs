//! Line-oriented command shell driving a cache

use anyhow::{Result, bail};
use lrucache_core::Cache;
use std::io::{BufRead, Write};
use tracing::debug;

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { key: String, value: String },
    Get { key: String },
    Del { key: String },
    Len,
    Flush,
    Quit,
}

impl Command {
    /// Parse one input line. Verbs are case-insensitive; the value of
    /// `set` is the rest of the line, so it may contain spaces.
    pub fn parse(line: &str) -> Result<Self> {
        let (verb, rest) = split_word(line);
        let (key, value) = split_word(rest);
        let verb = verb.to_lowercase();

        let command = match verb.as_str() {
            "set" if !key.is_empty() && !value.is_empty() => Command::Set {
                key: key.to_string(),
                value: value.to_string(),
            },
            "set" => bail!("usage: set <key> <value>"),
            "get" | "del" if key.is_empty() || !value.is_empty() => {
                bail!("usage: {} <key>", verb)
            }
            "get" => Command::Get { key: key.to_string() },
            "del" => Command::Del { key: key.to_string() },
            "len" | "flush" | "quit" | "exit" if !key.is_empty() => {
                bail!("{} takes no arguments", verb)
            }
            "len" => Command::Len,
            "flush" => Command::Flush,
            "quit" | "exit" => Command::Quit,
            "" => bail!("empty command"),
            other => bail!("unknown command: {}", other),
        };
        Ok(command)
    }
}

/// Split off the first whitespace-delimited word, returning it and the trimmed remainder
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim();
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim_start()),
        None => (s, ""),
    }
}

/// Apply a command and render its response
pub fn execute(cache: &dyn Cache<String>, command: Command) -> String {
    match command {
        Command::Set { key, value } => {
            cache.set(&key, value);
            "OK".to_string()
        }
        Command::Get { key } => cache.get(&key).unwrap_or_else(|| "(nil)".to_string()),
        Command::Del { key } => {
            cache.del(&key);
            "OK".to_string()
        }
        Command::Len => cache.len().to_string(),
        Command::Flush => {
            cache.flush();
            "OK".to_string()
        }
        Command::Quit => "BYE".to_string(),
    }
}

/// Read commands until `quit` or end of input, writing one response per line
pub fn run<R: BufRead, W: Write>(cache: &dyn Cache<String>, input: R, mut output: W) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let (response, quit) = match Command::parse(&line) {
            Ok(command) => {
                debug!("Executing {:?}", command);
                let quit = command == Command::Quit;
                (execute(cache, command), quit)
            }
            Err(e) => (format!("ERR {}", e), false),
        };
        writeln!(output, "{}", response)?;
        output.flush()?;
        if quit {
            break;
        }
    }
    Ok(())
}
