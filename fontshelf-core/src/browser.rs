//! Interactive catalog browser for fontshelf-core

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::catalog::FontCatalog;

/// Command table shown by `help`, kept sorted by name.
pub const COMMANDS: &[(&str, &str)] = &[
    ("help", "Print this list of commands."),
    ("list", "List all fonts."),
    ("quit", "Quit program."),
];

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    List,
    /// Anything that is not a command is treated as a font-name lookup.
    Info(String),
    Nop,
}

/// Browser state after dispatching a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Parse a raw input line. Command words are matched case-insensitively
/// against their full alias sets, never as open-ended prefixes, so `quick`
/// is a font lookup rather than a quit.
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Nop;
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "q" | "quit" => Command::Quit,
        "h" | "help" => Command::Help,
        "l" | "ls" | "list" => Command::List,
        _ => Command::Info(trimmed.to_string()),
    }
}

/// Completion candidates for a partial input: command names first, then
/// catalog font names, each matched as a case-insensitive prefix. An empty
/// partial returns the full union.
pub fn complete<'a>(
    partial: &str,
    font_names: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    let mut candidates: Vec<String> = COMMANDS
        .iter()
        .map(|(name, _)| *name)
        .filter(|name| matches_prefix(name, partial))
        .map(str::to_string)
        .collect();

    candidates.extend(
        font_names
            .into_iter()
            .filter(|name| matches_prefix(name, partial))
            .map(str::to_string),
    );

    candidates
}

fn matches_prefix(value: &str, prefix: &str) -> bool {
    if value.len() < prefix.len() || !value.is_char_boundary(prefix.len()) {
        return false;
    }
    value[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// Dispatch one input line against the catalog.
///
/// Data goes to `out`; the unknown-font diagnostic goes to `err`. Font-name
/// lookup is case-sensitive: `arial` does not find `Arial`.
pub fn dispatch(
    catalog: &FontCatalog,
    line: &str,
    mut out: impl Write,
    mut err: impl Write,
) -> Result<Flow> {
    match parse_command(line) {
        Command::Quit => return Ok(Flow::Quit),
        Command::Help => {
            for (name, description) in COMMANDS {
                writeln!(out, "{name}: {description}")?;
            }
        }
        Command::List => {
            for (name, entry) in catalog.iter() {
                writeln!(out, "{}, {}", name, entry.face.glyph_count())?;
            }
        }
        Command::Info(name) => match catalog.get(&name) {
            Some(entry) => entry.face.record(&entry.path).write(&mut out)?,
            None => writeln!(err, "Unknown font \"{name}\"")?,
        },
        Command::Nop => {}
    }

    Ok(Flow::Continue)
}

/// Prompted read-dispatch loop. Runs until the quit command or end of input.
///
/// A raw line ending in a tab character asks for completion instead of being
/// dispatched: the candidates are printed one per line and the loop
/// re-prompts. This is the line-oriented stand-in for readline tab handling.
pub fn run(
    catalog: &FontCatalog,
    mut input: impl BufRead,
    mut out: impl Write,
    mut err: impl Write,
) -> Result<()> {
    let mut line = String::new();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        let raw = line.trim_end_matches(['\r', '\n']);
        if let Some(partial) = raw.strip_suffix('\t') {
            for candidate in complete(partial.trim(), catalog.names()) {
                writeln!(out, "{candidate}")?;
            }
            continue;
        }

        if dispatch(catalog, raw, &mut out, &mut err)? == Flow::Quit {
            return Ok(());
        }
    }
}
