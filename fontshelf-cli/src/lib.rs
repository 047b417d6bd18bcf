//! fontshelf CLI

use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use fontshelf_core::browser;
use fontshelf_core::catalog::FontCatalog;
use fontshelf_core::charmap::{charmap_entries, write_json, write_listing};
use fontshelf_core::face::Face;

/// CLI entrypoint for fontshelf.
#[derive(Debug, Parser)]
#[command(
    name = "fontshelf",
    about = "Browse a font directory and inspect faces and charmaps"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactively browse a directory of fonts
    Browse(BrowseArgs),
    /// Print the info record for one font file
    Info(InfoArgs),
    /// Dump the selected charmap of one font file
    Charmap(CharmapArgs),
}

#[derive(Debug, Args)]
struct BrowseArgs {
    /// Font directory to scan (defaults to $FONTSHELF_FONT_DIR, then the
    /// platform font directory)
    #[arg(value_hint = ValueHint::DirPath)]
    dir: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct InfoArgs {
    /// Font file to inspect
    #[arg(value_hint = ValueHint::FilePath)]
    file: PathBuf,

    /// Emit the record as pretty JSON
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

#[derive(Debug, Args)]
struct CharmapArgs {
    /// Font file to inspect
    #[arg(value_hint = ValueHint::FilePath)]
    file: PathBuf,

    /// Emit the listing as pretty JSON
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

/// Parse CLI args and execute the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Browse(args) => run_browse(args),
        Command::Info(args) => run_info(args),
        Command::Charmap(args) => run_charmap(args),
    }
}

fn run_browse(args: BrowseArgs) -> Result<()> {
    let dir = match args.dir {
        Some(dir) => dir,
        None => default_font_dir()?,
    };

    let (catalog, report) = FontCatalog::scan(&dir)?;
    println!("Loaded {} of {} fonts.", report.loaded, report.visited);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    browser::run(&catalog, stdin.lock(), stdout.lock(), stderr.lock())
}

fn run_info(args: InfoArgs) -> Result<()> {
    let face = open_face(&args.file)?;
    let record = face.record(&args.file);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if args.json {
        let json = serde_json::to_string_pretty(&record)?;
        handle.write_all(json.as_bytes())?;
        handle.write_all(b"\n")?;
    } else {
        record.write(&mut handle)?;
    }

    Ok(())
}

fn run_charmap(args: CharmapArgs) -> Result<()> {
    let face = open_face(&args.file)?;
    let entries = charmap_entries(&face);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if args.json {
        write_json(&entries, &mut handle)
    } else {
        write_listing(&face, &entries, &mut handle)
    }
}

fn open_face(path: &Path) -> Result<Face> {
    Face::open(path).with_context(|| format!("opening font {}", path.display()))
}

/// Directory to browse when none is given: the FONTSHELF_FONT_DIR override,
/// else the first platform font directory that exists.
fn default_font_dir() -> Result<PathBuf> {
    if let Ok(raw) = env::var("FONTSHELF_FONT_DIR") {
        let path = PathBuf::from(raw);
        return if path.is_dir() {
            Ok(path)
        } else {
            Err(anyhow!(
                "FONTSHELF_FONT_DIR is set but {} is not a directory",
                path.display()
            ))
        };
    }

    let mut candidates: Vec<PathBuf> = Vec::new();

    #[cfg(target_os = "macos")]
    {
        candidates.push(PathBuf::from("/System/Library/Fonts"));
        candidates.push(PathBuf::from("/Library/Fonts"));
        if let Some(home) = env::var_os("HOME") {
            candidates.push(PathBuf::from(home).join("Library/Fonts"));
        }
    }

    #[cfg(target_os = "linux")]
    {
        candidates.push(PathBuf::from("/usr/share/fonts"));
        candidates.push(PathBuf::from("/usr/local/share/fonts"));
        if let Some(home) = env::var_os("HOME") {
            candidates.push(PathBuf::from(home).join(".local/share/fonts"));
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(system_root) = env::var_os("SYSTEMROOT") {
            candidates.push(PathBuf::from(system_root).join("Fonts"));
        }
        if let Some(local_appdata) = env::var_os("LOCALAPPDATA") {
            candidates.push(PathBuf::from(local_appdata).join("Microsoft/Windows/Fonts"));
        }
    }

    candidates
        .into_iter()
        .find(|p| p.is_dir())
        .ok_or_else(|| anyhow!("no font directory found for this platform; pass DIR"))
}
