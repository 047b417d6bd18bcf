//! Charmap listings in the first_char/next_char style

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::face::Face;

/// One row of a charmap listing.
#[derive(Debug, Clone, Serialize)]
pub struct CharmapEntry {
    pub code: u32,
    pub glyph: u32,
    pub name: Option<String>,
}

/// Walk the selected charmap from `first_char` until the zero-glyph
/// sentinel, resolving glyph names where the face carries them.
pub fn charmap_entries(face: &Face) -> Vec<CharmapEntry> {
    let names = face.glyph_names();
    let mut entries = Vec::new();
    let (mut code, mut glyph) = face.first_char();

    while glyph != 0 {
        entries.push(CharmapEntry {
            code,
            glyph,
            name: names.get(glyph),
        });
        (code, glyph) = face.next_char(code);
    }

    entries
}

/// Text listing: a short face summary followed by one `code => name` line
/// per charmap entry. Unnamed glyphs render as `gid<index>`.
pub fn write_listing(face: &Face, entries: &[CharmapEntry], mut w: impl Write) -> Result<()> {
    writeln!(w, "glyphs:   {}", face.glyph_count())?;
    writeln!(w, "charmaps: {}", face.charmap_count())?;
    writeln!(w, "horiz:    {}", face.horizontal())?;
    writeln!(w, "vert:     {}", face.vertical())?;

    for entry in entries {
        match &entry.name {
            Some(name) => writeln!(w, "{} => {}", entry.code, name)?,
            None => writeln!(w, "{} => gid{}", entry.code, entry.glyph)?,
        }
    }

    Ok(())
}

/// Pretty JSON array of the listing rows.
pub fn write_json(entries: &[CharmapEntry], mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(entries)?;
    w.write_all(json.as_bytes())?;
    w.write_all(b"\n")?;
    Ok(())
}
