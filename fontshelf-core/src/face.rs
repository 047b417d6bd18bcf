//! Face opening and metadata extraction for fontshelf-core

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::ops::Bound::{Excluded, Unbounded};
use std::path::Path;

use anyhow::Result;
use read_fonts::tables::head::MacStyle;
use read_fonts::tables::name::NameId;
use read_fonts::tables::os2::SelectionFlags;
use read_fonts::tables::post::Post;
use read_fonts::types::{GlyphId16, Tag};
use read_fonts::{FontRef, ReadError, TableProvider};
use serde::Serialize;
use skrifa::{FontRef as SkrifaFontRef, MetadataProvider};
use thiserror::Error;

/// Why a candidate file could not be opened as a face.
///
/// Matched and discarded at the catalog scan site; everywhere else it
/// propagates normally.
#[derive(Debug, Error)]
pub enum OpenError {
    #[error("reading font file: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing font: {0}")]
    Parse(#[from] ReadError),
}

/// One opened font face.
///
/// Owns the raw font bytes plus the metadata extracted up front. A `Face`
/// always has a parseable table directory and a readable `maxp`; every other
/// table may be absent, and every accessor has a defined answer in that case.
pub struct Face {
    data: Vec<u8>,
    name: String,
    family: String,
    style: String,
    bold: bool,
    italic: bool,
    scalable: bool,
    horizontal: bool,
    vertical: bool,
    kerning: bool,
    glyph_count: u16,
    charmap_count: u16,
    charmap: BTreeMap<u32, u32>,
}

impl Face {
    /// Open a font file. For collections the first face is used.
    pub fn open(path: &Path) -> Result<Self, OpenError> {
        let data = fs::read(path)?;
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().trim().to_string())
            .filter(|s| !s.is_empty());
        Self::from_data(data, stem)
    }

    /// Parse a face from raw bytes.
    pub fn parse(data: Vec<u8>) -> Result<Self, OpenError> {
        Self::from_data(data, None)
    }

    fn from_data(data: Vec<u8>, fallback_name: Option<String>) -> Result<Self, OpenError> {
        let font = FontRef::new(&data)?;
        let glyph_count = font.maxp()?.num_glyphs();

        let family = name_string(&font, NameId::FAMILY_NAME);
        let style = name_string(&font, NameId::SUBFAMILY_NAME);
        let name = name_string(&font, NameId::POSTSCRIPT_NAME)
            .or_else(|| family.clone())
            .or(fallback_name)
            .unwrap_or_else(|| "(unnamed)".to_string());

        let (bold, italic) = style_flags(&font);
        let scalable = has_table(&font, b"glyf")
            || has_table(&font, b"CFF ")
            || has_table(&font, b"CFF2");
        let horizontal = has_table(&font, b"hhea");
        let vertical = has_table(&font, b"vhea");
        let kerning = has_table(&font, b"kern");
        let charmap_count = font
            .cmap()
            .map(|cmap| cmap.encoding_records().len() as u16)
            .unwrap_or(0);

        let charmap = match SkrifaFontRef::new(&data) {
            // Glyph 0 is the missing-glyph sentinel and is never exposed
            // through charmap iteration.
            Ok(sfont) => sfont
                .charmap()
                .mappings()
                .map(|(code, gid)| (code, gid.to_u32()))
                .filter(|&(_, gid)| gid != 0)
                .collect(),
            Err(_) => BTreeMap::new(),
        };

        Ok(Self {
            data,
            name,
            family: family.unwrap_or_else(|| "(unknown)".to_string()),
            style: style.unwrap_or_else(|| "(unknown)".to_string()),
            bold,
            italic,
            scalable,
            horizontal,
            vertical,
            kerning,
            glyph_count,
            charmap_count,
            charmap,
        })
    }

    /// Reported face name: PostScript name, else family name, else the file
    /// stem the face was opened from. Never empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn bold(&self) -> bool {
        self.bold
    }

    pub fn italic(&self) -> bool {
        self.italic
    }

    pub fn scalable(&self) -> bool {
        self.scalable
    }

    pub fn horizontal(&self) -> bool {
        self.horizontal
    }

    pub fn vertical(&self) -> bool {
        self.vertical
    }

    pub fn kerning(&self) -> bool {
        self.kerning
    }

    /// Bitmap fast-glyph access. Never set for sfnt inputs.
    pub fn fast_glyphs(&self) -> bool {
        false
    }

    pub fn glyph_count(&self) -> u16 {
        self.glyph_count
    }

    pub fn charmap_count(&self) -> u16 {
        self.charmap_count
    }

    /// Character code to glyph index mapping of the selected charmap.
    pub fn current_charmap(&self) -> &BTreeMap<u32, u32> {
        &self.charmap
    }

    /// First (character code, glyph index) pair of the selected charmap, or
    /// `(0, 0)` when the charmap is empty.
    pub fn first_char(&self) -> (u32, u32) {
        self.charmap
            .iter()
            .next()
            .map(|(&code, &gid)| (code, gid))
            .unwrap_or((0, 0))
    }

    /// Next (character code, glyph index) pair after `code`. A glyph index
    /// of 0 means the charmap has no more characters.
    pub fn next_char(&self, code: u32) -> (u32, u32) {
        self.charmap
            .range((Excluded(code), Unbounded))
            .next()
            .map(|(&code, &gid)| (code, gid))
            .unwrap_or((0, 0))
    }

    /// Name of a glyph from the `post` table, when the face carries names.
    pub fn glyph_name(&self, glyph_index: u32) -> Option<String> {
        self.glyph_names().get(glyph_index)
    }

    /// Glyph-name lookup with the `post` table resolved once. Prefer this
    /// over repeated [`Face::glyph_name`] calls when walking a charmap.
    pub fn glyph_names(&self) -> GlyphNames<'_> {
        let post = FontRef::new(&self.data)
            .ok()
            .and_then(|font| font.post().ok());
        GlyphNames { post }
    }

    /// Build the fixed info record shown for this face.
    pub fn record(&self, path: &Path) -> FaceRecord {
        FaceRecord {
            name: self.name.clone(),
            path: path.display().to_string(),
            family: self.family.clone(),
            style: self.style.clone(),
            bold: self.bold,
            italic: self.italic,
            scalable: self.scalable,
            horizontal: self.horizontal,
            vertical: self.vertical,
            kerning: self.kerning,
            fast_glyphs: self.fast_glyphs(),
            num_glyphs: self.glyph_count,
            num_charmaps: self.charmap_count,
        }
    }
}

impl std::fmt::Debug for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Face")
            .field("name", &self.name)
            .field("glyph_count", &self.glyph_count)
            .field("charmap_count", &self.charmap_count)
            .finish_non_exhaustive()
    }
}

/// Glyph names of one face, with the `post` table parsed up front.
pub struct GlyphNames<'a> {
    post: Option<Post<'a>>,
}

impl GlyphNames<'_> {
    pub fn get(&self, glyph_index: u32) -> Option<String> {
        let post = self.post.as_ref()?;
        let gid = u16::try_from(glyph_index).ok()?;
        post.glyph_name(GlyphId16::new(gid)).map(str::to_string)
    }
}

/// Fixed 13-field record describing one face at one path.
#[derive(Debug, Clone, Serialize)]
pub struct FaceRecord {
    pub name: String,
    pub path: String,
    pub family: String,
    pub style: String,
    pub bold: bool,
    pub italic: bool,
    pub scalable: bool,
    pub horizontal: bool,
    pub vertical: bool,
    pub kerning: bool,
    pub fast_glyphs: bool,
    pub num_glyphs: u16,
    pub num_charmaps: u16,
}

impl FaceRecord {
    /// Write the record in its fixed label-per-line text form.
    pub fn write(&self, mut w: impl Write) -> Result<()> {
        writeln!(w, "{:<13} {}", "Name:", self.name)?;
        writeln!(w, "{:<13} {}", "Path:", self.path)?;
        writeln!(w, "{:<13} {}", "Family:", self.family)?;
        writeln!(w, "{:<13} {}", "Style:", self.style)?;
        writeln!(w, "{:<13} {}", "Bold:", self.bold)?;
        writeln!(w, "{:<13} {}", "Italic:", self.italic)?;
        writeln!(w, "{:<13} {}", "Scalable:", self.scalable)?;
        writeln!(w, "{:<13} {}", "Horizontal:", self.horizontal)?;
        writeln!(w, "{:<13} {}", "Vertical:", self.vertical)?;
        writeln!(w, "{:<13} {}", "Kerning:", self.kerning)?;
        writeln!(w, "{:<13} {}", "Fast Glyphs:", self.fast_glyphs)?;
        writeln!(w, "{:<13} {}", "Num Glyphs:", self.num_glyphs)?;
        writeln!(w, "{:<13} {}", "Num Charmaps:", self.num_charmaps)?;
        Ok(())
    }
}

fn name_string(font: &FontRef, id: NameId) -> Option<String> {
    let table = font.name().ok()?;
    let data = table.string_data();

    for record in table.name_record() {
        if record.name_id() != id || !record.is_unicode() {
            continue;
        }
        if let Ok(entry) = record.string(data) {
            let rendered = entry.to_string();
            let trimmed = rendered.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }

    None
}

// OS/2 fsSelection wins over head.macStyle.
fn style_flags(font: &FontRef) -> (bool, bool) {
    if let Ok(os2) = font.os2() {
        let selection = os2.fs_selection();
        return (
            selection.contains(SelectionFlags::BOLD),
            selection.contains(SelectionFlags::ITALIC),
        );
    }

    if let Ok(head) = font.head() {
        let mac_style = head.mac_style();
        return (
            mac_style.contains(MacStyle::BOLD),
            mac_style.contains(MacStyle::ITALIC),
        );
    }

    (false, false)
}

fn has_table(font: &FontRef, tag: &[u8; 4]) -> bool {
    let tag = Tag::new(tag);
    font.table_directory
        .table_records()
        .iter()
        .any(|rec| rec.tag() == tag)
}
