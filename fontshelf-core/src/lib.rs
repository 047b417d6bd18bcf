/// fontshelf-core: the patient librarian of your font directory
///
/// Point it at a directory of font files and it opens each one, asks for its
/// name, and files it away on the shelf. Afterwards you can browse the shelf
/// interactively, pull out a single face and read its record card, or leaf
/// through a face's character map one code point at a time.
///
/// ## What lives where
///
/// - [`face`]: the capability surface of one opened font face — names, style
///   flags, glyph and charmap counts, charmap iteration, glyph names. Parsing
///   is delegated to read-fonts and skrifa; nothing here touches outlines,
///   hinting, or rasterization.
/// - [`catalog`]: the startup scan. Every direct entry of the directory is
///   visited once; whatever opens as a face is indexed by its reported name,
///   whatever doesn't is quietly skipped and only counted.
/// - [`browser`]: the interactive dispatch loop — `help`, `list`, `quit`,
///   font-name lookup, and prefix completion over commands and shelf names.
/// - [`charmap`]: character-code to glyph-name listings in the
///   `first_char`/`next_char` style.
///
/// The catalog is built once and never mutated afterwards; the browser only
/// ever reads from it. There is no background work and no persistence.
pub mod browser;
pub mod catalog;
pub mod charmap;
pub mod face;
