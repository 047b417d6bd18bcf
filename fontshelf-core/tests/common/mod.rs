//! Hand-assembled minimal sfnt fixtures.
//!
//! Just enough table bytes to satisfy the parser: a table directory, a
//! version-0.5 `maxp`, and optional `cmap`/`post`/`head`/`name` tables for
//! the tests that need them.
#![allow(dead_code)]

fn be16(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}

fn be32(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Assemble an sfnt from (tag, bytes) pairs. Records are sorted by tag as
/// the format requires.
pub fn build_font(tables: &[([u8; 4], Vec<u8>)]) -> Vec<u8> {
    let mut tables: Vec<&([u8; 4], Vec<u8>)> = tables.iter().collect();
    tables.sort_by_key(|(tag, _)| *tag);

    let mut data = Vec::new();
    data.extend_from_slice(&be32(0x0001_0000));
    data.extend_from_slice(&be16(tables.len() as u16));
    // searchRange / entrySelector / rangeShift are not validated
    data.extend_from_slice(&[0u8; 6]);

    let mut offset = 12 + 16 * tables.len() as u32;
    for (tag, bytes) in &tables {
        data.extend_from_slice(tag);
        data.extend_from_slice(&be32(0)); // checksum
        data.extend_from_slice(&be32(offset));
        data.extend_from_slice(&be32(bytes.len() as u32));
        offset += bytes.len() as u32;
    }
    for (_, bytes) in &tables {
        data.extend_from_slice(bytes);
    }

    data
}

/// `maxp` version 0.5.
pub fn maxp(num_glyphs: u16) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&be32(0x0000_5000));
    data.extend_from_slice(&be16(num_glyphs));
    data
}

/// Smallest face the crate accepts: a table directory and `maxp`.
pub fn minimal_font(num_glyphs: u16) -> Vec<u8> {
    build_font(&[(*b"maxp", maxp(num_glyphs))])
}

/// `cmap` with one format-4 subtable mapping A/B/C (U+0041..U+0043) to the
/// standard Macintosh glyph ids 36/37/38.
pub fn cmap_abc() -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&be16(0)); // version
    data.extend_from_slice(&be16(1)); // numTables
    data.extend_from_slice(&be16(3)); // platform: Windows
    data.extend_from_slice(&be16(1)); // encoding: Unicode BMP
    data.extend_from_slice(&be32(12)); // subtable offset

    data.extend_from_slice(&be16(4)); // format
    data.extend_from_slice(&be16(32)); // length
    data.extend_from_slice(&be16(0)); // language
    data.extend_from_slice(&be16(4)); // segCountX2
    data.extend_from_slice(&be16(4)); // searchRange
    data.extend_from_slice(&be16(1)); // entrySelector
    data.extend_from_slice(&be16(0)); // rangeShift
    data.extend_from_slice(&be16(0x0043)); // endCode
    data.extend_from_slice(&be16(0xFFFF));
    data.extend_from_slice(&be16(0)); // reservedPad
    data.extend_from_slice(&be16(0x0041)); // startCode
    data.extend_from_slice(&be16(0xFFFF));
    data.extend_from_slice(&be16(0xFFE3)); // idDelta: 36 - 0x41
    data.extend_from_slice(&be16(1));
    data.extend_from_slice(&be16(0)); // idRangeOffset
    data.extend_from_slice(&be16(0));
    data
}

/// `post` version 1.0: glyph names come from the standard Macintosh order.
pub fn post_v1() -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&be32(0x0001_0000)); // version
    data.extend_from_slice(&be32(0)); // italicAngle
    data.extend_from_slice(&be16(0)); // underlinePosition
    data.extend_from_slice(&be16(0)); // underlineThickness
    data.extend_from_slice(&be32(0)); // isFixedPitch
    data.extend_from_slice(&be32(0)); // minMemType42
    data.extend_from_slice(&be32(0)); // maxMemType42
    data.extend_from_slice(&be32(0)); // minMemType1
    data.extend_from_slice(&be32(0)); // maxMemType1
    data
}

/// `head` with the given macStyle and everything else zeroed.
pub fn head(mac_style: u16) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&be32(0x0001_0000)); // version
    data.extend_from_slice(&be32(0)); // fontRevision
    data.extend_from_slice(&be32(0)); // checksumAdjustment
    data.extend_from_slice(&be32(0x5F0F_3CF5)); // magicNumber
    data.extend_from_slice(&be16(0)); // flags
    data.extend_from_slice(&be16(1000)); // unitsPerEm
    data.extend_from_slice(&[0u8; 8]); // created
    data.extend_from_slice(&[0u8; 8]); // modified
    data.extend_from_slice(&be16(0)); // xMin
    data.extend_from_slice(&be16(0)); // yMin
    data.extend_from_slice(&be16(0)); // xMax
    data.extend_from_slice(&be16(0)); // yMax
    data.extend_from_slice(&be16(mac_style));
    data.extend_from_slice(&be16(8)); // lowestRecPPEM
    data.extend_from_slice(&be16(0)); // fontDirectionHint
    data.extend_from_slice(&be16(0)); // indexToLocFormat
    data.extend_from_slice(&be16(0)); // glyphDataFormat
    data
}

/// `name` table with Windows Unicode BMP records for the given name ids.
pub fn name_table(entries: &[(u16, &str)]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&be16(0)); // version
    data.extend_from_slice(&be16(entries.len() as u16));
    data.extend_from_slice(&be16(6 + 12 * entries.len() as u16)); // storageOffset

    let mut storage = Vec::new();
    for (name_id, text) in entries {
        let encoded: Vec<u8> = text
            .encode_utf16()
            .flat_map(|unit| unit.to_be_bytes())
            .collect();
        data.extend_from_slice(&be16(3)); // platform: Windows
        data.extend_from_slice(&be16(1)); // encoding: Unicode BMP
        data.extend_from_slice(&be16(0x0409)); // language: en-US
        data.extend_from_slice(&be16(*name_id));
        data.extend_from_slice(&be16(encoded.len() as u16));
        data.extend_from_slice(&be16(storage.len() as u16));
        storage.extend_from_slice(&encoded);
    }

    data.extend_from_slice(&storage);
    data
}
