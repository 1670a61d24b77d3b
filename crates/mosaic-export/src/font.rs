#![forbid(unsafe_code)]

//! Built-in 5×7 bitmap glyphs for raster export.
//!
//! Each row is five bits, most significant bit on the left.

/// Glyph width in bitmap cells.
pub const GLYPH_W: usize = 5;
/// Glyph height in bitmap cells.
pub const GLYPH_H: usize = 7;

/// Drawn for characters without a bitmap.
const FALLBACK: [u8; GLYPH_H] = [
    0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111,
];

/// Bitmap rows for `c`.
pub fn bitmap(c: char) -> [u8; GLYPH_H] {
    match c {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '@' => [0b01110, 0b10001, 0b10111, 0b10101, 0b10111, 0b10000, 0b01111],
        '&' => [0b01100, 0b10010, 0b10100, 0b01000, 0b10101, 0b10010, 0b01101],
        '?' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '%' => [0b11001, 0b11010, 0b00010, 0b00100, 0b01000, 0b01011, 0b10011],
        '§' => [0b01111, 0b10000, 0b01110, 0b10001, 0b01110, 0b00001, 0b11110],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        '#' => [0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010],
        _ => FALLBACK,
    }
}

/// Whether bitmap cell `(row, col)` of `c` is set.
pub fn is_set(c: char, row: usize, col: usize) -> bool {
    if row >= GLYPH_H || col >= GLYPH_W {
        return false;
    }
    bitmap(c)[row] & (1 << (GLYPH_W - 1 - col)) != 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_style::GLYPHS;

    #[test]
    fn every_tool_glyph_has_a_bitmap() {
        for g in GLYPHS {
            assert_ne!(bitmap(g), FALLBACK, "missing bitmap for {g:?}");
        }
    }

    #[test]
    fn bang_is_a_center_column() {
        assert!(is_set('!', 0, 2));
        assert!(!is_set('!', 0, 1));
        assert!(!is_set('!', 5, 2));
        assert!(!is_set('!', 7, 2));
    }
}
