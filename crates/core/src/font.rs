//! 5x5 bitmap font for on-grid text.
//!
//! Each glyph is five rows of five bits, bit 4 being the leftmost column.
//! Index 0-9 are the digits, 10-35 the uppercase letters (lowercase input
//! is folded to uppercase).

/// Glyph bitmaps: digits `0`-`9` followed by `A`-`Z`.
pub const FONT_5X5: [[u8; 5]; 36] = [
    // 0-9
    [0x0E, 0x11, 0x11, 0x11, 0x0E],
    [0x04, 0x0C, 0x04, 0x04, 0x0E],
    [0x0E, 0x11, 0x02, 0x04, 0x1F],
    [0x1E, 0x01, 0x06, 0x01, 0x1E],
    [0x02, 0x06, 0x0A, 0x1F, 0x02],
    [0x1F, 0x10, 0x1E, 0x01, 0x1E],
    [0x0E, 0x10, 0x1E, 0x11, 0x0E],
    [0x1F, 0x01, 0x02, 0x04, 0x04],
    [0x0E, 0x11, 0x0E, 0x11, 0x0E],
    [0x0E, 0x11, 0x0F, 0x01, 0x0E],
    // A-Z
    [0x0E, 0x11, 0x1F, 0x11, 0x11],
    [0x1E, 0x11, 0x1E, 0x11, 0x1E],
    [0x0E, 0x11, 0x10, 0x11, 0x0E],
    [0x1E, 0x11, 0x11, 0x11, 0x1E],
    [0x1F, 0x10, 0x1E, 0x10, 0x1F],
    [0x1F, 0x10, 0x1E, 0x10, 0x10],
    [0x0E, 0x10, 0x13, 0x11, 0x0E],
    [0x11, 0x11, 0x1F, 0x11, 0x11],
    [0x0E, 0x04, 0x04, 0x04, 0x0E],
    [0x01, 0x01, 0x01, 0x11, 0x0E],
    [0x11, 0x12, 0x1C, 0x12, 0x11],
    [0x10, 0x10, 0x10, 0x10, 0x1F],
    [0x11, 0x1B, 0x15, 0x11, 0x11],
    [0x11, 0x19, 0x15, 0x13, 0x11],
    [0x0E, 0x11, 0x11, 0x11, 0x0E],
    [0x1E, 0x11, 0x1E, 0x10, 0x10],
    [0x0E, 0x11, 0x15, 0x12, 0x0D],
    [0x1E, 0x11, 0x1E, 0x12, 0x11],
    [0x0F, 0x10, 0x0E, 0x01, 0x1E],
    [0x1F, 0x04, 0x04, 0x04, 0x04],
    [0x11, 0x11, 0x11, 0x11, 0x0E],
    [0x11, 0x11, 0x11, 0x0A, 0x04],
    [0x11, 0x11, 0x15, 0x1B, 0x11],
    [0x11, 0x0A, 0x04, 0x0A, 0x11],
    [0x11, 0x0A, 0x04, 0x04, 0x04],
    [0x1F, 0x02, 0x04, 0x08, 0x1F],
];

/// Glyph cell width plus one column of spacing.
pub const GLYPH_ADVANCE: i32 = 6;

/// Map a character to its glyph index, folding lowercase to uppercase.
pub fn glyph_index(c: char) -> Option<usize> {
    match c {
        '0'..='9' => Some(c as usize - '0' as usize),
        'A'..='Z' => Some(c as usize - 'A' as usize + 10),
        'a'..='z' => Some(c as usize - 'a' as usize + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_letters_resolve() {
        assert_eq!(glyph_index('0'), Some(0));
        assert_eq!(glyph_index('9'), Some(9));
        assert_eq!(glyph_index('A'), Some(10));
        assert_eq!(glyph_index('Z'), Some(35));
        assert_eq!(glyph_index('j'), glyph_index('J'));
        assert_eq!(glyph_index(' '), None);
        assert_eq!(glyph_index('!'), None);
    }

    #[test]
    fn glyphs_fit_five_columns() {
        for glyph in FONT_5X5.iter() {
            for row in glyph {
                assert_eq!(row & !0x1F, 0);
            }
        }
    }
}
