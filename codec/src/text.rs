//! Gen 3 character set (Western releases)

/// End-of-string marker
pub const TERMINATOR: u8 = 0xFF;

/// Substituted for bytes with no printable mapping
pub const PLACEHOLDER: char = '*';

/// Decode game text, stopping at the terminator or after `max_len` bytes.
///
/// Unmapped bytes become [`PLACEHOLDER`] so a partially corrupted name still
/// decodes.
pub fn decode_text(bytes: &[u8], max_len: usize) -> String {
    bytes
        .iter()
        .take(max_len)
        .take_while(|&&b| b != TERMINATOR)
        .map(|&b| decode_byte(b).unwrap_or(PLACEHOLDER))
        .collect()
}

/// Encode text into a fixed-width field padded with the terminator.
///
/// Characters without a game glyph are written as spaces.
pub fn encode_text(text: &str, len: usize) -> Vec<u8> {
    let mut out: Vec<u8> = text
        .chars()
        .take(len)
        .map(|c| encode_char(c).unwrap_or(0x00))
        .collect();
    out.resize(len, TERMINATOR);
    out
}

/// Map a single byte to its glyph
pub fn decode_byte(b: u8) -> Option<char> {
    let c = match b {
        0x00 => ' ',
        0x01 => 'À',
        0x02 => 'Á',
        0x03 => 'Â',
        0x04 => 'Ç',
        0x05 => 'È',
        0x06 => 'É',
        0x07 => 'Ê',
        0x08 => 'Ë',
        0x09 => 'Ì',
        0x0B => 'Î',
        0x0C => 'Ï',
        0x0D => 'Ò',
        0x0E => 'Ó',
        0x0F => 'Ô',
        0x10 => 'Œ',
        0x11 => 'Ù',
        0x12 => 'Ú',
        0x13 => 'Û',
        0x14 => 'Ñ',
        0x15 => 'ß',
        0x16 => 'à',
        0x17 => 'á',
        0x19 => 'ç',
        0x1A => 'è',
        0x1B => 'é',
        0x1C => 'ê',
        0x1D => 'ë',
        0x1E => 'ì',
        0x20 => 'î',
        0x21 => 'ï',
        0x22 => 'ò',
        0x23 => 'ó',
        0x24 => 'ô',
        0x25 => 'œ',
        0x26 => 'ù',
        0x27 => 'ú',
        0x28 => 'û',
        0x29 => 'ñ',
        0x2A => 'º',
        0x2B => 'ª',
        0x2D => '&',
        0x2E => '+',
        0x35 => '=',
        0x36 => ';',
        0x51 => '¿',
        0x52 => '¡',
        0x5A => 'Í',
        0x5B => '%',
        0x5C => '(',
        0x5D => ')',
        0x68 => 'â',
        0x6F => 'í',
        0x85 => '<',
        0x86 => '>',
        0xA1..=0xAA => char::from(b'0' + (b - 0xA1)),
        0xAB => '!',
        0xAC => '?',
        0xAD => '.',
        0xAE => '-',
        0xAF => '·',
        0xB0 => '…',
        0xB1 => '“',
        0xB2 => '”',
        0xB3 => '‘',
        0xB4 => '\'',
        0xB5 => '♂',
        0xB6 => '♀',
        0xB7 => '¥',
        0xB8 => ',',
        0xB9 => '×',
        0xBA => '/',
        0xBB..=0xD4 => char::from(b'A' + (b - 0xBB)),
        0xD5..=0xEE => char::from(b'a' + (b - 0xD5)),
        0xF0 => ':',
        0xF1 => 'Ä',
        0xF2 => 'Ö',
        0xF3 => 'Ü',
        0xF4 => 'ä',
        0xF5 => 'ö',
        0xF6 => 'ü',
        _ => return None,
    };
    Some(c)
}

/// Map a glyph back to its byte
pub fn encode_char(c: char) -> Option<u8> {
    let b = match c {
        ' ' => 0x00,
        'À' => 0x01,
        'Á' => 0x02,
        'Â' => 0x03,
        'Ç' => 0x04,
        'È' => 0x05,
        'É' => 0x06,
        'Ê' => 0x07,
        'Ë' => 0x08,
        'Ì' => 0x09,
        'Î' => 0x0B,
        'Ï' => 0x0C,
        'Ò' => 0x0D,
        'Ó' => 0x0E,
        'Ô' => 0x0F,
        'Œ' => 0x10,
        'Ù' => 0x11,
        'Ú' => 0x12,
        'Û' => 0x13,
        'Ñ' => 0x14,
        'ß' => 0x15,
        'à' => 0x16,
        'á' => 0x17,
        'ç' => 0x19,
        'è' => 0x1A,
        'é' => 0x1B,
        'ê' => 0x1C,
        'ë' => 0x1D,
        'ì' => 0x1E,
        'î' => 0x20,
        'ï' => 0x21,
        'ò' => 0x22,
        'ó' => 0x23,
        'ô' => 0x24,
        'œ' => 0x25,
        'ù' => 0x26,
        'ú' => 0x27,
        'û' => 0x28,
        'ñ' => 0x29,
        'º' => 0x2A,
        'ª' => 0x2B,
        '&' => 0x2D,
        '+' => 0x2E,
        '=' => 0x35,
        ';' => 0x36,
        '¿' => 0x51,
        '¡' => 0x52,
        'Í' => 0x5A,
        '%' => 0x5B,
        '(' => 0x5C,
        ')' => 0x5D,
        'â' => 0x68,
        'í' => 0x6F,
        '<' => 0x85,
        '>' => 0x86,
        '0'..='9' => 0xA1 + (c as u8 - b'0'),
        '!' => 0xAB,
        '?' => 0xAC,
        '.' => 0xAD,
        '-' => 0xAE,
        '·' => 0xAF,
        '…' => 0xB0,
        '“' | '"' => 0xB1,
        '”' => 0xB2,
        '‘' => 0xB3,
        '\'' | '’' => 0xB4,
        '♂' => 0xB5,
        '♀' => 0xB6,
        '¥' => 0xB7,
        ',' => 0xB8,
        '×' => 0xB9,
        '/' => 0xBA,
        'A'..='Z' => 0xBB + (c as u8 - b'A'),
        'a'..='z' => 0xD5 + (c as u8 - b'a'),
        ':' => 0xF0,
        'Ä' => 0xF1,
        'Ö' => 0xF2,
        'Ü' => 0xF3,
        'ä' => 0xF4,
        'ö' => 0xF5,
        'ü' => 0xF6,
        _ => return None,
    };
    Some(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_basic_name() {
        // "MAY" + terminator
        let bytes = [0xC7, 0xBB, 0xD3, 0xFF, 0x00, 0x00, 0x00, 0x00];
        assert_eq!(decode_text(&bytes, 8), "MAY");
    }

    #[test]
    fn test_decode_stops_at_terminator_despite_garbage() {
        let clean = [0xC8, 0xE3, 0xFF];
        let mut noisy = clean.to_vec();
        noisy.extend_from_slice(&[0xBB, 0x00, 0x13, 0xFE, 0xD5]);

        assert_eq!(decode_text(&clean, 10), "No");
        assert_eq!(decode_text(&noisy, 10), "No");
    }

    #[test]
    fn test_decode_respects_max_len() {
        let bytes = [0xBB, 0xBC, 0xBD, 0xBE];
        assert_eq!(decode_text(&bytes, 2), "AB");
        assert_eq!(decode_text(&bytes, 0), "");
    }

    #[test]
    fn test_decode_space_is_not_terminator() {
        let bytes = [0xCA, 0x00, 0xC9, 0xFF];
        assert_eq!(decode_text(&bytes, 4), "P O");
    }

    #[test]
    fn test_unmapped_byte_is_placeholder() {
        let bytes = [0xBB, 0xFA, 0xBC, 0xFF];
        assert_eq!(decode_text(&bytes, 4), "A*B");
    }

    #[test]
    fn test_decode_digits_and_symbols() {
        let bytes = [0xA1, 0xAA, 0xAB, 0xAC, 0xB5, 0xB6, 0xF0];
        assert_eq!(decode_text(&bytes, 7), "09!?♂♀:");
    }

    #[test]
    fn test_encode_pads_with_terminator() {
        let encoded = encode_text("Bob", 7);
        assert_eq!(encoded, vec![0xBC, 0xE3, 0xD6, 0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_encode_truncates() {
        let encoded = encode_text("ABCDEFGHIJK", 10);
        assert_eq!(encoded.len(), 10);
        assert_eq!(decode_text(&encoded, 10), "ABCDEFGHIJ");
    }

    #[test]
    fn test_encode_unknown_char_is_space() {
        let encoded = encode_text("A#B", 3);
        assert_eq!(encoded, vec![0xBB, 0x00, 0xBC]);
    }

    #[test]
    fn test_every_glyph_maps_back_to_its_byte() {
        for b in 0u8..TERMINATOR {
            if let Some(c) = decode_byte(b) {
                assert_eq!(encode_char(c), Some(b), "byte {b:#04x} -> {c:?}");
            }
        }
    }

    #[test]
    fn test_ascii_quote_aliases() {
        assert_eq!(encode_char('"'), Some(0xB1));
        assert_eq!(encode_char('’'), Some(0xB4));
        assert_eq!(decode_byte(0xB4), Some('\''));
    }
}
