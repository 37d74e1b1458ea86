//! Attribute value escaping.
//!
//! Follows the string representation of attribute values from RFC 4514
//! §2.4: special characters become `\NN` hex pairs, as do a leading `#` or
//! space and a trailing space.
//!
//! Escaping works on single bytes. A character outside Latin-1 is narrowed to
//! its low byte before it is escaped, so multibyte text that needs escaping
//! does not survive intact.

/// Characters that always need escaping inside a value.
const SPECIALS: &[u8] = b",+\"\\<>;";

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Escapes a value for use on an LDIF line or inside a distinguished name.
///
/// Values with nothing to escape come back unchanged. Otherwise every special
/// character, every byte outside `0x20..=0x5F` and `a..=z`, a leading `#` or
/// space and a single trailing space are replaced by their `\NN` escape.
#[must_use]
pub fn escape_value(value: &str) -> String {
    if !needs_escape(value) {
        return value.to_string();
    }

    let bytes: Vec<u8> = value.chars().map(low_byte).collect();
    let mut result = String::with_capacity(bytes.len() * 3);

    // The trailing space is escaped after everything else
    let mut end = bytes.len();
    let trailing_space = end > 1 && bytes[end - 1] == b' ';
    if trailing_space {
        end -= 1;
    }

    let mut start = 0;
    if matches!(bytes[0], b'#' | b' ') {
        push_hex(&mut result, bytes[0]);
        start = 1;
    }

    for &byte in &bytes[start..end] {
        if is_plain(byte) {
            result.push(char::from(byte));
        } else {
            push_hex(&mut result, byte);
        }
    }

    if trailing_space {
        result.push_str("\\20");
    }

    result
}

/// Returns whether [`escape_value`] would change `value`.
#[must_use]
pub fn needs_escape(value: &str) -> bool {
    !value.is_empty()
        && (value.starts_with(['#', ' '])
            || value.ends_with(' ')
            || value.bytes().any(|b| SPECIALS.contains(&b)))
}

fn is_plain(byte: u8) -> bool {
    !SPECIALS.contains(&byte) && matches!(byte, 0x20..=0x5F | b'a'..=b'z')
}

fn low_byte(c: char) -> u8 {
    u32::from(c).to_le_bytes()[0]
}

fn push_hex(out: &mut String, byte: u8) {
    out.push('\\');
    out.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
    out.push(char::from(HEX_DIGITS[usize::from(byte & 0x0F)]));
}
