//! vCard value splitting and unescaping.

/// Unescapes a vCard text value.
///
/// vCard escapes: \n, \N (newline), \, (comma), \; (semicolon), \\ (backslash)
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.peek() {
            Some('n' | 'N') => {
                chars.next();
                result.push('\n');
            }
            Some(&next @ (',' | ';' | '\\' | ':')) => {
                chars.next();
                result.push(next);
            }
            _ => result.push(c),
        }
    }

    result
}

/// Splits a structured value (N, ADR, ORG) on unescaped semicolons.
///
/// The parts are returned still escaped.
#[must_use]
pub fn split_structured(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == ';' {
            parts.push(&s[start..i]);
            start = i + 1;
        }
    }

    parts.push(&s[start..]);
    parts
}

/// Splits a component value on unescaped commas and unescapes each part.
#[must_use]
pub fn split_component(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }

    let mut parts = Vec::new();
    let mut current = String::new();
    let mut escaped = false;

    for c in s.chars() {
        if escaped {
            escaped = false;
            current.push('\\');
            current.push(c);
        } else if c == '\\' {
            escaped = true;
        } else if c == ',' {
            parts.push(unescape_text(&std::mem::take(&mut current)));
        } else {
            current.push(c);
        }
    }
    if escaped {
        current.push('\\');
    }

    parts.push(unescape_text(&current));
    parts
}

/// Charsets whose bytes map one to one onto the first 256 code points.
const LATIN1_CHARSETS: &[&str] = &["ISO-8859-1", "ISO_8859-1", "LATIN1", "LATIN-1"];

/// Decodes a quoted-printable value (vCard 2.1 `ENCODING=QUOTED-PRINTABLE`).
///
/// `=XX` hex pairs become bytes; anything else is kept. The bytes are read as
/// Latin-1 when `charset` says so, and as UTF-8 (lossily) otherwise. Soft line
/// breaks must already be joined.
#[must_use]
pub fn decode_quoted_printable(s: &str, charset: Option<&str>) -> String {
    let bytes = s.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while let Some(&byte) = bytes.get(i) {
        let pair = bytes
            .get(i + 1..i + 3)
            .filter(|pair| pair.iter().all(u8::is_ascii_hexdigit));
        match pair {
            Some(&[high, low]) if byte == b'=' => {
                decoded.push((hex_value(high) << 4) | hex_value(low));
                i += 3;
            }
            _ => {
                decoded.push(byte);
                i += 1;
            }
        }
    }

    let latin1 =
        charset.is_some_and(|cs| LATIN1_CHARSETS.iter().any(|l| cs.eq_ignore_ascii_case(l)));
    if latin1 {
        decoded.into_iter().map(char::from).collect()
    } else {
        String::from_utf8_lossy(&decoded).into_owned()
    }
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unescape_basic() {
        assert_eq!(unescape_text("a\\,b\\;c\\\\d"), "a,b;c\\d");
        assert_eq!(unescape_text("line1\\nline2\\Nline3"), "line1\nline2\nline3");
    }

    #[test]
    fn unescape_keeps_unknown_escapes() {
        assert_eq!(unescape_text("C:\\temp"), "C:\\temp");
        assert_eq!(unescape_text("trailing\\"), "trailing\\");
    }

    #[test]
    fn split_structured_respects_escapes() {
        assert_eq!(split_structured("Doe;Jane;;;"), vec!["Doe", "Jane", "", "", ""]);
        assert_eq!(split_structured("a\\;b;c"), vec!["a\\;b", "c"]);
        assert_eq!(split_structured("a\\\\;b"), vec!["a\\\\", "b"]);
    }

    #[test]
    fn quoted_printable_utf8() {
        assert_eq!(decode_quoted_printable("caf=C3=A9 =3D ok", None), "café = ok");
        assert_eq!(
            decode_quoted_printable("line one=0D=0Aline two", Some("UTF-8")),
            "line one\r\nline two"
        );
    }

    #[test]
    fn quoted_printable_latin1() {
        assert_eq!(decode_quoted_printable("caf=E9", Some("iso-8859-1")), "café");
    }

    #[test]
    fn quoted_printable_keeps_stray_equals() {
        assert_eq!(decode_quoted_printable("a=zz=4", None), "a=zz=4");
        assert_eq!(decode_quoted_printable("=+1", None), "=+1");
    }

    #[test]
    fn split_component_unescapes_parts() {
        assert_eq!(split_component("Bobby,Rob"), vec!["Bobby", "Rob"]);
        assert_eq!(split_component("Smith\\, Jr.,Bob"), vec!["Smith, Jr.", "Bob"]);
        assert!(split_component("").is_empty());
    }
}
