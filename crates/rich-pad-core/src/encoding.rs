/// Byte-level text decoding for imported files.
use anyhow::{Context, Result};

/// Detected source encoding of an imported file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Utf8Bom,
    Utf16Le,
    Utf16Be,
    Ascii,
    /// A named encoding from `encoding_rs` (e.g., "windows-1252").
    Legacy(&'static str),
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Utf8 => write!(f, "UTF-8"),
            Self::Utf8Bom => write!(f, "UTF-8 BOM"),
            Self::Utf16Le => write!(f, "UTF-16 LE"),
            Self::Utf16Be => write!(f, "UTF-16 BE"),
            Self::Ascii => write!(f, "ASCII"),
            Self::Legacy(name) => write!(f, "{name}"),
        }
    }
}

/// Decodes raw file bytes into text, reporting the encoding used.
///
/// BOMs are honored first, then UTF-8/ASCII, then a chardetng guess for
/// legacy encodings.
///
/// # Errors
///
/// Returns an error when the bytes cannot be decoded as text under the
/// detected encoding.
pub fn decode_text(bytes: &[u8]) -> Result<(String, TextEncoding)> {
    let encoding = detect_encoding(bytes);
    let text = decode_bytes(bytes, encoding)?;
    Ok((text, encoding))
}

/// Normalizes line endings to `\n`.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn detect_encoding(bytes: &[u8]) -> TextEncoding {
    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return TextEncoding::Utf8Bom;
    }
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return TextEncoding::Utf16Le;
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return TextEncoding::Utf16Be;
    }

    if std::str::from_utf8(bytes).is_ok() {
        if bytes.iter().all(|&b| b < 128) {
            return TextEncoding::Ascii;
        }
        return TextEncoding::Utf8;
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(bytes, true);
    TextEncoding::Legacy(detector.guess(None, true).name())
}

fn decode_utf16(bytes: &[u8], big_endian: bool) -> Result<String> {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| {
            if big_endian {
                u16::from_be_bytes([pair[0], pair[1]])
            } else {
                u16::from_le_bytes([pair[0], pair[1]])
            }
        })
        .collect();
    String::from_utf16(&units).context("invalid UTF-16 content")
}

fn decode_bytes(bytes: &[u8], encoding: TextEncoding) -> Result<String> {
    match encoding {
        TextEncoding::Utf8 | TextEncoding::Ascii => {
            String::from_utf8(bytes.to_vec()).context("invalid UTF-8 content")
        }
        TextEncoding::Utf8Bom => {
            String::from_utf8(bytes[3..].to_vec()).context("invalid UTF-8 BOM content")
        }
        TextEncoding::Utf16Le => decode_utf16(&bytes[2..], false),
        TextEncoding::Utf16Be => decode_utf16(&bytes[2..], true),
        TextEncoding::Legacy(name) => {
            let encoding = encoding_rs::Encoding::for_label(name.as_bytes())
                .with_context(|| format!("unknown encoding: {name}"))?;
            let (decoded, _, had_errors) = encoding.decode(bytes);
            if had_errors {
                anyhow::bail!("encoding errors while decoding as {name}");
            }
            Ok(decoded.into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ascii() {
        let (text, encoding) = decode_text(b"hello world").unwrap();
        assert_eq!(text, "hello world");
        assert_eq!(encoding, TextEncoding::Ascii);
    }

    #[test]
    fn test_decode_utf8() {
        let (text, encoding) = decode_text("héllo wörld".as_bytes()).unwrap();
        assert_eq!(text, "héllo wörld");
        assert_eq!(encoding, TextEncoding::Utf8);
    }

    #[test]
    fn test_decode_utf8_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("hello".as_bytes());
        let (text, encoding) = decode_text(&bytes).unwrap();
        assert_eq!(text, "hello");
        assert_eq!(encoding, TextEncoding::Utf8Bom);
    }

    #[test]
    fn test_decode_utf16_le() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "hi 🌍".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let (text, encoding) = decode_text(&bytes).unwrap();
        assert_eq!(text, "hi 🌍");
        assert_eq!(encoding, TextEncoding::Utf16Le);
    }

    #[test]
    fn test_decode_utf16_be() {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in "abc".encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        let (text, encoding) = decode_text(&bytes).unwrap();
        assert_eq!(text, "abc");
        assert_eq!(encoding, TextEncoding::Utf16Be);
    }

    #[test]
    fn test_decode_legacy_latin1() {
        // "café" in windows-1252: é = 0xE9, invalid as UTF-8.
        let bytes = [b'c', b'a', b'f', 0xE9];
        let (text, encoding) = decode_text(&bytes).unwrap();
        assert_eq!(text, "café");
        assert!(matches!(encoding, TextEncoding::Legacy(_)));
    }

    #[test]
    fn test_decode_empty() {
        let (text, encoding) = decode_text(&[]).unwrap();
        assert_eq!(text, "");
        assert_eq!(encoding, TextEncoding::Ascii);
    }

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn test_encoding_display() {
        assert_eq!(TextEncoding::Utf8.to_string(), "UTF-8");
        assert_eq!(TextEncoding::Utf16Le.to_string(), "UTF-16 LE");
        assert_eq!(TextEncoding::Legacy("windows-1252").to_string(), "windows-1252");
    }
}
