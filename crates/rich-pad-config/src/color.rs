/// Hex color type with serde support for `"#RRGGBB"` strings.
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#')?;
        if s.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb() {
        let c = HexColor::from_hex("#FF8800").unwrap();
        assert_eq!(c, HexColor::rgb(255, 136, 0));
    }

    #[test]
    fn test_parse_lowercase() {
        let c = HexColor::from_hex("#ff0000").unwrap();
        assert_eq!(c, HexColor::rgb(255, 0, 0));
    }

    #[test]
    fn test_round_trip() {
        let c = HexColor::rgb(244, 241, 234);
        let hex = c.to_hex();
        assert_eq!(hex, "#F4F1EA");
        assert_eq!(HexColor::from_hex(&hex).unwrap(), c);
    }

    #[test]
    fn test_invalid_input() {
        assert!(HexColor::from_hex("").is_none());
        assert!(HexColor::from_hex("#").is_none());
        assert!(HexColor::from_hex("#GG0000").is_none());
        assert!(HexColor::from_hex("#12345").is_none());
        assert!(HexColor::from_hex("123456").is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let c = HexColor::rgb(26, 26, 26);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#1A1A1A\"");
        let parsed: HexColor = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, c);
    }
}
