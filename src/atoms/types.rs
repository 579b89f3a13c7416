// ── Lantern Atoms: Pure Data Types ─────────────────────────────────────────
// Typed forms of the constants tables plus the conversions channel bridges
// need. No I/O, no side effects.

use serde::{Deserialize, Serialize};

use super::constants::{Colors, Emojis};
use super::error::{AtomsError, AtomsResult};

/// The shared label set of [`Colors`] and [`Emojis`], as a type.
///
/// Bridges route on this instead of raw label strings so an unknown label is
/// a deserialization error at the boundary, not a silent lookup miss later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warn,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
        }
    }

    /// The embed color for this severity.
    pub fn color(self) -> &'static str {
        match self {
            Severity::Error => Colors::ERROR,
            Severity::Warn => Colors::WARN,
        }
    }

    /// The status glyph for this severity.
    pub fn emoji(self) -> &'static str {
        match self {
            Severity::Error => Emojis::ERROR,
            Severity::Warn => Emojis::WARN,
        }
    }

    /// Format a glyph-prefixed status line for a channel reply.
    pub fn prefixed(self, message: &str) -> String {
        format!("{} {}", self.emoji(), message)
    }
}

/// Convert a `#rrggbb` table value to the integer form Discord's embed REST
/// payloads require.
pub fn embed_color(hex: &str) -> AtomsResult<u32> {
    let digits = hex
        .strip_prefix('#')
        .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| AtomsError::InvalidColor(hex.to_string()))?;
    u32::from_str_radix(digits, 16).map_err(|_| AtomsError::InvalidColor(hex.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_maps_to_tables() {
        assert_eq!(Severity::Error.color(), "#f54242");
        assert_eq!(Severity::Warn.color(), "#f5a742");
        assert_eq!(Severity::Error.emoji(), "❌");
        assert_eq!(Severity::Warn.emoji(), "⚠️");
        assert_eq!(Severity::Warn.label(), "warn");
    }

    #[test]
    fn prefixed_status_line() {
        assert_eq!(Severity::Warn.prefixed("rate limited"), "⚠️ rate limited");
        assert_eq!(Severity::Error.prefixed("no such command"), "❌ no such command");
    }

    #[test]
    fn severity_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"error\"");
        let parsed: Severity = serde_json::from_str("\"warn\"").unwrap();
        assert_eq!(parsed, Severity::Warn);
        assert!(serde_json::from_str::<Severity>("\"embed\"").is_err());
    }

    #[test]
    fn embed_color_converts_table_values() {
        assert_eq!(embed_color(Colors::ERROR), Ok(0xf54242));
        assert_eq!(embed_color(Colors::WARN), Ok(0xf5a742));
        assert_eq!(embed_color(Colors::EMBED), Ok(0x2b2d31));
    }

    #[test]
    fn embed_color_rejects_malformed_input() {
        for bad in ["f54242", "#f5424", "#f542421", "#f5424g", ""] {
            assert_eq!(embed_color(bad), Err(AtomsError::InvalidColor(bad.into())));
        }
    }
}
