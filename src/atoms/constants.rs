// ── Lantern Atoms: Constants ───────────────────────────────────────────────
// Fixed presentation tables for the bot. All named color and emoji values
// live here; collecting them in one place eliminates magic strings and keeps
// embed-building code self-documenting.
//
// Values are `&'static str` constants: read-only by construction, safe to
// share across any number of tasks without coordination.

pub use super::namespaces::*;

use super::error::{AtomsError, AtomsResult};

// ── Embed colors ───────────────────────────────────────────────────────────
// 6-digit `#`-prefixed hex strings. `EMBED` matches Discord's dark embed
// background so neutral embeds blend into the client chrome.

pub struct Colors;

impl Colors {
    pub const ERROR: &'static str = "#f54242";
    pub const WARN: &'static str = "#f5a742";
    pub const EMBED: &'static str = "#2b2d31";

    /// Look up a color by its semantic label. Absent labels yield `None`.
    pub fn get(label: &str) -> Option<&'static str> {
        match label {
            "error" => Some(Self::ERROR),
            "warn" => Some(Self::WARN),
            "embed" => Some(Self::EMBED),
            _ => None,
        }
    }

    /// Like [`get`](Self::get), but an absent label is a hard error.
    pub fn require(label: &str) -> AtomsResult<&'static str> {
        Self::get(label).ok_or_else(|| AtomsError::unknown_label("colors", label))
    }

    /// The exact label set of the table.
    pub fn labels() -> [&'static str; 3] {
        ["error", "warn", "embed"]
    }
}

// ── Status emojis ──────────────────────────────────────────────────────────
// Single glyphs used as status prefixes in channel replies.

pub struct Emojis;

impl Emojis {
    pub const ERROR: &'static str = "❌";
    pub const WARN: &'static str = "⚠️";

    /// Look up a glyph by its semantic label. Absent labels yield `None`.
    pub fn get(label: &str) -> Option<&'static str> {
        match label {
            "error" => Some(Self::ERROR),
            "warn" => Some(Self::WARN),
            _ => None,
        }
    }

    /// Like [`get`](Self::get), but an absent label is a hard error.
    pub fn require(label: &str) -> AtomsResult<&'static str> {
        Self::get(label).ok_or_else(|| AtomsError::unknown_label("emojis", label))
    }

    /// The exact label set of the table.
    pub fn labels() -> [&'static str; 2] {
        ["error", "warn"]
    }
}
