// ── Lantern Atoms: Store Namespaces ────────────────────────────────────────
// Stable key-prefix identifiers for the bot's persistent key-value store.
// Every stored key is `<namespace>:<entity id>`; changing a prefix would
// orphan existing rows. Treat these as stable identifiers.

use super::error::{AtomsError, AtomsResult};

pub struct Namespaces;

impl Namespaces {
    /// Per-guild configuration (prefix, locale, log channel).
    pub const SETTINGS: &'static str = "settings";
    /// Per-user command cooldown timestamps.
    pub const COOLDOWNS: &'static str = "cooldowns";
    /// Pending DM pairing approvals.
    pub const PAIRING: &'static str = "pairing";
    /// Scheduled reminder payloads.
    pub const REMINDERS: &'static str = "reminders";

    /// Look up a namespace prefix by its semantic label.
    pub fn get(label: &str) -> Option<&'static str> {
        match label {
            "settings" => Some(Self::SETTINGS),
            "cooldowns" => Some(Self::COOLDOWNS),
            "pairing" => Some(Self::PAIRING),
            "reminders" => Some(Self::REMINDERS),
            _ => None,
        }
    }

    /// Like [`get`](Self::get), but an absent label is a hard error.
    pub fn require(label: &str) -> AtomsResult<&'static str> {
        Self::get(label).ok_or_else(|| AtomsError::unknown_label("namespaces", label))
    }

    /// The exact label set of the table.
    pub fn labels() -> [&'static str; 4] {
        ["settings", "cooldowns", "pairing", "reminders"]
    }
}

/// Join a namespace prefix and an entity key into a store key.
pub fn scoped(namespace: &str, key: &str) -> String {
    format!("{namespace}:{key}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_stable() {
        assert_eq!(Namespaces::SETTINGS, "settings");
        assert_eq!(Namespaces::COOLDOWNS, "cooldowns");
        assert_eq!(Namespaces::PAIRING, "pairing");
        assert_eq!(Namespaces::REMINDERS, "reminders");
    }

    #[test]
    fn lookup_matches_constants() {
        for label in Namespaces::labels() {
            assert_eq!(Namespaces::get(label), Some(label));
        }
        assert_eq!(Namespaces::get("sessions"), None);
    }

    #[test]
    fn scoped_joins_with_colon() {
        assert_eq!(scoped(Namespaces::SETTINGS, "1234"), "settings:1234");
        assert_eq!(scoped(Namespaces::COOLDOWNS, "42:ping"), "cooldowns:42:ping");
    }
}
