// ── Lantern Atoms ──────────────────────────────────────────────────────────
// Pure foundation layer for the Lantern bot: fixed presentation tables,
// store namespaces, and the typed helpers that sit on top of them.
// No I/O, no side effects — everything here is safe to use from any layer.

pub mod atoms;

pub use atoms::constants::{Colors, Emojis};
pub use atoms::error::{AtomsError, AtomsResult};
pub use atoms::namespaces::{scoped, Namespaces};
pub use atoms::types::{embed_color, Severity};
