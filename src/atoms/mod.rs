// ── Lantern Atoms Layer ────────────────────────────────────────────────────
// Pure constants, types, and error definitions — zero side effects, no I/O.
// Dependency rule: atoms may only depend on std and external pure crates.

pub mod constants;
pub mod error;
pub mod namespaces;
pub mod types;
