//! # folio-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **`PreferenceStore`** port that adapters implement (browser
//!   local storage in the wasm adapter, in-memory fakes in tests)
//! - Provide the feature services orchestrating domain logic over the port:
//!   - `ThemeService` — load and persist the theme preference
//!   - `VisitService` — read, increment, and rewrite the visit counter
//! - Own the storage-failure semantics: the theme degrades to session-only
//!   switching, the visit counter reports the failure so the UI can show a
//!   placeholder instead of a number
//!
//! ## Dependency rule
//! Depends on `folio-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
