//! # folio-domain
//!
//! Pure domain model for the folio portfolio site.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, time helpers
//! - **Theme** preference (light/dark) and its stored representation
//! - **Visit count** parsing and increment rules
//! - **Navigation** page-name extraction and active-link matching
//! - **Skills** fill-percent parsing and clamping
//! - **Projects** catalog and filter/search visibility rules
//! - **Resume** upload validation
//! - **Contact** message validation
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod contact;
pub mod error;
pub mod nav;
pub mod project;
pub mod resume;
pub mod skills;
pub mod theme;
pub mod time;
pub mod visits;
