//! Feature services — one use-case struct per persisted page behavior.

pub mod theme_service;
pub mod visit_service;

pub use theme_service::ThemeService;
pub use visit_service::VisitService;
