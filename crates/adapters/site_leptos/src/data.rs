//! Embedded site content — navigation entries and the skill and project
//! catalogs.

use folio_domain::nav::NavItem;
use folio_domain::project::ProjectCard;
use folio_domain::skills::Skill;

const SKILLS_JSON: &str = include_str!("../content/skills.json");
const PROJECTS_JSON: &str = include_str!("../content/projects.json");

/// Navigation entries, in display order.
///
/// The Skills entry is a hybrid panel link: it reveals the skills panel on
/// the home page instead of navigating.
#[must_use]
pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem {
            label: "Home",
            href: "/",
            panel: None,
        },
        NavItem {
            label: "Skills",
            href: "/#skills",
            panel: Some("skills"),
        },
        NavItem {
            label: "Projects",
            href: "/projects",
            panel: None,
        },
        NavItem {
            label: "Resume",
            href: "/resume",
            panel: None,
        },
        NavItem {
            label: "Contact",
            href: "/contact",
            panel: None,
        },
    ]
}

/// The skills catalog. An unreadable catalog renders as no skills.
#[must_use]
pub fn skills() -> Vec<Skill> {
    folio_domain::skills::catalog_from_json(SKILLS_JSON).unwrap_or_else(|err| {
        leptos::logging::warn!("skills catalog unreadable: {err}");
        Vec::new()
    })
}

/// The project catalog. An unreadable catalog renders as no cards.
#[must_use]
pub fn projects() -> Vec<ProjectCard> {
    folio_domain::project::catalog_from_json(PROJECTS_JSON).unwrap_or_else(|err| {
        leptos::logging::warn!("project catalog unreadable: {err}");
        Vec::new()
    })
}
