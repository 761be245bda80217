//! Project catalog and filter/search visibility rules.

use serde::{Deserialize, Serialize};

/// Filter value that matches every card.
pub const FILTER_ALL: &str = "all";

/// A single project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCard {
    /// Title shown on the card, matched by search.
    pub title: String,
    /// Category the filter buttons match against.
    pub category: String,
    /// Short description, also matched by search.
    pub summary: String,
    /// Optional external link.
    #[serde(default)]
    pub link: Option<String>,
}

/// The most recent grid input.
///
/// Filter and search deliberately do not compose: whichever the visitor
/// touched last decides visibility on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectQuery {
    /// A category filter button was pressed.
    Filter(String),
    /// Text was typed into the search field.
    Search(String),
}

impl Default for ProjectQuery {
    fn default() -> Self {
        Self::Filter(FILTER_ALL.to_string())
    }
}

impl ProjectQuery {
    /// Whether a card is visible under this query.
    #[must_use]
    pub fn matches(&self, card: &ProjectCard) -> bool {
        match self {
            Self::Filter(value) => {
                value == FILTER_ALL || card.category.eq_ignore_ascii_case(value)
            }
            Self::Search(text) => {
                let needle = text.trim().to_lowercase();
                needle.is_empty()
                    || card.title.to_lowercase().contains(&needle)
                    || card.summary.to_lowercase().contains(&needle)
            }
        }
    }

    /// The active filter value, when the last input was a filter.
    #[must_use]
    pub fn filter_value(&self) -> Option<&str> {
        match self {
            Self::Filter(value) => Some(value),
            Self::Search(_) => None,
        }
    }
}

/// Parse a project catalog from its embedded JSON representation.
///
/// # Errors
///
/// Returns the underlying `serde_json` error when the document is not a
/// valid catalog.
pub fn catalog_from_json(json: &str) -> Result<Vec<ProjectCard>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Distinct categories in catalog order, with the all-pass filter first.
#[must_use]
pub fn filter_values(catalog: &[ProjectCard]) -> Vec<String> {
    let mut values = vec![FILTER_ALL.to_string()];
    for card in catalog {
        let category = card.category.to_lowercase();
        if !values.contains(&category) {
            values.push(category);
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str, category: &str, summary: &str) -> ProjectCard {
        ProjectCard {
            title: title.to_string(),
            category: category.to_string(),
            summary: summary.to_string(),
            link: None,
        }
    }

    fn sample() -> Vec<ProjectCard> {
        vec![
            card("Palette studio", "design", "A color palette explorer."),
            card("Hub daemon", "dev", "A home automation daemon in Rust."),
            card("Type poster", "design", "A typographic poster series."),
        ]
    }

    #[test]
    fn should_show_only_matching_cards_when_category_filter_selected() {
        let catalog = sample();
        let query = ProjectQuery::Filter("design".to_string());
        let visible: Vec<&str> = catalog
            .iter()
            .filter(|c| query.matches(c))
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(visible, vec!["Palette studio", "Type poster"]);
    }

    #[test]
    fn should_show_every_card_when_filter_is_all() {
        let catalog = sample();
        let query = ProjectQuery::Filter(FILTER_ALL.to_string());
        assert!(catalog.iter().all(|c| query.matches(c)));
    }

    #[test]
    fn should_match_filter_case_insensitively() {
        let query = ProjectQuery::Filter("Design".to_string());
        assert!(query.matches(&card("x", "design", "y")));
    }

    #[test]
    fn should_search_title_and_summary_case_insensitively() {
        let daemon = card("Hub daemon", "dev", "A home automation daemon in Rust.");
        assert!(ProjectQuery::Search("HUB".to_string()).matches(&daemon));
        assert!(ProjectQuery::Search("automation".to_string()).matches(&daemon));
        assert!(!ProjectQuery::Search("poster".to_string()).matches(&daemon));
    }

    #[test]
    fn should_show_every_card_when_search_is_blank() {
        let catalog = sample();
        for query in [
            ProjectQuery::Search(String::new()),
            ProjectQuery::Search("   ".to_string()),
        ] {
            assert!(catalog.iter().all(|c| query.matches(c)));
        }
    }

    #[test]
    fn should_let_last_input_win_instead_of_composing() {
        let poster = card("Type poster", "design", "A typographic poster series.");
        // Hidden under the dev filter.
        assert!(!ProjectQuery::Filter("dev".to_string()).matches(&poster));
        // A later search replaces the filter entirely, so the card is
        // visible again even though "dev" never matched it.
        assert!(ProjectQuery::Search("poster".to_string()).matches(&poster));
    }

    #[test]
    fn should_list_distinct_filter_values_with_all_first() {
        let values = filter_values(&sample());
        assert_eq!(values, vec!["all", "design", "dev"]);
    }
}
