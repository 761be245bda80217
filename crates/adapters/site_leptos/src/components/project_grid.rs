//! Project grid with category filter buttons and live search.

use folio_domain::project::{ProjectCard, ProjectQuery, filter_values};
use leptos::prelude::*;

/// Filterable, searchable grid of project cards.
///
/// Filter and search do not compose: the grid shows whatever the most
/// recent input (button press or keystroke) selects on its own.
#[component]
pub fn ProjectGrid(
    /// The full project catalog.
    projects: Vec<ProjectCard>,
) -> impl IntoView {
    let filters = filter_values(&projects);
    let (query, set_query) = signal(ProjectQuery::default());
    let (search_text, set_search_text) = signal(String::new());

    view! {
        <div class="project-controls">
            <div class="filter-buttons">
                {filters
                    .into_iter()
                    .map(|value| {
                        let label = value.clone();
                        let button_value = value.clone();
                        let selected = move || {
                            query.with(|q| {
                                q.filter_value().is_some_and(|f| f == button_value)
                            })
                        };
                        view! {
                            <button
                                class="filter-button"
                                class:active=selected
                                on:click=move |_| {
                                    set_query.set(ProjectQuery::Filter(value.clone()));
                                }
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <input
                class="project-search"
                type="search"
                placeholder="Search projects\u{2026}"
                prop:value=search_text
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    set_search_text.set(text.clone());
                    set_query.set(ProjectQuery::Search(text));
                }
            />
        </div>
        <div class="project-grid">
            {projects
                .into_iter()
                .map(|card| {
                    let matched = card.clone();
                    let hidden = move || !query.with(|q| q.matches(&matched));
                    view! {
                        <article
                            class="project-card"
                            class:hidden=hidden
                            data-category=card.category.clone()
                        >
                            <h3>{card.title.clone()}</h3>
                            <p>{card.summary.clone()}</p>
                            {card
                                .link
                                .clone()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link
                                            target="_blank"
                                            rel="noopener noreferrer"
                                        >
                                            "View"
                                        </a>
                                    }
                                })}
                        </article>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
