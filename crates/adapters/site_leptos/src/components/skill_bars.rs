//! Animated skill bars.

use folio_domain::skills::Skill;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Delay before bars animate from zero to their target width, leaving the
/// initial CSS state one paint to settle.
const ANIMATION_DELAY_MS: u32 = 400;

/// Skill list whose bars fill to their declared percentage once per mount.
#[component]
pub fn SkillBars(
    /// The skills to display.
    skills: Vec<Skill>,
) -> impl IntoView {
    if skills.is_empty() {
        return ().into_any();
    }

    let (animated, set_animated) = signal(false);

    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(ANIMATION_DELAY_MS).await;
        set_animated.set(true);
    });

    view! {
        <ul class="skill-list">
            {skills
                .into_iter()
                .map(|skill| {
                    let target = skill.fill_percent();
                    let name = skill.name;
                    view! {
                        <li class="skill">
                            <span class="skill-name">{name}</span>
                            <div class="skill-bar">
                                <div
                                    class="skill-fill"
                                    style:width=move || {
                                        let width = if animated.get() { target } else { 0 };
                                        format!("{width}%")
                                    }
                                ></div>
                            </div>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}
