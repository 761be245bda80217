mod contact_form;
mod footer;
mod nav;
mod project_grid;
mod resume_panel;
mod skill_bars;
mod theme_toggle;

pub use contact_form::ContactForm;
pub use footer::Footer;
pub use nav::Nav;
pub use project_grid::ProjectGrid;
pub use resume_panel::ResumePanel;
pub use skill_bars::SkillBars;
pub use theme_toggle::ThemeToggle;
