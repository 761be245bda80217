mod contact;
mod home;
mod not_found;
mod projects;
mod resume;

pub use contact::Contact;
pub use home::Home;
pub use not_found::NotFound;
pub use projects::Projects;
pub use resume::Resume;
