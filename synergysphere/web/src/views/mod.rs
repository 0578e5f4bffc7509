mod dashboard;
mod home;
mod login;
mod not_found;
mod profile;
mod project;
mod settings;
mod task;

pub use dashboard::Dashboard;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use profile::ProfileView;
pub use project::ProjectDetail;
pub use settings::SettingsView;
pub use task::TaskView;
