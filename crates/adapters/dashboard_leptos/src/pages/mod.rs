mod home;
mod logs;
mod not_found;
mod settings;

pub use home::Home;
pub use logs::Logs;
pub use not_found::NotFound;
pub use settings::Settings;
