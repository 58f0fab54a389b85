mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod settings;
pub use settings::Settings;

mod not_found;
pub use not_found::NotFound;
