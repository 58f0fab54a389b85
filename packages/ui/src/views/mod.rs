mod chat;
pub use chat::ChatPanel;

mod login;
pub use login::LoginView;

mod settings;
pub use settings::SettingsView;
