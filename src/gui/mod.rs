pub mod app;
pub mod calendar;
pub mod confirm_modal;
pub mod error_modal;
pub mod generate;
pub mod home;
pub mod message_overlay;
pub mod sentences;
pub mod settings_modal;
pub mod theme;
pub mod top_bar;
pub mod words;

pub use app::KelimeApp;
