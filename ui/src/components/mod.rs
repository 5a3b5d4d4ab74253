//! Components drawing a shell screen

pub mod card;
pub mod control;
pub mod header;
pub mod login_form;
pub mod screen;

pub use card::CardView;
pub use control::ControlButton;
pub use header::Header;
pub use login_form::LoginForm;
pub use screen::ScreenView;
