//! Page components.

mod lobby;
mod login;
mod not_found;
mod room;

pub use lobby::LobbyPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use room::RoomPage;
