pub mod change_password;
pub mod confirm_reset_password;
pub mod login;
pub mod logout;
pub mod profile;
pub mod register;
pub mod reset_password;
pub mod validate;

pub use change_password::change_password;
pub use confirm_reset_password::confirm_reset_password;
pub use login::login;
pub use logout::logout;
pub use profile::update_profile;
pub use register::register;
pub use reset_password::request_password_reset;
pub use validate::validate_account;
