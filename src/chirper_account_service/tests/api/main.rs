mod change_password;
mod login;
mod password_reset;
mod profile;
mod register;
mod validate;
