pub mod account;
pub mod email;
pub mod password;
pub mod person_name;
pub mod token;
pub mod username;
