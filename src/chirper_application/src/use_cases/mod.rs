//! The account lifecycle controller, one use case per operation.
//!
//! Each use case owns its collaborators (generic over the core port
//! traits) and exposes a single `execute`. Route handlers construct the
//! use case per request from cheaply cloneable stores.

pub mod change_password;
pub mod confirm_password_reset;
pub mod login;
pub mod register;
pub mod request_password_reset;
pub mod update_profile;
pub mod validate_account;
