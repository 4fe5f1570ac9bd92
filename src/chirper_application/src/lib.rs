pub mod notifications;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

pub use notifications::LifecycleLinks;
pub use use_cases::{
    change_password::{ChangePasswordError, ChangePasswordUseCase},
    confirm_password_reset::{ConfirmPasswordResetError, ConfirmPasswordResetUseCase},
    login::{LoginError, LoginUseCase},
    register::{RegisterError, RegisterUseCase},
    request_password_reset::{RequestPasswordResetError, RequestPasswordResetUseCase},
    update_profile::{UpdateProfileError, UpdateProfileUseCase},
    validate_account::{ValidateAccountError, ValidateAccountUseCase},
};
