use chrono::NaiveDate;

use super::email::Email;
use super::password::Password;
use super::person_name::PersonName;
use super::username::Username;

/// Profile fields carried alongside the identity. Opaque to the
/// lifecycle workflows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub birth_date: Option<NaiveDate>,
    pub avatar: Option<String>,
}

/// Input to account creation. The password is still plaintext here;
/// credential stores hash it before persisting.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: Username,
    pub email: Email,
    pub password: Password,
    pub profile: Profile,
}

/// A stored identity record as the lifecycle workflows see it.
///
/// `is_active` gates authentication. `email_validated` flips to true
/// exactly once, when a registration token for the email is redeemed.
#[derive(Debug, Clone)]
pub struct Account {
    pub username: Username,
    pub email: Email,
    pub is_active: bool,
    pub email_validated: bool,
    pub profile: Profile,
}

/// Proof that a caller presented valid credentials for an active
/// account. Operations that act on "the logged-in user" take this
/// explicitly instead of reading ambient session state.
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub username: Username,
    pub email: Email,
}
