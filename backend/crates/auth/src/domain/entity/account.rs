//! Account Entity
//!
//! Registered runner. The password hash is kept apart in [`Credentials`]
//! so that only the sign-in path ever sees it.

use chrono::{DateTime, Utc};
use kernel::id::AccountId;

use crate::domain::value_object::{DisplayName, Email, UserPassword};

/// Account entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub account_id: AccountId,
    pub email: Email,
    pub display_name: DisplayName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with a fresh random id
    pub fn new(email: Email, display_name: DisplayName) -> Self {
        let now = Utc::now();

        Self {
            account_id: AccountId::new(),
            email,
            display_name,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Account plus its stored password hash
#[derive(Debug, Clone)]
pub struct Credentials {
    pub account: Account,
    pub password_hash: UserPassword,
}
