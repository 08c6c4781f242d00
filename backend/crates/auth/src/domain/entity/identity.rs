//! Identity Context
//!
//! Who is making the current request. Built by the session middleware from
//! a fresh account lookup and carried in request extensions; never stored.

use kernel::id::AccountId;

use crate::domain::entity::account::Account;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub account_id: AccountId,
    pub email: String,
    pub display_name: String,
}

impl From<Account> for Identity {
    fn from(account: Account) -> Self {
        Self {
            account_id: account.account_id,
            email: account.email.into_inner(),
            display_name: account.display_name.into_inner(),
        }
    }
}
