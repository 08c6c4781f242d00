//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::conversions::is_unique_violation;
use kernel::id::AccountId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::account::{Account, Credentials};
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{DisplayName, Email, UserPassword};
use crate::error::{AuthError, AuthResult};

/// Unique constraint on `auth_accounts.email`
const EMAIL_UNIQUE_CONSTRAINT: &str = "auth_accounts_email_key";

/// PostgreSQL-backed credential store
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Account Repository Implementation
// ============================================================================

impl AccountRepository for PgAuthRepository {
    async fn create(&self, account: &Account, password_hash: &UserPassword) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO auth_accounts (
                account_id,
                email,
                password_hash,
                display_name,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.email.as_str())
        .bind(password_hash.as_phc_string())
        .bind(account.display_name.as_str())
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e, Some(EMAIL_UNIQUE_CONSTRAINT)) {
                AuthError::DuplicateAccount
            } else {
                AuthError::Database(e)
            }
        })?;

        Ok(())
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                email,
                display_name,
                created_at,
                updated_at
            FROM auth_accounts
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AccountRow::into_account))
    }

    async fn find_credentials_by_email(&self, email: &Email) -> AuthResult<Option<Credentials>> {
        let row = sqlx::query_as::<_, CredentialsRow>(
            r#"
            SELECT
                account_id,
                email,
                password_hash,
                display_name,
                created_at,
                updated_at
            FROM auth_accounts
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(CredentialsRow::into_credentials).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM auth_accounts WHERE email = $1)",
        )
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn update_display_name(
        &self,
        account_id: &AccountId,
        display_name: &DisplayName,
    ) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            UPDATE auth_accounts SET
                display_name = $2,
                updated_at = NOW()
            WHERE account_id = $1
            RETURNING
                account_id,
                email,
                display_name,
                created_at,
                updated_at
            "#,
        )
        .bind(account_id.as_uuid())
        .bind(display_name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AccountRow::into_account))
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    account_id: Uuid,
    email: String,
    display_name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> Account {
        Account {
            account_id: AccountId::from_uuid(self.account_id),
            email: Email::from_db(self.email),
            display_name: DisplayName::from_db(self.display_name),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CredentialsRow {
    account_id: Uuid,
    email: String,
    password_hash: String,
    display_name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CredentialsRow {
    fn into_credentials(self) -> AuthResult<Credentials> {
        let password_hash = UserPassword::from_phc_string(self.password_hash)?;

        Ok(Credentials {
            account: Account {
                account_id: AccountId::from_uuid(self.account_id),
                email: Email::from_db(self.email),
                display_name: DisplayName::from_db(self.display_name),
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            password_hash,
        })
    }
}
