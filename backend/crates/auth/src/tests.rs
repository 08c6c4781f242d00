//! Unit tests for Auth crate
//!
//! Use cases and routers run against an in-memory credential store.

#[cfg(test)]
mod memory {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use chrono::Utc;
    use kernel::id::AccountId;

    use crate::domain::entity::account::{Account, Credentials};
    use crate::domain::repository::AccountRepository;
    use crate::domain::value_object::{DisplayName, Email, UserPassword};
    use crate::error::{AuthError, AuthResult};

    /// HashMap-backed credential store; email uniqueness checked under the lock
    #[derive(Clone, Default)]
    pub struct InMemoryAccountRepository {
        accounts: Arc<Mutex<HashMap<AccountId, Credentials>>>,
    }

    impl InMemoryAccountRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn remove(&self, account_id: &AccountId) {
            self.accounts.lock().unwrap().remove(account_id);
        }

        pub fn len(&self) -> usize {
            self.accounts.lock().unwrap().len()
        }

        pub fn stored_hash(&self, account_id: &AccountId) -> Option<String> {
            self.accounts
                .lock()
                .unwrap()
                .get(account_id)
                .map(|c| c.password_hash.as_phc_string().to_string())
        }
    }

    impl AccountRepository for InMemoryAccountRepository {
        async fn create(&self, account: &Account, password_hash: &UserPassword) -> AuthResult<()> {
            let mut accounts = self.accounts.lock().unwrap();
            if accounts.values().any(|c| c.account.email == account.email) {
                return Err(AuthError::DuplicateAccount);
            }
            accounts.insert(
                account.account_id,
                Credentials {
                    account: account.clone(),
                    password_hash: password_hash.clone(),
                },
            );
            Ok(())
        }

        async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>> {
            Ok(self
                .accounts
                .lock()
                .unwrap()
                .get(account_id)
                .map(|c| c.account.clone()))
        }

        async fn find_credentials_by_email(
            &self,
            email: &Email,
        ) -> AuthResult<Option<Credentials>> {
            Ok(self
                .accounts
                .lock()
                .unwrap()
                .values()
                .find(|c| &c.account.email == email)
                .cloned())
        }

        async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
            Ok(self
                .accounts
                .lock()
                .unwrap()
                .values()
                .any(|c| &c.account.email == email))
        }

        async fn update_display_name(
            &self,
            account_id: &AccountId,
            display_name: &DisplayName,
        ) -> AuthResult<Option<Account>> {
            let mut accounts = self.accounts.lock().unwrap();
            Ok(accounts.get_mut(account_id).map(|c| {
                c.account.display_name = display_name.clone();
                c.account.updated_at = Utc::now();
                c.account.clone()
            }))
        }
    }
}

#[cfg(test)]
mod fixtures {
    use std::sync::Arc;

    use crate::application::config::AuthConfig;
    use crate::application::{SignInInput, SignUpInput};

    pub const SIGNING_KEY: &[u8] = b"test_signing_key_32_bytes_long!!";

    pub fn config() -> Arc<AuthConfig> {
        Arc::new(AuthConfig::new(SIGNING_KEY).unwrap())
    }

    pub fn sign_up(email: &str, password: &str, display_name: &str) -> SignUpInput {
        SignUpInput {
            email: email.to_string(),
            password: password.to_string(),
            display_name: display_name.to_string(),
        }
    }

    pub fn sign_in(email: &str, password: &str) -> SignInInput {
        SignInInput {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

#[cfg(test)]
mod config_tests {
    use crate::application::config::*;
    use std::time::Duration;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::new(super::fixtures::SIGNING_KEY).unwrap();
        assert_eq!(config.token_ttl, Duration::from_secs(24 * 3600));
        assert_eq!(config.token_ttl_secs(), 86_400);
        assert!(config.pepper().is_none());
    }

    #[test]
    fn test_short_key_rejected() {
        assert!(AuthConfig::new(b"too short").is_err());
    }

    #[test]
    fn test_development_config_has_usable_key() {
        let config = AuthConfig::development().unwrap();
        assert_eq!(config.token_ttl, DEFAULT_TOKEN_TTL);
    }

    #[test]
    fn test_debug_redacts_pepper() {
        let config = AuthConfig::new(super::fixtures::SIGNING_KEY)
            .unwrap()
            .with_pepper(Some(b"pepper-value".to_vec()));
        let debug = format!("{:?}", config);
        assert!(!debug.contains("pepper-value"));
        assert!(!debug.contains("test_signing_key"));
    }
}

#[cfg(test)]
mod register_tests {
    use std::sync::Arc;

    use super::fixtures::{config, sign_up};
    use super::memory::InMemoryAccountRepository;
    use crate::application::SignUpUseCase;
    use crate::error::AuthError;

    #[tokio::test]
    async fn test_register_returns_account() {
        let repo = Arc::new(InMemoryAccountRepository::new());
        let use_case = SignUpUseCase::new(repo.clone(), config());

        let account = use_case.register(sign_up("a@x.com", "pw", "A")).await.unwrap();

        assert_eq!(account.email.as_str(), "a@x.com");
        assert_eq!(account.display_name.as_str(), "A");
        assert_eq!(repo.len(), 1);

        // Stored as Argon2id, never the clear text
        let hash = repo.stored_hash(&account.account_id).unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let repo = Arc::new(InMemoryAccountRepository::new());
        let use_case = SignUpUseCase::new(repo.clone(), config());

        use_case.register(sign_up("a@x.com", "pw", "A")).await.unwrap();
        let err = use_case
            .register(sign_up("a@x.com", "other", "B"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::DuplicateAccount));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_register_email_is_case_sensitive() {
        let repo = Arc::new(InMemoryAccountRepository::new());
        let use_case = SignUpUseCase::new(repo.clone(), config());

        use_case.register(sign_up("a@x.com", "pw", "A")).await.unwrap();
        assert!(use_case.register(sign_up("A@x.com", "pw", "A")).await.is_ok());
    }

    #[tokio::test]
    async fn test_register_missing_fields() {
        let use_case = SignUpUseCase::new(Arc::new(InMemoryAccountRepository::new()), config());

        for input in [
            sign_up("", "pw", "A"),
            sign_up("a@x.com", "", "A"),
            sign_up("a@x.com", "pw", "   "),
        ] {
            let err = use_case.register(input).await.unwrap_err();
            assert!(matches!(err, AuthError::Validation(_)));
        }
    }

    #[tokio::test]
    async fn test_register_bad_email_format() {
        let use_case = SignUpUseCase::new(Arc::new(InMemoryAccountRepository::new()), config());

        let err = use_case
            .register(sign_up("not-an-email", "pw", "A"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[tokio::test]
    async fn test_concurrent_registration_same_email() {
        let repo = Arc::new(InMemoryAccountRepository::new());
        let config = config();

        let a = SignUpUseCase::new(repo.clone(), config.clone());
        let b = SignUpUseCase::new(repo.clone(), config.clone());

        let (ra, rb) = tokio::join!(
            a.register(sign_up("a@x.com", "pw", "A")),
            b.register(sign_up("a@x.com", "pw", "A")),
        );

        let successes = [ra.is_ok(), rb.is_ok()].iter().filter(|ok| **ok).count();
        assert_eq!(successes, 1);
        assert_eq!(repo.len(), 1);
    }
}

#[cfg(test)]
mod verify_tests {
    use std::sync::Arc;

    use super::fixtures::{config, sign_in, sign_up};
    use super::memory::InMemoryAccountRepository;
    use crate::application::config::AuthConfig;
    use crate::application::{SignInUseCase, SignUpUseCase};
    use crate::error::AuthError;

    async fn seeded(config: Arc<AuthConfig>) -> Arc<InMemoryAccountRepository> {
        let repo = Arc::new(InMemoryAccountRepository::new());
        SignUpUseCase::new(repo.clone(), config)
            .register(sign_up("a@x.com", "pw", "A"))
            .await
            .unwrap();
        repo
    }

    #[tokio::test]
    async fn test_verify_correct_password() {
        let config = config();
        let repo = seeded(config.clone()).await;

        let account = SignInUseCase::new(repo, config)
            .verify(sign_in("a@x.com", "pw"))
            .await
            .unwrap();
        assert_eq!(account.display_name.as_str(), "A");
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
        let config = config();
        let repo = seeded(config.clone()).await;
        let use_case = SignInUseCase::new(repo, config);

        let wrong = use_case
            .verify(sign_in("a@x.com", "wrong"))
            .await
            .unwrap_err();
        let unknown = use_case
            .verify(sign_in("b@x.com", "pw"))
            .await
            .unwrap_err();

        assert!(matches!(wrong, AuthError::InvalidCredentials));
        assert!(matches!(unknown, AuthError::InvalidCredentials));
        assert_eq!(wrong.to_string(), unknown.to_string());
        assert_eq!(wrong.status_code(), unknown.status_code());
    }

    #[tokio::test]
    async fn test_verify_blank_fields() {
        let config = config();
        let repo = seeded(config.clone()).await;

        let err = SignInUseCase::new(repo, config)
            .verify(sign_in("", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[tokio::test]
    async fn test_verify_honours_pepper() {
        let peppered = Arc::new(
            AuthConfig::new(super::fixtures::SIGNING_KEY)
                .unwrap()
                .with_pepper(Some(b"pepper".to_vec())),
        );
        let repo = seeded(peppered.clone()).await;

        assert!(
            SignInUseCase::new(repo.clone(), peppered)
                .verify(sign_in("a@x.com", "pw"))
                .await
                .is_ok()
        );

        // Same store, pepper lost: nothing verifies
        let err = SignInUseCase::new(repo, config())
            .verify(sign_in("a@x.com", "pw"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_sign_in_issues_token() {
        let config = config();
        let repo = seeded(config.clone()).await;

        let output = SignInUseCase::new(repo, config)
            .execute(sign_in("a@x.com", "pw"))
            .await
            .unwrap();
        assert_eq!(output.token.token.split('.').count(), 3);
    }
}

#[cfg(test)]
mod token_tests {
    use std::sync::Arc;

    use chrono::{Duration, Utc};

    use super::fixtures::{config, sign_up};
    use super::memory::InMemoryAccountRepository;
    use crate::application::config::AuthConfig;
    use crate::application::{CheckTokenUseCase, SignUpUseCase, TokenIssuer, UpdateProfileUseCase};
    use crate::domain::entity::{account::Account, token::TokenClaims};
    use crate::error::AuthError;

    async fn setup() -> (Arc<InMemoryAccountRepository>, Arc<AuthConfig>, Account) {
        let repo = Arc::new(InMemoryAccountRepository::new());
        let config = config();
        let account = SignUpUseCase::new(repo.clone(), config.clone())
            .register(sign_up("a@x.com", "pw", "A"))
            .await
            .unwrap();
        (repo, config, account)
    }

    #[tokio::test]
    async fn test_issue_then_validate() {
        let (repo, config, account) = setup().await;

        let issued = TokenIssuer::new(config.clone()).issue(&account).unwrap();
        let identity = CheckTokenUseCase::new(repo, config)
            .validate(&issued.token)
            .await
            .unwrap();

        assert_eq!(identity.account_id, account.account_id);
        assert_eq!(identity.email, "a@x.com");
        assert_eq!(identity.display_name, "A");
    }

    #[tokio::test]
    async fn test_claims_carry_subject_and_24h_window() {
        let (_, config, account) = setup().await;
        let now = Utc::now();

        let issued = TokenIssuer::new(config.clone())
            .issue_at(&account, now)
            .unwrap();
        let claims: TokenClaims = config.signer.verify(&issued.token).unwrap();

        assert_eq!(claims.sub, account.account_id.into_uuid());
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp - claims.iat, 86_400);
        assert_eq!(issued.expires_at.timestamp(), claims.exp);
    }

    #[tokio::test]
    async fn test_tokens_issued_at_different_seconds_differ() {
        let (_, config, account) = setup().await;
        let issuer = TokenIssuer::new(config);
        let now = Utc::now();

        let a = issuer.issue_at(&account, now).unwrap();
        let b = issuer.issue_at(&account, now + Duration::seconds(1)).unwrap();
        assert_ne!(a.token, b.token);
    }

    #[tokio::test]
    async fn test_expiry_boundary() {
        let (repo, config, account) = setup().await;
        let issued_at = Utc::now();
        let issued = TokenIssuer::new(config.clone())
            .issue_at(&account, issued_at)
            .unwrap();
        let checker = CheckTokenUseCase::new(repo, config);

        let just_before = issued_at + Duration::hours(24) - Duration::seconds(1);
        assert!(checker.validate_at(&issued.token, just_before).await.is_ok());

        let at_expiry = issued_at + Duration::hours(24);
        let err = checker
            .validate_at(&issued.token, at_expiry)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Expired));
    }

    #[tokio::test]
    async fn test_tampered_token_is_malformed() {
        let (repo, config, account) = setup().await;
        let issued = TokenIssuer::new(config.clone()).issue(&account).unwrap();

        // Flip the first character of the signature segment
        let sig_start = issued.token.rfind('.').unwrap() + 1;
        let mut tampered = issued.token.clone();
        let original = &issued.token[sig_start..sig_start + 1];
        tampered.replace_range(sig_start..sig_start + 1, if original == "A" { "B" } else { "A" });

        let checker = CheckTokenUseCase::new(repo, config);
        for token in [tampered.as_str(), "garbage", ""] {
            let err = checker.validate(token).await.unwrap_err();
            assert!(matches!(err, AuthError::MalformedToken));
        }
    }

    #[tokio::test]
    async fn test_token_from_rotated_key_is_malformed() {
        let (repo, config, account) = setup().await;
        let issued = TokenIssuer::new(config).issue(&account).unwrap();

        let rotated = Arc::new(AuthConfig::new(b"a_completely_different_key_32byt").unwrap());
        let err = CheckTokenUseCase::new(repo, rotated)
            .validate(&issued.token)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::MalformedToken));
    }

    #[tokio::test]
    async fn test_orphaned_token() {
        let (repo, config, account) = setup().await;
        let issued = TokenIssuer::new(config.clone()).issue(&account).unwrap();

        repo.remove(&account.account_id);

        let err = CheckTokenUseCase::new(repo, config)
            .validate(&issued.token)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::AccountNotFound));
    }

    #[tokio::test]
    async fn test_validation_reflects_renamed_account() {
        let (repo, config, account) = setup().await;
        let issued = TokenIssuer::new(config.clone()).issue(&account).unwrap();

        UpdateProfileUseCase::new(repo.clone())
            .execute(&account.account_id, Some("Runner".to_string()))
            .await
            .unwrap();

        let identity = CheckTokenUseCase::new(repo, config)
            .validate(&issued.token)
            .await
            .unwrap();
        assert_eq!(identity.display_name, "Runner");
    }

    #[tokio::test]
    async fn test_update_profile_without_fields_is_a_read() {
        let (repo, _, account) = setup().await;

        let unchanged = UpdateProfileUseCase::new(repo)
            .execute(&account.account_id, None)
            .await
            .unwrap();
        assert_eq!(unchanged.display_name.as_str(), "A");
    }
}

#[cfg(test)]
mod router_tests {
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::fixtures::config;
    use super::memory::InMemoryAccountRepository;
    use crate::presentation::router::{auth_router_generic, user_router_generic};

    fn app() -> Router {
        let repo = InMemoryAccountRepository::new();
        let config = config();
        Router::new()
            .nest("/api/auth", auth_router_generic(repo.clone(), config.clone()))
            .nest("/api/user", user_router_generic(repo, config))
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, platform::bearer::bearer_value(token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn signed_up(app: &Router) -> String {
        let (status, body) = send(
            app,
            "POST",
            "/api/auth/signup",
            None,
            Some(json!({ "email": "a@x.com", "password": "pw", "displayName": "A" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_signup_response_shape() {
        let app = app();
        let (status, body) = send(
            &app,
            "POST",
            "/api/auth/signup",
            None,
            Some(json!({ "email": "a@x.com", "password": "pw", "displayName": "A" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["email"], "a@x.com");
        assert_eq!(body["user"]["displayName"], "A");
        assert!(body["user"]["id"].is_string());
        assert!(body["token"].is_string());
        assert!(body["expiresAt"].is_string());
        assert!(body["user"].get("passwordHash").is_none());
    }

    #[tokio::test]
    async fn test_signup_duplicate_is_bad_request() {
        let app = app();
        signed_up(&app).await;

        let (status, _) = send(
            &app,
            "POST",
            "/api/auth/signup",
            None,
            Some(json!({ "email": "a@x.com", "password": "pw", "displayName": "A" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_signup_missing_field_is_bad_request() {
        let app = app();
        let (status, body) = send(
            &app,
            "POST",
            "/api/auth/signup",
            None,
            Some(json!({ "email": "a@x.com", "password": "pw" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_signin_failures_share_one_body() {
        let app = app();
        signed_up(&app).await;

        let wrong = send(
            &app,
            "POST",
            "/api/auth/signin",
            None,
            Some(json!({ "email": "a@x.com", "password": "nope" })),
        )
        .await;
        let unknown = send(
            &app,
            "POST",
            "/api/auth/signin",
            None,
            Some(json!({ "email": "z@x.com", "password": "pw" })),
        )
        .await;

        assert_eq!(wrong.0, StatusCode::UNAUTHORIZED);
        assert_eq!(wrong, unknown);
    }

    #[tokio::test]
    async fn test_signin_then_verify() {
        let app = app();
        signed_up(&app).await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/auth/signin",
            None,
            Some(json!({ "email": "a@x.com", "password": "pw" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let token = body["token"].as_str().unwrap();

        let (status, body) = send(&app, "GET", "/api/auth/verify", Some(token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["displayName"], "A");
    }

    #[tokio::test]
    async fn test_verify_rejects_missing_and_bad_tokens() {
        let app = app();

        let (status, _) = send(&app, "GET", "/api/auth/verify", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = send(&app, "GET", "/api/auth/verify", Some("x.y.z"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["detail"], "Authentication required");
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_is_rejected() {
        let app = app();
        let token = signed_up(&app).await;

        let request = Request::builder()
            .uri("/api/auth/verify")
            .header(header::AUTHORIZATION, format!("Token {token}"))
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_profile_read_and_update() {
        let app = app();
        let token = signed_up(&app).await;

        let (status, body) = send(&app, "GET", "/api/user/profile", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["displayName"], "A");

        let (status, body) = send(
            &app,
            "PATCH",
            "/api/user/profile",
            Some(&token),
            Some(json!({ "displayName": "  Runner  " })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["displayName"], "Runner");

        // Same token, fresh lookup
        let (_, body) = send(&app, "GET", "/api/auth/verify", Some(&token), None).await;
        assert_eq!(body["user"]["displayName"], "Runner");
    }

    #[tokio::test]
    async fn test_profile_requires_auth() {
        let app = app();
        let (status, _) = send(
            &app,
            "PATCH",
            "/api/user/profile",
            None,
            Some(json!({ "displayName": "X" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}

#[cfg(test)]
mod optional_session_tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::routing::get;
    use axum::{Json, Router, middleware};
    use chrono::{Duration, Utc};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::fixtures::{config, sign_up};
    use super::memory::InMemoryAccountRepository;
    use crate::application::{SignUpUseCase, TokenIssuer};
    use crate::domain::entity::account::Account;
    use crate::presentation::middleware::{AuthMiddlewareState, MaybeAccount, optional_auth};

    async fn whoami(MaybeAccount(identity): MaybeAccount) -> Json<Value> {
        Json(json!({
            "accountId": identity.map(|i| i.account_id.into_uuid().to_string()),
        }))
    }

    struct Harness {
        app: Router,
        repo: Arc<InMemoryAccountRepository>,
        issuer: TokenIssuer,
        account: Account,
    }

    async fn harness() -> Harness {
        let repo = Arc::new(InMemoryAccountRepository::new());
        let config = config();
        let account = SignUpUseCase::new(repo.clone(), config.clone())
            .register(sign_up("a@x.com", "pw", "A"))
            .await
            .unwrap();

        let state = AuthMiddlewareState::new(repo.clone(), config.clone());
        let app = Router::new().route("/", get(whoami)).route_layer(
            middleware::from_fn_with_state(state, optional_auth::<InMemoryAccountRepository>),
        );

        Harness {
            app,
            repo,
            issuer: TokenIssuer::new(config),
            account,
        }
    }

    async fn seen_as(app: &Router, authorization: Option<String>) -> Value {
        let mut builder = Request::get("/");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let response = app
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        body["accountId"].clone()
    }

    fn bearer(token: &str) -> Option<String> {
        Some(platform::bearer::bearer_value(token))
    }

    #[tokio::test]
    async fn test_valid_token_attaches_identity() {
        let h = harness().await;
        let issued = h.issuer.issue(&h.account).unwrap();

        let seen = seen_as(&h.app, bearer(&issued.token)).await;
        assert_eq!(seen, h.account.account_id.into_uuid().to_string());
    }

    #[tokio::test]
    async fn test_missing_header_is_anonymous() {
        let h = harness().await;
        assert_eq!(seen_as(&h.app, None).await, Value::Null);
        assert_eq!(seen_as(&h.app, Some("Basic abc".into())).await, Value::Null);
    }

    #[tokio::test]
    async fn test_expired_token_is_anonymous() {
        let h = harness().await;
        let issued = h
            .issuer
            .issue_at(&h.account, Utc::now() - Duration::days(2))
            .unwrap();

        assert_eq!(seen_as(&h.app, bearer(&issued.token)).await, Value::Null);
    }

    #[tokio::test]
    async fn test_garbage_token_is_anonymous() {
        let h = harness().await;
        assert_eq!(seen_as(&h.app, bearer("not.a.token")).await, Value::Null);
    }

    #[tokio::test]
    async fn test_token_for_deleted_account_is_anonymous() {
        let h = harness().await;
        let issued = h.issuer.issue(&h.account).unwrap();
        assert!(seen_as(&h.app, bearer(&issued.token)).await.is_string());

        h.repo.remove(&h.account.account_id);
        assert_eq!(seen_as(&h.app, bearer(&issued.token)).await, Value::Null);
    }
}
