use client::Connection;
use jsonwebtoken::{decode, DecodingKey, Validation};
use shared::models::auth::requests::{JoinRequest, LoginRequest, RefreshRequest};
use shared::models::auth::responses::{AuthorizationToken, AuthorizedActor, TokenClaims};
use shared::models::auth::ActorRole;
use tracing::info;
use uuid::Uuid;

use crate::compose::validated;
use crate::config::E2EConfig;
use crate::error::ScenarioResult;
use crate::payloads;

/// An authenticated identity inside one scenario.
///
/// Holds the profile returned by the backend, the password needed to log in
/// again and a connection that carries this actor's access token. Switching
/// actors means using another `Actor`'s connection; nothing is mutated.
#[derive(Debug, Clone)]
pub struct Actor {
    profile: AuthorizedActor,
    password: String,
    connection: Connection,
}

impl Actor {
    /// Register a fresh actor of `role` with random credentials.
    pub async fn join(base: &Connection, role: ActorRole) -> ScenarioResult<Self> {
        Self::join_with(base, role, payloads::join_request()).await
    }

    pub async fn join_with(
        base: &Connection,
        role: ActorRole,
        request: JoinRequest,
    ) -> ScenarioResult<Self> {
        let profile = validated(base.anonymous().join(role, &request)).await?;
        info!(%role, id = %profile.id, "joined");
        Ok(Self::from_profile(base, profile, request.password))
    }

    pub async fn login(
        base: &Connection,
        role: ActorRole,
        email: &str,
        password: &str,
    ) -> ScenarioResult<Self> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let profile = validated(base.anonymous().login(role, &request)).await?;
        info!(%role, id = %profile.id, "logged in");
        Ok(Self::from_profile(base, profile, request.password))
    }

    /// The configured administrator, or a freshly joined one.
    pub async fn administrator(base: &Connection, config: &E2EConfig) -> ScenarioResult<Self> {
        match &config.admin {
            Some(credentials) => {
                Self::login(
                    base,
                    ActorRole::Administrator,
                    &credentials.email,
                    &credentials.password,
                )
                .await
            }
            None => Self::join(base, ActorRole::Administrator).await,
        }
    }

    /// Log in again with the same credentials, yielding a new session.
    pub async fn relogin(&self) -> ScenarioResult<Self> {
        Self::login(&self.connection, self.role(), self.email(), &self.password).await
    }

    pub async fn refresh(&self) -> ScenarioResult<Self> {
        let request = RefreshRequest {
            refresh_token: self.profile.token.refresh.clone(),
        };
        let profile = validated(self.connection.anonymous().refresh(self.role(), &request)).await?;
        Ok(Self::from_profile(&self.connection, profile, self.password.clone()))
    }

    fn from_profile(base: &Connection, profile: AuthorizedActor, password: String) -> Self {
        let connection = base.authorized(&profile.token.access);
        Self {
            profile,
            password,
            connection,
        }
    }

    pub fn id(&self) -> Uuid {
        self.profile.id
    }

    pub fn email(&self) -> &str {
        &self.profile.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn role(&self) -> ActorRole {
        self.profile.role
    }

    pub fn profile(&self) -> &AuthorizedActor {
        &self.profile
    }

    pub fn token(&self) -> &AuthorizationToken {
        &self.profile.token
    }

    /// Connection acting as this actor.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Claims of the access token when it is a JWT. The signature is not
    /// checked; this only tells which identity the token speaks for.
    pub fn token_claims(&self) -> Option<TokenClaims> {
        let mut validation = Validation::default();
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();
        decode::<TokenClaims>(
            &self.profile.token.access,
            &DecodingKey::from_secret(&[]),
            &validation,
        )
        .ok()
        .map(|data| data.claims)
    }
}
