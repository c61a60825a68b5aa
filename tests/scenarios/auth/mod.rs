use harness::{
    assert_equals, assert_predicate, expect_error, payloads, validated, Actor, E2EConfig,
    ScenarioResult, TestTimer,
};
use shared::models::auth::requests::LoginRequest;
use shared::models::auth::ActorRole;
use tracing::info;

/// Join as a member, then log in again with the same credentials
pub async fn test_member_join_and_login(config: E2EConfig) -> ScenarioResult<()> {
    let timer = TestTimer::start();
    let base = config.connection()?;

    let request = payloads::join_request();
    let joined = Actor::join_with(&base, ActorRole::Member, request.clone()).await?;
    assert_equals("joined email", request.email.as_str(), joined.email())?;
    assert_equals(
        "joined username",
        &request.username,
        &joined.profile().username,
    )?;
    assert_equals("joined role", ActorRole::Member, joined.role())?;
    assert_predicate("access token issued", !joined.token().access.is_empty())?;

    let login = payloads::login_request(&request);
    let profile = validated(base.login(ActorRole::Member, &login)).await?;
    assert_equals("same identity after login", joined.id(), profile.id)?;
    assert_equals("login role", ActorRole::Member, profile.role)?;

    let again = joined.relogin().await?;
    assert_equals("same identity after relogin", joined.id(), again.id())?;

    info!(id = %joined.id(), "member joined and logged in");
    timer.check_within(config.timeout)
}

/// Every role can join through its own endpoint
pub async fn test_each_role_can_join(config: E2EConfig) -> ScenarioResult<()> {
    let timer = TestTimer::start();
    let base = config.connection()?;

    for role in [ActorRole::Member, ActorRole::Moderator] {
        let actor = Actor::join(&base, role).await?;
        assert_equals(&format!("{} role", role), role, actor.role())?;
        if let Some(claims) = actor.token_claims() {
            assert_equals("token subject", actor.id().to_string(), claims.sub)?;
        }
    }

    timer.check_within(config.timeout)
}

/// A second join with an already registered email is rejected
pub async fn test_duplicate_email_join_rejected(config: E2EConfig) -> ScenarioResult<()> {
    let timer = TestTimer::start();
    let base = config.connection()?;

    let first = payloads::join_request();
    Actor::join_with(&base, ActorRole::Member, first.clone()).await?;

    let mut second = payloads::join_request();
    second.email = first.email.clone();
    expect_error(
        "join with a taken email",
        base.join(ActorRole::Member, &second),
    )
    .await?;

    timer.check_within(config.timeout)
}

pub async fn test_login_with_wrong_password_rejected(config: E2EConfig) -> ScenarioResult<()> {
    let timer = TestTimer::start();
    let base = config.connection()?;
    let member = Actor::join(&base, ActorRole::Member).await?;

    let request = LoginRequest {
        email: member.email().to_string(),
        password: format!("{}x", member.password()),
    };
    expect_error(
        "login with a wrong password",
        base.login(ActorRole::Member, &request),
    )
    .await?;

    timer.check_within(config.timeout)
}

/// Refreshing yields a usable session for the same identity
pub async fn test_token_refresh(config: E2EConfig) -> ScenarioResult<()> {
    let timer = TestTimer::start();
    let base = config.connection()?;
    let member = Actor::join(&base, ActorRole::Member).await?;

    let refreshed = member.refresh().await?;
    assert_equals("identity after refresh", member.id(), refreshed.id())?;
    validated(refreshed.connection().get_notification_preferences()).await?;

    timer.check_within(config.timeout)
}

pub async fn test_anonymous_access_rejected(config: E2EConfig) -> ScenarioResult<()> {
    let timer = TestTimer::start();
    let base = config.connection()?;

    expect_error(
        "anonymous preference read",
        base.get_notification_preferences(),
    )
    .await?;
    expect_error(
        "anonymous board creation",
        base.create_board(&payloads::board_create()),
    )
    .await?;

    timer.check_within(config.timeout)
}
