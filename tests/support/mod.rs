//! In-process stand-in for the forum backend.
//!
//! Responders echo request bodies into schema-valid entities and attribute
//! them to the identity in the bearer token, which is all the self-tests need
//! to drive real scenarios without a deployed backend.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use harness::E2EConfig;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde_json::Value;
use shared::models::auth::requests::JoinRequest;
use shared::models::auth::responses::{AuthorizationToken, AuthorizedActor, TokenClaims};
use shared::models::auth::ActorRole;
use shared::models::board::{Board, BoardCreate};
use shared::models::comment::{Comment, CommentCreate};
use shared::models::notification::{Notification, Subscription, SubscriptionCreate};
use shared::models::post::{Post, PostCreate};
use shared::models::social_account::{SocialAccount, SocialAccountCreate};
use shared::models::thread::{Thread, ThreadCreate};
use shared::models::vote::{Vote, VoteCreate};
use shared::{Page, Pagination};
use uuid::Uuid;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

const JWT_SECRET: &[u8] = b"forum-self-test-secret";

pub fn mint_token(id: Uuid, role: ActorRole) -> String {
    let now = Utc::now().timestamp() as usize;
    let claims = TokenClaims {
        sub: id.to_string(),
        exp: now + 3600,
        iat: now,
        role: Some(role),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET),
    )
    .expect("encode test token")
}

/// Identity of the caller, from a token minted by [`mint_token`].
pub fn bearer_subject(request: &Request) -> Uuid {
    let token = request
        .headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .expect("request carries a bearer token");
    let claims = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(JWT_SECRET),
        &Validation::default(),
    )
    .expect("token minted by the mock")
    .claims;
    claims.sub.parse().expect("subject is a uuid")
}

pub fn authorized_actor(email: &str, username: &str, role: ActorRole) -> AuthorizedActor {
    let id = Uuid::new_v4();
    let now = Utc::now();
    AuthorizedActor {
        id,
        email: email.to_string(),
        username: username.to_string(),
        role,
        created_at: now,
        token: AuthorizationToken {
            access: mint_token(id, role),
            refresh: Uuid::new_v4().to_string(),
            expired_at: now + chrono::Duration::hours(1),
            refreshable_until: now + chrono::Duration::days(7),
        },
    }
}

fn role_in_path(path: &str) -> ActorRole {
    match path.split('/').nth(2) {
        Some("moderator") => ActorRole::Moderator,
        Some("admin") => ActorRole::Administrator,
        _ => ActorRole::Member,
    }
}

/// Path segment `index` parsed as an id, e.g. the thread of `/threads/{id}/posts`.
fn path_id(request: &Request, index: usize) -> Uuid {
    request
        .url
        .path()
        .split('/')
        .nth(index)
        .and_then(|segment| segment.parse().ok())
        .expect("id in path")
}

/// Answers with `status` and whatever the closure builds from the request.
pub struct Reply<F> {
    status: u16,
    build: F,
}

impl<F> Reply<F>
where
    F: Fn(&Request) -> Value + Send + Sync,
{
    pub fn new(status: u16, build: F) -> Self {
        Self { status, build }
    }
}

impl<F> Respond for Reply<F>
where
    F: Fn(&Request) -> Value + Send + Sync,
{
    fn respond(&self, request: &Request) -> ResponseTemplate {
        ResponseTemplate::new(self.status).set_body_json((self.build)(request))
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).expect("entity serializes")
}

pub fn join_reply(request: &Request) -> Value {
    let body: JoinRequest = request.body_json().expect("join body");
    to_json(&authorized_actor(
        &body.email,
        &body.username,
        role_in_path(request.url.path()),
    ))
}

pub fn board_reply(request: &Request) -> Value {
    let body: BoardCreate = request.body_json().expect("board body");
    let now = Utc::now();
    to_json(&Board {
        id: Uuid::new_v4(),
        name: body.name,
        description: body.description,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    })
}

pub fn thread_reply(request: &Request) -> Value {
    let body: ThreadCreate = request.body_json().expect("thread body");
    let now = Utc::now();
    to_json(&Thread {
        id: Uuid::new_v4(),
        board_id: body.board_id,
        topic_id: body.topic_id,
        author_id: bearer_subject(request),
        title: body.title,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    })
}

pub fn post_reply(request: &Request) -> Value {
    let body: PostCreate = request.body_json().expect("post body");
    let now = Utc::now();
    to_json(&Post {
        id: Uuid::new_v4(),
        thread_id: path_id(request, 2),
        author_id: bearer_subject(request),
        title: body.title,
        body: body.body,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    })
}

pub fn comment_reply(request: &Request) -> Value {
    let body: CommentCreate = request.body_json().expect("comment body");
    let now = Utc::now();
    to_json(&Comment {
        id: Uuid::new_v4(),
        post_id: path_id(request, 2),
        parent_id: body.parent_id,
        author_id: bearer_subject(request),
        body: body.body,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    })
}

pub fn vote_reply(request: &Request) -> Value {
    let body: VoteCreate = request.body_json().expect("vote body");
    to_json(&Vote {
        id: Uuid::new_v4(),
        post_id: path_id(request, 2),
        voter_id: bearer_subject(request),
        vote_type: body.vote_type,
        created_at: Utc::now(),
    })
}

pub fn subscription_reply(request: &Request) -> Value {
    let body: SubscriptionCreate = request.body_json().expect("subscription body");
    to_json(&Subscription {
        id: Uuid::new_v4(),
        member_id: bearer_subject(request),
        target_type: body.target_type,
        target_id: body.target_id,
        created_at: Utc::now(),
    })
}

pub fn notification(id: Uuid, recipient_id: Uuid) -> Notification {
    Notification {
        id,
        recipient_id,
        kind: "reply".to_string(),
        title: "New reply".to_string(),
        body: "Someone replied to a post you follow".to_string(),
        read_at: None,
        created_at: Utc::now(),
    }
}

/// First page of a search holding all of `data`.
pub fn single_page<T: serde::Serialize>(data: Vec<T>, limit: u32) -> Value {
    let records = data.len() as u64;
    to_json(&Page {
        pagination: Pagination {
            current: 1,
            limit,
            records,
            pages: records.div_ceil(u64::from(limit)) as u32,
        },
        data,
    })
}

pub fn social_account_reply(request: &Request) -> Value {
    let body: SocialAccountCreate = request.body_json().expect("social account body");
    to_json(&SocialAccount {
        id: Uuid::new_v4(),
        member_id: bearer_subject(request),
        provider: body.provider,
        social_id: body.social_id,
        created_at: Utc::now(),
    })
}

/// Last entity a search responder handed out, for the matching read endpoint.
#[derive(Clone, Default)]
pub struct Recorded(Arc<Mutex<Option<Value>>>);

impl Recorded {
    pub fn keep<T: serde::Serialize>(&self, entity: &T) {
        *self.0.lock().expect("recorded entity lock") = Some(to_json(entity));
    }

    pub fn last(&self) -> Value {
        let entity = self.0.lock().expect("recorded entity lock");
        entity.clone().unwrap_or(Value::Null)
    }
}

pub fn not_found() -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(serde_json::json!({ "message": "not found" }))
}

pub struct MockForum {
    pub server: MockServer,
}

impl MockForum {
    pub async fn start() -> Self {
        harness::logging::init_for_tests();
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn config(&self) -> E2EConfig {
        E2EConfig::development()
            .with_base_url(self.server.uri())
            .with_timeout(Duration::from_secs(10))
    }

    pub async fn accept_joins(&self) -> &Self {
        Mock::given(method("POST"))
            .and(path_regex(r"^/auth/(member|moderator|admin)/join$"))
            .respond_with(Reply::new(201, join_reply))
            .mount(&self.server)
            .await;
        self
    }

    pub async fn accept_boards(&self) -> &Self {
        Mock::given(method("POST"))
            .and(path("/boards"))
            .respond_with(Reply::new(201, board_reply))
            .mount(&self.server)
            .await;
        self
    }

    pub async fn accept_threads(&self) -> &Self {
        Mock::given(method("POST"))
            .and(path("/threads"))
            .respond_with(Reply::new(201, thread_reply))
            .mount(&self.server)
            .await;
        self
    }

    pub async fn accept_posts(&self) -> &Self {
        Mock::given(method("POST"))
            .and(path_regex(r"^/threads/[^/]+/posts$"))
            .respond_with(Reply::new(201, post_reply))
            .mount(&self.server)
            .await;
        self
    }

    pub async fn accept_comments(&self) -> &Self {
        Mock::given(method("POST"))
            .and(path_regex(r"^/posts/[^/]+/comments$"))
            .respond_with(Reply::new(201, comment_reply))
            .mount(&self.server)
            .await;
        self
    }

    pub async fn accept_votes(&self) -> &Self {
        Mock::given(method("POST"))
            .and(path_regex(r"^/posts/[^/]+/votes$"))
            .respond_with(Reply::new(201, vote_reply))
            .mount(&self.server)
            .await;
        self
    }

    pub async fn accept_subscriptions(&self) -> &Self {
        Mock::given(method("POST"))
            .and(path("/subscriptions"))
            .respond_with(Reply::new(201, subscription_reply))
            .mount(&self.server)
            .await;
        self
    }

    /// Joins, boards, threads and posts: the chain most scenarios set up first.
    pub async fn accept_discussions(&self) -> &Self {
        self.accept_joins().await;
        self.accept_boards().await;
        self.accept_threads().await;
        self.accept_posts().await
    }
}
