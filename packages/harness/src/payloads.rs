//! Request bodies filled with random, schema-valid data.

use shared::models::appeal::AppealCreate;
use shared::models::attachment::AttachmentCreate;
use shared::models::auth::requests::{JoinRequest, LoginRequest};
use shared::models::board::BoardCreate;
use shared::models::comment::CommentCreate;
use shared::models::moderation::{ModerationActionCreate, ModerationActionType};
use shared::models::post::PostCreate;
use shared::models::report::ReportCreate;
use shared::models::social_account::SocialAccountCreate;
use shared::models::thread::ThreadCreate;
use shared::models::topic::TopicCreate;
use uuid::Uuid;

use crate::fixtures;

pub const SOCIAL_PROVIDERS: [&str; 4] = ["google", "github", "apple", "kakao"];

pub fn join_request() -> JoinRequest {
    JoinRequest {
        email: fixtures::email(),
        username: fixtures::username(),
        password: fixtures::password(),
        display_name: Some(fixtures::title()),
    }
}

pub fn login_request(join: &JoinRequest) -> LoginRequest {
    LoginRequest {
        email: join.email.clone(),
        password: join.password.clone(),
    }
}

pub fn board_create() -> BoardCreate {
    BoardCreate {
        // Board names are unique.
        name: format!("{} {}", fixtures::title(), fixtures::alphanumeric(6)),
        description: Some(fixtures::sentence()),
    }
}

pub fn topic_create() -> TopicCreate {
    TopicCreate {
        name: format!("{} {}", fixtures::title(), fixtures::alphanumeric(4)),
        description: None,
    }
}

pub fn thread_create(board_id: Uuid, topic_id: Option<Uuid>) -> ThreadCreate {
    ThreadCreate {
        board_id,
        topic_id,
        title: fixtures::title(),
    }
}

pub fn post_create() -> PostCreate {
    PostCreate {
        title: fixtures::title(),
        body: fixtures::paragraph(),
    }
}

pub fn comment_create() -> CommentCreate {
    CommentCreate {
        body: fixtures::sentence(),
        parent_id: None,
    }
}

pub fn reply_create(parent_id: Uuid) -> CommentCreate {
    CommentCreate {
        body: fixtures::sentence(),
        parent_id: Some(parent_id),
    }
}

pub fn attachment_create() -> AttachmentCreate {
    AttachmentCreate {
        file_name: format!("{}.png", fixtures::alphanumeric(10).to_lowercase()),
        file_url: fixtures::url(),
        mime_type: "image/png".to_string(),
        size_bytes: fixtures::integer(1_024..=1_048_576) as u64,
    }
}

pub fn report_post(post_id: Uuid) -> ReportCreate {
    ReportCreate::for_post(post_id, fixtures::sentence())
}

pub fn report_comment(comment_id: Uuid) -> ReportCreate {
    ReportCreate::for_comment(comment_id, fixtures::sentence())
}

pub fn moderate_post(
    post_id: Uuid,
    report_id: Option<Uuid>,
    action_type: ModerationActionType,
) -> ModerationActionCreate {
    ModerationActionCreate {
        report_id,
        target_post_id: Some(post_id),
        target_comment_id: None,
        target_member_id: None,
        action_type,
        reason: fixtures::sentence(),
    }
}

pub fn appeal_create(moderation_action_id: Uuid) -> AppealCreate {
    AppealCreate {
        moderation_action_id,
        reason: fixtures::paragraph(),
    }
}

pub fn social_account_create() -> SocialAccountCreate {
    SocialAccountCreate {
        provider: fixtures::pick(SOCIAL_PROVIDERS).to_string(),
        social_id: fixtures::alphanumeric(21),
    }
}
