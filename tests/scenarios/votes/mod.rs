use harness::{
    assert_equals, assert_page, assert_predicate, expect_error, fan_out, validated, E2EConfig,
    ScenarioResult, TestTimer,
};
use shared::models::vote::{VoteCreate, VoteSearch, VoteType};
use shared::PageRequest;

use crate::setup::Discussion;

pub async fn test_upvote_post(config: E2EConfig) -> ScenarioResult<()> {
    let timer = TestTimer::start();
    let discussion = Discussion::open(&config).await?;
    let voter = discussion.forum.member().await?;
    let post_id = discussion.post.id;

    let vote = validated(voter.connection().cast_vote(
        post_id,
        &VoteCreate {
            vote_type: VoteType::Up,
        },
    ))
    .await?;
    assert_equals("vote post", post_id, vote.post_id)?;
    assert_equals("voter", voter.id(), vote.voter_id)?;
    assert_equals("vote type", VoteType::Up, vote.vote_type)?;

    let request = PageRequest::new(1, 10);
    let search = VoteSearch {
        page: request,
        vote_type: Some(VoteType::Up),
    };
    let page = validated(voter.connection().search_votes(post_id, &search)).await?;
    assert_page("up votes", &page, &request)?;
    assert_predicate("vote listed", page.data.iter().any(|v| v.id == vote.id))?;

    timer.check_within(config.timeout)
}

/// One vote per member and post
pub async fn test_duplicate_vote_rejected(config: E2EConfig) -> ScenarioResult<()> {
    let timer = TestTimer::start();
    let discussion = Discussion::open(&config).await?;
    let voter = discussion.forum.member().await?;
    let post_id = discussion.post.id;

    let body = VoteCreate {
        vote_type: VoteType::Down,
    };
    validated(voter.connection().cast_vote(post_id, &body)).await?;
    expect_error("vote twice", voter.connection().cast_vote(post_id, &body)).await?;

    timer.check_within(config.timeout)
}

pub async fn test_votes_from_many_members(config: E2EConfig) -> ScenarioResult<()> {
    let timer = TestTimer::start();
    let discussion = Discussion::open(&config).await?;
    let forum = &discussion.forum;
    let post_id = discussion.post.id;

    let votes = fan_out(4, |_| async move {
        let voter = forum.member().await?;
        validated(voter.connection().cast_vote(
            post_id,
            &VoteCreate {
                vote_type: VoteType::Up,
            },
        ))
        .await
    })
    .await?;

    let request = PageRequest::new(1, 10);
    let search = VoteSearch {
        page: request,
        ..Default::default()
    };
    let connection = discussion.author.connection();
    let page = validated(connection.search_votes(post_id, &search)).await?;
    assert_page("votes", &page, &request)?;
    assert_equals(
        "votes recorded",
        votes.len() as u64,
        page.pagination.records,
    )?;

    timer.check_within(config.timeout)
}

pub async fn test_retract_vote_twice_rejected(config: E2EConfig) -> ScenarioResult<()> {
    let timer = TestTimer::start();
    let discussion = Discussion::open(&config).await?;
    let voter = discussion.forum.member().await?;
    let post_id = discussion.post.id;

    let vote = validated(voter.connection().cast_vote(
        post_id,
        &VoteCreate {
            vote_type: VoteType::Up,
        },
    ))
    .await?;
    validated(voter.connection().retract_vote(post_id, vote.id)).await?;
    expect_error(
        "retract the vote again",
        voter.connection().retract_vote(post_id, vote.id),
    )
    .await?;

    timer.check_within(config.timeout)
}
