use harness::{
    assert_equals, assert_page, assert_predicate, expect_error, fan_out, fixtures, payloads,
    validated, E2EConfig, ScenarioResult, TestTimer,
};
use shared::models::thread::{ThreadSearch, ThreadUpdate};
use shared::PageRequest;

use crate::setup::{self, Forum};

/// A member opens a thread and is recorded as its author
pub async fn test_member_creates_thread(config: E2EConfig) -> ScenarioResult<()> {
    let timer = TestTimer::start();
    let forum = Forum::open(&config).await?;
    let board = forum.board().await?;
    let topic = validated(
        forum
            .admin
            .connection()
            .create_topic(board.id, &payloads::topic_create()),
    )
    .await?;
    let member = forum.member().await?;

    let request = payloads::thread_create(board.id, Some(topic.id));
    let thread = validated(member.connection().create_thread(&request)).await?;
    assert_equals("thread author", member.id(), thread.author_id)?;
    assert_equals("thread board", board.id, thread.board_id)?;
    assert_equals("thread topic", Some(topic.id), thread.topic_id)?;
    assert_equals("thread title", &request.title, &thread.title)?;

    let read = validated(member.connection().get_thread(thread.id)).await?;
    assert_equals("thread read back", &thread, &read)?;

    timer.check_within(config.timeout)
}

pub async fn test_thread_in_unknown_board_rejected(config: E2EConfig) -> ScenarioResult<()> {
    let timer = TestTimer::start();
    let forum = Forum::open(&config).await?;
    let member = forum.member().await?;

    expect_error(
        "thread under a missing board",
        member
            .connection()
            .create_thread(&payloads::thread_create(fixtures::uuid(), None)),
    )
    .await?;

    timer.check_within(config.timeout)
}

pub async fn test_author_updates_thread(config: E2EConfig) -> ScenarioResult<()> {
    let timer = TestTimer::start();
    let forum = Forum::open(&config).await?;
    let board = forum.board().await?;
    let author = forum.member().await?;
    let thread = setup::thread(&author, board.id).await?;

    let update = ThreadUpdate {
        title: Some(fixtures::title()),
    };
    let updated = validated(author.connection().update_thread(thread.id, &update)).await?;
    assert_equals("updated title", update.title.as_ref(), Some(&updated.title))?;
    assert_equals("author unchanged", author.id(), updated.author_id)?;

    timer.check_within(config.timeout)
}

/// Only the author may edit a thread
pub async fn test_other_member_cannot_update_thread(config: E2EConfig) -> ScenarioResult<()> {
    let timer = TestTimer::start();
    let forum = Forum::open(&config).await?;
    let board = forum.board().await?;
    let author = forum.member().await?;
    let intruder = forum.member().await?;
    let thread = setup::thread(&author, board.id).await?;

    let update = ThreadUpdate {
        title: Some(fixtures::title()),
    };
    expect_error(
        "another member edits the thread",
        intruder.connection().update_thread(thread.id, &update),
    )
    .await?;

    timer.check_within(config.timeout)
}

pub async fn test_thread_search_by_author(config: E2EConfig) -> ScenarioResult<()> {
    let timer = TestTimer::start();
    let forum = Forum::open(&config).await?;
    let board = forum.board().await?;
    let author = forum.member().await?;
    let created = fan_out(3, |_| setup::thread(&author, board.id)).await?;

    let request = PageRequest::new(1, 2);
    let search = ThreadSearch {
        page: request,
        author_id: Some(author.id()),
        ..Default::default()
    };
    let page = validated(author.connection().search_threads(&search)).await?;
    assert_page("threads by author", &page, &request)?;
    assert_equals(
        "threads recorded",
        created.len() as u64,
        page.pagination.records,
    )?;
    assert_predicate(
        "every thread belongs to the author",
        page.data.iter().all(|t| t.author_id == author.id()),
    )?;

    timer.check_within(config.timeout)
}

pub async fn test_thread_double_delete_rejected(config: E2EConfig) -> ScenarioResult<()> {
    let timer = TestTimer::start();
    let forum = Forum::open(&config).await?;
    let board = forum.board().await?;
    let author = forum.member().await?;
    let thread = setup::thread(&author, board.id).await?;

    validated(author.connection().delete_thread(thread.id)).await?;
    expect_error(
        "delete the thread again",
        author.connection().delete_thread(thread.id),
    )
    .await?;

    timer.check_within(config.timeout)
}
